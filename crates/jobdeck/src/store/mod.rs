//! Record storage for jobdeck.
//!
//! This module holds the ordered sequence of saved records and mirrors it
//! into a persistent [`Slot`] on every mutation. The sequence is the sole
//! owner of saved records; callers append independent snapshots and remove
//! entries by position.

pub mod schema;
mod slot;

pub use slot::Slot;

use tracing::{debug, warn};

use crate::error::Result;
use crate::record::Record;

/// Fixed slot key under which the serialized record sequence lives.
pub const RECORDS_KEY: &str = "jobCards";

/// The ordered, persisted sequence of saved records.
///
/// Every mutation rewrites the full sequence to the slot before
/// returning; there is no batching or diffing. Records have no identity
/// beyond their index, so removal is positional and later entries shift
/// down.
#[derive(Debug)]
pub struct RecordStore {
    /// Durable backing storage, injected at construction.
    slot: Slot,
    /// The in-memory sequence, kept in sync with the slot.
    records: Vec<Record>,
}

impl RecordStore {
    /// Open a store over the given slot, loading any saved sequence.
    ///
    /// An absent slot key yields an empty store. A malformed payload is
    /// logged and treated as empty rather than failing the whole surface;
    /// the slot itself is left untouched until the next mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read.
    pub fn open(slot: Slot) -> Result<Self> {
        let records = match slot.get(RECORDS_KEY)? {
            None => Vec::new(),
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(records) => records,
                Err(err) => {
                    warn!("Discarding malformed record payload: {err}");
                    Vec::new()
                }
            },
        };

        debug!("Loaded {} saved records", records.len());
        Ok(Self { slot, records })
    }

    /// Append a record to the end of the sequence and persist.
    ///
    /// Returns the index the record was saved at.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the sequence fails.
    pub fn append(&mut self, record: Record) -> Result<usize> {
        self.records.push(record);
        self.persist()?;

        let index = self.records.len() - 1;
        debug!("Appended record at index {index}");
        Ok(index)
    }

    /// Remove the record at `index`, shifting later entries down, and
    /// persist.
    ///
    /// Returns `true` if a record was removed. An out-of-range index is a
    /// logged no-op returning `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the sequence fails.
    pub fn remove_at(&mut self, index: usize) -> Result<bool> {
        if index >= self.records.len() {
            warn!(
                "Ignoring removal at index {index}: only {} records",
                self.records.len()
            );
            return Ok(false);
        }

        self.records.remove(index);
        self.persist()?;

        debug!("Removed record at index {index}");
        Ok(true)
    }

    /// The saved records, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of saved records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the full sequence and write it to the slot.
    fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.records)?;
        self.slot.set(RECORDS_KEY, &payload)
    }
}
