//! `jobdeck` - Keep an ordered, persisted deck of job-posting records
//!
//! This library provides the core functionality for editing a job-posting
//! record field-by-field and storing submitted records durably in a local
//! key-value slot.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod record;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use form::{Field, FieldValue, FormState};
pub use logging::init_logging;
pub use record::Record;
pub use store::{RecordStore, Slot};
