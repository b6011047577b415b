//! Core record types for jobdeck.
//!
//! This module defines the persisted job-posting entry and the closed
//! catalogs the entry surface offers for its dropdown-style fields.

use serde::{Deserialize, Serialize};

/// Position levels the entry surface offers.
///
/// The empty string (field unset) is also valid; the record itself never
/// rejects values outside this list.
pub const POSITION_LEVELS: &[&str] = &["junior", "mid", "senior"];

/// Job types the entry surface offers.
pub const JOB_TYPES: &[&str] = &["full-time", "part-time", "contract"];

/// Skills the entry surface offers as toggles.
pub const SKILL_CATALOG: &[&str] = &["Python", "JavaScript", "React"];

/// A saved job-posting entry.
///
/// Every field is optional in the sense that its empty/false default is a
/// legal value. A record has no identity of its own; saved records are
/// addressed by their position in the store.
///
/// Serialized field names follow the wire format (`logoUrl`,
/// `companyName`, ...), which must round-trip exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Address of the company logo image; empty when not provided.
    pub logo_url: String,

    /// Company name, free-form.
    pub company_name: String,

    /// Whether the posting is marked as new.
    pub is_new: bool,

    /// Whether the posting is marked as featured.
    pub is_featured: bool,

    /// Position level; one of [`POSITION_LEVELS`] or empty for unset.
    pub position: String,

    /// Job type; one of [`JOB_TYPES`] or empty for unset.
    pub job_type: String,

    /// Location, free-form.
    pub location: String,

    /// Selected skills in toggle order. Duplicate-free by construction.
    pub skills: Vec<String>,
}

impl Record {
    /// Check whether the given skill is selected.
    #[must_use]
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Check whether a logo address was provided.
    #[must_use]
    pub fn has_logo(&self) -> bool {
        !self.logo_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_all_empty() {
        let record = Record::default();
        assert!(record.logo_url.is_empty());
        assert!(record.company_name.is_empty());
        assert!(!record.is_new);
        assert!(!record.is_featured);
        assert!(record.position.is_empty());
        assert!(record.job_type.is_empty());
        assert!(record.location.is_empty());
        assert!(record.skills.is_empty());
    }

    #[test]
    fn test_has_skill() {
        let record = Record {
            skills: vec!["Python".to_string(), "React".to_string()],
            ..Record::default()
        };
        assert!(record.has_skill("Python"));
        assert!(record.has_skill("React"));
        assert!(!record.has_skill("JavaScript"));
    }

    #[test]
    fn test_has_logo() {
        let mut record = Record::default();
        assert!(!record.has_logo());
        record.logo_url = "https://example.com/logo.png".to_string();
        assert!(record.has_logo());
    }

    #[test]
    fn test_wire_field_names() {
        let record = Record {
            logo_url: "logo.png".to_string(),
            company_name: "Acme".to_string(),
            is_new: true,
            is_featured: false,
            position: "junior".to_string(),
            job_type: "full-time".to_string(),
            location: "Remote".to_string(),
            skills: vec!["Python".to_string()],
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"logoUrl\""));
        assert!(json.contains("\"companyName\""));
        assert!(json.contains("\"isNew\""));
        assert!(json.contains("\"isFeatured\""));
        assert!(json.contains("\"position\""));
        assert!(json.contains("\"jobType\""));
        assert!(json.contains("\"location\""));
        assert!(json.contains("\"skills\""));
    }

    #[test]
    fn test_serde_round_trip() {
        let record = Record {
            logo_url: String::new(),
            company_name: "Globex".to_string(),
            is_new: false,
            is_featured: true,
            position: "senior".to_string(),
            job_type: "contract".to_string(),
            location: "Berlin".to_string(),
            skills: vec!["React".to_string(), "Python".to_string()],
        };

        let json = serde_json::to_string(&record).unwrap();
        let decoded: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, decoded);
    }

    #[test]
    fn test_decode_wire_payload() {
        let json = r#"{
            "logoUrl": "",
            "companyName": "Acme",
            "isNew": true,
            "isFeatured": false,
            "position": "mid",
            "jobType": "part-time",
            "location": "Remote",
            "skills": ["JavaScript", "React"]
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.company_name, "Acme");
        assert!(record.is_new);
        assert_eq!(record.position, "mid");
        assert_eq!(record.job_type, "part-time");
        assert_eq!(
            record.skills,
            vec!["JavaScript".to_string(), "React".to_string()]
        );
    }

    #[test]
    fn test_skill_order_preserved_through_serde() {
        let record = Record {
            skills: vec!["React".to_string(), "Python".to_string()],
            ..Record::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        let decoded: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.skills, record.skills);
    }

    #[test]
    fn test_catalogs() {
        assert_eq!(POSITION_LEVELS, &["junior", "mid", "senior"]);
        assert_eq!(JOB_TYPES, &["full-time", "part-time", "contract"]);
        assert_eq!(SKILL_CATALOG, &["Python", "JavaScript", "React"]);
    }

    #[test]
    fn test_out_of_catalog_values_accepted() {
        // The record itself never validates enum-like fields.
        let record = Record {
            position: "principal".to_string(),
            job_type: "internship".to_string(),
            ..Record::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        let decoded: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.position, "principal");
        assert_eq!(decoded.job_type, "internship");
    }
}
