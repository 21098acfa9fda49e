//! Project record model and field access.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single project record as loaded from the catalogue resource.
///
/// Every field is defaulted: an entry missing a key deserializes with that
/// field empty instead of failing the whole load. Records are immutable once
/// loaded and carry no identity beyond structural equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Period", default)]
    pub period: String,
    #[serde(rename = "Entity", default)]
    pub entity: String,
    #[serde(rename = "Function", default)]
    pub function: String,
    #[serde(rename = "Monetization", default)]
    pub monetization: String,
    #[serde(rename = "Outputs", default)]
    pub outputs: String,
    #[serde(rename = "Business Value Realized", default)]
    pub business_value: String,
}

/// The seven record fields, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKey {
    Name,
    Period,
    Entity,
    Function,
    Monetization,
    Outputs,
    #[serde(rename = "Business Value Realized")]
    BusinessValue,
}

impl FieldKey {
    /// All fields in table column order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Period,
        Self::Entity,
        Self::Function,
        Self::Monetization,
        Self::Outputs,
        Self::BusinessValue,
    ];

    /// Canonical title-cased field name as it appears in the source JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Period => "Period",
            Self::Entity => "Entity",
            Self::Function => "Function",
            Self::Monetization => "Monetization",
            Self::Outputs => "Outputs",
            Self::BusinessValue => "Business Value Realized",
        }
    }

    /// Borrow the record's value for this field.
    #[must_use]
    pub fn value(self, record: &ProjectRecord) -> &str {
        match self {
            Self::Name => &record.name,
            Self::Period => &record.period,
            Self::Entity => &record.entity,
            Self::Function => &record.function,
            Self::Monetization => &record.monetization,
            Self::Outputs => &record.outputs,
            Self::BusinessValue => &record.business_value,
        }
    }

    /// Parse a lower-cased control identifier (`"period"`, `"outputs"`)
    /// back into a field key. Matching is case-insensitive.
    #[must_use]
    pub fn from_control_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldKey, ProjectRecord};

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "Name": "Atlas Revamp",
            "Period": "Q1 2024",
            "Entity": "Studio",
            "Function": "Engineering",
            "Monetization": "Paid",
            "Outputs": "Web App",
            "Business Value Realized": "Cut page load by 40%"
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).expect("parse");
        assert_eq!(record.name, "Atlas Revamp");
        assert_eq!(record.business_value, "Cut page load by 40%");
    }

    #[test]
    fn missing_fields_degrade_to_empty() {
        let json = r#"{"Name": "Orphan"}"#;
        let record: ProjectRecord = serde_json::from_str(json).expect("parse");
        assert_eq!(record.name, "Orphan");
        assert_eq!(record.period, "");
        assert_eq!(record.monetization, "");
    }

    #[test]
    fn field_value_accessor_covers_all_fields() {
        let record = ProjectRecord {
            name: "n".into(),
            period: "p".into(),
            entity: "e".into(),
            function: "f".into(),
            monetization: "m".into(),
            outputs: "o".into(),
            business_value: "v".into(),
        };
        let values: Vec<&str> = FieldKey::ALL
            .into_iter()
            .map(|field| field.value(&record))
            .collect();
        assert_eq!(values, vec!["n", "p", "e", "f", "m", "o", "v"]);
    }

    #[test]
    fn control_id_round_trips() {
        assert_eq!(
            FieldKey::from_control_id("period"),
            Some(FieldKey::Period)
        );
        assert_eq!(
            FieldKey::from_control_id("Monetization"),
            Some(FieldKey::Monetization)
        );
        assert_eq!(
            FieldKey::from_control_id("business value realized"),
            Some(FieldKey::BusinessValue)
        );
        assert_eq!(FieldKey::from_control_id("velocity"), None);
    }

    #[test]
    fn serializes_with_original_keys() {
        let record = ProjectRecord {
            name: "Atlas".into(),
            business_value: "shipped".into(),
            ..ProjectRecord::default()
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("\"Business Value Realized\":\"shipped\""));
    }
}
