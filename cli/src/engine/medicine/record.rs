//! Medicine record model and the fixed "not available" texts.

use serde::{Deserialize, Serialize};

/// Fallback text for the `use` field of an unknown medicine.
pub const UNAVAILABLE_USE: &str = "Information not available in our database. Please consult your healthcare provider or pharmacist for detailed information about this medication.";
/// Fallback text for the `sideEffects` field of an unknown medicine.
pub const UNAVAILABLE_SIDE_EFFECTS: &str = "Side effects information not available. Please refer to the medication packaging or consult your healthcare provider.";
/// Fallback text for the `precautions` field of an unknown medicine.
pub const UNAVAILABLE_PRECAUTIONS: &str = "Precautions information not available. Always follow the instructions provided by your healthcare provider or on the medication packaging.";

/// Descriptive fields shown for a medicine.
///
/// All four fields are always present. Serializes as
/// `{"name", "use", "sideEffects", "precautions"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineRecord {
    /// Display name. Canonical for catalog entries, the raw input otherwise.
    pub name: String,
    /// Therapeutic purpose.
    #[serde(rename = "use")]
    pub usage: String,
    pub side_effects: String,
    pub precautions: String,
}

impl MedicineRecord {
    pub fn new(
        name: impl Into<String>,
        usage: impl Into<String>,
        side_effects: impl Into<String>,
        precautions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            usage: usage.into(),
            side_effects: side_effects.into(),
            precautions: precautions.into(),
        }
    }

    /// Record returned for a medicine the catalog does not know.
    ///
    /// `raw_name` is kept verbatim, surrounding whitespace and case included.
    pub fn unavailable(raw_name: &str) -> Self {
        Self::new(
            raw_name,
            UNAVAILABLE_USE,
            UNAVAILABLE_SIDE_EFFECTS,
            UNAVAILABLE_PRECAUTIONS,
        )
    }

    /// True when the descriptive fields are the fallback texts.
    pub fn is_unavailable(&self) -> bool {
        self.usage == UNAVAILABLE_USE
            && self.side_effects == UNAVAILABLE_SIDE_EFFECTS
            && self.precautions == UNAVAILABLE_PRECAUTIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_record_keeps_raw_name() {
        let record = MedicineRecord::unavailable("  VitaminZ ");
        assert_eq!(record.name, "  VitaminZ ");
        assert!(record.is_unavailable());
    }

    #[test]
    fn fallback_texts_are_distinct() {
        assert_ne!(UNAVAILABLE_USE, UNAVAILABLE_SIDE_EFFECTS);
        assert_ne!(UNAVAILABLE_SIDE_EFFECTS, UNAVAILABLE_PRECAUTIONS);
        assert_ne!(UNAVAILABLE_USE, UNAVAILABLE_PRECAUTIONS);
    }

    #[test]
    fn serializes_with_page_field_names() {
        let record = MedicineRecord::new("Test", "u", "s", "p");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Test",
                "use": "u",
                "sideEffects": "s",
                "precautions": "p"
            })
        );
    }
}
