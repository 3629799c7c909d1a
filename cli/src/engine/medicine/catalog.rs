//! Fixed catalog of known medicines.

use super::record::MedicineRecord;
use std::collections::BTreeMap;

/// Normalizes a user-supplied medicine name into a catalog key.
///
/// Trims surrounding whitespace and lower-cases. Inner whitespace is kept, so
/// `"para cetamol"` does not match `"paracetamol"`.
pub fn normalize_key(raw_name: &str) -> String {
    raw_name.trim().to_lowercase()
}

/// Read-only mapping from normalized key to medicine record.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct MedicineCatalog {
    entries: BTreeMap<String, MedicineRecord>,
}

impl Default for MedicineCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl MedicineCatalog {
    /// The built-in catalog: paracetamol, ibuprofen and aspirin.
    pub fn seeded() -> Self {
        let records = [
            MedicineRecord::new(
                "Paracetamol",
                "Used to treat pain and reduce fever. Commonly used for headaches, muscle aches, arthritis, backaches, toothaches, colds, and fevers.",
                "Generally well-tolerated. Rare side effects may include nausea, stomach pain, loss of appetite, and skin rash. Overdose can cause serious liver damage.",
                "Do not exceed recommended dose. Avoid alcohol while taking this medication. Consult doctor if you have liver problems or are taking other medications containing paracetamol.",
            ),
            MedicineRecord::new(
                "Ibuprofen",
                "Anti-inflammatory medication used to reduce fever, pain, and inflammation. Effective for headaches, dental pain, menstrual cramps, muscle aches, and arthritis.",
                "May cause stomach upset, heartburn, dizziness, or drowsiness. Long-term use may increase risk of heart attack, stroke, or stomach bleeding.",
                "Take with food to reduce stomach irritation. Avoid if you have heart disease, high blood pressure, or stomach ulcers. Not recommended during pregnancy.",
            ),
            MedicineRecord::new(
                "Aspirin",
                "Used to reduce pain, fever, and inflammation. Also used in low doses to prevent heart attacks and strokes in high-risk patients.",
                "Common side effects include stomach irritation, heartburn, and nausea. May increase bleeding risk and cause allergic reactions in some people.",
                "Not suitable for children under 16 due to risk of Reye's syndrome. Avoid if you have bleeding disorders or are taking blood thinners.",
            ),
        ];

        let entries = records
            .into_iter()
            .map(|record| (normalize_key(&record.name), record))
            .collect();
        Self { entries }
    }

    /// Exact match on the normalized key.
    pub fn get(&self, raw_name: &str) -> Option<&MedicineRecord> {
        self.entries.get(&normalize_key(raw_name))
    }

    /// Canonical display names, ordered by key.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|record| record.name.as_str())
    }

    pub fn records(&self) -> impl Iterator<Item = &MedicineRecord> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
