//! The fixed set of canned bot replies.

use crate::core::error::MicError;

const DEFAULT_REPLIES: [&str; 7] = [
    "Paracetamol is generally safe with ibuprofen when taken as directed, but avoid exceeding recommended doses of either medication.",
    "Avoid this medicine during the first trimester of pregnancy unless specifically prescribed by your healthcare provider.",
    "Always consult your doctor before combining medications, especially if you have existing health conditions.",
    "This medication should be taken with food to reduce the risk of stomach irritation.",
    "If you experience any unusual symptoms while taking this medication, contact your healthcare provider immediately.",
    "Store medications in a cool, dry place away from children and pets.",
    "Never share prescription medications with others, even if they have similar symptoms.",
];

/// Ordered, non-empty list of candidate replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseCorpus {
    replies: Vec<String>,
}

impl Default for ResponseCorpus {
    fn default() -> Self {
        Self {
            replies: DEFAULT_REPLIES.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl ResponseCorpus {
    /// Builds a corpus from `replies`. An empty list, or any reply that is
    /// blank after trimming, is rejected.
    pub fn new(replies: Vec<String>) -> Result<Self, MicError> {
        if replies.is_empty() {
            return Err(MicError::EmptyCorpus);
        }
        if let Some(index) = replies.iter().position(|r| r.trim().is_empty()) {
            return Err(MicError::BlankReply { index });
        }
        Ok(Self { replies })
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.replies.get(index).map(String::as_str)
    }

    pub fn contains(&self, reply: &str) -> bool {
        self.replies.iter().any(|r| r == reply)
    }

    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    /// Always at least one.
    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
