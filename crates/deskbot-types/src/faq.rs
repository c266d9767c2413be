//! FAQ knowledge base types.
//!
//! The FAQ book is the fixed set of question/answer pairs every generated
//! reply is constrained to. On disk it is a JSON file of the shape
//! `{"faqs": [{"question": "...", "answer": "..."}, ...]}`.

use serde::{Deserialize, Serialize};

/// One question/answer pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// The full FAQ knowledge base.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqBook {
    pub faqs: Vec<FaqEntry>,
}

impl FaqBook {
    pub fn len(&self) -> usize {
        self.faqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faqs.is_empty()
    }
}
