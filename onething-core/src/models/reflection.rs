use serde::{Deserialize, Serialize};

/// A single journal entry as submitted by the client. Every field is
/// optional; the prompt formatter substitutes fixed placeholders for
/// anything missing. Unknown JSON fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalEntry {
    pub date: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub mood: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonthlyReflectionRequest {
    pub entries: Vec<JournalEntry>,
    /// Month label, e.g. "January 2025"
    pub month: String,
}

#[derive(Debug, Serialize)]
pub struct MonthlyReflectionResponse {
    pub summary: String,
    pub month: String,
}
