pub mod reflection;
pub mod status;

pub use reflection::{JournalEntry, MonthlyReflectionRequest, MonthlyReflectionResponse};
pub use status::{StatusCheck, StatusCheckCreate};
