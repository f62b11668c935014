pub mod biography;
pub mod journal;
pub mod mood;
pub mod quote;

pub use biography::Biography;
pub use journal::{CreateJournalEntry, JournalEntry};
pub use mood::{Mood, MoodResult};
pub use quote::{Quote, QuoteSource};
