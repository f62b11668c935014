pub mod biography;
pub mod journal;
pub mod mood;
pub mod rate_limit;

pub use biography::BiographyService;
pub use journal::JournalService;
pub use mood::{MoodAnalysis, MoodService};
pub use rate_limit::{client_identifier, FixedWindowLimiter, RateDecision};
