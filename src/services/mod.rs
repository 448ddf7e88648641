pub mod analytics;
pub mod insight;
pub mod progress;
pub mod prompts;
