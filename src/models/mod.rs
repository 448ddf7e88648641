pub mod challenge;
pub mod chat;
pub mod mood;
pub mod progress;
pub mod story;
