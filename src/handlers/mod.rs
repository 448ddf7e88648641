pub mod analytics;
pub mod challenges;
pub mod chat;
pub mod health;
pub mod mood;
pub mod progress;
pub mod stories;
