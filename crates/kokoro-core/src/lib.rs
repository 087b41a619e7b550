pub mod breathing;
pub mod exercise;
pub mod journal;
pub mod status;
