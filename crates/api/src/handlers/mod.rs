pub mod chat;
pub mod dashboard;
pub mod export;
pub mod project;
