pub mod draft;
pub mod health;
pub mod participants;
pub mod tournaments;
