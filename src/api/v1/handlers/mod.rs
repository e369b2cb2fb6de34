pub mod content;
pub mod health;
