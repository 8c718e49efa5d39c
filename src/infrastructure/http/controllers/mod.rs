pub mod health;
pub mod jmap;
