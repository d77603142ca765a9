pub mod health;
pub mod mentor;
pub mod student;
