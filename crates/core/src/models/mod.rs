pub mod booking;
pub mod mentor;
pub mod slot;
pub mod student;
