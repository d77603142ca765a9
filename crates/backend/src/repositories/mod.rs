pub mod booking;
pub mod mentor;
pub mod student;
