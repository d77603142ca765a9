pub mod calendar;
pub mod clock;
pub mod discovery;
pub mod errors;
pub mod models;
pub mod validation;
