/// Mapping of domain errors onto HTTP responses
pub mod error_handling;
/// Student session extraction
pub mod session;
