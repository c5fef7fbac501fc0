/// Admin password checks
pub mod auth;
/// Mapping of domain errors to HTTP responses
pub mod error_handling;
