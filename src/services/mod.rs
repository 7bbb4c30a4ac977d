/// Health-check HTTP endpoints.
pub mod health;
/// The periodic reminder sweep service.
pub mod reminder;
