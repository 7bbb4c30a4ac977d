/// Consistent log-line helpers.
pub mod logging;
/// Chunked send-or-edit message delivery.
pub mod outbound;
