use tracing::{error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, chat_id: i64) {
    info!("CMD_START: {} in chat {}", command, chat_id);
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, chat_id: i64, error: &str) {
    error!("CMD_ERROR: {} in chat {} - {}", command, chat_id, error);
}

/// Logs a collaborator (spreadsheet/store) failure with consistent format
pub fn log_collaborator_error(operation: &str, error: &str) {
    error!("COLLAB_ERROR: {} failed: {}", operation, error);
}

/// Logs a per-recipient delivery failure with consistent format
pub fn log_delivery_failure(chat_id: i64, error: &str) {
    warn!("DELIVERY_FAIL: chat {} - {}", chat_id, error);
}
