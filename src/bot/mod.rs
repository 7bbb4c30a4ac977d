/// Bot command definitions and per-command handlers.
pub mod commands;
/// Update dispatch schema and handlers.
pub mod handlers;
/// Inline keyboards.
pub mod keyboard;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::database::connection::DatabaseManager;
use crate::sheets::SheetsClient;

/// Shared handler dependencies: the subscription store, the spreadsheet
/// source, and the local timezone all day-level logic runs in.
#[derive(Clone)]
pub struct AppContext {
    pub db: DatabaseManager,
    pub sheets: SheetsClient,
    pub tz: Tz,
}

impl AppContext {
    pub fn new(db: DatabaseManager, sheets: SheetsClient, tz: Tz) -> Self {
        Self { db, sheets, tz }
    }

    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }

    pub fn now_local(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}
