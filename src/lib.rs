//! # schedbot
//!
//! A Telegram bot that serves a class schedule straight from a Google Sheets
//! worksheet: today/tomorrow/week views, per-subject listings with a
//! paginated menu, upcoming lessons, and opt-in reminders fired 10 minutes
//! before each lesson.
//!
//! The schedule core (`schedule`) is pure data transformation; transport,
//! persistence and spreadsheet access live behind their own modules.

/// Bot command handlers, dispatch schema and keyboards
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Subscription store: models, connection, migrations
pub mod database;
/// The pure schedule core: normalization, querying, formatting, sweep
pub mod schedule;
/// Background services: reminders and health checks
pub mod services;
/// Read-only Google Sheets access
pub mod sheets;
/// Message delivery and logging helpers
pub mod utils;
