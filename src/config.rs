use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub sheet_id: String,
    pub sheet_name: String,
    pub sheets_api_key: String,
    pub database_url: String,
    pub timezone: Tz,
    pub http_port: u16,
    /// When set, the dispatcher runs behind a webhook instead of long-polling.
    pub webhook: Option<WebhookConfig>,
}

#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = required("TELEGRAM_BOT_TOKEN")?;
        let sheet_id = required("SHEET_ID")?;
        let sheets_api_key = required("SHEETS_API_KEY")?;

        let sheet_name = non_empty_or(env::var("SHEET_NAME").ok(), "Schedule");
        let database_url = non_empty_or(env::var("DATABASE_URL").ok(), "sqlite:./data/schedbot.db");

        let timezone: Tz = non_empty_or(env::var("TIMEZONE").ok(), "Europe/Kyiv")
            .parse()
            .map_err(|_| anyhow!("Invalid TIMEZONE"))?;

        let http_port = non_empty_or(env::var("HTTP_PORT").ok(), "3000")
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let webhook = match env::var("WEBHOOK_URL") {
            Ok(url) if !url.trim().is_empty() => {
                let port = non_empty_or(env::var("WEBHOOK_PORT").ok(), "8443")
                    .trim()
                    .parse()
                    .map_err(|_| anyhow!("Invalid WEBHOOK_PORT"))?;
                Some(WebhookConfig {
                    url: url.trim().to_string(),
                    port,
                })
            }
            _ => None,
        };

        Ok(Config {
            telegram_bot_token: token,
            sheet_id,
            sheet_name,
            sheets_api_key,
            database_url,
            timezone,
            http_port,
            webhook,
        })
    }
}

fn required(name: &str) -> Result<String> {
    let value = env::var(name).map_err(|_| anyhow!("{name} must be set"))?;
    if value.trim().is_empty() {
        return Err(anyhow!("{name} must be set"));
    }
    Ok(value)
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}
