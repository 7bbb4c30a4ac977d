use schedbot::config::Config;
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn set_required_vars() {
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("SHEET_ID", "sheet-abc");
    env::set_var("SHEETS_API_KEY", "key-xyz");
}

fn clear_all_vars() {
    for name in [
        "TELEGRAM_BOT_TOKEN",
        "SHEET_ID",
        "SHEETS_API_KEY",
        "SHEET_NAME",
        "DATABASE_URL",
        "TIMEZONE",
        "HTTP_PORT",
        "WEBHOOK_URL",
        "WEBHOOK_PORT",
    ] {
        env::remove_var(name);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_all_vars();
    set_required_vars();
    env::set_var("SHEET_NAME", "Осінь 2025");
    env::set_var("DATABASE_URL", "sqlite:test.db");
    env::set_var("TIMEZONE", "Europe/Kyiv");
    env::set_var("HTTP_PORT", "8080");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.sheet_id, "sheet-abc");
    assert_eq!(config.sheets_api_key, "key-xyz");
    assert_eq!(config.sheet_name, "Осінь 2025");
    assert_eq!(config.database_url, "sqlite:test.db");
    assert_eq!(config.timezone, chrono_tz::Europe::Kyiv);
    assert_eq!(config.http_port, 8080);
    assert!(config.webhook.is_none());

    clear_all_vars();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_all_vars();
    set_required_vars();

    let config = Config::from_env().unwrap();

    assert_eq!(config.sheet_name, "Schedule");
    assert_eq!(config.database_url, "sqlite:./data/schedbot.db");
    assert_eq!(config.timezone, chrono_tz::Europe::Kyiv);
    assert_eq!(config.http_port, 3000);
    assert!(config.webhook.is_none());

    clear_all_vars();
}

#[test]
fn test_config_missing_token_fails() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_all_vars();
    env::set_var("SHEET_ID", "sheet-abc");
    env::set_var("SHEETS_API_KEY", "key-xyz");

    assert!(Config::from_env().is_err());

    // whitespace-only counts as unset
    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    assert!(Config::from_env().is_err());

    clear_all_vars();
}

#[test]
fn test_config_missing_sheet_vars_fail() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_all_vars();
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");

    assert!(Config::from_env().is_err());

    env::set_var("SHEET_ID", "sheet-abc");
    assert!(Config::from_env().is_err());

    clear_all_vars();
}

#[test]
fn test_config_invalid_timezone_fails() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_all_vars();
    set_required_vars();
    env::set_var("TIMEZONE", "Europe/Hoverla");

    assert!(Config::from_env().is_err());

    clear_all_vars();
}

#[test]
fn test_config_webhook_switch() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_all_vars();
    set_required_vars();
    env::set_var("WEBHOOK_URL", "https://bot.example.com/telegram");
    env::set_var("WEBHOOK_PORT", "9000");

    let config = Config::from_env().unwrap();
    let webhook = config.webhook.unwrap();
    assert_eq!(webhook.url, "https://bot.example.com/telegram");
    assert_eq!(webhook.port, 9000);

    // empty URL means polling
    env::set_var("WEBHOOK_URL", "  ");
    let config = Config::from_env().unwrap();
    assert!(config.webhook.is_none());

    clear_all_vars();
}

#[test]
fn test_config_invalid_port_fails() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_all_vars();
    set_required_vars();
    env::set_var("HTTP_PORT", "not-a-port");

    assert!(Config::from_env().is_err());

    clear_all_vars();
}
