//! # schedbot Main Entry Point
//!
//! Initializes logging, loads configuration, prepares the subscription
//! store, starts the reminder sweep, and runs the Telegram dispatcher in
//! polling or webhook mode alongside the health-check server.

use anyhow::Result;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod config;
mod database;
mod schedule;
mod services;
mod sheets;
mod utils;

use crate::bot::handlers::BotHandler;
use crate::bot::AppContext;
use crate::config::{Config, WebhookConfig};
use crate::database::connection::DatabaseManager;
use crate::services::health::HealthService;
use crate::services::reminder::ReminderService;
use crate::sheets::SheetsClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schedbot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting schedbot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Database: {}, Worksheet: '{}', HTTP Port: {}",
        config.database_url, config.sheet_name, config.http_port
    );

    // Initialize the subscription store
    info!("Initializing database connection...");
    let db_manager = DatabaseManager::new(&config.database_url).await?;
    info!("Running database migrations...");
    db_manager.run_migrations().await?;
    let db_arc = Arc::new(db_manager);
    info!("Database initialized successfully");

    // Initialize bot and collaborators
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let sheets = SheetsClient::new(&config.sheet_id, &config.sheet_name, &config.sheets_api_key);
    let ctx = AppContext::new(db_arc.as_ref().clone(), sheets.clone(), config.timezone);
    let handler = BotHandler::new(ctx);
    info!("Telegram bot initialized successfully");

    // Initialize and start reminder service
    info!("Initializing reminder service...");
    let mut reminder_service =
        match ReminderService::new(bot.clone(), db_arc.clone(), sheets, config.timezone).await {
            Ok(service) => {
                info!("Reminder service initialized successfully");
                service
            }
            Err(e) => {
                tracing::error!("Failed to create reminder service: {}", e);
                return Err(anyhow::anyhow!("Failed to create reminder service: {}", e));
            }
        };

    if let Err(e) = reminder_service.start().await {
        tracing::error!("Failed to start reminder service: {}", e);
    } else {
        info!("Reminder service started successfully");
    }

    // Initialize health service
    let health_service = HealthService::new(db_arc.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let webhook = config.webhook.clone();
    let bot_task = tokio::spawn(async move {
        run_dispatcher(bot, handler.schema(), webhook).await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    // Stop reminder service on shutdown
    if let Err(e) = reminder_service.stop().await {
        tracing::warn!("Error stopping reminder service: {}", e);
    }

    info!("Application stopped");
    Ok(())
}

// Presence of a webhook URL switches delivery from pull to push; the handler
// schema is identical either way.
async fn run_dispatcher(
    bot: Bot,
    schema: UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>>,
    webhook: Option<WebhookConfig>,
) {
    let mut dispatcher = Dispatcher::builder(bot.clone(), schema)
        .enable_ctrlc_handler()
        .build();

    match webhook {
        Some(cfg) => {
            let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cfg.port));
            let url = match cfg.url.parse() {
                Ok(url) => url,
                Err(e) => {
                    tracing::error!("Invalid WEBHOOK_URL '{}': {}", cfg.url, e);
                    return;
                }
            };
            info!("Starting webhook listener on port {}", cfg.port);
            match webhooks::axum(bot, webhooks::Options::new(addr, url)).await {
                Ok(listener) => {
                    dispatcher
                        .dispatch_with_listener(
                            listener,
                            LoggingErrorHandler::with_custom_text(
                                "An error from the update listener",
                            ),
                        )
                        .await;
                }
                Err(e) => tracing::error!("Failed to start webhook listener: {}", e),
            }
        }
        None => {
            info!("Starting long-polling dispatcher");
            dispatcher.dispatch().await;
        }
    }
}
