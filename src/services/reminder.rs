use chrono::Utc;
use chrono_tz::Tz;
use std::sync::Arc;
use teloxide::{prelude::*, Bot};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::database::{connection::DatabaseManager, models::Subscriber};
use crate::schedule::format;
use crate::schedule::record;
use crate::schedule::sweep::{sweep, SweepState};
use crate::sheets::SheetsClient;
use crate::utils::logging;

/// Drives the pure reminder sweep on a 60-second cadence (Policy A: one
/// shared tick for all subscribers, rather than per-subscriber future jobs).
pub struct ReminderService {
    bot: Bot,
    db: Arc<DatabaseManager>,
    sheets: SheetsClient,
    tz: Tz,
    scheduler: JobScheduler,
    // Holding this lock for the whole tick keeps ticks single-flight: a slow
    // dispatch can never overlap the next tick's dedup mutation.
    state: Arc<Mutex<SweepState>>,
}

impl ReminderService {
    pub async fn new(
        bot: Bot,
        db: Arc<DatabaseManager>,
        sheets: SheetsClient,
        tz: Tz,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            bot,
            db,
            sheets,
            tz,
            scheduler,
            state: Arc::new(Mutex::new(SweepState::new())),
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bot = self.bot.clone();
        let db = self.db.clone();
        let sheets = self.sheets.clone();
        let tz = self.tz;
        let state = self.state.clone();

        let sweep_job = Job::new_async("0 * * * * *", move |_uuid, _l| {
            let bot = bot.clone();
            let db = db.clone();
            let sheets = sheets.clone();
            let state = state.clone();
            Box::pin(async move {
                if let Err(e) = run_sweep_tick(bot, db, sheets, tz, state).await {
                    tracing::error!("Reminder sweep failed: {}", e);
                }
            })
        })?;

        self.scheduler.add(sweep_job).await?;
        self.scheduler.start().await?;

        tracing::info!("Reminder service started - sweeping every 60 seconds");
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }
}

async fn run_sweep_tick(
    bot: Bot,
    db: Arc<DatabaseManager>,
    sheets: SheetsClient,
    tz: Tz,
    state: Arc<Mutex<SweepState>>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut state = state.lock().await;
    let now = Utc::now().with_timezone(&tz).naive_local();

    let subscribers = Subscriber::enabled_chat_ids(&db.pool).await?;
    if subscribers.is_empty() {
        return Ok(());
    }

    let rows = sheets.get_rows().await?;
    let records: Vec<_> = rows.iter().map(record::normalize).collect();

    for lesson in sweep(now, &records, &mut state) {
        let text = format::reminder_message(&lesson);
        for &chat_id in &subscribers {
            if let Err(e) = bot.send_message(ChatId(chat_id), text.as_str()).await {
                logging::log_delivery_failure(chat_id, &e.to_string());
            }
        }
        tracing::info!(
            "Sent reminder for '{}' at {} to {} subscriber(s)",
            lesson.subject,
            lesson.time_start,
            subscribers.len()
        );
    }

    Ok(())
}
