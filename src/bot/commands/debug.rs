use teloxide::prelude::*;

use crate::bot::AppContext;
use crate::database::models::Subscriber;
use crate::schedule::query::{query, Filters};
use crate::schedule::record;
use crate::utils::outbound::Outbound;

/// Diagnostic dump of the worksheet as the bot sees it: column names, row
/// counts, today's matches, subscriber count.
pub async fn handle_debug(out: &Outbound, ctx: &AppContext) -> ResponseResult<()> {
    match build_report(ctx).await {
        Ok(report) => out.deliver(&report, None).await,
        Err(e) => {
            tracing::error!("Debug report failed: {}", e);
            out.deliver(&format!("DEBUG ERROR: {e}"), None).await
        }
    }
}

async fn build_report(ctx: &AppContext) -> anyhow::Result<String> {
    let rows = ctx.sheets.get_rows().await?;
    let mut columns: Vec<&String> = rows.first().map(|r| r.keys().collect()).unwrap_or_default();
    columns.sort();

    let records: Vec<_> = rows.iter().map(record::normalize).collect();
    let today_rows = query(
        &records,
        &Filters {
            exact_date: Some(ctx.today()),
            ..Filters::default()
        },
    );
    let subscribers = Subscriber::enabled_chat_ids(&ctx.db.pool).await?;

    Ok(format!(
        "Колонок: {}\nНазви колонок: {:?}\nРядків у таблиці: {}\nСьогодні: {} рядків\nПідписників: {}",
        columns.len(),
        columns,
        rows.len(),
        today_rows.len(),
        subscribers.len(),
    ))
}
