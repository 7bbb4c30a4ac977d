use chrono::{Datelike, Duration};
use teloxide::prelude::*;

use crate::bot::{keyboard::main_menu, AppContext};
use crate::schedule::format;
use crate::schedule::query::{query, Filters};
use crate::schedule::record::{self, LessonRecord};
use crate::utils::{logging, outbound::Outbound};

/// Shown when a collaborator call fails; the user just retries.
pub const TEMP_ERROR: &str = "Сталася тимчасова помилка. Спробуй ще раз.";

const UPCOMING_LIMIT: usize = 10;

/// Loads and normalizes the full lesson set; on failure reports the generic
/// temporary-error message and returns `None` so the caller can bail out.
pub async fn fetch_records(
    out: &Outbound,
    ctx: &AppContext,
    operation: &str,
) -> ResponseResult<Option<Vec<LessonRecord>>> {
    match ctx.sheets.get_rows().await {
        Ok(rows) => Ok(Some(rows.iter().map(record::normalize).collect())),
        Err(e) => {
            logging::log_collaborator_error(operation, &e.to_string());
            out.deliver(TEMP_ERROR, Some(main_menu())).await?;
            Ok(None)
        }
    }
}

/// Today's (or a nearby day's) schedule: `delta_days` of 0 is today, 1 is
/// tomorrow.
pub async fn handle_day(out: &Outbound, ctx: &AppContext, delta_days: i64) -> ResponseResult<()> {
    let Some(records) = fetch_records(out, ctx, "day schedule").await? else {
        return Ok(());
    };
    let target = ctx.today() + Duration::days(delta_days);
    render_day(out, target, &records).await
}

/// `/date DD.MM.YYYY` with a usage hint on a missing or unreadable argument.
pub async fn handle_date(out: &Outbound, ctx: &AppContext, arg: &str) -> ResponseResult<()> {
    let arg = arg.trim();
    if arg.is_empty() {
        return out
            .deliver("Формат: /date DD.MM.YYYY (або YYYY-MM-DD)", Some(main_menu()))
            .await;
    }
    let Some(target) = record::parse_date(arg) else {
        return out
            .deliver("Не розпізнав дату. Приклад: /date 25.09.2025", Some(main_menu()))
            .await;
    };
    let Some(records) = fetch_records(out, ctx, "date schedule").await? else {
        return Ok(());
    };
    render_day(out, target, &records).await
}

async fn render_day(
    out: &Outbound,
    target: chrono::NaiveDate,
    records: &[LessonRecord],
) -> ResponseResult<()> {
    let day_rows = query(
        records,
        &Filters {
            exact_date: Some(target),
            ..Filters::default()
        },
    );
    out.deliver(&format::format_day(target, &day_rows), Some(main_menu()))
        .await
}

/// The Monday-to-Saturday week view; `week_offset` of 1 is next week.
pub async fn handle_week(out: &Outbound, ctx: &AppContext, week_offset: i64) -> ResponseResult<()> {
    let Some(records) = fetch_records(out, ctx, "week schedule").await? else {
        return Ok(());
    };
    let today = ctx.today();
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64)
        + Duration::weeks(week_offset);
    let week_rows = query(
        &records,
        &Filters {
            from: Some(monday),
            to: Some(monday + Duration::days(6)),
            ..Filters::default()
        },
    );
    out.deliver(&format::format_week(monday, &week_rows), Some(main_menu()))
        .await
}

/// The next `UPCOMING_LIMIT` lessons from today on, grouped by date.
pub async fn handle_next(out: &Outbound, ctx: &AppContext) -> ResponseResult<()> {
    let Some(records) = fetch_records(out, ctx, "upcoming schedule").await? else {
        return Ok(());
    };
    let mut upcoming = query(
        &records,
        &Filters {
            from: Some(ctx.today()),
            ..Filters::default()
        },
    );
    upcoming.truncate(UPCOMING_LIMIT);
    out.deliver(&format::format_grouped(&upcoming), Some(main_menu()))
        .await
}

/// All upcoming lessons of one subject, grouped by date.
pub async fn show_subject(out: &Outbound, ctx: &AppContext, name: &str) -> ResponseResult<()> {
    let Some(records) = fetch_records(out, ctx, "subject schedule").await? else {
        return Ok(());
    };
    let rows = query(
        &records,
        &Filters {
            subject: Some(name.to_string()),
            from: Some(ctx.today()),
            ..Filters::default()
        },
    );
    let body = if rows.is_empty() {
        format::NOTHING_FOUND.to_string()
    } else {
        format::format_grouped(&rows)
    };
    out.deliver(
        &format!("Розклад по предмету: {name}\n\n{body}"),
        Some(main_menu()),
    )
    .await
}
