use teloxide::prelude::*;

use crate::bot::commands::schedule::{fetch_records, show_subject};
use crate::bot::{keyboard, AppContext};
use crate::schedule::subjects;
use crate::utils::outbound::Outbound;

/// Renders one page of the subject menu. The catalog is derived from fresh
/// rows on every call, so pagination survives sheet edits.
pub async fn handle_subject_menu(out: &Outbound, ctx: &AppContext, page: usize) -> ResponseResult<()> {
    let Some(records) = fetch_records(out, ctx, "subject menu").await? else {
        return Ok(());
    };
    let catalog = subjects::list_subjects(&records);
    if catalog.is_empty() {
        return out
            .deliver("У таблиці немає предметів.", Some(keyboard::main_menu()))
            .await;
    }
    let pages = subjects::page_count(catalog.len());
    let (page, page_subjects) = subjects::page(&catalog, page);
    out.deliver(
        &format!("Оберіть предмет (стор. {}/{})", page + 1, pages),
        Some(keyboard::subject_menu(page_subjects, page, pages)),
    )
    .await
}

/// Resolves a subject button press against the freshly recomputed catalog.
/// A stale index (the sheet changed under the menu) is reported, not an
/// error.
pub async fn handle_subject_pick(
    out: &Outbound,
    ctx: &AppContext,
    page: usize,
    index: usize,
) -> ResponseResult<()> {
    let Some(records) = fetch_records(out, ctx, "subject pick").await? else {
        return Ok(());
    };
    let catalog = subjects::list_subjects(&records);
    match subjects::subject_at(&catalog, page, index) {
        Some(name) => {
            let name = name.clone();
            show_subject(out, ctx, &name).await
        }
        None => {
            out.deliver(
                "Предмет не знайдено. Спробуй ще раз.",
                Some(keyboard::main_menu()),
            )
            .await
        }
    }
}
