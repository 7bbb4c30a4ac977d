use teloxide::prelude::*;

use crate::bot::commands::{notifications, schedule, subjects};
use crate::bot::{keyboard::main_menu, AppContext};
use crate::utils::{logging, outbound::Outbound};

pub async fn callback_handler(bot: Bot, q: CallbackQuery, ctx: AppContext) -> ResponseResult<()> {
    // Stop the button spinner first; a failure here is not actionable.
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        tracing::debug!("answer_callback_query failed: {}", e);
    }

    let Some(data) = q.data.clone() else {
        return Ok(());
    };
    let Some(out) = Outbound::to_callback(bot, &q) else {
        // The message the button lived on is gone; nothing to edit or reply to.
        tracing::debug!("Callback '{}' without a message, ignoring", data);
        return Ok(());
    };
    tracing::info!("Callback '{}' in chat {}", data, out.chat_id());

    if let Err(e) = route(&out, &ctx, &data).await {
        logging::log_command_error("callback", out.chat_id().0, &e.to_string());
        let _ = out
            .deliver(
                "Сталася помилка при обробці запиту. Спробуй ще раз із меню /start.",
                None,
            )
            .await;
    }
    Ok(())
}

async fn route(out: &Outbound, ctx: &AppContext, data: &str) -> ResponseResult<()> {
    match data {
        "m:menu" => out.deliver("Обери дію:", Some(main_menu())).await,
        "m:today" => schedule::handle_day(out, ctx, 0).await,
        "m:tomorrow" => schedule::handle_day(out, ctx, 1).await,
        "m:week" => schedule::handle_week(out, ctx, 0).await,
        "m:subject" => subjects::handle_subject_menu(out, ctx, 0).await,
        "m:next" => schedule::handle_next(out, ctx).await,
        "m:notify_on" => notifications::handle_notify_on(out, ctx).await,
        "m:notify_off" => notifications::handle_notify_off(out, ctx).await,
        _ => route_subject(out, ctx, data).await,
    }
}

// Subject payloads: "subj:<page>:__page__" flips pages,
// "subj:<page>:<index>" picks a subject off that page.
async fn route_subject(out: &Outbound, ctx: &AppContext, data: &str) -> ResponseResult<()> {
    let Some(rest) = data.strip_prefix("subj:") else {
        tracing::debug!("Unknown callback payload: {}", data);
        return Ok(());
    };
    let mut parts = rest.splitn(2, ':');
    let (Some(page), Some(token)) = (parts.next(), parts.next()) else {
        return bad_pick(out).await;
    };
    let Ok(page) = page.parse::<usize>() else {
        return bad_pick(out).await;
    };
    if token == "__page__" {
        return subjects::handle_subject_menu(out, ctx, page).await;
    }
    match token.parse::<usize>() {
        Ok(index) => subjects::handle_subject_pick(out, ctx, page, index).await,
        Err(_) => bad_pick(out).await,
    }
}

async fn bad_pick(out: &Outbound) -> ResponseResult<()> {
    out.deliver("Помилка вибору предмета. Спробуй ще раз.", Some(main_menu()))
        .await
}
