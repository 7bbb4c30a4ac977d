use std::time::Duration;

use teloxide::prelude::*;

use crate::bot::{keyboard::main_menu, AppContext};
use crate::bot::commands::schedule::TEMP_ERROR;
use crate::database::models::Subscriber;
use crate::utils::{logging, outbound::Outbound};

const TEST_NOTIFICATION_DELAY: Duration = Duration::from_secs(180);

/// Enables reminders for this chat and schedules a one-shot test message so
/// the user sees delivery actually works.
pub async fn handle_notify_on(out: &Outbound, ctx: &AppContext) -> ResponseResult<()> {
    let chat_id = out.chat_id();
    match Subscriber::is_enabled(&ctx.db.pool, chat_id.0).await {
        Ok(true) => {
            return out
                .deliver("Сповіщення вже підключені ✅", Some(main_menu()))
                .await;
        }
        Ok(false) => {}
        Err(e) => {
            logging::log_collaborator_error("subscription lookup", &e.to_string());
            return out.deliver(TEMP_ERROR, Some(main_menu())).await;
        }
    }

    if let Err(e) = Subscriber::upsert(&ctx.db.pool, chat_id.0, true).await {
        logging::log_collaborator_error("subscription upsert", &e.to_string());
        return out
            .deliver("Не зміг зберегти підписку. Спробуй ще раз.", Some(main_menu()))
            .await;
    }

    out.deliver(
        "Сповіщення підключені ✅\nПротягом 3 хв ви отримаєте тестове повідомлення.",
        Some(main_menu()),
    )
    .await?;

    let bot = out.bot().clone();
    tokio::spawn(async move {
        tokio::time::sleep(TEST_NOTIFICATION_DELAY).await;
        if let Err(e) = bot
            .send_message(chat_id, "🔔 Тестове сповіщення: все працює ✅")
            .await
        {
            logging::log_delivery_failure(chat_id.0, &e.to_string());
        }
    });

    Ok(())
}

/// Disables reminders for this chat; the row stays, only the flag flips.
pub async fn handle_notify_off(out: &Outbound, ctx: &AppContext) -> ResponseResult<()> {
    let chat_id = out.chat_id();
    match Subscriber::is_enabled(&ctx.db.pool, chat_id.0).await {
        Ok(false) => {
            return out
                .deliver("Сповіщення вже відключені ❎", Some(main_menu()))
                .await;
        }
        Ok(true) => {}
        Err(e) => {
            logging::log_collaborator_error("subscription lookup", &e.to_string());
            return out.deliver(TEMP_ERROR, Some(main_menu())).await;
        }
    }

    if let Err(e) = Subscriber::upsert(&ctx.db.pool, chat_id.0, false).await {
        logging::log_collaborator_error("subscription upsert", &e.to_string());
        return out
            .deliver("Не зміг оновити підписку. Спробуй ще раз.", Some(main_menu()))
            .await;
    }

    out.deliver("Сповіщення відключені ❎", Some(main_menu())).await
}
