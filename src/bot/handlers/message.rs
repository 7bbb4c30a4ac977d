use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::{debug, notifications, schedule, subjects, Command};
use crate::bot::{keyboard::main_menu, AppContext};
use crate::utils::{logging, outbound::Outbound};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: AppContext,
) -> ResponseResult<()> {
    let out = Outbound::to_chat(bot, msg.chat.id);
    match cmd {
        Command::Start => {
            logging::log_command_start("/start", msg.chat.id.0);
            out.deliver("Обери дію:", Some(main_menu())).await?;
        }
        Command::Help => {
            logging::log_command_start("/help", msg.chat.id.0);
            out.deliver(&Command::descriptions().to_string(), None).await?;
        }
        Command::Today => {
            logging::log_command_start("/today", msg.chat.id.0);
            schedule::handle_day(&out, &ctx, 0).await?;
        }
        Command::Tomorrow => {
            logging::log_command_start("/tomorrow", msg.chat.id.0);
            schedule::handle_day(&out, &ctx, 1).await?;
        }
        Command::Week => {
            logging::log_command_start("/week", msg.chat.id.0);
            schedule::handle_week(&out, &ctx, 0).await?;
        }
        Command::NextWeek => {
            logging::log_command_start("/next_week", msg.chat.id.0);
            schedule::handle_week(&out, &ctx, 1).await?;
        }
        Command::Date { date } => {
            logging::log_command_start("/date", msg.chat.id.0);
            schedule::handle_date(&out, &ctx, &date).await?;
        }
        Command::Subject { name } => {
            logging::log_command_start("/subject", msg.chat.id.0);
            let name = name.trim();
            if name.is_empty() {
                subjects::handle_subject_menu(&out, &ctx, 0).await?;
            } else {
                schedule::show_subject(&out, &ctx, name).await?;
            }
        }
        Command::Next => {
            logging::log_command_start("/next", msg.chat.id.0);
            schedule::handle_next(&out, &ctx).await?;
        }
        Command::NotifyOn => {
            logging::log_command_start("/notify_on", msg.chat.id.0);
            notifications::handle_notify_on(&out, &ctx).await?;
        }
        Command::NotifyOff => {
            logging::log_command_start("/notify_off", msg.chat.id.0);
            notifications::handle_notify_off(&out, &ctx).await?;
        }
        Command::Debug => {
            logging::log_command_start("/debug", msg.chat.id.0);
            debug::handle_debug(&out, &ctx).await?;
        }
    }
    Ok(())
}
