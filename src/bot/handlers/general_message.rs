use teloxide::prelude::*;

pub async fn handle_general_message(bot: Bot, msg: Message) -> ResponseResult<()> {
    if let Some(text) = msg.text() {
        // Only react to things that look like commands; staying silent on
        // ordinary chatter avoids spamming group chats.
        if text.starts_with('/') {
            bot.send_message(
                msg.chat.id,
                "Невідома команда. Спробуй /help або меню /start.",
            )
            .await?;
        }
    }
    Ok(())
}
