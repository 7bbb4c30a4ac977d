use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId};

use crate::schedule::format::{split_text, MAX_CHUNK};

/// Outgoing message delivery for one chat.
///
/// Long texts are chunked at newline boundaries; when the reply targets a
/// callback's message the first chunk edits it in place, falling back to a
/// plain send if the edit is refused (message too old or identical). The
/// keyboard always rides on the last chunk.
pub struct Outbound {
    bot: Bot,
    chat_id: ChatId,
    edit: Option<MessageId>,
}

impl Outbound {
    /// Replies with fresh messages.
    pub fn to_chat(bot: Bot, chat_id: ChatId) -> Self {
        Self {
            bot,
            chat_id,
            edit: None,
        }
    }

    /// Replies by editing the message the callback button lives on. `None`
    /// when the callback carries no message (too old to act on).
    pub fn to_callback(bot: Bot, query: &CallbackQuery) -> Option<Self> {
        query.message.as_ref().map(|message| Self {
            bot,
            chat_id: message.chat.id,
            edit: Some(message.id),
        })
    }

    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    pub async fn deliver(
        &self,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> ResponseResult<()> {
        let chunks = split_text(text, MAX_CHUNK);
        let last = chunks.len() - 1;
        for (i, chunk) in chunks.iter().enumerate() {
            let chunk_keyboard = if i == last { keyboard.clone() } else { None };
            if i == 0 {
                if let Some(message_id) = self.edit {
                    if self.edit_chunk(message_id, chunk, chunk_keyboard.clone()).await.is_ok() {
                        continue;
                    }
                    // fall through to a plain send
                }
            }
            self.send_chunk(chunk, chunk_keyboard).await?;
        }
        Ok(())
    }

    async fn edit_chunk(
        &self,
        message_id: MessageId,
        chunk: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> ResponseResult<()> {
        let result = match keyboard {
            Some(kb) => {
                self.bot
                    .edit_message_text(self.chat_id, message_id, chunk)
                    .reply_markup(kb)
                    .await
            }
            None => {
                self.bot
                    .edit_message_text(self.chat_id, message_id, chunk)
                    .await
            }
        };
        if let Err(e) = &result {
            tracing::warn!("Edit failed, falling back to send: {}", e);
        }
        result.map(|_| ())
    }

    async fn send_chunk(
        &self,
        chunk: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> ResponseResult<()> {
        match keyboard {
            Some(kb) => {
                self.bot
                    .send_message(self.chat_id, chunk)
                    .reply_markup(kb)
                    .await?;
            }
            None => {
                self.bot.send_message(self.chat_id, chunk).await?;
            }
        }
        Ok(())
    }
}
