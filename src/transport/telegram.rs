//! Telegram transport
//!
//! Converts teloxide updates into router events and renders responses with
//! the Bot API. One transport instance serves one inbound update.

use std::sync::Mutex;
use futures::future::BoxFuture;
use teloxide::{
    prelude::*,
    types::{
        CallbackQuery, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile,
        KeyboardButton, KeyboardMarkup, MessageId,
    },
    ApiError, RequestError,
};
use tracing::{debug, info, warn};
use crate::handlers::labels;
use crate::routing::{
    Choice, Delivery, Event, Markup, MediaKind, MediaResponse, MediaSource, Response, TextResponse,
};
use crate::utils::errors::Result;
use super::Transport;

/// Router event for a text message, if it has a sender and text
pub fn event_from_message(msg: &Message) -> Option<Event> {
    let user = msg.from.as_ref()?;
    let text = msg.text()?;
    Some(Event::text(user.id.0 as i64, text))
}

/// Router event for a button press, if it carries data
pub fn event_from_callback(query: &CallbackQuery) -> Option<Event> {
    let data = query.data.as_ref()?;
    Some(Event::callback(query.from.id.0 as i64, data.clone()))
}

/// Bot API sink for the responses to one update
pub struct TelegramTransport {
    bot: Bot,
    chat_id: ChatId,
    callback: Option<CallbackQuery>,
    notice: Mutex<Option<&'static str>>,
}

impl TelegramTransport {
    /// Transport replying to a plain message
    pub fn for_message(bot: Bot, msg: &Message) -> Self {
        Self {
            bot,
            chat_id: msg.chat.id,
            callback: None,
            notice: Mutex::new(None),
        }
    }

    /// Transport replying to a button press
    pub fn for_callback(bot: Bot, query: CallbackQuery) -> Self {
        let chat_id = query
            .message
            .as_ref()
            .map(|m| m.chat().id)
            .unwrap_or_else(|| ChatId(query.from.id.0 as i64));
        Self {
            bot,
            chat_id,
            callback: Some(query),
            notice: Mutex::new(None),
        }
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    /// Notice collected while delivering, shown as an alert on acknowledge
    pub fn pending_notice(&self) -> Option<&'static str> {
        *self.notice.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn set_notice(&self, notice: &'static str) {
        *self.notice.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(notice);
    }

    fn origin_message_id(&self) -> Option<MessageId> {
        self.callback.as_ref()?.message.as_ref().map(|m| m.id())
    }

    /// Answer the button press, clearing the client's loading state. Pending
    /// notices are shown as an alert. No-op for plain messages.
    pub async fn acknowledge(&self) -> Result<()> {
        let Some(query) = &self.callback else {
            return Ok(());
        };

        let request = self.bot.answer_callback_query(query.id.clone());
        match self.pending_notice() {
            Some(notice) => request.text(notice).show_alert(true).await?,
            None => request.await?,
        };
        Ok(())
    }

    /// Generic apology used when handling failed internally
    pub async fn send_failure_notice(&self) -> Result<()> {
        self.bot.send_message(self.chat_id, labels::GENERIC_FAILURE).await?;
        Ok(())
    }

    async fn deliver_text(&self, text: &TextResponse) -> Result<()> {
        if text.delivery == Delivery::EditInPlace {
            if let Some(message_id) = self.origin_message_id() {
                return self.edit_text(message_id, text).await;
            }
            debug!(chat_id = ?self.chat_id, "Original message unavailable, sending a new one");
        }

        let request = self.bot.send_message(self.chat_id, &text.body);
        match &text.markup {
            Markup::None => request.await?,
            Markup::Choices(choices) => request.reply_markup(inline_keyboard(choices)).await?,
            Markup::Menu(rows) => request.reply_markup(menu_keyboard(rows)).await?,
        };
        Ok(())
    }

    async fn edit_text(&self, message_id: MessageId, text: &TextResponse) -> Result<()> {
        let request = self.bot.edit_message_text(self.chat_id, message_id, &text.body);
        let result = match &text.markup {
            Markup::Choices(choices) => request.reply_markup(inline_keyboard(choices)).await,
            _ => request.await,
        };

        match result {
            Ok(_) => Ok(()),
            Err(RequestError::Api(ApiError::MessageNotModified)) => {
                info!(chat_id = ?self.chat_id, "Edited content unchanged, notifying user");
                self.set_notice(labels::CONTENT_UNCHANGED);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn deliver_media(&self, media: &MediaResponse) -> Result<()> {
        let file = match &media.source {
            MediaSource::LocalFile(path) => InputFile::file(path.clone()),
            MediaSource::RemoteId(file_id) => InputFile::file_id(file_id.clone()),
        };

        match media.kind {
            MediaKind::Audio => {
                self.bot.send_audio(self.chat_id, file).caption(&media.caption).await?;
            }
            MediaKind::Photo => {
                self.bot.send_photo(self.chat_id, file).caption(&media.caption).await?;
            }
        }
        Ok(())
    }
}

impl Transport for TelegramTransport {
    fn deliver<'a>(&'a self, response: &'a Response) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            match response {
                Response::Text(text) => self.deliver_text(text).await,
                Response::Media(media) => self.deliver_media(media).await,
            }
        })
    }
}

impl std::fmt::Debug for TelegramTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramTransport")
            .field("chat_id", &self.chat_id)
            .field("is_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}

fn inline_keyboard(choices: &[Choice]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        choices
            .iter()
            .map(|choice| vec![InlineKeyboardButton::callback(choice.label.clone(), choice.token.clone())]),
    )
}

fn menu_keyboard(rows: &[Vec<String>]) -> KeyboardMarkup {
    KeyboardMarkup::new(
        rows.iter()
            .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect::<Vec<_>>()),
    )
    .resize_keyboard()
}

/// Log and swallow an acknowledge failure; the response itself was sent
pub async fn acknowledge_quietly(transport: &TelegramTransport) {
    if let Err(e) = transport.acknowledge().await {
        warn!(error = %e, chat_id = ?transport.chat_id(), "Failed to answer callback query");
    }
}
