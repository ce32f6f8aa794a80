//! Outbound responses
//!
//! Transport-agnostic descriptions of what to show the user. The transport
//! decides how to render them.

use std::path::PathBuf;

/// Selectable inline choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub token: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// Keyboard attached to a text response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Markup {
    #[default]
    None,
    /// Inline choices, one per row
    Choices(Vec<Choice>),
    /// Persistent menu keyboard; each button sends its label as text
    Menu(Vec<Vec<String>>),
}

/// How a text response reaches the chat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delivery {
    #[default]
    NewMessage,
    /// Replace the message whose button produced the event
    EditInPlace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResponse {
    pub body: String,
    pub markup: Markup,
    pub delivery: Delivery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Photo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    LocalFile(PathBuf),
    RemoteId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaResponse {
    pub kind: MediaKind,
    pub source: MediaSource,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Text(TextResponse),
    Media(MediaResponse),
}

impl Response {
    /// Plain new message without keyboard
    pub fn text(body: impl Into<String>) -> Self {
        Response::Text(TextResponse {
            body: body.into(),
            markup: Markup::None,
            delivery: Delivery::NewMessage,
        })
    }

    /// New message with inline choices
    pub fn with_choices(body: impl Into<String>, choices: Vec<Choice>) -> Self {
        Response::Text(TextResponse {
            body: body.into(),
            markup: Markup::Choices(choices),
            delivery: Delivery::NewMessage,
        })
    }

    /// New message that installs a menu keyboard
    pub fn with_menu(body: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Response::Text(TextResponse {
            body: body.into(),
            markup: Markup::Menu(rows),
            delivery: Delivery::NewMessage,
        })
    }

    pub fn media(kind: MediaKind, source: MediaSource, caption: impl Into<String>) -> Self {
        Response::Media(MediaResponse {
            kind,
            source,
            caption: caption.into(),
        })
    }

    /// Switch a text response to in-place delivery
    pub fn edit_in_place(self) -> Self {
        match self {
            Response::Text(text) => Response::Text(TextResponse {
                delivery: Delivery::EditInPlace,
                ..text
            }),
            other => other,
        }
    }

    /// Body of a text response or caption of a media response
    pub fn body(&self) -> &str {
        match self {
            Response::Text(text) => &text.body,
            Response::Media(media) => &media.caption,
        }
    }

    /// Inline choices, if any
    pub fn choices(&self) -> &[Choice] {
        match self {
            Response::Text(TextResponse { markup: Markup::Choices(choices), .. }) => choices,
            _ => &[],
        }
    }
}
