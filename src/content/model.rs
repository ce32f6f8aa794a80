//! Content records
//!
//! Read-only data shapes shown to users. All of them are deserialized once
//! from the content file and never mutated afterwards.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub source: String,
}

/// Audio recording or photograph. An item with neither source is shown as
/// its caption only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub title: String,
    pub description: String,
    /// File on the bot's disk, relative to the content file. Preferred over
    /// `file_id`; dropped at load time when the file does not exist.
    #[serde(default)]
    pub local_path: Option<String>,
    /// Telegram file id of an already uploaded file
    #[serde(default)]
    pub file_id: Option<String>,
}

/// A single multiple-choice quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Equals exactly one element of `options`
    pub correct_answer: String,
}

/// One stage of the linear quest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestStage {
    pub description: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    /// Aligned 1:1 with `options`
    pub feedback: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opera {
    pub title: String,
    pub composer: String,
    pub role: String,
    pub history: String,
    pub fact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorialPlace {
    pub name: String,
    pub description: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuseumDirections {
    pub address: String,
    pub hours: String,
    pub public_transport: Vec<String>,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuseumEvent {
    pub date: String,
    pub title: String,
    pub description: String,
}

/// Museum section of the content file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Museum {
    pub facts: Vec<String>,
    pub directions: MuseumDirections,
    #[serde(default)]
    pub events: Vec<MuseumEvent>,
}

/// Raw shape of the content file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentData {
    pub biography: String,
    pub facts: Vec<String>,
    pub quotes: Vec<Quote>,
    pub audio: Vec<MediaItem>,
    pub photos: Vec<MediaItem>,
    pub quiz_questions: Vec<QuizQuestion>,
    pub quest_stages: Vec<QuestStage>,
    pub operas: Vec<Opera>,
    pub memorial_places: Vec<MemorialPlace>,
    pub timeline_events: Vec<TimelineEvent>,
    pub museum: Museum,
}
