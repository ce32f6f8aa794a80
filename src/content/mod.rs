//! Content module
//!
//! Biography text, facts, quotes, media, quiz questions, quest stages and
//! museum data. Loaded once, read-only afterwards.

pub mod loader;
pub mod model;
pub mod store;

pub use loader::{load_content, parse_content};
pub use model::{
    ContentData, MediaItem, MemorialPlace, Museum, MuseumDirections, MuseumEvent, Opera,
    QuestStage, QuizQuestion, Quote, TimelineEvent,
};
pub use store::ContentStore;
