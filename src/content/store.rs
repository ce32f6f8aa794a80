//! Content store
//!
//! Immutable, indexable collections established at startup. Handlers only
//! ever read from here; no synchronization is needed.

use crate::utils::errors::ContentError;
use super::model::{
    ContentData, MediaItem, MemorialPlace, MuseumDirections, MuseumEvent, Opera, QuestStage,
    QuizQuestion, Quote, TimelineEvent,
};

/// Validated, read-only content
#[derive(Debug, Clone)]
pub struct ContentStore {
    data: ContentData,
}

impl ContentStore {
    /// Validate raw content and wrap it into a store
    pub fn new(data: ContentData) -> Result<Self, ContentError> {
        validate(&data)?;
        Ok(Self { data })
    }

    pub fn biography(&self) -> &str {
        &self.data.biography
    }

    pub fn list_facts(&self) -> &[String] {
        &self.data.facts
    }

    pub fn list_quotes(&self) -> &[Quote] {
        &self.data.quotes
    }

    pub fn list_quiz_questions(&self) -> &[QuizQuestion] {
        &self.data.quiz_questions
    }

    pub fn list_quest_stages(&self) -> &[QuestStage] {
        &self.data.quest_stages
    }

    pub fn list_audio(&self) -> &[MediaItem] {
        &self.data.audio
    }

    pub fn list_photos(&self) -> &[MediaItem] {
        &self.data.photos
    }

    pub fn list_operas(&self) -> &[Opera] {
        &self.data.operas
    }

    pub fn list_memorial_places(&self) -> &[MemorialPlace] {
        &self.data.memorial_places
    }

    pub fn list_timeline_events(&self) -> &[TimelineEvent] {
        &self.data.timeline_events
    }

    pub fn museum_facts(&self) -> &[String] {
        &self.data.museum.facts
    }

    pub fn museum_directions(&self) -> &MuseumDirections {
        &self.data.museum.directions
    }

    pub fn museum_events(&self) -> &[MuseumEvent] {
        &self.data.museum.events
    }
}

fn validate(data: &ContentData) -> Result<(), ContentError> {
    // Collections that handlers pick from at random or by computed index
    if data.facts.is_empty() {
        return Err(ContentError::EmptyCollection("facts"));
    }
    if data.quotes.is_empty() {
        return Err(ContentError::EmptyCollection("quotes"));
    }
    if data.quiz_questions.is_empty() {
        return Err(ContentError::EmptyCollection("quiz_questions"));
    }
    if data.quest_stages.is_empty() {
        return Err(ContentError::EmptyCollection("quest_stages"));
    }
    if data.operas.is_empty() {
        return Err(ContentError::EmptyCollection("operas"));
    }

    for (index, question) in data.quiz_questions.iter().enumerate() {
        let matches = question
            .options
            .iter()
            .filter(|option| **option == question.correct_answer)
            .count();
        if matches != 1 {
            return Err(ContentError::QuizAnswerMismatch {
                index,
                answer: question.correct_answer.clone(),
            });
        }
    }

    for (index, stage) in data.quest_stages.iter().enumerate() {
        if stage.correct_option >= stage.options.len() {
            return Err(ContentError::QuestOptionOutOfRange {
                index,
                option: stage.correct_option,
            });
        }
        if stage.feedback.len() != stage.options.len() {
            return Err(ContentError::QuestFeedbackMismatch {
                index,
                options: stage.options.len(),
                feedback: stage.feedback.len(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::json;
    use super::*;

    /// Small content set shared by unit tests across the crate
    pub fn sample_data() -> ContentData {
        serde_json::from_value(json!({
            "biography": "Соломія Крушельницька народилася 1872 року.",
            "facts": ["Факт перший", "Факт другий", "Факт третій"],
            "quotes": [
                { "text": "Цитата перша", "source": "Лист до сестри" },
                { "text": "Цитата друга", "source": "Інтерв'ю" }
            ],
            "audio": [
                { "title": "Аріозо", "description": "Запис 1910 року", "local_path": "media/arioso.mp3" },
                { "title": "Пісня", "description": "Запис 1912 року", "file_id": "AUDIO_FILE_ID" }
            ],
            "photos": [
                { "title": "Портрет", "description": "1898 рік", "local_path": "media/portrait.jpg" },
                { "title": "На сцені", "description": "Мадам Баттерфляй", "file_id": "PHOTO_FILE_ID" }
            ],
            "quiz_questions": [
                { "question": "Питання А?", "options": ["A", "B", "C"], "correct_answer": "B" },
                { "question": "Питання Б?", "options": ["X", "Y"], "correct_answer": "X" }
            ],
            "quest_stages": [
                { "description": "Етап один", "options": ["a", "b"], "correct_option": 1,
                  "feedback": ["не a", "так"] },
                { "description": "Етап два", "options": ["c", "d"], "correct_option": 0,
                  "feedback": ["так", "не d"] },
                { "description": "Етап три", "options": ["e", "f", "g"], "correct_option": 2,
                  "feedback": ["не e", "не f", "так"] }
            ],
            "operas": [
                { "title": "Мадам Баттерфляй", "composer": "Джакомо Пуччіні", "role": "Чіо-Чіо-Сан",
                  "history": "Прем'єра в Брешії 1904 року", "fact": "Врятувала оперу" },
                { "title": "Аїда", "composer": "Джузеппе Верді", "role": "Аїда",
                  "history": "Одна з улюблених партій", "fact": "Співала в Парижі" },
                { "title": "Саломея", "composer": "Ріхард Штраус", "role": "Саломея",
                  "history": "Італійська прем'єра 1906 року", "fact": "Перша італійська Саломея" }
            ],
            "memorial_places": [
                { "name": "Музей", "description": "Меморіальний музей", "address": "вул. Крушельницької, 23" }
            ],
            "timeline_events": [
                { "date": "1872", "description": "Народження" },
                { "date": "1952", "description": "Смерть у Львові" }
            ],
            "museum": {
                "facts": ["Будинок придбано 1903 року"],
                "directions": {
                    "address": "Львів, вул. Крушельницької, 23",
                    "hours": "10:00-17:00",
                    "public_transport": ["Трамвай №1"],
                    "phone": "+380 32 261 00 00"
                },
                "events": []
            }
        }))
        .expect("fixture content must deserialize")
    }

    pub fn sample_store() -> ContentStore {
        ContentStore::new(sample_data()).expect("fixture content must validate")
    }
}
