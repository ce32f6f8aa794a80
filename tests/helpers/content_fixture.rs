//! Fixture content and scripted randomness

use std::collections::VecDeque;
use std::sync::Mutex;
use serde_json::json;
use solomiya_bot::content::{ContentData, ContentStore};
use solomiya_bot::routing::RandomSource;

/// Small content set with known answers: quiz question 0 expects "B",
/// question 1 expects "X"; quest stages are solved by options 1, 0, 2
pub fn fixture_data() -> ContentData {
    serde_json::from_value(json!({
        "biography": "Біографія для тестів",
        "facts": ["Факт 1", "Факт 2", "Факт 3"],
        "quotes": [
            { "text": "Цитата 1", "source": "Джерело 1" },
            { "text": "Цитата 2", "source": "Джерело 2" }
        ],
        "audio": [
            { "title": "Аріозо", "description": "Запис 1910 року", "local_path": "media/arioso.mp3" },
            { "title": "Пісня", "description": "Народна пісня", "file_id": "AUDIO_FILE_ID" }
        ],
        "photos": [
            { "title": "Портрет", "description": "Фото 1898", "local_path": "media/portrait.jpg" },
            { "title": "На сцені", "description": "Брешія", "file_id": "PHOTO_FILE_ID" }
        ],
        "quiz_questions": [
            { "question": "Q1", "options": ["A", "B", "C"], "correct_answer": "B" },
            { "question": "Q2", "options": ["X", "Y"], "correct_answer": "X" }
        ],
        "quest_stages": [
            {
                "description": "Етап перший",
                "options": ["s0o0", "s0o1", "s0o2"],
                "correct_option": 1,
                "feedback": ["не там", "так", "теж не там"]
            },
            {
                "description": "Етап другий",
                "options": ["s1o0", "s1o1"],
                "correct_option": 0,
                "feedback": ["так", "ні"]
            },
            {
                "description": "Етап третій",
                "options": ["s2o0", "s2o1", "s2o2"],
                "correct_option": 2,
                "feedback": ["ні", "ні", "так"]
            }
        ],
        "operas": [
            { "title": "Аїда", "composer": "Верді", "role": "Аїда", "history": "h", "fact": "f" },
            { "title": "Тоска", "composer": "Пуччіні", "role": "Тоска", "history": "h", "fact": "f" },
            { "title": "Саломея", "composer": "Штраус", "role": "Саломея", "history": "h", "fact": "f" }
        ],
        "memorial_places": [
            { "name": "Музей", "description": "Будинок", "address": "Львів" }
        ],
        "timeline_events": [
            { "date": "1872", "description": "Народження" }
        ],
        "museum": {
            "facts": ["Факт про будинок"],
            "directions": {
                "address": "Львів, вул. Крушельницької, 23",
                "hours": "10:00-17:00",
                "public_transport": ["Трамвай №1"],
                "phone": "+380"
            }
        }
    }))
    .expect("fixture content should deserialize")
}

pub fn fixture_store() -> ContentStore {
    ContentStore::new(fixture_data()).expect("fixture content should validate")
}

/// Returns scripted indices in order, then repeats the last one
#[derive(Debug)]
pub struct SequenceRandom {
    picks: Mutex<VecDeque<usize>>,
    last: Mutex<usize>,
}

impl SequenceRandom {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: Mutex::new(picks.into_iter().collect()),
            last: Mutex::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn pick(&self, len: usize) -> usize {
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.picks.lock().unwrap().pop_front() {
            *last = next;
        }
        *last % len
    }
}
