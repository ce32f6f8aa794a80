//! Fixed user-facing strings
//!
//! Menu labels double as exact-text trigger patterns: the menu keyboard
//! sends a button's label back as a plain text message.

pub const CMD_START: &str = "/start";
pub const CMD_HELP: &str = "/help";

pub const BIOGRAPHY: &str = "📖 Біографія";
pub const FACTS: &str = "🎭 Цікаві факти";
pub const AUDIO: &str = "🎧 Аудіоархів";
pub const QUIZ: &str = "❓ Вікторина";
pub const PLACES: &str = "🗺 Карта пам'ятних місць";
pub const QUOTES: &str = "📝 Цитати";
pub const TIMELINE: &str = "📅 Хронологія життя";
pub const PHOTOS: &str = "📸 Фотоархів";
pub const OPERA: &str = "🎶 Опера дня";
pub const QUEST: &str = "🕵️ Квест «Подорож Соломії»";
pub const MUSEUM: &str = "🏛 Будинок-музей";

pub const MUSEUM_FACTS: &str = "🏠 Факти про будинок";
pub const MUSEUM_DIRECTIONS: &str = "📍 Маршрут до музею";
pub const MUSEUM_EVENTS: &str = "🎭 Афіша заходів";
pub const BACK_TO_MAIN: &str = "↩️ Назад до головного меню";

// Callback tokens
pub const NEXT_FACT: &str = "next_fact";
pub const NEXT_QUOTE: &str = "next_quote";
pub const MORE_QUIZ: &str = "more_quiz";
pub const AUDIO_PREFIX: &str = "audio_";
pub const PHOTO_PREFIX: &str = "photo_";
pub const QUIZ_ANSWER_PREFIX: &str = "quiz_answer_";
pub const QUEST_OPTION_PREFIX: &str = "quest_option_";

pub const WELCOME: &str = "Вітаю! Я бот, присвячений життю та творчості видатної української \
    оперної співачки Соломії Крушельницької.\n\nОберіть розділ, який вас цікавить:";
pub const HELP: &str = "Користуйтеся кнопками меню, щоб переглядати розділи.\n\n\
    /start - головне меню (перериває вікторину чи квест)\n\
    /help - ця довідка";
pub const MUSEUM_WELCOME: &str = "Ласкаво просимо до розділу про Будинок-музей Соломії \
    Крушельницької у Львові!\n\nОберіть підрозділ для отримання інформації:";

pub const NEXT_FACT_BUTTON: &str = "Наступний факт";
pub const NEXT_QUOTE_BUTTON: &str = "Наступна цитата";
pub const MORE_QUIZ_BUTTON: &str = "Ще питання";

pub const AUDIO_PROMPT: &str = "Оберіть запис для прослуховування:";
pub const PHOTO_PROMPT: &str = "Оберіть фотографію для перегляду:";

pub const QUIZ_CORRECT: &str = "✅ Правильно! Молодець!";
pub const QUIZ_INCORRECT: &str = "❌ Неправильно. Правильна відповідь:";
pub const QUIZ_CONTINUE: &str = "Бажаєте продовжити вікторину?";

pub const QUEST_TITLE: &str = "Квест «Подорож Соломії»";
pub const QUEST_CORRECT: &str = "✅ Правильно!";
pub const QUEST_WRONG: &str = "❌ Неправильна відповідь.";
pub const QUEST_RETRY: &str = "Спробуйте ще раз.";
pub const QUEST_COMPLETED: &str = "🎉 Вітаємо! Ви успішно завершили квест «Подорож Соломії»!\n\n\
    Ви прекрасно знаєте життя та творчість видатної української співачки.";

pub const FLOW_BUSY: &str = "Спершу завершіть поточну вікторину чи квест або натисніть /start, \
    щоб повернутися до головного меню.";
pub const NO_MUSEUM_EVENTS: &str = "На даний момент немає запланованих заходів у музеї. \
    Будь ласка, перевірте пізніше.";

/// Shown on an in-place edit that would not change the message
pub const CONTENT_UNCHANGED: &str = "Цей вміст уже показано.";
/// Shown instead of any internal error
pub const GENERIC_FAILURE: &str = "Вибачте, щось пішло не так. Спробуйте ще раз пізніше.";

/// Main menu layout
pub fn main_menu() -> Vec<Vec<String>> {
    rows(&[
        &[BIOGRAPHY, FACTS],
        &[AUDIO, QUIZ],
        &[PLACES, QUOTES],
        &[TIMELINE, PHOTOS],
        &[OPERA, QUEST],
        &[MUSEUM],
    ])
}

/// Museum submenu layout
pub fn museum_menu() -> Vec<Vec<String>> {
    rows(&[&[MUSEUM_FACTS], &[MUSEUM_DIRECTIONS, MUSEUM_EVENTS], &[BACK_TO_MAIN]])
}

fn rows(layout: &[&[&str]]) -> Vec<Vec<String>> {
    layout
        .iter()
        .map(|row| row.iter().map(|label| label.to_string()).collect())
        .collect()
}
