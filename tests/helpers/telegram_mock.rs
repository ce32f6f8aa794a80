//! Mock Telegram API Server for testing
//!
//! Wiremock server answering the Bot API methods the transport uses, plus
//! builders for the update payloads teloxide deserializes.

use serde_json::{json, Value};
use teloxide::types::{CallbackQuery, Message};
use teloxide::Bot;
use wiremock::{
    matchers::{body_string_contains, method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_TOKEN: &str = "12345:test_token";
pub const TEST_USER_ID: i64 = 4242;
pub const TEST_MESSAGE_ID: i32 = 77;

/// Mock Telegram API server for testing. teloxide posts to PascalCase
/// method paths, so method names match case-insensitively.
pub struct TelegramMockServer {
    pub server: MockServer,
}

impl TelegramMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Bot pointed at the mock server
    pub fn bot(&self) -> Bot {
        let url = url::Url::parse(&self.server.uri()).expect("mock server uri should parse");
        Bot::new(TEST_TOKEN).set_api_url(url)
    }

    /// Expect `count` calls of `api_method`, each answered with `result`
    pub async fn mock_ok(&self, api_method: &str, result: Value, count: u64) {
        Mock::given(method("POST"))
            .and(path_regex(format!("(?i)/bot.*/{}$", api_method)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": result })))
            .expect(count)
            .mount(&self.server)
            .await;
    }

    /// Expect `count` calls of `api_method` whose body contains `needle`
    pub async fn mock_ok_containing(&self, api_method: &str, needle: &str, result: Value, count: u64) {
        Mock::given(method("POST"))
            .and(path_regex(format!("(?i)/bot.*/{}$", api_method)))
            .and(body_string_contains(needle))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": result })))
            .expect(count)
            .mount(&self.server)
            .await;
    }

    /// Answer `api_method` with a Bot API error
    pub async fn mock_error(&self, api_method: &str, description: &str, count: u64) {
        Mock::given(method("POST"))
            .and(path_regex(format!("(?i)/bot.*/{}$", api_method)))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "ok": false,
                "error_code": 400,
                "description": description
            })))
            .expect(count)
            .mount(&self.server)
            .await;
    }

    /// Answer sendMessage with a generic message, any number of times
    pub async fn mock_send_message(&self) {
        Mock::given(method("POST"))
            .and(path_regex("(?i)/bot.*/sendMessage$"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": message_json("ok") })),
            )
            .mount(&self.server)
            .await;
    }
}

fn user_json() -> Value {
    json!({
        "id": TEST_USER_ID,
        "is_bot": false,
        "first_name": "Test",
        "username": "test_user",
        "language_code": "uk"
    })
}

/// Private-chat text message from the test user
pub fn message_json(text: &str) -> Value {
    json!({
        "message_id": TEST_MESSAGE_ID,
        "date": 1640995200,
        "chat": {
            "id": TEST_USER_ID,
            "type": "private",
            "first_name": "Test",
            "username": "test_user"
        },
        "from": user_json(),
        "text": text
    })
}

pub fn text_message(text: &str) -> Message {
    serde_json::from_value(message_json(text)).expect("message fixture should deserialize")
}

/// Button press on a bot message carrying `data`
pub fn callback_query(data: &str) -> CallbackQuery {
    serde_json::from_value(json!({
        "id": "cbq-1",
        "from": user_json(),
        "chat_instance": "instance-1",
        "message": message_json("Факт 1"),
        "data": data
    }))
    .expect("callback fixture should deserialize")
}
