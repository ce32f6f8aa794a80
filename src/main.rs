//! Solomiya Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::utils::command::BotCommands as TeloxideBotCommands;
use tracing::{info, warn, error, debug};

use solomiya_bot::{
    config::Settings,
    content::load_content,
    handlers::build_registry,
    routing::{EventRouter, Routed},
    state::{SessionStore, SessionStoreManager},
    transport::telegram::{acknowledge_quietly, event_from_callback, event_from_message, TelegramTransport},
    utils::logging,
    BotError,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(TeloxideBotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Solomiya Bot Commands")]
enum BotCommands {
    #[command(description = "Show the main menu")]
    Start,
    #[command(description = "Show help information")]
    Help,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes file logs on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", solomiya_bot::info());

    info!(path = %settings.content.path, "Loading content...");
    let content = load_content(&settings.content.path)
        .await
        .with_context(|| format!("Failed to load content from {}", settings.content.path))?;

    // Initialize session management
    let sessions = SessionStore::new();
    let mut session_manager = SessionStoreManager::new(
        sessions.clone(),
        Duration::from_secs(settings.sessions.cleanup_interval_seconds),
    );
    session_manager.start_cleanup();

    let registry = build_registry();
    info!(triggers = registry.len(), "Trigger registry built");

    let router = Arc::new(
        EventRouter::new(registry, sessions, Arc::new(content))
            .with_max_redispatch_depth(settings.sessions.max_redispatch_depth),
    );

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);
    if let Err(e) = bot.set_my_commands(BotCommands::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![router])
        .default_handler(|upd| async move {
            debug!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Solomiya bot is ready, starting polling...");
    dispatcher.dispatch().await;

    session_manager.stop_cleanup();
    info!("Solomiya bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_callback_query().endpoint(handle_callback))
}

/// Handle text messages, commands included
async fn handle_message(bot: Bot, msg: Message, router: Arc<EventRouter>) -> HandlerResult {
    let Some(event) = event_from_message(&msg) else {
        debug!(chat_id = ?msg.chat.id, "Ignoring message without text or sender");
        return Ok(());
    };
    let user_id = event.user_id;
    let transport = TelegramTransport::for_message(bot, &msg);

    match router.dispatch(event, &transport).await {
        Ok(routed) => {
            record_action(user_id, &routed);
            Ok(())
        }
        Err(e) => {
            log_handler_error(user_id, &e, "Error handling message");
            if let Err(notice_error) = transport.send_failure_notice().await {
                warn!(user_id = user_id, error = %notice_error, "Failed to send failure notice");
            }
            Err(e.into())
        }
    }
}

/// Handle inline button presses
async fn handle_callback(bot: Bot, query: CallbackQuery, router: Arc<EventRouter>) -> HandlerResult {
    let event = event_from_callback(&query);
    let transport = TelegramTransport::for_callback(bot, query);

    let Some(event) = event else {
        acknowledge_quietly(&transport).await;
        return Ok(());
    };
    let user_id = event.user_id;

    let result = router.dispatch(event, &transport).await;
    acknowledge_quietly(&transport).await;

    match result {
        Ok(routed) => {
            record_action(user_id, &routed);
            Ok(())
        }
        Err(e) => {
            log_handler_error(user_id, &e, "Error handling callback query");
            if let Err(notice_error) = transport.send_failure_notice().await {
                warn!(user_id = user_id, error = %notice_error, "Failed to send failure notice");
            }
            Err(e.into())
        }
    }
}

/// Transient Bot API and I/O failures are warnings, the rest are errors
fn log_handler_error(user_id: i64, e: &BotError, what: &str) {
    if e.is_recoverable() {
        warn!(user_id = user_id, severity = %e.severity(), error = %e, "{}", what);
    } else {
        error!(user_id = user_id, severity = %e.severity(), error = %e, "{}", what);
    }
}

fn record_action(user_id: i64, routed: &Routed) {
    if let Some(trigger) = routed.trigger() {
        logging::log_user_action(user_id, trigger, None);
    }
}
