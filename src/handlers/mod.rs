//! Bot handlers module
//!
//! This module contains all handlers and the registration order that binds
//! them to triggers:
//! - Menu handlers for commands and navigation
//! - Static content handlers
//! - Quiz and quest handlers driving the session state machines

pub mod content;
pub mod labels;
pub mod menu;
pub mod quest;
pub mod quiz;

use crate::routing::{DropReason, Event, Matcher, Trigger, TriggerRegistry};
use crate::state::SessionState;
use crate::utils::helpers::parse_callback_index;

/// Build the trigger registry. Order matters: the first matching trigger
/// handles the event.
pub fn build_registry() -> TriggerRegistry {
    let mut registry = TriggerRegistry::new();

    registry
        .register(Trigger::new("start", command(labels::CMD_START), menu::start))
        .register(Trigger::new("help", command(labels::CMD_HELP), menu::help))
        .register(Trigger::new("biography", text(labels::BIOGRAPHY), content::biography))
        .register(Trigger::new("facts", text(labels::FACTS), content::facts))
        .register(Trigger::new("audio_list", text(labels::AUDIO), content::audio_list))
        .register(Trigger::new("quiz_start", text(labels::QUIZ), quiz::start).requires(SessionState::Idle))
        .register(Trigger::new("memorial_places", text(labels::PLACES), content::memorial_places))
        .register(Trigger::new("quotes", text(labels::QUOTES), content::quotes))
        .register(Trigger::new("timeline", text(labels::TIMELINE), content::timeline))
        .register(Trigger::new("photo_list", text(labels::PHOTOS), content::photo_list))
        .register(Trigger::new("opera_of_the_day", text(labels::OPERA), content::opera_of_the_day))
        .register(Trigger::new("quest_start", text(labels::QUEST), quest::start).requires(SessionState::Idle))
        .register(Trigger::new("museum", text(labels::MUSEUM), menu::museum))
        .register(Trigger::new("museum_facts", text(labels::MUSEUM_FACTS), content::museum_facts))
        .register(Trigger::new("museum_directions", text(labels::MUSEUM_DIRECTIONS), content::museum_directions))
        .register(Trigger::new("museum_events", text(labels::MUSEUM_EVENTS), content::museum_events))
        .register(Trigger::new("back_to_main", text(labels::BACK_TO_MAIN), menu::back_to_main))
        // only reached when the state-bound entries above did not fire
        .register(Trigger::new("quiz_busy", text(labels::QUIZ), menu::flow_busy))
        .register(Trigger::new("quest_busy", text(labels::QUEST), menu::flow_busy))
        .register(Trigger::new("next_fact", callback(labels::NEXT_FACT), content::next_fact))
        .register(Trigger::new("next_quote", callback(labels::NEXT_QUOTE), content::next_quote))
        .register(Trigger::new("audio_item", callback_prefix(labels::AUDIO_PREFIX), content::audio_item))
        .register(Trigger::new("photo_item", callback_prefix(labels::PHOTO_PREFIX), content::photo_item))
        .register(
            Trigger::new("quiz_answer", callback_prefix(labels::QUIZ_ANSWER_PREFIX), quiz::answer)
                .requires(SessionState::AwaitingQuizAnswer),
        )
        .register(Trigger::new("quiz_more", callback(labels::MORE_QUIZ), quiz::more))
        .register(
            Trigger::new("quest_option", callback_prefix(labels::QUEST_OPTION_PREFIX), quest::choose)
                .requires(SessionState::InQuest),
        );

    registry
}

fn text(label: &str) -> Matcher {
    Matcher::ExactText(label.to_string())
}

fn command(name: &str) -> Matcher {
    Matcher::Command(name.to_string())
}

fn callback(token: &str) -> Matcher {
    Matcher::CallbackExact(token.to_string())
}

fn callback_prefix(prefix: &str) -> Matcher {
    Matcher::CallbackPrefix(prefix.to_string())
}

/// Resolve an indexed callback such as `audio_3` against a content list
pub(crate) fn indexed_item<'a, T>(
    event: &Event,
    prefix: &str,
    items: &'a [T],
) -> Result<&'a T, DropReason> {
    let index = parse_callback_index(event.payload(), prefix).ok_or(DropReason::MalformedCallback)?;
    items.get(index).ok_or(DropReason::IndexOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_trigger_names_are_unique() {
        let registry = build_registry();
        let names: HashSet<_> = registry.names().collect();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn test_every_menu_label_has_a_trigger() {
        let registry = build_registry();
        let labels = labels::main_menu().into_iter().chain(labels::museum_menu()).flatten();
        for label in labels {
            let event = Event::text(1, label.clone());
            assert!(
                registry.find(&event, &crate::state::Session::Idle).is_some(),
                "no trigger for menu label {}",
                label
            );
        }
    }

    #[test]
    fn test_indexed_item() {
        let items = ["a", "b"];
        assert_eq!(indexed_item(&Event::callback(1, "audio_1"), "audio_", &items), Ok(&"b"));
        assert_eq!(
            indexed_item(&Event::callback(1, "audio_2"), "audio_", &items),
            Err(DropReason::IndexOutOfRange)
        );
        assert_eq!(
            indexed_item(&Event::callback(1, "audio_"), "audio_", &items),
            Err(DropReason::MalformedCallback)
        );
    }
}
