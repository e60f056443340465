//! Human-readable text for runtime events.

use game_core::{BattleOutcome, SettingsAction, Side};
use runtime::{BattleTrigger, GameEvent};

use crate::message::MessageLevel;

/// Formats `event` as a log line, or `None` if it has nothing to say.
pub fn format_event(event: &GameEvent) -> Option<(String, MessageLevel)> {
    let formatted = match event {
        GameEvent::StateChanged { from, to } => {
            (format!("{from} -> {to}"), MessageLevel::Info)
        }
        GameEvent::BattleStarted { trigger } => {
            let text = match trigger {
                BattleTrigger::Collision => "An enemy blocks the way!",
                BattleTrigger::Toggle => "You challenge the enemy.",
            };
            (text.to_owned(), MessageLevel::Info)
        }
        GameEvent::BattleEnded { outcome: None } => {
            ("You slip away from the battle.".to_owned(), MessageLevel::Info)
        }
        GameEvent::BattleEnded { outcome: Some(_) } => {
            ("You leave the battlefield.".to_owned(), MessageLevel::Info)
        }
        GameEvent::Attacked {
            attacker,
            attacker_name,
            defender_name,
            damage,
            remaining_health,
        } => {
            let level = match attacker {
                Side::Player => MessageLevel::Info,
                Side::Enemy => MessageLevel::Warning,
            };
            let text = format!(
                "{attacker_name} hits {defender_name} for {damage} damage ({remaining_health} HP left)"
            );
            (text, level)
        }
        GameEvent::Defeated { name, outcome, .. } => match outcome {
            BattleOutcome::Victory => (format!("{name} is defeated. Victory!"), MessageLevel::Info),
            BattleOutcome::Defeat => (format!("{name} falls..."), MessageLevel::Error),
        },
        GameEvent::SettingChanged(change) => {
            let label = match change.setting {
                SettingsAction::Music => "Music volume",
                SettingsAction::Sound => "Sound effects",
                SettingsAction::Shake => "Screen shake",
                SettingsAction::Difficulty => "Difficulty",
                SettingsAction::Back => return None,
            };
            (format!("{label} set to {}", change.value), MessageLevel::Info)
        }
        GameEvent::QuitRequested => return None,
    };
    Some(formatted)
}
