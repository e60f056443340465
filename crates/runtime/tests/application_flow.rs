//! End-to-end behavior of the application state machine.

use game_core::{
    BattleOutcome, CharacterTemplate, Color, HeldKeys, InputEvent, SettingValue, SettingsAction,
    Side, Volume,
};
use runtime::{AppMode, Application, BattleTrigger, GameEvent, RuntimeConfig, Scene};

fn app() -> Application {
    Application::new(&RuntimeConfig::default()).unwrap()
}

fn press(app: &mut Application, events: &[InputEvent]) {
    for &event in events {
        app.handle_input(event);
    }
}

fn playing() -> Application {
    let mut app = app();
    press(&mut app, &[InputEvent::Confirm]);
    app.drain_events();
    app
}

fn battling() -> Application {
    let mut app = playing();
    press(&mut app, &[InputEvent::ToggleBattle]);
    app.drain_events();
    app
}

fn draw(app: &Application) -> Scene {
    let mut scene = Scene::new();
    app.draw(&mut scene);
    scene
}

#[test]
fn start_game_spawns_characters() {
    let mut app = app();
    assert_eq!(app.mode(), AppMode::Menu);
    assert!(app.session().is_none());

    press(&mut app, &[InputEvent::Confirm]);

    assert_eq!(app.mode(), AppMode::Playing);
    let session = app.session().unwrap();
    assert_eq!(
        session.roster.player.character.position(),
        CharacterTemplate::HERO.spawn.position()
    );
    assert_eq!(
        app.drain_events(),
        [GameEvent::StateChanged {
            from: AppMode::Menu,
            to: AppMode::Playing,
        }]
    );
}

#[test]
fn cancel_on_menu_quits() {
    let mut app = app();
    press(&mut app, &[InputEvent::Cancel]);

    assert!(!app.is_running());
    assert!(app.drain_events().contains(&GameEvent::QuitRequested));
}

#[test]
fn quit_menu_entry_quits() {
    let mut app = app();
    press(&mut app, &[InputEvent::Up, InputEvent::Confirm]);
    assert!(!app.is_running());
}

#[test]
fn close_request_quits_from_any_state() {
    let mut app = battling();
    press(&mut app, &[InputEvent::Quit]);
    assert!(!app.is_running());

    // A stopped application ignores further input.
    press(&mut app, &[InputEvent::Cancel]);
    assert_eq!(app.mode(), AppMode::Battling);
}

#[test]
fn settings_changes_survive_leaving_the_screen() {
    let mut app = app();
    press(&mut app, &[InputEvent::Down, InputEvent::Confirm]);
    assert_eq!(app.mode(), AppMode::Settings);

    press(&mut app, &[InputEvent::Right]);
    let events = app.drain_events();
    assert!(events.iter().any(|event| matches!(
        event,
        GameEvent::SettingChanged(change)
            if change.setting == SettingsAction::Music
                && change.value == SettingValue::Volume(Volume::new(80))
    )));

    press(&mut app, &[InputEvent::Cancel]);
    assert_eq!(app.mode(), AppMode::Menu);

    press(&mut app, &[InputEvent::Confirm]);
    assert_eq!(app.mode(), AppMode::Settings);
    assert_eq!(app.settings_menu().settings().music_volume.percent(), 80);
}

#[test]
fn back_entry_returns_to_menu() {
    let mut app = app();
    press(&mut app, &[InputEvent::Down, InputEvent::Confirm, InputEvent::Up]);
    press(&mut app, &[InputEvent::Confirm]);
    assert_eq!(app.mode(), AppMode::Menu);
}

#[test]
fn credits_close_on_confirm_or_cancel() {
    let mut app = app();
    press(&mut app, &[InputEvent::Down, InputEvent::Down, InputEvent::Confirm]);
    assert_eq!(app.mode(), AppMode::Credits);
    assert!(draw(&app).contains_text("Credits"));

    press(&mut app, &[InputEvent::Confirm]);
    assert_eq!(app.mode(), AppMode::Menu);

    press(&mut app, &[InputEvent::Confirm, InputEvent::Cancel]);
    assert_eq!(app.mode(), AppMode::Menu);
}

#[test]
fn toggling_battle_keeps_characters() {
    let mut app = playing();
    for _ in 0..3 {
        app.update(HeldKeys::DOWN);
    }
    let moved = app.session().unwrap().roster.player.character.position();

    press(&mut app, &[InputEvent::ToggleBattle]);
    assert_eq!(app.mode(), AppMode::Battling);
    assert!(
        app.drain_events()
            .contains(&GameEvent::BattleStarted {
                trigger: BattleTrigger::Toggle
            })
    );

    press(&mut app, &[InputEvent::ToggleBattle]);
    assert_eq!(app.mode(), AppMode::Playing);
    assert!(
        app.drain_events()
            .contains(&GameEvent::BattleEnded { outcome: None })
    );
    assert_eq!(
        app.session().unwrap().roster.player.character.position(),
        moved
    );
}

#[test]
fn walking_into_the_enemy_starts_a_battle() {
    let mut app = playing();
    let mut frames = 0;

    while app.mode() == AppMode::Playing {
        app.update(HeldKeys::RIGHT);
        frames += 1;
        assert!(frames < 240, "no collision after {frames} frames");
    }

    assert_eq!(app.mode(), AppMode::Battling);
    assert!(
        app.drain_events()
            .contains(&GameEvent::BattleStarted {
                trigger: BattleTrigger::Collision
            })
    );
}

#[test]
fn confirm_fights_and_the_enemy_answers() {
    let mut app = battling();

    app.update(HeldKeys::CONFIRM);
    app.update(HeldKeys::empty());

    let events = app.drain_events();
    assert_eq!(
        events,
        [
            GameEvent::Attacked {
                attacker: Side::Player,
                attacker_name: "Hero",
                defender_name: "Warden",
                damage: 1,
                remaining_health: 149,
            },
            GameEvent::Attacked {
                attacker: Side::Enemy,
                attacker_name: "Warden",
                defender_name: "Hero",
                damage: 15,
                remaining_health: 85,
            },
        ]
    );
}

#[test]
fn battle_ends_in_defeat_and_stays_on_screen() {
    let mut app = battling();
    let mut defeated = None;

    for _ in 0..1_000 {
        app.update(HeldKeys::CONFIRM);
        for event in app.drain_events() {
            if let GameEvent::Defeated { side, outcome, .. } = event {
                defeated = Some((side, outcome));
            }
        }
        if defeated.is_some() {
            break;
        }
    }

    assert_eq!(defeated, Some((Side::Player, BattleOutcome::Defeat)));
    assert_eq!(app.mode(), AppMode::Battling);

    for _ in 0..60 {
        app.update(HeldKeys::CONFIRM);
    }
    assert!(app.drain_events().is_empty());
    assert!(draw(&app).contains_text("You are defeated..."));
}

#[test]
fn defeated_hero_cannot_fight_a_rematch() {
    let mut app = battling();
    for _ in 0..1_000 {
        app.update(HeldKeys::CONFIRM);
        if app.drain_events().iter().any(|e| matches!(e, GameEvent::Defeated { .. })) {
            break;
        }
    }
    let warden_health = app.session().unwrap().roster.characters()[2].health().current;

    press(&mut app, &[InputEvent::ToggleBattle, InputEvent::ToggleBattle]);
    assert_eq!(app.mode(), AppMode::Battling);
    let battle = app.session().unwrap().battle.as_ref().unwrap();
    assert_eq!(battle.outcome(), Some(BattleOutcome::Defeat));
    app.drain_events();

    for _ in 0..40 {
        app.update(HeldKeys::CONFIRM);
    }
    assert!(
        !app.drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::Attacked { .. } | GameEvent::Defeated { .. }))
    );
    let roster = &app.session().unwrap().roster;
    assert_eq!(roster.characters()[0].health().current, 0);
    assert_eq!(roster.characters()[2].health().current, warden_health);
    assert!(draw(&app).contains_text("You are defeated..."));
}

#[test]
fn escape_while_exploring_returns_to_menu() {
    let mut app = playing();
    app.update(HeldKeys::RIGHT);
    press(&mut app, &[InputEvent::Cancel]);

    assert_eq!(app.mode(), AppMode::Menu);
    assert!(app.session().is_none());
    assert_eq!(
        app.drain_events(),
        [GameEvent::StateChanged {
            from: AppMode::Playing,
            to: AppMode::Menu,
        }]
    );
}

#[test]
fn escape_abandons_the_session() {
    let mut app = battling();
    press(&mut app, &[InputEvent::Cancel]);

    assert_eq!(app.mode(), AppMode::Menu);
    assert!(app.session().is_none());
    assert_eq!(
        app.drain_events(),
        [GameEvent::StateChanged {
            from: AppMode::Battling,
            to: AppMode::Menu,
        }]
    );
}

#[test]
fn main_menu_highlights_selection() {
    let mut app = app();
    app.update(HeldKeys::empty());
    let scene = draw(&app);

    assert!(scene.contains_text("Dark World"));
    assert!(scene.contains_text(&format!("v{}", env!("CARGO_PKG_VERSION"))));
    assert_eq!(scene.text_color("Start Game"), Some(Color::GOLD));
    assert_eq!(scene.text_color("Quit"), Some(Color::WHITE));

    press(&mut app, &[InputEvent::Down]);
    app.update(HeldKeys::empty());
    let scene = draw(&app);
    assert_eq!(scene.text_color("Settings"), Some(Color::GOLD));
    assert_eq!(scene.text_color("Start Game"), Some(Color::WHITE));
}

#[test]
fn settings_screen_shows_values() {
    let mut app = app();
    press(&mut app, &[InputEvent::Down, InputEvent::Confirm]);
    let scene = draw(&app);

    for value in ["70%", "80%", "On", "Normal"] {
        assert!(scene.contains_text(value), "missing {value}");
    }
}

#[test]
fn battle_scene_draws_only_the_combatants() {
    let app = battling();
    let scene = draw(&app);

    assert_eq!(scene.text_color("FIGHT"), Some(Color::RED));
    assert_eq!(scene.text_color("MERCY"), Some(Color::BLACK));
    assert!(scene.contains_text("Your turn"));

    let bodies: Vec<Color> = scene
        .rects()
        .map(|(_, color)| color)
        .filter(|color| [Color::BLUE, Color::PINK, Color::BROWN].contains(color))
        .collect();
    assert_eq!(bodies, [Color::BLUE, Color::BROWN]);
}

#[test]
fn exploration_scene_draws_health_bars() {
    let app = playing();
    let scene = draw(&app);

    let bars: Vec<_> = scene
        .rects()
        .filter(|(_, color)| *color == Color::RED)
        .collect();
    assert_eq!(bars.len(), 3);

    let hero = CharacterTemplate::HERO.spawn;
    assert!(bars.iter().any(|(rect, _)| rect.x == hero.x
        && rect.y == hero.y - 10
        && rect.width == hero.width
        && rect.height == 5));
}
