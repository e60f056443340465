//! Top-level application state machine.
//!
//! [`Application`] owns every piece of game state. The frame loop feeds it
//! input events, then calls [`Application::update`] and [`Application::draw`]
//! once per frame. Characters exist only inside a play [`Session`], and a
//! session holds a battle only while the application is battling.

mod draw;

use std::mem;

use game_core::{
    Battle, BattleEngine, BattleEvent, BattleOutcome, GameConfig, GameError, HeldKeys, InputEvent,
    MainMenu, MainMenuAction, MenuError, Roster, SettingsAction, SettingsMenu, SettingsResponse,
    Side,
};
use tracing::{debug, error, info};

use crate::{Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::events::{AppMode, BattleTrigger, GameEvent};
use crate::render::RenderSurface;

/// Characters and the optional battle of one play-through.
#[derive(Debug)]
pub struct Session {
    pub roster: Roster,
    pub battle: Option<Battle>,
}

impl Session {
    fn start(config: &GameConfig) -> Self {
        Self {
            roster: Roster::spawn(config),
            battle: None,
        }
    }

    /// A fallen combatant makes the new battle open already decided.
    fn open_battle(&mut self) {
        let (player, enemy) = self.roster.combatants();
        self.battle = Some(Battle::between(player, enemy));
    }
}

#[derive(Debug)]
enum Screen {
    Menu,
    Settings,
    Credits,
    Playing(Session),
}

pub struct Application {
    config: GameConfig,
    main_menu: MainMenu,
    settings_menu: SettingsMenu,
    screen: Screen,
    running: bool,
    events: Vec<GameEvent>,
}

impl Application {
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        Ok(Self {
            main_menu: MainMenu::new(&config.game).map_err(menu_failed)?,
            settings_menu: SettingsMenu::new(&config.game, config.settings)
                .map_err(menu_failed)?,
            config: config.game.clone(),
            screen: Screen::Menu,
            running: true,
            events: Vec::new(),
        })
    }

    pub fn mode(&self) -> AppMode {
        match &self.screen {
            Screen::Menu => AppMode::Menu,
            Screen::Settings => AppMode::Settings,
            Screen::Credits => AppMode::Credits,
            Screen::Playing(Session { battle: None, .. }) => AppMode::Playing,
            Screen::Playing(Session {
                battle: Some(_), ..
            }) => AppMode::Battling,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Playing(session) => Some(session),
            _ => None,
        }
    }

    pub fn main_menu(&self) -> &MainMenu {
        &self.main_menu
    }

    pub fn settings_menu(&self) -> &SettingsMenu {
        &self.settings_menu
    }

    /// Takes the events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Dispatches one input event to the active screen.
    pub fn handle_input(&mut self, event: InputEvent) {
        if !self.running {
            return;
        }

        let before = self.mode();
        if event == InputEvent::Quit {
            self.quit();
        } else {
            match self.screen {
                Screen::Menu => self.handle_menu_input(event),
                Screen::Settings => self.handle_settings_input(event),
                Screen::Credits => self.handle_credits_input(event),
                Screen::Playing(_) => self.handle_session_input(event),
            }
        }
        self.note_transition(before);
    }

    fn handle_menu_input(&mut self, event: InputEvent) {
        if event == InputEvent::Cancel {
            self.quit();
            return;
        }

        match self.main_menu.handle_input(event) {
            Some(MainMenuAction::Start) => {
                self.screen = Screen::Playing(Session::start(&self.config));
            }
            Some(MainMenuAction::Settings) => self.screen = Screen::Settings,
            Some(MainMenuAction::Credits) => self.screen = Screen::Credits,
            Some(MainMenuAction::Quit) => self.quit(),
            None => {}
        }
    }

    fn handle_settings_input(&mut self, event: InputEvent) {
        if event == InputEvent::Cancel {
            self.screen = Screen::Menu;
            return;
        }

        match self.settings_menu.handle_input(event) {
            Some(SettingsResponse::Selected(SettingsAction::Back)) => self.screen = Screen::Menu,
            Some(SettingsResponse::Changed(change)) => {
                debug!(setting = %change.setting, value = %change.value, "setting changed");
                self.events.push(GameEvent::SettingChanged(change));
            }
            Some(SettingsResponse::Selected(_)) | None => {}
        }
    }

    fn handle_credits_input(&mut self, event: InputEvent) {
        if matches!(event, InputEvent::Confirm | InputEvent::Cancel) {
            self.screen = Screen::Menu;
        }
    }

    fn handle_session_input(&mut self, event: InputEvent) {
        let Screen::Playing(session) = &mut self.screen else {
            return;
        };

        match event {
            InputEvent::Cancel => self.screen = Screen::Menu,
            InputEvent::ToggleBattle => match session.battle.take() {
                Some(battle) => {
                    let outcome = battle.outcome();
                    info!(?outcome, exchanges = battle.exchanges(), "battle left");
                    self.events.push(GameEvent::BattleEnded { outcome });
                }
                None => {
                    session.open_battle();
                    self.battle_started(BattleTrigger::Toggle);
                }
            },
            _ => {}
        }
    }

    /// Runs the active screen's per-frame logic.
    pub fn update(&mut self, held: HeldKeys) {
        if !self.running {
            return;
        }

        let before = self.mode();
        match &mut self.screen {
            Screen::Menu => self.main_menu.update(),
            Screen::Settings => self.settings_menu.update(),
            Screen::Credits => {}
            Screen::Playing(session) => match session.battle.as_mut() {
                Some(battle) => {
                    let (player, enemy) = session.roster.combatants_mut();
                    let names = [player.name, enemy.name];
                    let events = BattleEngine::new(battle, player, enemy, &self.config)
                        .update(held.confirm());
                    for event in events {
                        self.events.push(describe_battle_event(event, names));
                    }
                }
                None => {
                    session.roster.update(held);
                    if session.roster.player_meets_enemy() {
                        session.open_battle();
                        self.battle_started(BattleTrigger::Collision);
                    }
                }
            },
        }
        self.note_transition(before);
    }

    /// Draws the active screen.
    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        match &self.screen {
            Screen::Menu => draw::main_menu(&self.main_menu, &self.config, surface),
            Screen::Settings => draw::settings(&self.settings_menu, &self.config, surface),
            Screen::Credits => draw::credits(&self.config, surface),
            Screen::Playing(session) => draw::session(session, &self.config, surface),
        }
    }

    fn battle_started(&mut self, trigger: BattleTrigger) {
        info!(%trigger, "battle started");
        self.events.push(GameEvent::BattleStarted { trigger });
    }

    fn quit(&mut self) {
        info!("quit requested");
        self.running = false;
        self.events.push(GameEvent::QuitRequested);
    }

    fn note_transition(&mut self, from: AppMode) {
        let to = self.mode();
        if from != to {
            info!(%from, %to, "state changed");
            self.events.push(GameEvent::StateChanged { from, to });
        }
    }
}

/// Attaches character names to a resolver event and logs it.
fn menu_failed(err: MenuError) -> RuntimeError {
    error!(
        code = err.error_code(),
        severity = err.severity().as_str(),
        %err,
        "menu construction failed"
    );
    RuntimeError::from(err)
}

fn describe_battle_event(event: BattleEvent, [player, enemy]: [&'static str; 2]) -> GameEvent {
    let name_of = |side: Side| match side {
        Side::Player => player,
        Side::Enemy => enemy,
    };

    match event {
        BattleEvent::Attack {
            attacker,
            damage,
            remaining_health,
        } => {
            debug!(%attacker, damage, remaining_health, "attack resolved");
            GameEvent::Attacked {
                attacker,
                attacker_name: name_of(attacker),
                defender_name: name_of(attacker.opponent()),
                damage,
                remaining_health,
            }
        }
        BattleEvent::Defeated { side } => {
            let outcome = BattleOutcome::for_defeated(side);
            info!(%side, %outcome, "combatant defeated");
            GameEvent::Defeated {
                side,
                name: name_of(side),
                outcome,
            }
        }
    }
}
