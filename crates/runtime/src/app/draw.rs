use game_core::{
    Battle, BattleOutcome, BattleStatus, Character, Color, GameConfig, MainMenu, MenuItem,
    Position, Rect, SettingsMenu, Side,
};

use super::Session;
use crate::render::{Anchor, RenderSurface};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HEADING_SIZE: u16 = 72;
const BODY_SIZE: u16 = 36;
const FOOTNOTE_SIZE: u16 = 24;

const HEALTH_BAR_GAP: i32 = 10;
const HEALTH_BAR_HEIGHT: i32 = 5;

const BATTLE_PANEL_HEIGHT: i32 = 100;

const CREDITS: [&str; 3] = [
    "Dark World",
    "An exploration and battle prototype",
    "Made by the Dark World contributors",
];

pub(super) fn main_menu<S: RenderSurface + ?Sized>(
    menu: &MainMenu,
    config: &GameConfig,
    surface: &mut S,
) {
    surface.fill_rect(config.playfield(), Color::DARK_GRAY);
    surface.draw_text(
        MainMenu::TITLE,
        MainMenu::TITLE_SIZE,
        menu.title_color(),
        Anchor::Center(menu.title_position()),
    );
    for item in menu.menu().items() {
        menu_item(item, surface);
    }
    surface.draw_text(
        &format!("v{VERSION}"),
        FOOTNOTE_SIZE,
        Color::GRAY,
        Anchor::BottomRight(Position::new(
            config.playfield_width - 10,
            config.playfield_height - 10,
        )),
    );
}

pub(super) fn settings<S: RenderSurface + ?Sized>(
    menu: &SettingsMenu,
    config: &GameConfig,
    surface: &mut S,
) {
    surface.fill_rect(config.playfield(), Color::DARK_GRAY);
    heading(SettingsMenu::TITLE, config, surface);

    for item in menu.menu().items() {
        menu_item(item, surface);
        if let Some(value) = menu.settings().value(item.action) {
            let x = item.position.x + SettingsMenu::VALUE_OFFSET;
            let anchor = Anchor::MidLeft(Position::new(x, item.position.y));
            surface.draw_text(&value.to_string(), item.size, Color::WHITE, anchor);
        }
    }
}

pub(super) fn credits<S: RenderSurface + ?Sized>(config: &GameConfig, surface: &mut S) {
    surface.fill_rect(config.playfield(), Color::DARK_GRAY);
    heading("Credits", config, surface);

    let center_x = config.playfield_width / 2;
    for (line, y) in CREDITS.iter().zip((220..).step_by(60)) {
        let anchor = Anchor::Center(Position::new(center_x, y));
        surface.draw_text(line, BODY_SIZE, Color::WHITE, anchor);
    }
    surface.draw_text(
        "Press Confirm or Cancel to return",
        FOOTNOTE_SIZE,
        Color::GRAY,
        Anchor::Center(Position::new(center_x, config.playfield_height - 50)),
    );
}

pub(super) fn session<S: RenderSurface + ?Sized>(
    session: &Session,
    config: &GameConfig,
    surface: &mut S,
) {
    surface.fill_rect(config.playfield(), Color::BLACK);

    let roster = &session.roster;
    match &session.battle {
        Some(battle) => {
            battle_panel(battle, &roster.enemy.character, config, surface);
            draw_character(&roster.player.character, surface);
            draw_character(&roster.enemy.character, surface);
        }
        None => {
            for member in roster.characters() {
                draw_character(member, surface);
            }
        }
    }
}

fn heading<S: RenderSurface + ?Sized>(title: &str, config: &GameConfig, surface: &mut S) {
    surface.draw_text(
        title,
        HEADING_SIZE,
        Color::WHITE,
        Anchor::Center(Position::new(config.playfield_width / 2, 100)),
    );
}

fn menu_item<A, S: RenderSurface + ?Sized>(item: &MenuItem<A>, surface: &mut S) {
    let color = if item.is_selected {
        Color::GOLD
    } else {
        Color::WHITE
    };
    surface.draw_text(item.label, item.size, color, Anchor::Center(item.position));
}

/// Body plus a red health bar above it, as wide as the remaining health.
fn draw_character<S: RenderSurface + ?Sized>(character: &Character, surface: &mut S) {
    let bounds = character.bounds;
    surface.fill_rect(bounds, character.color);

    let width = (bounds.width as f32 * character.health().ratio()) as i32;
    if width > 0 {
        surface.fill_rect(
            Rect::new(bounds.x, bounds.y - HEALTH_BAR_GAP, width, HEALTH_BAR_HEIGHT),
            Color::RED,
        );
    }
}

fn battle_panel<S: RenderSurface + ?Sized>(
    battle: &Battle,
    enemy: &Character,
    config: &GameConfig,
    surface: &mut S,
) {
    let top = config.playfield_height - BATTLE_PANEL_HEIGHT;
    surface.fill_rect(
        Rect::new(0, top, config.playfield_width, BATTLE_PANEL_HEIGHT),
        Color::WHITE,
    );

    for (index, action) in battle.actions().iter().enumerate() {
        let color = if index == battle.selected_index() {
            Color::RED
        } else {
            Color::BLACK
        };
        let x = 50 + index as i32 * 200;
        surface.draw_text(
            &action.to_string(),
            BODY_SIZE,
            color,
            Anchor::TopLeft(Position::new(x, config.playfield_height - 60)),
        );
    }

    let banner = match battle.status() {
        BattleStatus::Turn(Side::Player) => "Your turn".to_owned(),
        BattleStatus::Turn(Side::Enemy) => format!("{}'s turn", enemy.name),
        BattleStatus::Ended(BattleOutcome::Victory) => format!("{} is defeated!", enemy.name),
        BattleStatus::Ended(BattleOutcome::Defeat) => "You are defeated...".to_owned(),
    };
    surface.draw_text(
        &banner,
        BODY_SIZE,
        Color::WHITE,
        Anchor::Center(Position::new(config.playfield_width / 2, top - 30)),
    );
}
