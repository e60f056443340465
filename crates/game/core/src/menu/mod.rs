//! Selection lists used by the title, settings and credits screens.
//!
//! A [`Menu`] is an ordered, non-empty list of [`MenuItem`]s with one selected
//! entry. Navigation always wraps modulo the item count, so the selection can
//! never point outside the list.

mod main_menu;
mod settings;

pub use main_menu::{MainMenu, MainMenuAction};
pub use settings::{
    Difficulty, SettingChange, SettingValue, Settings, SettingsAction, SettingsMenu,
    SettingsResponse, Volume,
};

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::input::InputEvent;
use crate::state::Position;

/// Font size menu entries are drawn with unless stated otherwise.
pub const DEFAULT_ITEM_SIZE: u16 = 36;

/// Errors raised while building a menu.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("a menu needs at least one item")]
    Empty,

    #[error("a menu holds at most {capacity} items")]
    CapacityExceeded { capacity: usize },
}

impl GameError for MenuError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "MENU_EMPTY",
            Self::CapacityExceeded { .. } => "MENU_CAPACITY_EXCEEDED",
        }
    }
}

/// One selectable entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem<A> {
    pub label: &'static str,
    pub action: A,
    /// Anchor point the label is centered on.
    pub position: Position,
    pub size: u16,
    /// Mirrors whether this entry is the selected one as of the last update.
    pub is_selected: bool,
}

impl<A> MenuItem<A> {
    pub fn new(label: &'static str, action: A, position: Position) -> Self {
        Self {
            label,
            action,
            position,
            size: DEFAULT_ITEM_SIZE,
            is_selected: false,
        }
    }
}

/// Non-empty list of items with wraparound selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu<A> {
    items: ArrayVec<MenuItem<A>, { GameConfig::MAX_MENU_ITEMS }>,
    selected_index: usize,
}

impl<A: Copy> Menu<A> {
    pub fn new(items: impl IntoIterator<Item = MenuItem<A>>) -> Result<Self, MenuError> {
        let mut list = ArrayVec::new();
        for item in items {
            list.try_push(item).map_err(|_| MenuError::CapacityExceeded {
                capacity: GameConfig::MAX_MENU_ITEMS,
            })?;
        }
        if list.is_empty() {
            return Err(MenuError::Empty);
        }

        let mut menu = Self {
            items: list,
            selected_index: 0,
        };
        menu.refresh_highlight();
        Ok(menu)
    }

    /// Up/Down move the selection, Confirm yields the selected action.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<A> {
        match event {
            InputEvent::Up => self.select_previous(),
            InputEvent::Down => self.select_next(),
            InputEvent::Confirm => return Some(self.selected().action),
            _ => {}
        }
        None
    }

    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    pub fn select_previous(&mut self) {
        let len = self.items.len();
        self.selected_index = (self.selected_index + len - 1) % len;
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> &MenuItem<A> {
        &self.items[self.selected_index]
    }

    pub fn items(&self) -> &[MenuItem<A>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Syncs every item's highlighted flag with the current selection.
    pub fn refresh_highlight(&mut self) {
        let selected = self.selected_index;
        for (index, item) in self.items.iter_mut().enumerate() {
            item.is_selected = index == selected;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(len: usize) -> Menu<usize> {
        Menu::new((0..len).map(|i| MenuItem::new("item", i, Position::new(0, i as i32)))).unwrap()
    }

    #[test]
    fn rejects_empty_and_oversized_lists() {
        assert_eq!(menu_result(0), Err(MenuError::Empty));
        assert_eq!(
            menu_result(GameConfig::MAX_MENU_ITEMS + 1),
            Err(MenuError::CapacityExceeded {
                capacity: GameConfig::MAX_MENU_ITEMS
            })
        );
        assert_eq!(MenuError::Empty.severity(), ErrorSeverity::Validation);
        assert_eq!(MenuError::Empty.error_code(), "MENU_EMPTY");
    }

    fn menu_result(len: usize) -> Result<Menu<usize>, MenuError> {
        Menu::new((0..len).map(|i| MenuItem::new("item", i, Position::ORIGIN)))
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut menu = menu(4);
        menu.handle_input(InputEvent::Up);
        assert_eq!(menu.selected_index(), 3);
        menu.handle_input(InputEvent::Down);
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn confirm_returns_selected_action() {
        let mut menu = menu(3);
        assert_eq!(menu.handle_input(InputEvent::Down), None);
        assert_eq!(menu.handle_input(InputEvent::Down), None);
        assert_eq!(menu.handle_input(InputEvent::Confirm), Some(2));
    }

    #[test]
    fn other_inputs_are_ignored() {
        let mut menu = menu(3);
        for event in [
            InputEvent::Left,
            InputEvent::Right,
            InputEvent::Cancel,
            InputEvent::ToggleBattle,
        ] {
            assert_eq!(menu.handle_input(event), None);
        }
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn single_item_menu_stays_put() {
        let mut menu = menu(1);
        menu.select_next();
        menu.select_previous();
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn highlight_follows_refresh() {
        let mut menu = menu(3);
        assert!(menu.items()[0].is_selected);

        menu.select_next();
        assert!(menu.items()[0].is_selected);

        menu.refresh_highlight();
        let flags: Vec<bool> = menu.items().iter().map(|item| item.is_selected).collect();
        assert_eq!(flags, [false, true, false]);
    }
}
