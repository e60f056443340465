//! Drawing interface and the frame recorder.
//!
//! The application draws through [`RenderSurface`] in world units (top-left
//! origin, playfield-sized). [`Scene`] records those calls so any host can
//! replay them at its own resolution, and tests can inspect what was drawn.

use game_core::{Color, Position, Rect};

/// Which point of a text's bounding box `position` refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Center(Position),
    MidLeft(Position),
    TopLeft(Position),
    BottomRight(Position),
}

impl Anchor {
    pub fn position(self) -> Position {
        match self {
            Self::Center(position)
            | Self::MidLeft(position)
            | Self::TopLeft(position)
            | Self::BottomRight(position) => position,
        }
    }
}

/// Minimal drawing primitives the application needs.
pub trait RenderSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_text(&mut self, text: &str, size: u16, color: Color, anchor: Anchor);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        size: u16,
        color: Color,
        anchor: Anchor,
    },
}

/// Ordered draw commands of one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text commands in draw order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Color)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, color, .. } => Some((text.as_str(), *color)),
            DrawCommand::FillRect { .. } => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|(text, _)| text == needle)
    }

    /// Color `needle` was last drawn with, if it was drawn at all.
    pub fn text_color(&self, needle: &str) -> Option<Color> {
        self.texts()
            .filter(|(text, _)| *text == needle)
            .map(|(_, color)| color)
            .last()
    }

    /// Filled rectangles in draw order.
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
            DrawCommand::Text { .. } => None,
        })
    }
}

impl RenderSurface for Scene {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, size: u16, color: Color, anchor: Anchor) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            size,
            color,
            anchor,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_draw_order() {
        let mut scene = Scene::new();
        scene.fill_rect(Rect::new(0, 0, 10, 10), Color::BLACK);
        scene.draw_text("hi", 36, Color::WHITE, Anchor::Center(Position::ORIGIN));
        scene.draw_text("hi", 36, Color::GOLD, Anchor::Center(Position::ORIGIN));

        assert_eq!(scene.commands().len(), 3);
        assert!(scene.contains_text("hi"));
        assert_eq!(scene.text_color("hi"), Some(Color::GOLD));
        assert_eq!(scene.rects().count(), 1);

        scene.clear();
        assert!(scene.commands().is_empty());
    }
}
