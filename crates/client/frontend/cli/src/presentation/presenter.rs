//! Terminal [`Presenter`] for the frame loop.
use client_frontend_core::{
    event::{EventConsumer, EventImpact},
    message::MessageLog,
};
use game_core::Rect as WorldRect;
use ratatui::layout::Size;
use runtime::{AppMode, Presenter, RenderedFrame, RuntimeError, Scene};

use crate::presentation::{
    event_consumer::CliEventConsumer,
    terminal::Tui,
    theme::RatatuiTheme,
    ui::{self, RenderContext},
};

/// What the terminal currently shows.
///
/// Frames identical to it are skipped, so an idle screen costs no terminal
/// writes.
#[derive(Debug, Default)]
struct Shown {
    scene: Scene,
    mode: Option<AppMode>,
    size: Option<Size>,
}

impl Shown {
    fn is_stale(&self, frame: &RenderedFrame<'_>, size: Size, impact: EventImpact) -> bool {
        impact.requires_redraw
            || self.mode != Some(frame.mode)
            || self.size != Some(size)
            || &self.scene != frame.scene
    }

    fn remember(&mut self, frame: &RenderedFrame<'_>, size: Size) {
        self.scene.clone_from(frame.scene);
        self.mode = Some(frame.mode);
        self.size = Some(size);
    }
}

/// Logs each frame's events and redraws the terminal when something changed.
pub struct CliPresenter {
    terminal: Tui,
    consumer: CliEventConsumer,
    theme: RatatuiTheme,
    world: WorldRect,
    message_panel_height: u16,
    shown: Shown,
}

impl CliPresenter {
    pub fn new(
        terminal: Tui,
        consumer: CliEventConsumer,
        world: WorldRect,
        message_panel_height: u16,
    ) -> Self {
        Self {
            terminal,
            consumer,
            theme: RatatuiTheme::new(),
            world,
            message_panel_height,
            shown: Shown::default(),
        }
    }

    pub fn messages(&self) -> &MessageLog {
        self.consumer.message_log()
    }
}

impl Presenter for CliPresenter {
    fn present(&mut self, frame: RenderedFrame<'_>) -> runtime::Result<()> {
        let impact = self.consumer.on_events(frame.events, frame.index);
        let size = self.terminal.size().map_err(RuntimeError::presentation)?;
        if !self.shown.is_stale(&frame, size, impact) {
            return Ok(());
        }

        let ctx = RenderContext {
            frame,
            messages: self.consumer.message_log(),
            world: self.world,
            message_panel_height: self.message_panel_height,
        };
        let theme = self.theme;
        self.terminal
            .draw(|f| ui::render(f, &ctx, &theme))
            .map_err(RuntimeError::presentation)?;

        self.shown.remember(&frame, size);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Color, Rect};
    use runtime::{GameEvent, RenderSurface};

    fn frame<'a>(scene: &'a Scene, mode: AppMode) -> RenderedFrame<'a> {
        RenderedFrame {
            index: 0,
            mode,
            scene,
            events: &[],
        }
    }

    #[test]
    fn unchanged_frames_are_skipped() {
        let size = Size::new(80, 24);
        let mut scene = Scene::new();
        scene.fill_rect(Rect::new(0, 0, 800, 600), Color::BLACK);
        let mut shown = Shown::default();

        let current = frame(&scene, AppMode::Playing);
        assert!(shown.is_stale(&current, size, EventImpact::none()));
        shown.remember(&current, size);
        assert!(!shown.is_stale(&current, size, EventImpact::none()));

        assert!(shown.is_stale(&current, size, EventImpact::redraw()));
        assert!(shown.is_stale(&current, Size::new(100, 30), EventImpact::none()));
        assert!(shown.is_stale(
            &frame(&scene, AppMode::Battling),
            size,
            EventImpact::none()
        ));
    }

    #[test]
    fn scene_changes_force_a_redraw() {
        let size = Size::new(80, 24);
        let mut scene = Scene::new();
        scene.fill_rect(Rect::new(0, 0, 800, 600), Color::BLACK);
        let mut shown = Shown::default();
        shown.remember(&frame(&scene, AppMode::Menu), size);

        scene.fill_rect(Rect::new(100, 300, 32, 32), Color::BLUE);
        assert!(shown.is_stale(&frame(&scene, AppMode::Menu), size, EventImpact::none()));
    }

    #[test]
    fn logged_events_request_a_redraw() {
        let mut consumer = CliEventConsumer::new(MessageLog::new(4), Default::default());
        let impact = consumer.on_events(&[GameEvent::BattleEnded { outcome: None }], 3);
        assert!(impact.requires_redraw);
    }
}
