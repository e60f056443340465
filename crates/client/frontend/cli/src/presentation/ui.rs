//! Composes the widgets into the terminal layout.
//!
//! Header on top, the scaled scene below it, then the message log and a line
//! of key hints.
use game_core::Rect as WorldRect;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use runtime::RenderedFrame;

use client_frontend_core::message::MessageLog;

use crate::presentation::{theme::RatatuiTheme, widgets};

/// Everything one terminal frame is drawn from.
pub struct RenderContext<'a> {
    pub frame: RenderedFrame<'a>,
    pub messages: &'a MessageLog,
    pub world: WorldRect,
    pub message_panel_height: u16,
}

pub fn render(frame: &mut Frame, ctx: &RenderContext, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(0),                           // Scene
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(1),                        // Footer
        ])
        .split(frame.area());

    widgets::header::render(
        frame,
        chunks[0],
        ctx.frame.mode,
        ctx.messages.len(),
        theme,
    );
    frame.render_widget(
        widgets::SceneView::new(ctx.frame.scene, ctx.world, *theme),
        chunks[1],
    );
    widgets::messages::render(frame, chunks[2], ctx.messages, theme);
    widgets::footer::render(frame, chunks[3], ctx.frame.mode);
}
