//! Paints a recorded [`Scene`] into a terminal buffer.
//!
//! World coordinates are scaled onto the widget area cell by cell. A filled
//! rectangle covers every cell it touches, so thin shapes such as health bars
//! stay visible at low resolutions. Text is placed by its anchor and clipped
//! to the area.

use game_core::{Position, Rect as WorldRect};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use runtime::{Anchor, DrawCommand, Scene};

use crate::presentation::theme::RatatuiTheme;

pub struct SceneView<'a> {
    scene: &'a Scene,
    world: WorldRect,
    theme: RatatuiTheme,
}

impl<'a> SceneView<'a> {
    /// `world` is the playfield the scene was drawn in.
    pub fn new(scene: &'a Scene, world: WorldRect, theme: RatatuiTheme) -> Self {
        Self {
            scene,
            world,
            theme,
        }
    }
}

/// Maps world units onto the cells of one widget area.
#[derive(Clone, Copy, Debug)]
struct Projection {
    area: Rect,
    world_width: i64,
    world_height: i64,
}

impl Projection {
    fn new(area: Rect, world: WorldRect) -> Self {
        Self {
            area,
            world_width: i64::from(world.width.max(1)),
            world_height: i64::from(world.height.max(1)),
        }
    }

    fn column_floor(&self, x: i32) -> i64 {
        (i64::from(x) * i64::from(self.area.width)).div_euclid(self.world_width)
    }

    fn column_ceil(&self, x: i32) -> i64 {
        (i64::from(x) * i64::from(self.area.width) + self.world_width - 1)
            .div_euclid(self.world_width)
    }

    fn row_floor(&self, y: i32) -> i64 {
        (i64::from(y) * i64::from(self.area.height)).div_euclid(self.world_height)
    }

    fn row_ceil(&self, y: i32) -> i64 {
        (i64::from(y) * i64::from(self.area.height) + self.world_height - 1)
            .div_euclid(self.world_height)
    }

    /// Cell span `[start, end)` of a world rectangle, clipped to the area.
    fn cells(&self, rect: WorldRect) -> Option<(u16, u16, u16, u16)> {
        if rect.width <= 0 || rect.height <= 0 {
            return None;
        }
        let x0 = self.column_floor(rect.x);
        let y0 = self.row_floor(rect.y);
        let x1 = self.column_ceil(rect.right()).max(x0 + 1);
        let y1 = self.row_ceil(rect.bottom()).max(y0 + 1);

        let width = i64::from(self.area.width);
        let height = i64::from(self.area.height);
        let (x0, x1) = (x0.clamp(0, width), x1.clamp(0, width));
        let (y0, y1) = (y0.clamp(0, height), y1.clamp(0, height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        Some((
            self.area.x + x0 as u16,
            self.area.y + y0 as u16,
            self.area.x + x1 as u16,
            self.area.y + y1 as u16,
        ))
    }

    /// Cell for a world point, unclipped and relative to the area.
    fn point(&self, position: Position) -> (i64, i64) {
        (self.column_floor(position.x), self.row_floor(position.y))
    }
}

impl Widget for SceneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let projection = Projection::new(area, self.world);

        for command in self.scene.commands() {
            match command {
                DrawCommand::FillRect { rect, color } => {
                    let Some((x0, y0, x1, y1)) = projection.cells(*rect) else {
                        continue;
                    };
                    let bg = self.theme.color(*color);
                    for y in y0..y1 {
                        for x in x0..x1 {
                            if let Some(cell) = buf.cell_mut((x, y)) {
                                cell.set_symbol(" ").set_bg(bg);
                            }
                        }
                    }
                }
                DrawCommand::Text {
                    text,
                    size,
                    color,
                    anchor,
                } => draw_text(
                    buf,
                    &projection,
                    text,
                    self.theme.text(*color, *size),
                    *anchor,
                ),
            }
        }
    }
}

fn draw_text(
    buf: &mut Buffer,
    projection: &Projection,
    text: &str,
    style: ratatui::style::Style,
    anchor: Anchor,
) {
    let area = projection.area;
    let length = text.chars().count() as i64;
    let (column, row) = projection.point(anchor.position());
    let (column, row) = match anchor {
        Anchor::Center(_) => (column - length / 2, row),
        Anchor::MidLeft(_) | Anchor::TopLeft(_) => (column, row),
        Anchor::BottomRight(_) => (column - length, row - 1),
    };

    let width = i64::from(area.width);
    let height = i64::from(area.height);
    if row < 0 || row >= height || column >= width {
        return;
    }

    // Text running off the left edge loses its leading characters.
    let skipped = (-column).max(0);
    let column = column.max(0);
    let visible: String = text.chars().skip(skipped as usize).collect();
    let max_width = (width - column) as usize;

    buf.set_stringn(
        area.x + column as u16,
        area.y + row as u16,
        visible,
        max_width,
        style,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Color;
    use ratatui::style::Color as TermColor;
    use runtime::RenderSurface;

    const WORLD: WorldRect = WorldRect::new(0, 0, 800, 600);

    fn render(scene: &Scene, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        SceneView::new(scene, WORLD, RatatuiTheme::new()).render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_owned())
            .collect()
    }

    #[test]
    fn background_fills_every_cell() {
        let mut scene = Scene::new();
        scene.fill_rect(WORLD, Color::DARK_GRAY);

        let buf = render(&scene, 80, 24);

        assert_eq!(buf[(0, 0)].bg, TermColor::Rgb(40, 40, 40));
        assert_eq!(buf[(79, 23)].bg, TermColor::Rgb(40, 40, 40));
    }

    #[test]
    fn thin_rect_still_covers_a_cell() {
        let mut scene = Scene::new();
        scene.fill_rect(WorldRect::new(100, 90, 50, 5), Color::RED);

        let buf = render(&scene, 80, 24);

        // 100/800*80 = 10, 90/600*24 = 3.6
        assert_eq!(buf[(10, 3)].bg, TermColor::Rgb(255, 0, 0));
        assert_eq!(buf[(14, 3)].bg, TermColor::Rgb(255, 0, 0));
        assert_eq!(buf[(15, 3)].bg, TermColor::Reset);
        assert_eq!(buf[(10, 4)].bg, TermColor::Reset);
    }

    #[test]
    fn centered_text_keeps_background() {
        let mut scene = Scene::new();
        scene.fill_rect(WORLD, Color::BLACK);
        scene.draw_text(
            "Start",
            48,
            Color::GOLD,
            Anchor::Center(Position::new(400, 300)),
        );

        let buf = render(&scene, 80, 24);

        assert_eq!(&row_text(&buf, 12)[38..43], "Start");
        let cell = &buf[(38, 12)];
        assert_eq!(cell.fg, TermColor::Rgb(255, 215, 0));
        assert_eq!(cell.bg, TermColor::Rgb(0, 0, 0));
    }

    #[test]
    fn bottom_right_text_ends_at_the_anchor() {
        let mut scene = Scene::new();
        scene.draw_text(
            "v0.1.0",
            24,
            Color::GRAY,
            Anchor::BottomRight(Position::new(790, 590)),
        );

        let buf = render(&scene, 80, 24);

        assert!(row_text(&buf, 22).ends_with("v0.1.0 "));
    }

    #[test]
    fn text_off_the_left_edge_is_clipped() {
        let mut scene = Scene::new();
        scene.draw_text(
            "abcdef",
            24,
            Color::WHITE,
            Anchor::Center(Position::new(0, 0)),
        );

        let buf = render(&scene, 20, 10);

        assert!(row_text(&buf, 0).starts_with("def"));
    }
}
