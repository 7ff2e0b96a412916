use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::{
    domain::config::BackdropGradient,
    surface::{Rgba, Viewport},
    ui::raster::Raster,
};

pub const HALF_BLOCK: &str = "▀";

/// Weather gradient with the particle layer composited on top.
///
/// Each cell shows two pixels: the upper half-block takes the top pixel as
/// foreground, the cell background is the bottom pixel.
pub struct SkyBackdrop<'a> {
    pub gradient: &'a BackdropGradient,
    pub particles: Option<&'a Raster>,
    pub scale: f32,
}

impl Widget for SkyBackdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = Viewport::new(
            f32::from(area.width) * self.scale,
            f32::from(area.height) * 2.0 * self.scale,
        );
        for row in 0..area.height {
            for col in 0..area.width {
                let top = self.pixel(col, row * 2, viewport);
                let bottom = self.pixel(col, row * 2 + 1, viewport);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(HALF_BLOCK).set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}

impl SkyBackdrop<'_> {
    fn pixel(&self, x: u16, y: u16, viewport: Viewport) -> Color {
        let center_x = (f32::from(x) + 0.5) * self.scale;
        let center_y = (f32::from(y) + 0.5) * self.scale;
        let base = self.gradient.color_at(center_x, center_y, viewport);
        let (r, g, b) = self.particles.map_or((base.r, base.g, base.b), |raster| {
            raster.composite_over(usize::from(x), usize::from(y), base)
        });
        Color::Rgb(r, g, b)
    }
}

#[must_use]
pub fn rgb(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
