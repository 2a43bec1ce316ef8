//! ThreeDRenderer - composes the first-person frame: sky, floor, then
//! the shaded wall spans produced by the ray caster.

use crate::{Grid, Player, Projection, RayCaster, ScreenBuffer, RGB};

const SKY_COLOR: RGB = RGB::from(45, 45, 45);
const FLOOR_COLOR: RGB = RGB::from(25, 25, 25);
const EDGE_COLOR: RGB = RGB::BLACK;

/// Decay constant of the distance shading.
const SHADE_DECAY: f64 = 2e-5;

pub struct ThreeDRenderer {
    base_color: RGB,
}

impl ThreeDRenderer {
    /// The base wall color stays fixed for the whole session.
    pub fn new(base_color: RGB) -> Self {
        Self { base_color }
    }

    pub fn paint(&self, grid: &Grid, proj: &Projection, player: &Player, scrbuf: &mut ScreenBuffer) {
        let w = scrbuf.width();
        let h = scrbuf.height();
        let mid_y = player.mid_y(h);

        // sky above the (jump-shifted) horizon, floor below
        scrbuf.fill_rect(0, 0, w, mid_y, SKY_COLOR);
        scrbuf.fill_rect(0, mid_y, w, h - mid_y, FLOOR_COLOR);

        let caster = RayCaster::new(grid, proj, (player.x, player.y), player.angle);
        for span in caster.cast_all(mid_y) {
            let color = shade_color(self.base_color, span.depth);
            scrbuf.fill_rect(span.x, span.top, span.width, span.height, color);
            if span.edge {
                // thin contrasting line, delineating separate wall faces
                scrbuf.draw_vert_line(span.x, span.top, span.height, 1, EDGE_COLOR);
            }
        }
    }
}

/// Darken the base color with distance - a cheap fog approximation.
/// Pure, so it can be checked without a display surface.
pub fn shade_color(base: RGB, depth_corrected: f64) -> RGB {
    let shade = 1.0 / (1.0 + depth_corrected * depth_corrected * SHADE_DECAY);
    let scaled = |c: u8| -> u8 { (((c as f64) * shade) as i64).clamp(0, 255) as u8 };
    RGB {
        r: scaled(base.r),
        g: scaled(base.g),
        b: scaled(base.b),
    }
}
