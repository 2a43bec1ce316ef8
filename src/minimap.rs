//! MinimapRenderer - top-down scaled overlay of the occupancy grid,
//! with the player position and heading drawn on top.

use crate::{Grid, Player, ScreenBuffer, RGB};

const BACKDROP_COLOR: RGB = RGB::from(40, 40, 40);
const WALL_COLOR: RGB = RGB::from(200, 200, 200);
const OPEN_COLOR: RGB = RGB::from(30, 30, 30);
const PLAYER_COLOR: RGB = RGB::from(255, 0, 0);
const HEADING_COLOR: RGB = RGB::from(0, 255, 0);

/// Screen offset of the overlay's top-left corner.
const MAP_OFS: i32 = 5;
/// The 3D view stays slightly visible below the overlay.
const MAP_ALPHA: u8 = 200;
/// Gap between painted cells, in pixels.
const CELL_GAP: i32 = 2;
/// Length of the heading indicator, in world units.
const HEADING_LEN: f64 = 20.0;
const PLAYER_RADIUS: i32 = 5;

pub struct MinimapRenderer {
    map_scale: f64,
    cell_size: f64,
}

impl MinimapRenderer {
    pub fn new(map_scale: f64, cell_size: f64) -> Self {
        Self { map_scale, cell_size }
    }

    pub fn paint(&self, grid: &Grid, player: &Player, scrbuf: &mut ScreenBuffer) {
        let cell_px = self.cell_size * self.map_scale;
        let mini_w = ((grid.width() as f64) * cell_px) as i32;
        let mini_h = ((grid.height() as f64) * cell_px) as i32;
        scrbuf.fill_rect_blended(MAP_OFS, MAP_OFS, mini_w, mini_h, BACKDROP_COLOR, MAP_ALPHA);

        // the grid itself
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let color = if grid.is_wall(x, y) { WALL_COLOR } else { OPEN_COLOR };
                let ix = MAP_OFS + (((x as f64) * cell_px) as i32);
                let iy = MAP_OFS + (((y as f64) * cell_px) as i32);
                let side = (cell_px as i32) - CELL_GAP;
                scrbuf.fill_rect_blended(ix, iy, side, side, color, MAP_ALPHA);
            }
        }

        // player marker + heading indicator
        let px = MAP_OFS + ((player.x * self.map_scale) as i32);
        let py = MAP_OFS + ((player.y * self.map_scale) as i32);
        let hx = MAP_OFS + (((player.x + player.angle.cos() * HEADING_LEN) * self.map_scale) as i32);
        let hy = MAP_OFS + (((player.y + player.angle.sin() * HEADING_LEN) * self.map_scale) as i32);
        scrbuf.fill_circle(px, py, PLAYER_RADIUS, PLAYER_COLOR);
        scrbuf.draw_line(px, py, hx, hy, 2, HEADING_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_draws_walls_player_and_heading() {
        let grid = Grid::from_rows(&["###", "#.#", "###"]);
        let mut player = Player::new(64.0);
        player.x = 96.0;
        player.y = 96.0;

        let mut scrbuf = ScreenBuffer::new(100, 100);
        let minimap = MinimapRenderer::new(0.25, 64.0);
        minimap.paint(&grid, &player, &mut scrbuf);

        // wall cell (0,0) is blended light gray over black
        let wall_px = scrbuf.get_pixel(MAP_OFS + 1, MAP_OFS + 1);
        assert!(wall_px.r > 100 && wall_px.r == wall_px.g && wall_px.g == wall_px.b);
        // player disc at the scaled position (below the heading line)
        let player_px = scrbuf.get_pixel(MAP_OFS + 24, MAP_OFS + 24 + 2);
        assert_eq!(player_px, PLAYER_COLOR);
        // heading points east (angle 0), ending past the disc
        let heading_px = scrbuf.get_pixel(MAP_OFS + 24 + PLAYER_RADIUS + 1, MAP_OFS + 24);
        assert_eq!(heading_px, HEADING_COLOR);
    }
}
