//! The player - continuous pose in world units, plus the jump state.
//! Owned and mutated only by the game loop, one update per frame.

use crate::{Grid, InputManager};
use sdl2::keyboard::Keycode;

const MOVE_SPEED: f64 = 180.0; // world units / second
const TURN_SPEED: f64 = 2.2; // radians / second
const JUMP_SPEED: f64 = 250.0;
const GRAVITY: f64 = 500.0;

pub struct Player {
    pub x: f64,
    pub y: f64,
    /// Heading angle, in radians.
    pub angle: f64,
    pub vertical_offset: f64,
    pub vertical_vel: f64,
    pub on_ground: bool,
    cell_size: f64,
}

impl Player {
    /// Spawns the player at the center of cell (1,1), the carve start.
    pub fn new(cell_size: f64) -> Self {
        Self {
            x: 1.5 * cell_size,
            y: 1.5 * cell_size,
            angle: 0.0,
            vertical_offset: 0.0,
            vertical_vel: 0.0,
            on_ground: true,
            cell_size,
        }
    }

    /// Apply held movement/turn keys and the jump trigger for this frame.
    pub fn handle_inputs(&mut self, inputs: &mut InputManager, grid: &Grid, elapsed_time: f64) {
        let speed = MOVE_SPEED * elapsed_time;
        let mut dx = 0.0;
        let mut dy = 0.0;
        if inputs.key(Keycode::W) || inputs.key(Keycode::Up) {
            dx += self.angle.cos() * speed;
            dy += self.angle.sin() * speed;
        }
        if inputs.key(Keycode::S) || inputs.key(Keycode::Down) {
            dx -= self.angle.cos() * speed;
            dy -= self.angle.sin() * speed;
        }
        if inputs.key(Keycode::A) || inputs.key(Keycode::Left) {
            self.angle -= TURN_SPEED * elapsed_time;
        }
        if inputs.key(Keycode::D) || inputs.key(Keycode::Right) {
            self.angle += TURN_SPEED * elapsed_time;
        }
        self.try_move(dx, dy, grid);

        if inputs.consume_key(Keycode::Space) && self.on_ground {
            self.vertical_vel = JUMP_SPEED;
            self.on_ground = false;
        }
        self.update_jump(elapsed_time);
    }

    /// Per-axis collision: each axis moves only if its destination cell is
    /// open, so the player slides along walls instead of sticking to them.
    pub fn try_move(&mut self, dx: f64, dy: f64, grid: &Grid) {
        let nx = self.x + dx;
        let ny = self.y + dy;
        if grid.is_open(self.to_cell(nx), self.to_cell(self.y)) {
            self.x = nx;
        }
        if grid.is_open(self.to_cell(self.x), self.to_cell(ny)) {
            self.y = ny;
        }
    }

    /// Screen row of the horizon, shifted by the jump offset.
    #[inline]
    pub fn mid_y(&self, scr_height: i32) -> i32 {
        scr_height / 2 + (self.vertical_offset as i32)
    }

    //------------------
    //  Internal stuff

    fn update_jump(&mut self, elapsed_time: f64) {
        if !self.on_ground {
            self.vertical_vel -= GRAVITY * elapsed_time;
            self.vertical_offset += self.vertical_vel * elapsed_time;
            if self.vertical_offset <= 0.0 {
                self.vertical_offset = 0.0;
                self.vertical_vel = 0.0;
                self.on_ground = true;
            }
        }
    }

    #[inline]
    fn to_cell(&self, world: f64) -> i32 {
        (world / self.cell_size).floor() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Grid;

    /// 3x3 grid with a single open cell in the middle, via the generator:
    /// a 3x3 maze carves only (1,1), plus the border openings at (1,0)
    /// and (1,2).
    fn tiny_grid() -> Grid {
        Grid::generate(3, 3, 0).unwrap()
    }

    #[test]
    fn moving_into_a_wall_blocks_only_that_axis() {
        let grid = tiny_grid();
        let mut player = Player::new(64.0);
        // center of cell (1,1); (2,1) is a wall, (1,0) and (1,2) are open
        assert_eq!((player.x, player.y), (96.0, 96.0));

        // diagonal move towards the wall on the east: X blocked, Y slides
        player.try_move(50.0, 20.0, &grid);
        assert_eq!(player.x, 96.0);
        assert_eq!(player.y, 116.0);
    }

    #[test]
    fn open_destination_moves_both_axes() {
        let grid = tiny_grid();
        let mut player = Player::new(64.0);
        // both destinations stay within open cells
        player.try_move(10.0, -60.0, &grid);
        assert_eq!(player.x, 106.0);
        assert_eq!(player.y, 36.0);
    }

    #[test]
    fn leaving_the_grid_is_blocked() {
        let grid = tiny_grid();
        let mut player = Player::new(64.0);
        // through the entrance (1,0) and beyond: y < 0 has no cells
        player.try_move(0.0, -200.0, &grid);
        assert_eq!(player.y, 96.0);
    }

    #[test]
    fn jump_arc_returns_to_ground() {
        let grid = tiny_grid();
        let mut player = Player::new(64.0);
        player.vertical_vel = JUMP_SPEED;
        player.on_ground = false;

        let dt = 1.0 / 60.0;
        let mut peak: f64 = 0.0;
        for _ in 0..120 {
            player.try_move(0.0, 0.0, &grid);
            player.update_jump(dt);
            peak = peak.max(player.vertical_offset);
        }
        // 250 up / 500 down gives a jump of roughly 60 units over ~1s
        assert!(peak > 30.0);
        assert!(player.on_ground);
        assert_eq!(player.vertical_offset, 0.0);
        assert_eq!(player.vertical_vel, 0.0);
    }
}
