//! Main game loop facade - owns the grid, the player and the renderers,
//! and wires them into the window wrapper.

use crate::*;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

// keeps the wall color from replaying the carving draws of the same seed
const WALL_COLOR_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

pub struct GameLoop {
    scrbuf: ScreenBuffer,
    projection: Projection,
    grid: Grid,
    player: Player,
    renderer: ThreeDRenderer,
    minimap: MinimapRenderer,
    inputs: InputManager,
    show_minimap: bool,
}

impl GameLoop {
    pub fn new(cfg: &GameConfig) -> Result<Self, String> {
        let grid = Grid::generate(cfg.maze_width, cfg.maze_height, cfg.seed).map_err(|e| e.to_string())?;

        // one random base wall color per session, in the bright range
        let rng = fastrand::Rng::with_seed(cfg.seed ^ WALL_COLOR_STREAM);
        let base_color = RGB::from(rng.u8(120..=255), rng.u8(120..=255), rng.u8(120..=255));

        Ok(Self {
            scrbuf: ScreenBuffer::new(cfg.scr_width, cfg.scr_height),
            projection: Projection::new(cfg),
            grid,
            player: Player::new(cfg.cell_size),
            renderer: ThreeDRenderer::new(base_color),
            minimap: MinimapRenderer::new(cfg.map_scale, cfg.cell_size),
            inputs: InputManager::new(),
            show_minimap: false,
        })
    }
}

impl GraphicsLoop for GameLoop {
    fn handle_event(&mut self, event: &Event) -> bool {
        self.inputs.handle_event(event);
        // quick exit via Esc
        !self.inputs.consume_key(Keycode::Escape)
    }

    fn update_state(&mut self, elapsed_time: f64) -> bool {
        if self.inputs.consume_key(Keycode::M) {
            self.show_minimap = !self.show_minimap;
        }

        self.player.handle_inputs(&mut self.inputs, &self.grid, elapsed_time);

        self.renderer.paint(&self.grid, &self.projection, &self.player, &mut self.scrbuf);
        if self.show_minimap {
            self.minimap.paint(&self.grid, &self.player, &mut self.scrbuf);
        }
        true
    }

    fn paint(&self, painter: &mut dyn Painter) {
        self.scrbuf.paint(painter);
    }
}
