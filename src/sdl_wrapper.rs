//! Small wrapper over SDL2 - window setup, event pump, frame pacing.
//! The game itself only implements [`GraphicsLoop`] and paints pixels
//! through a [`Painter`], so no SDL types leak into the game code.

use crate::RGB;
use sdl2::event::Event;
use sdl2::pixels::PixelFormatEnum;
use std::thread;
use std::time::{Duration, Instant};

/// How to give back CPU time between frames.
#[derive(Clone, Copy)]
pub enum SleepKind {
    SLEEP(u32),
    YIELD,
    NONE,
}

/// Window + timing configuration, set up once in `main`.
pub struct SdlConfiguration {
    title: String,
    width: i32,
    height: i32,
    pixel_size: i32,
    target_fps: u32,
    sleep_kind: SleepKind,
}

impl SdlConfiguration {
    pub fn new(title: &str, width: i32, height: i32, pixel_size: i32, target_fps: u32, sleep_kind: SleepKind) -> Self {
        assert!(width > 0 && height > 0 && pixel_size > 0 && target_fps > 0);
        Self {
            title: String::from(title),
            width,
            height,
            pixel_size,
            target_fps,
            sleep_kind,
        }
    }
}

/// Painting abstraction, so the frame buffer does not depend on SDL.
pub trait Painter {
    fn draw_pixel(&mut self, x: i32, y: i32, color: RGB);
}

/// Implemented by the game loop facade.
pub trait GraphicsLoop {
    /// Return `false` to quit the game.
    fn handle_event(&mut self, event: &Event) -> bool;
    /// Return `false` to quit the game.
    fn update_state(&mut self, elapsed_time: f64) -> bool;
    fn paint(&self, painter: &mut dyn Painter);
}

/// Runs the main game loop until the game signals quit or the window is closed.
pub fn run_game_loop(cfg: &SdlConfiguration, gfx_loop: &mut dyn GraphicsLoop) -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let win_width = (cfg.width * cfg.pixel_size) as u32;
    let win_height = (cfg.height * cfg.pixel_size) as u32;
    let window = video_subsystem
        .window(&cfg.title, win_width, win_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::RGB24, cfg.width as u32, cfg.height as u32)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;
    let frame_budget = Duration::from_secs_f64(1.0 / (cfg.target_fps as f64));
    let mut last_moment = Instant::now();

    'running: loop {
        let frame_start = Instant::now();

        // consume the event queue
        for event in event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                break 'running;
            }
            if !gfx_loop.handle_event(&event) {
                break 'running;
            }
        }

        // update state, based on the elapsed time
        let next_moment = Instant::now();
        let elapsed_time = next_moment.duration_since(last_moment).as_secs_f64();
        last_moment = next_moment;
        if !gfx_loop.update_state(elapsed_time) {
            break 'running;
        }

        // paint the frame into the streaming texture, then flip
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            let mut painter = TexturePainter { buffer, pitch };
            gfx_loop.paint(&mut painter);
        })?;
        canvas.copy(&texture, None, None)?;
        canvas.present();

        // pace towards the target frame rate
        let frame_time = frame_start.elapsed();
        if frame_time < frame_budget {
            thread::sleep(frame_budget - frame_time);
        } else {
            match cfg.sleep_kind {
                SleepKind::SLEEP(ms) => thread::sleep(Duration::from_millis(ms as u64)),
                SleepKind::YIELD => thread::yield_now(),
                SleepKind::NONE => {}
            }
        }
    }

    Ok(())
}

//------------------
//  Internal stuff

/// Paints pixels straight into the locked RGB24 texture.
struct TexturePainter<'a> {
    buffer: &'a mut [u8],
    pitch: usize,
}

impl<'a> Painter for TexturePainter<'a> {
    #[inline]
    fn draw_pixel(&mut self, x: i32, y: i32, color: RGB) {
        let ofs = (y as usize) * self.pitch + (x as usize) * 3;
        self.buffer[ofs] = color.r;
        self.buffer[ofs + 1] = color.g;
        self.buffer[ofs + 2] = color.b;
    }
}
