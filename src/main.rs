//! MAZE3D - a procedurally generated maze, walked in first person via a
//! grid-marching ray caster.
//! Main starting point.

use maze3d::*;

const PIXEL_SIZE: i32 = 1;
const SLEEP_KIND: SleepKind = SleepKind::SLEEP(1);

fn main() {
    // an explicit seed makes the run reproducible: `maze3d <seed>`
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .expect("ERROR in MAZE3D: the seed must be an unsigned integer"),
        None => fastrand::u64(..),
    };
    println!("MAZE3D seed: {seed}");

    let cfg = GameConfig::new(seed);
    let sdl_config = SdlConfiguration::new(
        "MAZE3D - Auto Generated",
        cfg.scr_width,
        cfg.scr_height,
        PIXEL_SIZE,
        cfg.target_fps,
        SLEEP_KIND,
    );

    // main game loop
    let result = GameLoop::new(&cfg).and_then(|mut gameloop| run_game_loop(&sdl_config, &mut gameloop));

    match result {
        Ok(_) => println!("MAZE3D finished OK :)"),
        Err(msg) => println!("ERROR in MAZE3D: {msg}"),
    }
}
