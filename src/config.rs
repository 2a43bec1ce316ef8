//! Startup configuration and the projection constants derived from it.

use std::f64::consts::PI;

/// All the knobs, fixed at startup.
pub struct GameConfig {
    pub scr_width: i32,
    pub scr_height: i32,
    pub target_fps: u32,
    pub maze_width: usize,
    pub maze_height: usize,
    /// Size of one maze cell, in world units.
    pub cell_size: f64,
    /// Horizontal field of view, in radians.
    pub fov: f64,
    /// Number of rays = number of wall columns per frame.
    pub num_rays: usize,
    /// Minimap size, relative to the world (0.25 => 16 px per 64-unit cell).
    pub map_scale: f64,
    /// Seed for maze carving and wall color. Same seed => same run.
    pub seed: u64,
}

impl GameConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            scr_width: 1024,
            scr_height: 768,
            target_fps: 60,
            maze_width: 47,
            maze_height: 47,
            cell_size: 64.0,
            fov: PI / 3.0,
            num_rays: 400,
            map_scale: 0.25,
            seed,
        }
    }
}

/// Projection constants, computed once from the config and read-only afterwards.
pub struct Projection {
    /// Angle between two consecutive rays.
    pub delta_angle: f64,
    /// Distance from the eye to the projection plane, in columns.
    pub dist: f64,
    /// Numerator of the wall height formula.
    pub proj_coeff: f64,
    /// Horizontal screen pixels covered by one ray.
    pub column_scale: f64,
    /// Rays are abandoned beyond this raw depth.
    pub max_depth: f64,
    pub fov: f64,
    pub num_rays: usize,
    pub cell_size: f64,
}

impl Projection {
    pub fn new(cfg: &GameConfig) -> Self {
        let dist = (cfg.num_rays as f64) / (2.0 * (cfg.fov / 2.0).tan());
        Self {
            delta_angle: cfg.fov / (cfg.num_rays as f64),
            dist,
            proj_coeff: 3.0 * dist * cfg.cell_size,
            column_scale: (cfg.scr_width as f64) / (cfg.num_rays as f64),
            max_depth: (cfg.maze_width as f64) * cfg.cell_size,
            fov: cfg.fov,
            num_rays: cfg.num_rays,
            cell_size: cfg.cell_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_constants() {
        let cfg = GameConfig::new(0);
        let proj = Projection::new(&cfg);
        // 400 rays over 60 degrees
        assert!((proj.delta_angle - PI / 3.0 / 400.0).abs() < 1e-12);
        // dist = NUM_RAYS / (2 * tan(FOV/2)) = 400 / (2 * tan(30 deg))
        let expected_dist = 400.0 / (2.0 * (PI / 6.0).tan());
        assert!((proj.dist - expected_dist).abs() < 1e-9);
        assert!((proj.proj_coeff - 3.0 * expected_dist * 64.0).abs() < 1e-6);
        assert!((proj.column_scale - 2.56).abs() < 1e-12);
        assert!((proj.max_depth - 47.0 * 64.0).abs() < 1e-12);
    }
}
