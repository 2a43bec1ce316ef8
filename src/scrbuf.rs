//! ScreenBuffer - the RGB frame buffer everything paints into.
//! Recomputed every frame, then blitted to the window via a Painter.

use crate::Painter;

/// One RGB pixel/color.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RGB {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RGB {
    pub const BLACK: RGB = RGB::from(0, 0, 0);

    #[inline]
    pub const fn from(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub struct ScreenBuffer {
    width: i32,
    height: i32,
    pixels: Vec<RGB>,
}

impl ScreenBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0);
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![RGB::BLACK; len],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn clear(&mut self, color: RGB) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: RGB) {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> RGB {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            RGB::BLACK
        }
    }

    /// Fill a rectangle; coordinates are clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: RGB) {
        let (x0, y0, x1, y1) = self.clip_rect(x, y, w, h);
        for yy in y0..y1 {
            let ofs = (yy * self.width) as usize;
            self.pixels[ofs + (x0 as usize)..ofs + (x1 as usize)].fill(color);
        }
    }

    /// Fill a rectangle, blending the color over what is already there.
    /// Alpha 255 = fully opaque, 0 = invisible.
    pub fn fill_rect_blended(&mut self, x: i32, y: i32, w: i32, h: i32, color: RGB, alpha: u8) {
        let (x0, y0, x1, y1) = self.clip_rect(x, y, w, h);
        let a = alpha as u32;
        for yy in y0..y1 {
            for xx in x0..x1 {
                let idx = (yy * self.width + xx) as usize;
                self.pixels[idx] = blend(self.pixels[idx], color, a);
            }
        }
    }

    /// Vertical line of the given thickness, clipped to the buffer.
    pub fn draw_vert_line(&mut self, x: i32, y: i32, len: i32, thickness: i32, color: RGB) {
        self.fill_rect(x, y, thickness, len, color);
    }

    /// Filled circle, used for the player marker on the minimap.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: RGB) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.put_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Bresenham line of the given thickness (thickness is applied as a
    /// small square around each point - good enough for the minimap).
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, thickness: i32, color: RGB) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            if thickness <= 1 {
                self.put_pixel(x, y, color);
            } else {
                self.fill_rect(x, y, thickness, thickness, color);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Blit the buffer onto the window layer.
    pub fn paint(&self, painter: &mut dyn Painter) {
        let mut idx = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                painter.draw_pixel(x, y, self.pixels[idx]);
                idx += 1;
            }
        }
    }

    //------------------
    //  Internal stuff

    fn clip_rect(&self, x: i32, y: i32, w: i32, h: i32) -> (i32, i32, i32, i32) {
        let x0 = Ord::max(x, 0);
        let y0 = Ord::max(y, 0);
        let x1 = Ord::min(x + Ord::max(w, 0), self.width);
        let y1 = Ord::min(y + Ord::max(h, 0), self.height);
        (x0, y0, Ord::max(x1, x0), Ord::max(y1, y0))
    }
}

#[inline]
fn blend(below: RGB, above: RGB, alpha: u32) -> RGB {
    let mix = |a: u8, b: u8| -> u8 { (((b as u32) * alpha + (a as u32) * (255 - alpha)) / 255) as u8 };
    RGB {
        r: mix(below.r, above.r),
        g: mix(below.g, above.g),
        b: mix(below.b, above.b),
    }
}
