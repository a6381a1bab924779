use crate::error::*;
use crate::*;
use std::path::Path;

const PPM_MAX: i64 = 255;
const PPM_LINE_MAX: usize = 70;

/// Destination of rendered pixels.
pub trait ImageSink {
    fn put_pixel(&mut self, x: usize, y: usize, color: RGB);
}

#[derive(Clone, Debug)]
pub struct Image {
    w: usize,
    h: usize,
    buf: Vec<RGB>,
}

impl Image {
    pub fn new(w: usize, h: usize) -> Self {
        let mut buf = Vec::new();
        buf.resize(w * h, RGB::black());
        Image { w, h, buf }
    }

    pub fn at(&self, x: usize, y: usize) -> &RGB {
        &self.buf[self.offset(x, y)]
    }

    pub fn at_mut(&mut self, x: usize, y: usize) -> &mut RGB {
        let i = self.offset(x, y);
        &mut self.buf[i]
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.w && y < self.h,
            "pixel ({}, {}) out of bounds for {}x{} image",
            x,
            y,
            self.w,
            self.h
        );
        y * self.w + x
    }

    pub fn w(&self) -> usize {
        self.w
    }
    pub fn h(&self) -> usize {
        self.h
    }

    /// Plain PPM (P3). Channels are clamped to [0, 1] and scaled to 255;
    /// no line exceeds 70 characters and the output ends with a blank line.
    pub fn to_ppm(&self) -> String {
        let mut out = format!("P3\n{} {}\n{}\n", self.w, self.h, PPM_MAX);
        for y in 0..self.h {
            // tokens carry their trailing space, trimmed on flush
            let mut line = String::new();
            for px in &self.buf[y * self.w..(y + 1) * self.w] {
                for v in [px.r, px.g, px.b].iter() {
                    let token = format!("{} ", scale_channel(*v));
                    if line.len() + token.len() > PPM_LINE_MAX {
                        out.push_str(line.trim_end());
                        out.push('\n');
                        line.clear();
                    }
                    line.push_str(&token);
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push('\n');
        out
    }

    pub fn write_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_ppm())?;
        Ok(())
    }
}

impl ImageSink for Image {
    fn put_pixel(&mut self, x: usize, y: usize, color: RGB) {
        *self.at_mut(x, y) = color;
    }
}

fn scale_channel(v: f64) -> i64 {
    if v <= 0.0 {
        0
    } else if v >= 1.0 {
        PPM_MAX
    } else {
        (PPM_MAX as f64 * v).round() as i64
    }
}
