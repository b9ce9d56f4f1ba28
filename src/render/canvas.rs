use crate::{
    foundation::core::{IPoint, IRect, to_i32},
    foundation::error::{StripError, StripResult},
    render::composite::{self, PremulRgba8, TRANSPARENT},
};

/// Mutable grid of premultiplied RGBA8 pixels, row-major, tightly packed.
///
/// A canvas has one owner at a time; stages hand canvases downstream by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, TRANSPARENT)
    }

    /// Canvas with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: PremulRgba8) -> Self {
        let n = width as usize * height as usize;
        let mut data = Vec::with_capacity(n * 4);
        for _ in 0..n {
            data.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap premultiplied bytes.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> StripResult<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return Err(StripError::asset_load(format!(
                "expected {}x{} rgba8 buffer, got {} bytes",
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Import a straight-alpha image.
    pub fn from_straight(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for px in img.pixels() {
            data.extend_from_slice(&composite::premultiply(px.0));
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Export as straight-alpha RGBA8 bytes.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&composite::unpremultiply([px[0], px[1], px[2], px[3]]));
        }
        out
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `[0, width) x [0, height)`.
    pub fn bounds(&self) -> IRect {
        IRect::from_size(self.width, self.height)
    }

    /// Raw premultiplied bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<PremulRgba8> {
        let i = self.index(x, y)?;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Blend `src` over the pixel at `(x, y)`; out-of-bounds writes are dropped.
    pub fn blend_pixel(&mut self, x: i32, y: i32, src: PremulRgba8, coverage: u8) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let dst = [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ];
        let out = composite::over(dst, src, coverage);
        self.data[i..i + 4].copy_from_slice(&out);
    }

    /// Paint `color` over every pixel of `rect` that lies on the canvas.
    pub fn fill_rect_over(&mut self, rect: IRect, color: PremulRgba8) {
        let Some(clip) = rect.intersect(&self.bounds()) else {
            return;
        };
        for y in clip.min.y..clip.max.y {
            for x in clip.min.x..clip.max.x {
                self.blend_pixel(x, y, color, 255);
            }
        }
    }

    /// Paint `color` through an 8-bit coverage bitmap whose top-left sits at `origin`.
    pub fn draw_coverage_over(
        &mut self,
        origin: IPoint,
        mask_width: usize,
        coverage: &[u8],
        color: PremulRgba8,
    ) {
        if mask_width == 0 {
            return;
        }
        for (row, line) in coverage.chunks(mask_width).enumerate() {
            let y = origin.y.saturating_add(row as i32);
            for (col, &c) in line.iter().enumerate() {
                self.blend_pixel(origin.x.saturating_add(col as i32), y, color, c);
            }
        }
    }

    /// Stamp `src` with "over" so that its top-left lands on `origin`.
    pub fn composite_over(&mut self, src: &Canvas, origin: IPoint) {
        let target = src.bounds().translate(origin);
        let Some(clip) = target.intersect(&self.bounds()) else {
            return;
        };
        for y in clip.min.y..clip.max.y {
            for x in clip.min.x..clip.max.x {
                if let Some(px) = src.pixel(x - origin.x, y - origin.y) {
                    self.blend_pixel(x, y, px, 255);
                }
            }
        }
    }

    /// Copy of the pixels inside `rect`; areas outside the canvas come back transparent.
    pub fn crop(&self, rect: IRect) -> Canvas {
        let mut out = Canvas::new(rect.width(), rect.height());
        for y in 0..to_i32(out.height) {
            for x in 0..to_i32(out.width) {
                if let (Some(px), Some(i)) = (
                    self.pixel(rect.min.x + x, rect.min.y + y),
                    out.index(x, y),
                ) {
                    out.data[i..i + 4].copy_from_slice(&px);
                }
            }
        }
        out
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
