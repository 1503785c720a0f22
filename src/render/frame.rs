use crate::foundation::core::Canvas;
use crate::foundation::error::{FieldError, FieldResult};
use crate::foundation::math::unpremultiply_rgba8;

/// A rendered frame as RGBA8 pixels.
///
/// Renderers produce **premultiplied** pixels; encoders convert at the boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy suitable for image encoders.
    pub fn to_rgba_image(&self) -> FieldResult<image::RgbaImage> {
        let data = if self.premultiplied {
            unpremultiply_rgba8(&self.data)
        } else {
            self.data.clone()
        };
        image::RgbaImage::from_raw(self.width, self.height, data).ok_or_else(|| {
            FieldError::encode(format!(
                "frame buffer does not match {}x{}",
                self.width, self.height
            ))
        })
    }
}
