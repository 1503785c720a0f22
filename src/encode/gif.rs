use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::encode::ensure_parent_dir;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, Rgb8};
use crate::foundation::error::{FieldError, FieldResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::frame::FrameRGBA;

/// Options for [`GifSink`] output.
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF file path.
    pub out_path: PathBuf,
    /// Color used to flatten any remaining transparency.
    pub background: Rgb8,
    /// Palette quantization speed, 1 (best) to 30 (fastest).
    pub speed: i32,
}

impl GifSinkOpts {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            background: Rgb8::WHITE,
            speed: 10,
        }
    }
}

/// Streams frames into an infinitely looping GIF file.
///
/// Frames go to `<out>.part` first; [`FrameSink::end`] renames it into place. A sink dropped
/// before `end` removes the partial file, so a failed run leaves no truncated GIF behind.
pub struct GifSink {
    opts: GifSinkOpts,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    partial: Option<PathBuf>,
    delay: Delay,
    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl GifSink {
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            partial: None,
            delay: Delay::from_numer_denom_ms(0, 1),
            scratch: Vec::new(),
            cfg: None,
            last_idx: None,
        }
    }

    /// Close the encoder, if any, and delete the unfinished output.
    fn discard_partial(&mut self) {
        self.encoder = None;
        if let Some(partial) = self.partial.take()
            && let Err(e) = std::fs::remove_file(&partial)
        {
            tracing::warn!(path = %partial.display(), error = %e, "failed to remove partial gif");
        }
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> FieldResult<()> {
        if cfg.fps.num == 0 || cfg.fps.den == 0 {
            return Err(FieldError::validation("fps must be non-zero"));
        }
        if cfg.width == 0 || cfg.height == 0 {
            return Err(FieldError::validation(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(FieldError::validation(format!(
                "gif frames are limited to {0}x{0}, got {1}x{2}",
                u16::MAX,
                cfg.width,
                cfg.height
            )));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        self.discard_partial();
        let partial = partial_path(&self.opts.out_path);
        let file = {
            use anyhow::Context as _;
            File::create(&partial)
                .with_context(|| format!("failed to create '{}'", partial.display()))?
        };

        let speed = self.opts.speed.clamp(1, 30);
        let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), speed);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| FieldError::encode(format!("failed to set gif loop: {e}")))?;

        let (numer, denom) = cfg.fps.frame_delay_ms();
        self.delay = Delay::from_numer_denom_ms(numer, denom);
        self.scratch = vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4];
        self.encoder = Some(encoder);
        self.partial = Some(partial);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FieldResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| FieldError::encode("gif sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(FieldError::encode(
                "gif sink received out-of-order frame index",
            ));
        }
        self.last_idx = Some(idx);

        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(FieldError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if frame.data.len() != self.scratch.len() {
            return Err(FieldError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }

        if frame.premultiplied {
            flatten_premul_over_bg(&mut self.scratch, &frame.data, self.opts.background)?;
        } else {
            self.scratch.copy_from_slice(&frame.data);
        }

        let Some(encoder) = self.encoder.as_mut() else {
            return Err(FieldError::encode("gif sink is already finalized"));
        };
        let image = RgbaImage::from_raw(cfg.width, cfg.height, self.scratch.clone())
            .ok_or_else(|| FieldError::encode("gif frame buffer has the wrong size"))?;
        encoder
            .encode_frame(Frame::from_parts(image, 0, 0, self.delay))
            .map_err(|e| FieldError::encode(format!("failed to encode gif frame {}: {e}", idx.0)))
    }

    fn end(&mut self) -> FieldResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| FieldError::encode("gif sink not started"))?;
        // The trailer is written when the encoder is dropped.
        drop(encoder);
        self.cfg = None;
        if let Some(partial) = self.partial.take() {
            use anyhow::Context as _;
            std::fs::rename(&partial, &self.opts.out_path).with_context(|| {
                format!(
                    "failed to move '{}' to '{}'",
                    partial.display(),
                    self.opts.out_path.display()
                )
            })?;
        }
        tracing::debug!(path = %self.opts.out_path.display(), "gif finalized");
        Ok(())
    }
}

impl Drop for GifSink {
    fn drop(&mut self) {
        self.discard_partial();
    }
}

fn partial_path(out: &Path) -> PathBuf {
    let mut name = out.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    out.with_file_name(name)
}

/// Composite premultiplied RGBA8 over an opaque background.
fn flatten_premul_over_bg(dst: &mut [u8], src_premul: &[u8], bg: Rgb8) -> FieldResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(FieldError::encode(
            "flatten_premul_over_bg expects equal-length rgba8 buffers",
        ));
    }

    let bg = [u16::from(bg.r), u16::from(bg.g), u16::from(bg.b)];
    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }
        let inv = 255 - a;
        for c in 0..3 {
            d[c] = (u16::from(s[c]) + mul_div255_u16(bg[c], inv)).min(255) as u8;
        }
        d[3] = 255;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
