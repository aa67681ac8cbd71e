//! Frame conversion for window surfaces that expect RGBA.

use thiserror::Error;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("RGBA frame holds {frame_len} bytes, {pixel_count} pixels need {}", .pixel_count * 4)]
pub struct FrameSizeError {
    pub pixel_count: usize,
    pub frame_len: usize,
}

/// Writes `buffer` into an RGBA `frame` with every pixel fully opaque.
pub fn write_rgba_frame(buffer: &PixelBuffer, frame: &mut [u8]) -> Result<(), FrameSizeError> {
    let pixel_count = buffer.raster().size();

    if frame.len() != pixel_count * 4 {
        return Err(FrameSizeError {
            pixel_count,
            frame_len: frame.len(),
        });
    }

    for (rgb, rgba) in buffer.buffer().chunks_exact(3).zip(frame.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(())
}
