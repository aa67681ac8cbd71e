use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6) output, 8 bits per channel.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
        let raster = buffer.raster();

        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", raster.width(), raster.height())?;
        writeln!(writer, "255")?;
        writer.write_all(buffer.buffer())
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(filepath)?);
        self.write_to(buffer, &mut writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::raster::Raster;

    fn two_pixel_buffer() -> PixelBuffer {
        let raster = Raster::new(2, 1).unwrap();
        PixelBuffer::from_data(raster, vec![0, 85, 170, 255, 255, 255]).unwrap()
    }

    #[test]
    fn test_write_to_emits_header_then_pixels() {
        let mut out = Vec::new();

        PpmFilePresenter::new()
            .write_to(&two_pixel_buffer(), &mut out)
            .unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[0, 85, 170, 255, 255, 255]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("frame.ppm");

        PpmFilePresenter::new()
            .present(&two_pixel_buffer(), &path)
            .unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n2 1\n255\n"));
        assert_eq!(written.len(), "P6\n2 1\n255\n".len() + 6);
    }

    #[test]
    fn test_present_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");
        std::fs::write(&path, vec![1u8; 64]).unwrap();

        PpmFilePresenter::new()
            .present(&two_pixel_buffer(), &path)
            .unwrap();

        assert_eq!(std::fs::read(&path).unwrap().len(), 17);
    }
}
