use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::viewer::{MandelbrotViewer, ViewerError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::viewport::zoom::ZoomError;
use log::info;

/// Drives a viewer without a window: replays clicks, renders once and
/// hands the frame to a file presenter.
pub struct HeadlessController<P: FilePresenterPort> {
    viewer: MandelbrotViewer,
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> HeadlessController<P> {
    pub fn new(viewer: MandelbrotViewer, presenter: P) -> Self {
        Self {
            viewer,
            presenter,
            buffer: None,
        }
    }

    #[must_use]
    pub fn viewer(&self) -> &MandelbrotViewer {
        &self.viewer
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Applies each click in turn. Clicks outside the raster are skipped.
    pub fn zoom(&mut self, clicks: &[Point]) -> Result<(), ViewerError> {
        for click in clicks {
            match self.viewer.on_click(click.x, click.y) {
                Ok(_) | Err(ViewerError::Zoom(ZoomError::PointOutsideRaster(_))) => {}
                Err(err) => return Err(err),
            }
        }

        // an earlier frame no longer matches the viewport
        self.buffer = None;

        Ok(())
    }

    pub fn generate(&mut self) -> Result<(), ViewerError> {
        self.buffer = Some(self.viewer.render()?);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            info!("wrote {}", filepath.as_ref().display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            self.presented
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.buffer_size()));
            Ok(())
        }
    }

    fn viewer() -> MandelbrotViewer {
        let config = MandelbrotConfig::default().with_raster(40, 30).unwrap();
        MandelbrotViewer::new(config).unwrap()
    }

    #[test]
    fn test_write_without_generate_presents_nothing() {
        let presenter = RecordingPresenter::default();
        let controller = HeadlessController::new(viewer(), &presenter);

        controller.write("unused.ppm").unwrap();

        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_frame() {
        let presenter = RecordingPresenter::default();
        let mut controller = HeadlessController::new(viewer(), &presenter);

        controller.generate().unwrap();
        controller.write("frame.ppm").unwrap();

        assert_eq!(
            *presenter.presented.borrow(),
            vec![(PathBuf::from("frame.ppm"), 40 * 30 * 3)]
        );
    }

    #[test]
    fn test_zoom_skips_clicks_outside_raster() {
        let presenter = RecordingPresenter::default();
        let mut controller = HeadlessController::new(viewer(), &presenter);
        let start = controller.viewer().viewport();

        controller
            .zoom(&[Point { x: 500, y: 500 }, Point { x: 20, y: 15 }])
            .unwrap();

        assert!(controller.viewer().viewport().area() < start.area());
    }

    #[test]
    fn test_zoom_discards_stale_frame() {
        let presenter = RecordingPresenter::default();
        let mut controller = HeadlessController::new(viewer(), &presenter);

        controller.generate().unwrap();
        controller.zoom(&[Point { x: 20, y: 15 }]).unwrap();

        assert!(controller.buffer().is_none());
    }
}
