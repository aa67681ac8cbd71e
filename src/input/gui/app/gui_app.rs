use log::{error, info};
use thiserror::Error;
use winit::{
    dpi::PhysicalPosition,
    error::EventLoopError,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::viewer::{MandelbrotViewer, ViewerError};
use crate::core::viewport::zoom::ZoomError;
use crate::input::gui::app::ports::presenter::{GuiPresentError, GuiPresenterPort};

#[derive(Debug, Error)]
pub enum GuiAppError {
    #[error(transparent)]
    Viewer(#[from] ViewerError),
    #[error(transparent)]
    Present(#[from] GuiPresentError),
    #[error("event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
}

pub struct GuiApp<P: GuiPresenterPort> {
    window: &'static Window,
    presenter: P,
    viewer: MandelbrotViewer,
    cursor: Option<PhysicalPosition<f64>>,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(window: &'static Window, presenter: P, viewer: MandelbrotViewer) -> Self {
        Self {
            window,
            presenter,
            viewer,
            cursor: None,
        }
    }

    fn show_current_view(&mut self) -> Result<(), GuiAppError> {
        let buffer = self.viewer.render()?;
        self.presenter.present(&buffer)?;
        self.window.request_redraw();

        Ok(())
    }

    fn handle_primary_press(&mut self) -> Result<(), GuiAppError> {
        let Some(position) = self.cursor else {
            return Ok(());
        };

        let pixel = self
            .presenter
            .window_pos_to_pixel((position.x as f32, position.y as f32));

        match self.viewer.on_click(pixel.x, pixel.y) {
            Ok(_) => self.show_current_view(),
            // already logged by the controller, nothing to redraw
            Err(ViewerError::Zoom(ZoomError::PointOutsideRaster(_))) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn handle_window_event(&mut self, event: WindowEvent) -> Result<bool, GuiAppError> {
        match event {
            WindowEvent::CloseRequested => return Ok(false),
            WindowEvent::CursorMoved { position, .. } => self.cursor = Some(position),
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.handle_primary_press()?,
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.presenter.resize_surface(size.width, size.height)?;
                }
            }
            WindowEvent::RedrawRequested => self.presenter.redraw()?,
            _ => {}
        }

        Ok(true)
    }

    /// Renders the initial view and runs until the window closes.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), GuiAppError> {
        self.show_current_view()?;

        event_loop.run(move |event, elwt| {
            let Event::WindowEvent { event, window_id } = event else {
                return;
            };

            if window_id != self.window.id() {
                return;
            }

            match self.handle_window_event(event) {
                Ok(true) => {}
                Ok(false) => {
                    info!("window closed");
                    elwt.exit();
                }
                Err(err) => {
                    error!("stopping viewer: {err}");
                    elwt.exit();
                }
            }
        })?;

        Ok(())
    }
}
