use std::marker::PhantomData;

use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::viewer::MandelbrotViewer;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::{
    app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: MandelbrotConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: MandelbrotConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens a fixed-size window onto the viewer. Returns when it closes.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let viewer = MandelbrotViewer::new(self.config)?;
        let raster = viewer.raster();

        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Viewer")
                .with_inner_size(LogicalSize::new(
                    f64::from(raster.width()),
                    f64::from(raster.height()),
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = self.presenter_factory.build(window, raster)?;

        GuiApp::new(window, presenter, viewer).run(event_loop)?;

        Ok(())
    }
}
