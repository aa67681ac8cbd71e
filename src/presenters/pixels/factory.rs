use winit::window::Window;

use crate::core::data::raster::Raster;
use crate::input::gui::{
    app::ports::presenter::GuiPresentError,
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
};
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default, Clone, Copy)]
pub struct PixelsPresenterFactory {}

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        raster: Raster,
    ) -> Result<PixelsPresenter, GuiPresentError> {
        PixelsPresenter::new(window, raster)
    }
}
