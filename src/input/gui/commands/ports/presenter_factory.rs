use winit::window::Window;

use crate::core::data::raster::Raster;
use crate::input::gui::app::ports::presenter::{GuiPresentError, GuiPresenterPort};

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, raster: Raster) -> Result<T, GuiPresentError>;
}
