use env_logger::Env;
use mandelbrot_viewer::{MandelbrotConfig, PixelsPresenterFactory, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), MandelbrotConfig::default());

    command.execute()
}
