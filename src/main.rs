use clap::Parser;
use env_logger::Env;
use mandelbrot_viewer::{
    CliArgs, HeadlessController, MandelbrotConfig, MandelbrotViewer, PpmFilePresenter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = CliArgs::parse();
    let config = MandelbrotConfig {
        colour_map_kind: args.scheme,
        ..MandelbrotConfig::default()
    };

    let viewer = MandelbrotViewer::new(config)?;
    let mut controller = HeadlessController::new(viewer, PpmFilePresenter::new());

    controller.zoom(&args.clicks)?;
    controller.generate()?;
    controller.write(&args.out)?;

    Ok(())
}
