use clap::Parser;
use colour_square::config::AppConfig;
use colour_square::{PixelsPresenter, PixelsPresenterFactory, ReferenceColourSquareLoader, RunGuiCommand, WasmFileLoader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::parse();
    colour_square::logging::init_logging(config.verbose);

    let canvas = config.canvas()?;
    let params = config.initial_params();
    let command = RunGuiCommand::<_, PixelsPresenter>::new(PixelsPresenterFactory::new());

    let result = if config.reference {
        command.execute(&ReferenceColourSquareLoader, canvas, params)
    } else {
        command.execute(&WasmFileLoader::new(&config.module), canvas, params)
    };

    if let Err(e) = &result {
        tracing::error!("colour square window failed: {e}");
    }

    result
}
