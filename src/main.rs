use clap::Parser;
use colour_square::config::AppConfig;
use colour_square::{CliSnapshotController, PpmFilePresenter, ReferenceColourSquareLoader, WasmFileLoader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::parse();
    colour_square::logging::init_logging(config.verbose);

    let canvas = config.canvas()?;
    let params = config.initial_params();
    let mut controller = CliSnapshotController::new(PpmFilePresenter::new());

    let generated = if config.reference {
        controller.generate(&ReferenceColourSquareLoader, canvas, params)
    } else {
        controller.generate(&WasmFileLoader::new(&config.module), canvas, params)
    };

    if let Err(e) = generated {
        tracing::error!("failed to render colour square: {e}");
        return Err(e.into());
    }

    controller.write(&config.output)?;

    Ok(())
}
