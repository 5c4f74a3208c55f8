use anyhow::Result;
use clap::Parser;
use spray_charts::cli::Cli;
use spray_charts::error::AppError;

fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Run the main application logic from the library
    if let Err(e) = spray_charts::run(&cli) {
        if let Some(missing @ AppError::MissingInputFile(_)) = e.downcast_ref::<AppError>() {
            println!("{}", missing);
            std::process::exit(1);
        }
        return Err(e);
    }

    Ok(())
}
