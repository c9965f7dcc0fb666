use cidr_converter::cli::{Cli, Commands};
use cidr_converter::config::Config;
use clap::Parser;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    cidr_converter::logging::init(cli.verbose)?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = Config::from_env();

    let result = match cli.command {
        Commands::Merge {
            input,
            output,
            stdout,
            table,
        } => {
            let config = config.with_overrides(cli.workers, output);
            cidr_converter::commands::merge::run(input.as_deref(), &config, stdout, table).await
        }
        Commands::Check { address, input } => {
            let config = config.with_overrides(cli.workers, None);
            cidr_converter::commands::check::run(&address, input.as_deref(), &config).await
        }
    };

    if let Err(e) = &result {
        log::error!("{e}");
    }
    result
}
