use clap::Parser;
use felsius::SymbolStyle;
use felsius::core::config::{self, CliOverrides};
use felsius::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "felsius",
    version,
    about = "Convert temperatures to and from Felsius"
)]
struct Args {
    /// Value the input starts at
    #[arg(long, allow_negative_numbers = true)]
    start_value: Option<i64>,

    /// Print the result and exit as soon as it is computed
    #[arg(long)]
    exit_on_result: bool,

    /// Let up/down reopen the input from the result screen
    #[arg(long)]
    no_freeze: bool,

    /// Degree symbols used on results
    #[arg(long, value_enum)]
    symbols: Option<SymbolStyle>,

    /// Config file (default: ~/.felsius/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, default_value = "felsius.log")]
    log_file: PathBuf,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            start_value: self.start_value,
            freeze_result: self.no_freeze.then_some(false),
            exit_on_result: self.exit_on_result.then_some(true),
            symbols: self.symbols,
        }
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config(args.config.as_deref()).map_err(|e| {
        log::error!("{}", e);
        std::io::Error::other(e)
    })?;
    let settings = config::resolve(&file_config, &args.overrides());

    log::info!("Felsius starting up with settings: {:?}", settings);

    let outcome = tui::run(settings)?;
    log::info!("Felsius exiting: {:?}", outcome);
    Ok(())
}
