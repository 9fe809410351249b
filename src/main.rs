#![deny(warnings)]

use clap::Parser;
use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use folio::{
    infrastructure::{
        cli::Cli,
        config::Config,
        tui::{real::RealTui, TuiLike},
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;

    let tui: Arc<Mutex<dyn TuiLike>> = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(config, tui).await?;
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
