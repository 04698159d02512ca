use clap::Parser;
use hoteldesk::engine::BookingEngine;
use hoteldesk::menu;
use hoteldesk::store::{JsonFileStore, LedgerStore};
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the bookings data file
    #[arg(long, default_value = "hotel_data.json")]
    data_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut store = JsonFileStore::new(cli.data_file);
    let mut engine = BookingEngine::restore(store.load());

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut engine, &mut store, stdin.lock(), &mut stdout.lock()).into_diagnostic()?;

    Ok(())
}
