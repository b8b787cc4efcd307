use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

mod session;
mod state;

#[derive(Parser, Debug)]
#[command(name = "homemaint", version, about = "Home maintenance reminder")]
struct Cli {
    /// Store file override (default: ~/.homemaint/home.csv)
    #[arg(long)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every item and its due date without entering the session
    View,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store_path = match cli.store {
        Some(p) => p,
        None => state::default_store_path()?,
    };

    let mut records = homemaint_core::load(&store_path)?;
    if records.is_empty() {
        if !store_path.exists() {
            println!("File {} not found. Creating a new one", store_path.display());
        }
        records = homemaint_core::default_records();
    }

    if let Some(Command::View) = cli.command {
        for r in &records {
            println!("{} is due {}", r.kind.name(), r.due_display());
        }
        return Ok(());
    }

    let records = session::Session::new(io::stdin().lock(), io::stdout().lock(), records).run()?;

    // Sole persistence point. A failed save is reported, not retried.
    match homemaint_core::save(&store_path, &records) {
        Ok(()) => println!(
            "Data has been updated successfully to {}",
            store_path.display()
        ),
        Err(e) => eprintln!("Error writing to file {}: {e:#}", store_path.display()),
    }

    Ok(())
}
