use clap::{Parser, Subcommand};
use std::process;
use tracing::Level;

mod cmd;

#[derive(Parser, Debug)]
#[command(author, version, about = "Drag-to-select communication board core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a recorded pointer trace through the engine
    Replay(cmd::replay::ReplayArgs),
    /// Print one of the built-in board layouts
    ShowLayout(cmd::layout::ShowLayoutArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let result = match cli.command {
        Commands::Replay(args) => cmd::replay::run(args),
        Commands::ShowLayout(args) => cmd::layout::run(args),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
