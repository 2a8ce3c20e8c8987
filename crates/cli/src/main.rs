mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "formwork")]
#[command(about = "Django CRUD scaffolding generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CRUD templates, forms, views and urls for the target app
    Generate {
        /// Model discovery strategy: 'scan' or 'registry'
        #[arg(long)]
        source: Option<String>,

        /// Target app name (defaults to the current directory's name)
        #[arg(long)]
        app: Option<String>,
    },

    /// Discover models and print them without writing any files
    Models {
        /// Model discovery strategy: 'scan' or 'registry'
        #[arg(long)]
        source: Option<String>,

        /// Target app name (defaults to the current directory's name)
        #[arg(long)]
        app: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Bare `formwork` runs a full generation pass, like the original
    // zero-argument tool.
    let result = match cli.command {
        None => commands::generate::run(None, None),
        Some(Commands::Generate { source, app }) => commands::generate::run(source, app),
        Some(Commands::Models { source, app, json }) => commands::models::run(source, app, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", console::style("✗").red().bold(), e);
        std::process::exit(1);
    }
}
