//! CLI Adapter.

mod render;

use crate::domain::{AppError, ErrorKind};
use clap::{Parser, Subcommand};

pub use render::RenderArgs;

const EXIT_FAILURE: i32 = 1;
const EXIT_UNAUTHORIZED: i32 = 3;
const EXIT_FILTER_REJECTED: i32 = 4;

#[derive(Parser)]
#[command(name = "infeready")]
#[command(version)]
#[command(
    about = "Assemble access-controlled LLM prompts from sources, examples and filters",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a prompt for a requesting user
    #[clap(visible_alias = "r")]
    Render(RenderArgs),
}

pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Render(args) => render::run_render(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(error: &AppError) -> i32 {
    match error.kind() {
        ErrorKind::Unauthorized => EXIT_UNAUTHORIZED,
        ErrorKind::FilterRejected => EXIT_FILTER_REJECTED,
        ErrorKind::InvalidInput | ErrorKind::Other => EXIT_FAILURE,
    }
}
