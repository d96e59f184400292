use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum, ValueHint};

mod printer;
mod theme;
mod translate;

/// High-LOGO to Python turtle-graphics translator
#[derive(Parser, Debug)]
#[command(name = "hlogoc", version, about)]
struct Cli {
    /// Path to the High-LOGO source file. The generated Python program is
    /// written next to it as `<FILE>.py`.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    input: PathBuf,
    /// Print the parsed syntax tree after a successful parse
    #[arg(long)]
    emit_tree: bool,
    /// Format used by --emit-tree
    #[arg(value_enum, long, default_value_t = TreeFormat::Text)]
    tree_format: TreeFormat,
    /// Enable ANSI colors
    #[arg(value_enum, long, default_value_t = EnableAnsi::Auto)]
    ansi: EnableAnsi,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TreeFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EnableAnsi {
    Auto,
    Always,
    Never,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    translate::translate(cli.input, cli.emit_tree, cli.tree_format, cli.ansi)
}
