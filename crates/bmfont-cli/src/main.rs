use anyhow::Result;
use bmfont::CodePage;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::input::read_font_bytes;
mod input;
mod report;

#[derive(Parser)]
#[command(name = "bmfont", about = "Binary BMFont (.fnt) inspector")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print font metadata
    Inspect {
        #[arg(short, long)]
        font: PathBuf,
        /// Code page of the face and page names
        #[arg(long, default_value = "windows-1252")]
        code_page: CodePage,
    },
    /// Print the whole decoded font as JSON
    Dump {
        #[arg(short, long)]
        font: PathBuf,
        #[arg(long, default_value = "windows-1252")]
        code_page: CodePage,
    },
    /// List glyph records
    Chars {
        #[arg(short, long)]
        font: PathBuf,
        #[arg(long, default_value = "windows-1252")]
        code_page: CodePage,
    },
}

fn load(path: &Path, code_page: CodePage) -> Result<bmfont::Font> {
    let bytes = read_font_bytes(path)?;
    let font = bmfont::decode_with(&bytes, &code_page)?;
    Ok(font)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Cmd::Inspect { font, code_page } => {
            let f = load(&font, code_page)?;
            println!("{}", report::summary(&f)?);
        }
        Cmd::Dump { font, code_page } => {
            let f = load(&font, code_page)?;
            println!("{}", serde_json::to_string_pretty(&f)?);
        }
        Cmd::Chars { font, code_page } => {
            let f = load(&font, code_page)?;
            print!("{}", report::char_table(&f)?);
        }
    }
    Ok(())
}
