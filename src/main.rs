use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use splashgen::{Composer, ComposerConfig};

/// Generate the Pints League splash logo.
///
/// Without arguments this writes assets/images/splash_logo.png using the
/// system Helvetica when present.
#[derive(Parser, Debug)]
#[command(name = "splashgen", version, about)]
struct Cli {
    /// Output PNG path
    #[arg(long, default_value = splashgen::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Preferred font file (TrueType or TrueType collection)
    #[arg(long, default_value = splashgen::font::PREFERRED_FONT_PATH)]
    font: PathBuf,

    /// Face index inside the font collection
    #[arg(long, default_value_t = 0)]
    font_index: u32,

    /// Print the SHA-256 of the written PNG to stderr
    #[arg(long)]
    digest: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = ComposerConfig {
        output_path: cli.output,
        font_path: cli.font,
        font_index: cli.font_index,
        ..Default::default()
    };

    // Falls back to the built-in font (with a warning) when the font is unusable
    let composer = Composer::new(config);
    let written = composer
        .write()
        .with_context(|| format!("writing {}", composer.config().output_path.display()))?;
    if cli.digest {
        eprintln!("sha256 {}", written.image.digest());
    }

    println!("{}", splashgen::SUCCESS_MESSAGE);
    Ok(())
}
