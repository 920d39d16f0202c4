use anyhow::Result;
use clap::Parser;
use sprite_slicer::slicer::{self, Options};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "sprite-slicer",
    about = "Recolor the algorithm sprite sheet and slice it into 32 icons"
)]
struct Args {
    /// Path to the sprite sheet (RGBA PNG laid out as a 4x8 grid).
    #[clap(value_name = "INPUT", default_value = "algorithms.png")]
    input: PathBuf,

    /// Output directory for algo_1.png .. algo_32.png.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let written = slicer::run(&Options {
        input: args.input,
        output: args.output,
    })?;

    println!("✓ Generated {} icons", written.len());
    Ok(())
}
