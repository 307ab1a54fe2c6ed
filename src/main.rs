use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use segfont::{GlyphTable, RegenOptions, SegfontError};

/// Regenerate the glyphs of a fourteen-segment SVG font from its segment paths
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// SVG font to regenerate
    #[arg(default_value = "fourteen-segments.svg")]
    file: PathBuf,

    /// Write the result here instead of overwriting the input
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON glyph table to use instead of the built-in one
    #[arg(short = 't', long)]
    glyph_table: Option<PathBuf>,

    /// Height segment paths are flipped about
    #[arg(long, default_value_t = RegenOptions::default().baseline)]
    baseline: f64,

    /// Prefix of the path ids holding segments
    #[arg(long, default_value_t = RegenOptions::default().segment_prefix)]
    prefix: String,

    /// Don't write anything; fail if the file is not up to date
    #[arg(long, conflicts_with = "output")]
    check: bool,

    /// Print the glyph table as JSON and exit
    #[arg(long)]
    dump_table: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

fn run(args: &Args) -> Result<bool, SegfontError> {
    let table = match &args.glyph_table {
        Some(path) => GlyphTable::load(path)?,
        None => GlyphTable::builtin(),
    };
    if args.dump_table {
        println!("{}", table.to_json()?);
        return Ok(true);
    }
    let options = RegenOptions {
        baseline: args.baseline,
        segment_prefix: args.prefix.clone(),
    };

    if args.check {
        let (report, _) = segfont::check_file(&args.file, &table, &options)?;
        if report.changed {
            log::error!("{} is not up to date", args.file.display());
        }
        return Ok(!report.changed);
    }

    let output = args.output.as_ref().unwrap_or(&args.file);
    let report = segfont::regenerate_file(&args.file, output, &table, &options)?;
    if !report.changed {
        log::info!("{} was already up to date", args.file.display());
    }
    Ok(true)
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log::error!("Regeneration failed: {}", e);
            std::process::exit(1);
        }
    }
}
