use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use gfxhw_agx::{FieldLayout, TessArgs, TessPoint};
use gfxhw_amd::{FormatEncodings, GfxLevel, TranslateConfig};
use gfxhw_format::PipeFormat;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "gfxhw-dump",
    about = "Dump hardware register encodings of pipe formats and GPU record layouts as JSON."
)]
struct Cli {
    /// Raise log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print AMD register encodings for each format
    Formats(FormatsArgs),
    /// Print the AGX tessellator record layouts
    TessLayout {
        /// Write JSON to this path instead of stdout
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct FormatsArgs {
    /// Hardware generation, e.g. gfx9 or gfx10.3 (overrides GFXHW_GFX_LEVEL)
    #[arg(long, value_name = "LEVEL")]
    gfx_level: Option<GfxLevel>,

    /// Compute encodings for a big-endian host (overrides GFXHW_BIG_ENDIAN)
    #[arg(long, action = ArgAction::SetTrue)]
    big_endian: bool,

    /// Only report these formats (repeatable; defaults to every format)
    #[arg(long = "format", value_name = "NAME")]
    formats: Vec<PipeFormat>,

    /// Drop formats that cannot be bound as render targets
    #[arg(long, action = ArgAction::SetTrue)]
    supported_only: bool,

    /// Write JSON to this path instead of stdout
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RecordLayout {
    name: &'static str,
    size_bytes: usize,
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Serialize)]
struct FieldEntry {
    name: &'static str,
    offset: usize,
    size: usize,
}

impl From<&FieldLayout> for FieldEntry {
    fn from(field: &FieldLayout) -> Self {
        Self {
            name: field.name,
            offset: field.offset,
            size: field.size,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli.command)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Formats(args) => dump_formats(args),
        Command::TessLayout { output } => dump_tess_layout(output.as_deref()),
    }
}

fn dump_formats(args: FormatsArgs) -> anyhow::Result<()> {
    let mut config = TranslateConfig::from_env().context("read GFXHW_* environment")?;
    if let Some(gfx_level) = args.gfx_level {
        config.gfx_level = gfx_level;
    }
    if args.big_endian {
        config.big_endian = true;
    }
    info!(gfx_level = %config.gfx_level, big_endian = config.big_endian, "dumping formats");

    let formats: &[PipeFormat] = if args.formats.is_empty() {
        PipeFormat::ALL
    } else {
        &args.formats
    };

    let reports: Vec<FormatEncodings> = formats
        .iter()
        .map(|&format| FormatEncodings::compute(&config, format))
        .filter(|report| !args.supported_only || report.color.supported)
        .collect();
    debug!(requested = formats.len(), reported = reports.len(), "computed encodings");

    write_json(&reports, args.output.as_deref())
}

fn dump_tess_layout(output: Option<&Path>) -> anyhow::Result<()> {
    let records = [
        RecordLayout {
            name: "tess_args",
            size_bytes: TessArgs::SIZE_BYTES,
            fields: TessArgs::FIELDS.iter().map(FieldEntry::from).collect(),
        },
        RecordLayout {
            name: "tess_point",
            size_bytes: TessPoint::SIZE_BYTES,
            fields: TessPoint::FIELDS.iter().map(FieldEntry::from).collect(),
        },
    ];
    write_json(&records, output)
}

fn write_json<T: Serialize + ?Sized>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    let mut json = serde_json::to_string_pretty(value).context("serialize JSON")?;
    json.push('\n');

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            debug!(path = %path.display(), "wrote output");
        }
        None => io::stdout()
            .lock()
            .write_all(json.as_bytes())
            .context("write stdout")?,
    }
    Ok(())
}
