//! duke-clip CLI - spreadsheet clipboard text conversion tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use duke_clip::{
    read_grid, write_grid, DecodeOptions, Delimiter, EncodeOptions, Grid, LineTerminator,
};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "duke-clip")]
#[command(
    author,
    version,
    about = "Decode and encode spreadsheet clipboard text (Excel/LibreOffice)"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode clipboard text into a JSON array of rows
    Decode {
        /// Input text file (default: stdin)
        input: Option<PathBuf>,

        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Cell delimiter: one character, or tab/comma/semicolon/pipe/space
        #[arg(short, long, default_value = "tab")]
        delimiter: Delimiter,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Encode a JSON array of rows as clipboard text
    Encode {
        /// Input JSON file (default: stdin)
        input: Option<PathBuf>,

        /// Output text file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Cell delimiter: one character, or tab/comma/semicolon/pipe/space
        #[arg(short, long, default_value = "tab")]
        delimiter: Delimiter,

        /// Separate rows with CRLF instead of LF
        #[arg(long)]
        crlf: bool,
    },

    /// Show the shape of decoded clipboard text
    Info {
        /// Input text file (default: stdin)
        input: Option<PathBuf>,

        /// Cell delimiter: one character, or tab/comma/semicolon/pipe/space
        #[arg(short, long, default_value = "tab")]
        delimiter: Delimiter,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Decode {
            input,
            output,
            delimiter,
            pretty,
        } => decode_cmd(input.as_deref(), output.as_deref(), delimiter, pretty),
        Commands::Encode {
            input,
            output,
            delimiter,
            crlf,
        } => encode_cmd(input.as_deref(), output.as_deref(), delimiter, crlf),
        Commands::Info { input, delimiter } => show_info(input.as_deref(), delimiter),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn open_input(input: Option<&Path>) -> Result<Box<dyn Read>> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open '{}'", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn describe(input: Option<&Path>) -> String {
    input.map_or_else(|| "stdin".to_string(), |p| format!("'{}'", p.display()))
}

fn decode_cmd(
    input: Option<&Path>,
    output: Option<&Path>,
    delimiter: Delimiter,
    pretty: bool,
) -> Result<()> {
    let options = DecodeOptions::default().with_delimiter(delimiter);
    let grid = read_grid(open_input(input)?, &options)
        .with_context(|| format!("Failed to read clipboard text from {}", describe(input)))?;

    let mut writer = open_output(output)?;
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &grid)
    } else {
        serde_json::to_writer(&mut writer, &grid)
    }
    .context("Failed to serialize grid")?;
    writeln!(writer).context("Failed to write output")?;
    writer.flush().context("Failed to write output")?;

    tracing::info!(rows = grid.len(), "decoded grid");
    Ok(())
}

fn encode_cmd(
    input: Option<&Path>,
    output: Option<&Path>,
    delimiter: Delimiter,
    crlf: bool,
) -> Result<()> {
    let grid: Grid = serde_json::from_reader(open_input(input)?).with_context(|| {
        format!(
            "Failed to parse {} as a JSON array of rows of strings",
            describe(input)
        )
    })?;

    let line_terminator = if crlf {
        LineTerminator::CrLf
    } else {
        LineTerminator::Lf
    };
    let options = EncodeOptions::default()
        .with_delimiter(delimiter)
        .with_line_terminator(line_terminator);

    write_grid(&grid, open_output(output)?, &options).context("Failed to write output")?;

    if let Some(path) = output {
        eprintln!("Wrote {} rows to '{}'", grid.len(), path.display());
    }
    Ok(())
}

fn show_info(input: Option<&Path>, delimiter: Delimiter) -> Result<()> {
    let options = DecodeOptions::default().with_delimiter(delimiter);
    let grid = read_grid(open_input(input)?, &options)
        .with_context(|| format!("Failed to read clipboard text from {}", describe(input)))?;

    println!("Rows: {}", grid.len());
    println!("Columns: {}", grid.width());
    println!(
        "Shape: {}",
        if grid.is_rectangular() {
            "rectangular"
        } else {
            "ragged"
        }
    );
    Ok(())
}
