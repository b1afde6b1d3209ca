use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::{ConnectionContext, Translator, XorCipher};
use glob::Pattern;
use pvtl_tools::{
    check_length, decode_frame, format_decode_pretty, load_catalog, load_dictionary,
    opcode_table, parse_hex_frame, parse_version, DecodeReport, Direction,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pvtl-tools",
    version,
    about = "RSC protocol translation inspection tools"
)]
struct Cli {
    /// Log decode details (repeat for trace output).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode captured frames into structured JSON.
    Decode {
        /// Client revision the frames were captured from.
        #[arg(long)]
        version: u16,
        /// Frame as hex: opcode byte followed by the payload.
        #[arg(long, conflicts_with = "path")]
        hex: Option<String>,
        /// File holding one raw frame, or a directory of them.
        #[arg(conflicts_with = "hex")]
        path: Option<PathBuf>,
        /// Glob filter when decoding a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Which side sent the frames.
        #[arg(long, value_enum, default_value_t = Direction::In)]
        direction: Direction,
        /// Session id agreed at login; seeds secure block checks.
        #[arg(long)]
        session: Option<i32>,
        /// Key for the XOR test cipher used by offline captures.
        #[arg(long)]
        xor_key: Option<String>,
        /// JSON word table for 115 chat.
        #[arg(long)]
        dictionary: Option<PathBuf>,
        /// JSON array of stackable item ids.
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Dump the opcode tables of a version.
    Opcodes {
        #[arg(long)]
        version: u16,
        /// Only this direction; both when omitted.
        #[arg(long, value_enum)]
        direction: Option<Direction>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Run the length validator for one opcode.
    Check {
        #[arg(long)]
        version: u16,
        #[arg(long)]
        opcode: u8,
        /// Payload length, opcode byte excluded.
        #[arg(long)]
        len: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Command::Decode {
            version,
            hex,
            path,
            glob,
            direction,
            session,
            xor_key,
            dictionary,
            catalog,
            format,
        } => {
            let version = parse_version(version)?;
            let translator = build_translator(xor_key, dictionary.as_deref(), catalog.as_deref())?;
            let mut ctx = ConnectionContext::new(version);
            if let Some(session) = session {
                ctx = ctx.with_session(session);
            }
            let frames = match (hex, path) {
                (Some(text), _) => vec![(None, parse_hex_frame(&text)?)],
                (None, Some(path)) if path.is_dir() => collect_frames(&path, glob.as_deref())?,
                (None, Some(path)) => {
                    let bytes = fs::read(&path)
                        .with_context(|| format!("read frame {}", path.display()))?;
                    vec![(Some(path), bytes)]
                }
                (None, None) => bail!("pass a frame with --hex or a path"),
            };
            for (path, frame) in frames {
                let report = decode_frame(&translator, &frame, direction, &ctx)
                    .with_context(|| match &path {
                        Some(path) => format!("decode {}", path.display()),
                        None => String::from("decode hex frame"),
                    })?;
                if let Some(path) = &path {
                    if matches!(format, OutputFormat::Pretty) {
                        println!("== {} ==", path.display());
                    }
                }
                print_report(&report, format)?;
            }
        }
        Command::Opcodes {
            version,
            direction,
            format,
        } => {
            let version = parse_version(version)?;
            let directions = direction.map_or_else(|| vec![Direction::In, Direction::Out], |d| vec![d]);
            for direction in directions {
                let table = opcode_table(version, direction);
                match format {
                    OutputFormat::Json => {
                        let json = serde_json::to_string_pretty(&table).context("serialize json")?;
                        println!("{json}");
                    }
                    OutputFormat::Pretty => {
                        println!(
                            "version {} {:?}: {} opcodes, fingerprint {}",
                            table.version,
                            table.direction,
                            table.entries.len(),
                            table.fingerprint
                        );
                        for entry in &table.entries {
                            println!("  {:>3}  {}", entry.opcode, entry.op);
                        }
                    }
                }
            }
        }
        Command::Check {
            version,
            opcode,
            len,
        } => {
            let version = parse_version(version)?;
            let report = check_length(&Translator::new(), version, opcode, len);
            let json = serde_json::to_string_pretty(&report).context("serialize json")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_translator(
    xor_key: Option<String>,
    dictionary: Option<&Path>,
    catalog: Option<&Path>,
) -> Result<Translator> {
    let mut builder = Translator::builder();
    if let Some(key) = xor_key {
        builder = builder.with_cipher(XorCipher::new(key.into_bytes()));
    }
    if let Some(path) = dictionary {
        builder = builder.with_dictionary(load_dictionary(path).context("load dictionary")?);
    }
    if let Some(path) = catalog {
        builder = builder.with_catalog(load_catalog(path).context("load catalog")?);
    }
    Ok(builder.build())
}

fn print_report(report: &DecodeReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("serialize json")?;
            println!("{json}");
        }
        OutputFormat::Pretty => print!("{}", format_decode_pretty(report)),
    }
    Ok(())
}

type Frame = (Option<PathBuf>, Vec<u8>);

fn collect_frames(dir: &Path, glob: Option<&str>) -> Result<Vec<Frame>> {
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        paths.push(path);
    }
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let bytes =
                fs::read(&path).with_context(|| format!("read frame {}", path.display()))?;
            Ok((Some(path), bytes))
        })
        .collect()
}
