use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use serde::Serialize;
use tracing::debug;

use q2r_wire_core::{
    DEFAULT_POSE_BASE_OFFSET, DecodeOptions, DecodedRecord, RecordKind, SystemClock,
    dispatch_with, routing_table,
};

mod logging;

use logging::{LogLevel, init_logging};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("Q2R_WIRE_BUILD_COMMIT"),
    ", ",
    env!("Q2R_WIRE_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = "Examples:\n  q2r-wire decode --channel q2r_right_hand_twist frame.bin\n  q2r-wire decode -c q2r_left_hand_pose 'captures/pose-*.bin' --pretty\n  q2r-wire channels --json";

#[derive(Parser, Debug)]
#[command(name = "q2r-wire")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decode captured headset bridge frames (twist, pose, inputs, haptics) into JSON.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Diagnostic log level (written to stderr)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode frame files for a channel; each file holds exactly one frame.
    #[command(after_help = EXAMPLES)]
    Decode {
        /// Channel the frames were received on
        #[arg(short, long)]
        channel: String,

        /// Frame files, glob patterns, or `-` for stdin
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Offset of the pose body within pose frames
        #[arg(long, value_name = "BYTES")]
        pose_offset: Option<usize>,

        /// Pretty-print each record instead of one JSON object per line
        #[arg(long)]
        pretty: bool,

        /// Stop at the first frame that fails to decode
        #[arg(long)]
        strict: bool,
    },
    /// List the channel routing table.
    Channels {
        /// Emit the table as JSON
        #[arg(long)]
        json: bool,

        /// Offset of the pose body used for the minimum pose frame length
        #[arg(long, value_name = "BYTES")]
        pose_offset: Option<usize>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let result = match cli.command {
        Commands::Decode {
            channel,
            inputs,
            pose_offset,
            pretty,
            strict,
        } => cmd_decode(&channel, &inputs, decode_options(pose_offset), pretty, strict),
        Commands::Channels { json, pose_offset } => {
            cmd_channels(json, decode_options(pose_offset))
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn decode_options(pose_offset: Option<usize>) -> DecodeOptions {
    DecodeOptions {
        pose_base_offset: pose_offset.unwrap_or(DEFAULT_POSE_BASE_OFFSET),
    }
}

/// Where a frame comes from.
#[derive(Debug, Clone, PartialEq)]
enum FrameInput {
    Stdin,
    File(PathBuf),
}

impl FrameInput {
    fn label(&self) -> String {
        match self {
            FrameInput::Stdin => "-".to_string(),
            FrameInput::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<Vec<u8>> {
        match self {
            FrameInput::Stdin => {
                let mut bytes = Vec::new();
                io::stdin()
                    .read_to_end(&mut bytes)
                    .context("Failed to read frame from stdin")?;
                Ok(bytes)
            }
            FrameInput::File(path) => fs::read(path)
                .with_context(|| format!("Failed to read frame file: {}", path.display())),
        }
    }
}

#[derive(Serialize)]
struct DecodedFrame<'a> {
    input: &'a str,
    record: &'a DecodedRecord,
}

fn cmd_decode(
    channel: &str,
    inputs: &[String],
    options: DecodeOptions,
    pretty: bool,
    strict: bool,
) -> Result<ExitCode, CliError> {
    let kind = RecordKind::from_channel(channel).ok_or_else(|| {
        CliError::new(
            format!("unknown channel '{channel}'"),
            Some("run `q2r-wire channels` to list known channels".to_string()),
        )
    })?;
    debug!(channel, %kind, pose_base_offset = options.pose_base_offset, "decoding frames");

    let frames = resolve_inputs(inputs)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for frame_input in &frames {
        let label = frame_input.label();
        let bytes = frame_input.read()?;
        debug!(input = %label, bytes = bytes.len(), "frame loaded");

        match dispatch_with(channel, &bytes, &options, &SystemClock) {
            Ok(record) => {
                let decoded = DecodedFrame {
                    input: &label,
                    record: &record,
                };
                let json = serialize_frame(&decoded, pretty)?;
                writeln!(out, "{json}").context("Failed to write decoded record")?;
            }
            Err(err) if strict => {
                return Err(CliError::new(
                    format!("{label}: {err}"),
                    Some(format!(
                        "{kind} frames need at least {} bytes",
                        kind.min_frame_len(&options)
                    )),
                ));
            }
            Err(err) => {
                eprintln!("error: {label}: {err}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("{failures} of {} frames failed to decode", frames.len());
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

fn serialize_frame(decoded: &DecodedFrame<'_>, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(decoded)
    } else {
        serde_json::to_string(decoded)
    };
    json.context("JSON serialization failed").map_err(Into::into)
}

#[derive(Serialize)]
struct ChannelRoute {
    channel: &'static str,
    kind: RecordKind,
    min_frame_len: usize,
}

fn cmd_channels(json: bool, options: DecodeOptions) -> Result<ExitCode, CliError> {
    let routes: Vec<ChannelRoute> = routing_table()
        .map(|(channel, kind)| ChannelRoute {
            channel,
            kind,
            min_frame_len: kind.min_frame_len(&options),
        })
        .collect();

    if json {
        let json = serde_json::to_string_pretty(&routes).context("JSON serialization failed")?;
        println!("{json}");
        return Ok(ExitCode::SUCCESS);
    }

    println!("{:<34} {:<16} {}", "CHANNEL", "KIND", "MIN BYTES");
    for route in &routes {
        println!(
            "{:<34} {:<16} {}",
            route.channel,
            route.kind.name(),
            route.min_frame_len
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn resolve_inputs(inputs: &[String]) -> Result<Vec<FrameInput>, CliError> {
    let mut frames = Vec::new();
    for input in inputs {
        if input == "-" {
            frames.push(FrameInput::Stdin);
        } else if is_glob_pattern(input) {
            frames.extend(expand_pattern(input)?.into_iter().map(FrameInput::File));
        } else {
            let path = PathBuf::from(input);
            if !path.is_file() {
                return Err(CliError::new(
                    format!("frame file not found: {}", path.display()),
                    Some("pass a file holding one raw frame, or `-` for stdin".to_string()),
                ));
            }
            frames.push(FrameInput::File(path));
        }
    }
    Ok(frames)
}

fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>, CliError> {
    let paths = glob(pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;

    let mut matches = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    matches.sort();
    Ok(matches)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
