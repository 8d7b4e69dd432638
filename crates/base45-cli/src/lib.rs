//! `base45` — command-line base45 encoder and decoder.
//!
//! Provides the logic used by the binary entry point: argument parsing and
//! the transcoding step between the raw input and output buffers.

use std::path::PathBuf;

use base45::Base45Error;
use thiserror::Error;
use tracing::debug;

pub const USAGE: &str = "\
Usage: base45 <encode|decode> [--url-safe] [--input <FILE>] [--output <FILE>]

Reads from stdin and writes to stdout unless --input / --output are given.

Options:
  --url-safe        Percent-encode the output (encode) or unescape the input (decode)
  --input <FILE>    Read from FILE instead of stdin
  --output <FILE>   Write to FILE instead of stdout
  -h, --help        Print this help

Set RUST_LOG (e.g. RUST_LOG=debug) to enable logging on stderr.";

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Codec(#[from] Base45Error),
}

// ── Options ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub url_safe: bool,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

/// Parses the arguments following the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut mode = None;
    let mut url_safe = false;
    let mut input = None;
    let mut output = None;

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--url-safe" => url_safe = true,
            "--input" | "--output" => {
                let path = args
                    .next()
                    .ok_or_else(|| CliError::Usage(format!("{arg} requires a file argument")))?;
                if arg == "--input" {
                    input = Some(PathBuf::from(path));
                } else {
                    output = Some(PathBuf::from(path));
                }
            }
            "encode" | "decode" if mode.is_none() => {
                mode = Some(if arg == "encode" { Mode::Encode } else { Mode::Decode });
            }
            other => return Err(CliError::Usage(format!("Unexpected argument: {other}"))),
        }
    }

    let mode = mode.ok_or_else(|| CliError::Usage("Missing command: encode or decode".into()))?;
    Ok(Command::Run(Options { mode, url_safe, input, output }))
}

// ── Transcoding ───────────────────────────────────────────────────────────

/// Encodes raw bytes; the output is the encoded text followed by a newline.
pub fn encode(input: &[u8], url_safe: bool) -> Vec<u8> {
    let mut out = if url_safe {
        base45::encode_url_safe(input)
    } else {
        base45::encode(input)
    };
    out.push('\n');
    out.into_bytes()
}

/// Decodes encoded text to raw bytes.
///
/// One trailing line break is ignored. Other whitespace is kept since a space
/// is part of the base45 alphabet.
pub fn decode(input: &[u8], url_safe: bool) -> Result<Vec<u8>, CliError> {
    let text = strip_line_break(input);
    if url_safe {
        let text = std::str::from_utf8(text).map_err(|_| Base45Error::InvalidUrlSafeEscaping)?;
        Ok(base45::decode_url_safe(text)?)
    } else {
        Ok(base45::decode_bin(text, 0, text.len())?)
    }
}

/// Runs the selected transcoding over an input buffer.
pub fn run(options: &Options, input: &[u8]) -> Result<Vec<u8>, CliError> {
    debug!(mode = ?options.mode, url_safe = options.url_safe, input_len = input.len(), "transcoding");
    let output = match options.mode {
        Mode::Encode => encode(input, options.url_safe),
        Mode::Decode => decode(input, options.url_safe)?,
    };
    debug!(output_len = output.len(), "done");
    Ok(output)
}

fn strip_line_break(input: &[u8]) -> &[u8] {
    let input = input.strip_suffix(b"\n").unwrap_or(input);
    input.strip_suffix(b"\r").unwrap_or(input)
}
