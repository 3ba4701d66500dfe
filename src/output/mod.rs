//! Token file output
//!
//! Tokens are written as `<lexeme, Category>` pairs, one output line per
//! source line that produced tokens.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::{ScanError, ScanResult};
use crate::lexer::TokenSequence;

/// Suffix appended to the input path to name the token file
pub const SCN_SUFFIX: &str = "scn";

/// Token file layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tokens only, no empty lines
    #[default]
    Release,
    /// Each line prefixed with its source line number, separated by empty lines
    Debug,
}

/// `example.c` becomes `example.cscn`
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(SCN_SUFFIX);
    PathBuf::from(name)
}

/// Write `tokens` to `writer` in the given format
pub fn write_tokens<W: Write>(
    writer: &mut W,
    tokens: &TokenSequence,
    format: OutputFormat,
) -> io::Result<()> {
    for (i, (line, group)) in tokens.lines().enumerate() {
        if i > 0 && format == OutputFormat::Debug {
            writeln!(writer)?;
        }
        if format == OutputFormat::Debug {
            write!(writer, "{} ", line)?;
        }
        for (j, token) in group.iter().enumerate() {
            if j > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{}", token)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Create `path` and write the token file into it
pub fn write_token_file(path: &Path, tokens: &TokenSequence, format: OutputFormat) -> ScanResult<()> {
    let to_error = |source| ScanError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write_tokens(&mut writer, tokens, format).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    log::info!("wrote {} tokens to {}", tokens.len(), path.display());
    Ok(())
}
