// Scans one history file at a time and collects package names
//
// Lines that chain or pipe commands are skipped outright. We'd rather miss a
// package than report "grep" as one.

use crate::core::managers::{match_prefix, PackageManager};
use crate::core::package_set::PackageSet;
use crate::error::{ExtractError, Result};
use crate::shell::{Cleanup, Tokenizer};
use log::{debug, trace};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

// Anything involving these is a chained/piped/local command. Not supported.
const UNSUPPORTED_OPERATORS: &[&str] = &["&", "|", ";", "./"];

/// Result of trying to open a history file
pub enum HistoryFile {
    Opened(BufReader<File>),
    Missing,
}

/// Open a history file, treating "not found" as an ordinary outcome
///
/// Anything other than NotFound (permissions, it's a directory, ...) is a real error.
pub fn open_history(path: &Path) -> Result<HistoryFile> {
    match File::open(path) {
        Ok(file) => Ok(HistoryFile::Opened(BufReader::new(file))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HistoryFile::Missing),
        Err(source) => Err(ExtractError::HistoryRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Counters from one scan, mostly for debug logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_read: usize,
    pub lines_matched: usize,
    pub lines_rejected: usize,
    pub tokens_added: usize,
}

/// What happened when we invoked the processor on a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Missing,
    Scanned(ScanStats),
}

pub struct HistoryProcessor {
    managers: Vec<PackageManager>,
    packages: PackageSet,
}

impl HistoryProcessor {
    /// `managers` should already be resolved (installed, sudo applied)
    pub fn new(managers: Vec<PackageManager>) -> Self {
        Self {
            managers,
            packages: PackageSet::new(),
        }
    }

    /// Scan a history file and fold any install commands into the package set
    ///
    /// # Arguments
    /// * `path` - History file to read
    /// * `tokenizer` - Splits a matched line into package tokens
    /// * `cleanup` - Optional shell-specific line cleanup
    ///
    /// # Returns
    /// * `Ok(ScanOutcome::Missing)` - File doesn't exist, nothing changed
    /// * `Ok(ScanOutcome::Scanned(stats))` - File was read to the end
    /// * `Err(ExtractError)` - Opening or reading failed for any other reason
    pub fn invoke(
        &mut self,
        path: &Path,
        tokenizer: Tokenizer,
        cleanup: Option<Cleanup>,
    ) -> Result<ScanOutcome> {
        let mut reader = match open_history(path)? {
            HistoryFile::Opened(reader) => reader,
            HistoryFile::Missing => {
                debug!("{} does not exist, nothing to scan", path.display());
                return Ok(ScanOutcome::Missing);
            }
        };

        let mut stats = ScanStats::default();
        let known_before = self.packages.len();
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let read = reader
                .read_until(b'\n', &mut raw)
                .map_err(|source| ExtractError::HistoryRead {
                    path: path.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }

            for body in line_bodies(&raw) {
                stats.lines_read += 1;
                let line = decode_lossless(body);
                self.process_line(&line, tokenizer, cleanup, &mut stats);
            }
        }

        self.packages.remove_empty();
        stats.tokens_added = self.packages.len() - known_before;

        debug!(
            "{}: {} lines, {} installs, {} skipped for operators, {} new tokens",
            path.display(),
            stats.lines_read,
            stats.lines_matched,
            stats.lines_rejected,
            stats.tokens_added
        );

        Ok(ScanOutcome::Scanned(stats))
    }

    fn process_line(
        &mut self,
        line: &str,
        tokenizer: Tokenizer,
        cleanup: Option<Cleanup>,
        stats: &mut ScanStats,
    ) {
        // Prefix is matched against the raw line, before any cleanup
        let Some(manager) = match_prefix(line, &self.managers) else {
            return;
        };
        stats.lines_matched += 1;

        let cleaned = match cleanup {
            Some(clean) => clean(line),
            None => line.to_string(),
        };

        if has_unsupported_operator(&cleaned) {
            trace!("skipping chained command: {}", cleaned);
            stats.lines_rejected += 1;
            return;
        }

        self.packages.extend_tokens(tokenizer(&cleaned, &manager.install_prefix));
    }

    pub fn packages(&self) -> &PackageSet {
        &self.packages
    }

    pub fn into_packages(self) -> PackageSet {
        self.packages
    }
}

fn has_unsupported_operator(line: &str) -> bool {
    UNSUPPORTED_OPERATORS.iter().any(|op| line.contains(op))
}

// Split one `read_until` chunk into line bodies, terminators stripped.
// "\r\n", a lone "\r" and "\n" all end a line, so CRLF histories read cleanly.
fn line_bodies(raw: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = raw.strip_suffix(b"\n").unwrap_or(raw);
    let body = body.strip_suffix(b"\r").unwrap_or(body);
    body.split(|byte| *byte == b'\r')
}

// Decode UTF-8, silently dropping any bytes that don't decode
fn decode_lossless(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
