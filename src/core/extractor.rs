/// Extraction driver
///
/// Walks every known shell, feeds its history through one shared processor,
/// and reports what it found plus which shells weren't there.

use crate::config::Environment;
use crate::core::managers::{resolve_available, PackageManager};
use crate::core::package_set::PackageSet;
use crate::core::processor::{HistoryProcessor, ScanOutcome};
use crate::error::Result;
use crate::shell::{Shell, ShellEntry};
use log::info;

/// What a full run produced
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Shells whose executable wasn't found, in registry order
    pub skipped: Vec<Shell>,
    pub packages: PackageSet,
}

pub struct Extractor {
    env: Environment,
    managers: Vec<PackageManager>,
    shells: Vec<ShellEntry>,
}

impl Extractor {
    /// Extractor using the built-in manager and shell tables
    pub fn new(env: Environment) -> Self {
        let shells = ShellEntry::defaults(&env);
        Self::with_registries(env, PackageManager::defaults(), shells)
    }

    /// Extractor with caller-supplied tables
    pub fn with_registries(
        env: Environment,
        managers: Vec<PackageManager>,
        shells: Vec<ShellEntry>,
    ) -> Self {
        Self {
            env,
            managers,
            shells,
        }
    }

    /// Scan every available shell's history
    ///
    /// # Returns
    /// * `Ok(ExtractionReport)` - Packages found across all shells
    /// * `Err(ExtractError)` - A history file existed but couldn't be read
    pub fn run(&self) -> Result<ExtractionReport> {
        self.run_with(|_| {})
    }

    /// Like `run`, but calls `on_skip` the moment a shell turns out to be missing
    ///
    /// Skips reported before a later read error still reach the caller.
    pub fn run_with<F>(&self, mut on_skip: F) -> Result<ExtractionReport>
    where
        F: FnMut(Shell),
    {
        let available = resolve_available(&self.managers, &self.env);
        let mut processor = HistoryProcessor::new(available);
        let mut skipped = Vec::new();

        for entry in &self.shells {
            if !entry.is_available() {
                info!(
                    "{} not installed at {}",
                    entry.shell,
                    entry.executable.display()
                );
                on_skip(entry.shell);
                skipped.push(entry.shell);
                continue;
            }

            let outcome = processor.invoke(&entry.history_file, entry.tokenizer, entry.cleanup)?;
            if let ScanOutcome::Scanned(stats) = outcome {
                info!(
                    "{}: {} new package(s), {} so far",
                    entry.shell,
                    stats.tokens_added,
                    processor.packages().len()
                );
            }
        }

        Ok(ExtractionReport {
            skipped,
            packages: processor.into_packages(),
        })
    }
}
