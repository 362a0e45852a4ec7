// Fortiparse - FortiGate configuration parser
//
// Copyright (c) 2025 Fortiparse contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Batch processing of many configuration files with progress reporting.
//!
//! Small batches run serially; from [`BatchConfig::parallel_threshold`]
//! files upward they run on the Rayon thread pool. Every file is processed
//! even when some fail, and failures are collected per file.
//!
//! ```rust,no_run
//! use fortiparse_cli::batch::{BatchConfig, BatchProcessor, ParseOperation};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let processor = BatchProcessor::new(BatchConfig::default());
//! let files = vec![PathBuf::from("fw01.conf"), PathBuf::from("fw02.conf")];
//! let operation = ParseOperation::new("out");
//! let results = processor.process(&files, &operation, true);
//! println!("{} of {} converted", results.success_count(), results.total_files());
//! # Ok(())
//! # }
//! ```

use crate::commands::{read_file, scan_content};
use crate::error::CliError;
use colored::Colorize;
use fortiparse_core::ScanOptions;
use fortiparse_json::{to_json, ToJsonConfig};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Configuration for batch processing.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Minimum number of files before processing goes parallel.
    pub parallel_threshold: usize,
    /// Report progress every N files (0 disables per-file reports).
    pub progress_interval: usize,
    /// Print every file as it completes.
    pub verbose: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4,
            progress_interval: 1,
            verbose: false,
        }
    }
}

/// Outcome for one file.
#[derive(Debug, Clone)]
pub struct FileResult<T> {
    pub path: PathBuf,
    pub result: Result<T, CliError>,
}

impl<T> FileResult<T> {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

/// Outcomes of a whole batch, in input order.
#[derive(Debug, Clone)]
pub struct BatchResults<T> {
    pub results: Vec<FileResult<T>>,
    pub elapsed_ms: u128,
}

impl<T> BatchResults<T> {
    pub fn total_files(&self) -> usize {
        self.results.len()
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.is_failure())
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileResult<T>> {
        self.results.iter().filter(|r| r.is_failure())
    }
}

/// An operation applied to each file of a batch.
pub trait BatchOperation: Send + Sync {
    type Output: Send;

    fn process_file(&self, path: &Path) -> Result<Self::Output, CliError>;

    /// Name shown in the batch summary.
    fn name(&self) -> &str;
}

#[derive(Debug)]
struct ProgressTracker {
    total: usize,
    processed: AtomicUsize,
    succeeded: AtomicUsize,
    failed: AtomicUsize,
    interval: usize,
    verbose: bool,
    start_time: Instant,
}

impl ProgressTracker {
    fn new(total: usize, interval: usize, verbose: bool) -> Self {
        Self {
            total,
            processed: AtomicUsize::new(0),
            succeeded: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            interval,
            verbose,
            start_time: Instant::now(),
        }
    }

    fn record<T>(&self, path: &Path, result: &Result<T, CliError>) {
        let processed = self.processed.fetch_add(1, Ordering::Relaxed) + 1;
        match result {
            Ok(_) => {
                self.succeeded.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                if self.verbose {
                    eprintln!("{} {} - {}", "✗".red().bold(), path.display(), e);
                }
            }
        }

        if self.interval > 0 && (processed % self.interval == 0 || processed == self.total) {
            self.report_progress(path, processed, result.is_ok());
        }
    }

    fn report_progress(&self, current_file: &Path, processed: usize, success: bool) {
        if self.verbose {
            let status = if success {
                "✓".green().bold()
            } else {
                "✗".red().bold()
            };
            eprintln!("{} [{}/{}] {}", status, processed, self.total, current_file.display());
        } else {
            eprintln!(
                "Progress: [{}/{}] {} succeeded, {} failed",
                processed,
                self.total,
                self.succeeded.load(Ordering::Relaxed),
                self.failed.load(Ordering::Relaxed)
            );
        }
    }

    fn print_summary(&self, operation_name: &str) {
        let elapsed = self.start_time.elapsed();

        println!();
        println!("{}", "═".repeat(60).bright_blue());
        println!(
            "{} {}",
            "Batch Operation:".bright_blue().bold(),
            operation_name.bright_white()
        );
        println!("{}", "═".repeat(60).bright_blue());
        println!(
            "  {} {}",
            "Total files:".bright_cyan(),
            self.processed.load(Ordering::Relaxed)
        );
        println!(
            "  {} {}",
            "Succeeded:".green().bold(),
            self.succeeded.load(Ordering::Relaxed)
        );
        println!(
            "  {} {}",
            "Failed:".red().bold(),
            self.failed.load(Ordering::Relaxed)
        );
        println!("  {} {:.2}s", "Elapsed:".bright_cyan(), elapsed.as_secs_f64());
        println!("{}", "═".repeat(60).bright_blue());
    }
}

/// Runs a [`BatchOperation`] over a list of files.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Process every file, serially or in parallel depending on the batch size.
    pub fn process<O>(&self, files: &[PathBuf], operation: &O, show_progress: bool) -> BatchResults<O::Output>
    where
        O: BatchOperation,
    {
        let start_time = Instant::now();
        let tracker = show_progress.then(|| {
            ProgressTracker::new(files.len(), self.config.progress_interval, self.config.verbose)
        });

        let run = |path: &PathBuf| {
            let result = operation.process_file(path);
            if let Some(t) = &tracker {
                t.record(path, &result);
            }
            FileResult {
                path: path.clone(),
                result,
            }
        };

        let results: Vec<FileResult<O::Output>> = if files.len() < self.config.parallel_threshold {
            files.iter().map(run).collect()
        } else {
            files.par_iter().map(run).collect()
        };

        if let Some(tracker) = &tracker {
            if !files.is_empty() {
                tracker.print_summary(operation.name());
            }
        }

        BatchResults {
            results,
            elapsed_ms: start_time.elapsed().as_millis(),
        }
    }
}

/// Parse a configuration file and write it as `<stem>.json` into a directory.
#[derive(Debug, Clone)]
pub struct ParseOperation {
    pub output_dir: PathBuf,
    pub options: ScanOptions,
    pub json: ToJsonConfig,
}

impl ParseOperation {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            options: ScanOptions::default(),
            json: ToJsonConfig::default(),
        }
    }

    /// Output path for `input`.
    pub fn output_path(&self, input: &Path) -> Result<PathBuf, CliError> {
        let stem = input.file_stem().ok_or_else(|| {
            CliError::invalid_input(format!("'{}' has no file name", input.display()))
        })?;
        let mut name = stem.to_os_string();
        name.push(".json");
        Ok(self.output_dir.join(name))
    }
}

impl BatchOperation for ParseOperation {
    type Output = PathBuf;

    fn process_file(&self, path: &Path) -> Result<Self::Output, CliError> {
        let input = path.to_string_lossy();
        let content = read_file(&input)?;
        let summary = scan_content(&content, &input, self.options.clone())?;

        let mut json = to_json(&summary.tree, &self.json)?;
        json.push('\n');

        let output = self.output_path(path)?;
        fs::write(&output, json).map_err(|e| CliError::io_error(&output, e))?;
        Ok(output)
    }

    fn name(&self) -> &str {
        "parse"
    }
}
