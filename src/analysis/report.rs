//! Per-file and per-directory analysis reporting.

use log::{error, info, warn};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::analysis::aggregate::{aggregate, DatasetSummary};
use crate::analysis::record::load_records;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

/// Load a record file and aggregate it with the config's k values.
pub fn analyze_file(
    path: &Path,
    config: &AnalysisConfig,
) -> Result<DatasetSummary, AnalysisError> {
    let problems = load_records(path)?;
    aggregate(&problems, &config.k_values)
}

/// Write one file's summary block: totals, pass@k percentages, and
/// the hardest (0% pass rate) problem names.
pub fn write_summary(
    out: &mut impl Write,
    summary: &DatasetSummary,
    hardest_limit: usize,
) -> Result<(), AnalysisError> {
    writeln!(out, "   Total problems: {}", summary.total_problems)?;
    for (k, value) in &summary.pass_at_k {
        writeln!(out, "   pass@{}: {:.2}%", k, value * 100.0)?;
    }

    let hardest = summary.hardest(hardest_limit);
    if !hardest.is_empty() {
        writeln!(out, "\n   Hardest problems (0% pass rate):")?;
        for p in hardest {
            writeln!(out, "      - {}", p.name)?;
        }
    }
    Ok(())
}

/// Analyze every regular, non-hidden file in the record directory.
///
/// Files are processed in name order so reports are reproducible. A
/// missing or malformed file is reported and skipped; it never
/// terminates the scan. An empty directory produces an empty report.
pub fn analyze_record_dir(
    config: &AnalysisConfig,
    out: &mut impl Write,
) -> Result<(), AnalysisError> {
    let dir = &config.record_dir;
    if !dir.exists() {
        return Err(AnalysisError::NotFound {
            path: dir.to_path_buf(),
        });
    }

    writeln!(out, "{}", "=".repeat(70))?;
    writeln!(out, "ANALYZING ALL RESULT FILES")?;
    writeln!(out, "{}", "=".repeat(70))?;

    let mut entries: Vec<_> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|e| {
            e.path().is_file()
                && !e.file_name().to_string_lossy().starts_with('.')
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    info!("Scanning {} record files in {:?}", entries.len(), dir);

    for entry in entries {
        let path = entry.path();
        let filename = entry.file_name().to_string_lossy().to_string();
        writeln!(out, "\n{}", filename)?;
        writeln!(out, "{}", "-".repeat(50))?;

        match analyze_file(&path, config) {
            Ok(summary) => write_summary(out, &summary, config.hardest_limit)?,
            Err(AnalysisError::NotFound { path }) => {
                warn!("File vanished during scan: {:?}", path);
                writeln!(out, "   skipped: file not found")?;
            }
            Err(e) => {
                error!("Skipping {}: {}", filename, e);
                writeln!(out, "   skipped: {}", e)?;
            }
        }
    }

    Ok(())
}
