//! Conversion snapshots: record the forward and round-trip output for a list
//! of inputs as JSONL, and compare the current table against a saved run.

use std::collections::HashMap;
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use rune_engine::{from_runic, to_runic, Orthography};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("IO error on {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("{path}:{line}: invalid snapshot entry: {source}")]
    Json {
        path: String,
        line: usize,
        source: serde_json::Error,
    },
}

/// A single snapshot entry (one per input line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub text: String,
    pub runic: String,
    pub back: String,
}

impl SnapshotEntry {
    pub fn capture(text: &str, orthography: Orthography) -> Self {
        let runic = to_runic(text, orthography);
        let back = from_runic(&runic, orthography);
        Self {
            text: text.to_string(),
            runic,
            back,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub total: usize,
    pub same: usize,
    pub changed: usize,
    pub new: usize,
}

impl DiffSummary {
    pub fn is_clean(&self) -> bool {
        self.changed == 0 && self.new == 0
    }
}

fn io_err(path: &Path, source: io::Error) -> SnapshotError {
    SnapshotError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Input lines, trimmed, skipping blanks and `#` comments.
pub fn read_inputs(path: &Path) -> Result<Vec<String>, SnapshotError> {
    let file = fs::File::open(path).map_err(|e| io_err(path, e))?;
    let mut inputs = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| io_err(path, e))?;
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}

pub fn write_snapshot(
    inputs: &[String],
    output: &Path,
    orthography: Orthography,
) -> Result<(), SnapshotError> {
    let file = fs::File::create(output).map_err(|e| io_err(output, e))?;
    let mut writer = BufWriter::new(file);
    for (i, text) in inputs.iter().enumerate() {
        let entry = SnapshotEntry::capture(text, orthography);
        let line = serde_json::to_string(&entry).map_err(|source| SnapshotError::Json {
            path: output.display().to_string(),
            line: i + 1,
            source,
        })?;
        writeln!(writer, "{line}").map_err(|e| io_err(output, e))?;
    }
    writer.flush().map_err(|e| io_err(output, e))
}

pub fn read_baseline(path: &Path) -> Result<HashMap<String, SnapshotEntry>, SnapshotError> {
    let content = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let mut baseline = HashMap::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry: SnapshotEntry =
            serde_json::from_str(line).map_err(|source| SnapshotError::Json {
                path: path.display().to_string(),
                line: i + 1,
                source,
            })?;
        baseline.insert(entry.text.clone(), entry);
    }
    Ok(baseline)
}

/// Compare current output for `inputs` with `baseline`, reporting each
/// difference to `out`.
pub fn diff_entries<W: Write>(
    inputs: &[String],
    baseline: &HashMap<String, SnapshotEntry>,
    orthography: Orthography,
    mut out: W,
) -> io::Result<DiffSummary> {
    let mut summary = DiffSummary {
        total: inputs.len(),
        ..DiffSummary::default()
    };
    for text in inputs {
        let current = SnapshotEntry::capture(text, orthography);
        match baseline.get(text) {
            Some(base) if *base == current => summary.same += 1,
            Some(base) => {
                summary.changed += 1;
                if base.runic != current.runic {
                    writeln!(
                        out,
                        "  CHANGED: {} -> {} (was: {})",
                        text, current.runic, base.runic
                    )?;
                } else {
                    writeln!(
                        out,
                        "  changed: {} -> {} (same runes, was: {})",
                        text, current.back, base.back
                    )?;
                }
            }
            None => {
                summary.new += 1;
                writeln!(out, "  NEW: {} -> {}", text, current.runic)?;
            }
        }
    }
    Ok(summary)
}

pub fn snapshot_cmd(input: &str, output: &str, orthography: Orthography) {
    let inputs = die!(read_inputs(Path::new(input)), "Error: {}");
    die!(
        write_snapshot(&inputs, Path::new(output), orthography),
        "Error: {}"
    );
    eprintln!("Snapshot written: {} inputs -> {}", inputs.len(), output);
}

/// Returns `false` when anything differs from the baseline.
pub fn diff_snapshot_cmd(input: &str, baseline_file: &str, orthography: Orthography) -> bool {
    let inputs = die!(read_inputs(Path::new(input)), "Error: {}");
    let baseline = die!(read_baseline(Path::new(baseline_file)), "Error: {}");
    let summary = die!(
        diff_entries(&inputs, &baseline, orthography, io::stdout().lock()),
        "Error writing diff: {}"
    );
    println!(
        "\n{} inputs: {} same, {} changed, {} new",
        summary.total, summary.same, summary.changed, summary.new
    );
    summary.is_clean()
}
