// Deskbench - Desktop Framework Benchmark Reports
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! Input loading.
//!
//! Reads every pipeline input up front. Any missing, oversized, or malformed
//! file aborts the run before rendering starts.

use crate::config::{ReportConfig, ReportPaths};
use crate::error::{ReportError, Result};
use crate::model::{BenchmarkData, Library, StarsEntry, StatsData};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default maximum input file size (1 GB).
/// Can be overridden via the `DESKBENCH_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "DESKBENCH_MAX_FILE_SIZE";

fn max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Reads a file to a string, rejecting files over the size limit before
/// allocating.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The file size exceeds the limit (configurable via `DESKBENCH_MAX_FILE_SIZE`)
/// - The file cannot be read or is not valid UTF-8
pub fn read_file(path: &Path) -> Result<String> {
    read_file_with_limit(path, max_file_size())
}

/// Reads a file to a string, rejecting files larger than `max` bytes.
pub fn read_file_with_limit(path: &Path, max: u64) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| ReportError::io_error(path, e))?;

    if metadata.len() > max {
        return Err(ReportError::file_too_large(path, metadata.len(), max));
    }

    debug!("Reading {} ({} bytes)", path.display(), metadata.len());
    fs::read_to_string(path).map_err(|e| ReportError::io_error(path, e))
}

/// Reads and deserializes a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| ReportError::json_error(path, e))
}

/// Every input the renderer needs, loaded and checked.
#[derive(Debug, Clone)]
pub struct Inputs {
    /// Report configuration.
    pub config: ReportConfig,
    /// Benchmark results per architecture.
    pub benchmarks: BenchmarkData,
    /// Repository statistics per library.
    pub stats: StatsData,
    /// Template placed before the generated tables.
    pub begin_template: String,
    /// Template appended verbatim after the generated tables.
    pub end_template: String,
}

impl Inputs {
    /// Loads all inputs named by `paths`.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable or malformed file, on an invalid
    /// configuration, or when `stats.json` lacks a configured library.
    pub fn load(paths: &ReportPaths) -> Result<Self> {
        let config = ReportConfig::from_json(&read_file(&paths.config)?, &paths.config)?;
        let benchmarks: BenchmarkData = load_json(&paths.benchmarks)?;
        let raw_stats: HashMap<String, Value> = load_json(&paths.stats)?;
        let stats = decode_stats(raw_stats, &config.libraries, &paths.stats)?;
        let begin_template = read_file(&paths.begin_template)?;
        let end_template = read_file(&paths.end_template)?;

        let inputs = Self {
            config,
            benchmarks,
            stats,
            begin_template,
            end_template,
        };

        debug!(
            "Loaded {} architectures, {} stats entries",
            inputs.benchmarks.len(),
            inputs.stats.len()
        );
        Ok(inputs)
    }
}

// Only configured libraries are decoded, so a malformed entry for any other
// library is ignored.
fn decode_stats(
    mut raw: HashMap<String, Value>,
    libraries: &[Library],
    path: &Path,
) -> Result<StatsData> {
    let mut stats = StatsData::new();
    for library in libraries {
        let value = raw
            .remove(&library.id)
            .ok_or_else(|| ReportError::missing_stats(&library.id))?;
        let entry: StarsEntry =
            serde_json::from_value(value).map_err(|e| ReportError::json_error(path, e))?;
        stats.insert(library.id.clone(), entry);
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CONFIG: &str = r#"{
        "apps": ["hello-world"],
        "architectures": [{"id": "ubuntu-latest", "name": "Linux"}],
        "libraries": [{"id": "tauri", "name": "Tauri", "url": "https://tauri.app"}]
    }"#;

    const STATS: &str = r#"{"tauri": {"stars": 80000, "forks": 2400, "lastUpdate": "2024-01-01"}}"#;

    fn write_inputs(dir: &TempDir, stats: &str) -> ReportPaths {
        let paths = ReportPaths::in_dir(dir.path());
        fs::write(&paths.config, CONFIG).unwrap();
        fs::write(&paths.benchmarks, r#"{"ubuntu-latest": {"benchmarkData": {}}}"#).unwrap();
        fs::write(&paths.stats, stats).unwrap();
        fs::write(&paths.begin_template, "# Begin\n").unwrap();
        fs::write(&paths.end_template, "## End\n").unwrap();
        paths
    }

    #[test]
    fn test_load_all_inputs() {
        let dir = TempDir::new().unwrap();
        let paths = write_inputs(&dir, STATS);

        let inputs = Inputs::load(&paths).unwrap();
        assert_eq!(inputs.config.libraries.len(), 1);
        assert!(inputs.benchmarks.contains_key("ubuntu-latest"));
        assert_eq!(inputs.stats["tauri"].stars, 80000);
        assert_eq!(inputs.begin_template, "# Begin\n");
        assert_eq!(inputs.end_template, "## End\n");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let paths = write_inputs(&dir, STATS);
        fs::remove_file(&paths.end_template).unwrap();

        let err = Inputs::load(&paths).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
        assert!(err.to_string().contains("README.template.end.md"));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let dir = TempDir::new().unwrap();
        let paths = write_inputs(&dir, "{ not json");

        let err = Inputs::load(&paths).unwrap_err();
        assert!(matches!(err, ReportError::Json { .. }));
        assert!(err.to_string().contains("stats.json"));
    }

    #[test]
    fn test_missing_stats_entry() {
        let dir = TempDir::new().unwrap();
        let paths = write_inputs(&dir, "{}");

        let err = Inputs::load(&paths).unwrap_err();
        assert!(matches!(err, ReportError::MissingStats { ref library } if library == "tauri"));
    }

    #[test]
    fn test_unconfigured_stats_entry_is_ignored() {
        let dir = TempDir::new().unwrap();
        let stats = r#"{
            "tauri": {"stars": 80000, "forks": 2400, "lastUpdate": "2024-01-01"},
            "neutralino": {"stars": null, "forks": "n/a"}
        }"#;
        let paths = write_inputs(&dir, stats);

        let inputs = Inputs::load(&paths).unwrap();
        assert_eq!(inputs.stats.len(), 1);
        assert_eq!(inputs.stats["tauri"].forks, 2400);
    }

    #[test]
    fn test_malformed_configured_stats_entry() {
        let dir = TempDir::new().unwrap();
        let paths = write_inputs(&dir, r#"{"tauri": {"stars": null, "forks": 1, "lastUpdate": "x"}}"#);

        let err = Inputs::load(&paths).unwrap_err();
        assert!(matches!(err, ReportError::Json { .. }));
        assert!(err.to_string().contains("stats.json"));
    }

    #[test]
    fn test_file_over_limit_is_rejected() {
        let dir = TempDir::new().unwrap();
        let paths = write_inputs(&dir, STATS);

        let err = read_file_with_limit(&paths.config, 100).unwrap_err();
        assert!(matches!(
            err,
            ReportError::FileTooLarge { actual, max: 100, .. } if actual > 100
        ));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_file_at_limit_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exact.md");
        fs::write(&path, "0123456789").unwrap();

        assert_eq!(read_file_with_limit(&path, 10).unwrap(), "0123456789");
    }

    #[test]
    fn test_benchmark_data_defaults_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("benchmarks.json");
        fs::write(&path, r#"{"windows-latest": {}}"#).unwrap();

        let data: BenchmarkData = load_json(&path).unwrap();
        assert!(data["windows-latest"].benchmark_data.is_empty());
    }
}
