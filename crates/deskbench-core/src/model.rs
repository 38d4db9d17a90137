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

//! Data model for benchmark inputs and derived statistics.
//!
//! Raw input types mirror the JSON documents written by the benchmark
//! harness (`benchmarks.json`, `stats.json`). Derived types ([`StatValue`],
//! [`StatMap`]) carry the aggregated numbers consumed by the renderer.

use crate::format::{format_memory, format_time};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Build configuration a benchmark was recorded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Context {
    /// Debug build.
    Debug,
    /// Release build.
    Release,
}

impl Context {
    /// Both contexts, in the order they are looked up.
    pub const ALL: [Context; 2] = [Context::Debug, Context::Release];

    /// Returns the context name as it appears in benchmark key paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Context::Debug => "Debug",
            Context::Release => "Release",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A benchmarked framework, rendered as one table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Identifier used in benchmark key paths and `stats.json`.
    pub id: String,
    /// Display name for table headers.
    pub name: String,
    /// Project URL linked from table headers.
    pub url: String,
}

/// A platform benchmarks were run on, rendered as one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Architecture {
    /// Identifier used as the top-level key of `benchmarks.json`.
    pub id: String,
    /// Display name for table rows.
    pub name: String,
}

/// Footnoted override replacing every stat cell of one library for one app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomMessage {
    /// Library the message applies to.
    pub library: String,
    /// Footnote marker, rendered as a superscript.
    pub key: String,
    /// Footnote text.
    pub value: String,
}

/// Typed lookup key into an architecture's `benchmarkData` map.
///
/// Build metrics are recorded once per app/library, run metrics once per
/// app/library/context. The raw map is keyed by path-like strings; this is
/// the only place those strings are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkKey<'a> {
    app: &'a str,
    library: &'a str,
    context: Option<Context>,
}

impl<'a> BenchmarkKey<'a> {
    /// Key for build metrics (size, time).
    pub fn build(app: &'a str, library: &'a str) -> Self {
        Self {
            app,
            library,
            context: None,
        }
    }

    /// Key for per-context run metrics (memory, start time).
    pub fn run(app: &'a str, library: &'a str, context: Context) -> Self {
        Self {
            app,
            library,
            context: Some(context),
        }
    }

    /// Renders the key as `{prefix}/{app}/{library}[/{context}]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deskbench_core::model::{BenchmarkKey, Context};
    ///
    /// let key = BenchmarkKey::run("hello-world", "tauri", Context::Debug);
    /// assert_eq!(key.path("../benchmark"), "../benchmark/hello-world/tauri/Debug");
    /// ```
    pub fn path(&self, prefix: &str) -> String {
        let mut path = format!(
            "{}/{}/{}",
            prefix.trim_end_matches('/'),
            self.app,
            self.library
        );
        if let Some(context) = self.context {
            path.push('/');
            path.push_str(context.as_str());
        }
        path
    }
}

/// Parsed `benchmarks.json`: architecture id to recorded benchmarks.
pub type BenchmarkData = HashMap<String, ArchitectureData>;

/// Parsed `stats.json`: library id to repository statistics.
pub type StatsData = HashMap<String, StarsEntry>;

/// All benchmark records captured on one architecture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureData {
    /// Records keyed by benchmark path.
    #[serde(default)]
    pub benchmark_data: HashMap<String, BenchmarkRecord>,
}

impl ArchitectureData {
    /// Looks up the record for `key`, rendering it under `prefix`.
    pub fn record(&self, key: &BenchmarkKey<'_>, prefix: &str) -> Option<&BenchmarkRecord> {
        self.benchmark_data.get(&key.path(prefix))
    }
}

/// One benchmark record. Every field is optional in the input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRecord {
    /// Size of the built artifact in bytes.
    #[serde(default, deserialize_with = "lenient_number")]
    pub build_size: Option<f64>,
    /// Build duration in milliseconds.
    #[serde(default, deserialize_with = "lenient_number")]
    pub build_time: Option<f64>,
    /// Per-run samples, in recording order.
    #[serde(default)]
    pub benchmarks: Option<Vec<RunSample>>,
}

/// Measurements from a single application run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSample {
    /// Memory measurements for the run.
    #[serde(default)]
    pub memory_usage: Option<MemoryUsage>,
    /// Time to first window, in milliseconds.
    #[serde(default, deserialize_with = "lenient_number")]
    pub start_time: Option<f64>,
}

/// Memory medians for a run, in bytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    /// Median memory used by the main process and its children.
    #[serde(default, deserialize_with = "lenient_number")]
    pub med: Option<f64>,
    /// Median drop in system free memory during the run.
    #[serde(default, deserialize_with = "lenient_number")]
    pub sys_med: Option<f64>,
}

/// Repository statistics for one library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarsEntry {
    /// GitHub stars.
    pub stars: u64,
    /// GitHub forks.
    pub forks: u64,
    /// Human-readable date of the last release or commit.
    pub last_update: String,
}

// Non-numeric values (strings, booleans, objects) are read as "no data"
// instead of failing the whole document.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

/// One aggregated statistic.
///
/// Values follow the number semantics of the upstream harness: zero and NaN
/// are present but unpopulated, and render like missing data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatValue(f64);

impl StatValue {
    /// Wraps a raw value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns whether the value is non-zero and not NaN.
    pub fn is_populated(self) -> bool {
        self.0 != 0.0 && !self.0.is_nan()
    }
}

/// Aggregated statistics for one (app, architecture, metric), keyed by
/// library and context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatMap {
    entries: BTreeMap<(String, Context), StatValue>,
}

impl StatMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a value, replacing any previous one for the same key.
    pub fn insert(&mut self, library: impl Into<String>, context: Context, value: StatValue) {
        self.entries.insert((library.into(), context), value);
    }

    /// Returns the value recorded for `library` under `context`.
    pub fn get(&self, library: &str, context: Context) -> Option<StatValue> {
        self.entries.get(&(library.to_string(), context)).copied()
    }

    /// Returns the value only if it is populated.
    pub fn populated(&self, library: &str, context: Context) -> Option<StatValue> {
        self.get(library, context).filter(|v| v.is_populated())
    }

    /// Returns whether any context holds a value for `library`.
    pub fn contains_library(&self, library: &str) -> bool {
        self.entries.keys().any(|(id, _)| id == library)
    }

    /// Number of recorded values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no value was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of populated values.
    pub fn populated_count(&self) -> usize {
        self.entries.values().filter(|v| v.is_populated()).count()
    }

    /// Iterates over `(library, context, value)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Context, StatValue)> {
        self.entries
            .iter()
            .map(|((library, context), value)| (library.as_str(), *context, *value))
    }
}

/// The five report sections, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Size of the release artifact.
    BuildSize,
    /// Duration of the release build.
    BuildTime,
    /// Average of per-run main process memory medians.
    Memory,
    /// Average of per-run system free memory medians.
    SystemMemory,
    /// Median start duration.
    StartTime,
}

impl Metric {
    /// All metrics in report order.
    pub const ALL: [Metric; 5] = [
        Metric::BuildSize,
        Metric::BuildTime,
        Metric::Memory,
        Metric::SystemMemory,
        Metric::StartTime,
    ];

    /// Section title, written after `### `.
    pub fn heading(self) -> &'static str {
        match self {
            Metric::BuildSize => "Build size  ",
            Metric::BuildTime => "Build time  ",
            Metric::Memory => {
                "Memory Usage - (Average of runs) Median of used memory for main process and children ones) "
            }
            Metric::SystemMemory => {
                "Memory Usage - (Average of runs) Median of difference between system measured free memory before execution and during execution)"
            }
            Metric::StartTime => "Start duration  ",
        }
    }

    /// Short machine-friendly name.
    pub fn name(self) -> &'static str {
        match self {
            Metric::BuildSize => "build-size",
            Metric::BuildTime => "build-time",
            Metric::Memory => "memory",
            Metric::SystemMemory => "system-memory",
            Metric::StartTime => "start-time",
        }
    }

    /// Whether the release value is suffixed with `(Release)`.
    ///
    /// Build metrics only have a release track, so the tag is omitted there.
    pub fn shows_release_tag(self) -> bool {
        !matches!(self, Metric::BuildSize | Metric::BuildTime)
    }

    /// Formats a populated value for display.
    pub fn format_value(self, value: f64) -> String {
        match self {
            Metric::BuildSize | Metric::Memory | Metric::SystemMemory => format_memory(value),
            Metric::BuildTime | Metric::StartTime => format_time(value),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
