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

//! Report configuration.
//!
//! The configuration fixes which apps, architectures, and libraries appear in
//! the report, and in which order. List order drives table columns, table
//! rows, and footnote order.
//!
//! # Example
//!
//! ```
//! use deskbench_core::config::ReportConfig;
//!
//! let config = ReportConfig::new()
//!     .with_app("hello-world")
//!     .with_architecture("ubuntu-latest", "Linux")
//!     .with_library("tauri", "Tauri", "https://tauri.app");
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{ReportError, Result};
use crate::model::{Architecture, CustomMessage, Library};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Default base URL for per-app source links.
pub const DEFAULT_SOURCE_URL: &str =
    "https://github.com/Elanis/web-to-desktop-framework-comparison/tree/main/benchmark";

/// Default prefix of benchmark keys in `benchmarks.json`.
pub const DEFAULT_BENCHMARK_PREFIX: &str = "../benchmark";

/// Default config file name.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
/// Default benchmark results file name.
pub const DEFAULT_BENCHMARKS_FILE: &str = "benchmarks.json";
/// Default repository statistics file name.
pub const DEFAULT_STATS_FILE: &str = "stats.json";
/// Default leading template file name.
pub const DEFAULT_BEGIN_TEMPLATE: &str = "README.template.begin.md";
/// Default trailing template file name.
pub const DEFAULT_END_TEMPLATE: &str = "README.template.end.md";
/// Default output path.
pub const DEFAULT_OUTPUT: &str = "../README.md";

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_benchmark_prefix() -> String {
    DEFAULT_BENCHMARK_PREFIX.to_string()
}

/// Static report configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    /// Benchmarked sample apps, one report block each.
    pub apps: Vec<String>,
    /// Platforms, one table row each.
    pub architectures: Vec<Architecture>,
    /// Frameworks, one table column each.
    pub libraries: Vec<Library>,
    /// Per-app cell overrides, rendered as footnotes.
    #[serde(default)]
    pub custom_messages: HashMap<String, Vec<CustomMessage>>,
    /// Architecture id to library id to the URL tracking a benchmark request.
    #[serde(default)]
    pub requested_architectures: HashMap<String, HashMap<String, String>>,
    /// Base URL for per-app source links.
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Prefix of benchmark keys in `benchmarks.json`.
    #[serde(default = "default_benchmark_prefix")]
    pub benchmark_prefix: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            apps: Vec::new(),
            architectures: Vec::new(),
            libraries: Vec::new(),
            custom_messages: HashMap::new(),
            requested_architectures: HashMap::new(),
            source_url: default_source_url(),
            benchmark_prefix: default_benchmark_prefix(),
        }
    }
}

impl ReportConfig {
    /// Creates an empty configuration with default URLs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON configuration. `origin` is only used in
    /// error messages.
    pub fn from_json(content: &str, origin: impl Into<PathBuf>) -> Result<Self> {
        let config: ReportConfig =
            serde_json::from_str(content).map_err(|e| ReportError::json_error(origin, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Appends an app.
    pub fn with_app(mut self, app: impl Into<String>) -> Self {
        self.apps.push(app.into());
        self
    }

    /// Appends an architecture.
    pub fn with_architecture(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.architectures.push(Architecture {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    /// Appends a library.
    pub fn with_library(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.libraries.push(Library {
            id: id.into(),
            name: name.into(),
            url: url.into(),
        });
        self
    }

    /// Appends a custom message for `app`.
    pub fn with_custom_message(
        mut self,
        app: impl Into<String>,
        library: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.custom_messages
            .entry(app.into())
            .or_default()
            .push(CustomMessage {
                library: library.into(),
                key: key.into(),
                value: value.into(),
            });
        self
    }

    /// Marks a benchmark as requested for an architecture/library pair.
    pub fn with_requested(
        mut self,
        architecture: impl Into<String>,
        library: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.requested_architectures
            .entry(architecture.into())
            .or_default()
            .insert(library.into(), url.into());
        self
    }

    /// Sets the base URL for per-app source links.
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Sets the benchmark key prefix.
    pub fn with_benchmark_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.benchmark_prefix = prefix.into();
        self
    }

    /// Returns the custom message overriding `library` cells for `app`.
    pub fn custom_message(&self, app: &str, library: &str) -> Option<&CustomMessage> {
        self.custom_messages
            .get(app)?
            .iter()
            .find(|message| message.library == library)
    }

    /// Returns the custom messages configured for `app`, in footnote order.
    ///
    /// `Some(&[])` and `None` differ: an app listed with no messages still
    /// gets an (empty) footnote block.
    pub fn custom_messages_for(&self, app: &str) -> Option<&[CustomMessage]> {
        self.custom_messages.get(app).map(Vec::as_slice)
    }

    /// Returns the request URL for an architecture/library pair.
    pub fn requested_url(&self, architecture: &str, library: &str) -> Option<&str> {
        self.requested_architectures
            .get(architecture)?
            .get(library)
            .map(String::as_str)
    }

    /// Checks identifiers are non-empty, unique, and usable in benchmark keys.
    pub fn validate(&self) -> Result<()> {
        check_identifiers("app", self.apps.iter().map(String::as_str))?;
        check_identifiers(
            "architecture",
            self.architectures.iter().map(|a| a.id.as_str()),
        )?;
        check_identifiers("library", self.libraries.iter().map(|l| l.id.as_str()))?;

        for (app, messages) in &self.custom_messages {
            let mut seen = HashSet::new();
            for message in messages {
                if !seen.insert(message.library.as_str()) {
                    return Err(ReportError::invalid_config(format!(
                        "duplicate custom message for library '{}' in app '{}'",
                        message.library, app
                    )));
                }
            }
        }

        Ok(())
    }
}

fn check_identifiers<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            return Err(ReportError::invalid_config(format!("empty {} identifier", kind)));
        }
        if id.contains('/') {
            return Err(ReportError::invalid_config(format!(
                "{} identifier '{}' must not contain '/'",
                kind, id
            )));
        }
        if !seen.insert(id) {
            return Err(ReportError::invalid_config(format!(
                "duplicate {} '{}'",
                kind, id
            )));
        }
    }
    Ok(())
}

/// Locations of every pipeline input and of the output report.
///
/// Defaults match running from the benchmark runner directory, with the
/// report landing one level up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// Report configuration.
    pub config: PathBuf,
    /// Benchmark results.
    pub benchmarks: PathBuf,
    /// Repository statistics.
    pub stats: PathBuf,
    /// Template placed before the generated tables.
    pub begin_template: PathBuf,
    /// Template appended after the generated tables.
    pub end_template: PathBuf,
    /// Output report.
    pub output: PathBuf,
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            benchmarks: PathBuf::from(DEFAULT_BENCHMARKS_FILE),
            stats: PathBuf::from(DEFAULT_STATS_FILE),
            begin_template: PathBuf::from(DEFAULT_BEGIN_TEMPLATE),
            end_template: PathBuf::from(DEFAULT_END_TEMPLATE),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ReportPaths {
    /// Default file names inside `dir`, with the report written to
    /// `dir/README.md`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            config: dir.join(DEFAULT_CONFIG_FILE),
            benchmarks: dir.join(DEFAULT_BENCHMARKS_FILE),
            stats: dir.join(DEFAULT_STATS_FILE),
            begin_template: dir.join(DEFAULT_BEGIN_TEMPLATE),
            end_template: dir.join(DEFAULT_END_TEMPLATE),
            output: dir.join("README.md"),
        }
    }

    /// Sets the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}
