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

//! Markdown rendering.
//!
//! Every function returns the fragments it produced; callers concatenate
//! them in order. Nothing here writes to shared state.
//!
//! # Cell precedence
//!
//! For each library column of an architecture row:
//!
//! 1. A custom message for (app, library) renders `N/A<sup>key</sup>`.
//! 2. Populated Debug/Release values render as `debug => release`, or alone.
//! 3. A requested link for (architecture, library) renders `[Requested](url)`.
//! 4. Anything else renders `?`.

use crate::aggregate::Aggregator;
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::format::format_thousands;
use crate::model::{Architecture, Context, Library, Metric, StarsEntry, StatMap, StatsData};
use tracing::debug;

/// Begin-template line replaced with the stars row.
pub const STARS_MARKER: &str = "| **Github stars** |";
/// Begin-template line replaced with the forks row.
pub const FORKS_MARKER: &str = "| **Forks** |";
/// Begin-template line replaced with the last update row.
pub const LAST_UPDATE_MARKER: &str = "| **Last Update** |";

/// Replaces the marker lines of the begin template with rows generated from
/// `stats`, in library order. Other lines pass through unchanged.
///
/// Each input segment (including a trailing empty one) is emitted followed
/// by `\n`.
///
/// # Errors
///
/// Returns [`ReportError::MissingStats`] if a marker is present and a
/// library has no stats entry.
pub fn substitute_header(
    template: &str,
    libraries: &[Library],
    stats: &StatsData,
) -> Result<Vec<String>> {
    let mut fragments = Vec::new();

    for line in template.split('\n') {
        if line.starts_with(STARS_MARKER) {
            fragments.push(summary_row("Github stars", libraries, stats, |entry| {
                format_thousands(entry.stars)
            })?);
        } else if line.starts_with(FORKS_MARKER) {
            fragments.push(summary_row("Forks", libraries, stats, |entry| {
                format_thousands(entry.forks)
            })?);
        } else if line.starts_with(LAST_UPDATE_MARKER) {
            fragments.push(summary_row("Last Update", libraries, stats, |entry| {
                entry.last_update.clone()
            })?);
        } else {
            fragments.push(format!("{}\n", line));
        }
    }

    Ok(fragments)
}

fn summary_row(
    label: &str,
    libraries: &[Library],
    stats: &StatsData,
    cell: impl Fn(&StarsEntry) -> String,
) -> Result<String> {
    let mut row = format!("| **{}** ", label);
    for library in libraries {
        let entry = stats
            .get(&library.id)
            .ok_or_else(|| ReportError::missing_stats(&library.id))?;
        row.push_str(&format!("| {} ", cell(entry)));
    }
    row.push_str("|\n");
    Ok(row)
}

/// Table header: a blank corner cell, one linked column per library, and a
/// row of centered separators.
pub fn table_header(libraries: &[Library]) -> String {
    let mut header = String::from("\n\n|  |");
    let mut separator = String::from("|:---:|");

    for library in libraries {
        header.push_str(&format!(" [{}]({}) |", library.name, library.url));
        separator.push_str(":---:|");
    }

    header.push('\n');
    header.push_str(&separator);
    header.push('\n');
    header
}

/// Renders the per-app report blocks.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    config: &'a ReportConfig,
    aggregator: Aggregator<'a>,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer over `aggregator`'s statistics.
    pub fn new(config: &'a ReportConfig, aggregator: Aggregator<'a>) -> Self {
        Self { config, aggregator }
    }

    /// Title, source link, the five metric sections, then footnotes.
    pub fn app_block(&self, app: &str) -> Vec<String> {
        let mut fragments = vec![
            "\n".to_string(),
            format!("# {}\n", app),
            "\n".to_string(),
            format!(
                "See source in [benchmark/{app}]({base}/{app}/) folder.",
                app = app,
                base = self.config.source_url.trim_end_matches('/')
            ),
            "\n\n".to_string(),
        ];

        for metric in Metric::ALL {
            fragments.extend(self.metric_section(app, metric));
        }
        fragments.extend(self.footnotes(app));

        fragments
    }

    /// Heading, table header, and one row per architecture with data.
    pub fn metric_section(&self, app: &str, metric: Metric) -> Vec<String> {
        let mut fragments = vec![
            format!("\n### {}", metric.heading()),
            table_header(&self.config.libraries),
        ];

        let rows: Vec<String> = self
            .config
            .architectures
            .iter()
            .filter_map(|architecture| {
                let stats = self.aggregator.stats(metric, app, &architecture.id);
                self.table_row(app, architecture, metric, &stats)
            })
            .collect();

        debug!("{} / {}: {} rows", app, metric, rows.len());
        fragments.extend(rows);
        fragments
    }

    /// One architecture row, or `None` if `stats` is empty.
    pub fn table_row(
        &self,
        app: &str,
        architecture: &Architecture,
        metric: Metric,
        stats: &StatMap,
    ) -> Option<String> {
        if stats.is_empty() {
            return None;
        }

        let mut row = format!("| ***{}*** |", architecture.name);
        for library in &self.config.libraries {
            row.push_str(&self.cell(app, &architecture.id, library, metric, stats));
        }
        row.push('\n');
        Some(row)
    }

    /// One library cell, including its leading space and trailing pipe.
    pub fn cell(
        &self,
        app: &str,
        architecture: &str,
        library: &Library,
        metric: Metric,
        stats: &StatMap,
    ) -> String {
        if let Some(message) = self.config.custom_message(app, &library.id) {
            return format!(" N/A<sup>{}</sup>|", message.key);
        }

        let debug = stats
            .populated(&library.id, Context::Debug)
            .map(|value| format!("{} (Debug)", metric.format_value(value.get())));
        let release = stats
            .populated(&library.id, Context::Release)
            .map(|value| {
                let formatted = metric.format_value(value.get());
                if metric.shows_release_tag() {
                    format!("{} (Release)", formatted)
                } else {
                    formatted
                }
            });

        match (debug, release) {
            (Some(debug), Some(release)) => format!(" {} => {} |", debug, release),
            (Some(value), None) | (None, Some(value)) => format!(" {} |", value),
            (None, None) => match self.config.requested_url(architecture, &library.id) {
                Some(url) => format!(" [Requested]({}) |", url),
                None => " ? |".to_string(),
            },
        }
    }

    /// Footnote block for the app's custom messages. Empty if the app has no
    /// custom message entry.
    pub fn footnotes(&self, app: &str) -> Vec<String> {
        let Some(messages) = self.config.custom_messages_for(app) else {
            return Vec::new();
        };

        let mut fragments = vec!["\n".to_string()];
        for message in messages {
            fragments.push(format!(
                "**<sup>{}</sup>**: {}  \n",
                message.key, message.value
            ));
        }
        fragments.push("\n\n".to_string());
        fragments
    }
}
