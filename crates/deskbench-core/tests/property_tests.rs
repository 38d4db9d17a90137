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

//! Property-based tests for aggregation and formatting using proptest.
//!
//! - Memory formatting always lands at or below 1000 in the chosen unit
//! - Time formatting maps every negative value to N/A
//! - Memory means count missing samples as zero
//! - Numeric medians pick index `len / 2` of the sorted values
//! - Rendered rows carry one cell per configured library

use deskbench_core::aggregate::{mean_of_runs, median_start_time, Aggregator, MedianOrdering};
use deskbench_core::config::ReportConfig;
use deskbench_core::format::{format_memory, format_time};
use deskbench_core::model::{BenchmarkData, Context, MemoryUsage, Metric, RunSample, StatMap, StatValue};
use deskbench_core::render::Renderer;
use proptest::prelude::*;

// ===== Generators =====

fn memory_run(med: Option<u32>) -> RunSample {
    RunSample {
        memory_usage: Some(MemoryUsage {
            med: med.map(f64::from),
            sys_med: None,
        }),
        start_time: None,
    }
}

fn start_run(start_time: u32) -> RunSample {
    RunSample {
        memory_usage: None,
        start_time: Some(f64::from(start_time)),
    }
}

fn library_ids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,12}", 1..8).prop_map(|set| {
        let mut ids: Vec<String> = set.into_iter().collect();
        ids.sort();
        ids
    })
}

// ===== Properties =====

proptest! {
    #[test]
    fn prop_memory_scaled_within_unit(bytes in 0u64..1_000_000_000_000) {
        let formatted = format_memory(bytes as f64);
        prop_assert!(formatted.starts_with('≈'));

        let body = formatted.trim_start_matches('≈');
        let digits: String = body.chars().take_while(|c| c.is_ascii_digit()).collect();
        let unit = &body[digits.len()..];
        prop_assert!(["B", "KB", "MB", "GB"].contains(&unit));
        prop_assert!(digits.parse::<u64>().unwrap() <= 1000);
    }

    #[test]
    fn prop_negative_time_is_na(millis in -1.0e9f64..-1.0e-9) {
        prop_assert_eq!(format_time(millis), "N/A");
    }

    #[test]
    fn prop_whole_time_is_printed(millis in 0u32..10_000_000) {
        prop_assert_eq!(format_time(f64::from(millis)), format!("≈{}ms", millis));
    }

    #[test]
    fn prop_mean_counts_missing_as_zero(samples in prop::collection::vec(prop::option::of(0u32..10_000_000), 1..50)) {
        let runs: Vec<RunSample> = samples.iter().copied().map(memory_run).collect();
        let sum: u64 = samples.iter().flatten().map(|v| u64::from(*v)).sum();
        let expected = (sum / samples.len() as u64) as f64;

        prop_assert_eq!(mean_of_runs(&runs, |memory| memory.med), expected);
    }

    #[test]
    fn prop_numeric_median_index(values in prop::collection::vec(0u32..100_000, 1..40)) {
        let runs: Vec<RunSample> = values.iter().copied().map(start_run).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();

        prop_assert_eq!(
            median_start_time(&runs, MedianOrdering::Numeric),
            f64::from(sorted[sorted.len() / 2])
        );
    }

    #[test]
    fn prop_lexicographic_median_is_a_sample(values in prop::collection::vec(0u32..100_000, 1..40)) {
        let runs: Vec<RunSample> = values.iter().copied().map(start_run).collect();
        let median = median_start_time(&runs, MedianOrdering::Lexicographic);

        prop_assert!(values.iter().any(|v| f64::from(*v) == median));
    }

    #[test]
    fn prop_row_has_cell_per_library(
        ids in library_ids(),
        populated in prop::collection::vec(any::<bool>(), 8),
    ) {
        let mut config = ReportConfig::new()
            .with_app("hello-world")
            .with_architecture("ubuntu-latest", "Linux");
        for id in &ids {
            config = config.with_library(id.as_str(), id.to_uppercase(), format!("https://{}.dev", id));
        }

        let mut stats = StatMap::new();
        // Always one entry so the row is emitted.
        stats.insert(ids[0].as_str(), Context::Debug, StatValue::new(0.0));
        for (id, on) in ids.iter().zip(&populated) {
            if *on {
                stats.insert(id.as_str(), Context::Release, StatValue::new(1234.0));
            }
        }

        let data = BenchmarkData::new();
        let renderer = Renderer::new(&config, Aggregator::new(&config, &data));
        let row = renderer
            .table_row("hello-world", &config.architectures[0], Metric::Memory, &stats)
            .unwrap();

        prop_assert!(row.starts_with("| ***Linux*** |"));
        prop_assert!(row.ends_with('\n'));
        prop_assert_eq!(row.matches(" |").count(), ids.len() + 1);
    }
}
