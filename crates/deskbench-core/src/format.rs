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

//! Value formatters for report cells.
//!
//! Numbers are printed with `f64`'s `Display`, which drops the fractional
//! part of whole values (`42.0` prints as `42`).

const MEMORY_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Formats a byte count with the largest decimal unit keeping the value at
/// or below 1000, truncated to an integer.
///
/// Values above 1000 GB stay in GB.
///
/// # Examples
///
/// ```
/// use deskbench_core::format::format_memory;
///
/// assert_eq!(format_memory(999.0), "≈999B");
/// assert_eq!(format_memory(1500.0), "≈1KB");
/// assert_eq!(format_memory(2_500_000.0), "≈2MB");
/// ```
pub fn format_memory(bytes: f64) -> String {
    let mut value = bytes;
    let mut unit = 0;

    while value > 1000.0 && unit < MEMORY_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    format!("≈{}{}", value.floor(), MEMORY_UNITS[unit])
}

/// Formats a duration in milliseconds. Negative values mean the
/// measurement failed and print as `N/A`.
///
/// # Examples
///
/// ```
/// use deskbench_core::format::format_time;
///
/// assert_eq!(format_time(-1.0), "N/A");
/// assert_eq!(format_time(42.0), "≈42ms");
/// ```
pub fn format_time(millis: f64) -> String {
    if millis < 0.0 {
        return "N/A".to_string();
    }

    format!("≈{}ms", millis)
}

/// Formats a count in thousands with one decimal, e.g. `12345` as `12.3k`
/// and `12000` as `12k`.
pub fn format_thousands(count: u64) -> String {
    let tenths = round_half_up(count as f64 / 100.0);
    format!("{}k", tenths / 10.0)
}

/// Rounds to the nearest integer, with ties going toward positive infinity.
///
/// This differs from [`f64::round`] for negative ties: `-2.5` rounds to `-2`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
