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

//! Command implementations.
//!
//! - [`generate()`]: Render the report to a file or stdout
//! - [`summary()`]: Print cell coverage per section
//! - [`generate_completion_for_command`]: Shell completion scripts

mod completion;
mod generate;
mod summary;

pub use completion::{generate_completion_for_command, installation_instructions};
pub use generate::generate;
pub use summary::summary;

use deskbench_core::ReportError;
use std::io::{self, Write};

/// Write content to stdout.
///
/// # Errors
///
/// Returns `Err` if stdout is closed or the write fails.
pub fn write_stdout(content: &str) -> Result<(), ReportError> {
    io::stdout()
        .write_all(content.as_bytes())
        .map_err(|e| ReportError::io_error("<stdout>", e))
}
