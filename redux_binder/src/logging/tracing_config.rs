/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use tracing_core::LevelFilter;

/// Configure the tracing logging for this crate. You can use [`crate::init_tracing()`]
/// to initialize the tracing system with this configuration.
///
/// Fields:
/// - `scope`: [`TracingScope`] - Global (apps) or thread local (tests).
/// - `writer`: [`TracingWriter`] - Where the log lines go.
/// - `level`: [`tracing::Level`] - The log level to use for tracing. Routing hits and
///   misses are only visible at [`tracing::Level::TRACE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    pub scope: TracingScope,
    pub writer: TracingWriter,
    pub level: tracing::Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingScope {
    Global,
    ThreadLocal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingWriter {
    Stdout,
    Stderr,
    /// Goes through the libtest capture, so output only shows up for failing tests.
    TestWriter,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            scope: TracingScope::Global,
            writer: TracingWriter::Stderr,
            level: tracing::Level::INFO,
        }
    }
}

impl TracingConfig {
    /// Thread local, captured by the test harness, and as verbose as it gets.
    #[must_use]
    pub fn new_for_tests() -> Self {
        Self {
            scope: TracingScope::ThreadLocal,
            writer: TracingWriter::TestWriter,
            level: tracing::Level::TRACE,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}
