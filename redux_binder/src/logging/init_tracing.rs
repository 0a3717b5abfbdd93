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

//! # [`init_tracing`]
//!
//! This is a convenience method to setup Tokio [`tracing_subscriber`] for the log
//! output of this crate (binding, routing, dispatching). Use the [`TracingConfig`]
//! struct to pick the output, the log level, and whether the subscriber is global or
//! thread local.

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

use super::{TracingConfig, TracingScope, TracingWriter};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Simply initialize the tracing system with the provided [`TracingConfig`]. This will
/// set either (depending on its [`TracingScope`]):
/// 1. Global default subscriber, which once set, can't be unset or changed.
///    - This is great for apps.
/// 2. Thread local subscriber, which is thread local, and you can assign different ones
///    to different threads.
///    - This is great for tests.
///
/// # Return
/// 1. If you set the [`TracingScope`] to [`TracingScope::ThreadLocal`], then this
///    function will return a [`tracing::dispatcher::DefaultGuard`]. You should drop this
///    guard when you're done with the tracing system.
/// 2. If you set the [`TracingScope`] to [`TracingScope::Global`], then this function
///    will return [`None`].
///
/// # Errors
///
/// If the scope is [`TracingScope::Global`] and a global default subscriber has
/// already been set.
pub fn init_tracing(
    tracing_config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let layers = create_layers(tracing_config);
    match tracing_config.scope {
        TracingScope::Global => {
            tracing_subscriber::registry()
                .with(layers)
                .try_init()
                .into_diagnostic()?;
            Ok(None)
        }
        TracingScope::ThreadLocal => {
            let it = tracing_subscriber::registry().with(layers).set_default();
            Ok(Some(it))
        }
    }
}

/// Returns the layers. This does not initialize the tracing system.
#[must_use]
pub fn create_layers(
    tracing_config: TracingConfig,
) -> Vec<Box<DynLayer<tracing_subscriber::Registry>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    return_it.push(Box::new(tracing_config.get_level_filter()));

    let display_layer: Box<DynLayer<tracing_subscriber::Registry>> =
        match tracing_config.writer {
            TracingWriter::Stdout => Box::new(create_fmt!().with_writer(std::io::stdout)),
            TracingWriter::Stderr => Box::new(create_fmt!().with_writer(std::io::stderr)),
            TracingWriter::TestWriter => Box::new(create_fmt!().with_test_writer()),
        };
    return_it.push(display_layer);

    return_it
}

#[cfg(test)]
mod tests {
    use std::{io::Write,
              sync::{Arc, Mutex}};

    use tracing::subscriber::set_default;
    use tracing_subscriber::fmt::SubscriberBuilder;

    use super::*;
    use crate::{Message, UpdateFnWrapper, assert_eq2, bind};

    /// Collects everything written to it, so log lines can be asserted on.
    #[derive(Clone, Default)]
    struct OutputMock {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl OutputMock {
        fn get_copy_of_buffer_as_string(&self) -> String {
            String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for OutputMock {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
    }

    fn noop_update() -> UpdateFnWrapper<serde_json::Value, ()> {
        UpdateFnWrapper::from(|_: &serde_json::Value, _: &()| serde_json::Map::new())
    }

    #[test]
    fn test_create_layers() {
        let layers = create_layers(TracingConfig::default());
        assert_eq2!(layers.len(), 2);
    }

    #[test]
    fn test_thread_local_guard_while_routing() {
        let maybe_guard = init_tracing(TracingConfig::new_for_tests()).unwrap();
        assert!(maybe_guard.is_some());

        let ns = bind("log", serde_json::json!({}), [("noop", noop_update())]);
        let state = ns.route(None, &Message::new("log_noop", ()));
        let state = ns.route(Some(state), &Message::new("other_noop", ()));
        assert_eq2!(*state, serde_json::json!({}));
    }

    #[test]
    fn test_bind_and_route_log_lines() {
        let mock_output = OutputMock::default();
        let subscriber = SubscriberBuilder::default()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(Mutex::new(mock_output.clone()))
            .finish();
        let _drop_guard = set_default(subscriber);

        let ns = bind(
            "log",
            serde_json::json!({}),
            [("noop", noop_update()), ("noop", noop_update())],
        );
        let state = ns.route(None, &Message::new("log_noop", ()));
        let _unused = ns.route(Some(state), &Message::new("other_noop", ()));

        let it = mock_output.get_copy_of_buffer_as_string();
        assert!(it.contains("WARN"));
        assert!(it.contains("duplicate update name"));
        assert!(it.contains("update_name=noop"));
        assert!(it.contains("bound namespace"));
        assert!(it.contains("routing hit"));
        assert!(it.contains("kind=log_noop"));
        assert!(it.contains("routing miss, state unchanged"));
        assert!(it.contains("kind=other_noop"));
    }
}
