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

/// Name of the env var that [`BindOptions::from_env`] reads.
pub const ENV_VAR_REDUX_BINDER_ENV: &str = "REDUX_BINDER_ENV";

/// Value of [`ENV_VAR_REDUX_BINDER_ENV`] that turns on the test only options.
pub const ENV_VALUE_TEST: &str = "test";

/// Options that control what a [`crate::Namespace`] exposes.
///
/// Binding never looks at the environment on its own. If you want the old "expose raw
/// update functions when running tests" behavior, pass [`BindOptions::from_env`]
/// explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindOptions {
    /// Keep the raw update functions around (keyed by `"_<name>"`), so they can be
    /// called directly from tests, without making a [`crate::Message`] and routing it.
    /// See [`crate::Namespace::raw_update`].
    pub expose_raw_updates_for_testing: bool,
}

impl BindOptions {
    #[must_use]
    pub fn new_for_testing() -> Self {
        Self {
            expose_raw_updates_for_testing: true,
        }
    }

    /// Read [`ENV_VAR_REDUX_BINDER_ENV`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(ENV_VAR_REDUX_BINDER_ENV).ok().as_deref())
    }

    /// `Some("test")` (any case, surrounding whitespace ignored) turns on
    /// [`BindOptions::expose_raw_updates_for_testing`], anything else turns it off.
    #[must_use]
    pub fn from_env_value(maybe_value: Option<&str>) -> Self {
        let expose_raw_updates_for_testing = maybe_value
            .is_some_and(|value| value.trim().eq_ignore_ascii_case(ENV_VALUE_TEST));
        Self {
            expose_raw_updates_for_testing,
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_hides_raw_updates() {
        assert!(!BindOptions::default().expose_raw_updates_for_testing);
        assert!(BindOptions::new_for_testing().expose_raw_updates_for_testing);
    }

    #[test]
    fn test_from_env_value() {
        assert_eq2!(BindOptions::from_env_value(None), BindOptions::default());
        assert_eq2!(
            BindOptions::from_env_value(Some("production")),
            BindOptions::default()
        );
        assert_eq2!(
            BindOptions::from_env_value(Some(" TEST ")),
            BindOptions::new_for_testing()
        );
    }

    #[serial]
    #[test]
    fn test_from_env() {
        // SAFETY: `#[serial]` keeps other tests that touch the env from running
        // at the same time.
        unsafe { std::env::set_var(ENV_VAR_REDUX_BINDER_ENV, "test") };
        assert_eq2!(BindOptions::from_env(), BindOptions::new_for_testing());

        unsafe { std::env::remove_var(ENV_VAR_REDUX_BINDER_ENV) };
        assert_eq2!(BindOptions::from_env(), BindOptions::default());
    }
}
