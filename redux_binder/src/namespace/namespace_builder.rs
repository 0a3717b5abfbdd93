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

use std::fmt::{Debug, Formatter};

use super::{Namespace, UpdateFnWrapper, bind_with_options, try_bind};
use crate::{BindOptions, BindResult, ShallowMerge};

/// Fluent alternative to [`crate::bind`]. Closures can be passed straight to
/// [`NamespaceBuilder::add_update`] w/out wrapping them in [`UpdateFnWrapper`].
///
/// ```
/// use std::sync::Arc;
/// use r3bl_redux_binder::{NamespaceBuilder, shallow_merge_struct};
///
/// shallow_merge_struct! {
///     partial: TitlePartial,
///     #[derive(Debug, Clone, Default, PartialEq)]
///     pub struct Title {
///         pub text: String,
///     }
/// }
///
/// let ns = NamespaceBuilder::new("title", Title::default())
///     .add_update("set", |_, text: &String| TitlePartial { text: Some(text.clone()) })
///     .add_update("clear", |_, _| TitlePartial { text: Some(String::new()) })
///     .build();
///
/// let Some(message) = ns.create("set", "hello".to_string()) else { unreachable!() };
/// assert_eq!(ns.route(None, &message).text, "hello");
/// ```
pub struct NamespaceBuilder<S, P>
where
    S: ShallowMerge + 'static,
    P: 'static,
{
    namespace: String,
    initial_state: S,
    updates: Vec<(String, UpdateFnWrapper<S, P>)>,
    options: BindOptions,
}

impl<S, P> Debug for NamespaceBuilder<S, P>
where
    S: ShallowMerge + 'static,
    P: 'static,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamespaceBuilder")
            .field("namespace", &self.namespace)
            .field(
                "updates",
                &self.updates.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<S, P> NamespaceBuilder<S, P>
where
    S: ShallowMerge + 'static,
    P: 'static,
{
    #[must_use]
    pub fn new(namespace: impl Into<String>, initial_state: S) -> Self {
        Self {
            namespace: namespace.into(),
            initial_state,
            updates: vec![],
            options: BindOptions::default(),
        }
    }

    #[must_use]
    pub fn add_update(
        mut self,
        update_name: impl Into<String>,
        update_fn: impl Fn(&S, &P) -> S::Partial + Send + Sync + 'static,
    ) -> Self {
        self.updates
            .push((update_name.into(), UpdateFnWrapper::from(update_fn)));
        self
    }

    /// Same as [`NamespaceBuilder::add_update`], for update functions that are already
    /// wrapped (eg: shared between namespaces).
    #[must_use]
    pub fn add_update_wrapper(
        mut self,
        update_name: impl Into<String>,
        update_fn: UpdateFnWrapper<S, P>,
    ) -> Self {
        self.updates.push((update_name.into(), update_fn));
        self
    }

    #[must_use]
    pub fn expose_raw_updates_for_testing(mut self, expose: bool) -> Self {
        self.options.expose_raw_updates_for_testing = expose;
        self
    }

    #[must_use]
    pub fn options(mut self, options: BindOptions) -> Self {
        self.options = options;
        self
    }

    /// See [`crate::bind_with_options`].
    #[must_use]
    pub fn build(self) -> Namespace<S, P> {
        bind_with_options(self.namespace, self.initial_state, self.updates, self.options)
    }

    /// See [`crate::try_bind`].
    ///
    /// # Errors
    ///
    /// Same as [`crate::try_bind`].
    pub fn try_build(self) -> BindResult<Namespace<S, P>> {
        try_bind(self.namespace, self.initial_state, self.updates, self.options)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value, json};

    use super::*;
    use crate::{BindError, Message, assert_eq2};

    fn builder() -> NamespaceBuilder<Value, i64> {
        NamespaceBuilder::new("counter", json!({"count": 0}))
            .add_update("increment", |state: &Value, by: &i64| {
                let count = state["count"].as_i64().unwrap_or_default();
                let mut it = Map::new();
                it.insert("count".into(), json!(count + by));
                it
            })
            .add_update("reset", |_, _| {
                let mut it = Map::new();
                it.insert("count".into(), json!(0));
                it
            })
    }

    #[test]
    fn test_build() {
        let ns = builder().build();
        let state = ns.route(None, &Message::new("counter_increment", 5));
        let state = ns.route(Some(state), &Message::new("counter_increment", 2));
        assert_eq2!(*state, json!({"count": 7}));

        let state = ns.route(Some(state), &Message::new("counter_reset", 0));
        assert_eq2!(*state, json!({"count": 0}));
        assert!(ns.raw_update("increment").is_none());
    }

    #[test]
    fn test_add_update_wrapper_shares_one_update() {
        let set_label = UpdateFnWrapper::from(|_: &Value, label: &Value| {
            let mut it = Map::new();
            it.insert("label".into(), label.clone());
            it
        });

        let ns_a = NamespaceBuilder::new("a", json!({}))
            .add_update_wrapper("setLabel", set_label.clone())
            .build();
        let ns_b = NamespaceBuilder::new("b", json!({"count": 1}))
            .add_update_wrapper("setLabel", set_label)
            .build();

        let state_a = ns_a.route(None, &Message::new("a_setLabel", json!("x")));
        let state_b = ns_b.route(None, &Message::new("b_setLabel", json!("y")));
        assert_eq2!(*state_a, json!({"label": "x"}));
        assert_eq2!(*state_b, json!({"count": 1, "label": "y"}));
    }

    #[test]
    fn test_expose_raw_updates() {
        let ns = builder().expose_raw_updates_for_testing(true).build();
        let mut keys = ns.raw_update_keys().collect::<Vec<_>>();
        keys.sort_unstable();
        assert_eq2!(keys, vec!["_increment", "_reset"]);
    }

    #[test]
    fn test_try_build_reports_duplicates() {
        let result = builder()
            .add_update("reset", |_, _| Map::new())
            .try_build();
        assert_eq2!(
            result.unwrap_err(),
            BindError::DuplicateUpdateName {
                namespace: "counter".into(),
                name: "reset".into(),
            }
        );
    }

    #[test]
    fn test_debug_lists_update_names() {
        let it = format!("{:?}", builder());
        assert!(it.contains("increment"));
        assert!(it.contains("reset"));
    }
}
