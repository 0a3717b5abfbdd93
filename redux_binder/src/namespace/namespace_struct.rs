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

use std::{collections::HashMap,
          fmt::{Debug, Formatter},
          sync::Arc};

use super::{ActionCreator, Message, UpdateFnWrapper};
use crate::ShallowMerge;

/// Routing table, from fully qualified kind to its update function.
pub type RoutingTable<S, P> = HashMap<String, UpdateFnWrapper<S, P>>;

/// Prefix for the keys of the raw update functions kept for tests.
pub const RAW_UPDATE_KEY_PREFIX: &str = "_";

/// Make the key that a raw update function is stored under, eg: `"_increment"`.
#[must_use]
pub fn make_raw_update_key(update_name: &str) -> String {
    format!("{RAW_UPDATE_KEY_PREFIX}{update_name}")
}

/// The result of binding a namespace (see [`crate::bind`]). It holds:
/// 1. The namespace tag, which hosts use as the key of this slice of state when they
///    compose many namespaces, and as a label in dev tools.
/// 2. One [`ActionCreator`] per update name.
/// 3. A private routing table used by [`Namespace::route`].
/// 4. Optionally, the raw update functions (only when
///    [`crate::BindOptions::expose_raw_updates_for_testing`] is set).
///
/// Nothing in here changes after binding. The state itself is never held, except for
/// the initial state, which is used when [`Namespace::route`] is called w/out one.
pub struct Namespace<S, P>
where
    S: ShallowMerge + 'static,
    P: 'static,
{
    pub(crate) namespace: String,
    pub(crate) initial_state: Arc<S>,
    pub(crate) creators: HashMap<String, ActionCreator<P>>,
    pub(crate) routing_table: RoutingTable<S, P>,
    pub(crate) maybe_raw_updates: Option<HashMap<String, UpdateFnWrapper<S, P>>>,
}

impl<S, P> Debug for Namespace<S, P>
where
    S: ShallowMerge + 'static,
    P: 'static,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut kinds = self.kinds().collect::<Vec<_>>();
        kinds.sort_unstable();
        f.debug_struct("Namespace")
            .field("namespace", &self.namespace)
            .field("kinds", &kinds)
            .field("raw_updates_exposed", &self.maybe_raw_updates.is_some())
            .finish_non_exhaustive()
    }
}

// Accessors.
impl<S, P> Namespace<S, P>
where
    S: ShallowMerge + 'static,
    P: 'static,
{
    #[must_use]
    pub fn namespace(&self) -> &str { &self.namespace }

    #[must_use]
    pub fn initial_state(&self) -> Arc<S> { self.initial_state.clone() }

    #[must_use]
    pub fn creator(&self, update_name: &str) -> Option<&ActionCreator<P>> {
        self.creators.get(update_name)
    }

    /// Shortcut for `self.creator(update_name).map(|it| it.create(payload))`.
    #[must_use]
    pub fn create(&self, update_name: &str, payload: P) -> Option<Message<P>> {
        self.creator(update_name).map(|it| it.create(payload))
    }

    /// Short update names, in no particular order.
    pub fn creator_names(&self) -> impl Iterator<Item = &str> {
        self.creators.keys().map(String::as_str)
    }

    /// Fully qualified kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.routing_table.keys().map(String::as_str)
    }

    #[must_use]
    pub fn handles(&self, kind: &str) -> bool { self.routing_table.contains_key(kind) }

    /// The raw update function for `update_name`, so it can be called directly in tests.
    /// This is [`None`] unless the namespace was bound w/
    /// [`crate::BindOptions::expose_raw_updates_for_testing`].
    #[must_use]
    pub fn raw_update(&self, update_name: &str) -> Option<&UpdateFnWrapper<S, P>> {
        self.maybe_raw_updates
            .as_ref()?
            .get(&make_raw_update_key(update_name))
    }

    /// Keys of the exposed raw update functions, eg: `"_increment"`. Empty unless the
    /// raw updates are exposed.
    pub fn raw_update_keys(&self) -> impl Iterator<Item = &str> {
        self.maybe_raw_updates
            .iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }
}

// Routing.
impl<S, P> Namespace<S, P>
where
    S: ShallowMerge + 'static,
    P: 'static,
{
    /// The reducer for this namespace.
    ///
    /// - `maybe_state` of [`None`] means "start from the initial state".
    /// - A message whose kind this namespace doesn't handle returns the state that was
    ///   passed in (the very same [`Arc`]), since every other namespace's messages flow
    ///   through here too.
    /// - Otherwise the update function runs, and its partial is shallow merged into a
    ///   newly allocated state. This happens even if nothing actually changed.
    ///
    /// Neither the passed in state nor the partial are mutated. A panic in the update
    /// function propagates to the caller.
    #[must_use]
    pub fn route(&self, maybe_state: Option<Arc<S>>, message: &Message<P>) -> Arc<S> {
        let state = maybe_state.unwrap_or_else(|| self.initial_state.clone());

        let Some(update_fn) = self.routing_table.get(&message.kind) else {
            tracing::trace!(
                namespace = %self.namespace,
                kind = %message.kind,
                "routing miss, state unchanged"
            );
            return state;
        };

        tracing::trace!(namespace = %self.namespace, kind = %message.kind, "routing hit");
        let partial = update_fn.invoke(&state, &message.payload);
        Arc::new(state.shallow_merge(partial))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value, json};

    use super::*;
    use crate::{BindOptions, assert_eq2, assert_not_same_arc, assert_same_arc,
                bind, bind_with_options};

    fn set_a() -> UpdateFnWrapper<Value, Value> {
        UpdateFnWrapper::from(|_state: &Value, payload: &Value| {
            let mut it = Map::new();
            it.insert("a".into(), payload.clone());
            it
        })
    }

    fn make_ns() -> Namespace<Value, Value> {
        bind("ns", json!({"a": 0, "b": 0}), [("setA", set_a())])
    }

    #[test]
    fn test_shallow_merge_makes_a_new_state() {
        let ns = make_ns();
        let state = Arc::new(json!({"a": 1, "b": 2}));
        let Some(message) = ns.create("setA", json!(99)) else {
            panic!("setA creator is missing");
        };
        let new_state = ns.route(Some(state.clone()), &message);
        assert_eq2!(*new_state, json!({"a": 99, "b": 2}));
        assert_not_same_arc!(new_state, state);
        assert_eq2!(*state, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_equal_values_still_allocate() {
        let ns = make_ns();
        let state = Arc::new(json!({"a": 1, "b": 2}));
        let message = Message::new("ns_setA", json!(1));
        let new_state = ns.route(Some(state.clone()), &message);
        assert_eq2!(new_state, state);
        assert_not_same_arc!(new_state, state);
    }

    #[test]
    fn test_miss_returns_same_arc() {
        let ns = make_ns();
        let state = Arc::new(json!({"a": 1}));
        for kind in ["", "setA", "other_setA", "ns_setB", "ns_seta", "NS_setA"] {
            let new_state = ns.route(Some(state.clone()), &Message::new(kind, json!(5)));
            assert_same_arc!(new_state, state);
        }
    }

    #[test]
    fn test_none_uses_initial_state() {
        let ns = make_ns();
        let new_state = ns.route(None, &Message::new("ns_setA", json!(3)));
        assert_eq2!(*new_state, json!({"a": 3, "b": 0}));

        let miss = ns.route(None, &Message::default());
        assert_same_arc!(miss, ns.initial_state());
    }

    #[test]
    fn test_unaffected_nested_values_are_untouched() {
        let ns = make_ns();
        let state = Arc::new(json!({"a": 1, "nested": {"x": [1, 2]}}));
        let new_state = ns.route(Some(state.clone()), &Message::new("ns_setA", json!(2)));
        assert_eq2!(new_state["nested"], state["nested"]);
        assert_eq2!(*state, json!({"a": 1, "nested": {"x": [1, 2]}}));
    }

    #[test]
    fn test_accessors() {
        let ns = make_ns();
        assert_eq2!(ns.namespace(), "ns");
        assert_eq2!(ns.creator_names().collect::<Vec<_>>(), vec!["setA"]);
        assert_eq2!(ns.kinds().collect::<Vec<_>>(), vec!["ns_setA"]);
        assert!(ns.handles("ns_setA"));
        assert!(!ns.handles("setA"));
        assert!(ns.creator("missing").is_none());
        assert!(ns.create("missing", Value::Null).is_none());
    }

    #[test]
    fn test_raw_updates_hidden_by_default() {
        let ns = make_ns();
        assert!(ns.raw_update("setA").is_none());
        assert_eq2!(ns.raw_update_keys().count(), 0);
    }

    #[test]
    fn test_raw_updates_exposed_for_testing() {
        let ns = bind_with_options(
            "ns",
            json!({}),
            [("setA", set_a())],
            BindOptions::new_for_testing(),
        );
        assert_eq2!(ns.raw_update_keys().collect::<Vec<_>>(), vec!["_setA"]);

        let Some(raw) = ns.raw_update("setA") else {
            panic!("raw setA is missing");
        };
        let partial = raw.invoke(&json!({}), &json!("x"));
        assert_eq2!(Value::Object(partial), json!({"a": "x"}));
    }

    #[test]
    fn test_debug_lists_kinds() {
        let ns = make_ns();
        let it = format!("{ns:?}");
        assert!(it.contains("ns_setA"));
        assert!(it.contains("raw_updates_exposed: false"));
    }
}
