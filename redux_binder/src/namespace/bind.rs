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

use std::{collections::{HashMap, HashSet},
          sync::Arc};

use super::{ActionCreator, Namespace, RoutingTable, UpdateFnWrapper, make_kind,
            make_raw_update_key};
use crate::{BindError, BindOptions, BindResult, ShallowMerge};

/// Bind a namespace, its initial state, and its update functions into a [`Namespace`].
/// Raw update functions are not exposed; use [`bind_with_options`] for that.
///
/// No validation is done. The namespace is used verbatim as a prefix, and if the same
/// update name shows up twice, the last one wins (and a warning is logged). Use
/// [`try_bind`] if you want these cases reported as errors.
pub fn bind<S, P, K>(
    namespace: impl Into<String>,
    initial_state: S,
    updates: impl IntoIterator<Item = (K, UpdateFnWrapper<S, P>)>,
) -> Namespace<S, P>
where
    S: ShallowMerge + 'static,
    P: 'static,
    K: Into<String>,
{
    bind_with_options(namespace, initial_state, updates, BindOptions::default())
}

/// Same as [`bind`], but the [`BindOptions`] are explicit.
pub fn bind_with_options<S, P, K>(
    namespace: impl Into<String>,
    initial_state: S,
    updates: impl IntoIterator<Item = (K, UpdateFnWrapper<S, P>)>,
    options: BindOptions,
) -> Namespace<S, P>
where
    S: ShallowMerge + 'static,
    P: 'static,
    K: Into<String>,
{
    let namespace = namespace.into();

    let mut creators: HashMap<String, ActionCreator<P>> = HashMap::new();
    let mut routing_table: RoutingTable<S, P> = HashMap::new();
    let mut maybe_raw_updates: Option<HashMap<String, UpdateFnWrapper<S, P>>> = options
        .expose_raw_updates_for_testing
        .then(HashMap::new);

    for (update_name, update_fn) in updates {
        let update_name: String = update_name.into();

        if creators.contains_key(&update_name) {
            tracing::warn!(
                namespace = %namespace,
                update_name = %update_name,
                "duplicate update name, the last one registered wins"
            );
        }

        if let Some(raw_updates) = maybe_raw_updates.as_mut() {
            raw_updates.insert(make_raw_update_key(&update_name), update_fn.clone());
        }
        routing_table.insert(make_kind(&namespace, &update_name), update_fn);
        creators.insert(
            update_name.clone(),
            ActionCreator::new(&namespace, &update_name),
        );
    }

    tracing::debug!(
        namespace = %namespace,
        update_count = creators.len(),
        raw_updates_exposed = maybe_raw_updates.is_some(),
        "bound namespace"
    );

    Namespace {
        namespace,
        initial_state: Arc::new(initial_state),
        creators,
        routing_table,
        maybe_raw_updates,
    }
}

/// Strict version of [`bind_with_options`].
///
/// # Errors
///
/// - [`BindError::EmptyNamespace`] if `namespace` is empty.
/// - [`BindError::EmptyUpdateName`] if any update name is empty.
/// - [`BindError::DuplicateUpdateName`] if an update name shows up more than once.
pub fn try_bind<S, P, K>(
    namespace: impl Into<String>,
    initial_state: S,
    updates: impl IntoIterator<Item = (K, UpdateFnWrapper<S, P>)>,
    options: BindOptions,
) -> BindResult<Namespace<S, P>>
where
    S: ShallowMerge + 'static,
    P: 'static,
    K: Into<String>,
{
    let namespace = namespace.into();
    if namespace.is_empty() {
        return Err(BindError::EmptyNamespace);
    }

    let updates = updates
        .into_iter()
        .map(|(name, update_fn)| (name.into(), update_fn))
        .collect::<Vec<(String, UpdateFnWrapper<S, P>)>>();

    let mut seen = HashSet::new();
    for (name, _) in &updates {
        if name.is_empty() {
            return Err(BindError::EmptyUpdateName { namespace });
        }
        if !seen.insert(name.as_str()) {
            return Err(BindError::DuplicateUpdateName {
                namespace,
                name: name.clone(),
            });
        }
    }

    Ok(bind_with_options(namespace, initial_state, updates, options))
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value, json};

    use super::*;
    use crate::{Message, assert_eq2};

    fn set_key(key: &'static str) -> UpdateFnWrapper<Value, Value> {
        UpdateFnWrapper::from(move |_state: &Value, payload: &Value| {
            let mut it = Map::new();
            it.insert(key.into(), payload.clone());
            it
        })
    }

    #[test]
    fn test_every_update_gets_a_creator_and_a_route() {
        let ns = bind(
            "todos",
            json!({}),
            [("setTitle", set_key("title")), ("setDone", set_key("done"))],
        );

        let mut names = ns.creator_names().collect::<Vec<_>>();
        names.sort_unstable();
        assert_eq2!(names, vec!["setDone", "setTitle"]);

        for name in names {
            let Some(creator) = ns.creator(name) else {
                panic!("creator for {name} is missing");
            };
            assert_eq2!(creator.kind(), make_kind("todos", name));
            assert!(ns.handles(creator.kind()));
        }
    }

    #[test]
    fn test_empty_updates() {
        let ns = bind::<Value, Value, String>("empty", json!({"x": 1}), []);
        assert_eq2!(ns.creator_names().count(), 0);
        let state = ns.route(None, &Message::new("empty_x", json!(1)));
        assert_eq2!(*state, json!({"x": 1}));
    }

    #[test]
    fn test_duplicate_name_last_one_wins() {
        let ns = bind(
            "ns",
            json!({}),
            [("set", set_key("first")), ("set", set_key("second"))],
        );
        assert_eq2!(ns.kinds().count(), 1);
        let state = ns.route(None, &Message::new("ns_set", json!(1)));
        assert_eq2!(*state, json!({"second": 1}));
    }

    #[test]
    fn test_try_bind_ok() {
        let result = try_bind(
            "ns",
            json!({}),
            [("a", set_key("a")), ("b", set_key("b"))],
            BindOptions::default(),
        );
        let Ok(ns) = result else {
            panic!("expected Ok");
        };
        assert_eq2!(ns.kinds().count(), 2);
    }

    #[test]
    fn test_try_bind_errors() {
        let result = try_bind("", json!({}), [("a", set_key("a"))], BindOptions::default());
        assert_eq2!(result.unwrap_err(), BindError::EmptyNamespace);

        let result = try_bind("ns", json!({}), [("", set_key("a"))], BindOptions::default());
        assert_eq2!(
            result.unwrap_err(),
            BindError::EmptyUpdateName {
                namespace: "ns".into()
            }
        );

        let result = try_bind(
            "ns",
            json!({}),
            [("a", set_key("a")), ("a", set_key("b"))],
            BindOptions::default(),
        );
        assert_eq2!(
            result.unwrap_err(),
            BindError::DuplicateUpdateName {
                namespace: "ns".into(),
                name: "a".into()
            }
        );
    }
}
