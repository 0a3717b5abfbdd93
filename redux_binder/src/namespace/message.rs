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

use serde::{Deserialize, Serialize};

/// Separator between the namespace and the update name in a [`Message::kind`].
pub const KIND_SEPARATOR: &str = "_";

/// Make the fully qualified kind for an update, eg: `("counter", "increment")` becomes
/// `"counter_increment"`. Both parts are used verbatim.
#[must_use]
pub fn make_kind(namespace: &str, update_name: &str) -> String {
    format!("{namespace}{KIND_SEPARATOR}{update_name}")
}

/// The action that is dispatched to a [`crate::Namespace`]. It is produced by an
/// [`crate::ActionCreator`] and consumed by [`crate::Namespace::route`].
///
/// On the wire it looks like `{ "kind": "counter_increment", "payload": 5 }`.
///
/// The [`Default`] message has an empty `kind`, which no namespace handles. Hosts use
/// it to ask a reducer for its initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message<P> {
    pub kind: String,
    pub payload: P,
}

impl<P> Message<P> {
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: P) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}
