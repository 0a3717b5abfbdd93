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

use serde_json::{Map, Value};

/// A state record that can have a partial record merged into it, one level deep.
///
/// - Keys (fields) that are present in the partial overwrite the ones in `self`.
/// - Keys that are absent from the partial are carried over as is.
/// - Nested values are replaced wholesale, never merged recursively.
///
/// The result is always a new value; `self` is never mutated.
///
/// There are two ways to get an implementation:
/// 1. Dynamic records: [`serde_json::Map`] and [`serde_json::Value`] are implemented
///    here, with a [`serde_json::Map`] as the partial.
/// 2. Structs: use the [`crate::shallow_merge_struct!`] macro, which generates a partial
///    struct where every field is wrapped in an [`Option`].
pub trait ShallowMerge {
    /// The partial record produced by an update function. Its [`Default`] value must
    /// mean "change nothing".
    type Partial: Default;

    #[must_use]
    fn shallow_merge(&self, partial: Self::Partial) -> Self;
}

impl ShallowMerge for Map<String, Value> {
    type Partial = Map<String, Value>;

    fn shallow_merge(&self, partial: Self::Partial) -> Self {
        let mut it = self.clone();
        for (key, value) in partial {
            it.insert(key, value);
        }
        it
    }
}

/// A non object base behaves like an empty object, so merging into `null` or a number
/// produces an object with just the keys of the partial.
impl ShallowMerge for Value {
    type Partial = Map<String, Value>;

    fn shallow_merge(&self, partial: Self::Partial) -> Self {
        match self {
            Value::Object(map) => Value::Object(map.shallow_merge(partial)),
            _ => Value::Object(partial),
        }
    }
}
