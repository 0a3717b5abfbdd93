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

/// Declare a state struct along with its partial struct, and implement
/// [`crate::ShallowMerge`] for it. Every field of the partial struct is an [`Option`] of
/// the field in the state struct; `Some` overwrites, `None` keeps the old value.
///
/// All the field types must implement [`Clone`], [`std::fmt::Debug`], and
/// [`PartialEq`], since the partial struct derives these.
///
/// Field attributes (doc comments, `#[serde(..)]`, etc) are kept on the state struct
/// only. The partial struct gets none of them.
///
/// # Example
///
/// ```
/// use r3bl_redux_binder::{shallow_merge_struct, ShallowMerge};
///
/// shallow_merge_struct! {
///     partial: TodoPartial,
///     #[derive(Debug, Clone, Default, PartialEq)]
///     pub struct Todo {
///         pub title: String,
///         pub done: bool,
///     }
/// }
///
/// let todo = Todo { title: "write docs".into(), done: false };
/// let done = todo.shallow_merge(TodoPartial { done: Some(true), ..Default::default() });
/// assert_eq!(done, Todo { title: "write docs".into(), done: true });
/// ```
#[macro_export]
macro_rules! shallow_merge_struct {
    (
        partial: $partial:ident,
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty
            ),*
        }

        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $partial {
            $($field_vis $field: Option<$ty>),*
        }

        impl $crate::ShallowMerge for $name {
            type Partial = $partial;

            fn shallow_merge(&self, partial: Self::Partial) -> Self {
                Self {
                    $($field: match partial.$field {
                        Some(it) => it,
                        None => self.$field.clone(),
                    }),*
                }
            }
        }
    };
}
