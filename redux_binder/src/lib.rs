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

//! This crate removes the boilerplate of writing Redux style reducers and action
//! creators by hand. You give it:
//!  1. A namespace, eg: `"counter"`.
//!  2. An initial state.
//!  3. A list of short update names, each paired with a pure update function that
//!     returns a *partial* state.
//!
//! And it gives you back a [`Namespace`] which has:
//!  1. One [`ActionCreator`] per update name, which makes [`Message`]s whose `kind` is
//!     `"<namespace>_<name>"`.
//!  2. One routing function, [`Namespace::route`], that finds the update function for
//!     an incoming [`Message`] and shallow merges its partial result into the current
//!     state. Messages that belong to some other namespace are ignored, and the exact
//!     same [`std::sync::Arc`] is handed back, so hosts can detect "no change" by
//!     reference.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use r3bl_redux_binder::{bind, shallow_merge_struct, UpdateFnWrapper};
//!
//! shallow_merge_struct! {
//!     partial: CounterPartial,
//!     #[derive(Debug, Clone, Default, PartialEq)]
//!     pub struct Counter {
//!         pub count: i64,
//!     }
//! }
//!
//! let counter = bind(
//!     "counter",
//!     Counter { count: 0 },
//!     [(
//!         "increment",
//!         UpdateFnWrapper::from(|state: &Counter, by: &i64| CounterPartial {
//!             count: Some(state.count + by),
//!         }),
//!     )],
//! );
//!
//! let Some(message) = counter.create("increment", 5) else { unreachable!() };
//! assert_eq!(message.kind, "counter_increment");
//!
//! let new_state = counter.route(Some(Arc::new(Counter { count: 10 })), &message);
//! assert_eq!(new_state.count, 15);
//! ```
//!
//! The [`Store`] in this crate is a small host that drives one or more reducers and
//! notifies [`AsyncSubscriber`]s when the state reference changes. You can also plug a
//! [`Namespace`] into your own host via the [`Reducer`] trait.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod config;
pub mod decl_macros;
pub mod error;
pub mod logging;
pub mod merge;
pub mod namespace;
pub mod store;

// Re-export.
pub use config::*;
pub use error::*;
pub use logging::*;
pub use merge::*;
pub use namespace::*;
pub use store::*;
