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

use std::sync::Arc;

use crate::{Message, Namespace, ShallowMerge};

/// A reducer, as seen by a host like [`crate::Store`].
///
/// - `maybe_state` is [`None`] when the host wants the reducer to start from its own
///   initial state.
/// - Returning the same [`Arc`] that was passed in means "nothing changed".
pub trait Reducer<S, A>
where
    S: Sync + Send,
    A: Sync + Send,
{
    fn run(&self, maybe_state: Option<Arc<S>>, action: &A) -> Arc<S>;
}

pub type ReducerItem<S, A> = Box<dyn Reducer<S, A> + Send + Sync>;
pub type ReducerVec<S, A> = Vec<ReducerItem<S, A>>;

impl<S, P> Reducer<S, Message<P>> for Namespace<S, P>
where
    S: ShallowMerge + Sync + Send + 'static,
    P: Sync + Send + 'static,
{
    fn run(&self, maybe_state: Option<Arc<S>>, action: &Message<P>) -> Arc<S> {
        self.route(maybe_state, action)
    }
}

/// Reducer function.
pub type ReducerFn<S, A> = dyn Fn(Option<Arc<S>>, &A) -> Arc<S> + Sync + Send + 'static;

/// Lets a plain function or closure be used as a [`Reducer`].
#[derive(Clone)]
pub struct ReducerFnWrapper<S, A>
where
    S: Sync + Send + 'static,
    A: Sync + Send + 'static,
{
    fn_ref: Arc<ReducerFn<S, A>>,
}

impl<S, A> std::fmt::Debug for ReducerFnWrapper<S, A>
where
    S: Sync + Send + 'static,
    A: Sync + Send + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReducerFnWrapper")
    }
}

impl<S, A> ReducerFnWrapper<S, A>
where
    S: Sync + Send + 'static,
    A: Sync + Send + 'static,
{
    #[must_use]
    pub fn from(
        fn_ref: impl Fn(Option<Arc<S>>, &A) -> Arc<S> + Send + Sync + 'static,
    ) -> ReducerFnWrapper<S, A> {
        Self {
            fn_ref: Arc::new(fn_ref),
        }
    }
}

impl<S, A> Reducer<S, A> for ReducerFnWrapper<S, A>
where
    S: Sync + Send + 'static,
    A: Sync + Send + 'static,
{
    fn run(&self, maybe_state: Option<Arc<S>>, action: &A) -> Arc<S> {
        (self.fn_ref)(maybe_state, action)
    }
}
