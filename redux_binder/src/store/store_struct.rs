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

use std::{fmt::{Debug, Formatter},
          sync::Arc};

use super::{AsyncSubscriber, AsyncSubscriberVec, Reducer, ReducerVec};

/// Small Redux style store, that hosts one or more reducers (eg: [`crate::Namespace`]s
/// that share the same state and message types).
///
/// 1. Reducers run in sequence, each one gets the state produced by the one before it.
/// 2. Change detection is by reference. If every reducer hands back the same [`Arc`]
///    then nothing changed, history isn't updated, and subscribers don't run.
/// 3. Subscribers run concurrently (cooperatively on the current task).
///
/// `dispatch_action` takes `&mut self`, so writes to the state are serialized by the
/// borrow checker. Wrap the store in a lock if it has to be shared.
pub struct Store<S, A>
where
    S: Sync + Send,
    A: Sync + Send,
{
    state: Arc<S>,
    history: Vec<Arc<S>>,
    reducer_vec: ReducerVec<S, A>,
    subscriber_vec: AsyncSubscriberVec<S>,
}

impl<S, A> Debug for Store<S, A>
where
    S: Debug + Sync + Send,
    A: Sync + Send,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("history_len", &self.history.len())
            .field("reducer_count", &self.reducer_vec.len())
            .field("subscriber_count", &self.subscriber_vec.len())
            .finish()
    }
}

// Constructors.
impl<S, A> Store<S, A>
where
    S: Sync + Send,
    A: Sync + Send,
{
    #[must_use]
    pub fn new(initial_state: impl Into<Arc<S>>) -> Self {
        Self {
            state: initial_state.into(),
            history: vec![],
            reducer_vec: vec![],
            subscriber_vec: vec![],
        }
    }

    /// Ask `reducer` for its initial state, by running it once w/ no state and the
    /// [`Default`] action (which no reducer should handle). Then add it to the store.
    #[must_use]
    pub fn from_reducer(reducer: impl Reducer<S, A> + Send + Sync + 'static) -> Self
    where
        A: Default,
    {
        let initial_state = reducer.run(None, &A::default());
        let mut it = Self::new(initial_state);
        it.add_reducer(Box::new(reducer));
        it
    }
}

// Handle subscriber and reducer management.
impl<S, A> Store<S, A>
where
    S: Sync + Send,
    A: Sync + Send,
{
    pub fn add_subscriber(
        &mut self,
        subscriber_fn: Box<dyn AsyncSubscriber<S> + Send + Sync>,
    ) -> &mut Store<S, A> {
        self.subscriber_vec.push(subscriber_fn);
        self
    }

    pub fn clear_subscribers(&mut self) -> &mut Store<S, A> {
        self.subscriber_vec.clear();
        self
    }

    pub fn add_reducer(
        &mut self,
        reducer_fn: Box<dyn Reducer<S, A> + Send + Sync>,
    ) -> &mut Store<S, A> {
        self.reducer_vec.push(reducer_fn);
        self
    }

    pub fn clear_reducers(&mut self) -> &mut Store<S, A> {
        self.reducer_vec.clear();
        self
    }
}

// Handle dispatch & history.
impl<S, A> Store<S, A>
where
    S: Sync + Send,
    A: Sync + Send,
{
    #[must_use]
    pub fn get_state(&self) -> Arc<S> { self.state.clone() }

    #[must_use]
    pub fn get_history(&self) -> Vec<Arc<S>> { self.history.clone() }

    /// Returns `true` if the state reference changed.
    pub async fn dispatch_action(&mut self, action: A) -> bool {
        let has_state_changed = self.run_reducers(&action);
        if has_state_changed {
            self.history.push(self.state.clone());
            self.run_subscribers().await;
        }
        tracing::debug!(
            has_state_changed,
            history_len = self.history.len(),
            "dispatched action"
        );
        has_state_changed
    }

    /// Run these in sequence.
    fn run_reducers(&mut self, action: &A) -> bool {
        let previous_state = self.state.clone();
        for reducer in &self.reducer_vec {
            self.state = reducer.run(Some(self.state.clone()), action);
        }
        !Arc::ptr_eq(&previous_state, &self.state)
    }

    /// Run these concurrently.
    async fn run_subscribers(&self) {
        let vec_fut = self
            .subscriber_vec
            .iter()
            .map(|subscriber| subscriber.run(self.state.clone()));
        futures::future::join_all(vec_fut).await;
    }
}
