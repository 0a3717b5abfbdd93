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

use crate::ShallowMerge;

/// Update function. Takes the current state and the payload of a [`crate::Message`],
/// and returns the partial state that gets shallow merged into the current state. It
/// must be pure: no mutation of the state, no side effects.
pub type UpdateFn<S, P> =
    dyn Fn(&S, &P) -> <S as ShallowMerge>::Partial + Sync + Send + 'static;

/// Cheaply clonable wrapper around an [`UpdateFn`]. The same function is shared by the
/// routing table, and the raw update functions exposed for testing.
pub struct UpdateFnWrapper<S, P>
where
    S: ShallowMerge + 'static,
    P: 'static,
{
    fn_ref: Arc<UpdateFn<S, P>>,
}

impl<S, P> Clone for UpdateFnWrapper<S, P>
where
    S: ShallowMerge + 'static,
    P: 'static,
{
    fn clone(&self) -> Self {
        Self {
            fn_ref: self.fn_ref.clone(),
        }
    }
}

impl<S, P> Debug for UpdateFnWrapper<S, P>
where
    S: ShallowMerge + 'static,
    P: 'static,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UpdateFnWrapper")
    }
}

impl<S, P> UpdateFnWrapper<S, P>
where
    S: ShallowMerge + 'static,
    P: 'static,
{
    #[must_use]
    pub fn from(
        fn_ref: impl Fn(&S, &P) -> S::Partial + Send + Sync + 'static,
    ) -> UpdateFnWrapper<S, P> {
        Self {
            fn_ref: Arc::new(fn_ref),
        }
    }

    #[must_use]
    pub fn get(&self) -> Arc<UpdateFn<S, P>> { self.fn_ref.clone() }

    /// Run the update function. Panics in the update function are not caught.
    #[must_use]
    pub fn invoke(&self, state: &S, payload: &P) -> S::Partial {
        (self.fn_ref)(state, payload)
    }
}
