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
          marker::PhantomData};

use super::{Message, make_kind};

/// Makes [`Message`]s for one update of a [`crate::Namespace`]. The kind is computed
/// once, when the namespace is bound.
pub struct ActionCreator<P> {
    kind: String,
    _payload: PhantomData<fn(P)>,
}

impl<P> Debug for ActionCreator<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionCreator").field("kind", &self.kind).finish()
    }
}

impl<P> Clone for ActionCreator<P> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            _payload: PhantomData,
        }
    }
}

impl<P> ActionCreator<P> {
    #[must_use]
    pub fn new(namespace: &str, update_name: &str) -> Self {
        Self {
            kind: make_kind(namespace, update_name),
            _payload: PhantomData,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &str { &self.kind }

    /// The payload is passed through as is.
    #[must_use]
    pub fn create(&self, payload: P) -> Message<P> { Message::new(self.kind.clone(), payload) }
}
