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

/// Wrapper for [`pretty_assertions::assert_eq!`] macro, so that tests get a colorized
/// diff of the left and right states when they don't match.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Assert that two [`std::sync::Arc`]s point to the same allocation. This is how a
/// routing miss is detected, since the snapshot must come back untouched.
///
/// ```
/// use std::sync::Arc;
/// use r3bl_redux_binder::assert_same_arc;
///
/// let it = Arc::new(1);
/// let same = it.clone();
/// assert_same_arc!(it, same);
/// ```
#[macro_export]
macro_rules! assert_same_arc {
    ($left:expr, $right:expr $(,)?) => {
        assert!(
            std::sync::Arc::ptr_eq(&$left, &$right),
            "expected `{}` and `{}` to be the same Arc",
            stringify!($left),
            stringify!($right)
        )
    };
}

/// Opposite of [`assert_same_arc!`].
#[macro_export]
macro_rules! assert_not_same_arc {
    ($left:expr, $right:expr $(,)?) => {
        assert!(
            !std::sync::Arc::ptr_eq(&$left, &$right),
            "expected `{}` and `{}` to be different Arcs",
            stringify!($left),
            stringify!($right)
        )
    };
}
