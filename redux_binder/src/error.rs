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

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias for results of [`crate::try_bind`] and
/// [`crate::NamespaceBuilder::try_build`]. Since [`BindError`] implements
/// [`miette::Diagnostic`], it converts into a [`miette::Report`] with `?`.
pub type BindResult<T> = Result<T, BindError>;

/// Errors reported by strict binding. The lenient [`crate::bind`] never returns these,
/// it takes its input as is.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("📛 Namespace is empty")]
    #[diagnostic(
        code(redux_binder::empty_namespace),
        help("Every message kind is prefixed w/ the namespace, so it can't be empty")
    )]
    EmptyNamespace,

    #[error("📛 Update name is empty in namespace: {namespace}")]
    #[diagnostic(
        code(redux_binder::empty_update_name),
        help("Give each update function a short non empty name, eg: `increment`")
    )]
    EmptyUpdateName { namespace: String },

    #[error("📛 Update name: {name} is registered more than once in namespace: {namespace}")]
    #[diagnostic(
        code(redux_binder::duplicate_update_name),
        help("Each update name maps to exactly one message kind, remove the duplicate")
    )]
    DuplicateUpdateName { namespace: String, name: String },
}
