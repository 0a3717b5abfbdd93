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

// Attach.
pub mod action_creator;
pub mod bind;
pub mod message;
pub mod namespace_builder;
pub mod namespace_struct;
pub mod update_fn;

// Re-export.
pub use action_creator::*;
pub use bind::*;
pub use message::*;
pub use namespace_builder::*;
pub use namespace_struct::*;
pub use update_fn::*;
