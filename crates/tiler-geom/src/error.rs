// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for geometry handling.

/// Errors that can occur while interpreting geometry inputs.
#[derive(Debug, thiserror::Error)]
pub enum GeomError {
    /// A pixel format string could not be parsed.
    #[error("unknown pixel format '{0}'; expected '8bit', '16bit', or '32bit'")]
    UnknownFormat(String),
}
