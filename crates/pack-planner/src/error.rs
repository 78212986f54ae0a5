// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the pack planner.

/// Errors that can occur when validating a pair packing.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// An 8-bit block extends past the end of its area.
    #[error("luma block {index} at offset {offset} with width {width} exceeds area {area}")]
    LumaOutOfArea {
        index: usize,
        offset: u16,
        width: u16,
        area: u16,
    },

    /// A 16-bit block extends past the end of its area.
    #[error("chroma block {index} at offset {offset} with width {width} exceeds area {area}")]
    ChromaOutOfArea {
        index: usize,
        offset: u16,
        width: u16,
        area: u16,
    },
}
