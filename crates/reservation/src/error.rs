// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for backend commits.

/// Errors a [`crate::TilerBackend`] can report for a commit attempt.
///
/// These never escape the orchestrator: a failed commit rolls back the
/// attempt and the loop retries smaller or stops, keeping whatever
/// earlier iterations reserved.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The container cannot fit the requested area.
    #[error("out of container space: area of {needed} slots, {available} available")]
    OutOfSpace { needed: u32, available: u32 },

    /// The backend does not support the requested combination.
    #[error("unsupported layout request: {0}")]
    Unsupported(String),

    /// The group handle does not name a live group context.
    #[error("no such group context")]
    NoSuchGroup,
}

/// Configuration loading or parsing error.
#[derive(Debug, thiserror::Error)]
#[error("configuration error: {0}")]
pub struct ConfigError(pub String);
