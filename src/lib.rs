// SPDX-FileCopyrightText: 2026 Scriptbook Contributors
// SPDX-License-Identifier: MIT

//! Scriptbook — game-script index and static documentation page renderer.
//!
//! A raw script document (rooms, nouns, conversations, roles, dialogue
//! lines) is resolved into an immutable cross-linked book, queried through a
//! pure filter/grouping layer, and rendered as standalone HTML pages.

pub mod book;
pub mod format;
pub mod model;
pub mod query;
pub mod render;
pub mod store;
