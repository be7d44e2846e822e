// SPDX-FileCopyrightText: 2026 Scriptbook Contributors
// SPDX-License-Identifier: MIT

//! Core value types shared by the document format and the built book.
//!
//! Ids are typed string identifiers from the source document; rich text is the
//! immutable styled-segment representation used for titles and dialogue.

pub mod ids;
pub mod rich_text;

pub use ids::{
    ConditionId, ConversationId, Id, IdError, LineId, NounId, RoleId, RoomId, VerbId,
};
pub use rich_text::{RichText, RichTextSegment, RichTextStyle};
