// SPDX-FileCopyrightText: 2026 Scriptbook Contributors
// SPDX-License-Identifier: MIT

//! Read-only queries over a built book.
//!
//! Everything here is a pure function of `(book, focus)`: stable multi-key
//! sorting, first-seen grouping, AND-composed focus filtering, and the
//! room → noun → conversation layout the renderer walks. Nothing is cached;
//! identical inputs produce identical output.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::book::{Book, ConversationHandle, NounHandle, RoomHandle};
use crate::model::{ConversationId, LineId, RoleId, RoomId};


/// A comparison key: scalars, or sequences compared lexicographically
/// element-by-element and then by length (a prefix sorts first).
///
/// `Null` sorts before any non-null value, which is how unset verb/condition
/// positions in conversation ordering tuples stay deterministic. The derived
/// order gives all of this: variant order puts `Null` first, and `Vec`'s
/// `Ord` is exactly lexicographic-then-length.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Null,
    Num(u32),
    Str(String),
    Seq(Vec<SortKey>),
}

impl From<u32> for SortKey {
    fn from(value: u32) -> Self {
        Self::Num(value)
    }
}

impl From<Option<u32>> for SortKey {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(value) => Self::Num(value),
            None => Self::Null,
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<SortKey>> for SortKey {
    fn from(value: Vec<SortKey>) -> Self {
        Self::Seq(value)
    }
}

/// Stable sort by a derived [`SortKey`]. Equal keys keep their input order.
pub fn sort_by_key<T, F>(items: &mut [T], key: F)
where
    F: FnMut(&T) -> SortKey,
{
    items.sort_by_cached_key(key);
}

/// Partitions `items` into groups, preserving first-seen order of group keys
/// and of items within each group.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<(K, Vec<T>)>
where
    K: Ord + Clone,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    let mut positions: BTreeMap<K, usize> = BTreeMap::new();
    for item in items {
        let group_key = key(&item);
        match positions.get(&group_key) {
            Some(&position) => groups[position].1.push(item),
            None => {
                positions.insert(group_key.clone(), groups.len());
                groups.push((group_key, vec![item]));
            }
        }
    }
    groups
}

/// One focus dimension. The string keys are the stable names the CLI and
/// deep links use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    Conversation,
    Role,
    Room,
}

impl FocusField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conversation => "conv_id",
            Self::Role => "role_id",
            Self::Room => "room_id",
        }
    }
}

impl fmt::Display for FocusField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A focus key outside `conv_id`/`role_id`/`room_id` is a programmer error
/// and is surfaced, never silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFocusFieldError {
    key: String,
}

impl ParseFocusFieldError {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for ParseFocusFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown focus field: {:?}", self.key)
    }
}

impl std::error::Error for ParseFocusFieldError {}

impl FromStr for FocusField {
    type Err = ParseFocusFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conv_id" => Ok(Self::Conversation),
            "role_id" => Ok(Self::Role),
            "room_id" => Ok(Self::Room),
            _ => Err(ParseFocusFieldError { key: s.to_owned() }),
        }
    }
}

/// Setting one focus dimension to a concrete id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusSelect {
    Conversation(ConversationId),
    Role(RoleId),
    Room(RoomId),
}

/// The currently selected filter dimensions. All are independently optional;
/// an empty focus is the summary/overview mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Focus {
    conversation: Option<ConversationId>,
    role: Option<RoleId>,
    room: Option<RoomId>,
}

impl Focus {
    pub fn conversation(&self) -> Option<&ConversationId> {
        self.conversation.as_ref()
    }

    pub fn role(&self) -> Option<&RoleId> {
        self.role.as_ref()
    }

    pub fn room(&self) -> Option<&RoomId> {
        self.room.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.conversation.is_none() && self.role.is_none() && self.room.is_none()
    }

    /// Sets one dimension, leaving the others intact.
    pub fn select(&mut self, selection: FocusSelect) {
        match selection {
            FocusSelect::Conversation(id) => self.conversation = Some(id),
            FocusSelect::Role(id) => self.role = Some(id),
            FocusSelect::Room(id) => self.room = Some(id),
        }
    }

    /// Clears exactly one dimension, leaving the others intact.
    pub fn clear(&mut self, field: FocusField) {
        match field {
            FocusField::Conversation => self.conversation = None,
            FocusField::Role => self.role = None,
            FocusField::Room => self.room = None,
        }
    }
}

/// The visible conversation set for a focus: the full collection intersected
/// with each set dimension (exact conversation id, room of the conversation,
/// role speaking in it), in document order.
///
/// An id that matches nothing in the book filters to the empty set.
pub fn filtered_conversations(book: &Book, focus: &Focus) -> Vec<ConversationHandle> {
    book.conversations()
        .filter(|(handle, conversation)| {
            if let Some(conv_id) = focus.conversation() {
                if conversation.id() != conv_id {
                    return false;
                }
            }
            if let Some(room_id) = focus.room() {
                if book.room(book.conversation_room(*handle)).id() != room_id {
                    return false;
                }
            }
            if let Some(role_id) = focus.role() {
                if !book.conversation_contains_role_id(conversation, role_id.as_str()) {
                    return false;
                }
            }
            true
        })
        .map(|(handle, _)| handle)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomGroup {
    pub room: RoomHandle,
    pub nouns: Vec<NounGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounGroup {
    pub noun: NounHandle,
    pub conversations: Vec<ConversationHandle>,
}

/// Groups a conversation set into the three-level display layout: rooms
/// sorted by raw key, nouns within a room by raw key, conversations within a
/// noun by their raw (verb, condition) tuple with unset positions first.
pub fn grouped_layout(book: &Book, conversations: &[ConversationHandle]) -> Vec<RoomGroup> {
    let mut room_groups = group_by(conversations.iter().copied(), |&handle| {
        book.conversation_room(handle)
    });
    sort_by_key(&mut room_groups, |(room, _)| book.room(*room).raw().into());

    room_groups
        .into_iter()
        .map(|(room, room_conversations)| {
            let mut noun_groups = group_by(room_conversations, |&handle| {
                book.conversation(handle).parent_noun()
            });
            sort_by_key(&mut noun_groups, |(noun, _)| book.noun(*noun).raw().into());

            let nouns = noun_groups
                .into_iter()
                .map(|(noun, mut noun_conversations)| {
                    sort_by_key(&mut noun_conversations, |&handle| {
                        let (verb, condition) = book.conversation(handle).raw();
                        SortKey::Seq(vec![verb.into(), condition.into()])
                    });
                    NounGroup {
                        noun,
                        conversations: noun_conversations,
                    }
                })
                .collect();

            RoomGroup { room, nouns }
        })
        .collect()
}

const LINE_FRAGMENT_PREFIX: &str = "line-";

/// Focus state requested by a `line-<id>` URL fragment: the line's parent
/// conversation becomes the conversation focus, and the line itself is the
/// ephemeral highlight target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentFocus {
    pub focus: Focus,
    pub highlight: LineId,
}

/// Maps a URL fragment to a focus request. Any fragment that is not
/// `line-<known line id>` requests the default, unfocused view.
pub fn focus_for_fragment(book: &Book, fragment: &str) -> Option<FragmentFocus> {
    let line_id = fragment.strip_prefix(LINE_FRAGMENT_PREFIX)?;
    let line = book.line_by_id(line_id)?;
    let conversation = book.line(line).parent_conversation();

    let mut focus = Focus::default();
    focus.select(FocusSelect::Conversation(
        book.conversation(conversation).id().clone(),
    ));
    Some(FragmentFocus {
        focus,
        highlight: book.line(line).id().clone(),
    })
}
