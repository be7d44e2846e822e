// SPDX-FileCopyrightText: 2026 Scriptbook Contributors
// SPDX-License-Identifier: MIT

//! The book: a script document resolved into an immutable cross-linked index.
//!
//! All entities live in per-kind arenas owned by [`Book`] and reference each
//! other through copy [`Handle`]s, so the cyclic room/noun/conversation/role
//! relationships need no ownership cycles. The builder is the only writer;
//! once [`build_book`] returns, nothing exposes a mutator.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::model::ids::{
    ConditionTag, ConversationTag, LineTag, NounTag, RoleTag, RoomTag, VerbTag,
};
use crate::model::{
    ConditionId, ConversationId, LineId, NounId, RichText, RoleId, RoomId, VerbId,
};

mod builder;

pub use builder::{build_book, BuildError, EntityKind};

/// An index into one of the book's arenas, tagged by entity kind.
///
/// Handles are only produced by the builder for the book that owns them;
/// indexing a book with a handle from a different book is a programmer error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle<T> {
    index: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub(crate) fn new(index: u32) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    pub fn index(self) -> usize {
        self.index as usize
    }
}

pub type RoleHandle = Handle<RoleTag>;
pub type RoomHandle = Handle<RoomTag>;
pub type NounHandle = Handle<NounTag>;
pub type ConversationHandle = Handle<ConversationTag>;
pub type LineHandle = Handle<LineTag>;
pub type ConditionHandle = Handle<ConditionTag>;
pub type VerbHandle = Handle<VerbTag>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    id: RoleId,
    name: String,
    short_name: String,
    conversations: Vec<ConversationHandle>,
}

impl Role {
    pub fn id(&self) -> &RoleId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Conversations this role speaks in, first appearance first.
    pub fn conversations(&self) -> &[ConversationHandle] {
        &self.conversations
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    raw: u32,
    name: Option<String>,
    title: RichText,
    nouns: Vec<NounHandle>,
    conditions: Vec<ConditionHandle>,
}

impl Room {
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// Document-supplied ordering key. Not an identity; may repeat.
    pub fn raw(&self) -> u32 {
        self.raw
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Display title; falls back to `Room #<raw>` when the document names
    /// none.
    pub fn title(&self) -> &RichText {
        &self.title
    }

    pub fn nouns(&self) -> &[NounHandle] {
        &self.nouns
    }

    pub fn conditions(&self) -> &[ConditionHandle] {
        &self.conditions
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Noun {
    id: NounId,
    raw: u32,
    name: Option<String>,
    title: RichText,
    parent_room: RoomHandle,
    conversations: Vec<ConversationHandle>,
}

impl Noun {
    pub fn id(&self) -> &NounId {
        &self.id
    }

    pub fn raw(&self) -> u32 {
        self.raw
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn title(&self) -> &RichText {
        &self.title
    }

    pub fn parent_room(&self) -> RoomHandle {
        self.parent_room
    }

    pub fn conversations(&self) -> &[ConversationHandle] {
        &self.conversations
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    id: ConversationId,
    raw: (Option<u32>, Option<u32>),
    verb: Option<VerbHandle>,
    condition: Option<ConditionHandle>,
    parent_noun: NounHandle,
    lines: Vec<LineHandle>,
    roles: Vec<RoleHandle>,
}

impl Conversation {
    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    /// Ordering key: the (verb, condition) positions, either of which the
    /// document may leave unset.
    pub fn raw(&self) -> (Option<u32>, Option<u32>) {
        self.raw
    }

    pub fn verb(&self) -> Option<VerbHandle> {
        self.verb
    }

    pub fn condition(&self) -> Option<ConditionHandle> {
        self.condition
    }

    pub fn parent_noun(&self) -> NounHandle {
        self.parent_noun
    }

    /// Lines in document order.
    pub fn lines(&self) -> &[LineHandle] {
        &self.lines
    }

    /// Distinct speaking roles, first appearance first.
    pub fn roles(&self) -> &[RoleHandle] {
        &self.roles
    }

    pub fn contains_role(&self, role: RoleHandle) -> bool {
        self.roles.contains(&role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    raw: u32,
    role: RoleHandle,
    text: RichText,
    parent_conversation: ConversationHandle,
}

impl Line {
    pub fn id(&self) -> &LineId {
        &self.id
    }

    pub fn raw(&self) -> u32 {
        self.raw
    }

    pub fn role(&self) -> RoleHandle {
        self.role
    }

    pub fn text(&self) -> &RichText {
        &self.text
    }

    pub fn parent_conversation(&self) -> ConversationHandle {
        self.parent_conversation
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    id: ConditionId,
    description: String,
    parent_room: RoomHandle,
}

impl Condition {
    pub fn id(&self) -> &ConditionId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parent_room(&self) -> RoomHandle {
        self.parent_room
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    id: VerbId,
    name: String,
}

impl Verb {
    pub fn id(&self) -> &VerbId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The fully linked, read-only script index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    roles: Vec<Role>,
    rooms: Vec<Room>,
    nouns: Vec<Noun>,
    conversations: Vec<Conversation>,
    lines: Vec<Line>,
    conditions: Vec<Condition>,
    verbs: Vec<Verb>,
    roles_by_id: BTreeMap<RoleId, RoleHandle>,
    rooms_by_id: BTreeMap<RoomId, RoomHandle>,
    nouns_by_id: BTreeMap<NounId, NounHandle>,
    conversations_by_id: BTreeMap<ConversationId, ConversationHandle>,
    lines_by_id: BTreeMap<LineId, LineHandle>,
    conditions_by_id: BTreeMap<ConditionId, ConditionHandle>,
    verbs_by_id: BTreeMap<VerbId, VerbHandle>,
}

impl Book {
    pub fn role(&self, handle: RoleHandle) -> &Role {
        &self.roles[handle.index()]
    }

    pub fn room(&self, handle: RoomHandle) -> &Room {
        &self.rooms[handle.index()]
    }

    pub fn noun(&self, handle: NounHandle) -> &Noun {
        &self.nouns[handle.index()]
    }

    pub fn conversation(&self, handle: ConversationHandle) -> &Conversation {
        &self.conversations[handle.index()]
    }

    pub fn line(&self, handle: LineHandle) -> &Line {
        &self.lines[handle.index()]
    }

    pub fn condition(&self, handle: ConditionHandle) -> &Condition {
        &self.conditions[handle.index()]
    }

    pub fn verb(&self, handle: VerbHandle) -> &Verb {
        &self.verbs[handle.index()]
    }

    pub fn role_by_id(&self, id: &str) -> Option<RoleHandle> {
        self.roles_by_id.get(id).copied()
    }

    pub fn room_by_id(&self, id: &str) -> Option<RoomHandle> {
        self.rooms_by_id.get(id).copied()
    }

    pub fn noun_by_id(&self, id: &str) -> Option<NounHandle> {
        self.nouns_by_id.get(id).copied()
    }

    pub fn conversation_by_id(&self, id: &str) -> Option<ConversationHandle> {
        self.conversations_by_id.get(id).copied()
    }

    pub fn line_by_id(&self, id: &str) -> Option<LineHandle> {
        self.lines_by_id.get(id).copied()
    }

    pub fn condition_by_id(&self, id: &str) -> Option<ConditionHandle> {
        self.conditions_by_id.get(id).copied()
    }

    pub fn verb_by_id(&self, id: &str) -> Option<VerbHandle> {
        self.verbs_by_id.get(id).copied()
    }

    pub fn roles(&self) -> impl Iterator<Item = (RoleHandle, &Role)> {
        self.roles
            .iter()
            .enumerate()
            .map(|(index, role)| (Handle::new(index as u32), role))
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomHandle, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(index, room)| (Handle::new(index as u32), room))
    }

    pub fn nouns(&self) -> impl Iterator<Item = (NounHandle, &Noun)> {
        self.nouns
            .iter()
            .enumerate()
            .map(|(index, noun)| (Handle::new(index as u32), noun))
    }

    /// Conversations in document order.
    pub fn conversations(&self) -> impl Iterator<Item = (ConversationHandle, &Conversation)> {
        self.conversations
            .iter()
            .enumerate()
            .map(|(index, conversation)| (Handle::new(index as u32), conversation))
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineHandle, &Line)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(index, line)| (Handle::new(index as u32), line))
    }

    /// The room a conversation takes place in, derived through its noun.
    /// Conversations never store a room of their own.
    pub fn conversation_room(&self, handle: ConversationHandle) -> RoomHandle {
        self.noun(self.conversation(handle).parent_noun()).parent_room()
    }

    pub fn conversation_verb_name(&self, conversation: &Conversation) -> Option<&str> {
        conversation.verb().map(|handle| self.verb(handle).name())
    }

    pub fn conversation_condition_text(&self, conversation: &Conversation) -> Option<&str> {
        conversation
            .condition()
            .map(|handle| self.condition(handle).description())
    }

    pub fn conversation_contains_role_id(
        &self,
        conversation: &Conversation,
        role_id: &str,
    ) -> bool {
        conversation
            .roles()
            .iter()
            .any(|&handle| self.role(handle).id().as_str() == role_id)
    }
}
