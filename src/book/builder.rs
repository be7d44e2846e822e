// SPDX-FileCopyrightText: 2026 Scriptbook Contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fmt;

use crate::format::{RawRef, ScriptDocument};
use crate::model::ids::Id;
use crate::model::{IdError, RichText};

use super::{Book, Condition, Conversation, Handle, Line, Noun, Role, Room, Verb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Role,
    Room,
    Noun,
    Conversation,
    Condition,
    Verb,
    Line,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Room => "room",
            Self::Noun => "noun",
            Self::Conversation => "conversation",
            Self::Condition => "condition",
            Self::Verb => "verb",
            Self::Line => "line",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construction failures. Any of these aborts the build; a partially linked
/// book is never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    InvalidId {
        kind: EntityKind,
        value: String,
        source: IdError,
    },
    DuplicateId {
        kind: EntityKind,
        id: String,
    },
    Dangling {
        kind: EntityKind,
        field: &'static str,
        reference: RawRef,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId {
                kind,
                value,
                source,
            } => write!(f, "invalid {kind} id {value:?}: {source}"),
            Self::DuplicateId { kind, id } => write!(f, "duplicate {kind} id {id:?}"),
            Self::Dangling {
                kind,
                field,
                reference,
            } => write!(f, "{kind} field {field:?} references unknown {reference}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidId { source, .. } => Some(source),
            Self::DuplicateId { .. } | Self::Dangling { .. } => None,
        }
    }
}

/// One kind's allocation table: every record has a handle before anything
/// resolves. Resolves references in either addressing scheme (positional
/// index or string id) against the same table, so both document shapes yield
/// the same graph.
struct Alloc<T> {
    ids: Vec<Id<T>>,
    by_id: BTreeMap<Id<T>, Handle<T>>,
}

impl<T: Copy + Ord> Alloc<T> {
    fn from_records<'a>(
        kind: EntityKind,
        ids: impl Iterator<Item = &'a str>,
    ) -> Result<Self, BuildError> {
        let mut alloc = Self {
            ids: Vec::new(),
            by_id: BTreeMap::new(),
        };
        for (index, value) in ids.enumerate() {
            let id = Id::new(value.to_owned()).map_err(|source| BuildError::InvalidId {
                kind,
                value: value.to_owned(),
                source,
            })?;
            let handle = Handle::new(index as u32);
            if alloc.by_id.insert(id.clone(), handle).is_some() {
                return Err(BuildError::DuplicateId {
                    kind,
                    id: value.to_owned(),
                });
            }
            alloc.ids.push(id);
        }
        Ok(alloc)
    }

    fn resolve(
        &self,
        kind: EntityKind,
        field: &'static str,
        reference: &RawRef,
    ) -> Result<Handle<T>, BuildError> {
        let handle = match reference {
            RawRef::Index(index) if (*index as usize) < self.ids.len() => {
                Some(Handle::new(*index))
            }
            RawRef::Index(_) => None,
            RawRef::Id(id) => self.by_id.get(id.as_str()).copied(),
        };
        handle.ok_or_else(|| BuildError::Dangling {
            kind,
            field,
            reference: reference.clone(),
        })
    }
}

/// Builds the immutable book from a raw document.
///
/// Two phases. Allocation assigns every record of every kind a handle and an
/// id table entry with nothing linked yet. Resolution then walks the kinds in
/// a fixed order (roles, rooms, nouns, conversations, conditions, verbs,
/// lines); each record resolves its reference fields and pushes itself into
/// its parent's child collection, so later kinds rely on earlier kinds being
/// allocated but not on them being resolved.
pub fn build_book(document: &ScriptDocument) -> Result<Book, BuildError> {
    let role_alloc = Alloc::from_records(
        EntityKind::Role,
        document.roles.iter().map(|record| record.id.as_str()),
    )?;
    let room_alloc = Alloc::from_records(
        EntityKind::Room,
        document.rooms.iter().map(|record| record.id.as_str()),
    )?;
    let noun_alloc = Alloc::from_records(
        EntityKind::Noun,
        document.nouns.iter().map(|record| record.id.as_str()),
    )?;
    let conversation_alloc = Alloc::from_records(
        EntityKind::Conversation,
        document
            .conversations
            .iter()
            .map(|record| record.id.as_str()),
    )?;
    let line_alloc = Alloc::from_records(
        EntityKind::Line,
        document.lines.iter().map(|record| record.id.as_str()),
    )?;
    let condition_alloc = Alloc::from_records(
        EntityKind::Condition,
        document.conditions.iter().map(|record| record.id.as_str()),
    )?;
    let verb_alloc = Alloc::from_records(
        EntityKind::Verb,
        document.verbs.iter().map(|record| record.id.as_str()),
    )?;

    let mut roles: Vec<Role> = document
        .roles
        .iter()
        .enumerate()
        .map(|(index, record)| Role {
            id: role_alloc.ids[index].clone(),
            name: record.name.clone(),
            short_name: record.short_name.clone(),
            conversations: Vec::new(),
        })
        .collect();

    let mut rooms: Vec<Room> = document
        .rooms
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let title = record
                .name
                .clone()
                .unwrap_or_else(|| format!("Room #{}", record.num));
            Room {
                id: room_alloc.ids[index].clone(),
                raw: record.num,
                name: record.name.clone(),
                title: RichText::of_plain_text(title),
                nouns: Vec::new(),
                conditions: Vec::new(),
            }
        })
        .collect();

    let mut nouns: Vec<Noun> = Vec::with_capacity(document.nouns.len());
    for (index, record) in document.nouns.iter().enumerate() {
        let parent_room = room_alloc.resolve(EntityKind::Noun, "parentRoom", &record.parent_room)?;
        rooms[parent_room.index()].nouns.push(Handle::new(index as u32));
        let title = record
            .description
            .clone()
            .unwrap_or_else(|| format!("Noun #{}", record.num));
        nouns.push(Noun {
            id: noun_alloc.ids[index].clone(),
            raw: record.num,
            name: record.description.clone(),
            title: RichText::of_plain_text(title),
            parent_room,
            conversations: Vec::new(),
        });
    }

    let mut conversations: Vec<Conversation> = Vec::with_capacity(document.conversations.len());
    for (index, record) in document.conversations.iter().enumerate() {
        let parent_noun =
            noun_alloc.resolve(EntityKind::Conversation, "parentNoun", &record.parent_noun)?;
        let verb = record
            .verb
            .as_ref()
            .map(|reference| verb_alloc.resolve(EntityKind::Conversation, "verb", reference))
            .transpose()?;
        let condition = record
            .condition
            .as_ref()
            .map(|reference| {
                condition_alloc.resolve(EntityKind::Conversation, "condition", reference)
            })
            .transpose()?;
        nouns[parent_noun.index()]
            .conversations
            .push(Handle::new(index as u32));
        conversations.push(Conversation {
            id: conversation_alloc.ids[index].clone(),
            raw: (
                verb.map(|handle| handle.index() as u32),
                condition.map(|handle| handle.index() as u32),
            ),
            verb,
            condition,
            parent_noun,
            lines: Vec::new(),
            roles: Vec::new(),
        });
    }

    let mut conditions: Vec<Condition> = Vec::with_capacity(document.conditions.len());
    for (index, record) in document.conditions.iter().enumerate() {
        let parent_room =
            room_alloc.resolve(EntityKind::Condition, "parentRoom", &record.parent_room)?;
        rooms[parent_room.index()]
            .conditions
            .push(Handle::new(index as u32));
        conditions.push(Condition {
            id: condition_alloc.ids[index].clone(),
            description: record.description.clone(),
            parent_room,
        });
    }

    let verbs: Vec<Verb> = document
        .verbs
        .iter()
        .enumerate()
        .map(|(index, record)| Verb {
            id: verb_alloc.ids[index].clone(),
            name: record.name.clone(),
        })
        .collect();

    let mut lines: Vec<Line> = Vec::with_capacity(document.lines.len());
    for (index, record) in document.lines.iter().enumerate() {
        let parent_conversation = conversation_alloc.resolve(
            EntityKind::Line,
            "parentConversation",
            &record.parent_conversation,
        )?;
        let role = role_alloc.resolve(EntityKind::Line, "role", &record.role)?;
        let conversation = &mut conversations[parent_conversation.index()];
        conversation.lines.push(Handle::new(index as u32));
        if !conversation.roles.contains(&role) {
            conversation.roles.push(role);
        }
        let role_entry = &mut roles[role.index()];
        if !role_entry.conversations.contains(&parent_conversation) {
            role_entry.conversations.push(parent_conversation);
        }
        lines.push(Line {
            id: line_alloc.ids[index].clone(),
            raw: record.num,
            role,
            text: record.text.to_rich_text(),
            parent_conversation,
        });
    }

    Ok(Book {
        roles,
        rooms,
        nouns,
        conversations,
        lines,
        conditions,
        verbs,
        roles_by_id: role_alloc.by_id,
        rooms_by_id: room_alloc.by_id,
        nouns_by_id: noun_alloc.by_id,
        conversations_by_id: conversation_alloc.by_id,
        lines_by_id: line_alloc.by_id,
        conditions_by_id: condition_alloc.by_id,
        verbs_by_id: verb_alloc.by_id,
    })
}
