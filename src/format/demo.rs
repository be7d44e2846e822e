// SPDX-FileCopyrightText: 2026 Scriptbook Contributors
// SPDX-License-Identifier: MIT

//! A small built-in script used by `--demo` and as a test/bench workload.

use super::{
    RawCondition, RawConversation, RawLine, RawLineText, RawNoun, RawRef, RawRole, RawRoom,
    RawSegment, RawStyle, RawStyledSegment, RawVerb, ScriptDocument,
};

fn id_ref(id: &str) -> RawRef {
    RawRef::Id(id.to_owned())
}

/// An id-addressed two-room script exercising every record kind, styled
/// dialogue, optional verb/condition keys, and an unnamed room and noun
/// (fallback titles).
pub fn demo_document() -> ScriptDocument {
    ScriptDocument {
        roles: vec![
            RawRole {
                id: "role-keeper".to_owned(),
                name: "The Keeper".to_owned(),
                short_name: "KEEP".to_owned(),
            },
            RawRole {
                id: "role-gull".to_owned(),
                name: "Gull".to_owned(),
                short_name: "GULL".to_owned(),
            },
            RawRole {
                id: "role-stranger".to_owned(),
                name: "A Stranger".to_owned(),
                short_name: "STRA".to_owned(),
            },
        ],
        rooms: vec![
            RawRoom {
                id: "room-lamp".to_owned(),
                num: 1,
                name: Some("The Lamp Room".to_owned()),
            },
            RawRoom {
                id: "room-shore".to_owned(),
                num: 2,
                name: None,
            },
        ],
        nouns: vec![
            RawNoun {
                id: "noun-lamp".to_owned(),
                num: 1,
                parent_room: id_ref("room-lamp"),
                description: Some("The great lamp".to_owned()),
            },
            RawNoun {
                id: "noun-logbook".to_owned(),
                num: 2,
                parent_room: id_ref("room-lamp"),
                description: None,
            },
            RawNoun {
                id: "noun-rowboat".to_owned(),
                num: 1,
                parent_room: id_ref("room-shore"),
                description: Some("A rowboat, hull up".to_owned()),
            },
        ],
        conversations: vec![
            RawConversation {
                id: "conv-lamp-look".to_owned(),
                parent_noun: id_ref("noun-lamp"),
                verb: Some(id_ref("verb-look")),
                condition: None,
            },
            RawConversation {
                id: "conv-lamp-use-lit".to_owned(),
                parent_noun: id_ref("noun-lamp"),
                verb: Some(id_ref("verb-use")),
                condition: Some(id_ref("cond-lamp-lit")),
            },
            RawConversation {
                id: "conv-logbook-any".to_owned(),
                parent_noun: id_ref("noun-logbook"),
                verb: None,
                condition: None,
            },
            RawConversation {
                id: "conv-rowboat-use".to_owned(),
                parent_noun: id_ref("noun-rowboat"),
                verb: Some(id_ref("verb-use")),
                condition: None,
            },
        ],
        lines: vec![
            RawLine {
                id: "dlg-0001".to_owned(),
                num: 1,
                parent_conversation: id_ref("conv-lamp-look"),
                role: id_ref("role-keeper"),
                text: RawLineText::Plain("She burns through any fog, given oil enough.".to_owned()),
            },
            RawLine {
                id: "dlg-0002".to_owned(),
                num: 2,
                parent_conversation: id_ref("conv-lamp-look"),
                role: id_ref("role-gull"),
                text: RawLineText::Segments(vec![
                    RawSegment::Plain("Kraa. ".to_owned()),
                    RawSegment::Styled(RawStyledSegment {
                        text: "Kraa!".to_owned(),
                        style: RawStyle {
                            bold: true,
                            italic: false,
                        },
                    }),
                ]),
            },
            RawLine {
                id: "dlg-0003".to_owned(),
                num: 3,
                parent_conversation: id_ref("conv-lamp-use-lit"),
                role: id_ref("role-keeper"),
                text: RawLineText::Segments(vec![
                    RawSegment::Plain("Mind the glass. It is ".to_owned()),
                    RawSegment::Styled(RawStyledSegment {
                        text: "hot".to_owned(),
                        style: RawStyle {
                            bold: true,
                            italic: true,
                        },
                    }),
                    RawSegment::Plain(".".to_owned()),
                ]),
            },
            RawLine {
                id: "dlg-0004".to_owned(),
                num: 4,
                parent_conversation: id_ref("conv-logbook-any"),
                role: id_ref("role-stranger"),
                text: RawLineText::Plain("Three nights, no entries. Where were you?".to_owned()),
            },
            RawLine {
                id: "dlg-0005".to_owned(),
                num: 5,
                parent_conversation: id_ref("conv-logbook-any"),
                role: id_ref("role-keeper"),
                text: RawLineText::Segments(vec![RawSegment::Styled(RawStyledSegment {
                    text: "Asleep.".to_owned(),
                    style: RawStyle {
                        bold: false,
                        italic: true,
                    },
                })]),
            },
            RawLine {
                id: "dlg-0006".to_owned(),
                num: 6,
                parent_conversation: id_ref("conv-rowboat-use"),
                role: id_ref("role-stranger"),
                text: RawLineText::Plain("No oars. Of course there are no oars.".to_owned()),
            },
            RawLine {
                id: "dlg-0007".to_owned(),
                num: 7,
                parent_conversation: id_ref("conv-rowboat-use"),
                role: id_ref("role-gull"),
                text: RawLineText::Plain("Kraa.".to_owned()),
            },
        ],
        conditions: vec![RawCondition {
            id: "cond-lamp-lit".to_owned(),
            parent_room: id_ref("room-lamp"),
            description: "The lamp is lit".to_owned(),
        }],
        verbs: vec![
            RawVerb {
                id: "verb-look".to_owned(),
                name: "Look".to_owned(),
            },
            RawVerb {
                id: "verb-use".to_owned(),
                name: "Use".to_owned(),
            },
        ],
    }
}
