// SPDX-FileCopyrightText: 2026 Scriptbook Contributors
// SPDX-License-Identifier: MIT

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scriptbook::book::{build_book, Book};
use scriptbook::format::demo::demo_document;
use scriptbook::format::ScriptDocument;
use scriptbook::query::{filtered_conversations, grouped_layout, Focus};
use scriptbook::render::render_script;

fn checksum_render(book: &Book) -> u64 {
    let conversations = filtered_conversations(black_box(book), &Focus::default());
    let layout = grouped_layout(black_box(book), &conversations);
    let html = render_script(black_box(book), &layout, None);

    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(conversations.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(layout.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(html.len() as u64);
    acc
}

/// Tiles the demo script into a larger document by suffixing every id, so
/// the build and layout paths see a few hundred records.
fn tiled_document(copies: u32) -> ScriptDocument {
    let base = demo_document();
    let mut document = ScriptDocument::default();
    for copy in 0..copies {
        let suffix = |id: &str| format!("{id}-t{copy}");
        // The demo document is id-addressed; positional refs never occur here.
        let reref = |reference: &scriptbook::format::RawRef| match reference {
            scriptbook::format::RawRef::Id(id) => scriptbook::format::RawRef::Id(suffix(id)),
            scriptbook::format::RawRef::Index(index) => scriptbook::format::RawRef::Index(*index),
        };
        for record in &base.roles {
            let mut record = record.clone();
            record.id = suffix(&record.id);
            document.roles.push(record);
        }
        for record in &base.rooms {
            let mut record = record.clone();
            record.id = suffix(&record.id);
            document.rooms.push(record);
        }
        for record in &base.nouns {
            let mut record = record.clone();
            record.id = suffix(&record.id);
            record.parent_room = reref(&record.parent_room);
            document.nouns.push(record);
        }
        for record in &base.conversations {
            let mut record = record.clone();
            record.id = suffix(&record.id);
            record.parent_noun = reref(&record.parent_noun);
            record.verb = record.verb.as_ref().map(&reref);
            record.condition = record.condition.as_ref().map(&reref);
            document.conversations.push(record);
        }
        for record in &base.lines {
            let mut record = record.clone();
            record.id = suffix(&record.id);
            record.parent_conversation = reref(&record.parent_conversation);
            record.role = reref(&record.role);
            document.lines.push(record);
        }
        for record in &base.conditions {
            let mut record = record.clone();
            record.id = suffix(&record.id);
            record.parent_room = reref(&record.parent_room);
            document.conditions.push(record);
        }
        for record in &base.verbs {
            let mut record = record.clone();
            record.id = suffix(&record.id);
            document.verbs.push(record);
        }
    }
    document
}

// Benchmark identity (keep stable): group `book.index`, case ids
// `build_small`, `build_tiled`, `layout_render_tiled`.
fn benches_book(c: &mut Criterion) {
    let mut group = c.benchmark_group("book.index");

    let small = demo_document();
    group.bench_function("build_small", |b| {
        b.iter(|| build_book(black_box(&small)).expect("build_book"))
    });

    let tiled = tiled_document(64);
    group.bench_function("build_tiled", |b| {
        b.iter(|| build_book(black_box(&tiled)).expect("build_book"))
    });

    let tiled_book = build_book(&tiled).expect("build_book");
    group.bench_function("layout_render_tiled", |b| {
        b.iter(|| black_box(checksum_render(black_box(&tiled_book))))
    });

    group.finish();
}

criterion_group!(benches, benches_book);
criterion_main!(benches);
