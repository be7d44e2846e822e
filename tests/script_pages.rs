// SPDX-FileCopyrightText: 2026 Scriptbook Contributors
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use scriptbook::book::{build_book, Book};
use scriptbook::query::{
    filtered_conversations, focus_for_fragment, grouped_layout, Focus, FocusSelect,
};
use scriptbook::render::{render_page, render_script, render_summary};
use scriptbook::store::load_document;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_book(name: &str) -> Book {
    let document = load_document(&fixture_path(name))
        .unwrap_or_else(|err| panic!("failed to load {name}: {err}"));
    build_book(&document).unwrap_or_else(|err| panic!("failed to build {name}: {err}"))
}

#[test]
fn index_and_id_addressed_fixtures_build_the_same_book() {
    let indexed = fixture_book("script_indexed.json");
    let by_id = fixture_book("script_by_id.json");
    assert_eq!(indexed, by_id);
}

#[test]
fn full_script_page_renders_every_room_and_line() {
    let book = fixture_book("script_indexed.json");
    let conversations = filtered_conversations(&book, &Focus::default());
    let layout = grouped_layout(&book, &conversations);
    let html = render_page("Script", &render_script(&book, &layout, None));

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("The North Gate"));
    assert!(html.contains("Room #2"));
    assert!(html.contains("id=\"say-001\""));
    assert!(html.contains("There is <i>always</i> a way over a wall."));
    assert!(html.contains(">Look<"));
    assert!(html.contains("<i>Any</i>"));
}

#[test]
fn role_focus_narrows_the_page_to_that_speaker() {
    let book = fixture_book("script_indexed.json");

    let mut focus = Focus::default();
    focus.select(FocusSelect::Role("role-fox".parse().expect("role id")));
    let conversations = filtered_conversations(&book, &focus);
    let layout = grouped_layout(&book, &conversations);
    let html = render_script(&book, &layout, None);

    assert!(html.contains("id=\"conv-tree-any\""));
    assert!(!html.contains("id=\"conv-portcullis-look\""));
    assert!(!html.contains("The North Gate"));
}

#[test]
fn deep_link_fragment_highlights_the_line_in_its_conversation() {
    let book = fixture_book("script_indexed.json");

    let requested = focus_for_fragment(&book, "line-say-002").expect("fragment focus");
    let conversations = filtered_conversations(&book, &requested.focus);
    let layout = grouped_layout(&book, &conversations);
    let html = render_script(&book, &layout, Some(&requested.highlight));

    assert!(html.contains("class=\"line focused\" id=\"say-002\""));
    assert!(!html.contains("id=\"conv-portcullis-look\""));
}

#[test]
fn summary_page_lists_roles_and_rooms() {
    let book = fixture_book("script_by_id.json");
    let html = render_page("Summary", &render_summary(&book, "script.html"));

    assert!(html.contains("Gate Guard"));
    assert!(html.contains("FOX"));
    assert!(html.contains("href=\"script.html#room-orchard\""));
}
