// SPDX-FileCopyrightText: 2026 Scriptbook Contributors
// SPDX-License-Identifier: MIT

//! Static HTML rendering of the grouped script layout.
//!
//! Pure string building over a book plus the query layer's output. The
//! renderer never re-derives graph relationships; it only walks the layout
//! tree and the entities' resolved accessors.

use crate::book::{Book, ConversationHandle, LineHandle};
use crate::model::{LineId, RichText};
use crate::query::{sort_by_key, RoomGroup};

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Renders rich text segment by segment. When a segment is both bold and
/// italic, bold wraps italic; both styles apply either way.
pub fn render_rich_text(text: &RichText) -> String {
    let mut out = String::new();
    for segment in text.segments() {
        let mut piece = escape_html(segment.text());
        if segment.style().italic() {
            piece = format!("<i>{piece}</i>");
        }
        if segment.style().bold() {
            piece = format!("<b>{piece}</b>");
        }
        out.push_str(&piece);
    }
    out
}

fn render_line(book: &Book, out: &mut String, handle: LineHandle, highlight: Option<&LineId>) {
    let line = book.line(handle);
    let class = if highlight == Some(line.id()) {
        "line focused"
    } else {
        "line"
    };
    out.push_str(&format!("<div class=\"{class}\" id=\""));
    push_escaped(out, line.id().as_str());
    out.push_str("\"><div class=\"speaker\">");
    push_escaped(out, book.role(line.role()).short_name());
    out.push_str(":</div><div class=\"lineText\">");
    out.push_str(&render_rich_text(line.text()));
    out.push_str("</div></div>\n");
}

fn render_conversation(
    book: &Book,
    out: &mut String,
    handle: ConversationHandle,
    highlight: Option<&LineId>,
) {
    let conversation = book.conversation(handle);
    out.push_str("<div class=\"convSet\" id=\"");
    push_escaped(out, conversation.id().as_str());
    out.push_str("\">\n<div class=\"verb\">");
    match book.conversation_verb_name(conversation) {
        Some(name) => push_escaped(out, name),
        None => out.push_str("<i>Any</i>"),
    }
    out.push_str("</div>\n<div class=\"cond\">");
    match book.conversation_condition_text(conversation) {
        Some(text) => push_escaped(out, text),
        None => out.push_str("<i>Any</i>"),
    }
    out.push_str("</div>\n<div class=\"conv\">\n");
    for &line in conversation.lines() {
        render_line(book, out, line, highlight);
    }
    out.push_str("</div>\n</div>\n");
}

/// Renders the three-level layout as the script view, marking the highlight
/// line (from a deep link) if any.
pub fn render_script(book: &Book, layout: &[RoomGroup], highlight: Option<&LineId>) -> String {
    let mut out = String::from("<div class=\"script\">\n");
    for room_group in layout {
        let room = book.room(room_group.room);
        out.push_str("<section class=\"room\" id=\"");
        push_escaped(&mut out, room.id().as_str());
        out.push_str("\">\n<header>");
        out.push_str(&render_rich_text(room.title()));
        out.push_str("</header>\n");
        for noun_group in &room_group.nouns {
            let noun = book.noun(noun_group.noun);
            out.push_str("<section class=\"noun\" id=\"");
            push_escaped(&mut out, noun.id().as_str());
            out.push_str("\">\n<header>");
            out.push_str(&render_rich_text(noun.title()));
            out.push_str("</header>\n");
            for &conversation in &noun_group.conversations {
                render_conversation(book, &mut out, conversation, highlight);
            }
            out.push_str("</section>\n");
        }
        out.push_str("</section>\n");
    }
    out.push_str("</div>\n");
    out
}

/// The overview shown when nothing is focused: the role table (sorted by
/// role name) and the room list (sorted by raw key), linking into the script
/// view's anchors.
pub fn render_summary(book: &Book, script_href: &str) -> String {
    let mut roles: Vec<_> = book.roles().collect();
    sort_by_key(&mut roles, |(_, role)| role.name().into());

    let mut rooms: Vec<_> = book.rooms().collect();
    sort_by_key(&mut rooms, |(_, room)| room.raw().into());

    let mut out = String::from("<div class=\"summary\">\n<div>\n<h2>Roles</h2>\n");
    out.push_str("<table class=\"roleTable\">\n<thead><tr><th>Role</th><th>Short Name</th></tr></thead>\n<tbody>\n");
    for (_, role) in roles {
        out.push_str("<tr id=\"");
        push_escaped(&mut out, role.id().as_str());
        out.push_str("\"><td>");
        push_escaped(&mut out, role.name());
        out.push_str("</td><td>");
        push_escaped(&mut out, role.short_name());
        out.push_str("</td></tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</div>\n<div>\n<h2>Rooms</h2>\n<ul>\n");
    for (_, room) in rooms {
        out.push_str("<li><a href=\"");
        push_escaped(&mut out, script_href);
        out.push('#');
        push_escaped(&mut out, room.id().as_str());
        out.push_str("\">");
        out.push_str(&render_rich_text(room.title()));
        out.push_str("</a></li>\n");
    }
    out.push_str("</ul>\n</div>\n</div>\n");
    out
}

const PAGE_STYLE: &str = "\
body { font-family: Georgia, serif; margin: 2rem auto; max-width: 48rem; }
.room > header { font-size: 1.5rem; font-weight: bold; margin-top: 1.5rem; }
.noun > header { font-size: 1.2rem; font-style: italic; margin-top: 1rem; }
.convSet { border-left: 2px solid #ccc; margin: 0.75rem 0; padding-left: 0.75rem; }
.verb, .cond { color: #666; font-size: 0.9rem; }
.line { display: flex; gap: 0.5rem; margin: 0.25rem 0; }
.speaker { font-weight: bold; white-space: nowrap; }
.line.focused { background: #fff3b0; }
.roleTable th, .roleTable td { padding: 0.2rem 0.8rem 0.2rem 0; text-align: left; }
";

/// Wraps a rendered body in a complete standalone page.
pub fn render_page(title: &str, body: &str) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>");
    push_escaped(&mut out, title);
    out.push_str("</title>\n<style>\n");
    out.push_str(PAGE_STYLE);
    out.push_str("</style>\n</head>\n<body>\n<h1>");
    push_escaped(&mut out, title);
    out.push_str("</h1>\n");
    out.push_str(body);
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::{escape_html, render_rich_text, render_script, render_summary};
    use crate::book::build_book;
    use crate::format::demo::demo_document;
    use crate::model::{LineId, RichText, RichTextSegment, RichTextStyle};
    use crate::query::{filtered_conversations, grouped_layout, Focus};

    #[test]
    fn escape_html_escapes_markup() {
        assert_eq!(
            escape_html(r#"<b ref="a"> & 'x'"#),
            "&lt;b ref=&quot;a&quot;&gt; &amp; &#39;x&#39;"
        );
    }

    #[test]
    fn rich_text_applies_both_styles_with_bold_outside() {
        let text = RichText::new(vec![RichTextSegment::new(
            RichTextStyle::new(true, true),
            "hot",
        )]);
        assert_eq!(render_rich_text(&text), "<b><i>hot</i></b>");
    }

    #[test]
    fn script_view_contains_rooms_fallback_titles_and_any_captions() {
        let book = build_book(&demo_document()).expect("demo book");
        let conversations = filtered_conversations(&book, &Focus::default());
        let layout = grouped_layout(&book, &conversations);
        let html = render_script(&book, &layout, None);

        assert!(html.contains("The Lamp Room"));
        assert!(html.contains("Room #2"));
        assert!(html.contains("Noun #2"));
        assert!(html.contains("<i>Any</i>"));
        assert!(html.contains("id=\"conv-rowboat-use\""));
    }

    #[test]
    fn script_view_marks_the_highlight_line() {
        let book = build_book(&demo_document()).expect("demo book");
        let conversations = filtered_conversations(&book, &Focus::default());
        let layout = grouped_layout(&book, &conversations);
        let highlight: LineId = "dlg-0004".parse().expect("line id");
        let html = render_script(&book, &layout, Some(&highlight));

        assert!(html.contains("class=\"line focused\" id=\"dlg-0004\""));
        assert!(!html.contains("class=\"line focused\" id=\"dlg-0001\""));
    }

    #[test]
    fn summary_sorts_roles_by_name_and_links_rooms() {
        let book = build_book(&demo_document()).expect("demo book");
        let html = render_summary(&book, "script.html");

        let stranger = html.find("A Stranger").expect("stranger row");
        let gull = html.find(">Gull<").expect("gull row");
        let keeper = html.find("The Keeper").expect("keeper row");
        assert!(stranger < gull && gull < keeper);
        assert!(html.contains("href=\"script.html#room-lamp\""));
    }
}
