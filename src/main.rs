// SPDX-FileCopyrightText: 2026 Scriptbook Contributors
// SPDX-License-Identifier: MIT

//! Scriptbook CLI entrypoint.
//!
//! Reads a script document (or the built-in demo), builds the book, applies
//! the requested focus, and renders HTML pages — to stdout, or as a small
//! static site under `--out`.
//!
//! Use `--schema` to print the JSON Schema for the document format instead.

use std::error::Error;
use std::path::{Path, PathBuf};

use scriptbook::book::{build_book, Book};
use scriptbook::format::demo::demo_document;
use scriptbook::format::document_schema;
use scriptbook::query::{
    filtered_conversations, focus_for_fragment, grouped_layout, Focus, FocusSelect,
};
use scriptbook::render::{render_page, render_script, render_summary};
use scriptbook::store::{load_document, write_page};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <script.json> [--out <dir>] [--room <id>] [--role <id>] [--conversation <id>] [--fragment <frag>]\n  {program} --demo [--out <dir>] [--room <id>] [--role <id>] [--conversation <id>] [--fragment <frag>]\n  {program} --schema\n\nWithout --out, the rendered script page is printed to stdout. With --out,\nwrites index.html (summary) and script.html into the directory.\n\n--room/--role/--conversation focus the script view on one id each; they\ncombine. --fragment takes a line-<id> deep link and highlights that line.\n\n--demo renders a built-in sample script and cannot be combined with a\ndocument path. --schema prints the JSON Schema for the document format."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    document: Option<String>,
    demo: bool,
    schema: bool,
    out: Option<String>,
    room: Option<String>,
    role: Option<String>,
    conversation: Option<String>,
    fragment: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    fn set_once(slot: &mut Option<String>, value: String) -> Result<(), ()> {
        if slot.is_some() {
            return Err(());
        }
        *slot = Some(value);
        Ok(())
    }

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            "--out" => set_once(&mut options.out, args.next().ok_or(())?)?,
            "--room" => set_once(&mut options.room, args.next().ok_or(())?)?,
            "--role" => set_once(&mut options.role, args.next().ok_or(())?)?,
            "--conversation" => set_once(&mut options.conversation, args.next().ok_or(())?)?,
            "--fragment" => set_once(&mut options.fragment, args.next().ok_or(())?)?,
            _ if arg.starts_with('-') => return Err(()),
            _ => set_once(&mut options.document, arg)?,
        }
    }

    if options.demo && options.document.is_some() {
        return Err(());
    }
    if options.schema {
        let standalone = CliOptions {
            schema: true,
            ..CliOptions::default()
        };
        if options != standalone {
            return Err(());
        }
    } else if !options.demo && options.document.is_none() {
        return Err(());
    }

    Ok(options)
}

fn focus_from_options(book: &Book, options: &CliOptions) -> Result<Focus, Box<dyn Error>> {
    let mut focus = Focus::default();
    if let Some(room) = &options.room {
        focus.select(FocusSelect::Room(room.parse()?));
    }
    if let Some(role) = &options.role {
        focus.select(FocusSelect::Role(role.parse()?));
    }
    if let Some(conversation) = &options.conversation {
        focus.select(FocusSelect::Conversation(conversation.parse()?));
    }
    if let Some(fragment) = &options.fragment {
        if let Some(requested) = focus_for_fragment(book, fragment) {
            if let Some(conversation) = requested.focus.conversation() {
                focus.select(FocusSelect::Conversation(conversation.clone()));
            }
        }
    }
    Ok(focus)
}

fn run(options: &CliOptions) -> Result<(), Box<dyn Error>> {
    if options.schema {
        println!("{}", serde_json::to_string_pretty(&document_schema())?);
        return Ok(());
    }

    let document = match &options.document {
        Some(path) => load_document(Path::new(path))?,
        None => demo_document(),
    };
    let book = build_book(&document)?;

    let focus = focus_from_options(&book, options)?;
    let highlight = options
        .fragment
        .as_deref()
        .and_then(|fragment| focus_for_fragment(&book, fragment))
        .map(|requested| requested.highlight);

    let conversations = filtered_conversations(&book, &focus);
    let layout = grouped_layout(&book, &conversations);
    let script_html = render_page(
        "Script",
        &render_script(&book, &layout, highlight.as_ref()),
    );

    match &options.out {
        Some(out) => {
            let out_dir = PathBuf::from(out);
            let summary_html = render_page("Script Summary", &render_summary(&book, "script.html"));
            write_page(&out_dir.join("index.html"), &summary_html)?;
            write_page(&out_dir.join("script.html"), &script_html)?;
        }
        None => print!("{script_html}"),
    }

    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "scriptbook".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&options) {
        eprintln!("scriptbook: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_document_with_focus_flags() {
        let options = parse(&["script.json", "--room", "room-lamp", "--role", "role-gull"])
            .expect("options");
        assert_eq!(options.document.as_deref(), Some("script.json"));
        assert_eq!(options.room.as_deref(), Some("room-lamp"));
        assert_eq!(options.role.as_deref(), Some("role-gull"));
        assert!(!options.demo);
    }

    #[test]
    fn rejects_demo_combined_with_document() {
        assert_eq!(parse(&["--demo", "script.json"]), Err(()));
    }

    #[test]
    fn rejects_duplicate_flags() {
        assert_eq!(parse(&["script.json", "--out", "a", "--out", "b"]), Err(()));
    }

    #[test]
    fn rejects_missing_document_without_demo() {
        assert_eq!(parse(&["--room", "room-lamp"]), Err(()));
    }

    #[test]
    fn schema_must_stand_alone() {
        assert!(parse(&["--schema"]).is_ok());
        assert_eq!(parse(&["--schema", "script.json"]), Err(()));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert_eq!(parse(&["--nope"]), Err(()));
    }
}
