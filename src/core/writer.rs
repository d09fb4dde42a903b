//! TS document writer.
//!
//! Emits the layout `lupdate` produces: contexts unindented, four spaces per
//! nesting level below, one element per line, trailing newline. Documents
//! already in that layout are reproduced byte for byte.

use std::borrow::Cow;
use std::fmt::Write;

use quick_xml::escape::escape;

use super::model::{TranslationEntry, TsContext, TsDocument};

const INDENT: &str = "    ";

/// Serialize a document to TS text.
pub fn to_string(document: &TsDocument) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS");
    for (key, value) in [
        ("version", &document.version),
        ("language", &document.language),
        ("sourcelanguage", &document.source_language),
    ] {
        if let Some(value) = value {
            let _ = write!(out, " {}=\"{}\"", key, escape(value.as_str()));
        }
    }
    out.push_str(">\n");

    for context in &document.contexts {
        write_context(&mut out, context);
    }

    out.push_str("</TS>\n");
    out
}

fn write_context(out: &mut String, context: &TsContext) {
    out.push_str("<context>\n");
    let _ = writeln!(out, "{}<name>{}</name>", INDENT, escape(context.name.as_str()));
    for message in &context.messages {
        write_message(out, message);
    }
    out.push_str("</context>\n");
}

fn write_message(out: &mut String, entry: &TranslationEntry) {
    if entry.numerus {
        let _ = writeln!(out, "{}<message numerus=\"yes\">", INDENT);
    } else {
        let _ = writeln!(out, "{}<message>", INDENT);
    }

    let inner = INDENT.repeat(2);
    for location in &entry.locations {
        let _ = write!(
            out,
            "{}<location filename=\"{}\"",
            inner,
            escape(location.filename.as_str())
        );
        if let Some(line) = location.line {
            let _ = write!(out, " line=\"{}\"", line);
        }
        out.push_str("/>\n");
    }

    write_text_element(out, &inner, "source", &entry.source);
    if let Some(comment) = &entry.comment {
        write_text_element(out, &inner, "comment", comment);
    }
    if let Some(comment) = &entry.extra_comment {
        write_text_element(out, &inner, "extracomment", comment);
    }
    if let Some(comment) = &entry.translator_comment {
        write_text_element(out, &inner, "translatorcomment", comment);
    }

    let type_attr = entry
        .kind
        .attribute()
        .map(|kind| format!(" type=\"{}\"", kind))
        .unwrap_or_default();

    if entry.numerus {
        let _ = writeln!(out, "{}<translation{}>", inner, type_attr);
        let form_indent = INDENT.repeat(3);
        for form in &entry.numerus_forms {
            write_text_element(out, &form_indent, "numerusform", form);
        }
        let _ = writeln!(out, "{}</translation>", inner);
    } else if entry.translation.is_empty() {
        let _ = writeln!(out, "{}<translation{}/>", inner, type_attr);
    } else {
        let _ = writeln!(
            out,
            "{}<translation{}>{}</translation>",
            inner,
            type_attr,
            escape_text(&entry.translation)
        );
    }

    let _ = writeln!(out, "{}</message>", INDENT);
}

fn write_text_element(out: &mut String, indent: &str, tag: &str, text: &str) {
    let _ = writeln!(out, "{}<{}>{}</{}>", indent, tag, escape_text(text), tag);
}

/// Escape markup characters. Control characters XML 1.0 cannot carry are
/// written as Qt's `<byte value="xN"/>` elements.
fn escape_text(text: &str) -> Cow<'_, str> {
    let escaped = escape(text);
    if !escaped.chars().any(needs_byte_element) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 16);
    for ch in escaped.chars() {
        if needs_byte_element(ch) {
            let _ = write!(out, "<byte value=\"x{:x}\"/>", ch as u32);
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

fn needs_byte_element(ch: char) -> bool {
    ch.is_ascii_control() && !matches!(ch, '\t' | '\n' | '\r')
}
