//! TS document parser.
//!
//! Reads the XML produced by `lupdate` with `quick-xml`'s event reader and
//! builds a [`TsDocument`]. Text content is kept verbatim: a source string of
//! `" step(s)"` keeps its leading space.
//!
//! Malformed input fails fast with a [`ParseError`] carrying the 1-based line
//! and column of the offending markup.

use std::{borrow::Cow, fmt, fs, path::Path};

use anyhow::{Context, Result};
use log::debug;
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use super::model::{Location, TranslationEntry, TranslationType, TsContext, TsDocument};

/// A TS document could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.file_path.is_empty() {
            "<input>"
        } else {
            &self.file_path
        };
        write!(
            f,
            "{}:{}:{}: {}",
            path, self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Parse a TS file from disk.
pub fn parse_file(path: &Path) -> Result<TsDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read TS file: {:?}", path))?;
    let document = parse_str(&content, &path.to_string_lossy())?;
    debug!(
        "parsed {:?}: {} context(s), {} message(s)",
        path,
        document.contexts.len(),
        document.entry_count()
    );
    Ok(document)
}

/// Parse TS content. `file_path` is only used for diagnostics.
pub fn parse_str(content: &str, file_path: &str) -> Result<TsDocument, ParseError> {
    Parser::new(content, file_path).parse()
}

/// True if the first element of `content` is `<TS>`.
///
/// Tells translation catalogs apart from TypeScript sources, since both use
/// the `.ts` extension.
pub fn is_ts_document(content: &str) -> bool {
    let mut reader = Reader::from_str(content);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) => return e.name().as_ref() == b"TS",
            Ok(Event::Text(e)) if is_whitespace(&e) => {}
            Ok(Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_)) => {}
            _ => return false,
        }
    }
}

/// Element whose text content is being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextTarget {
    ContextName,
    Source,
    Comment,
    ExtraComment,
    TranslatorComment,
    Translation,
    NumerusForm,
}

impl TextTarget {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"source" => Some(TextTarget::Source),
            b"comment" => Some(TextTarget::Comment),
            b"extracomment" => Some(TextTarget::ExtraComment),
            b"translatorcomment" => Some(TextTarget::TranslatorComment),
            b"translation" => Some(TextTarget::Translation),
            _ => None,
        }
    }
}

/// Partially read `<message>`.
#[derive(Debug, Default)]
struct PendingMessage {
    entry: TranslationEntry,
    has_source: bool,
    /// Offset of the `<message>` start tag, for "missing source" errors.
    offset: usize,
}

struct Parser<'a> {
    content: &'a str,
    file_path: &'a str,
    reader: Reader<&'a [u8]>,
    /// Byte offsets where each line starts.
    line_index: Vec<usize>,
    document: TsDocument,
    seen_root: bool,
    root_closed: bool,
    context: Option<(TsContext, Option<usize>)>,
    message: Option<PendingMessage>,
    text_target: Option<TextTarget>,
    text: String,
}

impl<'a> Parser<'a> {
    fn new(content: &'a str, file_path: &'a str) -> Self {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(false);
        Self {
            content,
            file_path,
            reader,
            line_index: build_line_index(content),
            document: TsDocument {
                file_path: file_path.to_string(),
                ..Default::default()
            },
            seen_root: false,
            root_closed: false,
            context: None,
            message: None,
            text_target: None,
            text: String::new(),
        }
    }

    fn parse(mut self) -> Result<TsDocument, ParseError> {
        loop {
            let start = self.reader.buffer_position() as usize;
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(err) => {
                    let offset = self.reader.error_position() as usize;
                    return Err(self.error_at(offset, format!("malformed XML: {}", err)));
                }
            };

            match event {
                Event::Start(e) => self.open(&e, start, false)?,
                Event::Empty(e) => {
                    self.open(&e, start, true)?;
                }
                Event::End(e) => self.close(e.name().as_ref(), start)?,
                Event::Text(e) => {
                    if self.text_target.is_some() {
                        let text = e.unescape().map_err(|err| {
                            self.error_at(start, format!("invalid character data: {}", err))
                        })?;
                        self.text.push_str(&text);
                    } else if !is_whitespace(&e) && self.seen_root {
                        return Err(self.error_at(start, "unexpected text content".to_string()));
                    }
                }
                Event::CData(e) => {
                    if self.text_target.is_some() {
                        let text = std::str::from_utf8(&e).map_err(|err| {
                            self.error_at(start, format!("invalid UTF-8 in CDATA: {}", err))
                        })?;
                        self.text.push_str(text);
                    }
                }
                Event::Eof => break,
                // Declaration, doctype, comments and processing instructions
                _ => {}
            }
        }

        if !self.seen_root {
            return Err(self.error_at(self.content.len(), "missing <TS> root element".into()));
        }
        if !self.root_closed {
            return Err(self.error_at(
                self.content.len(),
                "unexpected end of file, <TS> is not closed".into(),
            ));
        }
        Ok(self.document)
    }

    fn open(&mut self, e: &BytesStart<'_>, offset: usize, empty: bool) -> Result<(), ParseError> {
        let name = e.name();
        let tag = name.as_ref();

        if !self.seen_root {
            if tag != b"TS" {
                return Err(self.error_at(
                    offset,
                    format!("expected <TS> root element, found <{}>", tag_name(tag)),
                ));
            }
            self.seen_root = true;
            self.root_closed = empty;
            self.document.version = self.attribute(e, b"version", offset)?;
            self.document.language = self.attribute(e, b"language", offset)?;
            self.document.source_language = self.attribute(e, b"sourcelanguage", offset)?;
            return Ok(());
        }

        if self.text_target.is_some() {
            // Qt encodes control characters as <byte value="..."/>; nothing else
            // may appear inside text elements.
            if tag == b"byte" {
                return self.push_byte(e, offset);
            }
            return Err(self.error_at(
                offset,
                format!("unexpected <{}> inside text element", tag_name(tag)),
            ));
        }

        match tag {
            b"context" => {
                if self.context.is_some() {
                    return Err(self.error_at(offset, "nested <context>".into()));
                }
                self.context = Some((TsContext::default(), None));
            }
            b"name" if self.context.is_some() && self.message.is_none() => {
                self.begin_text(TextTarget::ContextName, empty);
                if let Some((_, name_offset)) = self.context.as_mut() {
                    *name_offset = Some(offset);
                }
            }
            b"message" => {
                let Some((ctx, _)) = self.context.as_ref() else {
                    return Err(self.error_at(offset, "<message> outside of <context>".into()));
                };
                if ctx.name.is_empty() && self.context_name_missing() {
                    return Err(self.error_at(offset, "<message> before context <name>".into()));
                }
                if self.message.is_some() {
                    return Err(self.error_at(offset, "nested <message>".into()));
                }
                let numerus = self.attribute(e, b"numerus", offset)?.as_deref() == Some("yes");
                let (line, _) = offset_to_line_col(self.content, &self.line_index, offset);
                let mut entry = TranslationEntry {
                    context: ctx.name.clone(),
                    line,
                    ..Default::default()
                };
                entry.numerus = numerus;
                self.message = Some(PendingMessage {
                    entry,
                    has_source: false,
                    offset,
                });
            }
            b"location" => {
                if self.message.is_none() {
                    return Err(self.error_at(offset, "<location> outside of <message>".into()));
                }
                let location = self.location(e, offset)?;
                if let Some(msg) = self.message.as_mut() {
                    msg.entry.locations.push(location);
                }
            }
            b"numerusform" => {
                let in_translation = self
                    .message
                    .as_ref()
                    .is_some_and(|msg| msg.entry.numerus);
                if !in_translation {
                    return Err(
                        self.error_at(offset, "<numerusform> outside of a numerus message".into())
                    );
                }
                self.begin_text(TextTarget::NumerusForm, empty);
            }
            _ => {
                let Some(target) = TextTarget::from_tag(tag) else {
                    // Unknown elements (e.g. <oldsource>, <userdata>) are skipped
                    // together with their content.
                    if !empty {
                        self.reader.read_to_end(name).map_err(|err| {
                            self.error_at(offset, format!("malformed XML: {}", err))
                        })?;
                    }
                    return Ok(());
                };
                if self.message.is_none() {
                    return Err(self.error_at(
                        offset,
                        format!("<{}> outside of <message>", tag_name(tag)),
                    ));
                }
                if target == TextTarget::Translation {
                    let kind = match self.attribute(e, b"type", offset)? {
                        Some(value) => TranslationType::from_attribute(&value).ok_or_else(|| {
                            self.error_at(offset, format!("unknown translation type '{}'", value))
                        })?,
                        None => TranslationType::Finished,
                    };
                    if let Some(msg) = self.message.as_mut() {
                        msg.entry.kind = kind;
                    }
                    let numerus = self.message.as_ref().is_some_and(|msg| msg.entry.numerus);
                    if numerus {
                        // Forms follow as <numerusform> children.
                        return Ok(());
                    }
                }
                if target == TextTarget::Source
                    && let Some(msg) = self.message.as_mut()
                {
                    msg.has_source = true;
                }
                self.begin_text(target, empty);
            }
        }
        Ok(())
    }

    fn close(&mut self, tag: &[u8], offset: usize) -> Result<(), ParseError> {
        if let Some(target) = self.text_target {
            if tag == b"byte" {
                return Ok(());
            }
            self.end_text(target);
            return Ok(());
        }

        match tag {
            b"message" => {
                let Some(pending) = self.message.take() else {
                    return Ok(());
                };
                if !pending.has_source {
                    return Err(self.error_at(pending.offset, "<message> without <source>".into()));
                }
                if let Some((ctx, _)) = self.context.as_mut() {
                    ctx.messages.push(pending.entry);
                }
            }
            b"context" => {
                if let Some((ctx, name_offset)) = self.context.take() {
                    if name_offset.is_none() {
                        return Err(self.error_at(offset, "<context> without <name>".into()));
                    }
                    self.document.contexts.push(ctx);
                }
            }
            b"TS" => self.root_closed = true,
            _ => {}
        }
        Ok(())
    }

    fn begin_text(&mut self, target: TextTarget, empty: bool) {
        self.text.clear();
        self.text_target = Some(target);
        if empty {
            self.end_text(target);
        }
    }

    fn end_text(&mut self, target: TextTarget) {
        let text = std::mem::take(&mut self.text);
        self.text_target = None;

        if target == TextTarget::ContextName {
            if let Some((ctx, _)) = self.context.as_mut() {
                ctx.name = text;
            }
            return;
        }

        let Some(msg) = self.message.as_mut() else {
            return;
        };
        let entry = &mut msg.entry;
        match target {
            TextTarget::Source => entry.source = text,
            TextTarget::Comment => entry.comment = Some(text),
            TextTarget::ExtraComment => entry.extra_comment = Some(text),
            TextTarget::TranslatorComment => entry.translator_comment = Some(text),
            TextTarget::Translation => entry.translation = text,
            TextTarget::NumerusForm => entry.numerus_forms.push(text),
            TextTarget::ContextName => {}
        }
    }

    fn context_name_missing(&self) -> bool {
        matches!(self.context, Some((_, None)))
    }

    fn push_byte(&mut self, e: &BytesStart<'_>, offset: usize) -> Result<(), ParseError> {
        let value = self
            .attribute(e, b"value", offset)?
            .ok_or_else(|| self.error_at(offset, "<byte> without value".into()))?;
        let code = match value.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => value.parse::<u32>().ok(),
        };
        let ch = code
            .and_then(char::from_u32)
            .ok_or_else(|| self.error_at(offset, format!("invalid byte value '{}'", value)))?;
        self.text.push(ch);
        Ok(())
    }

    fn location(&self, e: &BytesStart<'_>, offset: usize) -> Result<Location, ParseError> {
        let filename = self.attribute(e, b"filename", offset)?.unwrap_or_default();
        let line = match self.attribute(e, b"line", offset)? {
            Some(value) => Some(value.parse::<usize>().map_err(|_| {
                self.error_at(offset, format!("invalid location line '{}'", value))
            })?),
            None => None,
        };
        Ok(Location { filename, line })
    }

    fn attribute(
        &self,
        e: &BytesStart<'_>,
        key: &[u8],
        offset: usize,
    ) -> Result<Option<String>, ParseError> {
        for attr in e.attributes() {
            let attr = attr
                .map_err(|err| self.error_at(offset, format!("malformed attribute: {}", err)))?;
            if attr.key.as_ref() == key {
                let value: Cow<'_, str> = attr
                    .unescape_value()
                    .map_err(|err| self.error_at(offset, format!("invalid attribute: {}", err)))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    fn error_at(&self, offset: usize, message: String) -> ParseError {
        let (line, column) = offset_to_line_col(self.content, &self.line_index, offset);
        ParseError {
            file_path: self.file_path.to_string(),
            line,
            column,
            message,
        }
    }
}

fn is_whitespace(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| b.is_ascii_whitespace())
}

fn tag_name(tag: &[u8]) -> String {
    String::from_utf8_lossy(tag).into_owned()
}

/// Build an index of line start byte offsets for O(log n) line lookups.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Map a byte offset to a 1-based (line, column) pair.
fn offset_to_line_col(content: &str, line_index: &[usize], offset: usize) -> (usize, usize) {
    let offset = offset.min(content.len());
    let line = match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    };
    let line_start = line_index[line - 1];
    let column = content
        .get(line_start..offset)
        .map(|prefix| prefix.chars().count() + 1)
        .unwrap_or(1);
    (line, column)
}
