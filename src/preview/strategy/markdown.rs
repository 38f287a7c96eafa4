// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Markdown to styled terminal text.
//!
//! Diagram fences are swapped for their ASCII rendering before the document is parsed, so the
//! art flows through the normal code-block path as a `text` fence.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};
use syntect::easy::HighlightLines;
use syntect::util::as_24_bit_terminal_escaped;
use unicode_width::UnicodeWidthStr;

use crate::render::render_diagram_embedded;

use super::syntax::{resolve_theme, syntax_set};
use super::{paint, SGR_RESET};

const MIN_WRAP: usize = 24;
const FENCE: &str = "```";
const DIAGRAM_LANGUAGE: &str = "mermaid";
pub const UNPARSED_DIAGRAM_NOTE: &str = "_Diagram block: no diagram content parsed._";

const QUOTE_PREFIX: &str = "│ ";
const CODE_INDENT: &str = "  ";
const MAX_RULE_WIDTH: usize = 64;

const MUTED_STYLE: &str = "90";
const CODE_STYLE: &str = "38;5;229";
const LINK_STYLE: &str = "4;36";
const IMAGE_STYLE: &str = "94";
const TABLE_HEAD_STYLE: &str = "1;33";

fn is_diagram_opener(trimmed: &str) -> bool {
    trimmed
        .strip_prefix(FENCE)
        .is_some_and(|lang| lang.trim().eq_ignore_ascii_case(DIAGRAM_LANGUAGE))
}

fn push_rendered_diagram(out: &mut Vec<String>, source: &str) {
    out.push(String::new());
    match render_diagram_embedded(source) {
        Some(art) => {
            out.push(format!("{FENCE}text"));
            out.push(art);
            out.push(FENCE.to_owned());
        }
        None => {
            out.push(UNPARSED_DIAGRAM_NOTE.to_owned());
            out.push(String::new());
            out.push(format!("{FENCE}text"));
            out.push(source.to_owned());
            out.push(FENCE.to_owned());
        }
    }
    out.push(String::new());
}

/// Replaces every diagram fence with a `text` fence holding its rendering.
///
/// Empty diagram fences disappear; an unterminated one is re-emitted as written.
pub fn replace_diagram_fences(markdown: &str) -> String {
    let mut out = Vec::new();
    let mut opener: Option<&str> = None;
    let mut block = String::new();

    for line in markdown.split('\n') {
        let trimmed = line.trim();
        match opener {
            None if is_diagram_opener(trimmed) => {
                opener = Some(line);
                block.clear();
            }
            None => out.push(line.to_owned()),
            Some(_) if trimmed.starts_with(FENCE) => {
                let source = block.trim();
                if !source.is_empty() {
                    push_rendered_diagram(&mut out, source);
                }
                opener = None;
            }
            Some(_) => {
                block.push_str(line);
                block.push('\n');
            }
        }
    }

    if let Some(line) = opener {
        out.push(line.to_owned());
        out.push(block.trim_end_matches('\n').to_owned());
    }
    out.join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Open {
    Paragraph,
    Heading,
    BlockQuote,
    List,
    Item,
    CodeBlock,
    Emphasis,
    Strong,
    Strikethrough,
    Link(String),
    Image(String),
    Table,
    TableHead,
    TableRow,
    TableCell,
    Other,
}

#[derive(Debug, Clone, Copy)]
struct ListState {
    ordered: bool,
    next: u64,
}

#[derive(Debug, Default)]
struct TableState {
    rows: Vec<Vec<String>>,
    header_rows: usize,
    cell: String,
}

struct MarkdownRenderer {
    wrap: usize,
    theme: String,
    lines: Vec<String>,

    current: String,
    /// SGR codes of the styled run still open on `current`.
    run_style: String,
    col: usize,
    line_start: usize,
    started: bool,
    pending_space: bool,

    open: Vec<Open>,
    quote_depth: usize,
    lists: Vec<ListState>,
    item_indent: Vec<usize>,
    heading: Option<u8>,

    code: Option<(String, String)>,
    table: Option<TableState>,
    image_alt: String,
    link_text: String,
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn heading_style(depth: u8) -> &'static str {
    match depth {
        1 => "1;33",
        2 => "1;35",
        _ => "1;36",
    }
}

impl MarkdownRenderer {
    fn new(wrap: usize, theme: &str) -> Self {
        Self {
            wrap,
            theme: theme.to_owned(),
            lines: Vec::new(),
            current: String::new(),
            run_style: String::new(),
            col: 0,
            line_start: 0,
            started: false,
            pending_space: false,
            open: Vec::new(),
            quote_depth: 0,
            lists: Vec::new(),
            item_indent: Vec::new(),
            heading: None,
            code: None,
            table: None,
            image_alt: String::new(),
            link_text: String::new(),
        }
    }

    fn inline_style(&self) -> String {
        if let Some(depth) = self.heading {
            return heading_style(depth).to_owned();
        }
        let mut codes: Vec<&str> = Vec::new();
        for open in &self.open {
            let code = match open {
                Open::Strong => "1",
                Open::Emphasis => "3",
                Open::Strikethrough => "9",
                Open::Link(_) => LINK_STYLE,
                _ => continue,
            };
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        codes.join(";")
    }

    fn line_prefix(&self) -> String {
        let indent: usize = self.item_indent.iter().sum();
        let mut prefix = paint(&QUOTE_PREFIX.repeat(self.quote_depth), MUTED_STYLE);
        prefix.push_str(&" ".repeat(indent));
        prefix
    }

    fn ensure_line(&mut self) {
        if self.started {
            return;
        }
        let indent: usize = self.item_indent.iter().sum();
        self.current = self.line_prefix();
        self.col = QUOTE_PREFIX.width() * self.quote_depth + indent;
        self.line_start = self.col;
        self.started = true;
        self.pending_space = false;
    }

    /// Writes `text` into the open run, switching escapes only when the style changes.
    fn emit(&mut self, text: &str, sgr: &str) {
        if self.run_style != sgr {
            self.close_run();
            if !sgr.is_empty() {
                self.current.push_str(&format!("\x1b[{sgr}m"));
            }
            self.run_style = sgr.to_owned();
        }
        self.current.push_str(text);
    }

    fn close_run(&mut self) {
        if !self.run_style.is_empty() {
            self.current.push_str(SGR_RESET);
            self.run_style.clear();
        }
    }

    fn flush(&mut self) {
        self.close_run();
        if self.started {
            self.lines.push(std::mem::take(&mut self.current));
            self.started = false;
            self.col = 0;
        }
        self.pending_space = false;
    }

    fn blank_line(&mut self) {
        self.flush();
        if self.lines.last().is_some_and(|line| !line.is_empty()) {
            self.lines.push(String::new());
        }
    }

    /// Appends text word by word, wrapping at `self.wrap` columns.
    fn push_words(&mut self, text: &str, sgr: &str) {
        for (idx, word) in text.split(' ').enumerate() {
            if idx > 0 {
                self.pending_space = true;
            }
            if word.is_empty() {
                continue;
            }

            self.ensure_line();
            let width = word.width();
            let space = usize::from(self.pending_space && self.col > self.line_start);
            if self.col > self.line_start && self.col + space + width > self.wrap {
                self.flush();
                self.ensure_line();
            } else if space == 1 {
                let style = if self.run_style == sgr { sgr } else { "" };
                self.emit(" ", style);
                self.col += 1;
            }
            self.pending_space = false;
            self.emit(word, sgr);
            self.col += width;
        }
    }

    /// Appends text as a single unbreakable run.
    fn push_run(&mut self, text: &str, sgr: &str) {
        self.ensure_line();
        if self.pending_space && self.col > self.line_start {
            let style = if self.run_style == sgr { sgr } else { "" };
            self.emit(" ", style);
            self.col += 1;
        }
        self.pending_space = false;
        self.emit(text, sgr);
        self.col += text.width();
    }

    fn in_table_cell(&self) -> bool {
        self.table.is_some() && self.open.contains(&Open::TableCell)
    }

    fn start(&mut self, tag: Tag<'_>) {
        let open = match tag {
            Tag::Paragraph => Open::Paragraph,
            Tag::Heading { level, .. } => {
                self.blank_line_if_content();
                let depth = heading_depth(level);
                self.heading = Some(depth);
                self.push_run(&"#".repeat(depth as usize), heading_style(depth));
                self.pending_space = true;
                Open::Heading
            }
            Tag::BlockQuote(_) => {
                self.flush();
                self.quote_depth += 1;
                Open::BlockQuote
            }
            Tag::CodeBlock(kind) => {
                self.flush();
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().unwrap_or_default().to_owned()
                    }
                    CodeBlockKind::Indented => String::new(),
                };
                self.code = Some((lang, String::new()));
                Open::CodeBlock
            }
            Tag::List(start) => {
                self.flush();
                self.lists.push(match start {
                    Some(first) => ListState { ordered: true, next: first },
                    None => ListState { ordered: false, next: 1 },
                });
                Open::List
            }
            Tag::Item => {
                self.flush();
                let bullet = match self.lists.last_mut() {
                    Some(list) if list.ordered => {
                        let bullet = format!("{}. ", list.next);
                        list.next += 1;
                        bullet
                    }
                    _ => "- ".to_owned(),
                };
                self.ensure_line();
                self.current.push_str(&paint(&bullet, MUTED_STYLE));
                self.col += bullet.width();
                self.line_start = self.col;
                self.item_indent.push(bullet.width());
                Open::Item
            }
            Tag::Emphasis => Open::Emphasis,
            Tag::Strong => Open::Strong,
            Tag::Strikethrough => Open::Strikethrough,
            Tag::Link { dest_url, .. } => {
                self.link_text.clear();
                Open::Link(dest_url.to_string())
            }
            Tag::Image { dest_url, .. } => {
                self.image_alt.clear();
                Open::Image(dest_url.to_string())
            }
            Tag::Table(_) => {
                self.flush();
                self.table = Some(TableState::default());
                Open::Table
            }
            Tag::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.rows.push(Vec::new());
                }
                Open::TableHead
            }
            Tag::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    table.rows.push(Vec::new());
                }
                Open::TableRow
            }
            Tag::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    table.cell.clear();
                }
                Open::TableCell
            }
            _ => Open::Other,
        };
        self.open.push(open);
    }

    fn blank_line_if_content(&mut self) {
        if self.started || !self.lines.is_empty() {
            self.blank_line();
        }
    }

    fn end(&mut self) {
        let Some(open) = self.open.pop() else {
            return;
        };
        match open {
            Open::Paragraph => self.blank_line(),
            Open::Heading => {
                self.heading = None;
                self.blank_line();
            }
            Open::BlockQuote => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.blank_line();
            }
            Open::List => {
                self.flush();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            Open::Item => {
                self.flush();
                self.item_indent.pop();
            }
            Open::CodeBlock => {
                if let Some((lang, code)) = self.code.take() {
                    self.render_code_block(&lang, &code);
                }
                self.blank_line();
            }
            Open::Link(target) => {
                if !target.is_empty() && self.link_text.trim() != target {
                    self.pending_space = true;
                    self.push_run(&format!("({target})"), MUTED_STYLE);
                }
            }
            Open::Image(target) => {
                let alt = self.image_alt.trim();
                let alt = if alt.is_empty() { "image" } else { alt };
                let placeholder = format!("[image: {alt}] ({target})");
                self.push_words(&placeholder, IMAGE_STYLE);
            }
            Open::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.header_rows = table.rows.len();
                }
            }
            Open::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    let cell = table.cell.trim().to_owned();
                    if let Some(row) = table.rows.last_mut() {
                        row.push(cell);
                    }
                }
            }
            Open::Table => {
                if let Some(table) = self.table.take() {
                    self.render_table(&table);
                }
                self.blank_line();
            }
            Open::Emphasis | Open::Strong | Open::Strikethrough => {}
            Open::TableRow | Open::Other => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some((_, code)) = self.code.as_mut() {
            code.push_str(text);
            return;
        }
        if self.in_table_cell() {
            if let Some(table) = self.table.as_mut() {
                table.cell.push_str(text);
            }
            return;
        }
        if self.open.iter().any(|open| matches!(open, Open::Image(_))) {
            self.image_alt.push_str(text);
            return;
        }
        if self.open.iter().any(|open| matches!(open, Open::Link(_))) {
            self.link_text.push_str(text);
        }

        let style = self.inline_style();
        for (idx, segment) in text.split('\n').enumerate() {
            if idx > 0 {
                self.pending_space = true;
            }
            self.push_words(segment, &style);
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.in_table_cell() {
            if let Some(table) = self.table.as_mut() {
                table.cell.push_str(code);
            }
            return;
        }
        self.push_run(code, CODE_STYLE);
    }

    fn soft_break(&mut self) {
        if self.in_table_cell() {
            if let Some(table) = self.table.as_mut() {
                table.cell.push(' ');
            }
            return;
        }
        self.pending_space = true;
    }

    fn hard_break(&mut self) {
        self.flush();
    }

    fn rule(&mut self) {
        self.flush();
        let width = self.wrap.min(MAX_RULE_WIDTH);
        self.push_run(&"─".repeat(width), MUTED_STYLE);
        self.blank_line();
    }

    fn task_marker(&mut self, done: bool) {
        self.push_run(if done { "[x]" } else { "[ ]" }, MUTED_STYLE);
        self.pending_space = true;
    }

    fn push_code_line(&mut self, line: &str) {
        self.ensure_line();
        self.current.push_str(CODE_INDENT);
        self.current.push_str(line);
        self.flush();
    }

    fn render_code_block(&mut self, lang: &str, code: &str) {
        let code = code.strip_suffix('\n').unwrap_or(code);
        let syntaxes = syntax_set();
        let syntax = Some(lang)
            .filter(|lang| !lang.is_empty() && !lang.eq_ignore_ascii_case("text"))
            .and_then(|lang| syntaxes.find_syntax_by_token(lang));
        let theme = resolve_theme(&self.theme);

        let (Some(syntax), Some(theme)) = (syntax, theme) else {
            for line in code.split('\n') {
                self.push_code_line(line);
            }
            return;
        };

        let mut highlighter = HighlightLines::new(syntax, theme);
        for line in code.split('\n') {
            let rendered = match highlighter.highlight_line(line, syntaxes) {
                Ok(ranges) => format!("{}{SGR_RESET}", as_24_bit_terminal_escaped(&ranges, false)),
                Err(_) => line.to_owned(),
            };
            self.push_code_line(&rendered);
        }
    }

    fn render_table(&mut self, table: &TableState) {
        let columns = table.rows.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return;
        }

        let mut widths = vec![3usize; columns];
        for row in &table.rows {
            for (idx, cell) in row.iter().enumerate() {
                widths[idx] = widths[idx].max(cell.width());
            }
        }

        let format_row = |row: &[String]| {
            let mut line = String::from("|");
            for (idx, width) in widths.iter().enumerate() {
                let cell = row.get(idx).map(String::as_str).unwrap_or_default();
                let pad = width.saturating_sub(cell.width());
                line.push(' ');
                line.push_str(cell);
                line.push_str(&" ".repeat(pad));
                line.push_str(" |");
            }
            line
        };

        for (idx, row) in table.rows.iter().enumerate() {
            let is_header = idx < table.header_rows;
            self.ensure_line();
            let line = format_row(row);
            self.current.push_str(&paint(&line, if is_header { TABLE_HEAD_STYLE } else { "" }));
            self.flush();

            if is_header && idx + 1 == table.header_rows {
                let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
                self.ensure_line();
                self.current.push_str(&paint(&format_row(&separator), MUTED_STYLE));
                self.flush();
            }
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        while self.lines.last().is_some_and(|line| line.is_empty()) {
            self.lines.pop();
        }
        self.lines.join("\n")
    }
}

/// Renders `markdown` for a pane `width` columns wide; paragraphs wrap at `max(24, width - 2)`.
pub fn render_markdown(markdown: &str, width: u16, theme: &str) -> String {
    let prepared = replace_diagram_fences(markdown);
    let wrap = (width as usize).saturating_sub(2).max(MIN_WRAP);

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut renderer = MarkdownRenderer::new(wrap, theme);
    for event in Parser::new_ext(&prepared, options) {
        match event {
            Event::Start(tag) => renderer.start(tag),
            Event::End(_) => renderer.end(),
            Event::Text(text) => renderer.text(&text),
            Event::Code(code) => renderer.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => renderer.text(&html),
            Event::FootnoteReference(name) => renderer.push_run(&format!("[^{name}]"), ""),
            Event::SoftBreak => renderer.soft_break(),
            Event::HardBreak => renderer.hard_break(),
            Event::Rule => renderer.rule(),
            Event::TaskListMarker(done) => renderer.task_marker(done),
            _ => {}
        }
    }
    renderer.finish()
}
