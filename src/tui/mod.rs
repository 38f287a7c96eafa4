// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive shell (ratatui + crossterm): a file list on the left, the preview on the
//! right, a status bar at the bottom. Every selection change goes through the preview
//! pipeline; renders run on the [`PreviewWorker`] and are drained once per tick.

use std::{
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use ansi_to_tui::IntoText as _;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::config::Settings;
use crate::model::{SelectedEntry, Viewport};
use crate::preview::{PreviewJob, PreviewOptions, PreviewPipeline, PreviewResult, PreviewWorker};

pub mod listing;

use listing::{ListEntry, Listing};

const TICK: Duration = Duration::from_millis(50);
const LOADING_TEXT: &str = "loading preview…";
const EMPTY_TEXT: &str = "(no preview available)";
const DIR_COLOR: Color = Color::LightBlue;
const SELECTED_BG: Color = Color::DarkGray;
const STATUS_FG: Color = Color::Gray;
const FILTER_COLOR: Color = Color::Yellow;

/// Runs the interactive terminal UI until the user quits.
pub fn run(settings: &Settings, mut worker: PreviewWorker) -> io::Result<()> {
    let mut app = App::new(settings)?;
    let mut terminal = TerminalSession::new()?;

    let size = terminal.size()?;
    if let Some(job) = app.resize(size.width, size.height) {
        worker.dispatch(job);
    }

    while !app.should_quit {
        while let Some(result) = worker.try_recv() {
            app.deliver(result);
        }
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(TICK)? {
            let job = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(width, height) => app.resize(width, height),
                _ => None,
            };
            if let Some(job) = job {
                worker.dispatch(job);
            }
        }
    }
    Ok(())
}

/// Control-loop state: the listing, the selection and the preview pipeline.
pub struct App {
    listing: Listing,
    visible: Vec<usize>,
    selected: usize,
    show_hidden: bool,
    filter: String,
    filter_editing: bool,
    viewport: Viewport,
    pipeline: PreviewPipeline,
    preview_text: Text<'static>,
    preview_offset: usize,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(settings: &Settings) -> io::Result<Self> {
        let listing = Listing::read(&settings.root)?;
        let options = PreviewOptions::new(settings.syntax_theme.clone());
        let mut app = Self {
            listing,
            visible: Vec::new(),
            selected: 0,
            show_hidden: settings.show_hidden,
            filter: String::new(),
            filter_editing: false,
            viewport: preview_viewport(80, 24),
            pipeline: PreviewPipeline::new(settings.cache_capacity, options),
            preview_text: Text::default(),
            preview_offset: 0,
            status: None,
            should_quit: false,
        };
        app.refresh_visible(None);
        Ok(app)
    }

    pub fn cwd(&self) -> &Path {
        self.listing.dir()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn pipeline(&self) -> &PreviewPipeline {
        &self.pipeline
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn preview_offset(&self) -> usize {
        self.preview_offset
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &ListEntry> {
        self.visible.iter().filter_map(|idx| self.listing.entries().get(*idx))
    }

    pub fn selected_entry(&self) -> Option<&ListEntry> {
        self.visible.get(self.selected).and_then(|idx| self.listing.entries().get(*idx))
    }

    fn selected_name(&self) -> Option<String> {
        self.selected_entry().map(|entry| entry.name().to_owned())
    }

    /// Recomputes the visible rows, keeping the selection on `keep` when it is still shown.
    fn refresh_visible(&mut self, keep: Option<&str>) {
        self.visible = self.listing.visible(self.show_hidden, &self.filter);
        let kept = keep.and_then(|name| {
            self.visible.iter().position(|idx| self.listing.entries()[*idx].name() == name)
        });
        self.selected = kept.unwrap_or(0).min(self.visible.len().saturating_sub(1));
    }

    /// Asks the pipeline for the current selection and resets the scroll offset.
    pub fn request_preview(&mut self) -> Option<PreviewJob> {
        self.preview_offset = 0;
        let entry: Option<SelectedEntry> = self.selected_entry().map(|row| row.entry().clone());
        let job = self.pipeline.request(entry.as_ref(), self.viewport);
        self.sync_preview_text();
        job
    }

    pub fn deliver(&mut self, result: PreviewResult) {
        self.pipeline.deliver(result);
        self.sync_preview_text();
    }

    fn sync_preview_text(&mut self) {
        let content = self.pipeline.state().content();
        self.preview_text = content
            .as_bytes()
            .into_text()
            .unwrap_or_else(|_| Text::raw(content.to_owned()));
        self.clamp_preview_offset();
    }

    fn clamp_preview_offset(&mut self) {
        let max = self.preview_text.lines.len().saturating_sub(1);
        self.preview_offset = self.preview_offset.min(max);
    }

    pub fn resize(&mut self, width: u16, height: u16) -> Option<PreviewJob> {
        self.viewport = preview_viewport(width, height);
        self.request_preview()
    }

    fn select(&mut self, idx: usize) -> Option<PreviewJob> {
        let idx = idx.min(self.visible.len().saturating_sub(1));
        if idx == self.selected {
            return None;
        }
        self.selected = idx;
        self.request_preview()
    }

    fn change_dir(&mut self, dir: PathBuf, keep: Option<String>) -> Option<PreviewJob> {
        match Listing::read(&dir) {
            Ok(listing) => {
                let entries = listing.entries().len();
                tracing::info!(dir = %dir.display(), entries, "directory changed");
                self.listing = listing;
                self.filter.clear();
                self.filter_editing = false;
                self.status = None;
                self.refresh_visible(keep.as_deref());
                self.request_preview()
            }
            Err(err) => {
                self.status = Some(format!("cannot open {}: {err}", dir.display()));
                None
            }
        }
    }

    fn enter_selected(&mut self) -> Option<PreviewJob> {
        let target = self.selected_entry().filter(|row| row.is_dir())?.entry().path().to_path_buf();
        self.change_dir(target, None)
    }

    fn go_parent(&mut self) -> Option<PreviewJob> {
        let current = self.cwd().to_path_buf();
        let parent = current.parent()?.to_path_buf();
        let keep = current.file_name().map(|name| name.to_string_lossy().into_owned());
        self.change_dir(parent, keep)
    }

    fn reload(&mut self) -> Option<PreviewJob> {
        let keep = self.selected_name();
        match Listing::read(self.cwd()) {
            Ok(listing) => {
                self.listing = listing;
                self.status = None;
                self.refresh_visible(keep.as_deref());
                self.request_preview()
            }
            Err(err) => {
                self.status = Some(format!("reload failed: {err}"));
                None
            }
        }
    }

    fn toggle_hidden(&mut self) -> Option<PreviewJob> {
        let keep = self.selected_name();
        self.show_hidden = !self.show_hidden;
        self.refresh_visible(keep.as_deref());
        self.request_preview()
    }

    fn set_filter(&mut self, filter: String) -> Option<PreviewJob> {
        let keep = self.selected_name();
        self.filter = filter;
        self.refresh_visible(keep.as_deref());
        self.request_preview()
    }

    pub fn page_size(&self) -> usize {
        page_size(self.viewport.height())
    }

    fn scroll_preview(&mut self, down: bool) {
        let step = self.page_size();
        self.preview_offset = if down {
            self.preview_offset.saturating_add(step)
        } else {
            self.preview_offset.saturating_sub(step)
        };
        self.clamp_preview_offset();
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> Option<PreviewJob> {
        match key.code {
            KeyCode::Esc => {
                self.filter_editing = false;
                self.set_filter(String::new())
            }
            KeyCode::Enter => {
                self.filter_editing = false;
                None
            }
            KeyCode::Backspace => {
                let mut filter = self.filter.clone();
                filter.pop();
                self.set_filter(filter)
            }
            KeyCode::Down => self.select(self.selected.saturating_add(1)),
            KeyCode::Up => self.select(self.selected.saturating_sub(1)),
            KeyCode::Char(ch) => {
                let mut filter = self.filter.clone();
                filter.push(ch);
                self.set_filter(filter)
            }
            _ => None,
        }
    }

    /// Applies one key press and returns the render to dispatch, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PreviewJob> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }
        if self.filter_editing {
            return self.handle_filter_key(key);
        }

        match key.code {
            KeyCode::Char('d') if ctrl => {
                self.scroll_preview(true);
                None
            }
            KeyCode::Char('u') if ctrl => {
                self.scroll_preview(false);
                None
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('j') | KeyCode::Down => self.select(self.selected.saturating_add(1)),
            KeyCode::Char('k') | KeyCode::Up => self.select(self.selected.saturating_sub(1)),
            KeyCode::Char('g') | KeyCode::Home => self.select(0),
            KeyCode::Char('G') | KeyCode::End => self.select(usize::MAX),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => self.enter_selected(),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => self.go_parent(),
            KeyCode::Char('.') => self.toggle_hidden(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('/') => {
                self.filter_editing = true;
                None
            }
            KeyCode::Esc if !self.filter.is_empty() => self.set_filter(String::new()),
            KeyCode::PageDown => {
                self.scroll_preview(true);
                None
            }
            KeyCode::PageUp => {
                self.scroll_preview(false);
                None
            }
            _ => None,
        }
    }
}

include!("chrome.rs");

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn size(&self) -> io::Result<ratatui::layout::Size> {
        self.terminal.size()
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
