//! Full-redraw terminal renderer for the catalog table.

use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal,
};
use unicode_width::UnicodeWidthChar;

use catalog_lib::ToastLevel;
use tablekit::{PaginationState, SortDir};

use crate::App;

/// Raw-mode alternate screen, restored on drop.
pub struct Screen {
    out: io::Stdout,
}

impl Screen {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { out })
    }

    /// Redraws the whole screen. The table is small, so there is no
    /// buffer diffing; every frame repaints from the top.
    pub fn draw(&mut self, app: &mut App) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::All)
        )?;
        let mut y = 0;

        self.line(&mut y, "Product Catalog", Some(Color::Cyan), true)?;
        let search = format!("Search: {}_", app.search);
        self.line(&mut y, &search, None, false)?;
        y += 1;

        self.header_row(&mut y, app)?;
        self.body_rows(&mut y, app)?;
        y += 1;

        let footer = footer_line(&app.table.pagination(5, true));
        self.line(&mut y, &footer, None, false)?;

        let status = format!(
            "{} of {} rows · page size {} · Tab sort · Enter direction · arrows page · +/- size · e edit · q quit",
            app.table.view_rows().len(),
            app.table.total_filtered(),
            app.table.page_size(),
        );
        self.line(&mut y, &status, Some(Color::DarkGrey), false)?;
        y += 1;

        for toast in app.toasts.active() {
            let color = match toast.level {
                ToastLevel::Success => Color::Green,
                ToastLevel::Error => Color::Red,
                ToastLevel::Warning => Color::Yellow,
                ToastLevel::Info => Color::Blue,
            };
            let text = format!("[{}] {}", level_tag(toast.level), toast.message);
            self.line(&mut y, &text, Some(color), false)?;
        }

        self.out.flush()
    }

    fn line(&mut self, y: &mut u16, text: &str, color: Option<Color>, bold: bool) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, *y))?;
        if let Some(c) = color {
            queue!(self.out, SetForegroundColor(c))?;
        }
        if bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        queue!(self.out, Print(text), ResetColor, SetAttribute(Attribute::Reset))?;
        *y += 1;
        Ok(())
    }

    fn header_row(&mut self, y: &mut u16, app: &App) -> io::Result<()> {
        let sort = app.table.sort();
        let mut header = String::new();
        for col in app.table.columns() {
            let label = format!("{}{}", col.header(), sort_marker(sort, col.key()));
            header.push_str(&fit(&label, col_width(col.width_hint())));
            header.push_str("  ");
        }
        self.line(y, &header, Some(Color::Cyan), true)
    }

    fn body_rows(&mut self, y: &mut u16, app: &App) -> io::Result<()> {
        if app.table.view_rows().is_empty() {
            return self.line(y, "  (no rows)", Some(Color::DarkGrey), false);
        }
        let mut lines = Vec::new();
        for row in app.table.view_rows() {
            let mut text = String::new();
            for col in app.table.columns() {
                let cell = col.value_of(row).to_string();
                text.push_str(&fit(&cell, col_width(col.width_hint())));
                text.push_str("  ");
            }
            lines.push(text);
        }
        for text in lines {
            self.line(y, &text, None, false)?;
        }
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// The width hints are interpreted as terminal cells.
fn col_width(hint: Option<u16>) -> usize {
    hint.unwrap_or(16) as usize
}

/// Truncate or pad `text` to exactly `width` display cells.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    while used < width {
        out.push(' ');
        used += 1;
    }
    out
}

/// Renders the pagination control as text: prev/next affordances, the
/// visible page buttons with the current page bracketed, and ellipses
/// toward the reserved edge buttons.
fn footer_line(state: &PaginationState) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.push("< Prev".to_string());

    let edges = !state.visible.contains(&1);
    if edges {
        parts.push(page_button(1, state.current_page));
    }
    if state.show_start_ellipsis {
        parts.push("...".to_string());
    }
    for page in &state.visible {
        parts.push(page_button(*page, state.current_page));
    }
    if state.show_end_ellipsis {
        parts.push("...".to_string());
    }
    if edges && !state.visible.contains(&state.total_pages) {
        parts.push(page_button(state.total_pages, state.current_page));
    }

    parts.push("Next >".to_string());
    parts.join(" ")
}

fn page_button(page: usize, current: usize) -> String {
    if page == current {
        format!("[{page}]")
    } else {
        page.to_string()
    }
}

fn sort_marker(sort: Option<(&str, SortDir)>, key: &str) -> &'static str {
    match sort {
        Some((k, SortDir::Asc)) if k == key => " ^",
        Some((k, SortDir::Desc)) if k == key => " v",
        _ => "",
    }
}

fn level_tag(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "ok",
        ToastLevel::Error => "error",
        ToastLevel::Warning => "warn",
        ToastLevel::Info => "info",
    }
}
