//! Terminal output utilities.
//!
//! Box drawing, the length slider, ANSI helpers.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const SKY: &str = "\x1b[38;5;117m";

/// Print error message in red to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 52;

/// Lines of one screen, drawn in box style and written out in a single pass.
///
/// Raw mode does not translate `\n`, so [`Frame::render`] joins with `\r\n`.
#[derive(Debug, Default)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// ┌─ Title ──────────┐
    pub fn top(&mut self, title: &str) {
        if title.is_empty() {
            self.lines.push(format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
            self.lines
                .push(format!("┌{}{}┐", title_part, "─".repeat(remaining)));
        }
    }

    /// │ content          │
    pub fn line(&mut self, content: &str) {
        let inner_width = BOX_WIDTH - 4;
        let padding = inner_width.saturating_sub(console_width(content));
        self.lines
            .push(format!("│ {}{} │", content, " ".repeat(padding)));
    }

    /// │     content      │
    pub fn line_center(&mut self, content: &str) {
        let inner_width = BOX_WIDTH - 4;
        let total_padding = inner_width.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.lines.push(format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
    }

    /// │ left       right │
    pub fn line_split(&mut self, left: &str, right: &str) {
        let inner_width = BOX_WIDTH - 4;
        let used = console_width(left) + console_width(right);
        let gap = inner_width.saturating_sub(used).max(1);
        self.line(&format!("{}{}{}", left, " ".repeat(gap), right));
    }

    /// ├──────────────────┤
    pub fn rule(&mut self) {
        self.lines.push(format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
    }

    /// └──────────────────┘
    pub fn bottom(&mut self) {
        self.lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
    }

    /// A line outside any box.
    pub fn text(&mut self, content: &str) {
        self.lines.push(content.to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut out = self.lines().join("\r\n");
        out.push_str("\r\n");
        out
    }

    /// Clear the screen and draw the frame.
    pub fn draw(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = handle.write_all(b"\x1b[2J\x1b[3J\x1b[H");
        let _ = handle.write_all(self.render().as_bytes());
        let _ = handle.flush();
    }
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Controls
// ============================================================================

/// Render a stepped slider: `8 ━━━━━━●──────── 16`.
pub fn slider(value: usize, min: usize, max: usize, width: usize) -> String {
    let span = max.saturating_sub(min).max(1);
    let offset = value.clamp(min, max) - min;
    let track = width.saturating_sub(1);
    let knob = offset * track / span;

    format!(
        "{min} {SKY}{}●{RESET}{} {max}",
        "━".repeat(knob),
        "─".repeat(track - knob)
    )
}

pub fn checkbox(checked: bool) -> String {
    if checked {
        format!("{SKY}[x]{RESET}")
    } else {
        "[ ]".to_string()
    }
}
