//! Terminal output of highlighted lines using crossterm

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{self, Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use unicode_width::UnicodeWidthChar;

use crate::document::Document;
use crate::syntax::{Color, Highlighter, Span, Style, Theme};

/// How a document is printed
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emit style escapes
    pub color: bool,
    /// Prefix every line with its number
    pub line_numbers: bool,
    /// Columns per tab stop
    pub tab_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            line_numbers: false,
            tab_width: 8,
        }
    }
}

/// Map our palette onto crossterm's; `None` means the terminal default
fn term_color(color: Color) -> Option<style::Color> {
    let color = match color {
        Color::Default => return None,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
    };
    Some(color)
}

fn apply_style<W: Write>(out: &mut W, style: &Style) -> io::Result<()> {
    if let Some(fg) = term_color(style.fg) {
        queue!(out, SetForegroundColor(fg))?;
    }
    if let Some(bg) = term_color(style.bg) {
        queue!(out, SetBackgroundColor(bg))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.reverse {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

/// Expand tabs to the next tab stop, advancing `col` by display width
pub fn expand_tabs(text: &str, col: &mut usize, tab_width: usize) -> String {
    let tab_width = tab_width.max(1);
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\t' {
            let pad = tab_width - *col % tab_width;
            result.extend(std::iter::repeat(' ').take(pad));
            *col += pad;
        } else {
            result.push(ch);
            *col += ch.width().unwrap_or(1);
        }
    }
    result
}

/// Write one line, styling the ranges covered by `spans`
///
/// `spans` must be ordered and non-overlapping, as the highlighter produces
/// them. No newline is written.
pub fn render_line<W: Write>(
    out: &mut W,
    text: &str,
    spans: &[Span],
    theme: &Theme,
    tab_width: usize,
) -> io::Result<()> {
    let mut col = 0;
    let mut pos = 0;

    for span in spans {
        let start = span.start.min(text.len());
        let end = span.end.min(text.len());
        if start < pos || start >= end {
            continue;
        }
        if pos < start {
            queue!(out, Print(expand_tabs(&text[pos..start], &mut col, tab_width)))?;
        }
        apply_style(out, &theme.style(span.tag))?;
        queue!(
            out,
            Print(expand_tabs(&text[start..end], &mut col, tab_width)),
            SetAttribute(Attribute::Reset)
        )?;
        pos = end;
    }

    if pos < text.len() {
        queue!(out, Print(expand_tabs(&text[pos..], &mut col, tab_width)))?;
    }
    Ok(())
}

/// Write every line of `doc` with the highlighter's cached spans
pub fn render_document<W: Write>(
    out: &mut W,
    doc: &Document,
    highlighter: &Highlighter,
    theme: &Theme,
    options: &RenderOptions,
) -> io::Result<()> {
    let number_width = doc.line_count().to_string().len();

    for (idx, line) in doc.lines().iter().enumerate() {
        if options.line_numbers {
            if options.color {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            queue!(out, Print(format!("{:>width$} ", idx + 1, width = number_width)))?;
            if options.color {
                queue!(out, SetAttribute(Attribute::NormalIntensity))?;
            }
        }

        let spans: &[Span] = if options.color { highlighter.spans(idx) } else { &[] };
        render_line(out, line.text(), spans, theme, options.tab_width)?;
        queue!(out, Print('\n'))?;
    }

    out.flush()
}
