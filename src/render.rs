//! Renderers turning a [`Highlight`] into something a person can look at.

use crate::highlight::{Highlight, Segment};
use colored::Colorize;

/// HTML fragment with one `<span>` per coloured unit. Whitespace is kept
/// as-is, so the wrapper uses `pre-wrap`.
pub fn to_html(highlight: &Highlight) -> String {
    let mut out = String::from("<div class=\"readability\" style=\"white-space: pre-wrap\">");
    write_html(&highlight.segments, &mut out);
    out.push_str("</div>");
    out
}

fn write_html(segments: &[Segment], out: &mut String) {
    for segment in segments {
        match segment {
            Segment::Text { value } => out.push_str(&escape_html(value)),
            Segment::Unit(unit) => match unit.color() {
                Some(color) => {
                    out.push_str("<span style=\"background-color: ");
                    out.push_str(&color.css());
                    out.push_str("\">");
                    write_html(&unit.segments, out);
                    out.push_str("</span>");
                }
                None => write_html(&unit.segments, out),
            },
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Text with 24-bit background colours. Whether escapes are emitted follows
/// `colored`'s global switch.
pub fn to_terminal(highlight: &Highlight) -> String {
    let mut out = String::new();
    write_terminal(&highlight.segments, None, &mut out);
    out
}

fn write_terminal(segments: &[Segment], background: Option<(u8, u8, u8)>, out: &mut String) {
    for segment in segments {
        match segment {
            Segment::Text { value } => match background {
                // Escapes are applied per line so a background never bleeds
                // past a line break.
                Some((r, g, b)) => {
                    for (i, line) in value.split('\n').enumerate() {
                        if i > 0 {
                            out.push('\n');
                        }
                        if !line.is_empty() {
                            out.push_str(&line.black().on_truecolor(r, g, b).to_string());
                        }
                    }
                }
                None => out.push_str(value),
            },
            Segment::Unit(unit) => {
                let rgb = unit.color().map(|c| c.rgb_on_white());
                write_terminal(&unit.segments, rgb.or(background), out);
            }
        }
    }
}
