//! ANSI presenter - draws a visual tree to any terminal writer.
//!
//! This is the concrete rendering surface for the demo. It resolves
//! theme tokens to true-color escapes, honors the reveal pose (hidden
//! nodes occupy no rows; slide-up nodes draw at their resting position
//! once revealed) and registers each section's row as its scroll anchor.
//!
//! The library contract stays the pure per-section renderers; nothing in
//! here is required to use the crate.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use unicode_width::UnicodeWidthStr;

use super::{Node, NodeKind, Pose};
use crate::nav;
use crate::types::Rgba;

// =============================================================================
// Presenter
// =============================================================================

/// Writes trees as styled, indented lines.
pub struct Presenter {
    width: u16,
}

impl Presenter {
    pub fn new(width: u16) -> Self {
        Self { width }
    }

    /// Draw one section tree. Returns the number of rows written.
    pub fn render<W: Write>(&self, w: &mut W, tree: &Node) -> io::Result<u16> {
        let mut rows = 0;
        self.render_node(w, tree, 0, &mut rows)?;
        Ok(rows)
    }

    /// Draw a page of section trees top to bottom, registering each
    /// anchored section's first row as its scroll target.
    pub fn render_page<W: Write>(&self, w: &mut W, sections: &[Node]) -> io::Result<u16> {
        let mut row = 0;
        for tree in sections {
            if let NodeKind::Section(section) = tree.kind {
                nav::register_anchor(section, row);
            }
            row += self.render(w, tree)?;
        }
        Ok(row)
    }

    fn render_node<W: Write>(
        &self,
        w: &mut W,
        node: &Node,
        depth: usize,
        rows: &mut u16,
    ) -> io::Result<()> {
        // Hidden pose: zero opacity, nothing on screen, children included.
        if matches!(node.pose, Pose::Hidden(_)) {
            return Ok(());
        }

        if let Some(line) = self.line_for(node) {
            let indent = "  ".repeat(depth);
            queue!(w, Print(&indent))?;
            self.apply_style(w, node)?;
            queue!(w, Print(truncate(&line, self.width as usize)), ResetColor)?;
            queue!(w, Print("\n"))?;
            *rows += 1;
        }

        for child in &node.children {
            self.render_node(w, child, depth + 1, rows)?;
        }
        Ok(())
    }

    fn apply_style<W: Write>(&self, w: &mut W, node: &Node) -> io::Result<()> {
        if node.style.emphasis {
            queue!(w, SetAttribute(Attribute::Bold))?;
        }
        if let Some(gradient) = node.style.gradient {
            let (start, _) = gradient.stops();
            queue!(w, SetForegroundColor(to_color(start)))?;
        } else if let Some(accent) = node.style.accent {
            queue!(w, SetForegroundColor(to_color(accent.color())))?;
        }
        Ok(())
    }

    fn line_for(&self, node: &Node) -> Option<String> {
        match &node.kind {
            NodeKind::Section(_) | NodeKind::Block => None,
            NodeKind::Heading(text) => Some(format!("== {text} ==")),
            NodeKind::Text(text) => Some(text.clone()),
            NodeKind::Badge { glyph, label } => {
                if glyph.is_empty() {
                    Some(label.clone())
                } else {
                    Some(format!("{glyph} {label}"))
                }
            }
            NodeKind::Chip { label, .. } => Some(format!("[{label}]")),
            NodeKind::Bar(percent) => {
                let filled = (*percent as usize) / 10;
                Some(format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled)))
            }
            NodeKind::Field {
                field,
                value,
                disabled,
            } => {
                let lock = if *disabled { " (disabled)" } else { "" };
                Some(format!("{field:?}: {value}{lock}"))
            }
            NodeKind::Button { label, enabled } => {
                if *enabled {
                    Some(format!("[ {label} ]"))
                } else {
                    Some(format!("( {label} )"))
                }
            }
            NodeKind::Link { label, url } => Some(format!("{label} -> {url}")),
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn to_color(rgba: Rgba) -> Color {
    Color::Rgb {
        r: rgba.r,
        g: rgba.g,
        b: rgba.b,
    }
}

/// Truncate to a display width, respecting wide glyphs.
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        let mut candidate = out.clone();
        candidate.push(ch);
        if candidate.width() + 1 > max_width {
            out.push('…');
            return out;
        }
        out = candidate;
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
