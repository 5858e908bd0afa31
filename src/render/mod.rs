//! Visual tree - the pure output of section renderers.
//!
//! Renderers build a [`Node`] tree from content and an entered flag;
//! nothing here touches the terminal. The presenter ([`ansi`]) walks the
//! tree afterwards. Each node carries a [`Pose`]: hidden before the
//! section's trigger fires, a reveal assignment (kind + delay + duration)
//! once it has, or static for chrome that never animates.

pub mod ansi;

use crate::animate::{HoverKind, RevealKind};
use crate::derive::{AccentToken, GradientToken};
use crate::state::FormField;
use crate::types::{SectionId, TimeMs};

// =============================================================================
// Pose
// =============================================================================

/// Animation pose assigned to a node by its section renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pose {
    /// Never animated.
    Static,
    /// Pre-entrance: render in the kind's hidden pose (offset/scale at
    /// zero opacity).
    Hidden(RevealKind),
    /// Entrance assigned: plays `delay` ms after the reveal it is scoped
    /// to (section container for direct children, parent child for
    /// nested items).
    Reveal {
        kind: RevealKind,
        delay: TimeMs,
        duration: TimeMs,
    },
}

impl Pose {
    /// The stagger delay carried by this pose, if it has one.
    pub const fn delay(&self) -> Option<TimeMs> {
        match self {
            Self::Reveal { delay, .. } => Some(*delay),
            _ => None,
        }
    }
}

// =============================================================================
// Node
// =============================================================================

/// Visual node kinds. Deliberately small: the presenter only needs to
/// know what to draw, not how the page was laid out upstream.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Section root; the anchor target when the section has one.
    Section(SectionId),
    /// Generic container.
    Block,
    /// Section or card heading.
    Heading(String),
    /// Body text.
    Text(String),
    /// Glyph + label pair (status badges, icon headers).
    Badge { glyph: String, label: String },
    /// Technology chip: opaque icon reference + name.
    Chip { icon: String, label: String },
    /// Decorative proficiency bar, 0-100.
    Bar(u8),
    /// Contact form input.
    Field {
        field: FormField,
        value: String,
        disabled: bool,
    },
    /// Submit (or call-to-action) affordance.
    Button { label: String, enabled: bool },
    /// Outbound link.
    Link { label: String, url: String },
}

/// Style tokens resolved by the derivation rules; the presenter maps
/// them to colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub gradient: Option<GradientToken>,
    pub accent: Option<AccentToken>,
    pub emphasis: bool,
}

/// One node of the visual tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub style: Style,
    pub pose: Pose,
    pub hover: Option<HoverKind>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            style: Style::default(),
            pose: Pose::Static,
            hover: None,
            children: Vec::new(),
        }
    }

    pub fn block() -> Self {
        Self::new(NodeKind::Block)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Heading(text.into()))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(text.into()))
    }

    pub fn badge(glyph: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(NodeKind::Badge {
            glyph: glyph.into(),
            label: label.into(),
        })
    }

    pub fn chip(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(NodeKind::Chip {
            icon: icon.into(),
            label: label.into(),
        })
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    pub fn with_hover(mut self, hover: HoverKind) -> Self {
        self.hover = Some(hover);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Total node count including self (render-pass sanity checks).
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Depth-first search for the first node matching `pred`.
    pub fn find(&self, pred: &impl Fn(&Node) -> bool) -> Option<&Node> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(pred))
    }

    /// Depth-first walk over the whole tree.
    pub fn visit(&self, f: &mut impl FnMut(&Node)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
