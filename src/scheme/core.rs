use crate::geometry::Rect;

/// Node variants of a layout scheme.
///
/// Containers own ordered children and impose a spatial split (or, for
/// monocle, full overlap). Leaves bind to zero or more clients and never
/// own children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Left-to-right split.
    HorizontalForward,
    /// Right-to-left client pick order, left-to-right placement.
    HorizontalReverse,
    /// Top-to-bottom split.
    VerticalForward,
    /// Bottom-to-top client pick order, top-to-bottom placement.
    VerticalReverse,
    /// Every child gets the whole frame.
    Monocle,
    /// Exactly one client.
    ClientSlot,
    /// Up to `n` clients.
    ClientCount(usize),
    /// The client at queue position `n`, counted from the head.
    ClientNth(usize),
    /// All remaining clients.
    Rest,
}

impl NodeKind {
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Self::HorizontalForward
                | Self::HorizontalReverse
                | Self::VerticalForward
                | Self::VerticalReverse
                | Self::Monocle
        )
    }

    /// Containers that hand out clients in reverse declaration order.
    pub fn is_reversed(self) -> bool {
        matches!(self, Self::HorizontalReverse | Self::VerticalReverse)
    }
}

/// One node of a parsed scheme.
///
/// A weight of `0.0` means "unspecified" and reads as `1.0` during
/// geometry resolution. `floating` replaces the computed share with a
/// literal rectangle and removes the node from its siblings' weight
/// arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub kind: NodeKind,
    pub weight: f32,
    pub floating: Option<Rect>,
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    pub fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            weight: 0.0,
            floating: None,
            children: Vec::new(),
        }
    }

    pub fn container(kind: NodeKind, children: Vec<LayoutNode>) -> Self {
        Self {
            kind,
            weight: 0.0,
            floating: None,
            children,
        }
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_floating(mut self, rect: Rect) -> Self {
        self.floating = Some(rect);
        self
    }

    /// Weight with the zero sentinel applied.
    pub fn effective_weight(&self) -> f32 {
        if self.weight == 0.0 { 1.0 } else { self.weight }
    }

    /// Number of leaf slots in this subtree.
    pub fn slot_count(&self) -> usize {
        if self.kind.is_container() {
            self.children.iter().map(LayoutNode::slot_count).sum()
        } else {
            1
        }
    }
}
