use std::collections::VecDeque;

use crate::geometry::Rect;
use crate::scheme::{LayoutNode, NodeKind};

/// Ordered snapshot of client handles consumed during one bind.
///
/// The queue owns its entries independently of the host list; whatever
/// is left after binding is dropped with the queue at the end of the
/// pass.
#[derive(Debug, Clone)]
pub struct ClientQueue<C> {
    inner: VecDeque<C>,
}

impl<C> ClientQueue<C> {
    pub fn new(clients: impl IntoIterator<Item = C>) -> Self {
        Self {
            inner: clients.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn pop_front(&mut self) -> Option<C> {
        self.inner.pop_front()
    }

    /// Remove the client at position `n` from the head, keeping the
    /// relative order of the rest. `None` when out of range.
    pub fn remove_nth(&mut self, n: usize) -> Option<C> {
        self.inner.remove(n)
    }

    pub fn pop_rest(&mut self) -> Vec<C> {
        self.inner.drain(..).collect()
    }
}

impl<C> FromIterator<C> for ClientQueue<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Node of a bound tree: the scheme with every leaf rewritten to a
/// concrete client. Fully owned; nothing aliases the installed scheme.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundNode<C> {
    Slot {
        client: C,
        weight: f32,
        floating: Option<Rect>,
    },
    Group {
        kind: NodeKind,
        weight: f32,
        floating: Option<Rect>,
        children: Vec<BoundNode<C>>,
    },
}

impl<C> BoundNode<C> {
    pub fn is_floating(&self) -> bool {
        match self {
            Self::Slot { floating, .. } | Self::Group { floating, .. } => floating.is_some(),
        }
    }

    /// Weight with the zero sentinel applied.
    pub fn effective_weight(&self) -> f32 {
        let weight = match self {
            Self::Slot { weight, .. } | Self::Group { weight, .. } => *weight,
        };
        if weight == 0.0 { 1.0 } else { weight }
    }
}

/// Bind a client snapshot onto a scheme.
///
/// Depth-first, left-to-right; leaves consume the queue per their kind,
/// reversed containers hand their children the queue in reverse
/// declaration order and then restore declaration order in the result.
/// Unfillable slots contribute nothing.
pub fn bind<C: Clone>(scheme: &LayoutNode, queue: &mut ClientQueue<C>) -> Option<BoundNode<C>> {
    bind_node(scheme, queue).into_iter().next()
}

fn bind_node<C: Clone>(node: &LayoutNode, queue: &mut ClientQueue<C>) -> Vec<BoundNode<C>> {
    match node.kind {
        NodeKind::ClientSlot => queue
            .pop_front()
            .map(|client| vec![bound_slot(node, client)])
            .unwrap_or_default(),

        NodeKind::ClientNth(n) => queue
            .remove_nth(n)
            .map(|client| vec![bound_slot(node, client)])
            .unwrap_or_default(),

        NodeKind::ClientCount(n) => {
            let mut slots = Vec::new();
            for _ in 0..n {
                let Some(client) = queue.pop_front() else { break };
                slots.push(bound_slot(node, client));
            }
            slots
        }

        NodeKind::Rest => queue
            .pop_rest()
            .into_iter()
            .map(|client| bound_slot(node, client))
            .collect(),

        NodeKind::HorizontalForward
        | NodeKind::HorizontalReverse
        | NodeKind::VerticalForward
        | NodeKind::VerticalReverse
        | NodeKind::Monocle => {
            let mut children = Vec::new();

            if node.kind.is_reversed() {
                // Last-declared child gets first pick of the queue; the
                // bound list is flipped back so geometry still runs in
                // declaration order.
                for child in node.children.iter().rev() {
                    if queue.is_empty() {
                        break;
                    }
                    children.extend(bind_node(child, queue));
                }
                children.reverse();
            } else {
                for child in &node.children {
                    if queue.is_empty() {
                        break;
                    }
                    children.extend(bind_node(child, queue));
                }
            }

            vec![BoundNode::Group {
                kind: node.kind,
                weight: node.weight,
                floating: node.floating,
                children,
            }]
        }
    }
}

fn bound_slot<C>(node: &LayoutNode, client: C) -> BoundNode<C> {
    BoundNode::Slot {
        client,
        weight: node.weight,
        floating: node.floating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::parse_str;

    fn queue(names: &[&'static str]) -> ClientQueue<&'static str> {
        names.iter().copied().collect()
    }

    fn bound_clients(node: &BoundNode<&'static str>) -> Vec<&'static str> {
        match node {
            BoundNode::Slot { client, .. } => vec![client],
            BoundNode::Group { children, .. } => {
                children.iter().flat_map(bound_clients).collect()
            }
        }
    }

    #[test]
    fn master_and_rest() {
        let scheme = parse_str("h c (v ...)").unwrap();
        let mut clients = queue(&["A", "B", "C", "D"]);
        let bound = bind(&scheme, &mut clients).unwrap();

        let BoundNode::Group { children, .. } = &bound else {
            panic!("expected a group root");
        };
        assert_eq!(bound_clients(&children[0]), vec!["A"]);
        assert_eq!(bound_clients(&children[1]), vec!["B", "C", "D"]);
        assert!(clients.is_empty());
    }

    #[test]
    fn nth_pulls_from_the_middle() {
        let scheme = parse_str("(nth 2)").unwrap();
        let mut clients = queue(&["A", "B", "C", "D"]);
        let bound = bind(&scheme, &mut clients).unwrap();

        assert_eq!(bound_clients(&bound), vec!["C"]);
        assert_eq!(clients.pop_rest(), vec!["A", "B", "D"]);
    }

    #[test]
    fn nth_out_of_range_binds_nothing() {
        let scheme = parse_str("(nth 9)").unwrap();
        let mut clients = queue(&["A", "B"]);
        assert_eq!(bind(&scheme, &mut clients), None);
        assert_eq!(clients.len(), 2);
    }

    #[test]
    fn reverse_container_flips_pick_order_not_placement() {
        let scheme = parse_str("hr c c").unwrap();
        let mut clients = queue(&["A", "B"]);
        let bound = bind(&scheme, &mut clients).unwrap();

        // First-declared child ends up with the later pick.
        assert_eq!(bound_clients(&bound), vec!["B", "A"]);
    }

    #[test]
    fn vertical_reverse_flips_pick_order() {
        let scheme = parse_str("vr c c c").unwrap();
        let mut clients = queue(&["A", "B", "C"]);
        let bound = bind(&scheme, &mut clients).unwrap();

        assert_eq!(bound_clients(&bound), vec!["C", "B", "A"]);
    }

    #[test]
    fn count_takes_what_is_available() {
        let scheme = parse_str("(max 3)").unwrap();
        let mut clients = queue(&["A", "B"]);
        let bound = bind(&scheme, &mut clients).unwrap();

        assert_eq!(bound_clients(&bound), vec!["A", "B"]);
        assert!(clients.is_empty());
    }

    #[test]
    fn binding_stops_once_the_queue_runs_dry() {
        let scheme = parse_str("h c c c c").unwrap();
        let mut clients = queue(&["A", "B"]);
        let bound = bind(&scheme, &mut clients).unwrap();

        let BoundNode::Group { children, .. } = &bound else {
            panic!("expected a group root");
        };
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn slots_inherit_weight_and_floating() {
        let scheme = parse_str("h (c w: 2) ((max 2) f: 5 5 50 50)").unwrap();
        let mut clients = queue(&["A", "B", "C"]);
        let bound = bind(&scheme, &mut clients).unwrap();

        let BoundNode::Group { children, .. } = &bound else {
            panic!("expected a group root");
        };
        assert_eq!(children[0].effective_weight(), 2.0);
        assert!(children[1].is_floating());
        assert!(children[2].is_floating());
    }

    #[test]
    fn empty_queue_still_yields_the_container() {
        let scheme = parse_str("h c c").unwrap();
        let mut clients = queue(&[]);
        let bound = bind(&scheme, &mut clients).unwrap();

        assert_eq!(bound_clients(&bound), Vec::<&str>::new());
    }

    #[test]
    fn scheme_is_untouched_by_binding() {
        let scheme = parse_str("hr c (v ...)").unwrap();
        let before = scheme.clone();
        let mut clients = queue(&["A", "B", "C"]);
        let _ = bind(&scheme, &mut clients);
        assert_eq!(scheme, before);
    }
}
