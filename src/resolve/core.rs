use crate::bind::BoundNode;
use crate::geometry::Rect;
use crate::scheme::NodeKind;

/// Final rectangle assigned to one bound client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement<C> {
    pub client: C,
    pub rect: Rect,
    /// The rect came from an `f:` override, not a computed share.
    pub floating: bool,
}

/// Walk a bound tree frame-down and assign a rectangle to every client,
/// in traversal order.
pub fn resolve<C: Clone>(root: &BoundNode<C>, frame: Rect) -> Vec<Placement<C>> {
    let mut placements = Vec::new();
    resolve_node(root, frame, &mut placements);
    placements
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

fn resolve_node<C: Clone>(node: &BoundNode<C>, frame: Rect, out: &mut Vec<Placement<C>>) {
    match node {
        BoundNode::Slot {
            client, floating, ..
        } => {
            let placement = match floating {
                Some(rect) => Placement {
                    client: client.clone(),
                    rect: *rect,
                    floating: true,
                },
                None => Placement {
                    client: client.clone(),
                    rect: frame,
                    floating: false,
                },
            };
            out.push(placement);
        }
        BoundNode::Group { kind, children, .. } => match kind {
            NodeKind::Monocle => {
                // Full overlap: no splitting, no cursor.
                for child in children {
                    resolve_node(child, frame, out);
                }
            }
            NodeKind::HorizontalForward | NodeKind::HorizontalReverse => {
                split(children, frame, Axis::Horizontal, out);
            }
            NodeKind::VerticalForward | NodeKind::VerticalReverse => {
                split(children, frame, Axis::Vertical, out);
            }
            // Leaf kinds never appear as a group kind.
            _ => {}
        },
    }
}

/// Divide `frame` among the children along `axis`, proportional to
/// weight.
///
/// The arithmetic truncates twice: once for the per-child unit extent
/// and once after the weight multiply. Floating children see the frame
/// as currently mutated and advance nothing.
fn split<C: Clone>(children: &[BoundNode<C>], frame: Rect, axis: Axis, out: &mut Vec<Placement<C>>) {
    let (count, total_weight) = tiled_weight(children);

    let extent = match axis {
        Axis::Horizontal => frame.width,
        Axis::Vertical => frame.height,
    };
    let (unit, avg_weight) = if count > 0 {
        (extent / count as i32, total_weight / count as f32)
    } else {
        (0, 1.0)
    };

    let mut frame = frame;
    for child in children {
        if child.is_floating() {
            resolve_node(child, frame, out);
            continue;
        }

        let share = (child.effective_weight() / avg_weight * unit as f32) as i32;
        match axis {
            Axis::Horizontal => {
                frame.width = share;
                resolve_node(child, frame, out);
                frame.x += share;
            }
            Axis::Vertical => {
                frame.height = share;
                resolve_node(child, frame, out);
                frame.y += share;
            }
        }
    }
}

/// Count and total effective weight of the non-floating children.
fn tiled_weight<C>(children: &[BoundNode<C>]) -> (usize, f32) {
    let mut count = 0;
    let mut weight = 0.0;
    for child in children {
        if !child.is_floating() {
            count += 1;
            weight += child.effective_weight();
        }
    }
    (count, weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::{ClientQueue, bind};
    use crate::scheme::parse_str;

    fn layout(text: &str, clients: &[&'static str], frame: Rect) -> Vec<Placement<&'static str>> {
        let scheme = parse_str(text).unwrap();
        let mut queue: ClientQueue<&'static str> = clients.iter().copied().collect();
        let bound = bind(&scheme, &mut queue).unwrap();
        resolve(&bound, frame)
    }

    fn rect_of<'p>(placements: &'p [Placement<&'static str>], client: &str) -> &'p Rect {
        &placements
            .iter()
            .find(|p| p.client == client)
            .unwrap_or_else(|| panic!("no placement for {client}"))
            .rect
    }

    #[test]
    fn even_vertical_split() {
        let placements = layout("v c c", &["A", "B"], Rect::new(0, 0, 400, 200));
        assert_eq!(*rect_of(&placements, "A"), Rect::new(0, 0, 400, 100));
        assert_eq!(*rect_of(&placements, "B"), Rect::new(0, 100, 400, 100));
    }

    #[test]
    fn weighted_vertical_split() {
        let placements = layout("v (c w: 2) c", &["A", "B"], Rect::new(0, 0, 400, 300));
        assert_eq!(rect_of(&placements, "A").height, 200);
        assert_eq!(rect_of(&placements, "B").height, 100);
        assert_eq!(rect_of(&placements, "B").y, 200);
    }

    #[test]
    fn horizontal_split_advances_x() {
        let placements = layout("h c c", &["A", "B"], Rect::new(10, 20, 200, 100));
        assert_eq!(*rect_of(&placements, "A"), Rect::new(10, 20, 100, 100));
        assert_eq!(*rect_of(&placements, "B"), Rect::new(110, 20, 100, 100));
    }

    #[test]
    fn master_and_stack_geometry() {
        let placements = layout("h c (v c c)", &["A", "B", "C"], Rect::new(0, 0, 200, 200));
        assert_eq!(*rect_of(&placements, "A"), Rect::new(0, 0, 100, 200));
        assert_eq!(*rect_of(&placements, "B"), Rect::new(100, 0, 100, 100));
        assert_eq!(*rect_of(&placements, "C"), Rect::new(100, 100, 100, 100));
    }

    #[test]
    fn monocle_gives_everyone_the_frame() {
        let frame = Rect::new(5, 5, 300, 200);
        let placements = layout("m c c c", &["A", "B", "C"], frame);
        assert_eq!(placements.len(), 3);
        assert!(placements.iter().all(|p| p.rect == frame));
    }

    #[test]
    fn floating_leaf_gets_its_literal_rect() {
        let placements = layout(
            "h c (c f: 7 8 90 60) c",
            &["A", "B", "C"],
            Rect::new(0, 0, 200, 100),
        );

        let floated = rect_of(&placements, "B");
        assert_eq!(*floated, Rect::new(7, 8, 90, 60));
        assert!(placements.iter().find(|p| p.client == "B").unwrap().floating);

        // The floating sibling consumes no share of the split.
        assert_eq!(*rect_of(&placements, "A"), Rect::new(0, 0, 100, 100));
        assert_eq!(*rect_of(&placements, "C"), Rect::new(100, 0, 100, 100));
    }

    #[test]
    fn only_floating_children_skip_the_division() {
        let placements = layout("(v (c f: 1 2 3 4))", &["A"], Rect::new(0, 0, 100, 100));
        assert_eq!(*rect_of(&placements, "A"), Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn empty_group_assigns_nothing() {
        let scheme = parse_str("v c c").unwrap();
        let mut queue: ClientQueue<&str> = ClientQueue::new([]);
        let bound = bind(&scheme, &mut queue).unwrap();
        assert!(resolve(&bound, Rect::new(0, 0, 100, 100)).is_empty());
    }

    #[test]
    fn shares_truncate_like_integer_math() {
        // 201 / 2 truncates to a 100-cell unit; the odd cell is lost.
        let placements = layout("v c c", &["A", "B"], Rect::new(0, 0, 100, 201));
        assert_eq!(rect_of(&placements, "A").height, 100);
        assert_eq!(rect_of(&placements, "B").height, 100);
        assert_eq!(rect_of(&placements, "B").y, 100);
    }

    #[test]
    fn reverse_groups_place_left_to_right() {
        let placements = layout("hr c c", &["A", "B"], Rect::new(0, 0, 200, 100));
        // B was picked first, so it sits in the first-declared (left) spot.
        assert_eq!(*rect_of(&placements, "B"), Rect::new(0, 0, 100, 100));
        assert_eq!(*rect_of(&placements, "A"), Rect::new(100, 0, 100, 100));
    }
}
