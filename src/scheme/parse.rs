use crate::geometry::Rect;
use crate::tokens::{Token, tokenize};

use super::core::{LayoutNode, NodeKind};

/// Parse a token sequence into a scheme tree.
///
/// Parsing is permissive and never fails: unknown words are skipped,
/// missing numeric arguments default to 0, a stray `)` ends the current
/// level early and a missing `)` ends at input exhaustion. Input that
/// establishes no node at all yields `None`.
pub fn parse(tokens: &[Token]) -> Option<LayoutNode> {
    let mut cursor = Cursor { tokens, pos: 0 };
    parse_level(&mut cursor)
}

/// Tokenize and parse DSL text in one step.
pub fn parse_str(text: &str) -> Option<LayoutNode> {
    parse(&tokenize(text))
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume the next word as a numeric argument.
    ///
    /// Parens never count as arguments: they are left in place and the
    /// caller falls back to the default, so `f: 1 2)` still closes its
    /// level instead of eating the paren as a coordinate.
    fn take_number<T: std::str::FromStr + Default>(&mut self) -> T {
        match self.peek() {
            Some(Token::Word(text)) => {
                let value = text.parse().unwrap_or_default();
                self.advance();
                value
            }
            _ => T::default(),
        }
    }
}

/// One nesting level: the first recognized node fixes the head, later
/// nodes accumulate as siblings.
#[derive(Default)]
struct Level {
    head: Option<LayoutNode>,
    siblings: Vec<LayoutNode>,
}

impl Level {
    fn push(&mut self, node: LayoutNode) {
        if self.head.is_none() {
            self.head = Some(node);
        } else {
            self.siblings.push(node);
        }
    }

    /// Close the level. Siblings become the head's children when the head
    /// is a container; after a leaf head they are dropped (leaves never
    /// own children).
    fn finish(self) -> Option<LayoutNode> {
        let mut head = self.head?;
        if head.kind.is_container() {
            head.children = self.siblings;
        }
        Some(head)
    }
}

fn parse_level(cursor: &mut Cursor<'_>) -> Option<LayoutNode> {
    let mut level = Level::default();

    loop {
        let Some(token) = cursor.peek() else { break };
        match token {
            Token::Close => {
                cursor.advance();
                break;
            }
            Token::Open => {
                cursor.advance();
                if let Some(node) = parse_level(cursor) {
                    level.push(node);
                }
            }
            Token::Word(word) => {
                let word = word.as_str();
                cursor.advance();
                parse_word(word, cursor, &mut level);
            }
        }
    }

    level.finish()
}

fn parse_word(word: &str, cursor: &mut Cursor<'_>, level: &mut Level) {
    match word {
        // Client slots may appear anywhere in a level.
        "c" => level.push(LayoutNode::leaf(NodeKind::ClientSlot)),
        "..." => level.push(LayoutNode::leaf(NodeKind::Rest)),

        // Head-only tokens: effective while the level has no head,
        // silently skipped otherwise.
        "nth" if level.head.is_none() => {
            let n = cursor.take_number::<usize>();
            level.push(LayoutNode::leaf(NodeKind::ClientNth(n)));
        }
        "max" if level.head.is_none() => {
            let n = cursor.take_number::<usize>();
            level.push(LayoutNode::leaf(NodeKind::ClientCount(n)));
        }
        "h" if level.head.is_none() => {
            level.push(LayoutNode::container(NodeKind::HorizontalForward, Vec::new()));
        }
        "hr" if level.head.is_none() => {
            level.push(LayoutNode::container(NodeKind::HorizontalReverse, Vec::new()));
        }
        "v" if level.head.is_none() => {
            level.push(LayoutNode::container(NodeKind::VerticalForward, Vec::new()));
        }
        "vr" if level.head.is_none() => {
            level.push(LayoutNode::container(NodeKind::VerticalReverse, Vec::new()));
        }
        "m" if level.head.is_none() => {
            level.push(LayoutNode::container(NodeKind::Monocle, Vec::new()));
        }

        // Parameters are recognized only once the level has a head and
        // always modify that head.
        "w:" if level.head.is_some() => {
            let weight = cursor.take_number::<f32>();
            if let Some(head) = level.head.as_mut() {
                head.weight = weight;
            }
        }
        "f:" if level.head.is_some() => {
            let x = cursor.take_number::<i32>();
            let y = cursor.take_number::<i32>();
            let w = cursor.take_number::<i32>();
            let h = cursor.take_number::<i32>();
            if let Some(head) = level.head.as_mut() {
                head.floating = Some(Rect::new(x, y, w, h));
            }
        }

        // Unknown words are skipped without diagnostics.
        _ => {}
    }
}
