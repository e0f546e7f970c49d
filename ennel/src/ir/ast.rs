use std::fmt;

use crate::parser::lexer::{Spanned, Token};
use crate::span::Span;

/// One grammatical element in a first-child/next-sibling tree.
///
/// `child` gives nesting and `next_sibling` gives sequence. Both links are
/// exclusive ownership: a node owns its first child and the sibling that
/// follows it.
///
/// ``` text
/// var (Reserved)
/// ├── x (Identifier)
/// ├── int (Identifier)
/// └── + (Symbol)
///     ├── 1 (Number)
///     └── 2 (Number)
/// ```
pub struct SyntaxTree {
    pub token: Token,
    pub span: Span,
    pub child: Option<Box<SyntaxTree>>,
    pub next_sibling: Option<Box<SyntaxTree>>,
}

impl SyntaxTree {
    pub fn new(token: Token, span: Span) -> Self {
        Self {
            token,
            span,
            child: None,
            next_sibling: None,
        }
    }

    pub fn leaf(spanned: Spanned) -> Box<Self> {
        Box::new(Self::new(spanned.token, spanned.span))
    }

    /// Builds a node whose children are `children`, in order.
    pub fn with_children(spanned: Spanned, children: Vec<Box<SyntaxTree>>) -> Box<Self> {
        let mut node = Self::leaf(spanned);
        node.child = link(children);
        node
    }

    /// Appends `node` (and whatever siblings it already has) after the last
    /// sibling of this node.
    pub fn push_sibling(&mut self, node: Box<SyntaxTree>) {
        let mut slot = &mut self.next_sibling;
        while let Some(next) = slot {
            slot = &mut next.next_sibling;
        }
        *slot = Some(node);
    }

    /// This node followed by every node on its sibling chain.
    pub fn siblings(&self) -> Siblings<'_> {
        Siblings { next: Some(self) }
    }

    pub fn children(&self) -> Siblings<'_> {
        Siblings {
            next: self.child.as_deref(),
        }
    }

    /// Pre-order walk over this node, its subtree and its following
    /// siblings, yielding each node with its depth. Siblings of `self` are at
    /// depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// Writes this node back as source text. Binary operations are wrapped in
    /// parentheses, so `1 + 2 + 3` comes out as `((1 + 2) + 3)`.
    pub fn expression_source(&self) -> String {
        enum Step<'a> {
            Node(&'a SyntaxTree),
            Text(&'static str),
        }

        let mut out = String::new();
        let mut steps = vec![Step::Node(self)];
        while let Some(step) = steps.pop() {
            let node = match step {
                Step::Text(text) => {
                    out.push_str(text);
                    continue;
                }
                Step::Node(node) => node,
            };

            let mut operands = node.children();
            match (&node.token, operands.next(), operands.next(), operands.next()) {
                (Token::Symbol(symbol), Some(left), Some(right), None) => {
                    steps.push(Step::Text(")"));
                    steps.push(Step::Node(right));
                    steps.push(Step::Text(" "));
                    steps.push(Step::Text(symbol.literal()));
                    steps.push(Step::Text(" "));
                    steps.push(Step::Node(left));
                    steps.push(Step::Text("("));
                }
                _ => out.push_str(&node.token.lexeme()),
            }
        }
        out
    }
}

/// Deeper outline levels are not indented any further; the depth is written
/// out instead so the output stays linear in the number of nodes.
const OUTLINE_MAX_INDENT: usize = 16;

/// Renders the node, its subtree and its following siblings as an indented
/// outline, one top-level entry per sibling.
impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whether the node on the current path at each depth is the last of
        // its siblings.
        let mut last = Vec::new();

        for (depth, node) in self.walk() {
            last.truncate(depth);
            if depth > 0 {
                for &ancestor_last in last.iter().skip(1).take(OUTLINE_MAX_INDENT) {
                    f.write_str(if ancestor_last { "    " } else { "│   " })?;
                }
                if depth > OUTLINE_MAX_INDENT + 1 {
                    write!(f, "[depth {}] ", depth)?;
                }
                f.write_str(if node.next_sibling.is_none() { "└── " } else { "├── " })?;
            }
            writeln!(f, "{}", node.token)?;
            last.push(node.next_sibling.is_none());
        }
        Ok(())
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.walk().map(|(depth, node)| (depth, &node.token, node.span)))
            .finish()
    }
}

// A pre-order sequence of depths determines the shape, so comparing the walks
// compares the trees.
impl PartialEq for SyntaxTree {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.walk();
        let mut right = other.walk();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some((da, a)), Some((db, b)))
                    if da == db && a.token == b.token && a.span == b.span => {}
                _ => return false,
            }
        }
    }
}

impl Clone for SyntaxTree {
    fn clone(&self) -> Self {
        // In pre-order a node is followed by its child chain and then by its
        // sibling chain. Building in reverse leaves the child chain on top of
        // the sibling chain when the node itself is reached.
        let mut built: Vec<Box<SyntaxTree>> = Vec::new();
        let nodes: Vec<_> = self.walk().skip(1).map(|(_, node)| node).collect();

        for node in nodes.into_iter().rev() {
            let copy = node.shallow_clone(&mut built);
            built.push(Box::new(copy));
        }
        self.shallow_clone(&mut built)
    }
}

impl SyntaxTree {
    fn shallow_clone(&self, built: &mut Vec<Box<SyntaxTree>>) -> SyntaxTree {
        let mut copy = SyntaxTree::new(self.token.clone(), self.span);
        if self.child.is_some() {
            copy.child = built.pop();
        }
        if self.next_sibling.is_some() {
            copy.next_sibling = built.pop();
        }
        copy
    }
}

// Both links are unlinked onto a work stack, so dropping a deep expression or
// a long statement list never recurses.
impl Drop for SyntaxTree {
    fn drop(&mut self) {
        let mut pending: Vec<Box<SyntaxTree>> = Vec::new();
        pending.extend(self.child.take());
        pending.extend(self.next_sibling.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.child.take());
            pending.extend(node.next_sibling.take());
        }
    }
}

pub struct Walk<'a> {
    stack: Vec<(usize, &'a SyntaxTree)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a SyntaxTree);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        if let Some(next) = node.next_sibling.as_deref() {
            self.stack.push((depth, next));
        }
        if let Some(child) = node.child.as_deref() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

pub struct Siblings<'a> {
    next: Option<&'a SyntaxTree>,
}

impl<'a> Iterator for Siblings<'a> {
    type Item = &'a SyntaxTree;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next_sibling.as_deref();
        Some(node)
    }
}

/// Chains `nodes` through their sibling links and returns the head.
pub fn link(nodes: Vec<Box<SyntaxTree>>) -> Option<Box<SyntaxTree>> {
    let mut head = None;
    for mut node in nodes.into_iter().rev() {
        node.next_sibling = head;
        head = Some(node);
    }
    head
}
