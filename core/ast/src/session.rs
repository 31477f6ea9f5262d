//! Per-parse construction state.
//!
//! A [`ParseSession`] owns everything one parse pass mutates: the node-id
//! counter, the scanner handle used for position stamping, and the
//! block-root stack. One session serves exactly one top-level unit;
//! independent parses get independent sessions.

use std::rc::Rc;

use tracing::trace;

use crate::{
    errors::AstError,
    nodes::{Location, Node, NodeKind, NodeRef},
    scan::Scanner,
};

pub struct ParseSession<S> {
    scanner: S,
    next_id: u32,
    roots: Vec<NodeRef>,
}

impl<S: Scanner> ParseSession<S> {
    #[must_use]
    pub fn new(scanner: S) -> Self {
        Self {
            scanner,
            next_id: 0,
            roots: Vec::new(),
        }
    }

    #[must_use]
    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// Allocates a node stamped with the scanner position at this moment.
    pub(crate) fn alloc(&mut self, kind: NodeKind) -> NodeRef {
        self.next_id += 1;
        let loc = Location::new(self.scanner.current_row(), self.scanner.current_col());
        Node::new(self.next_id, loc, kind)
    }

    /// Saves `node` as the root of a newly opened block and passes it
    /// through, so grammar actions can use the call as a reduction value.
    pub fn push_root(&mut self, node: NodeRef) -> NodeRef {
        trace!(id = node.id, depth = self.roots.len(), "push block root");
        self.roots.push(Rc::clone(&node));
        node
    }

    /// Pops and returns the root of the block whose reduction just
    /// completed.
    ///
    /// # Panics
    ///
    /// Panics if no block is open. That is a grammar/action mismatch, not
    /// bad input, and the session cannot recover from it.
    pub fn pop_root(&mut self) -> NodeRef {
        let node = self
            .roots
            .pop()
            .expect("pop_root called with no open block");
        trace!(id = node.id, depth = self.roots.len(), "pop block root");
        node
    }

    /// Returns the root of the innermost open block without closing it.
    ///
    /// # Panics
    ///
    /// Panics if no block is open, like [`pop_root`](Self::pop_root).
    #[must_use]
    pub fn peek_root(&self) -> NodeRef {
        Rc::clone(
            self.roots
                .last()
                .expect("peek_root called with no open block"),
        )
    }

    /// Number of blocks currently open.
    #[must_use]
    pub fn root_depth(&self) -> usize {
        self.roots.len()
    }

    /// Ends the session, verifying that every pushed block root was popped.
    ///
    /// # Errors
    ///
    /// Returns [`AstError::UnbalancedBlocks`] if roots remain, which lets a
    /// driver distinguish a clean parse from one whose actions lost track
    /// of a nested block.
    pub fn finish(self) -> Result<(), AstError> {
        if self.roots.is_empty() {
            Ok(())
        } else {
            Err(AstError::UnbalancedBlocks {
                depth: self.roots.len(),
            })
        }
    }
}
