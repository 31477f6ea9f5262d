//! Sibling-chain and else-chain linking.

use std::rc::Rc;

use crate::nodes::{NodeKind, NodeRef};

/// Makes `nxt` the successor of `cur` in a sibling chain, establishes the
/// back-reference, and returns `nxt` so actions can fold a sequence left
/// to right.
///
/// # Panics
///
/// Panics if `cur` already owns a successor; relinking would silently drop
/// an owned chain, so it is treated as a grammar/action mismatch.
pub fn link_next(cur: &NodeRef, nxt: NodeRef) -> NodeRef {
    let mut slot = cur.next.borrow_mut();
    assert!(
        slot.is_none(),
        "node {} ({}) already owns a successor",
        cur.id,
        cur.kind_name()
    );
    *nxt.prev.borrow_mut() = Rc::downgrade(cur);
    *slot = Some(Rc::clone(&nxt));
    nxt
}

/// Attaches `branch` as the else/elif successor of the conditional `cond`
/// and returns `branch`. The grammar calls this once per `elif`/`else`
/// clause, left to right, building the conditional's owned else-chain.
///
/// # Panics
///
/// Panics if `cond` is not a conditional node or already has an else arm.
pub fn link_else(cond: &NodeRef, branch: NodeRef) -> NodeRef {
    let NodeKind::If { else_arm, .. } = &cond.kind else {
        panic!("link_else on non-conditional node {}", cond.kind_name());
    };
    let mut slot = else_arm.borrow_mut();
    assert!(
        slot.is_none(),
        "conditional node {} already has an else arm",
        cond.id
    );
    *slot = Some(Rc::clone(&branch));
    branch
}
