//! Error types for the AST crate.
//!
//! Only end-of-parse structural checks surface as errors. Contract
//! violations during construction (unbalanced stack operations, conflicting
//! links) panic instead: they mean the grammar actions and the tree no
//! longer agree, and the tree cannot be trusted.

use thiserror::Error;

#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum AstError {
    /// Block roots were still on the stack when the session ended.
    #[error("parse ended with {depth} unreduced block root(s) on the stack")]
    UnbalancedBlocks { depth: usize },
}
