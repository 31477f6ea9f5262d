//! Scanner-facing position access.
//!
//! The construction layer never talks to the scanner directly; it only
//! reads the position of the most recently consumed token through this
//! trait, once per node, at the moment the node is built.

use std::cell::Cell;

pub trait Scanner {
    fn current_row(&self) -> u32;
    fn current_col(&self) -> u32;
}

impl<S: Scanner + ?Sized> Scanner for &S {
    fn current_row(&self) -> u32 {
        (**self).current_row()
    }

    fn current_col(&self) -> u32 {
        (**self).current_col()
    }
}

/// A [`Scanner`] for drivers that track token positions themselves: the
/// grammar engine calls [`advance_to`](ScannerCursor::advance_to) as it
/// consumes tokens and the session reads the cursor when stamping nodes.
#[derive(Debug)]
pub struct ScannerCursor {
    row: Cell<u32>,
    col: Cell<u32>,
}

impl ScannerCursor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            row: Cell::new(1),
            col: Cell::new(1),
        }
    }

    pub fn advance_to(&self, row: u32, col: u32) {
        self.row.set(row);
        self.col.set(col);
    }
}

impl Default for ScannerCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for ScannerCursor {
    fn current_row(&self) -> u32 {
        self.row.get()
    }

    fn current_col(&self) -> u32 {
        self.col.get()
    }
}
