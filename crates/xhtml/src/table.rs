//! Two-phase buffering of ODF tables.
//!
//! ODF declares a table's columns before its first row, but XHTML only tells
//! how many columns there are once the first row is complete. Until then,
//! everything written for the table (after its start tag) is held back in a
//! pending buffer.

/// One table under construction.
#[derive(Debug, Default)]
pub(crate) struct TableAccumulator {
    main: String,
    pending: String,
    first_row_closed: bool,
    column_count: u32,
}

impl TableAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffer writes for this table must go to right now.
    pub fn target(&mut self) -> &mut String {
        if !self.first_row_closed && !self.main.is_empty() {
            &mut self.pending
        } else {
            &mut self.main
        }
    }

    /// Counts a cell of the first row; later rows are ignored.
    pub fn on_cell_open(&mut self, colspan: u32) {
        if !self.first_row_closed {
            self.column_count += colspan;
        }
    }

    /// Declares the columns once the first row is known. Returns false for
    /// any row after the first.
    pub fn on_row_end(&mut self, column_declaration: &str) -> bool {
        if self.first_row_closed {
            return false;
        }
        for _ in 0..self.column_count {
            self.main.push_str(column_declaration);
        }
        self.main.push_str(&self.pending);
        self.pending.clear();
        self.first_row_closed = true;
        true
    }

    /// Hands back the table's markup. A table whose first row never closed
    /// still gives back what it held, without column declarations.
    pub fn finish(mut self) -> String {
        if !self.pending.is_empty() {
            self.main.push_str(&self.pending);
        }
        self.main
    }

    pub fn column_count(&self) -> u32 {
        self.column_count
    }

    pub fn first_row_closed(&self) -> bool {
        self.first_row_closed
    }
}
