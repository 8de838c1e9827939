use crate::errors::errors::ErrorImpl;

/// Number of columns a tab occupies when measuring indentation width.
pub const TAB_WIDTH: usize = 8;

/// What a line's indentation width means relative to the enclosing blocks.
#[derive(Debug, PartialEq, Eq)]
pub enum IndentChange {
    /// Same width as the current block.
    Unchanged,
    /// A new, deeper block was opened.
    Opened,
    /// `n` blocks were closed.
    Closed(usize),
}

/// State machine over the stack of open indentation widths. The stack always
/// starts with the sentinel `0` and is strictly increasing from bottom to
/// top; it is owned here and mutated once per physical line.
pub struct IndentationTracker {
    stack: Vec<usize>,
}

impl IndentationTracker {
    pub fn new() -> Self {
        IndentationTracker { stack: vec![0] }
    }

    /// Measures the leading whitespace of a line: the width with tabs
    /// expanded, and the number of raw characters consumed.
    pub fn measure(line: &[char]) -> (usize, usize) {
        let mut width = 0;
        let mut consumed = 0;

        for c in line {
            match c {
                ' ' => width += 1,
                '\t' => width += TAB_WIDTH,
                _ => break,
            }
            consumed += 1;
        }

        (width, consumed)
    }

    /// Feeds the width of the next logical line and reports the resulting
    /// block transition. Fails when the width does not settle on an open
    /// indentation level.
    pub fn advance(&mut self, width: usize) -> Result<IndentChange, ErrorImpl> {
        let top = *self.stack.last().unwrap();

        if width == top {
            return Ok(IndentChange::Unchanged);
        }

        if width > top {
            self.stack.push(width);
            return Ok(IndentChange::Opened);
        }

        let mut closed = 0;
        while *self.stack.last().unwrap() > width {
            self.stack.pop();
            closed += 1;
        }

        if *self.stack.last().unwrap() != width {
            return Err(ErrorImpl::DedentMismatch { width });
        }

        Ok(IndentChange::Closed(closed))
    }

    /// Closes every block still open at end of input and returns how many
    /// were closed.
    pub fn close_remaining(&mut self) -> usize {
        let closed = self.stack.len() - 1;
        self.stack.truncate(1);
        closed
    }
}

impl Default for IndentationTracker {
    fn default() -> Self {
        Self::new()
    }
}
