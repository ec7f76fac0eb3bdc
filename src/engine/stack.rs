use super::error::Error;

/// Bounded LIFO of integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    cells: Vec<i32>,
    capacity: usize,
}

impl Stack {
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, val: i32) -> Result<(), Error> {
        if self.cells.len() >= self.capacity {
            return Err(Error::StackOverflow);
        }
        self.cells.push(val);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<i32, Error> {
        self.cells.pop().ok_or(Error::StackUnderflow)
    }

    /// Value `n` places below the top; `peek(0)` is the top itself.
    pub fn peek(&self, n: usize) -> Result<i32, Error> {
        let depth = self.cells.len();
        if n >= depth {
            return Err(Error::StackUnderflow);
        }
        Ok(self.cells[depth - 1 - n])
    }

    pub fn reset(&mut self) {
        self.cells.clear();
    }

    pub fn depth(&self) -> usize {
        self.cells.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots left before the stack overflows.
    pub fn room(&self) -> usize {
        self.capacity - self.cells.len()
    }

    /// Bottom first.
    pub fn as_slice(&self) -> &[i32] {
        &self.cells
    }
}
