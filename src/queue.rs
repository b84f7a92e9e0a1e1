//! FIFO queue of node identifiers.

use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct Queue {
    values: VecDeque<String>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, value: impl Into<String>) {
        self.values.push_back(value.into());
    }

    /// Remove and return the front element.
    ///
    /// Panics when the queue is empty: the driver only dequeues after
    /// checking `is_empty`.
    pub fn dequeue(&mut self) -> String {
        match self.values.pop_front() {
            Some(value) => value,
            None => panic!("dequeue on empty queue"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
