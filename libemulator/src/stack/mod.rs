use crate::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack(Vec<Value>);

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: Value) {
        self.0.push(value);
    }

    /// `None` on an empty stack; the caller decides what an underflow means.
    pub fn pop(&mut self) -> Option<Value> {
        self.0.pop()
    }

    pub fn top(&self) -> Option<Value> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first `limit` elements, counted from the bottom of the stack.
    pub fn snapshot(&self, limit: usize) -> Vec<Value> {
        self.0.iter().take(limit).copied().collect()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}
