use crate::Value;


/// Fixed size, zero initialized memory. An address is valid iff `0 <= address < len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory(Vec<Value>);

impl Memory {
    pub fn new(size: usize) -> Self {
        Self(vec![0; size])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cell(&self, addr: Value) -> Option<Value> {
        self.0.get(Self::index(addr)?).copied()
    }

    pub fn cell_mut(&mut self, addr: Value) -> Option<&mut Value> {
        self.0.get_mut(Self::index(addr)?)
    }

    pub fn snapshot(&self, limit: usize) -> Vec<Value> {
        self.0.iter().take(limit).copied().collect()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }

    fn index(addr: Value) -> Option<usize> {
        usize::try_from(addr).ok()
    }
}
