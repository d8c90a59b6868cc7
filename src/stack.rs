use crate::RpnNumber;

/// The operand stack driven by the evaluator.
#[derive(Debug, Clone, Default)]
pub struct Stack {
    values: Vec<RpnNumber>,
}

impl Stack {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn push(&mut self, value: RpnNumber) {
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Result<RpnNumber, StackUnderflow> {
        self.values.pop().ok_or(StackUnderflow)
    }

    pub fn peek(&self) -> Result<RpnNumber, StackUnderflow> {
        self.values.last().copied().ok_or(StackUnderflow)
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// The operands from bottom to top.
    pub fn values(&self) -> &[RpnNumber] {
        &self.values
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Stack underflow, not enough operands.")]
pub struct StackUnderflow;
