//! Recording bus sink shared by the unit tests.

use alloc::vec::Vec;

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};
use crate::interface::DisplayInterface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

#[derive(Debug, Default)]
pub struct MockInterface {
    pub writes: Vec<(u8, u8)>,
    /// Fail once this many writes have succeeded
    pub fail_after: Option<usize>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(writes: usize) -> Self {
        Self {
            writes: Vec::new(),
            fail_after: Some(writes),
        }
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }

    pub fn commands(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(control, _)| *control == CONTROL_COMMAND)
            .map(|(_, value)| *value)
            .collect()
    }

    pub fn data(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(control, _)| *control == CONTROL_DATA)
            .map(|(_, value)| *value)
            .collect()
    }
}

impl DisplayInterface for MockInterface {
    type Error = MockBusError;

    fn send(&mut self, control: u8, value: u8) -> Result<(), Self::Error> {
        if self.fail_after == Some(self.writes.len()) {
            return Err(MockBusError);
        }
        self.writes.push((control, value));
        Ok(())
    }
}
