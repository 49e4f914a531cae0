//! Pending input actions
//!
//! The event loop pushes actions as they arrive; the frame loop drains them
//! once per tick without blocking.

use std::collections::VecDeque;

use super::InputAction;

/// FIFO of actions not yet seen by the frame loop
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<InputAction>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: InputAction) {
        log::debug!("Input action queued: {:?}", action);
        self.pending.push_back(action);
    }

    /// Drain every pending action, reporting whether any of them was a quit
    pub fn drain_quit_requested(&mut self) -> bool {
        self.pending
            .drain(..)
            .fold(false, |quit, action| quit || action == InputAction::Quit)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
