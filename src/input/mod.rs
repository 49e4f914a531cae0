//! Input handling module
//!
//! Maps raw window events to semantic actions and queues them until the
//! frame loop polls for a quit request.

mod input_mapper;
mod input_queue;

pub use input_mapper::{InputMapper, InputAction};
pub use input_queue::InputQueue;
