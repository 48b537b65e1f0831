// Event domain module
// Contains the event aggregate and its time-window value object

#![allow(clippy::module_inception)]

pub mod event;
pub mod value_objects;

// Re-export main types for convenience
pub use event::Event;
pub use value_objects::TimeWindow;
