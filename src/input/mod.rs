//! Input handling: event types, the per-tick frame snapshot, and the
//! resolver that turns button state into an exclusive interaction.

/// Folds raw events into per-tick frames.
pub mod collector;
/// Platform-agnostic input events and frame snapshots.
pub mod event;
/// Drag state machine with fail-safe resets.
pub mod resolver;

pub use collector::InputCollector;
pub use event::{FrameInput, InputEvent, MouseButton};
pub use resolver::{InputResolver, Resolution};
