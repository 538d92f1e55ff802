//! Folds raw platform events into one [`FrameInput`] per tick.
//!
//! The `InputCollector` owns the transient event-side state (pointer
//! position, held buttons, accumulated scroll, UI hover). The host feeds it
//! events as they arrive and takes a snapshot once per rendered frame.

use glam::Vec2;

use super::event::{FrameInput, InputEvent, MouseButton};

/// Accumulates input events between ticks.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// collector.handle_event(event);
///
/// // Once per frame:
/// let frame = collector.frame(dt);
/// rig.tick(&frame);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    /// Last reported pointer position.
    pointer: Vec2,
    /// Whether the primary button is currently held.
    primary_held: bool,
    /// Whether the secondary button is currently held.
    secondary_held: bool,
    /// Scroll received since the last snapshot.
    scroll: f32,
    /// Whether the pointer is over a UI surface.
    over_ui: bool,
}

impl InputCollector {
    /// Create a collector with no buttons held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pointer position.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Whether any camera button is held.
    #[must_use]
    pub fn any_button_held(&self) -> bool {
        self.primary_held || self.secondary_held
    }

    /// Forget held buttons without waiting for their release events.
    pub fn release_buttons(&mut self) {
        self.primary_held = false;
        self.secondary_held = false;
    }

    /// Record one raw event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.pointer = Vec2::new(x, y);
            }
            InputEvent::MouseButton { button, pressed } => match button {
                MouseButton::Left => self.primary_held = pressed,
                MouseButton::Right => self.secondary_held = pressed,
                MouseButton::Middle => {}
            },
            InputEvent::Scroll { delta } => self.scroll += delta,
            InputEvent::PointerOverUi { over } => self.over_ui = over,
            // Releases that happen while unfocused never arrive.
            InputEvent::FocusChanged { focused: false } => {
                self.release_buttons();
            }
            InputEvent::FocusChanged { focused: true } => {}
        }
    }

    /// Snapshot the current state for a tick of `dt` seconds and reset the
    /// scroll accumulator.
    pub fn frame(&mut self, dt: f32) -> FrameInput {
        FrameInput {
            pointer: self.pointer,
            primary_held: self.primary_held,
            secondary_held: self.secondary_held,
            scroll: std::mem::take(&mut self.scroll),
            dt,
            over_ui: self.over_ui,
        }
    }
}
