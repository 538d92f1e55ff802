use glam::Vec2;

/// Platform-agnostic input events.
///
/// These are folded by an [`InputCollector`](super::InputCollector) into
/// one [`FrameInput`] per tick.
///
/// # Example
///
/// ```
/// use camrig::input::{InputCollector, InputEvent, MouseButton};
///
/// let mut collector = InputCollector::new();
/// collector.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Right,
///     pressed: true,
/// });
/// collector.handle_event(InputEvent::CursorMoved { x: 120.0, y: -40.0 });
/// let frame = collector.frame(1.0 / 60.0);
/// assert!(frame.secondary_held);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute position.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels, increasing upward.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = toward the view direction).
        delta: f32,
    },
    /// The host UI layer reports whether the pointer is over a panel.
    PointerOverUi {
        /// `true` while the pointer hovers a UI surface.
        over: bool,
    },
    /// Window focus changed.
    FocusChanged {
        /// `false` when focus is lost (e.g. alt-tab mid-drag).
        focused: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            // Back/forward/other buttons never drive the camera.
            _ => Self::Middle,
        }
    }
}

/// Snapshot of everything the rig reads on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Pointer position in pixels (y up).
    pub pointer: Vec2,
    /// Whether the primary button is held right now.
    pub primary_held: bool,
    /// Whether the secondary button is held right now.
    pub secondary_held: bool,
    /// Scroll accumulated since the previous tick.
    pub scroll: f32,
    /// Seconds elapsed since the previous tick.
    pub dt: f32,
    /// Whether the pointer is over a UI surface.
    pub over_ui: bool,
}

impl FrameInput {
    /// Idle frame with the pointer at `pointer`.
    #[must_use]
    pub fn at(pointer: Vec2, dt: f32) -> Self {
        Self {
            pointer,
            dt,
            ..Self::default()
        }
    }

    /// Same frame with the primary button held.
    #[must_use]
    pub fn with_primary(mut self) -> Self {
        self.primary_held = true;
        self
    }

    /// Same frame with the secondary button held.
    #[must_use]
    pub fn with_secondary(mut self) -> Self {
        self.secondary_held = true;
        self
    }

    /// Same frame with `scroll` units of wheel movement.
    #[must_use]
    pub fn with_scroll(mut self, scroll: f32) -> Self {
        self.scroll = scroll;
        self
    }

    /// Same frame with the pointer over UI.
    #[must_use]
    pub fn over_ui(mut self) -> Self {
        self.over_ui = true;
        self
    }
}
