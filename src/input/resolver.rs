use glam::Vec2;

use super::event::FrameInput;
use crate::camera::InteractionState;

/// Interaction for one tick plus the pointer movement that drives it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Resolution {
    /// Exclusive interaction derived this tick.
    pub state: InteractionState,
    /// Pointer movement since the previous tick; zero below the jitter
    /// threshold and on the tick a drag begins.
    pub delta: Vec2,
}

/// Classifies button state into [`InteractionState`] every tick.
///
/// Held state is polled rather than trusted from edge events: a drag ends
/// as soon as its button is seen up, even if the release itself was never
/// delivered.
#[derive(Debug, Clone)]
pub struct InputResolver {
    state: InteractionState,
    /// Pointer position at the previous tick of the current drag.
    anchor: Vec2,
    primary_was_held: bool,
    secondary_was_held: bool,
    jitter_epsilon: f32,
}

impl InputResolver {
    /// Create an idle resolver ignoring per-tick moves of at most
    /// `jitter_epsilon` pixels.
    #[must_use]
    pub fn new(jitter_epsilon: f32) -> Self {
        Self {
            state: InteractionState::Idle,
            anchor: Vec2::ZERO,
            primary_was_held: false,
            secondary_was_held: false,
            jitter_epsilon,
        }
    }

    /// Interaction resolved on the most recent tick.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// End any drag immediately.
    ///
    /// Buttons still held stay ignored until they are pressed again.
    pub fn force_idle(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Resolve this tick's interaction and per-tick pointer delta.
    pub fn resolve(&mut self, input: &FrameInput) -> Resolution {
        let primary_pressed = input.primary_held && !self.primary_was_held;
        let secondary_pressed =
            input.secondary_held && !self.secondary_was_held;
        self.primary_was_held = input.primary_held;
        self.secondary_was_held = input.secondary_held;

        if input.over_ui {
            self.state = InteractionState::Idle;
            return Resolution::default();
        }

        self.state = match self.state {
            InteractionState::Panning if !input.primary_held => {
                InteractionState::Idle
            }
            InteractionState::Orbiting if !input.secondary_held => {
                InteractionState::Idle
            }
            state => state,
        };

        if self.state == InteractionState::Idle {
            let started = if primary_pressed {
                InteractionState::Panning
            } else if secondary_pressed {
                InteractionState::Orbiting
            } else {
                return Resolution::default();
            };
            self.state = started;
            self.anchor = input.pointer;
            return Resolution {
                state: started,
                delta: Vec2::ZERO,
            };
        }

        let mut delta = input.pointer - self.anchor;
        self.anchor = input.pointer;
        if delta.length() <= self.jitter_epsilon {
            delta = Vec2::ZERO;
        }

        Resolution {
            state: self.state,
            delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn resolver() -> InputResolver {
        InputResolver::new(0.1)
    }

    fn at(x: f32, y: f32) -> FrameInput {
        FrameInput::at(Vec2::new(x, y), DT)
    }

    #[test]
    fn primary_drag_pans_with_per_tick_deltas() {
        let mut r = resolver();
        let first = r.resolve(&at(10.0, 10.0).with_primary());
        assert_eq!(first.state, InteractionState::Panning);
        assert_eq!(first.delta, Vec2::ZERO);

        let second = r.resolve(&at(15.0, 12.0).with_primary());
        assert_eq!(second.delta, Vec2::new(5.0, 2.0));

        // Anchor advanced, so the next delta is incremental.
        let third = r.resolve(&at(16.0, 12.0).with_primary());
        assert_eq!(third.delta, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn secondary_drag_orbits() {
        let mut r = resolver();
        let res = r.resolve(&at(0.0, 0.0).with_secondary());
        assert_eq!(res.state, InteractionState::Orbiting);
    }

    #[test]
    fn release_ends_the_drag() {
        let mut r = resolver();
        let _ = r.resolve(&at(0.0, 0.0).with_primary());
        let res = r.resolve(&at(50.0, 0.0));
        assert_eq!(res.state, InteractionState::Idle);
        assert_eq!(res.delta, Vec2::ZERO);
    }

    #[test]
    fn holding_without_a_press_does_not_start_a_drag() {
        let mut r = resolver();
        let _ = r.resolve(&at(0.0, 0.0).with_primary());
        r.force_idle();
        let res = r.resolve(&at(30.0, 0.0).with_primary());
        assert_eq!(res.state, InteractionState::Idle);
    }

    #[test]
    fn ui_occlusion_forces_idle_and_swallows_the_press() {
        let mut r = resolver();
        let res = r.resolve(&at(0.0, 0.0).with_primary().over_ui());
        assert_eq!(res.state, InteractionState::Idle);
        // Leaving the panel with the button still held does not pan.
        let res = r.resolve(&at(20.0, 0.0).with_primary());
        assert_eq!(res.state, InteractionState::Idle);
    }

    #[test]
    fn entering_ui_cancels_an_active_drag() {
        let mut r = resolver();
        let _ = r.resolve(&at(0.0, 0.0).with_secondary());
        let res = r.resolve(&at(5.0, 0.0).with_secondary().over_ui());
        assert_eq!(res.state, InteractionState::Idle);
        assert_eq!(r.state(), InteractionState::Idle);
    }

    #[test]
    fn jitter_is_dropped_but_anchor_still_advances() {
        let mut r = resolver();
        let _ = r.resolve(&at(0.0, 0.0).with_primary());
        let res = r.resolve(&at(0.05, 0.05).with_primary());
        assert_eq!(res.state, InteractionState::Panning);
        assert_eq!(res.delta, Vec2::ZERO);
        let res = r.resolve(&at(3.05, 0.05).with_primary());
        assert!(res.delta.abs_diff_eq(Vec2::new(3.0, 0.0), 1e-5));
    }

    #[test]
    fn second_button_mid_drag_is_ignored() {
        let mut r = resolver();
        let _ = r.resolve(&at(0.0, 0.0).with_primary());
        let res = r.resolve(&at(4.0, 0.0).with_primary().with_secondary());
        assert_eq!(res.state, InteractionState::Panning);
        // Releasing primary while secondary stays held goes idle.
        let res = r.resolve(&at(8.0, 0.0).with_secondary());
        assert_eq!(res.state, InteractionState::Idle);
    }

    #[test]
    fn simultaneous_press_prefers_pan() {
        let mut r = resolver();
        let res = r.resolve(&at(0.0, 0.0).with_primary().with_secondary());
        assert_eq!(res.state, InteractionState::Panning);
    }

    #[test]
    fn switching_buttons_on_the_same_tick_starts_the_new_drag() {
        let mut r = resolver();
        let _ = r.resolve(&at(0.0, 0.0).with_primary());
        let res = r.resolve(&at(9.0, 9.0).with_secondary());
        assert_eq!(res.state, InteractionState::Orbiting);
        assert_eq!(res.delta, Vec2::ZERO);
    }
}
