//! Shared utilities: the frame clock that feeds tick lengths to the rig.

/// Frame clock with clamped tick length and smoothed FPS.
pub mod frame_timing;
