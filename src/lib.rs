// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D camera rig driven by pointer input.
//!
//! Each tick the rig turns raw pointer state into one exclusive
//! interaction (pan, orbit, or none), solves a new target pose, runs it
//! through the active constraints (pan envelope, orbit radius, altitude),
//! and eases the rendered pose toward the target.
//!
//! # Key entry points
//!
//! - [`camera::CameraRig`] - the per-tick orchestrator
//! - [`input::InputCollector`] - folds window events into a
//!   [`input::FrameInput`] snapshot
//! - [`command::RigCommand`] - reset, mode switch, pivot, shutdown
//! - [`options::RigOptions`] - TOML-backed tunables and limits
//! - [`session::Session`] - scripted headless playback
//!
//! ```
//! use camrig::camera::CameraRig;
//! use camrig::input::FrameInput;
//! use camrig::options::RigOptions;
//! use glam::Vec2;
//!
//! let mut rig = CameraRig::new(&RigOptions::default())?;
//! let report = rig.tick(&FrameInput::at(Vec2::ZERO, 1.0 / 60.0));
//! assert!(!report.eased);
//! # Ok::<(), camrig::error::RigError>(())
//! ```

pub mod camera;
pub mod command;
pub mod error;
pub mod input;
pub mod options;
pub mod session;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::CameraRig;
pub use error::RigError;
pub use options::RigOptions;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
