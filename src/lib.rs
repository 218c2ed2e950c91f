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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math allowances
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::missing_const_for_fn)]

//! Transform, camera, and picking core for an interactive 3D viewer.
//!
//! The crate is the numerically sensitive heart of a scene editor: a
//! column-major linear-algebra kernel, a spherical-coordinate orbit
//! camera with a free-fly mode, and a screen-to-world ray-casting picker
//! over axis-aligned bounding boxes. Window/event-loop, GPU resources,
//! and UI panels are external collaborators: they consume the camera's
//! matrices (via [`math::Mat4::as_slice`] for uniform uploads) and feed
//! pointer coordinates to the picker; the core never touches a graphics
//! API.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - orbit/free-fly camera producing view and
//!   projection matrices
//! - [`picking::pick`] - cursor position to nearest scene object
//! - [`scene::Scene`] - owning object container with stable selection
//! - [`options::Options`] - runtime configuration (TOML presets, JSON
//!   schema for inspector panels)
//!
//! # Degenerate geometry
//!
//! No operation here returns an error or panics on bad geometry. Singular
//! matrices invert to identity, zero-length vectors normalize to zero,
//! degenerate viewports fall back to a square aspect, and camera state is
//! clamped away from the pole and focal-point singularities. The
//! user-visible worst case is a momentarily wrong orientation or a missed
//! pick, never a fault.

pub mod camera;
pub mod error;
pub mod math;
pub mod options;
pub mod picking;
pub mod scene;
