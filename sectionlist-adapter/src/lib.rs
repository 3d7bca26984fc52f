//! Host-side utilities for the `sectionlist` crate.
//!
//! The `sectionlist` crate is UI-agnostic and focuses on flattening and range math over
//! immutable snapshots. This crate provides the small, framework-neutral pieces a host needs
//! around it:
//!
//! - A controller that rebuilds the snapshot only when a caller-owned version changes and
//!   swaps it atomically (`Arc`)
//! - Viewport and overscan tracking with change detection
//! - Scroll anchoring by identity token across rebuilds
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;

#[cfg(test)]
mod tests;

pub use anchor::{ScrollAnchor, capture_anchor_at, capture_first_visible_anchor, resolve_anchor};
pub use controller::ListController;
