//! A headless positioning engine for virtualized, sectioned lists.
//!
//! The engine flattens sections (header, items, optional separators, optional footer) into a
//! single positioned cell run, then maps any scrolled viewport to the minimal inclusive range
//! of cells to render, widened by a count and/or pixel overscan budget. It also keeps the
//! bookkeeping for sticky section headers.
//!
//! It is UI-agnostic and does no layout. A host is expected to provide:
//! - sections and key extraction ([`KeyExtractor`])
//! - declared per-kind cell sizes ([`SizeConfig`])
//! - the visible span on every scroll ([`Viewport`])
//!
//! Rebuilding ([`FlatSequence::build`]) is `O(cells)` and meant for data/size changes only.
//! Range queries ([`FlatSequence::visible_range`]) estimate an index by linear interpolation
//! and walk to the exact cell, which is cheap enough for every scroll event.
//!
//! For a host-side controller (versioned rebuilds, anchoring), see `sectionlist-adapter`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod emitter;
mod error;
mod flatten;
mod key;
mod options;
mod overscan;
mod search;
mod sequence;
mod types;


pub use error::SequenceError;
pub use flatten::build_flat_sequence;
pub use key::{IdentityToken, TOKEN_DELIMITER, make_identity_token};
pub use options::{
    CellSize, IndexKeys, KeyExtractor, KeyFns, OptionalSizeFn, Section, SectionListOptions,
    SizeConfig, SizeFn,
};
pub use overscan::expand_with_overscan;
pub use search::{bound_check, correct_index, estimate_fractional_index, locate};
pub use sequence::FlatSequence;
pub use types::{
    Align, Cell, CellKind, CellPayload, OverscanPolicy, ScrollDirection, StickyHeader, Viewport,
    VisibleRange,
};
