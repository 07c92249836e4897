//! Adapter utilities for the `gridscroll` crate.
//!
//! The `gridscroll` crate is UI-agnostic and focuses on the grouping math. This
//! crate binds that model to the host's scroll view:
//!
//! - [`GroupScroller`]: the group-indexed surface the host's scroll controller
//!   implements (jump, timed scroll, timed scroll with an easing curve)
//! - [`GridController`]: item-indexed operations, forwarded with the
//!   item-to-group index transform
//! - [`Easing`]: the curve descriptor timed scrolls pass through
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod easing;
mod scroller;


pub use controller::GridController;
pub use easing::Easing;
pub use scroller::{GroupScroller, OnComplete};
