//! A headless grid-grouping layer for scrollable lists.
//!
//! For the scroll-controller glue (item-indexed jump/scroll forwarding), see the
//! `gridscroll-adapter` crate.
//!
//! This crate covers the math a grid-shaped list needs before any rendering happens:
//! partitioning a flat item sequence into fixed-capacity groups along the start axis,
//! mapping item indices onto group indices, and exposing the layout parameters that
//! cell-group renderers consume.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the item data and its ordering
//! - a group-indexed scroll view that handles the actual scrolling
//! - rendering for each emitted [`Group`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod context;
mod error;
mod grid;
mod options;
mod types;

#[cfg(test)]
mod tests;

pub use context::GroupContext;
pub use error::ConfigError;
pub use grid::GridLayout;
pub use options::{GridOptions, OnChangeCallback};
pub use types::{Alignment, Axis, CellPosition, Group};
