use alloc::sync::Arc;

use crate::grid::GridLayout;
use crate::{Axis, ConfigError};

/// A callback fired after an observable state change of a [`GridLayout`]
/// (data count, group capacity, or any layout parameter).
pub type OnChangeCallback = Arc<dyn Fn(&GridLayout) + Send + Sync>;

/// Configuration for [`crate::GridLayout`].
///
/// This type is designed to be cheap to clone: the callback is stored in an
/// `Arc` so adapters can update a field and rebuild a layout without
/// reallocating closures.
#[derive(Clone)]
pub struct GridOptions {
    /// Number of cells per group along the start axis. Must be >= 1.
    pub group_capacity: usize,

    /// Scroll-axis orientation.
    pub axis: Axis,

    /// Spacing between adjacent cells along the start axis, in layout units.
    pub start_axis_spacing: u32,

    /// Cross-axis cell extent, in layout units.
    pub cell_size: u32,

    /// Optional callback fired after the layout's observable state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl GridOptions {
    /// Creates options for a grid with `group_capacity` cells per group.
    ///
    /// The capacity is validated when the options are applied, not here.
    pub fn new(group_capacity: usize) -> Self {
        Self {
            group_capacity,
            axis: Axis::default(),
            start_axis_spacing: 0,
            cell_size: 0,
            on_change: None,
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_start_axis_spacing(mut self, spacing: u32) -> Self {
        self.start_axis_spacing = spacing;
        self
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&GridLayout) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Rejects configurations the grouping math cannot run on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.group_capacity == 0 {
            return Err(ConfigError::GroupCapacity {
                capacity: self.group_capacity,
            });
        }
        Ok(())
    }
}

impl core::fmt::Debug for GridOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridOptions")
            .field("group_capacity", &self.group_capacity)
            .field("axis", &self.axis)
            .field("start_axis_spacing", &self.start_axis_spacing)
            .field("cell_size", &self.cell_size)
            .finish_non_exhaustive()
    }
}
