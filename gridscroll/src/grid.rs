use alloc::sync::Arc;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

use crate::{Axis, CellPosition, ConfigError, GridOptions, Group, GroupContext};

/// Maps a flat, ordered item sequence onto fixed-capacity groups along the
/// start axis.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects, and it does not retain items or groups.
/// - The only cached state is the data count from the last content update.
/// - Groups are exposed via a zero-allocation sink API ([`Self::update_contents`]),
///   with a [`Self::collect_groups`] convenience on top.
///
/// Scrolling, rendering, and animation belong to external collaborators; for
/// item-indexed jump/scroll forwarding, see the `gridscroll-adapter` crate.
#[derive(Clone, Debug)]
pub struct GridLayout {
    options: GridOptions,
    capacity: NonZeroUsize,
    data_count: usize,
}

impl GridLayout {
    /// Creates a new layout from options.
    ///
    /// Fails with [`ConfigError::GroupCapacity`] when `options.group_capacity`
    /// is zero.
    pub fn new(options: GridOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        let capacity = NonZeroUsize::new(options.group_capacity).ok_or(
            ConfigError::GroupCapacity {
                capacity: options.group_capacity,
            },
        )?;
        gdebug!(
            group_capacity = capacity.get(),
            cell_size = options.cell_size,
            "GridLayout::new"
        );
        Ok(Self {
            options,
            capacity,
            data_count: 0,
        })
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn data_count(&self) -> usize {
        self.data_count
    }

    pub fn is_empty(&self) -> bool {
        self.data_count == 0
    }

    pub fn group_capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn axis(&self) -> Axis {
        self.options.axis
    }

    pub fn start_axis_spacing(&self) -> u32 {
        self.options.start_axis_spacing
    }

    pub fn cell_size(&self) -> u32 {
        self.options.cell_size
    }

    /// Number of groups for the current data count.
    ///
    /// This is `ceil(data_count / group_capacity)`: the last group may hold
    /// fewer than `group_capacity` items, but is never empty.
    pub fn group_count(&self) -> usize {
        self.data_count.div_ceil(self.capacity.get())
    }

    /// Index of the group containing `item_index`.
    ///
    /// This is `item_index / group_capacity` (floor division). No bounds check
    /// is performed against the data count: an out-of-range item index maps to
    /// an out-of-range group index, which the delegated scroll controller is
    /// expected to handle.
    pub fn group_of(&self, item_index: usize) -> usize {
        item_index / self.capacity.get()
    }

    /// Zero-based position of `item_index` within its group.
    ///
    /// This is `item_index % group_capacity`, unchecked like [`Self::group_of`].
    pub fn slot_of(&self, item_index: usize) -> usize {
        item_index % self.capacity.get()
    }

    pub fn position_of(&self, item_index: usize) -> CellPosition {
        CellPosition {
            group: self.group_of(item_index),
            slot: self.slot_of(item_index),
        }
    }

    /// Flat index of the first item in `group_index`.
    pub fn first_item_of_group(&self, group_index: usize) -> usize {
        group_index.saturating_mul(self.capacity.get())
    }

    /// Number of items in `group_index` for the current data count.
    ///
    /// Full groups hold `group_capacity` items; a trailing partial group holds
    /// the remainder; groups past the end hold 0.
    pub fn group_len(&self, group_index: usize) -> usize {
        let start = self.first_item_of_group(group_index);
        if start >= self.data_count {
            return 0;
        }
        (self.data_count - start).min(self.capacity.get())
    }

    /// Returns the layout snapshot cell-group renderers consume.
    pub fn context(&self) -> GroupContext {
        GroupContext {
            axis: self.options.axis,
            group_capacity: self.capacity.get(),
            group_count: self.group_count(),
            start_axis_spacing: self.options.start_axis_spacing,
            cell_size: self.options.cell_size,
        }
    }

    /// Replaces the data set and emits its groups in ascending order.
    ///
    /// Sets the cached data count to `items.len()`, then partitions `items`
    /// into groups of `group_capacity` items each, the last possibly partial.
    /// Order is preserved within and across groups. The emitted [`Group`]s
    /// borrow `items` and are not retained.
    ///
    /// Every call repartitions from scratch, so a capacity change between
    /// calls can never leave stale group boundaries behind.
    pub fn update_contents<T>(&mut self, items: &[T], mut f: impl FnMut(Group<'_, T>)) {
        gtrace!(count = items.len(), "update_contents");
        self.data_count = items.len();
        for (index, chunk) in items.chunks(self.capacity.get()).enumerate() {
            f(Group {
                index,
                items: chunk,
            });
        }
        self.notify();
    }

    /// Count-only variant of [`Self::update_contents`] for callers that
    /// materialize groups elsewhere.
    pub fn update_count(&mut self, data_count: usize) {
        if self.data_count == data_count {
            return;
        }
        gtrace!(count = data_count, "update_count");
        self.data_count = data_count;
        self.notify();
    }

    /// Collects the groups of `items` into `out` (clears `out` first).
    ///
    /// Unlike [`Self::update_contents`] this does not touch the cached data
    /// count; it is a convenience for adapters that keep a scratch buffer.
    pub fn collect_groups<'a, T>(&self, items: &'a [T], out: &mut Vec<Group<'a, T>>) {
        out.clear();
        for (index, chunk) in items.chunks(self.capacity.get()).enumerate() {
            out.push(Group {
                index,
                items: chunk,
            });
        }
    }

    /// Changes the number of cells per group along the start axis.
    ///
    /// The group count is recomputed immediately from the cached data count.
    /// Fails with [`ConfigError::GroupCapacity`] when `group_capacity` is zero,
    /// leaving the current capacity in place.
    pub fn set_group_capacity(&mut self, group_capacity: usize) -> Result<(), ConfigError> {
        let Some(capacity) = NonZeroUsize::new(group_capacity) else {
            return Err(ConfigError::GroupCapacity {
                capacity: group_capacity,
            });
        };
        if self.capacity == capacity {
            return Ok(());
        }
        gdebug!(group_capacity = capacity.get(), "set_group_capacity");
        self.capacity = capacity;
        self.options.group_capacity = group_capacity;
        self.notify();
        Ok(())
    }

    pub fn set_axis(&mut self, axis: Axis) {
        if self.options.axis == axis {
            return;
        }
        self.options.axis = axis;
        self.notify();
    }

    pub fn set_start_axis_spacing(&mut self, spacing: u32) {
        if self.options.start_axis_spacing == spacing {
            return;
        }
        self.options.start_axis_spacing = spacing;
        self.notify();
    }

    pub fn set_cell_size(&mut self, cell_size: u32) {
        if self.options.cell_size == cell_size {
            return;
        }
        self.options.cell_size = cell_size;
        self.notify();
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&GridLayout) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }
}
