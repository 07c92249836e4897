use crate::Axis;

/// A snapshot of the layout parameters cell-group renderers consume.
///
/// Produced by [`GridLayout::context`](crate::GridLayout::context); collaborators
/// receive it by value instead of sharing a mutable context object. Re-read it
/// after a content or configuration update.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupContext {
    pub axis: Axis,
    /// Cells per group along the start axis.
    pub group_capacity: usize,
    /// Number of groups for the current data count.
    pub group_count: usize,
    /// Spacing between adjacent cells along the start axis, in layout units.
    pub start_axis_spacing: u32,
    /// Cross-axis cell extent, in layout units.
    pub cell_size: u32,
}
