/// Scroll-axis orientation.
///
/// The start axis is the perpendicular one: a `Vertical` scroller lays out
/// `group_capacity` cells per row, a `Horizontal` scroller per column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Default for Axis {
    fn default() -> Self {
        Self::Vertical
    }
}

/// Where in the viewport a target group lands after a jump or scroll.
///
/// The value is a fraction in `[0, 1]`: `0.0` puts the group at the viewport's
/// start edge, `1.0` at its end edge. Defaults to [`Alignment::CENTER`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment(f32);

impl Alignment {
    pub const START: Self = Self(0.0);
    pub const CENTER: Self = Self(0.5);
    pub const END: Self = Self(1.0);

    /// Creates an alignment, clamping `fraction` to `[0, 1]`.
    pub fn new(fraction: f32) -> Self {
        Self(fraction.clamp(0.0, 1.0))
    }

    pub fn fraction(self) -> f32 {
        self.0
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::CENTER
    }
}

/// A borrowed view of one group produced by partitioning.
///
/// Groups borrow the caller's item slice and are emitted in ascending order;
/// they are not retained across calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Group<'a, T> {
    pub index: usize,
    /// The items in this group, in input order.
    pub items: &'a [T],
}

impl<T> Group<'_, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The two-dimensional coordinate of a flat item index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPosition {
    /// Group index along the scroll axis.
    pub group: usize,
    /// Zero-based position within the group, along the start axis.
    pub slot: usize,
}
