use core::time::Duration;

use gridscroll::{Alignment, ConfigError, GridLayout, GridOptions, Group};

use crate::{Easing, GroupScroller, OnComplete};

/// A framework-neutral controller that pairs a `gridscroll::GridLayout` with
/// the host's group-indexed scroll view.
///
/// This type does not hold any UI objects. Callers drive it by:
/// - `update_contents` when the data set changes
/// - `jump_to_item` / `scroll_to_item` / `scroll_to_item_eased` for
///   item-indexed navigation
///
/// Each navigation call computes `group = item_index / group_capacity` and
/// delegates to the scroller's corresponding group-indexed operation, passing
/// every other parameter through unchanged.
#[derive(Clone, Debug)]
pub struct GridController<S> {
    layout: GridLayout,
    scroller: S,
}

impl<S: GroupScroller> GridController<S> {
    pub fn new(options: GridOptions, scroller: S) -> Result<Self, ConfigError> {
        Ok(Self {
            layout: GridLayout::new(options)?,
            scroller,
        })
    }

    pub fn from_parts(layout: GridLayout, scroller: S) -> Self {
        Self { layout, scroller }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut GridLayout {
        &mut self.layout
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut S {
        &mut self.scroller
    }

    pub fn into_parts(self) -> (GridLayout, S) {
        (self.layout, self.scroller)
    }

    /// Replaces the data set and emits its groups in ascending order.
    ///
    /// See [`GridLayout::update_contents`].
    pub fn update_contents<T>(&mut self, items: &[T], f: impl FnMut(Group<'_, T>)) {
        self.layout.update_contents(items, f);
    }

    /// Jumps to the group containing `item_index`.
    ///
    /// `item_index` is not validated against the data count; an out-of-range
    /// index forwards an out-of-range group index for the scroller to handle.
    pub fn jump_to_item(&mut self, item_index: usize, alignment: Alignment) {
        let group_index = self.layout.group_of(item_index);
        gtrace!(item_index, group_index, "jump_to_item");
        self.scroller.jump_to_group(group_index, alignment);
    }

    /// Scrolls to the group containing `item_index` over `duration`.
    ///
    /// `duration`, `alignment`, and `on_complete` pass through unchanged.
    pub fn scroll_to_item(
        &mut self,
        item_index: usize,
        duration: Duration,
        alignment: Alignment,
        on_complete: Option<OnComplete>,
    ) {
        let group_index = self.layout.group_of(item_index);
        gtrace!(item_index, group_index, "scroll_to_item");
        self.scroller
            .scroll_to_group(group_index, duration, alignment, on_complete);
    }

    /// Scrolls to the group containing `item_index` over `duration`, shaped
    /// by `easing`.
    ///
    /// `duration`, `easing`, `alignment`, and `on_complete` pass through
    /// unchanged.
    pub fn scroll_to_item_eased(
        &mut self,
        item_index: usize,
        duration: Duration,
        easing: Easing,
        alignment: Alignment,
        on_complete: Option<OnComplete>,
    ) {
        let group_index = self.layout.group_of(item_index);
        gtrace!(item_index, group_index, "scroll_to_item_eased");
        self.scroller
            .scroll_to_group_eased(group_index, duration, easing, alignment, on_complete);
    }
}
