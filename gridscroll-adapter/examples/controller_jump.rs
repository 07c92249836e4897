use core::time::Duration;

use gridscroll::{Alignment, GridOptions};
use gridscroll_adapter::{Easing, GridController, GroupScroller, OnComplete};

// A stand-in scroll view that logs the group-indexed calls it receives.
struct LoggingScroller;

impl GroupScroller for LoggingScroller {
    fn jump_to_group(&mut self, group_index: usize, alignment: Alignment) {
        println!("jump_to_group({group_index}, align={})", alignment.fraction());
    }

    fn scroll_to_group(
        &mut self,
        group_index: usize,
        duration: Duration,
        alignment: Alignment,
        on_complete: Option<OnComplete>,
    ) {
        println!(
            "scroll_to_group({group_index}, {duration:?}, align={})",
            alignment.fraction()
        );
        if let Some(done) = on_complete {
            done();
        }
    }

    fn scroll_to_group_eased(
        &mut self,
        group_index: usize,
        duration: Duration,
        easing: Easing,
        alignment: Alignment,
        on_complete: Option<OnComplete>,
    ) {
        println!(
            "scroll_to_group_eased({group_index}, {duration:?}, {easing:?}, align={})",
            alignment.fraction()
        );
        if let Some(done) = on_complete {
            done();
        }
    }
}

fn main() {
    // Example: the caller thinks in item indexes, the scroll view in group
    // indexes; the controller performs the transform in between.
    let mut c = GridController::new(GridOptions::new(3), LoggingScroller).expect("capacity >= 1");

    let items: Vec<u32> = (0..10).collect();
    c.update_contents(&items, |group| {
        println!("group {}: {:?}", group.index, group.items);
    });

    c.jump_to_item(7, Alignment::default());
    c.scroll_to_item(
        9,
        Duration::from_millis(250),
        Alignment::START,
        Some(Box::new(|| println!("scroll settled"))),
    );
    c.scroll_to_item_eased(
        0,
        Duration::from_millis(120),
        Easing::SmoothStep,
        Alignment::END,
        None,
    );
}
