// Example: partition a data set into start-axis groups and remap indices.
use gridscroll::{GridLayout, GridOptions};

fn main() {
    let options = GridOptions::new(3).with_start_axis_spacing(8).with_cell_size(64);
    let mut grid = GridLayout::new(options).expect("capacity >= 1");

    let items: Vec<u32> = (0..11).collect();
    grid.update_contents(&items, |group| {
        println!("group {}: {:?}", group.index, group.items);
    });
    println!("context={:?}", grid.context());
    println!("item 7 -> group {}, slot {}", grid.group_of(7), grid.slot_of(7));

    // Regrouping recomputes everything from scratch.
    grid.set_group_capacity(4).expect("capacity >= 1");
    grid.update_contents(&items, |group| {
        println!("regrouped {}: {:?}", group.index, group.items);
    });
}
