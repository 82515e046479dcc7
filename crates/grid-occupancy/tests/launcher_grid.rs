//! End-to-end placement scenarios on a phone-sized launcher grid.

use grid_occupancy::{
    AnyRow, CellSpan, ItemCategory, ItemType, OccupancyGrid, ReservedBand,
};

fn home_grid() -> OccupancyGrid {
    OccupancyGrid::new(4, 6).unwrap()
}

#[test]
fn four_by_six_scenario() {
    let mut g = home_grid();
    g.mark_cells(0, 0, 1, 1, true);
    assert_eq!(g.find_vacant_cell(1, 1, ItemCategory::WidgetLike), Some((1, 0)));
    assert_eq!(g.find_vacant_cell(4, 2, ItemCategory::Other), Some((0, 4)));
    assert!(!g.is_region_vacant(-1, 0, 1, 1));
}

#[test]
fn fill_widget_band_then_exhaust() {
    let mut g = home_grid();
    let mut placed = Vec::new();
    while let Some((x, y)) = g.find_vacant_cell(2, 2, ItemType::AppWidget.category()) {
        g.mark_span(&CellSpan::new(x, y, 2, 2), true);
        placed.push((x, y));
    }
    assert_eq!(placed, vec![(0, 0), (2, 0), (0, 2), (2, 2)]);
    assert_eq!(g.occupied_count(), 16);
    // The reserved band is untouched and still takes other items.
    assert!(g.is_region_vacant(0, 4, 4, 2));
    assert_eq!(
        g.find_vacant_cell(1, 1, ItemType::Application.category()),
        Some((0, 4))
    );
}

#[test]
fn speculative_trial_on_snapshot() {
    let mut live = home_grid();
    live.mark_cells(0, 4, 3, 1, true);

    let mut trial = live.clone();
    let (x, y) = trial
        .find_vacant_cell(1, 1, ItemCategory::Other)
        .expect("room in band");
    assert_eq!((x, y), (3, 4));
    trial.mark_cells(x, y, 1, 1, true);

    assert!(live.is_region_vacant(3, 4, 1, 1));
    assert!(!trial.is_region_vacant(3, 4, 1, 1));
}

#[test]
fn injected_policies() {
    let mut g = home_grid();
    g.mark_cells(0, 0, 4, 1, true);
    assert_eq!(g.find_vacant_cell_in(4, 1, &AnyRow), Some((0, 1)));
    assert_eq!(
        g.find_vacant_cell_in(4, 1, &ReservedBand(ItemCategory::Other)),
        Some((0, 4))
    );
    let last_row_only = |count_y: i32| count_y - 1..count_y;
    assert_eq!(g.find_vacant_cell_in(2, 1, &last_row_only), Some((0, 5)));
    assert!(!g.is_region_vacant_in(0, 4, 1, 1, &last_row_only));
}
