use crate::engine::domain::{PropertyStatus, UrgencyLevel};
use crate::engine::rollup::rollup_building;

#[test]
fn building_without_active_units_has_no_average() {
    let units = [
        (PropertyStatus::Sold, UrgencyLevel::Sold),
        (PropertyStatus::Rented, UrgencyLevel::Sold),
    ];

    let rollup = rollup_building("B-01", &units);

    assert_eq!(rollup.active_units, 0);
    assert_eq!(rollup.sold_units, 2);
    assert_eq!(rollup.avg_urgency, None);
}

#[test]
fn empty_building_does_not_divide_by_zero() {
    let rollup = rollup_building("B-02", &[]);

    assert_eq!(rollup.active_units, 0);
    assert_eq!(rollup.sold_units, 0);
    assert_eq!(rollup.avg_urgency, None);
}

#[test]
fn terminal_units_are_excluded_from_the_average() {
    let units = [
        (PropertyStatus::Available, UrgencyLevel::Warning),
        (PropertyStatus::Available, UrgencyLevel::Monitor),
        (PropertyStatus::Sold, UrgencyLevel::Sold),
    ];

    let rollup = rollup_building("B-03", &units);

    assert_eq!(rollup.active_units, 2);
    assert_eq!(rollup.sold_units, 1);
    // (4 + 3) / 2
    assert_eq!(rollup.avg_urgency, Some(3.5));
}

#[test]
fn average_is_rounded_to_two_decimals() {
    let units = [
        (PropertyStatus::Available, UrgencyLevel::Urgent),
        (PropertyStatus::Available, UrgencyLevel::Warning),
        (PropertyStatus::Reserved, UrgencyLevel::Warning),
    ];

    let rollup = rollup_building("B-04", &units);

    // 13 / 3 = 4.333...
    assert_eq!(rollup.avg_urgency, Some(4.33));
}
