use super::*;

#[test]
fn chevron_points_down_while_collapsed() {
    assert_eq!(chevron(false), "▼");
    assert_eq!(chevron(true), "▲");
}

#[test]
fn expanded_state_reports_aria_value() {
    assert_eq!(expanded_state(false), "false");
    assert_eq!(expanded_state(true), "true");
}
