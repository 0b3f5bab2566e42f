use super::*;

#[test]
fn goal_percent_rounds_and_caps() {
    assert_eq!(goal_percent(150.0, 300.0), 50);
    assert_eq!(goal_percent(320.0, 300.0), 100);
    assert_eq!(goal_percent(1.0, 3.0), 33);
}

#[test]
fn goal_percent_guards_bad_input() {
    assert_eq!(goal_percent(100.0, 0.0), 0);
    assert_eq!(goal_percent(f64::NAN, 300.0), 0);
    assert_eq!(goal_percent(-20.0, 300.0), 0);
}
