use super::*;

use std::cell::Cell;
use std::rc::Rc;

#[test]
fn later_calls_supersede_earlier_generations() {
    let debouncer = Debouncer::new();
    let first = debouncer.bump();
    let second = debouncer.bump();
    assert!(!debouncer.is_current(first));
    assert!(debouncer.is_current(second));
}

#[test]
fn clones_share_the_counter() {
    let debouncer = Debouncer::new();
    let clone = debouncer.clone();
    let generation = debouncer.bump();
    clone.bump();
    assert!(!debouncer.is_current(generation));
}

#[test]
fn call_runs_immediately_without_browser() {
    let debouncer = Debouncer::new();
    let runs = Rc::new(Cell::new(0));
    for _ in 0..3 {
        let runs = Rc::clone(&runs);
        debouncer.call(INPUT_DEBOUNCE_MS, move || runs.set(runs.get() + 1));
    }
    assert_eq!(runs.get(), 3);
}
