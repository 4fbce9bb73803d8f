use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fault_rail::prelude::*;

fn counting() -> (Observer, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let observer = Observer::new(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (observer, count)
}

#[test]
fn observes_every_fault_exactly_once() {
    let (observer, count) = counting();

    let _: Outcome<()> = safe_with(|| panic!("a"), "E", &observer);
    let _: Outcome<()> = safe_with(|| panic!("b"), "E", &observer);
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn does_not_fire_on_success() {
    let (observer, count) = counting();
    let _: Outcome<i32> = safe_with(|| 1, "E", &observer);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn observation_is_synchronous_with_construction() {
    let (observer, count) = counting();
    let outcome: Outcome<()> = safe_with(|| panic!("x"), "E", &observer);

    // By the time the outcome is in hand the callback has already run.
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(outcome.is_fault());
}

#[test]
fn set_replaces_the_previous_callback() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let a = Arc::clone(&first);
    let mut observer = Observer::new(move |_| {
        a.fetch_add(1, Ordering::SeqCst);
    });

    let _: Outcome<()> = safe_with(|| panic!("x"), "E", &observer);

    let b = Arc::clone(&second);
    observer.set(move |_| {
        b.fetch_add(1, Ordering::SeqCst);
    });

    let _: Outcome<()> = safe_with(|| panic!("y"), "E", &observer);

    assert_eq!(first.load(Ordering::SeqCst), 1, "replaced callback is gone");
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn clear_stops_further_invocations() {
    let (mut observer, count) = counting();
    assert!(observer.is_active());

    let _: Outcome<()> = safe_with(|| panic!("x"), "E", &observer);
    observer.clear();
    assert!(!observer.is_active());

    let _: Outcome<()> = safe_with(|| panic!("y"), "E", &observer);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn a_panicking_callback_is_contained() {
    let observer = Observer::new(|_| panic!("observer bug"));

    let (fault, _): (_, Option<i32>) = safe_with(|| panic!("real failure"), "E", &observer);
    let fault = fault.expect("fault construction must complete");
    assert_eq!(fault.message(), "real failure");
}

#[test]
fn disabled_observer_is_a_no_op() {
    let observer = Observer::disabled();
    assert!(!observer.is_active());
    observer.observe(&Fault::labeled("E"));
}

#[test]
fn tap_routes_through_an_observer_too() {
    let (observer, count) = counting();
    let fault = Fault::labeled("E").tap(&observer);
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(fault.label(), "E");
}

#[test]
fn clones_share_the_callback_installed_at_clone_time() {
    let (observer, count) = counting();
    let clone = observer.clone();

    let _: Outcome<()> = safe_with(|| panic!("x"), "E", &clone);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
