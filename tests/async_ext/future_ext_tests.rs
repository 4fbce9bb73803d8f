use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fault_rail::prelude_async::*;

#[tokio::test]
async fn safe_resolves_to_an_outcome() {
    let (fault, value) = async { 2 + 2 }.safe("MATH_ERROR").await;
    assert!(fault.is_none());
    assert_eq!(value, Some(4));
}

#[tokio::test]
async fn safe_labels_a_panic() {
    let (fault, _): (_, Option<u8>) = async { panic!("worker died") }
        .safe("WORKER_ERROR")
        .await;
    let fault = fault.unwrap();
    assert_eq!(fault.label(), "WORKER_ERROR");
    assert_eq!(fault.message(), "worker died");
}

#[tokio::test]
async fn safe_with_threads_a_hook_through() {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let observer = Observer::new(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    let _: Outcome<()> = async { panic!("x") }.safe_with("E", observer).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn safe_err_lands_err_resolutions_in_the_fault_arm() {
    let (fault, _) = async { "nope".parse::<i32>() }
        .safe_err("PARSE_ERROR")
        .await;
    let fault = fault.unwrap();
    assert_eq!(fault.label(), "PARSE_ERROR");
    assert!(fault
        .source()
        .downcast_ref::<std::num::ParseIntError>()
        .is_some());
}

fn flaky_io() -> Result<(), std::io::Error> {
    panic!("before returning a result");
}

#[tokio::test]
async fn safe_err_still_catches_panics() {
    let (fault, _) = async { flaky_io() }.safe_err("TASK_ERROR").await;
    assert_eq!(fault.unwrap().message(), "before returning a result");
}

#[tokio::test]
async fn method_and_free_function_forms_agree() {
    let via_method = async { 7 }.safe("L").await;
    let via_free = safe_async(async { 7 }, "L").await;
    assert_eq!(via_method.1, via_free.1);
}
