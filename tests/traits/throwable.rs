use std::panic::{catch_unwind, AssertUnwindSafe};

use fault_rail::traits::Throwable;
use fault_rail::types::Panic;

fn thrown<T: Throwable>(value: T) -> Panic {
    catch_unwind(AssertUnwindSafe(|| value.throw())).unwrap_err()
}

#[test]
fn panic_payloads_are_resumed_by_identity() {
    let payload: Panic = Box::new(vec![9u8, 8, 7]);
    let caught = thrown(payload);
    assert_eq!(*caught.downcast_ref::<Vec<u8>>().unwrap(), [9, 8, 7]);
}

#[test]
fn strings_become_string_payloads() {
    let caught = thrown(String::from("no credentials"));
    assert_eq!(caught.downcast_ref::<String>().unwrap(), "no credentials");

    let caught = thrown("static message");
    assert_eq!(*caught.downcast_ref::<&str>().unwrap(), "static message");
}

#[test]
fn boxed_errors_ride_as_boxed_errors() {
    let error: Box<dyn std::error::Error + Send + Sync> =
        Box::new(std::io::Error::other("disk offline"));
    let caught = thrown(error);

    let recovered = caught
        .downcast_ref::<Box<dyn std::error::Error + Send + Sync>>()
        .unwrap();
    assert_eq!(recovered.to_string(), "disk offline");
}

#[test]
fn custom_sources_can_implement_the_seam() {
    #[derive(Debug, PartialEq)]
    struct Quota(u64);

    impl Throwable for Quota {
        fn throw(self) -> ! {
            std::panic::resume_unwind(Box::new(self))
        }
    }

    let caught = thrown(Quota(99));
    assert_eq!(*caught.downcast_ref::<Quota>().unwrap(), Quota(99));
}
