use fault_rail::{fault, safe};

#[test]
fn fault_without_source_synthesizes_one() {
    let fault = fault!("NOT_FOUND");
    assert_eq!(fault.label(), "NOT_FOUND");
    assert_eq!(fault.message(), "NOT_FOUND");
}

#[test]
fn fault_with_source_stores_it_verbatim() {
    let fault = fault!("RATE_LIMITED", 429u16);
    assert_eq!(fault.label(), "RATE_LIMITED");
    assert_eq!(*fault.source(), 429);
}

#[test]
fn safe_macro_is_shorthand_for_the_closure_form() {
    let (fault, value) = safe!("PARSE_ERROR", "17".parse::<i32>().unwrap());
    assert!(fault.is_none());
    assert_eq!(value, Some(17));

    let (fault, _) = safe!("PARSE_ERROR", "nope".parse::<i32>().unwrap());
    assert_eq!(fault.unwrap().label(), "PARSE_ERROR");
}
