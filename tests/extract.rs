use {
    outcome::{
        Outcome::{self, Failure, Success},
        UnwrapFailure,
    },
    std::panic,
};

/// Runs `op`, asserts that it panicked, and returns the typed panic payload.
fn unwrap_failure_of<R>(op: impl FnOnce() -> R + panic::UnwindSafe) -> UnwrapFailure {
    match panic::catch_unwind(op) {
        Ok(_) => panic!("operation should have panicked"),
        Err(payload) => *payload
            .downcast::<UnwrapFailure>()
            .expect("panic payload should be an UnwrapFailure"),
    }
}

#[test]
fn expect_returns_the_success_payload() {
    let x: Outcome<&str, &str> = Success("this is fine");
    assert_eq!(x.expect("should not panic"), "this is fine");
}

#[test]
fn expect_panics_with_message_and_payload() {
    let failure =
        unwrap_failure_of(|| Failure::<i32, &str>("emergency failure").expect("testing expect"));
    assert_eq!(failure.message(), Some("testing expect"));
    assert_eq!(failure.payload(), "\"emergency failure\"");
    assert_eq!(failure.to_string(), "testing expect: \"emergency failure\"");
}

#[test]
fn unwrap_returns_the_success_payload() {
    let x: Outcome<i32, &str> = Success(2);
    assert_eq!(x.unwrap(), 2);
}

#[test]
fn unwrap_panics_with_payload_only() {
    let failure = unwrap_failure_of(|| Failure::<i32, &str>("emergency failure").unwrap());
    assert_eq!(failure.message(), None);
    assert_eq!(failure.payload(), "\"emergency failure\"");
    assert_eq!(failure.to_string(), "\"emergency failure\"");
}

#[test]
fn unwrap_panics_even_for_empty_payloads() {
    let failure = unwrap_failure_of(|| Failure::<i32, ()>(()).unwrap());
    assert_eq!(failure.payload(), "()");

    let failure = unwrap_failure_of(|| Failure::<i32, &str>("").unwrap());
    assert_eq!(failure.payload(), "\"\"");
}

#[test]
fn expect_err_and_unwrap_err_return_the_failure_payload() {
    let x: Outcome<i32, &str> = Failure("it works");
    assert_eq!(x.expect_err("should not panic"), "it works");

    let x: Outcome<i32, &str> = Failure("it works");
    assert_eq!(x.unwrap_err(), "it works");
}

#[test]
fn expect_err_panics_on_success_with_the_success_payload() {
    let failure = unwrap_failure_of(|| Success::<i32, &str>(10).expect_err("testing expect_err"));
    assert_eq!(failure.message(), Some("testing expect_err"));
    assert_eq!(failure.payload(), "10");
    assert_eq!(failure.to_string(), "testing expect_err: 10");
}

#[test]
fn unwrap_err_panics_on_success_with_the_success_payload() {
    let failure = unwrap_failure_of(|| Success::<i32, &str>(2).unwrap_err());
    assert_eq!(failure.message(), None);
    assert_eq!(failure.to_string(), "2");
}

#[test]
fn unwrap_or_never_panics() {
    assert_eq!(Success::<i32, &str>(9).unwrap_or(2), 9);
    assert_eq!(Failure::<i32, &str>("error").unwrap_or(2), 2);
    assert_eq!(Failure::<i32, ()>(()).unwrap_or(2), 2);
}

#[test]
fn unwrap_or_else_computes_from_the_failure_payload() {
    assert_eq!(Success::<usize, &str>(2).unwrap_or_else(str::len), 2);
    assert_eq!(Failure::<usize, &str>("foo").unwrap_or_else(str::len), 3);
}

#[test]
fn unwrap_or_default_uses_the_success_type_default() {
    assert_eq!(Success::<i32, &str>(9).unwrap_or_default(), 9);
    assert_eq!(Failure::<i32, &str>("e").unwrap_or_default(), 0);
    assert_eq!(Failure::<f64, &str>("e").unwrap_or_default(), 0.0);
    assert_eq!(Failure::<String, i32>(42).unwrap_or_default(), "");
    assert_eq!(
        Failure::<Vec<u8>, &str>("e").unwrap_or_default(),
        Vec::new(),
    );
}
