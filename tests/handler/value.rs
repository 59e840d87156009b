use solve_rail::{evaluate, CastError, Fault, Outcome, Scoped, ValueHandler};
use std::cell::Cell;
use std::io;
use std::num::ParseIntError;

fn io_failure() -> ValueHandler<i32, io::Error> {
    evaluate(|| Err(io::Error::other("disk")))
}

#[test]
fn value_or_returns_value_or_fallback() {
    assert_eq!(evaluate(|| Ok::<_, Fault>(5)).value_or(0), 5);
    assert_eq!(io_failure().value_or(0), 0);
}

#[test]
fn map_skips_failed_handler() {
    let calls = Cell::new(0);
    let handler = io_failure().map(|v| {
        calls.set(calls.get() + 1);
        v * 2
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(handler.error().unwrap().to_string(), "disk");
}

#[test]
fn flat_map_keeps_inner_outcome() {
    let handler = ValueHandler::solved(4)
        .flat_map(|v| ValueHandler::<i32>::failure(Fault::msg(format!("rejected {v}"))));

    assert!(handler.is_failed());
    assert_eq!(handler.error().unwrap().to_string(), "rejected 4");
}

#[test]
fn side_effects_observe_without_changing() {
    let seen = Cell::new(0);

    let handler = ValueHandler::solved(3)
        .do_on_success(|v| seen.set(*v))
        .do_on_error(|_| seen.set(-1));

    assert_eq!(seen.get(), 3);
    assert_eq!(handler.value(), Some(&3));
}

#[test]
fn do_on_error_as_ignores_other_types() {
    let hits = Cell::new(0);

    let handler = io_failure()
        .do_on_error_as(|_: &ParseIntError| hits.set(hits.get() + 10))
        .do_on_error_as(|_: &io::Error| hits.set(hits.get() + 1));

    assert_eq!(hits.get(), 1);
    assert!(handler.is_failed());
}

#[test]
fn catch_error_recovers_any_error() {
    let value = io_failure().catch_error(|fault| fault.to_string().len() as i32).value_or(0);
    assert_eq!(value, 4);
}

#[test]
fn catch_error_as_recovers_matching_type_only() {
    let untouched = io_failure().catch_error_as(|_: ParseIntError| 1);
    assert!(untouched.error().unwrap().is::<io::Error>());

    let recovered = untouched.catch_error_as(|_: io::Error| 2);
    assert_eq!(recovered.value_or(0), 2);
}

#[test]
fn catch_error_as_on_solved_is_noop() {
    let handler = ValueHandler::solved(9).catch_error_as(|_: io::Error| 0);
    assert_eq!(handler.value_or(-1), 9);
}

#[test]
fn map_error_replaces_error_and_stays_failed() {
    let handler = io_failure().map_error(|fault| Fault::msg(format!("wrapped: {fault}")));

    assert!(handler.is_failed());
    assert_eq!(handler.error().unwrap().to_string(), "wrapped: disk");
}

#[test]
fn map_error_as_keeps_suppressed() {
    let handler = ValueHandler::<i32>::failure(
        Fault::new(io::Error::other("read")).with_suppressed(Fault::msg("close")),
    )
    .map_error_as(|e: io::Error| Fault::msg(format!("io: {e}")));

    let fault = handler.error().unwrap();
    assert_eq!(fault.to_string(), "io: read");
    assert_eq!(fault.suppressed()[0].to_string(), "close");
}

#[test]
fn solve_chains_and_relabels() {
    let port: ValueHandler<u16, ParseIntError> =
        evaluate(|| Ok::<_, io::Error>("8080")).solve(|raw| raw.parse::<u16>());
    assert_eq!(port.value_or(0), 8080);

    let skipped = io_failure().solve(|v| Ok::<_, ParseIntError>(v.to_string()));
    assert_eq!(skipped.error().unwrap().to_string(), "disk");
}

#[test]
fn solve_captures_panic() {
    let handler = ValueHandler::solved(0).solve(|v: i32| -> Result<i32, Fault> {
        if v == 0 {
            panic!("division by zero");
        }
        Ok(10 / v)
    });

    assert!(handler.error().unwrap().is::<solve_rail::Panicked>());
}

#[test]
fn solve_either_runs_exactly_one_branch() {
    let from_error = io_failure().solve_either(
        |v| Ok::<_, Fault>(format!("value {v}")),
        |fault| Ok(format!("recovered {fault}")),
    );
    assert_eq!(from_error.value_or_none().as_deref(), Some("recovered disk"));

    let from_value = ValueHandler::solved(1).solve_either(
        |v| Err::<String, _>(Fault::msg(format!("bad {v}"))),
        |_| Ok(String::new()),
    );
    assert_eq!(from_value.error().unwrap().to_string(), "bad 1");
}

#[test]
fn effect_produces_effect_handler() {
    let store = Cell::new(0);
    let handler = ValueHandler::solved(12).effect(|v| {
        store.set(v);
        Ok::<(), io::Error>(())
    });

    assert!(handler.is_success());
    assert_eq!(store.get(), 12);

    let failed = io_failure().effect_either(|_| Ok::<(), Fault>(()), Err);
    assert_eq!(failed.error().unwrap().to_string(), "disk");
}

#[test]
fn cast_to_same_type_keeps_value() {
    let handler = ValueHandler::solved(String::from("kept")).cast::<String>();
    assert_eq!(handler.value_or_none().as_deref(), Some("kept"));
}

#[test]
fn cast_or_else_sees_original_value() {
    let handler = ValueHandler::solved(300_i32)
        .cast_or_else::<u8, _, _>(|v, e: CastError| Fault::msg(format!("{v}: {e}")));

    assert!(handler.error().unwrap().to_string().starts_with("300: cannot cast"));
}

#[test]
fn filter_fails_on_rejected_value() {
    let kept = ValueHandler::solved(2).filter(|v| v % 2 == 0, |_| Fault::msg("odd"));
    assert_eq!(kept.value_or(0), 2);

    let dropped =
        ValueHandler::solved(3).filter(|v| v % 2 == 0, |v| Fault::msg(format!("odd {v}")));
    assert_eq!(dropped.error().unwrap().to_string(), "odd 3");
}

#[test]
fn terminal_operators() {
    assert_eq!(io_failure().value_or_else(|fault| fault.to_string().len() as i32), 4);
    assert_eq!(io_failure().value_or_compute(|| 7), 7);
    assert_eq!(io_failure().into_option(), None);
    assert_eq!(io_failure().value_or_raise().unwrap_err().to_string(), "disk");
    assert_eq!(io_failure().value_or_raise_with(|f| f.to_string()).unwrap_err(), "disk");
    assert!(io_failure().try_value().is_err());
    assert!(matches!(io_failure().into_outcome(), Outcome::Failed(_)));

    assert_eq!(ValueHandler::solved(1).value_or_raise().unwrap(), 1);
    assert_eq!(ValueHandler::solved(1).try_value().unwrap(), 1);
}

#[test]
fn value_or_compute_is_lazy() {
    let calls = Cell::new(0);
    let value = ValueHandler::solved(1).value_or_compute(|| {
        calls.set(1);
        0
    });

    assert_eq!(value, 1);
    assert_eq!(calls.get(), 0);
}

#[test]
fn from_result_matches_evaluate() {
    let handler: ValueHandler<i32, io::Error> = Err(io::Error::other("x")).into();
    assert!(handler.is_failed());

    let handler = ValueHandler::<_, io::Error>::from_result(Ok(3));
    assert_eq!(handler.value(), Some(&3));
}

#[test]
fn map_to_resource_skips_mapper_on_error() {
    let built = Cell::new(false);
    let handler = io_failure().map_to_resource(|v| {
        built.set(true);
        Scoped::new(v, |_: i32| Ok::<(), Fault>(()))
    });

    assert!(!built.get());
    assert!(!handler.is_acquired());
    assert_eq!(handler.error().unwrap().to_string(), "disk");
}

#[test]
fn solve_to_resource_acquires_then_releases() {
    let closed = Cell::new(false);
    let len = ValueHandler::solved("abc")
        .solve_to_resource(|name| {
            Ok::<_, io::Error>(Scoped::new(name.to_owned(), |_: String| {
                closed.set(true);
                Ok::<(), Fault>(())
            }))
        })
        .solve(|name| Ok::<_, Fault>(name.len()))
        .value_or(0);

    assert_eq!(len, 3);
    assert!(closed.get());
}

#[test]
fn map_error_keeps_suppressed() {
    let handler = ValueHandler::<i32>::failure(
        Fault::msg("step failed").with_suppressed(Fault::msg("close failed")),
    )
    .map_error(|fault| Fault::msg(format!("wrapped: {fault}")));

    let fault = handler.error().unwrap();
    assert_eq!(fault.to_string(), "wrapped: step failed");
    assert_eq!(fault.suppressed().len(), 1);
    assert_eq!(fault.suppressed()[0].to_string(), "close failed");
}

#[test]
fn cast_or_else_on_same_type_skips_mapper() {
    let called = Cell::new(false);
    let handler = ValueHandler::solved(5_u8).cast_or_else::<u8, _, _>(|_, e| {
        called.set(true);
        e
    });

    assert_eq!(handler.value_or(0), 5);
    assert!(!called.get());
}
