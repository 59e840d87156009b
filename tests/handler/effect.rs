use solve_rail::{evaluate_effect, EffectHandler, Fault, Outcome, Panicked, WrapException};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::io;

fn denied() -> EffectHandler<io::Error> {
    evaluate_effect(|| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")))
}

#[test]
fn success_runs_success_hooks_only() {
    let log = RefCell::new(Vec::new());

    let handler = EffectHandler::success()
        .do_on_error(|_| log.borrow_mut().push("error"))
        .do_on_success(|| log.borrow_mut().push("success"));

    assert!(handler.is_success());
    assert_eq!(*log.borrow(), ["success"]);
}

#[test]
fn do_on_error_as_matches_runtime_type() {
    let kind = Cell::new(None);

    let _ = denied()
        .do_on_error_as(|_: &fmt::Error| kind.set(Some(io::ErrorKind::Other)))
        .do_on_error_as(|e: &io::Error| kind.set(Some(e.kind())));

    assert_eq!(kind.get(), Some(io::ErrorKind::PermissionDenied));
}

#[test]
fn catch_error_clears_error() {
    let seen = RefCell::new(String::new());
    let handler = denied().catch_error(|fault| *seen.borrow_mut() = fault.to_string());

    assert!(handler.is_success());
    assert_eq!(*seen.borrow(), "denied");
}

#[test]
fn catch_error_as_leaves_foreign_error() {
    let handler = denied().catch_error_as(|_: fmt::Error| ());
    assert!(handler.is_failed());
}

#[test]
fn map_error_as_rewrites_matching_error() {
    let handler = denied()
        .map_error_as(|e: io::Error| Fault::msg(format!("io {}", e.kind())))
        .map_error_as(|_: io::Error| Fault::msg("unreachable"));

    assert_eq!(handler.error().unwrap().to_string(), "io permission denied");
}

#[test]
fn solve_continues_only_without_error() {
    let produced = EffectHandler::success().solve(|| Ok::<_, Fault>(5));
    assert_eq!(produced.value_or(0), 5);

    let skipped = denied().solve(|| Ok::<_, Fault>(5));
    assert_eq!(skipped.value_or(0), 0);
}

#[test]
fn solve_either_turns_error_into_value() {
    let handler =
        denied().solve_either(|| Ok::<_, Fault>(0), |fault| Ok(fault.to_string().len()));
    assert_eq!(handler.value_or(0), 6);
}

#[test]
fn effect_and_effect_either_chain() {
    let steps = Cell::new(0);

    let handler = EffectHandler::success()
        .effect(|| {
            steps.set(steps.get() + 1);
            Ok::<(), io::Error>(())
        })
        .effect(|| Err::<(), _>(Fault::msg("second failed")))
        .effect(|| {
            steps.set(steps.get() + 100);
            Ok::<(), Fault>(())
        })
        .effect_either(|| Ok::<(), Fault>(()), Err);

    assert_eq!(steps.get(), 1);
    assert_eq!(handler.error().unwrap().to_string(), "second failed");
}

#[test]
fn panic_in_effect_is_captured() {
    let handler = evaluate_effect(|| -> Result<(), Fault> { panic!("boom") });

    assert!(handler.error().unwrap().is::<Panicked>());
}

#[test]
fn terminal_operators() {
    assert!(EffectHandler::success().raise().is_ok());
    assert_eq!(denied().raise().unwrap_err().to_string(), "denied");
    assert_eq!(denied().raise_with(|f| f.to_string()).unwrap_err(), "denied");
    assert!(denied().try_complete().is_err());
    assert!(EffectHandler::success().into_error().is_none());
    assert!(matches!(EffectHandler::success().into_outcome(), Outcome::Solved(())));
}

#[derive(Debug)]
struct TaskError(Option<WrapException>);

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("task failed")
    }
}

impl std::error::Error for TaskError {}

impl From<WrapException> for TaskError {
    fn from(e: WrapException) -> Self {
        TaskError(Some(e))
    }
}

#[test]
fn raise_as_retags_foreign_error() {
    let handler: EffectHandler<TaskError> =
        EffectHandler::from_outcome(Outcome::Failed(Fault::msg("raw")));
    let error = handler.raise_as().unwrap_err();

    assert_eq!(error.0.unwrap().cause().to_string(), "raw");
}

#[test]
fn from_result_and_failure_option() {
    let handler: EffectHandler<io::Error> = Ok(()).into();
    assert!(handler.is_success());

    let handler = EffectHandler::failure_option(Some(io::Error::other("given")));
    assert_eq!(handler.error().unwrap().to_string(), "given");
}

#[test]
fn map_error_keeps_suppressed() {
    let handler = EffectHandler::<Fault>::failure(
        Fault::msg("write failed").with_suppressed(Fault::msg("flush failed")),
    )
    .map_error(|fault| Fault::msg(format!("save: {fault}")));

    let fault = handler.error().unwrap();
    assert_eq!(fault.to_string(), "save: write failed");
    assert_eq!(fault.suppressed()[0].to_string(), "flush failed");
}

#[test]
fn raise_as_wraps_error_with_suppressed() {
    let handler: EffectHandler<TaskError> = EffectHandler::from_outcome(Outcome::Failed(
        Fault::new(TaskError(None)).with_suppressed(Fault::msg("close failed")),
    ));
    let error = handler.raise_as().unwrap_err();

    let wrapped = error.0.unwrap();
    assert!(wrapped.cause().is::<TaskError>());
    assert_eq!(wrapped.cause().suppressed()[0].to_string(), "close failed");
}
