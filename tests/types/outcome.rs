use solve_rail::{Fault, NullError, NullValue, Outcome};

#[test]
fn fold_applies_exactly_one_callback() {
    let mut calls = Vec::new();

    let solved: Outcome<&str, i32> = Outcome::Solved(3);
    let out = solved.fold(
        |e| {
            calls.push("error");
            e.len() as i32
        },
        |v| v + 1,
    );
    assert_eq!(out, 4);
    assert!(calls.is_empty());

    let failed: Outcome<&str, i32> = Outcome::Failed("boom");
    assert_eq!(failed.fold(|e| e.len() as i32, |_| unreachable!()), 4);
}

#[test]
fn try_constructors_reject_absence() {
    assert_eq!(Outcome::<&str, u8>::try_solved(None), Err(NullValue));
    assert_eq!(Outcome::<&str, u8>::try_failed(None), Err(NullError));
    assert_eq!(Outcome::<&str, u8>::try_failed(Some("e")), Ok(Outcome::Failed("e")));
}

#[test]
fn queries_agree_with_variant() {
    let solved: Outcome<(), u8> = Outcome::Solved(1);
    let failed: Outcome<(), u8> = Outcome::Failed(());

    assert!(solved.is_solved() && !solved.is_failed());
    assert!(failed.is_failed() && !failed.is_solved());
}

#[test]
fn map_success_leaves_error_untouched() {
    let failed: Outcome<&str, i32> = Outcome::Failed("kept");
    assert_eq!(failed.map_success(|v| v * 2), Outcome::Failed("kept"));

    let solved: Outcome<&str, i32> = Outcome::Solved(21);
    assert_eq!(solved.map_success(|v| v * 2), Outcome::Solved(42));
}

#[test]
fn map_error_leaves_value_untouched() {
    let solved: Outcome<&str, i32> = Outcome::Solved(1);
    assert_eq!(solved.map_error(str::len), Outcome::Solved(1));

    let failed: Outcome<&str, i32> = Outcome::Failed("four");
    assert_eq!(failed.map_error(str::len), Outcome::Failed(4));
}

#[test]
fn map_both_picks_side() {
    let failed: Outcome<&str, i32> = Outcome::Failed("ab");
    assert_eq!(failed.map_both(str::len, |v| v as usize), Outcome::Failed(2));
}

#[test]
fn flat_map_can_switch_sides() {
    let solved: Outcome<&str, i32> = Outcome::Solved(-1);
    let checked = solved.flat_map_success(|v| {
        if v < 0 {
            Outcome::Failed("negative")
        } else {
            Outcome::Solved(v)
        }
    });
    assert_eq!(checked, Outcome::Failed("negative"));

    let recovered = checked.flat_map_error(|_| Outcome::<&str, i32>::Solved(0));
    assert_eq!(recovered, Outcome::Solved(0));
}

#[test]
fn inspect_runs_on_matching_side_only() {
    let mut seen = Vec::new();

    let _ = Outcome::<&str, i32>::Solved(5)
        .inspect_error(|e| seen.push(format!("error {e}")))
        .inspect_success(|v| seen.push(format!("value {v}")));
    let _ = Outcome::<&str, i32>::Failed("x")
        .inspect_success(|v| seen.push(format!("value {v}")))
        .inspect_error(|e| seen.push(format!("error {e}")));

    assert_eq!(seen, ["value 5", "error x"]);
}

#[test]
fn defaults_and_optionals() {
    let solved: Outcome<&str, i32> = Outcome::Solved(7);
    let failed: Outcome<&str, i32> = Outcome::Failed("e");

    assert_eq!(solved.success_or(0), 7);
    assert_eq!(failed.success_or(0), 0);
    assert_eq!(solved.error_or("none"), "none");
    assert_eq!(failed.error_or("none"), "e");
    assert_eq!(solved.to_optional_success(), Some(7));
    assert_eq!(solved.to_optional_error(), None);
    assert_eq!(failed.to_optional_error(), Some("e"));
}

#[test]
fn converts_to_and_from_result() {
    let outcome: Outcome<&str, i32> = Outcome::from(Ok::<i32, &str>(1));
    assert_eq!(outcome, Outcome::Solved(1));

    let result: Result<i32, &str> = Outcome::<&str, i32>::Failed("e").into();
    assert_eq!(result, Err("e"));
}

#[test]
fn unwrap_solved_reports_stored_error() {
    let failed: Outcome<Fault, i32> = Outcome::Failed(Fault::msg("stored"));
    let failure = failed.unwrap_solved().unwrap_err();

    assert_eq!(failure.cause().unwrap().to_string(), "stored");
    assert!(Outcome::<Fault, i32>::Solved(1).unwrap_failed().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn outcome_serializes_as_tagged_enum() {
    let solved: Outcome<String, u32> = Outcome::Solved(8);
    let json = serde_json::to_string(&solved).unwrap();
    assert_eq!(json, r#"{"Solved":8}"#);

    let back: Outcome<String, u32> = serde_json::from_str(r#"{"Failed":"bad"}"#).unwrap();
    assert_eq!(back, Outcome::Failed(String::from("bad")));
}
