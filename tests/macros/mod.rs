use solve_rail::{evaluate, fault, ValueHandler};

#[test]
fn fault_macro_formats_message() {
    let id = 7;
    let fault = fault!("user {id} not found");

    assert_eq!(fault.to_string(), "user 7 not found");
    assert!(fault.suppressed().is_empty());
}

#[test]
fn fault_macro_accepts_positional_args() {
    assert_eq!(fault!("{}-{}", "a", 1).to_string(), "a-1");
    assert_eq!(fault!("plain").to_string(), "plain");
}

#[test]
fn fault_macro_inside_chain() {
    let handler: ValueHandler<u32> = evaluate(|| Ok::<_, std::io::Error>(0_u32))
        .filter(|n| *n > 0, |n| fault!("expected positive, got {n}"))
        .solve(|n| Ok::<_, solve_rail::Fault>(n * 2));

    assert_eq!(handler.error().unwrap().to_string(), "expected positive, got 0");
}
