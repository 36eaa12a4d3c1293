//! Tests for the calculator engine.

use strictly_calculator::{CalcError, Calculator, EntryToken, Operation};

fn press(calc: &mut Calculator, keys: &str) {
    for key in keys.chars() {
        if let Some(token) = EntryToken::from_key(key) {
            calc.append(token);
        } else if let Some(op) = Operation::from_key(key) {
            calc.choose_operation(op);
        } else if key == '=' {
            let _ = calc.compute();
        } else {
            panic!("unexpected key {key}");
        }
    }
}

#[test]
fn test_initial_state() {
    let calc = Calculator::new();
    assert_eq!(calc.current_operand(), "0");
    assert_eq!(calc.previous_operand(), "");
    assert_eq!(calc.pending_operation(), None);
    assert!(!calc.awaiting_fresh_input());
    assert!(!calc.is_error_state());
}

#[test]
fn test_digit_replaces_lone_zero() {
    let mut calc = Calculator::new();
    press(&mut calc, "007");
    assert_eq!(calc.current_operand(), "7");
}

#[test]
fn test_point_after_zero_keeps_zero() {
    let mut calc = Calculator::new();
    press(&mut calc, ".5");
    assert_eq!(calc.current_operand(), "0.5");
}

#[test]
fn test_second_point_rejected() {
    let mut calc = Calculator::new();
    press(&mut calc, "1.2.3.");
    assert_eq!(calc.current_operand(), "1.23");
    assert_eq!(calc.current_operand().matches('.').count(), 1);
}

#[test]
fn test_simple_operations() {
    for (keys, expected) in [
        ("12+30=", "42"),
        ("5-8=", "-3"),
        ("2.5*4=", "10"),
        ("7/2=", "3.5"),
        ("1/3=", "0.3333333333"),
        ("0.1+0.2=", "0.3"),
    ] {
        let mut calc = Calculator::new();
        press(&mut calc, keys);
        assert_eq!(calc.current_operand(), expected, "keys {keys}");
    }
}

#[test]
fn test_compute_sets_fresh_input() {
    let mut calc = Calculator::new();
    press(&mut calc, "2+3");
    assert_eq!(calc.compute(), Ok(Some(5.0)));
    assert!(calc.awaiting_fresh_input());
    assert_eq!(calc.previous_operand(), "");
    assert_eq!(calc.pending_operation(), None);

    press(&mut calc, "9");
    assert_eq!(calc.current_operand(), "9");
}

#[test]
fn test_compute_without_operation_is_noop() {
    let mut calc = Calculator::new();
    press(&mut calc, "12");
    assert_eq!(calc.compute(), Ok(None));
    assert_eq!(calc.current_operand(), "12");
    assert!(!calc.awaiting_fresh_input());
}

#[test]
fn test_chained_operations_fold_pending() {
    let mut calc = Calculator::new();
    press(&mut calc, "2+3+");
    assert_eq!(calc.previous_operand(), "5");
    assert_eq!(calc.current_operand(), "5");
    assert_eq!(calc.pending_operation(), Some(Operation::Add));

    press(&mut calc, "4=");
    assert_eq!(calc.current_operand(), "9");
}

#[test]
fn test_changing_operator_does_not_compute() {
    let mut calc = Calculator::new();
    press(&mut calc, "6+*");
    assert_eq!(calc.previous_operand(), "6");
    assert_eq!(calc.pending_operation(), Some(Operation::Multiply));

    press(&mut calc, "7=");
    assert_eq!(calc.current_operand(), "42");
}

#[test]
fn test_divide_by_zero_then_recover() {
    let mut calc = Calculator::new();
    press(&mut calc, "6/0");
    assert_eq!(calc.compute(), Err(CalcError::DivideByZero));
    assert!(calc.is_error_state());
    assert_eq!(calc.readout().current, "Cannot divide by zero");
    assert_eq!(calc.previous_operand(), "");
    assert_eq!(calc.pending_operation(), None);

    press(&mut calc, "5");
    assert!(!calc.is_error_state());
    assert_eq!(calc.current_operand(), "5");
    assert_eq!(calc.readout().current, "5");
}

#[test]
fn test_overflow_reports_too_large() {
    let mut calc = Calculator::new();
    let huge = "9".repeat(200);
    press(&mut calc, &huge);
    press(&mut calc, "*");
    press(&mut calc, &huge);
    assert_eq!(calc.compute(), Err(CalcError::Overflow));
    assert_eq!(calc.readout().current, "Result is too large");
}

#[test]
fn test_operation_ignored_in_error_state() {
    let mut calc = Calculator::new();
    press(&mut calc, "1/0=");
    assert_eq!(calc.error(), Some(CalcError::DivideByZero));

    calc.choose_operation(Operation::Add);
    assert_eq!(calc.pending_operation(), None);
    assert_eq!(calc.error(), Some(CalcError::DivideByZero));
}

#[test]
fn test_chained_divide_by_zero_enters_error() {
    let mut calc = Calculator::new();
    press(&mut calc, "8/0+");
    assert_eq!(calc.error(), Some(CalcError::DivideByZero));
    assert_eq!(calc.pending_operation(), None);
}

#[test]
fn test_delete_last_char() {
    let mut calc = Calculator::new();
    press(&mut calc, "123");
    calc.delete_last_char();
    assert_eq!(calc.current_operand(), "12");
    calc.delete_last_char();
    calc.delete_last_char();
    assert_eq!(calc.current_operand(), "0");
    calc.delete_last_char();
    assert_eq!(calc.current_operand(), "0");
}

#[test]
fn test_delete_ignored_after_result() {
    let mut calc = Calculator::new();
    press(&mut calc, "12+34=");
    calc.delete_last_char();
    assert_eq!(calc.current_operand(), "46");
}

#[test]
fn test_negative_result_chains() {
    let mut calc = Calculator::new();
    press(&mut calc, "0-4=");
    assert_eq!(calc.current_operand(), "-4");
    press(&mut calc, "+1=");
    assert_eq!(calc.current_operand(), "-3");
    assert_eq!(calc.readout().current, "-3");
}

#[test]
fn test_clear_resets_everything() {
    let mut calc = Calculator::new();
    press(&mut calc, "9/0=");
    calc.clear();
    assert_eq!(calc, Calculator::new());

    press(&mut calc, "4+5");
    calc.clear();
    assert_eq!(calc, Calculator::new());
}

#[test]
fn test_readout_shows_pending_operation() {
    let mut calc = Calculator::new();
    press(&mut calc, "1234-");
    let readout = calc.readout();
    assert_eq!(readout.current, "1,234");
    assert_eq!(readout.previous, "1,234 −");
    assert_eq!(readout.pending, Some(Operation::Subtract));
    assert!(!readout.error);
}

#[test]
fn test_compute_matches_direct_evaluation() {
    let operands: [f64; 5] = [0.5, 3.0, 12.25, 1000.0, 7.125];
    for lhs in operands {
        for rhs in operands {
            for op in [Operation::Add, Operation::Subtract, Operation::Multiply, Operation::Divide] {
                let mut calc = Calculator::new();
                press(&mut calc, &lhs.to_string());
                calc.choose_operation(op);
                press(&mut calc, &rhs.to_string());
                let direct = match op {
                    Operation::Add => lhs + rhs,
                    Operation::Subtract => lhs - rhs,
                    Operation::Multiply => lhs * rhs,
                    Operation::Divide => lhs / rhs,
                };
                let expected: f64 = (direct * 1e10_f64).round() / 1e10;
                assert_eq!(calc.compute(), Ok(Some(expected)), "{lhs} {op} {rhs}");
            }
        }
    }
}
