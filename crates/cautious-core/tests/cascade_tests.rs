//! Tests for single-pass cascades.

use cautious_core::{cascade, try_cascade, Exit, Halt, OrHalt, Steps};
use std::cell::RefCell;
use std::num::ParseIntError;

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

/// Four checkpoints, each guarded by the trigger that stops right after it.
fn milestone(trigger: Option<&str>) -> Option<i32> {
    cascade(|steps| {
        steps.exit_if(trigger.is_none())?;
        steps.set(1);
        steps.exit_if(trigger == Some("step1"))?;
        steps.set(2);
        steps.exit_if(trigger == Some("step2"))?;
        steps.set(3);
        steps.exit_if(trigger == Some("step3"))?;
        steps.set(4);
        Ok(())
    })
}

/// Same shape, but the result lives in a captured variable.
fn milestone_captured(trigger: Option<&str>) -> Option<i32> {
    let mut ultimate = None;
    cascade::<(), _>(|steps| {
        steps.exit_if(trigger.is_none())?;
        ultimate = Some(1);
        steps.exit_if(trigger == Some("step1"))?;
        ultimate = Some(2);
        steps.exit_if(trigger == Some("step2"))?;
        ultimate = Some(3);
        steps.exit_if(trigger == Some("step3"))?;
        ultimate = Some(4);
        Ok(())
    });
    ultimate
}

fn parse_steps(inputs: &[&str]) -> Result<Option<i64>, ParseIntError> {
    try_cascade(|steps: &mut Steps<i64>| {
        for input in inputs {
            let n = input.parse::<i64>().or_halt()?;
            steps.exit_if(n < 0)?;
            steps.set(n);
        }
        Ok(())
    })
}

// ══════════════════════════════════════════════════════════════════════════════
// Fallthrough
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn stops_at_matching_checkpoint() {
    assert_eq!(milestone(Some("step1")), Some(1));
    assert_eq!(milestone(Some("step2")), Some(2));
    assert_eq!(milestone(Some("step3")), Some(3));
}

#[test]
fn unmatched_trigger_runs_to_the_end() {
    assert_eq!(milestone(Some("foobar")), Some(4));
}

#[test]
fn absent_trigger_yields_nothing() {
    assert_eq!(milestone(None), None);
}

#[test]
fn captured_assignments_behave_the_same() {
    assert_eq!(milestone_captured(None), None);
    assert_eq!(milestone_captured(Some("step1")), Some(1));
    assert_eq!(milestone_captured(Some("step2")), Some(2));
    assert_eq!(milestone_captured(Some("step3")), Some(3));
    assert_eq!(milestone_captured(Some("foobar")), Some(4));
}

#[test]
fn empty_computation_yields_nothing() {
    assert_eq!(cascade::<i32, _>(|_| Ok(())), None);
}

#[test]
fn exit_on_first_step_yields_nothing() {
    assert_eq!(cascade::<i32, _>(|steps| steps.exit()), None);
}

#[test]
fn no_step_runs_after_exit() {
    let log = RefCell::new(Vec::new());
    let result = cascade(|steps| {
        log.borrow_mut().push("a");
        steps.set("a");
        steps.exit()?;
        log.borrow_mut().push("b");
        steps.set("b");
        Ok(())
    });
    assert_eq!(result, Some("a"));
    assert_eq!(*log.borrow(), vec!["a"]);
}

#[test]
fn later_assignment_replaces_earlier() {
    let result = cascade(|steps| {
        steps.set("first");
        assert_eq!(steps.value(), Some(&"first"));
        steps.set("second");
        assert_eq!(steps.assignments(), 2);
        Ok(())
    });
    assert_eq!(result, Some("second"));
}

#[test]
fn runs_exactly_once() {
    let runs = RefCell::new(0);
    let _ = cascade::<(), _>(|_| {
        *runs.borrow_mut() += 1;
        Ok(())
    });
    assert_eq!(*runs.borrow(), 1);
}

#[test]
fn repeated_calls_agree() {
    assert_eq!(milestone(Some("step2")), milestone(Some("step2")));
}

// ══════════════════════════════════════════════════════════════════════════════
// Failures
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn try_cascade_intercepts_exit() {
    assert_eq!(parse_steps(&["1", "2", "-1", "7"]), Ok(Some(2)));
    assert_eq!(parse_steps(&["1", "2", "3"]), Ok(Some(3)));
    assert_eq!(parse_steps(&[]), Ok(None));
}

#[test]
fn try_cascade_propagates_failures() {
    let err = parse_steps(&["1", "oops", "3"]).unwrap_err();
    assert_eq!(err, "oops".parse::<i64>().unwrap_err());
}

#[test]
fn explicit_halt_fail_propagates() {
    let result: Result<Option<i32>, &str> = try_cascade(|steps| {
        steps.set(1);
        Err(Halt::Fail("broken"))
    });
    assert_eq!(result, Err("broken"));
}

#[test]
#[should_panic(expected = "step panicked")]
fn panics_are_not_intercepted() {
    let _ = cascade::<i32, _>(|_| panic!("step panicked"));
}

#[test]
fn exit_converts_into_halt() {
    let halt: Halt<String> = Exit.into();
    assert_eq!(halt, Halt::Exit);
    assert_eq!(Exit.to_string(), "cascade exit");
}
