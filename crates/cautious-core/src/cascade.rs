//! Single-pass fallthrough evaluation.
//!
//! A cascade runs a sequence of steps exactly once. Each step may record a
//! new result with [`Steps::set`] and may stop the pass with
//! [`Steps::exit`]/[`Steps::exit_if`]. The result of the pass is the last
//! value recorded before stopping, or `None` if nothing was recorded.
//!
//! ```
//! use cautious_core::cascade;
//!
//! fn milestone(trigger: Option<&str>) -> Option<i32> {
//!     cascade(|steps| {
//!         steps.exit_if(trigger.is_none())?;
//!         steps.set(1);
//!         steps.exit_if(trigger == Some("step1"))?;
//!         steps.set(2);
//!         Ok(())
//!     })
//! }
//!
//! assert_eq!(milestone(None), None);
//! assert_eq!(milestone(Some("step1")), Some(1));
//! assert_eq!(milestone(Some("other")), Some(2));
//! ```

use std::fmt;

/// The "stop now" signal. Carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Exit;

impl fmt::Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cascade exit")
    }
}

/// Why a fallible cascade stopped before the end of its steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt<E> {
    /// The pass asked to stop. Intercepted by [`try_cascade`].
    Exit,
    /// A step failed. Propagated unchanged by [`try_cascade`].
    Fail(E),
}

impl<E> From<Exit> for Halt<E> {
    fn from(_: Exit) -> Self {
        Halt::Exit
    }
}

/// Lift a step's own error into [`Halt::Fail`] so it can cross `?`.
pub trait OrHalt<T, E> {
    fn or_halt(self) -> Result<T, Halt<E>>;
}

impl<T, E> OrHalt<T, E> for Result<T, E> {
    fn or_halt(self) -> Result<T, Halt<E>> {
        self.map_err(Halt::Fail)
    }
}

/// Running state of one cascade pass.
#[derive(Debug)]
pub struct Steps<T> {
    value: Option<T>,
    assignments: usize,
}

impl<T> Steps<T> {
    fn new() -> Self {
        Self {
            value: None,
            assignments: 0,
        }
    }

    /// Record `value` as the current result, replacing any earlier one.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
        self.assignments += 1;
    }

    /// The current result, if any step has recorded one.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// How many times [`Steps::set`] has been called in this pass.
    pub fn assignments(&self) -> usize {
        self.assignments
    }

    /// Stop the pass. Always returns `Err(Exit)`; use with `?` or `return`.
    pub fn exit(&self) -> Result<(), Exit> {
        Err(Exit)
    }

    /// Stop the pass when `condition` holds.
    pub fn exit_if(&self, condition: bool) -> Result<(), Exit> {
        if condition {
            self.exit()
        } else {
            Ok(())
        }
    }

    /// Consume the pass, yielding the last recorded value.
    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

/// Run `compute` once and return the last value it recorded.
///
/// An [`Exit`] stops the pass; running to the end stops it too. Panics are
/// not intercepted.
pub fn cascade<T, F>(compute: F) -> Option<T>
where
    F: FnOnce(&mut Steps<T>) -> Result<(), Exit>,
{
    let mut steps = Steps::new();
    if let Err(Exit) = compute(&mut steps) {
        log::trace!("cascade exited after {} assignment(s)", steps.assignments());
    }
    steps.into_value()
}

/// Like [`cascade`], for steps that can fail.
///
/// [`Halt::Exit`] stops the pass like [`Exit`]; [`Halt::Fail`] is returned
/// to the caller as `Err` and the recorded value is discarded.
pub fn try_cascade<T, E, F>(compute: F) -> Result<Option<T>, E>
where
    F: FnOnce(&mut Steps<T>) -> Result<(), Halt<E>>,
{
    let mut steps = Steps::new();
    match compute(&mut steps) {
        Ok(()) => {}
        Err(Halt::Exit) => {
            log::trace!("cascade exited after {} assignment(s)", steps.assignments());
        }
        Err(Halt::Fail(err)) => return Err(err),
    }
    Ok(steps.into_value())
}
