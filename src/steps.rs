//! Given/When/Then step helpers.
//!
//! The free functions are documentation-only structure: each one runs the
//! supplied closure immediately and hands it back so a later step can run it
//! again. [`StrictSteps`] adds enforcement, failing any step called out of
//! the Given -> When -> Then order.

/// Run a Given step immediately and return it for reuse.
///
/// ```
/// use cleantest::steps::{given, when, then};
///
/// let mut width = 0;
/// let mut area = 0;
/// given(|| width = 10);
/// when(|| area = width * width);
/// then(|| assert_eq!(area, 100));
/// ```
pub fn given<R, F: FnMut() -> R>(mut step: F) -> F {
    step();
    step
}

/// Run a When step immediately and return it for reuse.
pub fn when<R, F: FnMut() -> R>(step: F) -> F {
    given(step)
}

/// Run a Then step immediately and return it for reuse.
pub fn then<R, F: FnMut() -> R>(step: F) -> F {
    given(step)
}

/// Extend a Given/When/Then with a further step.
pub fn and<R, F: FnMut() -> R>(step: F) -> F {
    given(step)
}

/// Extend a Given/When/Then with a contrasting step.
pub fn but<R, F: FnMut() -> R>(step: F) -> F {
    given(step)
}

/// A no-op When step, marking the point where mock expectations set up in a
/// Then are exercised.
pub fn the_test_runs() -> impl FnMut() {
    || {}
}

/// A no-op Then step, documenting that the assertions of this test are the
/// mock expectations themselves.
pub fn mocks_shouldve_been_called() -> impl FnMut() {
    || {}
}

/// Which step a caller invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Given,
    When,
    Then,
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepKind::Given => write!(f, "Given"),
            StepKind::When => write!(f, "When"),
            StepKind::Then => write!(f, "Then"),
        }
    }
}

/// Where a strict sequence currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    AwaitingGiven,
    AwaitingWhen,
    AwaitingThen,
}

impl StepState {
    fn expects(self) -> StepKind {
        match self {
            StepState::AwaitingGiven => StepKind::Given,
            StepState::AwaitingWhen => StepKind::When,
            StepState::AwaitingThen => StepKind::Then,
        }
    }

    fn next(self) -> StepState {
        match self {
            StepState::AwaitingGiven => StepState::AwaitingWhen,
            StepState::AwaitingWhen => StepState::AwaitingThen,
            StepState::AwaitingThen => StepState::AwaitingGiven,
        }
    }
}

/// Errors raised by the strict step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// A step was called while the sequence was expecting a different one;
    /// the step body was not executed and the state is unchanged
    OutOfOrderStep { expected: StepKind, called: StepKind },
}

impl std::fmt::Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepError::OutOfOrderStep { expected, called } => {
                write!(f, "called {} while expecting {}", called, expected)
            }
        }
    }
}

impl std::error::Error for StepError {}

/// A strict Given/When/Then sequence for one test instance.
///
/// Starts out awaiting a Given; each step executes only in its turn and
/// advances the cycle, wrapping back after Then so multi-cycle tests work.
/// An out-of-turn call fails without running the step body and without
/// moving the state, so the test fails at the misordered step instead of
/// cascading.
#[derive(Debug)]
pub struct StrictSteps {
    state: StepState,
}

impl StrictSteps {
    pub fn new() -> StrictSteps {
        StrictSteps {
            state: StepState::AwaitingGiven,
        }
    }

    pub fn state(&self) -> StepState {
        self.state
    }

    /// Set up the conditions for the test.
    pub fn given<R>(&mut self, step: impl FnOnce() -> R) -> Result<R, StepError> {
        self.advance(StepKind::Given)?;
        Ok(step())
    }

    /// Execute the code under test; fails if no Given ran first.
    pub fn when<R>(&mut self, step: impl FnOnce() -> R) -> Result<R, StepError> {
        self.advance(StepKind::When)?;
        Ok(step())
    }

    /// Verify the results; fails if no When ran first.
    pub fn then<R>(&mut self, step: impl FnOnce() -> R) -> Result<R, StepError> {
        self.advance(StepKind::Then)?;
        Ok(step())
    }

    fn advance(&mut self, called: StepKind) -> Result<(), StepError> {
        let expected = self.state.expects();
        if called != expected {
            return Err(StepError::OutOfOrderStep { expected, called });
        }
        self.state = self.state.next();
        Ok(())
    }
}

impl Default for StrictSteps {
    fn default() -> StrictSteps {
        StrictSteps::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_pass_through_steps_execute_immediately() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let step = given(move || counter.set(counter.get() + 1));
        assert_eq!(calls.get(), 1);

        // The returned step can be handed to a later step and runs again.
        when(step);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_mock_markers_are_noops() {
        when(the_test_runs());
        then(mocks_shouldve_been_called());
    }

    #[test]
    fn test_full_cycle_succeeds_and_wraps() {
        let mut steps = StrictSteps::new();
        let mut area = 0;

        steps.given(|| {}).unwrap();
        steps.when(|| area = 10 * 10).unwrap();
        steps.then(|| assert_eq!(area, 100)).unwrap();

        // Back to accepting a new Given.
        assert_eq!(steps.state(), StepState::AwaitingGiven);
        steps.given(|| {}).unwrap();
    }

    #[test]
    fn test_when_before_given_fails() {
        let mut steps = StrictSteps::new();
        let mut ran = false;
        let result = steps.when(|| ran = true);
        assert_eq!(
            result,
            Err(StepError::OutOfOrderStep {
                expected: StepKind::Given,
                called: StepKind::When,
            })
        );
        assert!(!ran, "step body must not run out of order");
        assert_eq!(steps.state(), StepState::AwaitingGiven);
    }

    #[test]
    fn test_then_before_when_fails() {
        let mut steps = StrictSteps::new();
        steps.given(|| {}).unwrap();
        let result = steps.then(|| {});
        assert_eq!(
            result,
            Err(StepError::OutOfOrderStep {
                expected: StepKind::When,
                called: StepKind::Then,
            })
        );
        // Failed step leaves the sequence where it was.
        assert_eq!(steps.state(), StepState::AwaitingWhen);
    }

    #[test]
    fn test_double_given_fails() {
        let mut steps = StrictSteps::new();
        steps.given(|| {}).unwrap();
        assert_eq!(
            steps.given(|| {}),
            Err(StepError::OutOfOrderStep {
                expected: StepKind::When,
                called: StepKind::Given,
            })
        );
    }

    #[test]
    fn test_steps_return_their_value() {
        let mut steps = StrictSteps::new();
        let width = steps.given(|| 10).unwrap();
        let area = steps.when(|| width * width).unwrap();
        assert_eq!(steps.then(|| area).unwrap(), 100);
    }

    #[test]
    fn test_error_message_names_both_steps() {
        let mut steps = StrictSteps::new();
        let err = steps.then(|| {}).unwrap_err();
        assert_eq!(format!("{}", err), "called Then while expecting Given");
    }
}
