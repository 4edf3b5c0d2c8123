use thiserror::Error;

/// Submission lifecycle of a form controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Validating,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    Submit,
    ValidationFailed,
    ValidationPassed,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowTransition {
    pub from: FlowState,
    pub to: FlowState,
    pub action: FlowAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal flow transition: {from:?} --{action:?}-->")]
pub struct FlowError {
    pub from: FlowState,
    pub action: FlowAction,
}

pub fn flow_transition(
    from: FlowState,
    action: FlowAction,
) -> Result<(FlowState, FlowTransition), FlowError> {
    use FlowAction::*;
    use FlowState::*;

    let to = match (from, action) {
        (Idle, Submit) => Validating,
        (Validating, ValidationFailed) => Idle,
        (Validating, ValidationPassed) => Submitting,
        (Submitting, Completed) => Idle,
        _ => return Err(FlowError { from, action }),
    };
    Ok((to, FlowTransition { from, to, action }))
}

/// Advances `state` in place, logging the edge.
pub(crate) fn advance(state: &mut FlowState, action: FlowAction, flow: &str) {
    match flow_transition(*state, action) {
        Ok((to, _)) => {
            tracing::debug!(flow, from = ?*state, ?to, "flow transition");
            *state = to;
        }
        Err(err) => {
            tracing::warn!(flow, %err, "resetting flow");
            *state = FlowState::Idle;
        }
    }
}

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    ValidationError { field: &'static str, message: String },
    ServerError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_happy_path() {
        let (s1, _) = flow_transition(FlowState::Idle, FlowAction::Submit).expect("idle -> validating");
        assert_eq!(s1, FlowState::Validating);
        let (s2, _) =
            flow_transition(s1, FlowAction::ValidationPassed).expect("validating -> submitting");
        assert_eq!(s2, FlowState::Submitting);
        let (s3, t) = flow_transition(s2, FlowAction::Completed).expect("submitting -> idle");
        assert_eq!(s3, FlowState::Idle);
        assert_eq!(t.from, FlowState::Submitting);
    }

    #[test]
    fn validation_failure_returns_to_idle() {
        let (s, _) = flow_transition(FlowState::Validating, FlowAction::ValidationFailed)
            .expect("validating -> idle");
        assert_eq!(s, FlowState::Idle);
    }

    #[test]
    fn illegal_transition_is_rejected() {
        let err = flow_transition(FlowState::Idle, FlowAction::Completed).expect_err("must fail");
        assert!(err.to_string().contains("illegal flow transition"));
    }

    #[test]
    fn advance_resets_on_illegal_edge() {
        let mut state = FlowState::Submitting;
        advance(&mut state, FlowAction::Submit, "test");
        assert_eq!(state, FlowState::Idle);
    }
}
