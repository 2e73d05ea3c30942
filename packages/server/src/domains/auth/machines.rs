//! Login flow state machine
//!
//! The two-step login form (collect phone, collect code) modeled as an
//! explicit state machine driven by the outcomes of the two verification
//! calls. Keeping the transitions in a pure function makes the flow unit
//! testable without a rendering surface.

/// Where the login flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStep {
    /// Initial state: collecting the phone number
    PhoneInput,
    /// A code was sent; collecting it
    CodeInput,
    /// Terminal state: the code checked out
    Success,
    /// Something failed; dismissible back to PhoneInput
    Error,
}

/// Verification request state as seen by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationState {
    Pending,
    Verified,
    Failed,
}

/// Transient verification session. Held only for the lifetime of the
/// flow; a reload loses it and the flow restarts from the top.
#[derive(Debug, Clone)]
pub struct VerificationSession {
    pub request_id: String,
    pub phone_number: String,
    pub state: VerificationState,
}

/// Outcome of one of the two async calls driving the flow, or a user
/// dismissal of the error view.
#[derive(Debug, Clone)]
pub enum LoginEvent {
    SendSucceeded { request_id: String },
    SendFailed { message: String },
    /// `message` is the server-supplied success message, when present
    CheckSucceeded { message: Option<String> },
    CheckFailed { message: String },
    ErrorDismissed,
}

/// Result of a transition: the step to render next and the user-facing
/// message to show with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: LoginStep,
    pub message: String,
}

const CODE_SENT_MESSAGE: &str = "A verification code has been sent to your phone.";
const LOGIN_SUCCESS_MESSAGE: &str = "Login successful! Redirecting...";

/// Pure transition function for the login flow.
///
/// Events that do not apply to the current step leave it unchanged.
pub fn transition(step: LoginStep, event: &LoginEvent) -> Transition {
    match (step, event) {
        (LoginStep::PhoneInput, LoginEvent::SendSucceeded { .. }) => Transition {
            next: LoginStep::CodeInput,
            message: CODE_SENT_MESSAGE.to_string(),
        },
        (LoginStep::PhoneInput, LoginEvent::SendFailed { message }) => Transition {
            next: LoginStep::Error,
            message: message.clone(),
        },
        (LoginStep::CodeInput, LoginEvent::CheckSucceeded { message }) => Transition {
            next: LoginStep::Success,
            message: message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| LOGIN_SUCCESS_MESSAGE.to_string()),
        },
        (LoginStep::CodeInput, LoginEvent::CheckFailed { message }) => Transition {
            next: LoginStep::Error,
            message: message.clone(),
        },
        // Dismissing an error restarts from the phone step, discarding
        // any request id the flow was holding.
        (LoginStep::Error, LoginEvent::ErrorDismissed) => Transition {
            next: LoginStep::PhoneInput,
            message: String::new(),
        },
        (step, _) => Transition {
            next: step,
            message: String::new(),
        },
    }
}

/// The login form's client-side state: current step, transient
/// verification session, and the in-flight flag that disables inputs
/// while a call is outstanding (one call at a time).
#[derive(Debug)]
pub struct LoginMachine {
    step: LoginStep,
    session: Option<VerificationSession>,
    pending_phone: Option<String>,
    message: String,
    in_flight: bool,
}

impl LoginMachine {
    pub fn new() -> Self {
        Self {
            step: LoginStep::PhoneInput,
            session: None,
            pending_phone: None,
            message: String::new(),
            in_flight: false,
        }
    }

    pub fn step(&self) -> LoginStep {
        self.step
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn session(&self) -> Option<&VerificationSession> {
        self.session.as_ref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.request_id.as_str())
    }

    /// True while a call is outstanding; the form is disabled.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Validate the phone input and begin the send-verification call.
    ///
    /// Returns false when no request should be made: empty input, wrong
    /// step, or another call already outstanding.
    pub fn submit_phone(&mut self, phone_number: &str) -> bool {
        if self.in_flight || self.step != LoginStep::PhoneInput {
            return false;
        }
        if phone_number.is_empty() {
            self.message = "Please enter a phone number.".to_string();
            return false;
        }

        self.pending_phone = Some(phone_number.to_string());
        self.message.clear();
        self.in_flight = true;
        true
    }

    /// Validate the code input and begin the check-verification call.
    pub fn submit_code(&mut self, code: &str) -> bool {
        if self.in_flight || self.step != LoginStep::CodeInput {
            return false;
        }
        if code.is_empty() {
            self.message = "Please enter the verification code.".to_string();
            return false;
        }

        self.message.clear();
        self.in_flight = true;
        true
    }

    /// Apply the outcome of an outstanding call (or an error dismissal).
    pub fn apply(&mut self, event: LoginEvent) {
        let Transition { next, message } = transition(self.step, &event);

        match &event {
            LoginEvent::SendSucceeded { request_id } => {
                self.session = Some(VerificationSession {
                    request_id: request_id.clone(),
                    phone_number: self.pending_phone.take().unwrap_or_default(),
                    state: VerificationState::Pending,
                });
            }
            LoginEvent::CheckSucceeded { .. } => {
                if let Some(session) = &mut self.session {
                    session.state = VerificationState::Verified;
                }
            }
            LoginEvent::CheckFailed { .. } => {
                if let Some(session) = &mut self.session {
                    session.state = VerificationState::Failed;
                }
            }
            LoginEvent::ErrorDismissed => {
                self.session = None;
                self.pending_phone = None;
            }
            LoginEvent::SendFailed { .. } => {}
        }

        self.step = next;
        self.message = message;
        self.in_flight = false;
    }
}

impl Default for LoginMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_phone_shows_message_without_a_call() {
        let mut machine = LoginMachine::new();

        assert!(!machine.submit_phone(""));
        assert_eq!(machine.step(), LoginStep::PhoneInput);
        assert_eq!(machine.message(), "Please enter a phone number.");
        assert!(!machine.is_loading());
    }

    #[test]
    fn send_success_moves_to_code_input() {
        let mut machine = LoginMachine::new();

        assert!(machine.submit_phone("14155552671"));
        assert!(machine.is_loading());

        machine.apply(LoginEvent::SendSucceeded {
            request_id: "r1".to_string(),
        });

        assert_eq!(machine.step(), LoginStep::CodeInput);
        assert_eq!(machine.request_id(), Some("r1"));
        assert_eq!(machine.session().unwrap().phone_number, "14155552671");
        assert_eq!(
            machine.message(),
            "A verification code has been sent to your phone."
        );
        assert!(!machine.is_loading());
    }

    #[test]
    fn check_success_defaults_the_success_message() {
        let mut machine = LoginMachine::new();
        machine.submit_phone("14155552671");
        machine.apply(LoginEvent::SendSucceeded {
            request_id: "r1".to_string(),
        });

        assert!(machine.submit_code("1234"));
        machine.apply(LoginEvent::CheckSucceeded { message: None });

        assert_eq!(machine.step(), LoginStep::Success);
        assert_eq!(machine.message(), "Login successful! Redirecting...");
        assert_eq!(
            machine.session().unwrap().state,
            VerificationState::Verified
        );
    }

    #[test]
    fn check_failure_goes_to_error_with_server_message() {
        let mut machine = LoginMachine::new();
        machine.submit_phone("14155552671");
        machine.apply(LoginEvent::SendSucceeded {
            request_id: "r1".to_string(),
        });

        machine.submit_code("0000");
        machine.apply(LoginEvent::CheckFailed {
            message: "The code you provided is incorrect.".to_string(),
        });

        assert_eq!(machine.step(), LoginStep::Error);
        assert_eq!(machine.message(), "The code you provided is incorrect.");
        assert_eq!(machine.session().unwrap().state, VerificationState::Failed);
    }

    #[test]
    fn dismissing_an_error_restarts_from_phone_input() {
        let mut machine = LoginMachine::new();
        machine.submit_phone("14155552671");
        machine.apply(LoginEvent::SendSucceeded {
            request_id: "r1".to_string(),
        });
        machine.submit_code("0000");
        machine.apply(LoginEvent::CheckFailed {
            message: "The code you provided is incorrect.".to_string(),
        });

        machine.apply(LoginEvent::ErrorDismissed);

        assert_eq!(machine.step(), LoginStep::PhoneInput);
        assert!(machine.request_id().is_none(), "request id is discarded");
        assert!(machine.message().is_empty());
    }

    #[test]
    fn send_failure_goes_to_error() {
        let mut machine = LoginMachine::new();
        machine.submit_phone("not-a-number");

        machine.apply(LoginEvent::SendFailed {
            message: "Failed to send verification code".to_string(),
        });

        assert_eq!(machine.step(), LoginStep::Error);
        assert_eq!(machine.message(), "Failed to send verification code");
    }

    #[test]
    fn one_outstanding_call_at_a_time() {
        let mut machine = LoginMachine::new();

        assert!(machine.submit_phone("14155552671"));
        assert!(!machine.submit_phone("14155552671"), "form is disabled mid-flight");
    }

    #[test]
    fn code_submit_is_rejected_outside_code_input() {
        let mut machine = LoginMachine::new();

        assert!(!machine.submit_code("1234"));
        assert_eq!(machine.step(), LoginStep::PhoneInput);
    }
}
