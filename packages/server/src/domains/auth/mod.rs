//! Auth domain - phone verification via the OTP provider
//!
//! Responsibilities:
//! - Starting verification workflows (send a code over SMS)
//! - Checking user-supplied codes and mapping provider failures
//! - The login form's client-side state machine

pub mod actions;
pub mod machines;

pub use actions::{check_verification, send_verification, CheckOutcome, CODE_MISMATCH_TITLE};
pub use machines::{
    LoginEvent, LoginMachine, LoginStep, Transition, VerificationSession, VerificationState,
};
