pub mod check_verification;
pub mod send_verification;

pub use check_verification::{check_verification, CheckOutcome, CODE_MISMATCH_TITLE};
pub use send_verification::send_verification;
