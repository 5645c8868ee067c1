//! Validation core: MSISDN patterns and the parallel scan

pub mod scanner;
pub mod validator;

pub use scanner::Scanner;
pub use validator::{MsisdnValidator, NO_FORMAT_MATCH, NULL_OR_EMPTY};
