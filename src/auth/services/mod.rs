//! Application services for authentication.

mod session;

pub use session::{
    LOGIN_FAILED_MESSAGE, LOGIN_SUCCEEDED_MESSAGE, LoginRequest, REGISTERED_MESSAGE,
    REGISTRATION_FAILED_MESSAGE, RegisterRequest, SessionError, SessionResult, SessionService,
};
