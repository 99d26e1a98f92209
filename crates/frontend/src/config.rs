//! Frontend configuration

/// Session configuration
pub struct SessionConfig;

impl SessionConfig {
    /// Storage key holding the bearer token
    pub const TOKEN_KEY: &'static str = "token";

    /// Storage key holding the signed-in username
    pub const USERNAME_KEY: &'static str = "username";

    /// Element id of the navigation bar revealed for signed-in users
    pub const NAVBAR_ID: &'static str = "navbar";

    /// Landing page, reachable without a session
    pub const ROOT_PATH: &'static str = "/";

    /// Login page, reachable without a session
    pub const LOGIN_PATH: &'static str = "/login";
}
