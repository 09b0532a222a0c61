//! Endpoint paths of the identity service, relative to its base URL.

pub const REGISTER: &str = "/api/user/identity/register";

/// `POST` logs in; `GET ?email=` looks a user up.
pub const LOGIN_EMAIL: &str = "/api/user/identity/login-email";

pub const TOKEN_REFRESH: &str = "/api/identity/token/refresh";

/// `GET` reads, `PUT` partially updates. Requires a bearer token.
pub const PROFILE: &str = "/api/user/profile";
