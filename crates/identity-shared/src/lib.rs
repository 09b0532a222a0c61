//! # Identity Shared
//!
//! Wire types exchanged with the identity service.
//! Everything here mirrors the JSON the backend sends and accepts, nothing more.

pub mod dto;
pub mod response;
pub mod routes;

pub use dto::{
    LoginRequest, RefreshTokenRequest, TokenPayload, UpdateProfileRequest, UserProfilePayload,
};
pub use response::ResponseEnvelope;
