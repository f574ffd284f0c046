//! Domain primitives, services and ports.
//!
//! Purpose: define the chirp and user entities, the moderation and
//! validation rules applied to them, and the services the HTTP adapter
//! calls. Nothing here depends on Actix or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure with a public message.
//! - User, Chirp and their identifiers, insert payloads and validated body.
//! - UserService, ChirpService: use-cases over the repository ports.
//! - HitCounter, Platform: operator state chosen or owned at startup.

pub mod chirp;
pub mod chirp_service;
pub mod error;
pub mod hit_counter;
pub mod moderation;
pub mod platform;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::chirp::{
    CHIRP_MAX_LENGTH, Chirp, ChirpBody, ChirpId, ChirpValidationError, NewChirp,
};
pub use self::chirp_service::{CHIRP_TOO_LONG, ChirpService};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::hit_counter::HitCounter;
pub use self::platform::Platform;
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserId};
pub use self::user_service::UserService;
