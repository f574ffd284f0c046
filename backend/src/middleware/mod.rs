//! Request middleware.
//!
//! `Trace` wraps the whole application; `HitCounting` wraps only the
//! `/app` file-server scope.

pub mod hit_counting;
pub mod trace;

pub use hit_counting::HitCounting;
pub use trace::Trace;
