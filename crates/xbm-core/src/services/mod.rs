//! Client facade services.
//!
//! Services own the write-through cache of the last listed records and
//! compose `EntityStore` primitives. Adapters only talk to `AppCore`.

mod app_core;
mod bookmark_service;
mod cache;
mod cascade;
mod session_service;
mod tag_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use app_core::AppCore;
pub use bookmark_service::BookmarkService;
pub use cascade::{CascadeCoordinator, CascadeError, CascadeReport, CascadeStep, StepOutcome};
pub use session_service::SessionService;
pub use tag_service::TagService;
