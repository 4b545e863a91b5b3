//! Axum extractors for request handling

mod interaction;

pub use interaction::VerifiedInteraction;
