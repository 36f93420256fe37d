//! Shared primitive types used by tokens and log events.

pub mod span;

pub use span::Position;
