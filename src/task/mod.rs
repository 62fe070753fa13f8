//! Task list management.
//!
//! Tasks are created and mutated by pure functions over an explicit
//! snapshot of the collection, then persisted through a key-value storage
//! port. The module follows hexagonal architecture:
//!
//! - Domain types and transitions in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Persistence and session services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
