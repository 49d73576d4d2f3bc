//! Library surface of the gearfinder CLI.
//!
//! Exposes the backend abstraction ([`SearchBackend`] with [`LocalBackend`] and
//! [`RemoteBackend`]) so the binary's orchestration stays independent of *how* a
//! search is performed.

mod backend;

pub use backend::{LocalBackend, RemoteBackend, SearchBackend, SearchError};
