//! Video store service implementation.
//!
//! Wires a [`Repository`](minitube_core::Repository) and an id
//! [`Generator`](minitube_generator::Generator) into the
//! [`VideoStore`](minitube_core::VideoStore) contract, and seeds the demo
//! catalog.

pub mod seed;
pub mod service;

pub use seed::{sample_catalog, seed_catalog, SampleVideo};
pub use service::VideoService;
