//! Core types and traits for the MiniTube video store.
//!
//! This crate provides the video entity, its create/update inputs, the
//! error taxonomy and the persistence and service contracts shared by the
//! storage backends, the service, the HTTP gateway and the client.

pub mod error;
pub mod repository;
pub mod store;
pub mod video;

pub use error::{StorageError, StoreError};
pub use repository::{ReadRepository, Repository};
pub use store::VideoStore;
pub use video::{NewVideo, Video, VideoId, VideoPatch};
