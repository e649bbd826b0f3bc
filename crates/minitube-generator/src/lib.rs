//! Identifier generation for stored videos.

mod clock;
pub mod object_id;
pub mod seq;

pub use clock::{Clock, SystemClock};
pub use object_id::{ObjectId, ObjectIdGenerator};
pub use seq::SeqGenerator;

use minitube_core::VideoId;

/// Trait for generating video identifiers.
///
/// Implementations are pure generators that don't interact with storage;
/// they are responsible for never handing out the same id twice.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<VideoId>;

    /// Generates a value that converts into a unique video id.
    fn generate(&self) -> Self::Output;
}
