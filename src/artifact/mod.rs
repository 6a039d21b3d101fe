//! Downloaded file checks
//!
//! After yt-dlp reports success, the file it names must actually exist, and
//! the caller may still reject it. Storage access goes through
//! [`ArtifactStore`] and the caller's decision through
//! [`SaveConfirmation`]:
//!
//! - [`LocalArtifactStore`]: the local filesystem
//! - [`ConfirmFn`]: wraps an async closure as a confirmation

mod gate;
mod local;
mod traits;

pub use gate::ArtifactGate;
pub use local::LocalArtifactStore;
pub use traits::{ArtifactStore, ConfirmFn, SaveConfirmation};
