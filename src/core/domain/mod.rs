//! Domain types.

mod namespace;
mod reply;
mod secret;
mod selection;

pub use namespace::Namespace;
pub use reply::{SecretReply, VersionReply};
pub use secret::{Credential, EnvType, Secret};
pub use selection::Selection;
