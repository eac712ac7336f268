//! Domain types.

mod identity;
mod key;
mod recipient;
mod secret;

pub use identity::Identity;
pub use key::{KeySettings, PrivateKeyMaterial};
pub use recipient::PublicKeyRecord;
pub use secret::Secret;
