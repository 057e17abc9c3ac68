//! Parameters, key material and key generation.

pub mod helper;
pub mod keys;
pub mod shared_params;

pub use keys::{KeyGenerator, PrivateKey, PublicKey};
pub use shared_params::Parameters;
