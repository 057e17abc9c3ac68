//! # DGHV Crypto
//!
//! Secret-key encryption of single bits over arbitrary-precision integers, after the
//! integer-based scheme of van Dijk, Gentry, Halevi and Vaikuntanathan.
//!
//! ```
//! use dghv_crypto::{Cipher, KeyGenerator, Parameters};
//!
//! let params = Parameters::new(8, 64).unwrap();
//! let (private_key, public_key) = KeyGenerator::new().key_pair(&params).unwrap();
//!
//! let ciphertext = Cipher::new().encrypt(1, &public_key, &params).unwrap();
//! assert_eq!(Cipher::decrypt(&ciphertext, &private_key).unwrap(), 1);
//! ```

pub mod cipher;
pub mod errors;
pub mod keypair;
pub mod preset;
pub mod ring;

pub use cipher::{Cipher, Ciphertext};
pub use errors::DghvError;
pub use keypair::{KeyGenerator, Parameters, PrivateKey, PublicKey};
