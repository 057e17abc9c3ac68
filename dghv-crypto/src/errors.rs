#[derive(thiserror::Error, Debug)]
pub enum DghvError {
    /// Size parameters out of range, or a private key that is not a positive odd integer
    /// where key derivation requires one.
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    /// Only the bits 0 and 1 can be encrypted.
    #[error("InvalidPlaintext: expected 0 or 1, got {0}")]
    InvalidPlaintext(u8),
    /// Decryption requires a positive odd private key.
    #[error("InvalidKey: {0}")]
    InvalidKey(String),
    /// Error when creating a ring with a non-positive modulus.
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),

    #[error("Secure random source failed: {0}")]
    RandomSource(String),

    #[error("Parameter serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
