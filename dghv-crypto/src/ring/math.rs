//! Implementation of modular reduction over arbitrary-precision integers.

use crate::errors::DghvError;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;

/// Represents the residue ring Z_k for an arbitrary-precision modulus `k`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ring {
    modulus: BigInt,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be positive. A modulus of 1 gives the zero ring.
    pub fn try_with(modulus: BigInt) -> Result<Self, DghvError> {
        if !modulus.is_positive() {
            return Err(DghvError::InvalidModulus(format!(
                "Modulus must be positive, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use dghv_crypto::ring::Ring;
    /// # use num_bigint::BigInt;
    /// let ring = Ring::try_with(BigInt::from(13)).unwrap();
    /// assert_eq!(ring.modulus(), &BigInt::from(13));
    /// ```
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Uses floor division, so negative values land on the non-negative
    /// representative instead of the truncated remainder.
    ///
    /// # Example
    ///
    /// ```
    /// # use dghv_crypto::ring::Ring;
    /// # use num_bigint::BigInt;
    /// let ring = Ring::try_with(BigInt::from(10)).unwrap();
    /// assert_eq!(ring.normalize(&BigInt::from(15)), BigInt::from(5));
    /// assert_eq!(ring.normalize(&BigInt::from(-3)), BigInt::from(7));
    /// assert_eq!(ring.normalize(&BigInt::from(0)), BigInt::from(0));
    /// assert_eq!(ring.normalize(&BigInt::from(10)), BigInt::from(0));
    /// ```
    pub fn normalize(&self, value: &BigInt) -> BigInt {
        value.mod_floor(&self.modulus)
    }
}
