use crate::errors::DghvError;

use num_bigint::{BigInt, BigUint};
use num_traits::One;

use rand::TryCryptoRng;

/// Draws an integer uniformly from `[0, 2^bits)`.
///
/// # Arguments
/// * `rng` - A cryptographically secure random source
/// * `bits` - Bit length of the exclusive power-of-two bound
///
/// # Returns
/// The sampled integer, or `DghvError::RandomSource` if the source failed
pub fn sample_below_pow2<R>(rng: &mut R, bits: u64) -> Result<BigInt, DghvError>
where
    R: TryCryptoRng + ?Sized,
{
    let byte_len = usize::try_from(bits.div_ceil(8)).map_err(|_| {
        DghvError::InvalidParameters(format!("Cannot sample {} bits on this platform", bits))
    })?;

    let mut bytes = vec![0u8; byte_len];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| DghvError::RandomSource(e.to_string()))?;

    // Little-endian: the last byte holds the most significant bits.
    let excess = (byte_len as u64 * 8 - bits) as u32;
    if let Some(top) = bytes.last_mut() {
        *top &= 0xFFu8 >> excess;
    }

    Ok(BigInt::from(BigUint::from_bytes_le(&bytes)))
}

/// Draws an odd integer uniformly from the odd values of `[0, 2^bits)`.
///
/// `bits` must be at least 1.
pub fn sample_odd_below_pow2<R>(rng: &mut R, bits: u64) -> Result<BigInt, DghvError>
where
    R: TryCryptoRng + ?Sized,
{
    if bits == 0 {
        return Err(DghvError::InvalidParameters(
            "No odd integer lies below 2^0".to_string(),
        ));
    }

    Ok(sample_below_pow2(rng, bits)? | BigInt::one())
}

/// Draws an odd integer of exactly `bits` bits, uniform over all such integers.
///
/// `bits` must be at least 2 so that the top and the low bit are distinct.
pub fn sample_odd_with_bit_length<R>(rng: &mut R, bits: u64) -> Result<BigInt, DghvError>
where
    R: TryCryptoRng + ?Sized,
{
    if bits < 2 {
        return Err(DghvError::InvalidParameters(format!(
            "An odd integer with a forced top bit needs at least 2 bits, got {}",
            bits
        )));
    }

    let candidate = sample_odd_below_pow2(rng, bits)?;
    Ok(candidate | (BigInt::one() << (bits - 1)))
}
