use dghv_crypto::errors::DghvError;
use dghv_crypto::keypair::keys::KeyGenerator;
use dghv_crypto::keypair::shared_params::Parameters;
use dghv_crypto::{Cipher, preset};

use std::sync::Once;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .init();
    });
}

fn to_bits(text: &str) -> Vec<u8> {
    text.bytes()
        .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1))
        .collect()
}

fn from_bits(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit))
        .collect()
}

#[test]
fn showcase_bitwise_text_encryption() -> Result<(), DghvError> {
    init_logging();

    let params = Parameters::from_json(r#"{"noise_bits": 16, "key_bits": 128}"#)?;
    assert_eq!(params, Parameters::from_preset(preset::SMALL)?);

    let (private_key, public_key) = KeyGenerator::new().key_pair(&params)?;

    let original = "Вітання від криптосистеми DGHV";
    let bits = to_bits(original);

    let ciphertexts = Cipher::new().encrypt_bits(&bits, &public_key, &params)?;
    dbg!(ciphertexts.len(), ciphertexts[0].bits());

    let decoded = from_bits(&Cipher::decrypt_bits(&ciphertexts, &private_key)?);
    assert_eq!(String::from_utf8(decoded).as_deref(), Ok(original));

    Ok(())
}
