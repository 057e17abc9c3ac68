//! Named `(noise_bits, key_bits)` parameter sets.
//!
//! Sizes grow by roughly a factor of four per step; `TOY` is only fit for tests.

/// A named pair of bit lengths accepted by [`Parameters::from_preset`].
///
/// [`Parameters::from_preset`]: crate::keypair::shared_params::Parameters::from_preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub noise_bits: u64,
    pub key_bits: u64,
}

pub const TOY: Preset = Preset {
    name: "toy",
    noise_bits: 8,
    key_bits: 64,
};

pub const SMALL: Preset = Preset {
    name: "small",
    noise_bits: 16,
    key_bits: 128,
};

pub const MEDIUM: Preset = Preset {
    name: "medium",
    noise_bits: 32,
    key_bits: 512,
};

pub const LARGE: Preset = Preset {
    name: "large",
    noise_bits: 64,
    key_bits: 1024,
};

pub const ALL: [Preset; 4] = [TOY, SMALL, MEDIUM, LARGE];

/// Looks a preset up by its case-insensitive name.
pub fn by_name(name: &str) -> Option<Preset> {
    ALL.into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}
