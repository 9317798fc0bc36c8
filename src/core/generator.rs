//! Random secret generation.

use crate::constants::ALPHABET;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use zeroize::Zeroizing;

/// Generate a secret of `length` characters from the OS CSPRNG.
pub fn generate_secret(length: usize) -> Zeroizing<String> {
    generate_secret_with(&mut OsRng, length)
}

/// Generate a secret from the given RNG, sampling `ALPHABET` uniformly with replacement.
pub fn generate_secret_with<R>(rng: &mut R, length: usize) -> Zeroizing<String>
where
    R: Rng + CryptoRng,
{
    let mut secret = Zeroizing::new(String::with_capacity(length));
    if length == 0 {
        return secret;
    }
    let index = Uniform::from(0..ALPHABET.len());
    for i in index.sample_iter(rng).take(length) {
        secret.push(char::from(ALPHABET[i]));
    }
    secret
}
