//! Ring backend implementation.
//!
//! ring allows compilation to Wasm32, but does not implement AES-CBC.

mod aead;
mod key_derivation;

use ring::{hmac, rand::SecureRandom};

use crate::{
    crypto::{
        cbc::CbcCipher, hash::HashAlgorithm, mac::MessageAuthentication,
        provider::CryptoProvider, random::RandomSource,
    },
    error::{EnvelopeError, Result},
};

/// Provider using the ring library.
///
/// Supports AES-GCM, HMAC and HKDF. CBC envelopes fail with
/// [`EnvelopeError::UnsupportedByProvider`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ring;

impl CryptoProvider for Ring {
    fn name(&self) -> &'static str {
        "ring"
    }
}

impl RandomSource for Ring {
    fn fill_random(&self, buffer: &mut [u8]) -> Result<()> {
        ring::rand::SystemRandom::new().fill(buffer).map_err(|_| {
            log::error!("ring system random source failed");
            EnvelopeError::RandomSourceFailure
        })
    }
}

impl CbcCipher for Ring {
    fn encrypt_cbc(&self, _key: &[u8], _iv: &[u8], _plain_text: &[u8]) -> Result<Vec<u8>> {
        Err(EnvelopeError::UnsupportedByProvider("AES-CBC"))
    }

    fn decrypt_cbc(&self, _key: &[u8], _iv: &[u8], _cipher_text: &[u8]) -> Result<Vec<u8>> {
        Err(EnvelopeError::UnsupportedByProvider("AES-CBC"))
    }
}

impl MessageAuthentication for Ring {
    fn hmac(&self, hash: HashAlgorithm, key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>> {
        let key = hmac::Key::new(hmac_algorithm(hash), key);
        let mut context = hmac::Context::with_key(&key);
        for part in parts {
            context.update(part);
        }

        Ok(context.sign().as_ref().to_vec())
    }
}

fn hmac_algorithm(hash: HashAlgorithm) -> hmac::Algorithm {
    match hash {
        HashAlgorithm::Sha256 => hmac::HMAC_SHA256,
        HashAlgorithm::Sha512 => hmac::HMAC_SHA512,
    }
}
