//! RustCrypto-based primitives.
//!
//! This module uses pure Rust implementations from the RustCrypto project.

mod aead;
mod cbc_mode;
mod key_derivation;

use cipher::BlockSizeUser;
use hkdf::hmac::{Mac, SimpleHmac};
use sha2::{Digest, Sha256, Sha512};

use crate::{
    crypto::{
        hash::HashAlgorithm, mac::MessageAuthentication, provider::CryptoProvider,
        random::RandomSource,
    },
    error::{EnvelopeError, Result},
};

/// Provider using the RustCrypto libraries.
///
/// Supports AES-CBC, AES-GCM, HMAC and HKDF for all key sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RustCrypto;

impl CryptoProvider for RustCrypto {
    fn name(&self) -> &'static str {
        "rust-crypto"
    }
}

impl RandomSource for RustCrypto {
    fn fill_random(&self, buffer: &mut [u8]) -> Result<()> {
        getrandom::getrandom(buffer).map_err(|err| {
            log::error!("System random source failed: {err}");
            EnvelopeError::RandomSourceFailure
        })
    }
}

impl MessageAuthentication for RustCrypto {
    fn hmac(&self, hash: HashAlgorithm, key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>> {
        match hash {
            HashAlgorithm::Sha256 => compute_hmac::<Sha256>(key, parts),
            HashAlgorithm::Sha512 => compute_hmac::<Sha512>(key, parts),
        }
    }
}

fn compute_hmac<D>(key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>>
where
    D: Digest + BlockSizeUser,
{
    let mut mac = <SimpleHmac<D> as Mac>::new_from_slice(key).map_err(|err| {
        log::debug!("Cannot create HMAC: {err}");
        EnvelopeError::InvalidKeyMaterial
    })?;
    for part in parts {
        mac.update(part);
    }

    Ok(mac.finalize().into_bytes().to_vec())
}
