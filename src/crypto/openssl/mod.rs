//! OpenSSL-based primitives.
//!
//! Per default OpenSSL is compiled locally and statically linked (`vendored`).

mod aead;
mod cbc_mode;
mod key_derivation;

use openssl::{error::ErrorStack, hash::MessageDigest, pkey::PKey, sign::Signer};

use crate::{
    crypto::{
        hash::HashAlgorithm, mac::MessageAuthentication, provider::CryptoProvider,
        random::RandomSource,
    },
    error::{EnvelopeError, Result},
};

/// Provider using the OpenSSL library.
///
/// Supports AES-CBC, AES-GCM, HMAC and HKDF for all key sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenSsl;

impl CryptoProvider for OpenSsl {
    fn name(&self) -> &'static str {
        "openssl"
    }
}

impl RandomSource for OpenSsl {
    fn fill_random(&self, buffer: &mut [u8]) -> Result<()> {
        openssl::rand::rand_bytes(buffer).map_err(|err| {
            log::error!("OpenSSL random source failed: {err}");
            EnvelopeError::RandomSourceFailure
        })
    }
}

impl MessageAuthentication for OpenSsl {
    fn hmac(&self, hash: HashAlgorithm, key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>> {
        let key = PKey::hmac(key).map_err(|err| {
            log::debug!("Unusable HMAC key, OpenSSL error stack: {err}");
            EnvelopeError::InvalidKeyMaterial
        })?;

        let sign = || -> std::result::Result<Vec<u8>, ErrorStack> {
            let mut signer = Signer::new(hash.into(), &key)?;
            for part in parts {
                signer.update(part)?;
            }
            signer.sign_to_vec()
        };

        sign().map_err(|err| {
            log::debug!("HMAC computation failed, OpenSSL error stack: {err}");
            EnvelopeError::MacComputationFailure
        })
    }
}

impl From<HashAlgorithm> for MessageDigest {
    fn from(hash: HashAlgorithm) -> Self {
        match hash {
            HashAlgorithm::Sha256 => MessageDigest::sha256(),
            HashAlgorithm::Sha512 => MessageDigest::sha512(),
        }
    }
}

impl From<HashAlgorithm> for &'static openssl::md::MdRef {
    fn from(hash: HashAlgorithm) -> Self {
        match hash {
            HashAlgorithm::Sha256 => openssl::md::Md::sha256(),
            HashAlgorithm::Sha512 => openssl::md::Md::sha512(),
        }
    }
}
