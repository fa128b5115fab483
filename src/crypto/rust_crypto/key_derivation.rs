use cipher::BlockSizeUser;
use hkdf::SimpleHkdf;
use sha2::{Digest, Sha256, Sha512};

use super::RustCrypto;
use crate::{
    crypto::{
        common::key_derivation::expand_with_hmac, hash::HashAlgorithm,
        key_derivation::KeyDerivation,
    },
    error::{EnvelopeError, Result},
};

impl KeyDerivation for RustCrypto {
    fn hkdf_expand(
        &self,
        hash: HashAlgorithm,
        prk: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<()> {
        expand_with_hmac(self, hash, prk, info, okm)
    }

    fn hkdf(
        &self,
        hash: HashAlgorithm,
        salt: &[u8],
        ikm: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<()> {
        match hash {
            HashAlgorithm::Sha256 => extract_and_expand::<Sha256>(salt, ikm, info, okm),
            HashAlgorithm::Sha512 => extract_and_expand::<Sha512>(salt, ikm, info, okm),
        }
    }
}

impl From<hkdf::InvalidLength> for EnvelopeError {
    fn from(error: hkdf::InvalidLength) -> Self {
        log::debug!("Cannot derive key: {error}");
        EnvelopeError::KeyDerivationFailure
    }
}

fn extract_and_expand<D>(salt: &[u8], ikm: &[u8], info: &[u8], okm: &mut [u8]) -> Result<()>
where
    D: Digest + BlockSizeUser + Clone,
{
    let algorithm = SimpleHkdf::<D>::new(Some(salt), ikm);
    algorithm.expand(info, okm)?;
    Ok(())
}
