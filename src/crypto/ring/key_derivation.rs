use ring::hkdf::{Prk, Salt, HKDF_SHA256, HKDF_SHA512};

use super::Ring;
use crate::{
    crypto::{hash::HashAlgorithm, key_derivation::KeyDerivation},
    error::{EnvelopeError, Result},
};

impl KeyDerivation for Ring {
    fn hkdf_expand(
        &self,
        hash: HashAlgorithm,
        prk: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<()> {
        let prk = Prk::new_less_safe(hkdf_algorithm(hash), prk);
        fill_okm(&prk, info, okm)
    }

    fn hkdf(
        &self,
        hash: HashAlgorithm,
        salt: &[u8],
        ikm: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<()> {
        let prk = Salt::new(hkdf_algorithm(hash), salt).extract(ikm);
        fill_okm(&prk, info, okm)
    }
}

struct OkmKeyLength(usize);

impl ring::hkdf::KeyType for OkmKeyLength {
    fn len(&self) -> usize {
        self.0
    }
}

fn hkdf_algorithm(hash: HashAlgorithm) -> ring::hkdf::Algorithm {
    match hash {
        HashAlgorithm::Sha256 => HKDF_SHA256,
        HashAlgorithm::Sha512 => HKDF_SHA512,
    }
}

fn fill_okm(prk: &Prk, info: &[u8], okm: &mut [u8]) -> Result<()> {
    let info = [info];
    let okm_len = okm.len();
    prk.expand(&info, OkmKeyLength(okm_len))
        .and_then(|expanded| expanded.fill(okm))
        .map_err(|_| {
            log::debug!("ring HKDF expansion of {okm_len} bytes failed");
            EnvelopeError::KeyDerivationFailure
        })
}
