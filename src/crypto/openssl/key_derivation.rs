use openssl::{
    error::ErrorStack,
    pkey::Id,
    pkey_ctx::{HkdfMode, PkeyCtx},
};

use super::OpenSsl;
use crate::{
    crypto::{
        common::key_derivation::expand_with_hmac, hash::HashAlgorithm,
        key_derivation::KeyDerivation,
    },
    error::{EnvelopeError, Result},
};

impl KeyDerivation for OpenSsl {
    fn hkdf_expand(
        &self,
        hash: HashAlgorithm,
        prk: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<()> {
        // OpenSSL's EXPAND_ONLY mode does not accept arbitrary short keys on all versions
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
        // RFC 5869 2.2, no salt means hash length zeros
        let zero_salt = vec![0u8; hash.output_len()];
        let salt = if salt.is_empty() { &zero_salt } else { salt };

        let derive = || -> std::result::Result<usize, ErrorStack> {
            let mut ctx = PkeyCtx::new_id(Id::HKDF)?;
            ctx.derive_init()?;
            ctx.set_hkdf_md(hash.into())?;
            ctx.set_hkdf_mode(HkdfMode::EXTRACT_THEN_EXPAND)?;
            ctx.set_hkdf_salt(salt)?;
            ctx.set_hkdf_key(ikm)?;
            if !info.is_empty() {
                ctx.add_hkdf_info(info)?;
            }
            ctx.derive(Some(okm))
        };

        derive().map(|_| ()).map_err(|err| {
            log::debug!("Key derivation failed, OpenSSL error stack: {err}");
            EnvelopeError::KeyDerivationFailure
        })
    }
}
