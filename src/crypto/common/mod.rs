//! Logic shared by the backends.

#[cfg(any(feature = "rust-crypto", feature = "openssl"))]
pub mod key_derivation {
    use zeroize::Zeroize;

    use crate::{
        crypto::{hash::HashAlgorithm, mac::MessageAuthentication},
        error::{EnvelopeError, Result},
    };

    const MAX_HKDF_BLOCKS: usize = 255;

    /// HKDF-Expand (RFC 5869 2.3) on top of a HMAC primitive.
    ///
    /// Libraries like `hkdf` reject pseudo random keys shorter than the hash output,
    /// which is exactly what expanding a 16 byte seed with SHA-512 needs.
    pub fn expand_with_hmac<M>(
        mac: &M,
        hash: HashAlgorithm,
        prk: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<()>
    where
        M: MessageAuthentication + ?Sized,
    {
        let hash_len = hash.output_len();
        if okm.len() > MAX_HKDF_BLOCKS * hash_len {
            log::debug!(
                "Cannot expand {} bytes with {hash}, limit is {}",
                okm.len(),
                MAX_HKDF_BLOCKS * hash_len
            );
            return Err(EnvelopeError::KeyDerivationFailure);
        }

        let mut previous_block = Vec::new();
        for (index, chunk) in okm.chunks_mut(hash_len).enumerate() {
            let counter =
                u8::try_from(index + 1).map_err(|_| EnvelopeError::KeyDerivationFailure)?;
            let block = mac.hmac(hash, prk, &[previous_block.as_slice(), info, &[counter]])?;
            chunk.copy_from_slice(&block[..chunk.len()]);

            previous_block.zeroize();
            previous_block = block;
        }
        previous_block.zeroize();

        Ok(())
    }
}

pub mod parameters {
    #[cfg(any(feature = "rust-crypto", feature = "openssl"))]
    use crate::crypto::CBC_IV_LEN;
    use crate::{
        crypto::{GCM_NONCE_LEN, GCM_TAG_LEN},
        error::{EnvelopeError, Result},
    };

    pub const AES_128_KEY_LEN: usize = 16;
    pub const AES_256_KEY_LEN: usize = 32;

    /// AES key lengths supported by all backends
    #[cfg(any(feature = "openssl", feature = "ring"))]
    pub fn check_aes_key(key: &[u8]) -> Result<()> {
        match key.len() {
            AES_128_KEY_LEN | AES_256_KEY_LEN => Ok(()),
            len => {
                log::debug!("Unsupported AES key length {len}");
                Err(EnvelopeError::InvalidKeyMaterial)
            }
        }
    }

    #[cfg(any(feature = "rust-crypto", feature = "openssl"))]
    pub fn check_cbc_iv(iv: &[u8]) -> Result<()> {
        if iv.len() != CBC_IV_LEN {
            return Err(EnvelopeError::InvalidIvLength {
                expected: CBC_IV_LEN,
                found: iv.len(),
            });
        }
        Ok(())
    }

    pub fn check_gcm_nonce(nonce: &[u8]) -> Result<()> {
        if nonce.len() != GCM_NONCE_LEN {
            return Err(EnvelopeError::InvalidIvLength {
                expected: GCM_NONCE_LEN,
                found: nonce.len(),
            });
        }
        Ok(())
    }

    /// The backends only implement full length GCM tags
    pub fn check_gcm_tag_len(tag_len: usize) -> Result<()> {
        if tag_len != GCM_TAG_LEN {
            log::debug!("Unsupported GCM tag length {tag_len}");
            return Err(EnvelopeError::UnsupportedTagLength(tag_len));
        }
        Ok(())
    }
}
