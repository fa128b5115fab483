use ring::aead::{Aad, LessSafeKey, Nonce, UnboundKey, AES_128_GCM, AES_256_GCM};

use super::Ring;
use crate::{
    crypto::{
        aead::AeadCipher,
        common::parameters::{check_aes_key, check_gcm_nonce, check_gcm_tag_len, AES_128_KEY_LEN},
    },
    error::{EnvelopeError, Result},
};

impl AeadCipher for Ring {
    fn seal(&self, key: &[u8], nonce: &[u8], tag_len: usize, plain_text: &[u8]) -> Result<Vec<u8>> {
        check_gcm_tag_len(tag_len)?;
        let key = sealing_key(key)?;
        let nonce = unique_nonce(nonce)?;

        let mut in_out = plain_text.to_vec();
        key.seal_in_place_append_tag(nonce, Aad::empty(), &mut in_out)
            .map_err(|_| EnvelopeError::EncryptionFailure)?;

        Ok(in_out)
    }

    fn open(
        &self,
        key: &[u8],
        nonce: &[u8],
        tag_len: usize,
        cipher_text: &[u8],
    ) -> Result<Vec<u8>> {
        check_gcm_tag_len(tag_len)?;
        let key = sealing_key(key)?;
        let nonce = unique_nonce(nonce)?;

        let mut in_out = cipher_text.to_vec();
        let plain_len = key
            .open_in_place(nonce, Aad::empty(), &mut in_out)
            .map_err(|_| {
                log::debug!("ring could not open the sealed data");
                EnvelopeError::AuthenticationFailure
            })?
            .len();
        in_out.truncate(plain_len);

        Ok(in_out)
    }
}

fn sealing_key(key: &[u8]) -> Result<LessSafeKey> {
    check_aes_key(key)?;
    let algorithm = if key.len() == AES_128_KEY_LEN {
        &AES_128_GCM
    } else {
        &AES_256_GCM
    };

    let unbound_key =
        UnboundKey::new(algorithm, key).map_err(|_| EnvelopeError::InvalidKeyMaterial)?;
    Ok(LessSafeKey::new(unbound_key))
}

// The nonce is drawn from the random source for every envelope, ring only gets to see it once.
fn unique_nonce(nonce: &[u8]) -> Result<Nonce> {
    check_gcm_nonce(nonce)?;
    Nonce::try_assume_unique_for_key(nonce).map_err(|_| EnvelopeError::InvalidIvLength {
        expected: ring::aead::NONCE_LEN,
        found: nonce.len(),
    })
}
