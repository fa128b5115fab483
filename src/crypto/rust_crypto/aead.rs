//! AES-GCM for the RustCrypto backend.

use aes_gcm::{
    aead::{generic_array::GenericArray, Aead, KeyInit},
    Aes128Gcm, Aes256Gcm,
};

use super::RustCrypto;
use crate::{
    crypto::{
        aead::AeadCipher,
        common::parameters::{
            check_gcm_nonce, check_gcm_tag_len, AES_128_KEY_LEN, AES_256_KEY_LEN,
        },
    },
    error::{EnvelopeError, Result},
};

impl AeadCipher for RustCrypto {
    fn seal(&self, key: &[u8], nonce: &[u8], tag_len: usize, plain_text: &[u8]) -> Result<Vec<u8>> {
        check_gcm_tag_len(tag_len)?;
        check_gcm_nonce(nonce)?;

        match key.len() {
            AES_128_KEY_LEN => seal_with::<Aes128Gcm>(key, nonce, plain_text),
            AES_256_KEY_LEN => seal_with::<Aes256Gcm>(key, nonce, plain_text),
            len => {
                log::debug!("No AES-GCM variant for key length {len}");
                Err(EnvelopeError::InvalidKeyMaterial)
            }
        }
    }

    fn open(
        &self,
        key: &[u8],
        nonce: &[u8],
        tag_len: usize,
        cipher_text: &[u8],
    ) -> Result<Vec<u8>> {
        check_gcm_tag_len(tag_len)?;
        check_gcm_nonce(nonce)?;

        match key.len() {
            AES_128_KEY_LEN => open_with::<Aes128Gcm>(key, nonce, cipher_text),
            AES_256_KEY_LEN => open_with::<Aes256Gcm>(key, nonce, cipher_text),
            len => {
                log::debug!("No AES-GCM variant for key length {len}");
                Err(EnvelopeError::InvalidKeyMaterial)
            }
        }
    }
}

fn seal_with<A>(key: &[u8], nonce: &[u8], plain_text: &[u8]) -> Result<Vec<u8>>
where
    A: Aead + KeyInit,
{
    let algo = init_from_key::<A>(key)?;
    algo.encrypt(GenericArray::from_slice(nonce), plain_text)
        .map_err(|err| {
            log::debug!("Encryption failed: {err}");
            EnvelopeError::EncryptionFailure
        })
}

fn open_with<A>(key: &[u8], nonce: &[u8], cipher_text: &[u8]) -> Result<Vec<u8>>
where
    A: Aead + KeyInit,
{
    let algo = init_from_key::<A>(key)?;
    algo.decrypt(GenericArray::from_slice(nonce), cipher_text)
        .map_err(|err| {
            log::debug!("Decryption failed: {err}");
            EnvelopeError::AuthenticationFailure
        })
}

fn init_from_key<A>(key: &[u8]) -> Result<A>
where
    A: KeyInit,
{
    A::new_from_slice(key).map_err(|err| {
        log::debug!("Cannot initialise AES-GCM: {err}");
        EnvelopeError::InvalidKeyMaterial
    })
}
