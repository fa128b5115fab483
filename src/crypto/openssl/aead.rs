use openssl::symm::{decrypt_aead, encrypt_aead, Cipher};

use super::OpenSsl;
use crate::{
    crypto::{
        aead::AeadCipher,
        common::parameters::{check_aes_key, check_gcm_nonce, check_gcm_tag_len, AES_128_KEY_LEN},
    },
    error::{EnvelopeError, Result},
};

impl AeadCipher for OpenSsl {
    fn seal(&self, key: &[u8], nonce: &[u8], tag_len: usize, plain_text: &[u8]) -> Result<Vec<u8>> {
        check_gcm_tag_len(tag_len)?;
        check_gcm_nonce(nonce)?;
        let cipher = gcm_cipher(key)?;

        let mut tag = vec![0u8; tag_len];
        // TODO this allocates a new vec, the Crypter API could write into a single output buffer
        let mut cipher_text = encrypt_aead(cipher, key, Some(nonce), &[], plain_text, &mut tag)
            .map_err(|err| {
                log::debug!("Encryption failed, OpenSSL error stack: {err}");
                EnvelopeError::EncryptionFailure
            })?;
        cipher_text.extend_from_slice(&tag);

        Ok(cipher_text)
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
        let cipher = gcm_cipher(key)?;

        if cipher_text.len() < tag_len {
            log::debug!("Cipher text is shorter than the tag");
            return Err(EnvelopeError::AuthenticationFailure);
        }
        let (encrypted, tag) = cipher_text.split_at(cipher_text.len() - tag_len);

        decrypt_aead(cipher, key, Some(nonce), &[], encrypted, tag).map_err(|err| {
            log::debug!("Decryption failed, OpenSSL error stack: {err}");
            EnvelopeError::AuthenticationFailure
        })
    }
}

fn gcm_cipher(key: &[u8]) -> Result<Cipher> {
    check_aes_key(key)?;
    if key.len() == AES_128_KEY_LEN {
        Ok(Cipher::aes_128_gcm())
    } else {
        Ok(Cipher::aes_256_gcm())
    }
}
