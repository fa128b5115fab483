//! AES-CBC with PKCS#7 padding for the RustCrypto backend.

use aes_gcm::aes::{Aes128, Aes256};
use cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use super::RustCrypto;
use crate::{
    crypto::{
        cbc::CbcCipher,
        common::parameters::{check_cbc_iv, AES_128_KEY_LEN, AES_256_KEY_LEN},
    },
    error::{EnvelopeError, Result},
};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

impl CbcCipher for RustCrypto {
    fn encrypt_cbc(&self, key: &[u8], iv: &[u8], plain_text: &[u8]) -> Result<Vec<u8>> {
        check_cbc_iv(iv)?;

        let cipher_text = match key.len() {
            AES_128_KEY_LEN => Aes128CbcEnc::new_from_slices(key, iv)
                .map_err(invalid_length)?
                .encrypt_padded_vec_mut::<Pkcs7>(plain_text),
            AES_256_KEY_LEN => Aes256CbcEnc::new_from_slices(key, iv)
                .map_err(invalid_length)?
                .encrypt_padded_vec_mut::<Pkcs7>(plain_text),
            len => {
                log::debug!("No AES-CBC variant for key length {len}");
                return Err(EnvelopeError::InvalidKeyMaterial);
            }
        };

        Ok(cipher_text)
    }

    fn decrypt_cbc(&self, key: &[u8], iv: &[u8], cipher_text: &[u8]) -> Result<Vec<u8>> {
        check_cbc_iv(iv)?;

        let plain_text = match key.len() {
            AES_128_KEY_LEN => Aes128CbcDec::new_from_slices(key, iv)
                .map_err(invalid_length)?
                .decrypt_padded_vec_mut::<Pkcs7>(cipher_text),
            AES_256_KEY_LEN => Aes256CbcDec::new_from_slices(key, iv)
                .map_err(invalid_length)?
                .decrypt_padded_vec_mut::<Pkcs7>(cipher_text),
            len => {
                log::debug!("No AES-CBC variant for key length {len}");
                return Err(EnvelopeError::InvalidKeyMaterial);
            }
        };

        plain_text.map_err(|err| {
            log::debug!("Decryption failed: {err}");
            EnvelopeError::DecryptionFailure
        })
    }
}

fn invalid_length(err: cipher::InvalidLength) -> EnvelopeError {
    log::debug!("Cannot initialise AES-CBC: {err}");
    EnvelopeError::InvalidKeyMaterial
}
