use openssl::symm::{decrypt, encrypt, Cipher};

use super::OpenSsl;
use crate::{
    crypto::{
        cbc::CbcCipher,
        common::parameters::{check_aes_key, check_cbc_iv, AES_128_KEY_LEN},
    },
    error::{EnvelopeError, Result},
};

impl CbcCipher for OpenSsl {
    fn encrypt_cbc(&self, key: &[u8], iv: &[u8], plain_text: &[u8]) -> Result<Vec<u8>> {
        check_cbc_iv(iv)?;
        let cipher = cbc_cipher(key)?;

        // PKCS#7 padding is enabled by default
        encrypt(cipher, key, Some(iv), plain_text).map_err(|err| {
            log::debug!("Encryption failed, OpenSSL error stack: {err}");
            EnvelopeError::EncryptionFailure
        })
    }

    fn decrypt_cbc(&self, key: &[u8], iv: &[u8], cipher_text: &[u8]) -> Result<Vec<u8>> {
        check_cbc_iv(iv)?;
        let cipher = cbc_cipher(key)?;

        decrypt(cipher, key, Some(iv), cipher_text).map_err(|err| {
            log::debug!("Decryption failed, OpenSSL error stack: {err}");
            EnvelopeError::DecryptionFailure
        })
    }
}

fn cbc_cipher(key: &[u8]) -> Result<Cipher> {
    check_aes_key(key)?;
    if key.len() == AES_128_KEY_LEN {
        Ok(Cipher::aes_128_cbc())
    } else {
        Ok(Cipher::aes_256_cbc())
    }
}
