use crate::error::Result;

/// AES in CBC mode with PKCS#7 padding, so plain texts of any length are supported.
///
/// The key length selects AES-128 (16 bytes) or AES-256 (32 bytes), the IV is always
/// [`CBC_IV_LEN`](super::CBC_IV_LEN) bytes.
pub trait CbcCipher {
    /// Encrypts and pads the plain text, the cipher text length is a multiple of the block size.
    fn encrypt_cbc(&self, key: &[u8], iv: &[u8], plain_text: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts and unpads the cipher text.
    ///
    /// Only to be called on authenticated input, a padding error surfaces as
    /// [`EnvelopeError::DecryptionFailure`](crate::error::EnvelopeError::DecryptionFailure).
    fn decrypt_cbc(&self, key: &[u8], iv: &[u8], cipher_text: &[u8]) -> Result<Vec<u8>>;
}
