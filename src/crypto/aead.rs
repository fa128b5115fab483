use crate::error::Result;

/// AES-GCM as AEAD, without associated data.
pub trait AeadCipher {
    /// Encrypts the plain text and returns the cipher text with the `tag_len` bytes long
    /// authentication tag appended.
    fn seal(&self, key: &[u8], nonce: &[u8], tag_len: usize, plain_text: &[u8]) -> Result<Vec<u8>>;

    /// Verifies the appended tag and decrypts.
    ///
    /// Any verification failure, including a cipher text shorter than the tag, is reported as
    /// [`EnvelopeError::AuthenticationFailure`](crate::error::EnvelopeError::AuthenticationFailure).
    fn open(&self, key: &[u8], nonce: &[u8], tag_len: usize, cipher_text: &[u8])
        -> Result<Vec<u8>>;
}
