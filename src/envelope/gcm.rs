//! AES-GCM envelopes.
//!
//! ```text
//! [version:1][ivLen:1][iv:ivLen][ciphertext+tag:rest]
//! ```
//!
//! Only keys up to 128 bits are accepted. The tag length is derived from the key length.

use super::{
    layout::{EnvelopeReader, EnvelopeWriter},
    DEFAULT_VERSION,
};
use crate::{
    crypto::{CryptoProvider, DefaultProvider, GCM_NONCE_LEN},
    error::{EnvelopeError, Result},
    key::ExpandedKey,
};

const MAX_GCM_KEY_LEN: usize = 16;

/// Encrypts `plain_text` into a GCM envelope tagged with `version`, see [`encrypt_gcm_with`].
pub fn encrypt_gcm<P>(version: u8, key: &ExpandedKey, plain_text: P) -> Result<Vec<u8>>
where
    P: AsRef<[u8]>,
{
    encrypt_gcm_with(&DefaultProvider::default(), version, key, plain_text)
}

/// [`encrypt_gcm`] with the [`DEFAULT_VERSION`].
pub fn encrypt_gcm_default<P>(key: &ExpandedKey, plain_text: P) -> Result<Vec<u8>>
where
    P: AsRef<[u8]>,
{
    encrypt_gcm(DEFAULT_VERSION, key, plain_text)
}

/// Encrypts `plain_text` with a fresh random nonce.
///
/// Fails with [`EnvelopeError::UnsupportedKeySize`] for keys longer than 128 bits.
pub fn encrypt_gcm_with<C, P>(
    provider: &C,
    version: u8,
    key: &ExpandedKey,
    plain_text: P,
) -> Result<Vec<u8>>
where
    C: CryptoProvider + ?Sized,
    P: AsRef<[u8]>,
{
    let tag_len = tag_len_of(key)?;

    let mut nonce = [0u8; GCM_NONCE_LEN];
    provider.fill_random(&mut nonce)?;

    let sealed = provider.seal(key.encryption_key(), &nonce, tag_len, plain_text.as_ref())?;

    log::trace!(
        "Building GCM envelope version {version} with {} bytes IV and {} bytes cipher text",
        nonce.len(),
        sealed.len()
    );

    let mut writer = EnvelopeWriter::new(version, 1 + nonce.len() + sealed.len());
    writer
        .put_length_prefixed(&nonce)
        .ok_or(EnvelopeError::InvalidIvLength {
            expected: GCM_NONCE_LEN,
            found: nonce.len(),
        })?;
    writer.put(&sealed);

    Ok(writer.finish())
}

/// Decrypts a GCM envelope, see [`decrypt_gcm_with`].
pub fn decrypt_gcm<E>(version: u8, key: &ExpandedKey, envelope: E) -> Result<Vec<u8>>
where
    E: AsRef<[u8]>,
{
    decrypt_gcm_with(&DefaultProvider::default(), version, key, envelope)
}

/// [`decrypt_gcm`] with the [`DEFAULT_VERSION`].
pub fn decrypt_gcm_default<E>(key: &ExpandedKey, envelope: E) -> Result<Vec<u8>>
where
    E: AsRef<[u8]>,
{
    decrypt_gcm(DEFAULT_VERSION, key, envelope)
}

/// Parses the envelope and lets the AEAD verify the tag while decrypting.
/// A tag mismatch is reported as [`EnvelopeError::AuthenticationFailure`].
///
/// The key size is checked before the envelope is parsed, so a key longer than 128 bits
/// fails with [`EnvelopeError::UnsupportedKeySize`] even if the version does not match.
pub fn decrypt_gcm_with<C, E>(
    provider: &C,
    version: u8,
    key: &ExpandedKey,
    envelope: E,
) -> Result<Vec<u8>>
where
    C: CryptoProvider + ?Sized,
    E: AsRef<[u8]>,
{
    let tag_len = tag_len_of(key)?;
    let mut reader = EnvelopeReader::new(envelope.as_ref());

    reader.read_version(version)?;

    let nonce_len = reader.read_byte()? as usize;
    if nonce_len != GCM_NONCE_LEN {
        log::debug!("GCM envelope has an IV of {nonce_len} bytes");
        return Err(EnvelopeError::InvalidIvLength {
            expected: GCM_NONCE_LEN,
            found: nonce_len,
        });
    }
    let nonce = reader.read_bytes(nonce_len)?;
    let sealed = reader.remaining();

    log::trace!(
        "Parsed GCM envelope version {version} with {} bytes cipher text",
        sealed.len()
    );

    provider.open(key.encryption_key(), nonce, tag_len, sealed)
}

fn tag_len_of(key: &ExpandedKey) -> Result<usize> {
    let key_size = key.key_size();
    if key_size.cipher_key_len() > MAX_GCM_KEY_LEN {
        log::debug!("GCM envelopes do not support {key_size}");
        return Err(EnvelopeError::UnsupportedKeySize(key_size.cipher_key_bits()));
    }

    Ok(key_size.cipher_key_bits() / 8)
}
