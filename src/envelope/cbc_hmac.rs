//! AES-CBC with encrypt-then-MAC.
//!
//! ```text
//! [version:1][ivLen:1][iv:ivLen][macLen:1][mac:macLen][ciphertext:rest]
//! ```
//!
//! The MAC is a HMAC over `iv || ciphertext` with the authentication key, the HMAC hash is
//! determined by the [`KeySize`](crate::key::KeySize) of the key. Decryption verifies the MAC
//! before the cipher text is touched.

use super::{
    layout::{EnvelopeReader, EnvelopeWriter},
    DEFAULT_VERSION,
};
use crate::{
    crypto::{mac::tags_match, CryptoProvider, DefaultProvider, CBC_IV_LEN},
    error::{EnvelopeError, Result},
    key::ExpandedKey,
};

/// Encrypts `plain_text` into a CBC envelope tagged with `version`, see [`encrypt_cbc_with`].
pub fn encrypt_cbc<P>(version: u8, key: &ExpandedKey, plain_text: P) -> Result<Vec<u8>>
where
    P: AsRef<[u8]>,
{
    encrypt_cbc_with(&DefaultProvider::default(), version, key, plain_text)
}

/// [`encrypt_cbc`] with the [`DEFAULT_VERSION`].
pub fn encrypt_cbc_default<P>(key: &ExpandedKey, plain_text: P) -> Result<Vec<u8>>
where
    P: AsRef<[u8]>,
{
    encrypt_cbc(DEFAULT_VERSION, key, plain_text)
}

/// Encrypts `plain_text` with a fresh random IV and authenticates IV and cipher text.
///
/// Plain texts of any length, including zero, are padded to the AES block size.
pub fn encrypt_cbc_with<C, P>(
    provider: &C,
    version: u8,
    key: &ExpandedKey,
    plain_text: P,
) -> Result<Vec<u8>>
where
    C: CryptoProvider + ?Sized,
    P: AsRef<[u8]>,
{
    let key_size = key.key_size();

    let mut iv = [0u8; CBC_IV_LEN];
    provider.fill_random(&mut iv)?;

    let cipher_text = provider.encrypt_cbc(key.encryption_key(), &iv, plain_text.as_ref())?;
    let mac = provider.hmac(
        key_size.mac_algorithm(),
        key.authentication_key(),
        &[iv.as_slice(), cipher_text.as_slice()],
    )?;

    log::trace!(
        "Building CBC envelope version {version} with {} bytes IV, {} bytes MAC and {} bytes cipher text",
        iv.len(),
        mac.len(),
        cipher_text.len()
    );

    let mut writer = EnvelopeWriter::new(version, 2 + iv.len() + mac.len() + cipher_text.len());
    writer
        .put_length_prefixed(&iv)
        .ok_or(EnvelopeError::InvalidIvLength {
            expected: CBC_IV_LEN,
            found: iv.len(),
        })?;
    writer
        .put_length_prefixed(&mac)
        .ok_or(EnvelopeError::MacLengthOverflow(mac.len()))?;
    writer.put(&cipher_text);

    Ok(writer.finish())
}

/// Authenticates and decrypts a CBC envelope, see [`decrypt_cbc_with`].
pub fn decrypt_cbc<E>(version: u8, key: &ExpandedKey, envelope: E) -> Result<Vec<u8>>
where
    E: AsRef<[u8]>,
{
    decrypt_cbc_with(&DefaultProvider::default(), version, key, envelope)
}

/// [`decrypt_cbc`] with the [`DEFAULT_VERSION`].
pub fn decrypt_cbc_default<E>(key: &ExpandedKey, envelope: E) -> Result<Vec<u8>>
where
    E: AsRef<[u8]>,
{
    decrypt_cbc(DEFAULT_VERSION, key, envelope)
}

/// Parses the envelope, verifies its MAC in constant time and only then decrypts.
///
/// The checks run in envelope order: version, IV length, MAC length, MAC.
/// No plain text is ever produced from an envelope whose MAC does not match.
pub fn decrypt_cbc_with<C, E>(
    provider: &C,
    version: u8,
    key: &ExpandedKey,
    envelope: E,
) -> Result<Vec<u8>>
where
    C: CryptoProvider + ?Sized,
    E: AsRef<[u8]>,
{
    let key_size = key.key_size();
    let mut reader = EnvelopeReader::new(envelope.as_ref());

    reader.read_version(version)?;

    let iv_len = reader.read_byte()? as usize;
    if iv_len != CBC_IV_LEN {
        log::debug!("CBC envelope has an IV of {iv_len} bytes");
        return Err(EnvelopeError::InvalidIvLength {
            expected: CBC_IV_LEN,
            found: iv_len,
        });
    }
    let iv = reader.read_bytes(iv_len)?;

    let mac_len = reader.read_byte()? as usize;
    if mac_len != key_size.mac_len() {
        log::debug!(
            "CBC envelope has a MAC of {mac_len} bytes, {key_size} needs {}",
            key_size.mac_len()
        );
        return Err(EnvelopeError::InvalidMacLength {
            expected: key_size.mac_len(),
            found: mac_len,
        });
    }
    let mac = reader.read_bytes(mac_len)?;
    let cipher_text = reader.remaining();

    log::trace!(
        "Parsed CBC envelope version {version} with {} bytes cipher text",
        cipher_text.len()
    );

    let computed_mac = provider.hmac(
        key_size.mac_algorithm(),
        key.authentication_key(),
        &[iv, cipher_text],
    )?;
    if !tags_match(&computed_mac, mac) {
        log::debug!("CBC envelope MAC does not match");
        return Err(EnvelopeError::AuthenticationFailure);
    }

    provider.decrypt_cbc(key.encryption_key(), iv, cipher_text)
}
