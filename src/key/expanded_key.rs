use zeroize::Zeroize;

use super::{derivation, key_size::KeySize};
use crate::{
    crypto::{key_derivation::KeyDerivation, random::RandomSource, DefaultProvider},
    error::{EnvelopeError, Result},
};

/// Key pair for the envelope codecs, holding the seed it was expanded from,
/// the AES encryption key and the HMAC authentication key.
///
/// The key is only read by encryption and decryption, so it can be shared between threads.
/// It is not wiped automatically: call [`ExpandedKey::destroy`] once it is no longer needed,
/// after all encryptions and decryptions using it have finished.
pub struct ExpandedKey {
    key_size: KeySize,
    original_key: Vec<u8>,
    encryption_key: Vec<u8>,
    authentication_key: Vec<u8>,
}

impl ExpandedKey {
    /// Generates a random seed and expands it, see [`derivation::expand`].
    pub fn generate(key_size: KeySize) -> Result<Self> {
        Self::generate_with(&DefaultProvider::default(), key_size)
    }

    /// Same as [`ExpandedKey::generate`] with an explicit crypto provider.
    pub fn generate_with<P>(provider: &P, key_size: KeySize) -> Result<Self>
    where
        P: RandomSource + KeyDerivation + ?Sized,
    {
        let mut seed = derivation::generate_seed_with(provider, key_size)?;
        let key = derivation::expand_with(provider, key_size, &seed);
        seed.zeroize();

        key
    }

    /// Assembles a key from already generated material.
    /// Fails with [`EnvelopeError::InvalidKeyMaterial`] if the original key is empty,
    /// or if the key lengths do not match the key size.
    pub fn from_parts(
        key_size: KeySize,
        original_key: Vec<u8>,
        encryption_key: Vec<u8>,
        authentication_key: Vec<u8>,
    ) -> Result<Self> {
        if original_key.is_empty()
            || encryption_key.len() != key_size.cipher_key_len()
            || authentication_key.len() != key_size.mac_key_len()
        {
            log::debug!(
                "Key lengths ({}, {}) do not match {key_size}",
                encryption_key.len(),
                authentication_key.len()
            );
            return Err(EnvelopeError::InvalidKeyMaterial);
        }

        Ok(Self {
            key_size,
            original_key,
            encryption_key,
            authentication_key,
        })
    }

    /// Returns the key size of this key pair.
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Returns the seed this key was expanded from.
    pub fn original_key(&self) -> &[u8] {
        &self.original_key
    }

    /// Returns the AES key.
    pub fn encryption_key(&self) -> &[u8] {
        &self.encryption_key
    }

    /// Returns the HMAC key.
    pub fn authentication_key(&self) -> &[u8] {
        &self.authentication_key
    }

    /// Overwrites all key buffers with zeros, their lengths are kept. Calling it twice is harmless.
    ///
    /// The exclusive borrow ensures no encryption or decryption is using the key meanwhile.
    pub fn destroy(&mut self) {
        log::trace!("Destroying {} key", self.key_size);
        self.original_key.as_mut_slice().zeroize();
        self.encryption_key.as_mut_slice().zeroize();
        self.authentication_key.as_mut_slice().zeroize();
    }
}

impl std::fmt::Debug for ExpandedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpandedKey")
            .field("key_size", &self.key_size)
            .finish_non_exhaustive()
    }
}
