//! Seed generation, seed expansion and password based derivation.
//!
//! A seed is expanded into two independent keys, each one derived with HKDF-Expand
//! using the seed itself as pseudorandom key:
//! - the encryption key with HKDF-SHA-512 and the label `encKey`
//! - the authentication key with HKDF-SHA-256 and the label `authKey`

use zeroize::Zeroize;

use super::{expanded_key::ExpandedKey, key_size::KeySize};
use crate::{
    crypto::{
        hash::HashAlgorithm, key_derivation::KeyDerivation, random::RandomSource, DefaultProvider,
    },
    error::{EnvelopeError, Result},
};

const ENCRYPTION_KEY_LABEL: &[u8] = b"encKey";
const AUTHENTICATION_KEY_LABEL: &[u8] = b"authKey";

/// Length of the key material derived from a password
pub const PASSWORD_KEY_MATERIAL_LEN: usize = 64;

/// Draws a random seed of the cipher key length of `key_size`.
pub fn generate_seed(key_size: KeySize) -> Result<Vec<u8>> {
    generate_seed_with(&DefaultProvider::default(), key_size)
}

/// Same as [`generate_seed`] with an explicit random source.
pub fn generate_seed_with<R>(random: &R, key_size: KeySize) -> Result<Vec<u8>>
where
    R: RandomSource + ?Sized,
{
    let mut seed = vec![0u8; key_size.cipher_key_len()];
    random.fill_random(&mut seed)?;

    Ok(seed)
}

/// Expands `seed` deterministically into an [`ExpandedKey`].
/// The same seed and key size always yield the same keys.
///
/// Fails with [`EnvelopeError::InvalidKeyMaterial`] on an empty seed.
pub fn expand<M>(key_size: KeySize, seed: M) -> Result<ExpandedKey>
where
    M: AsRef<[u8]>,
{
    expand_with(&DefaultProvider::default(), key_size, seed)
}

/// Same as [`expand`] with an explicit key derivation.
pub fn expand_with<K, M>(kdf: &K, key_size: KeySize, seed: M) -> Result<ExpandedKey>
where
    K: KeyDerivation + ?Sized,
    M: AsRef<[u8]>,
{
    let seed = seed.as_ref();
    if seed.is_empty() {
        log::debug!("Cannot expand an empty seed");
        return Err(EnvelopeError::InvalidKeyMaterial);
    }
    log::trace!("Expanding {} byte seed into {key_size} keys", seed.len());

    let mut encryption_key = vec![0u8; key_size.cipher_key_len()];
    let mut authentication_key = vec![0u8; key_size.mac_key_len()];

    let expanded = kdf
        .hkdf_expand(
            HashAlgorithm::Sha512,
            seed,
            ENCRYPTION_KEY_LABEL,
            &mut encryption_key,
        )
        .and_then(|_| {
            kdf.hkdf_expand(
                HashAlgorithm::Sha256,
                seed,
                AUTHENTICATION_KEY_LABEL,
                &mut authentication_key,
            )
        });

    if let Err(err) = expanded {
        encryption_key.zeroize();
        authentication_key.zeroize();
        return Err(err);
    }

    ExpandedKey::from_parts(key_size, seed.to_vec(), encryption_key, authentication_key)
}

/// Derives [`PASSWORD_KEY_MATERIAL_LEN`] bytes from a password with HKDF (extract and expand)
/// and an empty info. A missing salt is treated as an empty salt.
///
/// The result is raw key material, not an [`ExpandedKey`]. HKDF is no password hashing
/// function and adds no work factor, so low entropy passwords stay guessable.
///
/// Fails with [`EnvelopeError::InvalidKeyMaterial`] on an empty password.
pub fn derive_from_password<M>(
    salt: Option<&[u8]>,
    password: M,
    hash: HashAlgorithm,
) -> Result<[u8; PASSWORD_KEY_MATERIAL_LEN]>
where
    M: AsRef<[u8]>,
{
    derive_from_password_with(&DefaultProvider::default(), salt, password, hash)
}

/// Same as [`derive_from_password`] with an explicit key derivation.
pub fn derive_from_password_with<K, M>(
    kdf: &K,
    salt: Option<&[u8]>,
    password: M,
    hash: HashAlgorithm,
) -> Result<[u8; PASSWORD_KEY_MATERIAL_LEN]>
where
    K: KeyDerivation + ?Sized,
    M: AsRef<[u8]>,
{
    let password = password.as_ref();
    if password.is_empty() {
        log::debug!("Cannot derive key material from an empty password");
        return Err(EnvelopeError::InvalidKeyMaterial);
    }

    let mut key_material = [0u8; PASSWORD_KEY_MATERIAL_LEN];
    kdf.hkdf(hash, salt.unwrap_or_default(), password, &[], &mut key_material)?;

    Ok(key_material)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        test_vectors::{
            get_expanded_key_test_vectors, get_password_test_vectors, get_test_providers,
        },
        util::test::assert_bytes_eq,
    };

    use test_case::test_case;

    #[test]
    fn expands_seed_into_known_keys() {
        for provider in get_test_providers() {
            for vector in get_expanded_key_test_vectors() {
                let key = expand_with(provider.as_ref(), vector.key_size, &vector.seed).unwrap();

                assert_eq!(key.key_size(), vector.key_size);
                assert_bytes_eq(key.original_key(), &vector.seed);
                assert_bytes_eq(key.encryption_key(), &vector.encryption_key);
                assert_bytes_eq(key.authentication_key(), &vector.authentication_key);
            }
        }
    }

    #[test_case(KeySize::Aes128; "Aes128")]
    #[test_case(KeySize::Aes256; "Aes256")]
    fn expansion_is_deterministic(key_size: KeySize) {
        let seed = generate_seed(key_size).unwrap();
        let first = expand(key_size, &seed).unwrap();
        let second = expand(key_size, &seed).unwrap();

        assert_eq!(first.encryption_key(), second.encryption_key());
        assert_eq!(first.authentication_key(), second.authentication_key());
    }

    #[test]
    fn derived_keys_are_independent() {
        let key = expand(KeySize::Aes128, [0x2Au8; 16]).unwrap();

        assert_ne!(key.encryption_key(), &key.authentication_key()[..16]);
        assert_ne!(key.encryption_key(), key.original_key());
    }

    #[test]
    fn different_seeds_yield_different_keys() {
        let first = expand(KeySize::Aes256, [0x01u8; 32]).unwrap();
        let second = expand(KeySize::Aes256, [0x02u8; 32]).unwrap();

        assert_ne!(first.encryption_key(), second.encryption_key());
        assert_ne!(first.authentication_key(), second.authentication_key());
    }

    #[test]
    fn expands_seeds_of_any_length() {
        let key = expand(KeySize::Aes256, b"short").unwrap();

        assert_eq!(key.original_key(), b"short");
        assert_eq!(key.encryption_key().len(), 32);
        assert_eq!(key.authentication_key().len(), 64);
    }

    #[test]
    fn rejects_empty_seed() {
        let result = expand(KeySize::Aes128, [0u8; 0]);
        assert_eq!(result.unwrap_err(), EnvelopeError::InvalidKeyMaterial);
    }

    #[test_case(KeySize::Aes128, 16; "Aes128")]
    #[test_case(KeySize::Aes256, 32; "Aes256")]
    fn generates_random_seeds(key_size: KeySize, seed_len: usize) {
        let first = generate_seed(key_size).unwrap();
        let second = generate_seed(key_size).unwrap();

        assert_eq!(first.len(), seed_len);
        assert_eq!(second.len(), seed_len);
        assert_ne!(first, second);
    }

    #[test]
    fn derives_known_key_material_from_password() {
        for provider in get_test_providers() {
            for vector in get_password_test_vectors() {
                let salt = (!vector.salt.is_empty()).then_some(vector.salt.as_slice());
                let key_material = derive_from_password_with(
                    provider.as_ref(),
                    salt,
                    &vector.password,
                    vector.hash_strength,
                )
                .unwrap();

                assert_bytes_eq(&key_material, &vector.key_material);
            }
        }
    }

    #[test]
    fn missing_salt_equals_empty_salt() {
        let without = derive_from_password(None, "hunter2", HashAlgorithm::Sha256).unwrap();
        let empty =
            derive_from_password(Some(b"".as_slice()), "hunter2", HashAlgorithm::Sha256).unwrap();

        assert_bytes_eq(&without, &empty);
    }

    #[test]
    fn salt_changes_key_material() {
        let first =
            derive_from_password(Some(b"a".as_slice()), "hunter2", HashAlgorithm::Sha512).unwrap();
        let second =
            derive_from_password(Some(b"b".as_slice()), "hunter2", HashAlgorithm::Sha512).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn rejects_empty_password() {
        let result = derive_from_password(None, "", HashAlgorithm::Sha256);
        assert_eq!(result.unwrap_err(), EnvelopeError::InvalidKeyMaterial);
    }
}
