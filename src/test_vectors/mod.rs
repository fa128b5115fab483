use serde::{Deserialize, Deserializer};

use crate::{
    crypto::{
        aead::AeadCipher, cbc::CbcCipher, hash::HashAlgorithm, key_derivation::KeyDerivation,
        mac::MessageAuthentication, provider::CryptoProvider, random::RandomSource,
    },
    error::Result,
    key::KeySize,
};

const TEST_VECTORS: &str = include_str!("vectors.json");

lazy_static::lazy_static! {
    static ref PARSED_TEST_VECTORS: TestVectors = parse_test_vectors();
}

#[derive(Deserialize)]
struct TestVectors {
    expanded_keys: Vec<ExpandedKeyTest>,
    envelopes: Vec<EnvelopeTest>,
    password_derivations: Vec<PasswordTest>,
}

#[derive(Deserialize, Debug)]
pub struct ExpandedKeyTest {
    #[serde(deserialize_with = "key_size_from_str")]
    pub key_size: KeySize,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub seed: Vec<u8>,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub encryption_key: Vec<u8>,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub authentication_key: Vec<u8>,
}

/// Envelopes built with the IV bytes `0, 1, 2, ...` as drawn from [`DeterministicProvider`]
#[derive(Deserialize, Debug)]
pub struct EnvelopeTest {
    #[serde(deserialize_with = "key_size_from_str")]
    pub key_size: KeySize,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub seed: Vec<u8>,
    pub version: u8,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub plain_text: Vec<u8>,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub cbc_envelope: Vec<u8>,
    #[serde(default, deserialize_with = "optional_vec_from_hex_str")]
    pub gcm_envelope: Option<Vec<u8>>,
}

#[derive(Deserialize, Debug)]
pub struct PasswordTest {
    #[serde(deserialize_with = "hash_algorithm_from_str")]
    pub hash_strength: HashAlgorithm,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub salt: Vec<u8>,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub password: Vec<u8>,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub key_material: Vec<u8>,
}

pub fn get_expanded_key_test_vectors() -> &'static [ExpandedKeyTest] {
    &PARSED_TEST_VECTORS.expanded_keys
}

pub fn get_envelope_test_vectors() -> &'static [EnvelopeTest] {
    &PARSED_TEST_VECTORS.envelopes
}

pub fn get_password_test_vectors() -> &'static [PasswordTest] {
    &PARSED_TEST_VECTORS.password_derivations
}

fn parse_test_vectors() -> TestVectors {
    serde_json::from_str(TEST_VECTORS).unwrap()
}

fn vec_from_hex_str<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let hex_str = String::deserialize(deserializer)?;
    hex::decode(hex_str).map_err(serde::de::Error::custom)
}

fn optional_vec_from_hex_str<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    vec_from_hex_str(deserializer).map(Some)
}

fn key_size_from_str<'de, D>(deserializer: D) -> std::result::Result<KeySize, D::Error>
where
    D: Deserializer<'de>,
{
    match String::deserialize(deserializer)?.as_str() {
        "Aes128" => Ok(KeySize::Aes128),
        "Aes256" => Ok(KeySize::Aes256),
        other => Err(serde::de::Error::custom(format!("unknown key size {other}"))),
    }
}

fn hash_algorithm_from_str<'de, D>(deserializer: D) -> std::result::Result<HashAlgorithm, D::Error>
where
    D: Deserializer<'de>,
{
    match String::deserialize(deserializer)?.as_str() {
        "Sha256" => Ok(HashAlgorithm::Sha256),
        "Sha512" => Ok(HashAlgorithm::Sha512),
        other => Err(serde::de::Error::custom(format!("unknown hash {other}"))),
    }
}

/// Every backend compiled into this build, so known answers can be checked against each.
pub fn get_test_providers() -> Vec<Box<dyn CryptoProvider>> {
    #[allow(unused_mut)]
    let mut providers: Vec<Box<dyn CryptoProvider>> = Vec::new();
    #[cfg(feature = "rust-crypto")]
    providers.push(Box::new(crate::crypto::rust_crypto::RustCrypto));
    #[cfg(feature = "openssl")]
    providers.push(Box::new(crate::crypto::openssl::OpenSsl));
    #[cfg(feature = "ring")]
    providers.push(Box::new(crate::crypto::ring::Ring));
    providers
}

/// The compiled backends that implement AES-CBC, ring does not.
pub fn get_cbc_test_providers() -> Vec<Box<dyn CryptoProvider>> {
    get_test_providers()
        .into_iter()
        .filter(|provider| provider.name() != "ring")
        .collect()
}

/// Delegates to a wrapped provider, but draws the predictable bytes `0, 1, 2, ...`
/// instead of random ones, so envelopes can be compared against known answers.
#[derive(Clone, Copy)]
pub struct DeterministicProvider<'p> {
    inner: &'p dyn CryptoProvider,
}

impl<'p> DeterministicProvider<'p> {
    pub fn wrapping(inner: &'p dyn CryptoProvider) -> Self {
        Self { inner }
    }
}

impl CryptoProvider for DeterministicProvider<'_> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

impl RandomSource for DeterministicProvider<'_> {
    fn fill_random(&self, buffer: &mut [u8]) -> Result<()> {
        buffer
            .iter_mut()
            .zip(0u8..)
            .for_each(|(byte, value)| *byte = value);
        Ok(())
    }
}

impl CbcCipher for DeterministicProvider<'_> {
    fn encrypt_cbc(&self, key: &[u8], iv: &[u8], plain_text: &[u8]) -> Result<Vec<u8>> {
        self.inner.encrypt_cbc(key, iv, plain_text)
    }

    fn decrypt_cbc(&self, key: &[u8], iv: &[u8], cipher_text: &[u8]) -> Result<Vec<u8>> {
        self.inner.decrypt_cbc(key, iv, cipher_text)
    }
}

impl AeadCipher for DeterministicProvider<'_> {
    fn seal(&self, key: &[u8], nonce: &[u8], tag_len: usize, plain_text: &[u8]) -> Result<Vec<u8>> {
        self.inner.seal(key, nonce, tag_len, plain_text)
    }

    fn open(
        &self,
        key: &[u8],
        nonce: &[u8],
        tag_len: usize,
        cipher_text: &[u8],
    ) -> Result<Vec<u8>> {
        self.inner.open(key, nonce, tag_len, cipher_text)
    }
}

impl MessageAuthentication for DeterministicProvider<'_> {
    fn hmac(&self, hash: HashAlgorithm, key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>> {
        self.inner.hmac(hash, key, parts)
    }
}

impl KeyDerivation for DeterministicProvider<'_> {
    fn hkdf_expand(
        &self,
        hash: HashAlgorithm,
        prk: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<()> {
        self.inner.hkdf_expand(hash, prk, info, okm)
    }

    fn hkdf(
        &self,
        hash: HashAlgorithm,
        salt: &[u8],
        ikm: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<()> {
        self.inner.hkdf(hash, salt, ikm, info, okm)
    }
}
