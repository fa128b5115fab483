use super::{
    aead::AeadCipher, cbc::CbcCipher, key_derivation::KeyDerivation, mac::MessageAuthentication,
    random::RandomSource,
};

/// A complete primitive backend, injected into the envelope codecs and the key derivation.
///
/// The trait is object safe, so `&dyn CryptoProvider` can be used to pick a backend at runtime.
pub trait CryptoProvider:
    RandomSource + CbcCipher + AeadCipher + MessageAuthentication + KeyDerivation + Send + Sync
{
    /// short name of the backend, e.g. for log output and benchmarks
    fn name(&self) -> &'static str;
}
