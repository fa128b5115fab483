//! Capabilities the envelope codecs consume from a cryptographic primitive library.
//!
//! Each capability is a trait, a backend implements all of them and is then usable as a
//! [`CryptoProvider`]. Backends are enabled with cargo features and may be compiled in side by side.

pub mod aead;
pub mod cbc;
pub(crate) mod common;
pub mod hash;
pub mod key_derivation;
pub mod mac;
pub mod provider;
pub mod random;

#[cfg(feature = "openssl")]
pub mod openssl;
#[cfg(feature = "ring")]
pub mod ring;
#[cfg(feature = "rust-crypto")]
pub mod rust_crypto;

pub use aead::AeadCipher;
pub use cbc::CbcCipher;
pub use hash::HashAlgorithm;
pub use key_derivation::KeyDerivation;
pub use mac::MessageAuthentication;
pub use provider::CryptoProvider;
pub use random::RandomSource;

#[cfg(feature = "openssl")]
use self::openssl::OpenSsl;
#[cfg(feature = "ring")]
use self::ring::Ring;
#[cfg(feature = "rust-crypto")]
use self::rust_crypto::RustCrypto;

/// IV length of AES in CBC mode
pub const CBC_IV_LEN: usize = 16;
/// nonce length used for AES-GCM
pub const GCM_NONCE_LEN: usize = 12;
/// length of the AES-GCM authentication tag appended to the cipher text
pub const GCM_TAG_LEN: usize = 16;

cfg_if::cfg_if! {
    if #[cfg(feature = "rust-crypto")] {
        /// Provider used by all operations without an explicit provider argument.
        pub type DefaultProvider = RustCrypto;
    } else if #[cfg(feature = "openssl")] {
        /// Provider used by all operations without an explicit provider argument.
        pub type DefaultProvider = OpenSsl;
    } else if #[cfg(feature = "ring")] {
        /// Provider used by all operations without an explicit provider argument.
        /// Note that ring has no AES-CBC, CBC envelopes need another backend.
        pub type DefaultProvider = Ring;
    } else {
        compile_error!("At least one crypto backend (rust-crypto, openssl, ring) has to be enabled.");
    }
}

/// Names of all backends compiled into this build.
pub fn compiled_providers() -> Vec<&'static str> {
    #[allow(unused_mut)]
    let mut providers = Vec::new();
    #[cfg(feature = "rust-crypto")]
    providers.push(CryptoProvider::name(&RustCrypto));
    #[cfg(feature = "openssl")]
    providers.push(CryptoProvider::name(&OpenSsl));
    #[cfg(feature = "ring")]
    providers.push(CryptoProvider::name(&Ring));
    providers
}
