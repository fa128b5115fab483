//! # Authenticated AES envelopes (`aes-envelope`)
//! This library encrypts opaque payloads into self describing byte envelopes, either with
//! AES-CBC and HMAC (encrypt-then-MAC) or with AES-GCM.
//!
//! A key pair is expanded once from a random seed with HKDF, see [`key`], and then used for
//! any number of envelopes, see [`envelope`].
//!
//! ```
//! use aes_envelope::{envelope, key::{ExpandedKey, KeySize}};
//!
//! aes_envelope::init();
//! let key = ExpandedKey::generate(KeySize::Aes128)?;
//!
//! let sealed = envelope::encrypt_cbc(1, &key, b"attack at dawn")?;
//! let opened = envelope::decrypt_cbc(1, &key, &sealed)?;
//! assert_eq!(opened, b"attack at dawn");
//! # Ok::<(), aes_envelope::error::EnvelopeError>(())
//! ```
//!
//! # Optional features
//!
//! Using optional features `aes-envelope` allows to configure different crypto libraries.
//! The backends can be enabled side by side, each one can be handed to the `*_with` functions.
//! Operations without an explicit provider use [`DefaultProvider`], the first enabled backend in the order below.
//!
//! - **`rust-crypto`** *(enabled by default)*: Uses the pure Rust implementations of [RustCrypto](https://github.com/RustCrypto).
//! - **`openssl`**: Uses the [rust-openssl](https://crates.io/crates/openssl) crate, which provides bindings to OpenSSL.
//! Per default the OpenSSL library is locally compiled and then statically linked. The build process requires a C compiler,
//! `perl` (and `perl-core`), and `make`. For further options see the [openssl crate documentation](https://docs.rs/openssl/0.10.55/openssl/).
//! - **`ring`**: Uses the [ring](https://crates.io/crates/ring) library which allows compilation to Wasm32.
//! AES-CBC is not supported, CBC envelopes fail with [`EnvelopeError::UnsupportedByProvider`](error::EnvelopeError::UnsupportedByProvider).

#![deny(clippy::missing_panics_doc)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![warn(
    // missing_docs,
    clippy::doc_markdown,
    clippy::semicolon_if_nothing_returned,
    clippy::single_match_else,
    clippy::inconsistent_struct_constructor,
    clippy::map_unwrap_or,
    clippy::match_same_arms
)]

mod util;

pub mod crypto;
pub mod envelope;
/// error definitions
pub mod error;
pub mod key;

pub use crypto::{CryptoProvider, DefaultProvider};

#[cfg(test)]
pub mod test_vectors;

static INIT: std::sync::Once = std::sync::Once::new();

/// One time initialization, to be called by the application before using the library.
///
/// Initializes the OpenSSL library if that backend is compiled in and logs the available
/// backends. Further calls have no effect. No operation depends on it being called.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "openssl")]
        ::openssl::init();

        log::info!(
            "aes-envelope backends: {}, default: {}",
            crypto::compiled_providers().join(", "),
            CryptoProvider::name(&DefaultProvider::default())
        );
    });
}
