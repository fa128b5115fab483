//! Self describing envelopes of authenticated AES encryption.
//!
//! Both envelope kinds start with a version byte chosen by the caller, followed by a length
//! prefixed IV. Length prefixes are single bytes limited to 127. Decryption checks the version
//! first and refuses envelopes of any other version.

mod cbc_hmac;
mod gcm;
mod layout;

pub use cbc_hmac::{
    decrypt_cbc, decrypt_cbc_default, decrypt_cbc_with, encrypt_cbc, encrypt_cbc_default,
    encrypt_cbc_with,
};
pub use gcm::{
    decrypt_gcm, decrypt_gcm_default, decrypt_gcm_with, encrypt_gcm, encrypt_gcm_default,
    encrypt_gcm_with,
};

use crate::error::Result;

/// Version used by the `*_default` functions
pub const DEFAULT_VERSION: u8 = 0;

/// Reads the version byte of an envelope of either kind.
///
/// Nothing is authenticated here, the version is only a hint which version to expect when
/// decrypting.
pub fn version_of<E>(envelope: &E) -> Result<u8>
where
    E: AsRef<[u8]> + ?Sized,
{
    layout::EnvelopeReader::new(envelope.as_ref()).read_byte()
}
