use super::hash::HashAlgorithm;
use crate::error::Result;

/// HKDF as of [RFC 5869](https://www.rfc-editor.org/rfc/rfc5869)
pub trait KeyDerivation {
    /// HKDF-Expand only, `prk` is used as is and may be shorter than the hash output.
    /// Fills `okm` completely, its length must not exceed 255 hash blocks.
    fn hkdf_expand(
        &self,
        hash: HashAlgorithm,
        prk: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<()>;

    /// HKDF-Extract followed by HKDF-Expand. An empty salt equals a salt of hash length zeros.
    fn hkdf(
        &self,
        hash: HashAlgorithm,
        salt: &[u8],
        ikm: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<()>;
}
