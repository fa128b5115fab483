use crate::error::Result;

/// Cryptographically secure source of random bytes, used for seeds, IVs and nonces.
///
/// Implementations must be safe to share between threads, they are never reseeded by this crate.
pub trait RandomSource {
    /// Fills the whole buffer with random bytes.
    fn fill_random(&self, buffer: &mut [u8]) -> Result<()>;
}
