/// Hash function backing HMAC and HKDF
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HashAlgorithm {
    /// SHA-256, 32 byte output
    Sha256,
    /// SHA-512, 64 byte output
    Sha512,
}

impl HashAlgorithm {
    /// Output size of the hash function (and of its HMAC) in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::Sha256 => write!(f, "SHA-256"),
            HashAlgorithm::Sha512 => write!(f, "SHA-512"),
        }
    }
}
