/// Represents either success(T) or an failure ([`EnvelopeError`])
pub type Result<T> = std::result::Result<T, EnvelopeError>;

/// Represents an error which has occured in the aes-envelope library
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// the seed or key buffers are empty or do not match the key size
    #[error("Invalid key material")]
    InvalidKeyMaterial,

    /// the key size cannot be used with the requested construct (GCM accepts at most 128 bit keys)
    #[error("Key size of {0} bits is not supported by this construct")]
    UnsupportedKeySize(usize),

    /// the computed MAC does not fit into the single byte length prefix of the envelope
    #[error("MAC length {0} exceeds the envelope limit of 127 bytes")]
    MacLengthOverflow(usize),

    /// the envelope carries another version than the one expected by the caller
    #[error("Version {expected} was expected but the envelope has version {found}")]
    VersionMismatch {
        /// version requested by the caller
        expected: u8,
        /// version found in the envelope
        found: u8,
    },

    /// the IV length does not match the construct
    #[error("Invalid IV length {found}, expected {expected}")]
    InvalidIvLength {
        /// IV length required by the construct
        expected: usize,
        /// IV length found in the envelope
        found: usize,
    },

    /// the MAC length does not match the HMAC output size of the key
    #[error("Invalid MAC length {found}, expected {expected}")]
    InvalidMacLength {
        /// HMAC output size of the key
        expected: usize,
        /// MAC length found in the envelope
        found: usize,
    },

    /// MAC or AEAD tag did not verify, the envelope has been tampered with or the key is wrong
    #[error("Could not authenticate envelope")]
    AuthenticationFailure,

    /// envelope ended before all header fields could be read
    #[error("Envelope with size {0} is truncated")]
    TruncatedEnvelope(usize),

    /// the cipher primitive failed to encrypt
    #[error("Failed to Encrypt")]
    EncryptionFailure,

    /// the cipher primitive failed to decrypt an already authenticated envelope
    #[error("Failed to Decrypt")]
    DecryptionFailure,

    /// the HMAC primitive failed for a usable key
    #[error("Unable to compute the HMAC")]
    MacComputationFailure,

    /// the requested AES-GCM tag length is not implemented by the backends
    #[error("Unsupported GCM tag length: {0} bytes")]
    UnsupportedTagLength(usize),

    /// could not derive key material with HKDF
    #[error("Unable to derive key material")]
    KeyDerivationFailure,

    /// the secure random source could not deliver bytes
    #[error("Secure random source is unavailable")]
    RandomSourceFailure,

    /// the capability is not implemented by the selected crypto provider
    #[error("{0} is not supported by this crypto provider")]
    UnsupportedByProvider(&'static str),
}
