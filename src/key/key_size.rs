use crate::crypto::hash::HashAlgorithm;

/// Depicts the strength of a key pair: the AES key length for encryption,
/// and which HMAC authenticates CBC envelopes
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeySize {
    /// encryption: AES 128, authentication: HMAC-SHA-256 with a 32 byte key
    Aes128,
    /// encryption: AES 256, authentication: HMAC-SHA-512 with a 64 byte key
    Aes256,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct KeySizeParams {
    pub cipher_key_len: usize,
    pub mac_key_len: usize,
    pub mac_algorithm: HashAlgorithm,
}

static KEY_SIZE_AES_128: KeySizeParams = KeySizeParams {
    cipher_key_len: 16,
    mac_key_len: 32,
    mac_algorithm: HashAlgorithm::Sha256,
};

static KEY_SIZE_AES_256: KeySizeParams = KeySizeParams {
    cipher_key_len: 32,
    mac_key_len: 64,
    mac_algorithm: HashAlgorithm::Sha512,
};

impl From<KeySize> for &'static KeySizeParams {
    fn from(key_size: KeySize) -> Self {
        match key_size {
            KeySize::Aes128 => &KEY_SIZE_AES_128,
            KeySize::Aes256 => &KEY_SIZE_AES_256,
        }
    }
}

impl KeySize {
    fn params(self) -> &'static KeySizeParams {
        self.into()
    }

    /// length of the AES encryption key in bytes
    pub fn cipher_key_len(self) -> usize {
        self.params().cipher_key_len
    }

    /// length of the AES encryption key in bits
    pub fn cipher_key_bits(self) -> usize {
        self.cipher_key_len() * 8
    }

    /// length of the HMAC authentication key in bytes
    pub fn mac_key_len(self) -> usize {
        self.params().mac_key_len
    }

    /// hash function of the HMAC authenticating CBC envelopes
    pub fn mac_algorithm(self) -> HashAlgorithm {
        self.params().mac_algorithm
    }

    /// length of the HMAC output embedded in CBC envelopes
    pub fn mac_len(self) -> usize {
        self.mac_algorithm().output_len()
    }
}

impl std::fmt::Display for KeySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AES-{}/HMAC-{}", self.cipher_key_bits(), self.mac_algorithm())
    }
}

#[cfg(test)]
mod test {
    use super::KeySize;
    use crate::crypto::hash::HashAlgorithm;

    use test_case::test_case;

    #[test_case(KeySize::Aes128, 16, 32, HashAlgorithm::Sha256, 32; "Aes128")]
    #[test_case(KeySize::Aes256, 32, 64, HashAlgorithm::Sha512, 64; "Aes256")]
    fn provides_parameter_table(
        key_size: KeySize,
        cipher_key_len: usize,
        mac_key_len: usize,
        mac_algorithm: HashAlgorithm,
        mac_len: usize,
    ) {
        assert_eq!(key_size.cipher_key_len(), cipher_key_len);
        assert_eq!(key_size.cipher_key_bits(), cipher_key_len * 8);
        assert_eq!(key_size.mac_key_len(), mac_key_len);
        assert_eq!(key_size.mac_algorithm(), mac_algorithm);
        assert_eq!(key_size.mac_len(), mac_len);
    }

    #[test]
    fn mac_fits_signed_length_prefix() {
        for key_size in [KeySize::Aes128, KeySize::Aes256] {
            assert!(key_size.mac_len() <= i8::MAX as usize);
        }
    }

    #[test]
    fn displays_algorithms() {
        assert_eq!(KeySize::Aes128.to_string(), "AES-128/HMAC-SHA-256");
        assert_eq!(KeySize::Aes256.to_string(), "AES-256/HMAC-SHA-512");
    }
}
