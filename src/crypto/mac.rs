use subtle::ConstantTimeEq;

use super::hash::HashAlgorithm;
use crate::error::Result;

/// HMAC over SHA-256 or SHA-512
pub trait MessageAuthentication {
    /// Computes the HMAC of the concatenation of all `parts`.
    fn hmac(&self, hash: HashAlgorithm, key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>>;
}

/// Timing safe comparison of a computed and a received tag.
/// The running time only depends on the lengths, never on the position of a differing byte.
pub(crate) fn tags_match(computed: &[u8], received: &[u8]) -> bool {
    computed.ct_eq(received).into()
}

#[cfg(test)]
mod test {
    use super::{tags_match, MessageAuthentication};
    use crate::{
        crypto::{hash::HashAlgorithm, CryptoProvider},
        test_vectors::get_test_providers,
    };

    use test_case::test_case;

    // RFC 4231 test case 2
    const RFC_KEY: &[u8] = b"Jefe";
    const RFC_DATA: &[u8] = b"what do ya want for nothing?";

    #[test_case(HashAlgorithm::Sha256, "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"; "Sha256")]
    #[test_case(HashAlgorithm::Sha512, "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"; "Sha512")]
    fn matches_rfc4231_vector(hash: HashAlgorithm, expected: &str) {
        let (head, tail) = RFC_DATA.split_at(9);
        for provider in get_test_providers() {
            let tag = provider.hmac(hash, RFC_KEY, &[head, b"".as_slice(), tail]).unwrap();

            assert_eq!(hex::encode(tag), expected, "{}", provider.name());
        }
    }

    #[test]
    fn matches_equal_tags() {
        assert!(tags_match(&[1, 2, 3, 4], &[1, 2, 3, 4]));
        assert!(tags_match(&[], &[]));
    }

    #[test]
    fn rejects_differing_tags() {
        assert!(!tags_match(&[1, 2, 3, 4], &[1, 2, 3, 5]));
        assert!(!tags_match(&[0, 2, 3, 4], &[1, 2, 3, 4]));
    }

    #[test]
    fn rejects_tags_of_other_length() {
        assert!(!tags_match(&[1, 2, 3, 4], &[1, 2, 3]));
        assert!(!tags_match(&[1, 2, 3], &[1, 2, 3, 4]));
    }
}
