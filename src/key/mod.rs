//! Key material of the envelope codecs: key sizes, expanded key pairs and their derivation

/// Seed generation, expansion and password based derivation
pub mod derivation;
mod expanded_key;
mod key_size;

pub use derivation::{derive_from_password, expand, generate_seed, PASSWORD_KEY_MATERIAL_LEN};
pub use expanded_key::ExpandedKey;
pub use key_size::KeySize;
