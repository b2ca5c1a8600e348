//! The hash-primitive contract consumed by the HMAC engine, and marker
//! types for the supported hash families.
//!
//! The engine makes no assumption about a hash beyond what this trait
//! exposes: its block size, its digest size, and a deterministic one-shot
//! digest function. The provided families delegate to the [RustCrypto]
//! hash crates; embedders with an exotic hash can implement the trait
//! themselves.
//!
//! [RustCrypto]: https://github.com/RustCrypto/hashes

use digest::Digest as _;

/// A hash family usable as the primitive underneath the HMAC construction.
///
/// Implementations must be pure: [`digest`](Self::digest) is a
/// deterministic function of the concatenation of its input parts, with no
/// shared mutable state, so that concurrent [`sign`](crate::Hmac::sign)
/// calls against one engine remain sound.
pub trait HashFamily {
    /// The internal block size `B` of the hash, in bytes.
    const BLOCK_SIZE: usize;

    /// The digest size `L` of the hash, in bytes.
    ///
    /// Must not exceed [`BLOCK_SIZE`](Self::BLOCK_SIZE); the engine
    /// rejects families where it does.
    const OUTPUT_SIZE: usize;

    /// The fixed-size digest value, `[u8; OUTPUT_SIZE]` in the provided
    /// families.
    type Output: AsRef<[u8]> + AsMut<[u8]> + Clone;

    /// Digests the concatenation of `parts` in order.
    ///
    /// Taking the input in parts lets the engine hash `pad || message`
    /// without materializing the concatenation.
    fn digest(parts: &[&[u8]]) -> Self::Output;
}

macro_rules! impl_family {
    ($(#[$doc:meta])* $family:ident, $hasher:ty, $block:expr, $output:expr) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub enum $family {}

        impl HashFamily for $family {
            const BLOCK_SIZE: usize = $block;
            const OUTPUT_SIZE: usize = $output;

            type Output = [u8; $output];

            fn digest(parts: &[&[u8]]) -> Self::Output {
                let mut hasher = <$hasher>::new();
                for part in parts {
                    hasher.update(part);
                }

                let mut output = [0u8; $output];
                output.copy_from_slice(&hasher.finalize());
                output
            }
        }
    };
}

impl_family!(
    /// Marker type for the MD5 hash family (the family the reference
    /// HMAC-MD5 deployments use).
    Md5, md5::Md5, 64, 16
);
impl_family!(
    /// Marker type for the SHA-1 hash family.
    Sha1, sha1::Sha1, 64, 20
);
impl_family!(
    /// Marker type for the SHA-256 hash family.
    Sha256, sha2::Sha256, 64, 32
);
impl_family!(
    /// Marker type for the SHA-384 hash family.
    Sha384, sha2::Sha384, 128, 48
);
impl_family!(
    /// Marker type for the SHA-512 hash family.
    Sha512, sha2::Sha512, 128, 64
);
