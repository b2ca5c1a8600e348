//! The HMAC engine.
//!
//! [`Hmac`] binds one secret key to one [`HashFamily`] and computes
//! `hash(okey || hash(ikey || message))` per [RFC 2104], where `ikey` and
//! `okey` are the key normalized to one hash block and XOR-masked with
//! `0x36` and `0x5c`.
//!
//! [RFC 2104]: https://datatracker.ietf.org/doc/html/rfc2104

use alloc::boxed::Box;
use core::{fmt, marker::PhantomData};

use secrecy::{ExposeSecret, SecretBox};
use subtle::ConstantTimeEq as _;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{hash::HashFamily, InvalidConfiguration};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// The authentication tag produced by a [`sign`](Hmac::sign) operation.
///
/// An owned, fixed-size value of the hash family's output length.
/// Equality between tags is constant time; prefer
/// [`verify`](Hmac::verify) when checking a candidate byte slice.
pub struct Tag<H: HashFamily> {
    bytes: H::Output,
}

impl<H: HashFamily> Tag<H> {
    /// Consumes the tag, returning the raw digest value.
    pub fn into_bytes(self) -> H::Output {
        self.bytes
    }
}

impl<H: HashFamily> AsRef<[u8]> for Tag<H> {
    fn as_ref(&self) -> &[u8] {
        self.bytes.as_ref()
    }
}

impl<H: HashFamily> Clone for Tag<H> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
        }
    }
}

impl<H: HashFamily> PartialEq for Tag<H> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.as_ref().ct_eq(other.as_ref()))
    }
}

impl<H: HashFamily> Eq for Tag<H> {}

impl<H: HashFamily> fmt::Debug for Tag<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_ref(), f)
    }
}

impl<H: HashFamily> fmt::LowerHex for Tag<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_ref() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl<H: HashFamily> fmt::Display for Tag<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

/// The pad keys derived from the normalized key.
///
/// Key-equivalent material: wiped on drop, and the wipe goes through
/// `zeroize` so the optimizer cannot elide it.
#[derive(Zeroize, ZeroizeOnDrop)]
struct Pads {
    ikey: Box<[u8]>,
    okey: Box<[u8]>,
}

impl Pads {
    fn derive<H: HashFamily>(key: &[u8]) -> Self {
        // Keys longer than one block are hashed down first; the digest
        // fits because the engine rejected families with L > B.
        let mut normalized = Zeroizing::new(alloc::vec![0u8; H::BLOCK_SIZE]);
        if key.len() > H::BLOCK_SIZE {
            let mut hashed = H::digest(&[key]);
            normalized[..H::OUTPUT_SIZE].copy_from_slice(hashed.as_ref());
            hashed.as_mut().zeroize();
        } else {
            normalized[..key.len()].copy_from_slice(key);
        }

        let mut ikey = alloc::vec![0u8; H::BLOCK_SIZE].into_boxed_slice();
        let mut okey = alloc::vec![0u8; H::BLOCK_SIZE].into_boxed_slice();
        for (i, &byte) in normalized.iter().enumerate() {
            ikey[i] = byte ^ IPAD;
            okey[i] = byte ^ OPAD;
        }

        Self { ikey, okey }
    }
}

/// A keyed HMAC engine for the hash family `H`.
///
/// The engine exclusively owns its key material and the pad keys derived
/// from it. Both are overwritten with zero bytes when the engine is
/// dropped, on every exit path. Dropping consumes the value, so a
/// use-after-destroy is unrepresentable.
///
/// [`sign`](Self::sign) and [`verify`](Self::verify) take `&self` and
/// keep no mutable scratch state, so one engine may be shared across
/// threads.
pub struct Hmac<H: HashFamily> {
    key: SecretBox<[u8]>,
    pads: Pads,
    _family: PhantomData<H>,
}

impl<H: HashFamily> Hmac<H> {
    /// Creates an engine from the given key material.
    ///
    /// Keys of any length are valid, including empty ones: keys longer
    /// than the hash block size are hashed down, and shorter keys are
    /// right-padded with zero bytes. Key-strength policy is the caller's
    /// concern.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`] if `H` reports a zero block or
    /// output size, or an output size larger than its block size.
    pub fn new(key: &[u8]) -> Result<Self, InvalidConfiguration> {
        if H::BLOCK_SIZE == 0 || H::OUTPUT_SIZE == 0 || H::OUTPUT_SIZE > H::BLOCK_SIZE {
            return Err(InvalidConfiguration {
                block_size: H::BLOCK_SIZE,
                output_size: H::OUTPUT_SIZE,
            });
        }

        let key: SecretBox<[u8]> = SecretBox::new(Box::from(key));
        let pads = Pads::derive::<H>(key.expose_secret());

        Ok(Self {
            key,
            pads,
            _family: PhantomData,
        })
    }

    /// Replaces the engine's key, wiping the old key and pad keys.
    ///
    /// The pads are derived once per key; this is the only operation that
    /// recomputes them.
    pub fn rekey(&mut self, key: &[u8]) {
        let key: SecretBox<[u8]> = SecretBox::new(Box::from(key));
        self.pads = Pads::derive::<H>(key.expose_secret());
        self.key = key;
    }

    /// Computes the authentication tag for `message`.
    ///
    /// Deterministic: the same key and message always yield the same tag.
    /// Messages of any length are valid, including empty ones.
    pub fn sign(&self, message: &[u8]) -> Tag<H> {
        let mut inner = H::digest(&[&self.pads.ikey[..], message]);
        let bytes = H::digest(&[&self.pads.okey[..], inner.as_ref()]);
        inner.as_mut().zeroize();

        Tag { bytes }
    }

    /// Recomputes the tag for `message` and compares it against
    /// `candidate` in constant time.
    ///
    /// Returns `true` iff `candidate` equals the tag byte for byte. The
    /// comparison time does not depend on where the first mismatching
    /// byte occurs.
    pub fn verify(&self, message: &[u8], candidate: &[u8]) -> bool {
        let tag = self.sign(message);
        bool::from(tag.as_ref().ct_eq(candidate))
    }
}

impl<H: HashFamily> fmt::Debug for Hmac<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hmac")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
