//! An implementation of the [HMAC] construction ([RFC 2104]), generic over
//! the underlying hash primitive.
//!
//! The hash is consumed through the narrow [`HashFamily`] contract (block
//! size, output size, one-shot digest), so the same engine serves any hash
//! family without duplicating the padding algorithm. Marker types for the
//! common MD and SHA families are provided; embedders may wire their own.
//!
//! Key material is owned exclusively by the [`Hmac`] engine and is wiped
//! with a non-elidable zeroing primitive when the engine is dropped.
//!
//! [HMAC]: https://en.wikipedia.org/wiki/HMAC
//! [RFC 2104]: https://datatracker.ietf.org/doc/html/rfc2104
#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    explicit_outlives_requirements,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc
)]
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    macro_use_extern_crate,
    non_ascii_idents,
    elided_lifetimes_in_paths
)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod error;
pub mod hash;
mod mac;

pub use error::InvalidConfiguration;
pub use hash::HashFamily;
pub use mac::{Hmac, Tag};
