/// The error returned when an engine is wired to a malformed hash-family
/// descriptor.
///
/// The HMAC padding algorithm requires a positive block size `B`, a
/// positive output size `L`, and `L <= B` (a digest must fit into one
/// block so that an over-long key can be hashed down and re-padded).
/// Hash families that violate this are rejected at construction time and
/// never silently defaulted.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
#[error(
    "invalid hash family configuration: block size {block_size}, output size {output_size}"
)]
pub struct InvalidConfiguration {
    /// The block size `B` the hash family reported.
    pub block_size: usize,
    /// The output size `L` the hash family reported.
    pub output_size: usize,
}
