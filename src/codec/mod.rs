//! Codecs: hex, base64, digests, unique ids and JSON

pub mod codecs;
pub mod digest;
pub mod json;
pub mod unique_ids;

pub use codecs::{base64_decode, base64_encode, base64_writer, bytes_to_hex, hex_to_bytes};
pub use digest::DigestAlgorithm;
