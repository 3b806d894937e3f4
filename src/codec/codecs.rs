//! Hex and base64 conversions

use std::io::Write;

use base64::{
    engine::general_purpose::{GeneralPurpose, STANDARD},
    write::EncoderWriter,
    Engine as _,
};

use crate::error::{CodecError, Result};

/// Lowercase hex string of `bytes`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes hex pairs from `source`.
///
/// A trailing unpaired digit is ignored, so `"12345"` decodes to `[0x12, 0x34]`.
pub fn hex_to_bytes(source: &str) -> Result<Vec<u8>> {
    if !source.is_ascii() {
        return Err(CodecError::InvalidHex(source.to_string()).into());
    }
    let even = source.len() - source.len() % 2;
    let bytes = hex::decode(&source[..even]).map_err(CodecError::from)?;
    Ok(bytes)
}

pub fn base64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn base64_decode(text: &str) -> Result<Vec<u8>> {
    let bytes = STANDARD.decode(text).map_err(CodecError::from)?;
    Ok(bytes)
}

/// Streams base64 text into `writer`. Call `finish` (or drop the encoder) to
/// write the final padded block.
pub fn base64_writer<W: Write>(writer: W) -> EncoderWriter<'static, GeneralPurpose, W> {
    EncoderWriter::new(writer, &STANDARD)
}
