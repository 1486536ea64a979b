// src/infrastructure/transport/framing.rs
//! Native-messaging frame codec.
//!
//! Frames are a 4-byte little-endian length prefix followed by that many
//! bytes of UTF-8 JSON. Browsers cap messages from the host at 1 MiB, so
//! inbound frames above that are rejected before allocation.
use std::io::{Read, Write};

use serde::Serialize;

use crate::domain::error::{DomainError, DomainResult};

/// Browser-side limit for a single message received from the host.
pub const MAX_INBOUND_FRAME_BYTES: usize = 1024 * 1024;

/// Encode a value into a length-prefixed frame.
pub fn encode_message<T: Serialize>(message: &T) -> DomainResult<Vec<u8>> {
    let body = serde_json::to_vec(message)?;
    let mut frame = Vec::with_capacity(4 + body.len());
    frame.extend_from_slice(&(body.len() as u32).to_le_bytes());
    frame.extend_from_slice(&body);
    Ok(frame)
}

/// Write one frame to `writer` and flush it.
pub fn write_message<W: Write, T: Serialize>(writer: &mut W, message: &T) -> DomainResult<()> {
    let frame = encode_message(message)?;
    writer.write_all(&frame)?;
    writer.flush()?;
    Ok(())
}

/// Read one frame from `reader`.
///
/// Returns `Ok(None)` on a clean EOF before the length prefix; a truncated
/// frame after the prefix is an error.
pub fn read_message<R: Read>(reader: &mut R) -> DomainResult<Option<serde_json::Value>> {
    let mut prefix = [0u8; 4];
    match reader.read_exact(&mut prefix) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }

    let length = u32::from_le_bytes(prefix) as usize;
    if length > MAX_INBOUND_FRAME_BYTES {
        return Err(DomainError::ProtocolViolation(format!(
            "Frame of {} bytes exceeds the {} byte limit",
            length, MAX_INBOUND_FRAME_BYTES
        )));
    }

    let mut body = vec![0u8; length];
    reader
        .read_exact(&mut body)
        .map_err(|e| DomainError::ProtocolViolation(format!("Truncated frame: {}", e)))?;

    let value = serde_json::from_slice(&body)
        .map_err(|e| DomainError::ProtocolViolation(format!("Frame is not valid JSON: {}", e)))?;

    Ok(Some(value))
}
