//! Length-prefixed result buffers read out of a compute module's linear memory.
//!
//! Layout, starting at byte offset 0 of the memory:
//!
//! ```text
//! +----------------------+------------------------------+
//! | length: u32 (LE)     | length bytes of RGBA data    |
//! +----------------------+------------------------------+
//! ```
//!
//! The memory is overwritten by every compute call, so callers copy the
//! payload out with [`copy_result_bytes`] and never hold on to the view.

use thiserror::Error;

/// Size of the little-endian length prefix.
pub const LENGTH_PREFIX_BYTES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("module memory is {memory_len} bytes, too short for the length prefix")]
    MissingLengthPrefix { memory_len: usize },
    #[error("declared result length {declared} exceeds pixel buffer capacity {capacity}")]
    ExceedsCapacity { declared: usize, capacity: usize },
    #[error("declared result length {declared} runs past the end of module memory ({memory_len} bytes)")]
    ExceedsMemory { declared: usize, memory_len: usize },
    #[error("payload of {len} bytes cannot be described by a 32-bit length prefix")]
    PayloadTooLarge { len: usize },
}

/// Reads the declared payload length from the first four bytes of `memory`.
pub fn read_length_prefix(memory: &[u8]) -> Result<usize, EnvelopeError> {
    let prefix: [u8; LENGTH_PREFIX_BYTES] = memory
        .get(..LENGTH_PREFIX_BYTES)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(EnvelopeError::MissingLengthPrefix {
            memory_len: memory.len(),
        })?;

    Ok(u32::from_le_bytes(prefix) as usize)
}

/// Copies the payload described by the length prefix into an owned buffer.
///
/// Only `memory[4..4 + length]` is read. A length larger than `capacity` is
/// rejected before any payload byte is touched.
pub fn copy_result_bytes(memory: &[u8], capacity: usize) -> Result<Vec<u8>, EnvelopeError> {
    let declared = read_length_prefix(memory)?;

    if declared > capacity {
        return Err(EnvelopeError::ExceedsCapacity { declared, capacity });
    }

    let end = LENGTH_PREFIX_BYTES
        .checked_add(declared)
        .filter(|end| *end <= memory.len())
        .ok_or(EnvelopeError::ExceedsMemory {
            declared,
            memory_len: memory.len(),
        })?;

    Ok(memory[LENGTH_PREFIX_BYTES..end].to_vec())
}

/// Resets `memory` to a zeroed envelope of `payload_len` bytes and returns the
/// payload region for the caller to fill.
///
/// `memory` is left untouched when the length does not fit the prefix.
pub fn write_envelope(memory: &mut Vec<u8>, payload_len: usize) -> Result<&mut [u8], EnvelopeError> {
    let too_large = EnvelopeError::PayloadTooLarge { len: payload_len };
    let prefix = u32::try_from(payload_len).map_err(|_| too_large.clone())?.to_le_bytes();
    let total_len = LENGTH_PREFIX_BYTES.checked_add(payload_len).ok_or(too_large)?;

    memory.clear();
    memory.resize(total_len, 0);
    memory[..LENGTH_PREFIX_BYTES].copy_from_slice(&prefix);

    Ok(&mut memory[LENGTH_PREFIX_BYTES..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(length: u32, payload: &[u8]) -> Vec<u8> {
        let mut memory = length.to_le_bytes().to_vec();
        memory.extend_from_slice(payload);
        memory
    }

    #[test]
    fn test_read_length_prefix_is_little_endian() {
        let memory = [0x10, 0x02, 0x00, 0x01, 0xFF];

        assert_eq!(read_length_prefix(&memory), Ok(0x0100_0210));
    }

    #[test]
    fn test_read_length_prefix_short_memory() {
        assert_eq!(
            read_length_prefix(&[1, 2, 3]),
            Err(EnvelopeError::MissingLengthPrefix { memory_len: 3 })
        );
    }

    #[test]
    fn test_copy_result_bytes_copies_exactly_declared_length() {
        let memory = envelope(4, &[1, 2, 3, 4, 99, 99, 99]);

        let bytes = copy_result_bytes(&memory, 16).unwrap();

        assert_eq!(bytes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_copy_result_bytes_zero_length() {
        let memory = envelope(0, &[42, 42]);

        assert_eq!(copy_result_bytes(&memory, 16), Ok(vec![]));
    }

    #[test]
    fn test_copy_result_bytes_length_equal_to_capacity() {
        let memory = envelope(8, &[3; 8]);

        assert_eq!(copy_result_bytes(&memory, 8), Ok(vec![3; 8]));
    }

    #[test]
    fn test_copy_result_bytes_rejects_length_over_capacity() {
        let memory = envelope(9, &[3; 9]);

        assert_eq!(
            copy_result_bytes(&memory, 8),
            Err(EnvelopeError::ExceedsCapacity {
                declared: 9,
                capacity: 8
            })
        );
    }

    #[test]
    fn test_copy_result_bytes_rejects_length_past_memory_end() {
        let memory = envelope(6, &[1, 2, 3]);

        assert_eq!(
            copy_result_bytes(&memory, 64),
            Err(EnvelopeError::ExceedsMemory {
                declared: 6,
                memory_len: 7
            })
        );
    }

    #[test]
    fn test_copy_result_bytes_huge_length_is_rejected() {
        let memory = envelope(u32::MAX, &[0; 8]);

        assert!(matches!(
            copy_result_bytes(&memory, 1024),
            Err(EnvelopeError::ExceedsCapacity { .. })
        ));
    }

    #[test]
    fn test_write_envelope_sets_prefix_and_payload_size() {
        let mut memory = vec![0xAA; 32];

        let payload = write_envelope(&mut memory, 3).unwrap();
        payload.copy_from_slice(&[7, 8, 9]);

        assert_eq!(memory, vec![3, 0, 0, 0, 7, 8, 9]);
        assert_eq!(copy_result_bytes(&memory, 3), Ok(vec![7, 8, 9]));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_write_envelope_rejects_length_beyond_u32_and_keeps_memory() {
        let mut memory = vec![1, 0, 0, 0, 42];
        let too_long = u32::MAX as usize + 1;

        let result = write_envelope(&mut memory, too_long).map(|payload| payload.len());

        assert_eq!(result, Err(EnvelopeError::PayloadTooLarge { len: too_long }));
        assert_eq!(memory, vec![1, 0, 0, 0, 42]);
    }
}
