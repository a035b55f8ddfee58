use sensirion_i2c::crc8;

/// Check byte received alongside a data word did not match the computed CRC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcMismatch {
    pub expected: u8,
    pub actual: u8,
}

/// Largest command frame written by any driver in this crate: 2 command bytes,
/// one payload word and its check byte.
pub(crate) const MAX_COMMAND_FRAME: usize = 5;

/// Strips the check bytes from `frames` (`d0 d1 crc` triples) into `out`.
///
/// `frames` must hold exactly `out.len().div_ceil(2)` frames. All frames are
/// verified before `out` is touched.
pub(crate) fn unpack_words(frames: &[u8], out: &mut [u8]) -> Result<(), CrcMismatch> {
    debug_assert_eq!(frames.len(), out.len().div_ceil(2) * 3);

    for frame in frames.chunks_exact(3) {
        let expected = crc8::calculate(&frame[..2]);
        if expected != frame[2] {
            return Err(CrcMismatch {
                expected,
                actual: frame[2],
            });
        }
    }

    for (word, frame) in out.chunks_mut(2).zip(frames.chunks_exact(3)) {
        word.copy_from_slice(&frame[..word.len()]);
    }
    Ok(())
}

/// Builds a command frame: the 2 command bytes, then `payload`, then a check
/// byte over `payload` when there is one. Bare commands carry no CRC.
pub(crate) fn frame_command<'a>(
    command: u16,
    payload: &[u8],
    out: &'a mut [u8; MAX_COMMAND_FRAME],
) -> &'a [u8] {
    debug_assert!(payload.len() + 3 <= MAX_COMMAND_FRAME);

    out[..2].copy_from_slice(&command.to_be_bytes());
    let mut len = 2;
    if !payload.is_empty() {
        out[2..2 + payload.len()].copy_from_slice(payload);
        len += payload.len();
        out[len] = crc8::calculate(payload);
        len += 1;
    }
    &out[..len]
}
