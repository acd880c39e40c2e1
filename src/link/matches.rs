/// Advance `state` past every leading `usize` block that contains none of the given bytes.
///
/// # Usage
///
/// ```not_rust
/// let mut state: &[u8];
///
/// matches::skip_blocks!(state, b'"', b'<');
///
/// // `state` now starts at a block that may contain `"` or `<`, or is shorter than a block
/// ```
///
/// The test is conservative: a block is only skipped when it is known to contain none of the
/// bytes, the caller still have to inspect the remaining bytes one by one.
macro_rules! skip_blocks {
    ($state:ident, $($byte:expr),+ $(,)?) => {
        'swar: {
            const BLOCK: usize = size_of::<usize>();
            const MSB: usize = usize::from_ne_bytes([0b1000_0000; BLOCK]);
            const LSB: usize = usize::from_ne_bytes([0b0000_0001; BLOCK]);

            while let Some((chunk, rest)) = $state.split_first_chunk::<BLOCK>() {
                let block = usize::from_ne_bytes(*chunk);
                let mut result = 0;

                $(
                    let xor = block ^ usize::from_ne_bytes([$byte; BLOCK]);
                    result |= xor.wrapping_sub(LSB) & !xor;
                )+

                if result & MSB != 0 {
                    break 'swar;
                }

                $state = rest;
            }
        }
    };
}

pub(crate) use {skip_blocks};
