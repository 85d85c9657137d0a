/*
 * Bit-granular stream reader.
 *
 * Grounded in the teacher's `BitStream::fill_bits_wordwise`: load a whole
 * machine word from the input buffer, shift out bits already consumed from
 * the previous load, and report exactly how many fresh bits came in. Unlike
 * the teacher, this reader is a free function over a plain byte slice with
 * an explicit cursor/bit-offset pair rather than a struct tied to a
 * `DeflateInput` trait object -- the container format and its I/O source
 * are out of this crate's scope (see spec SCOPE), so the reader only needs
 * to know about bytes in memory.
 */

/// The machine word used to hold buffered bits. 64 bits by default; `cargo
/// build --features bitwindow128` switches to a 128-bit window, trading a
/// larger register footprint for needing to refill less often on alphabets
/// with long codewords.
#[cfg(not(feature = "bitwindow128"))]
pub type BitWord = u64;
#[cfg(feature = "bitwindow128")]
pub type BitWord = u128;

/// Number of bytes in [`BitWord`].
pub const BITWORD_BYTES: usize = std::mem::size_of::<BitWord>();
/// Number of bits in [`BitWord`].
pub const BITWORD_BITS: usize = BITWORD_BYTES * 8;

/// Reads the next chunk of LSB-first bits out of `data`, starting at
/// `*cursor` with `*boff` unconsumed bits already pending in the byte under
/// the cursor (`*boff` must be in `0..8`).
///
/// Returns `(value, nbits)` where the low `nbits` bits of `value` are valid,
/// right-aligned so the next unread bit sits at position 0. Advances
/// `*cursor` by `nbits / 8` whole bytes and leaves the residual bit offset
/// (always `< 8`) in `*boff`. If `*cursor >= data.len()`, returns `(0, 0)`
/// and leaves the cursor untouched.
///
/// This is the always-safe scalar-construction path: it never reads past
/// `data.len()`. See [`read_bits_overread`] for the faster path used once
/// the caller knows the buffer is padded.
#[inline]
pub fn read_bits(data: &[u8], cursor: &mut usize, boff: &mut u8) -> (BitWord, usize) {
    let end = data.len();
    if *cursor >= end {
        return (0, 0);
    }
    let available = end - *cursor;
    let bytes_loaded = available.min(BITWORD_BYTES);

    let mut buf = [0u8; BITWORD_BYTES];
    buf[..bytes_loaded].copy_from_slice(&data[*cursor..*cursor + bytes_loaded]);
    let word = BitWord::from_le_bytes(buf);

    let boff_usize = *boff as usize;
    let shifted = word >> boff_usize;
    let nbits = bytes_loaded * 8 - boff_usize;

    *cursor += nbits / 8;
    *boff = (nbits % 8) as u8;

    (shifted, nbits)
}

/// Like [`read_bits`], but when at least `BITWORD_BYTES` bytes remain
/// before `data.len()`, performs a single unaligned word load instead of a
/// byte-by-byte copy.
///
/// # Safety
///
/// The caller must ensure `data` is padded with at least `BITWORD_BYTES - 1`
/// extra, readable (even if meaningless) bytes beyond the logical end of
/// the compressed data whenever `data.len() - *cursor >= BITWORD_BYTES`,
/// i.e. the allocation backing `data` must be at least
/// `data.len() + BITWORD_BYTES - 1` bytes. This mirrors the overread
/// contract of the teacher's `DeflateInput::ensure_overread_length`.
#[inline]
pub unsafe fn read_bits_overread(
    data: &[u8],
    cursor: &mut usize,
    boff: &mut u8,
) -> (BitWord, usize) {
    let end = data.len();
    if *cursor >= end {
        return (0, 0);
    }
    let available = end - *cursor;
    if available < BITWORD_BYTES {
        // Near the tail: fall back to the scalar path rather than trust the
        // overread padding for a partial word.
        return read_bits(data, cursor, boff);
    }

    let word = (data.as_ptr().add(*cursor) as *const BitWord).read_unaligned();
    let boff_usize = *boff as usize;
    let shifted = word >> boff_usize;
    let nbits = BITWORD_BITS - boff_usize;

    *cursor += nbits / 8;
    *boff = (nbits % 8) as u8;

    (shifted, nbits)
}
