//! Canonical Huffman decode engine for DEFLATE- and JPEG-style binary
//! formats: table construction from a code-length vector, a two-tier
//! fast/slow decode primitive, and a bit-granular stream reader. Container
//! formats (DEFLATE block framing, JPEG scan parsing, gzip/zlib wrapper
//! framing) are a caller concern and out of scope here; this crate owns
//! neither the compressed input buffer nor the meaning of a decoded
//! symbol beyond the optional extra-bits mechanism.

#[macro_use]
extern crate static_assertions;

pub mod bit_order;
pub mod bits;
pub mod decode;
pub mod entry;
pub mod error;
pub mod table;
pub mod window;

pub use decode::{decode_lsb, decode_lsb_ext, decode_lsb_ext_offset, decode_msb, DECODE_FAILED};
pub use entry::{ExtraEntry, FastEntry};
pub use error::HuffmanError;
pub use table::{
    build_lsb, build_lsb_ext, build_lsb_ext_offset, build_msb, try_build_lsb, try_build_lsb_ext,
    try_build_lsb_ext_offset, try_build_msb, DecodeTable, DecodeTableExt, ExtraSpec,
};
pub use window::{read_bits, read_bits_overread, BitWord};

/// Maximum codeword length this engine supports (DEFLATE allows up to 15;
/// JPEG up to 16). Both bit orders share this ceiling.
pub const MAX_CODE_LENGTH: usize = 16;

/// Width, in bits, of the direct-indexed fast lookup table.
pub const FAST_TABLE_BITS: usize = 8;

/// Number of entries in the fast lookup table (`1 << FAST_TABLE_BITS`).
pub const FAST_TABLE_SIZE: usize = 1 << FAST_TABLE_BITS;

/// Largest alphabet this engine accepts in one table (DEFLATE's
/// literal/length alphabet, the largest in either target format, has 288
/// symbols).
pub const MAX_CODES: usize = 288;

const_assert!(FAST_TABLE_SIZE == 256);
const_assert!(MAX_CODE_LENGTH <= 16);
