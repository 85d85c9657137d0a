/*
 * Thin demo binary wrapping the decode engine end to end.
 *
 * Mirrors the teacher's `gzipd` in spirit: a small binary that exercises
 * the library against one hard-coded scenario rather than a general CLI.
 * This crate has no container-format or CLI surface of its own (see the
 * library's module docs), so there is nothing here to parametrize with a
 * real argument parser.
 */

use canonical_huffman_rs::{decode_lsb, try_build_lsb};

fn fixed_deflate_lengths() -> Vec<u8> {
    let mut lengths = vec![0u8; 288];
    lengths[0..144].fill(8);
    lengths[144..256].fill(9);
    lengths[256..280].fill(7);
    lengths[280..288].fill(8);
    lengths
}

fn main() {
    env_logger::init();

    let lengths = fixed_deflate_lengths();
    let table = match try_build_lsb(&lengths, None) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("failed to build fixed DEFLATE literal/length table: {err}");
            std::process::exit(1);
        }
    };

    let window = canonical_huffman_rs::bits::reverse_full(0b0011_0000) as canonical_huffman_rs::BitWord;
    let (sym, used) = decode_lsb(&table, window);
    println!("decoded symbol {sym} using {used} bits from the fixed literal/length table");
}
