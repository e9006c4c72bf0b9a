//! Encode a short text and print the code table, bit string, and blob.
//!
//! Run with: cargo run --example encode_text

use huffpack_core::encode;

fn main() {
    let input = b"abracadabra";
    let encoded = encode(input).expect("text encodes within 8-bit codes");

    println!("input: {:?}", String::from_utf8_lossy(input));
    println!();
    println!("code table (symbol length code):");
    print!("{}", encoded.code_table());
    println!();
    println!("bit string: {}", encoded.bit_string());

    let blob = encoded.blob();
    print!("blob ({} bytes):", blob.len());
    for byte in &blob {
        print!(" {:02x}", byte);
    }
    println!();

    let stats = encoded.stats();
    println!(
        "{} symbols, {} unique, {} payload bits, ratio {:.2}",
        stats.input_symbols,
        stats.unique_symbols,
        stats.payload_bits,
        stats.ratio().unwrap_or(0.0)
    );
}
