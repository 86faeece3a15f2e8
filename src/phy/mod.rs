// Physical layer: bit symbols and baseband line coding

pub mod bits;
pub mod line_coding;

pub use bits::{Bit, parse_bits, random_bits};
pub use line_coding::{Level, LineCode, LineCodingKind};
