use std::fmt;

use super::DecodeError;

/// Hex characters in one window
pub const WINDOW_CHARS : usize = 16;
/// Sequence numbers covered by one window
pub const WINDOW_BITS : i64 = 64;

/// Status of a single sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark{
    Hit,
    Miss
}

impl fmt::Display for Mark{
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result{
        match self{
            Mark::Hit => write!(f, "."),
            Mark::Miss => write!(f, "miss"),
        }
    }
}

/// 64 consecutive sequence numbers, bit 0 is `first_seq`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window{
    first_seq : i64,
    bits : u64
}

impl Window{
    pub fn new(first_seq : i64, bits : u64) -> Window{
        Window{first_seq, bits}
    }

    pub fn get_first_seq(&self) -> i64{
        self.first_seq
    }

    pub fn get_hits(&self) -> u32{
        self.bits.count_ones()
    }

    /**
     * Walk the bits from least to most significant, one sequence number each
     */
    pub fn marks(&self) -> impl Iterator<Item = (i64, Mark)> + '_{
        (0..WINDOW_BITS).map(move |i| {
            let mark = if (self.bits >> i) & 1 == 1 { Mark::Hit } else { Mark::Miss };
            (self.first_seq + i, mark)
        })
    }
}

/**
 * Undo the wire order of a window.
 *
 * The steps run one after the other on the same buffer, so a later step can
 * read a position an earlier step already overwrote (step 7 reads index 7,
 * written by step 6). Indices 8..15 are never written.
 *
 * FIXME: this looks like an unfinished byte swap, the low half of every
 * window never reaches the integer. Do not turn it into a full reversal
 * without checking against a real capture.
 */
pub fn reorder(window : &[u8; WINDOW_CHARS]) -> [u8; WINDOW_CHARS]{
    let mut out = *window;
    for i in 0..8{
        out[i] = out[14 - i];
        out[i + 1] = out[15 - i];
    }
    out
}

/**
 * Check every character of the window, reorder it and read it as a base-16
 * integer. Offsets in the error are relative to the window.
 */
pub fn parse_window(window : &[u8; WINDOW_CHARS]) -> Result<u64, DecodeError>{
    for (offset, c) in window.iter().enumerate(){
        if !c.is_ascii_hexdigit(){
            return Err(DecodeError::InvalidDigit{offset, found : *c as char});
        }
    }
    let bits = reorder(window).iter().fold(0u64, |acc, c| {
        // validated above, every char is a hex digit
        let nibble = (*c as char).to_digit(16).unwrap_or(0) as u64;
        (acc << 4) | nibble
    });
    Ok(bits)
}
