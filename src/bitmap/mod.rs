use log::debug;
use thiserror::Error;

pub mod window;
pub use window::{parse_window, reorder, Mark, Window, WINDOW_BITS, WINDOW_CHARS};

#[derive(Error, Debug, PartialEq)]
pub enum DecodeError{
    /// Fewer than 16 bytes left at the end of the stream
    #[error("truncated bitmap window at offset {offset}: {remaining} bytes left, 16 needed")]
    TruncatedWindow{offset : usize, remaining : usize},
    #[error("invalid hex digit {found:?} at offset {offset}")]
    InvalidDigit{offset : usize, found : char},
    /// The window at `offset` would number bits past i64::MAX
    #[error("sequence number overflow in window at offset {offset}, starting at {start}")]
    SequenceOverflow{offset : usize, start : i128},
}

/**
 * Join the bitmap arguments into one stream, dropping the `[` and `]` of
 * bracketed dumps
 */
pub fn clean<S : AsRef<str>>(chunks : &[S]) -> String{
    chunks.iter()
        .flat_map(|chunk| chunk.as_ref().chars())
        .filter(|c| *c != '[' && *c != ']')
        .collect()
}

/// Iterator over the windows of a cleaned stream. It stops after the first
/// error.
pub struct Decoder<'a>{
    stream : &'a str,
    // offset of the next window in `stream`
    cursor : usize,
    // sequence number of the next bit, None once it went past i64::MAX
    seq : Option<i64>,
    failed : bool
}

impl<'a> Decoder<'a>{
    pub fn new(stream : &'a str, first_seq : i64) -> Decoder<'a>{
        Decoder{stream, cursor : 0, seq : Some(first_seq), failed : false}
    }

    fn fail(&mut self, err : DecodeError) -> Option<Result<Window, DecodeError>>{
        self.failed = true;
        Some(Err(err))
    }
}

impl<'a> Iterator for Decoder<'a>{
    type Item = Result<Window, DecodeError>;

    fn next(&mut self) -> Option<Self::Item>{
        if self.failed || self.cursor >= self.stream.len(){
            return None;
        }
        let offset = self.cursor;
        let remaining = self.stream.len() - offset;
        if remaining < WINDOW_CHARS{
            return self.fail(DecodeError::TruncatedWindow{offset, remaining});
        }

        let chars : [u8; WINDOW_CHARS] = match self.stream.as_bytes()[offset..offset + WINDOW_CHARS].try_into(){
            Ok(chars) => chars,
            Err(_) => return self.fail(DecodeError::TruncatedWindow{offset, remaining}),
        };
        let bits = match parse_window(&chars){
            Ok(bits) => bits,
            Err(DecodeError::InvalidDigit{offset : at, ..}) => {
                // report the whole character, the stream may hold multi-byte text
                let found = self.stream[offset + at..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return self.fail(DecodeError::InvalidDigit{offset : offset + at, found});
            }
            Err(e) => return self.fail(e),
        };

        let first_seq = match self.seq{
            Some(seq) if seq.checked_add(WINDOW_BITS - 1).is_some() => seq,
            Some(seq) => return self.fail(DecodeError::SequenceOverflow{offset, start : seq as i128}),
            None => {
                let start = i64::MAX as i128 + 1;
                return self.fail(DecodeError::SequenceOverflow{offset, start});
            }
        };
        self.seq = first_seq.checked_add(WINDOW_BITS);
        self.cursor += WINDOW_CHARS;

        debug!("bits={:064b} seq={}", bits, first_seq);
        Some(Ok(Window::new(first_seq, bits)))
    }
}

/**
 * Decode the whole stream up front so a bad window never leaves a partial
 * report behind
 */
pub fn decode(stream : &str, first_seq : i64) -> Result<Vec<Window>, DecodeError>{
    Decoder::new(stream, first_seq).collect()
}
