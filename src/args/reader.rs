//! Chunked reader — feeds the lexer from a fixed-size buffer.

use std::io::{self, ErrorKind, Read};

use crate::args::lexer::{Chunk, Lexed, LexerContext};

/// Reads a byte stream in fixed-size chunks and lexes it into tokens.
///
/// The chunk size never changes the tokens produced.
#[derive(Debug, Clone, Copy)]
pub struct ChunkedReader {
    chunk_size: usize,
    quotes_end_at_eol: bool,
}

impl ChunkedReader {
    /// A reader using `chunk_size` byte reads (clamped to at least 1).
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            quotes_end_at_eol: false,
        }
    }

    pub fn with_quotes_end_at_eol(mut self, enabled: bool) -> Self {
        self.quotes_end_at_eol = enabled;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Lex the whole stream.
    ///
    /// `observe` sees every token as soon as it is produced, before the
    /// next byte is read. On a read error nothing is returned.
    pub fn read_all<R, F>(&self, mut input: R, mut observe: F) -> io::Result<Vec<String>>
    where
        R: Read,
        F: FnMut(&str),
    {
        let mut ctx = LexerContext::new().with_quotes_end_at_eol(self.quotes_end_at_eol);
        let mut buffer = vec![0u8; self.chunk_size];
        let mut tokens = Vec::new();

        loop {
            let size = match input.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            let mut chunk = Chunk::new(&buffer[..size]);
            while let Lexed::Token(token) = ctx.advance(&mut chunk) {
                observe(&token);
                tokens.push(token);
            }
        }

        if let Some(token) = ctx.finish() {
            observe(&token);
            tokens.push(token);
        }

        Ok(tokens)
    }
}

impl Default for ChunkedReader {
    fn default() -> Self {
        Self::new(4096)
    }
}
