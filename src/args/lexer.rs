//! Argfile lexer — bytes → decoded tokens.
//!
//! A character state machine that understands quoting, escapes inside
//! quotes, `#` comments and line continuation. It works on one chunk at a
//! time: when a chunk runs out mid-token the consumed bytes are flushed into
//! the context's pending parts and [`Lexed::NeedMoreInput`] is returned, so
//! the caller can refill and call again with the same context.
//!
//! ```text
//!        [\n\r]   +------------+                        +------------+ [\n\r]
//!       +---------+ IN_COMMENT +<------+                | IN_ESCAPE  +---------+
//!       |         +------------+       |                +------------+         |
//!       |    [#]       ^               |[#]                 ^     |            |
//!       |   +----------+               |                [\\]|     |[^\n\r]     |
//!       v   |                          |                    |     v            |
//! +------------+ [^ \t\n\r\f]  +------------+['"]>      +------------+         |
//! | FIND_NEXT  +-------------->+ IN_TOKEN   +-----------+ IN_QUOTE   +         |
//! +------------+               +------------+   <[quote]+------------+         |
//!       ^                          |                          ^                |
//!       |               [ \t\n\r\f]|                          | [^ \t\n\r\f]   v
//!       +--------------------------+                          +--------------+
//!                                                             | SKIP_LEAD_WS |
//!                                                             +--------------+
//! ```

/// Lexer state. Exactly one is active; only [`LexerContext`] changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    /// Between tokens, skipping whitespace.
    FindNext,
    /// After `#`, discarding up to the end of the line.
    InComment,
    /// Inside `'...'` or `"..."`.
    InQuote,
    /// After a backslash inside a quote.
    InEscape,
    /// After a line continuation; resumes as `InQuote`.
    SkipLeadingWhitespace,
    /// Inside an unquoted token.
    InToken,
}

/// Result of one [`LexerContext::advance`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexed {
    /// A complete, fully decoded token.
    Token(String),
    /// The chunk is exhausted; refill and call again with the same context.
    NeedMoreInput,
}

/// One buffer of input plus the read cursor into it.
///
/// The cursor never crosses chunks: a fresh `Chunk` starts at 0.
#[derive(Debug)]
pub struct Chunk<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> Chunk<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, cursor: 0 }
    }

    /// True once every byte of the chunk has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.bytes.len()
    }
}

/// Cross-chunk lexer state, exclusively owned by whoever drives the lexer.
#[derive(Debug, Clone)]
pub struct LexerContext {
    state: LexState,
    quote: u8,
    /// Fragments of the token being assembled, split at quote/escape
    /// boundaries or chunk ends.
    parts: Vec<Vec<u8>>,
    /// A quote was opened in the current token, so it exists even if empty.
    quoted: bool,
    quotes_end_at_eol: bool,
}

impl Default for LexerContext {
    fn default() -> Self {
        Self::new()
    }
}

fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\x0c' | b'\n' | b'\r')
}

fn is_line_break(ch: u8) -> bool {
    ch == b'\n' || ch == b'\r'
}

/// One-character escape table. Anything not listed decodes to itself;
/// there is no octal or numeric form.
fn decode_escape(ch: u8) -> u8 {
    match ch {
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b'f' => b'\x0c',
        other => other,
    }
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl LexerContext {
    /// A context positioned before the first token.
    pub fn new() -> Self {
        Self {
            state: LexState::FindNext,
            quote: 0,
            parts: Vec::new(),
            quoted: false,
            quotes_end_at_eol: false,
        }
    }

    /// Make an unescaped line break inside an open quote end the token,
    /// instead of being literal content.
    pub fn with_quotes_end_at_eol(mut self, enabled: bool) -> Self {
        self.quotes_end_at_eol = enabled;
        self
    }

    pub fn state(&self) -> LexState {
        self.state
    }

    /// Pending fragments of the token under construction.
    pub fn parts(&self) -> &[Vec<u8>] {
        &self.parts
    }

    /// Consume input from `chunk` until a token completes or the chunk runs out.
    pub fn advance(&mut self, chunk: &mut Chunk<'_>) -> Lexed {
        let bytes = chunk.bytes;
        let mut anchor = chunk.cursor;

        while chunk.cursor < bytes.len() {
            let ch = bytes[chunk.cursor];

            match self.state {
                LexState::FindNext | LexState::SkipLeadingWhitespace => {
                    if is_whitespace(ch) {
                        chunk.cursor += 1;
                        continue;
                    }
                    self.state = if self.state == LexState::FindNext {
                        LexState::InToken
                    } else {
                        LexState::InQuote
                    };
                    anchor = chunk.cursor;
                    // Re-dispatch the same byte in the new state.
                    continue;
                }
                LexState::InEscape => {
                    if is_line_break(ch) {
                        // Line continuation: drop the escape and the break.
                        self.state = LexState::SkipLeadingWhitespace;
                    } else {
                        self.parts.push(vec![decode_escape(ch)]);
                        self.state = LexState::InQuote;
                    }
                    chunk.cursor += 1;
                    anchor = chunk.cursor;
                    continue;
                }
                LexState::InComment => {
                    chunk.cursor += 1;
                    if is_line_break(ch) {
                        self.state = LexState::FindNext;
                    }
                    continue;
                }
                LexState::InToken | LexState::InQuote => {}
            }

            let in_quote = self.state == LexState::InQuote;
            match ch {
                b' ' | b'\t' | b'\x0c' if in_quote => {}
                b'\n' | b'\r' if in_quote && !self.quotes_end_at_eol => {}
                b' ' | b'\t' | b'\x0c' | b'\n' | b'\r' => {
                    let token = self.take_token(&bytes[anchor..chunk.cursor]);
                    chunk.cursor += 1;
                    self.state = LexState::FindNext;
                    return Lexed::Token(token);
                }
                b'#' if !in_quote => {
                    let head = &bytes[anchor..chunk.cursor];
                    chunk.cursor += 1;
                    self.state = LexState::InComment;
                    if self.quoted || !head.is_empty() || !self.parts.is_empty() {
                        // Text glued to the comment marker is still a token.
                        return Lexed::Token(self.take_token(head));
                    }
                    continue;
                }
                b'\\' if in_quote => {
                    self.parts.push(bytes[anchor..chunk.cursor].to_vec());
                    self.state = LexState::InEscape;
                    chunk.cursor += 1;
                    anchor = chunk.cursor;
                    continue;
                }
                b'\'' | b'"' if !in_quote || ch == self.quote => {
                    if anchor != chunk.cursor {
                        self.parts.push(bytes[anchor..chunk.cursor].to_vec());
                    }
                    if in_quote {
                        self.state = LexState::InToken;
                    } else {
                        self.quote = ch;
                        self.quoted = true;
                        self.state = LexState::InQuote;
                    }
                    chunk.cursor += 1;
                    anchor = chunk.cursor;
                    continue;
                }
                _ => {}
            }
            chunk.cursor += 1;
        }

        if matches!(self.state, LexState::InToken | LexState::InQuote) && anchor < chunk.cursor {
            self.parts.push(bytes[anchor..chunk.cursor].to_vec());
        }
        Lexed::NeedMoreInput
    }

    /// Salvage the partial token left at end of input, if any.
    ///
    /// Only an unfinished token or quote yields one; a trailing comment,
    /// escape or continuation does not.
    pub fn finish(&mut self) -> Option<String> {
        let salvage = matches!(self.state, LexState::InToken | LexState::InQuote)
            && !self.parts.is_empty();
        let token = salvage.then(|| decode(&self.parts.concat()));
        self.parts.clear();
        self.quoted = false;
        self.state = LexState::FindNext;
        token
    }

    fn take_token(&mut self, tail: &[u8]) -> String {
        self.quoted = false;
        if self.parts.is_empty() {
            return decode(tail);
        }
        self.parts.push(tail.to_vec());
        let joined = self.parts.concat();
        self.parts.clear();
        decode(&joined)
    }
}

/// Tokenize a complete in-memory input.
pub fn tokenize(input: &[u8]) -> Vec<String> {
    tokenize_with(LexerContext::new(), input)
}

/// Tokenize a complete in-memory input with a preconfigured context.
pub fn tokenize_with(mut ctx: LexerContext, input: &[u8]) -> Vec<String> {
    let mut chunk = Chunk::new(input);
    let mut tokens = Vec::new();
    while let Lexed::Token(token) = ctx.advance(&mut chunk) {
        tokens.push(token);
    }
    tokens.extend(ctx.finish());
    tokens
}
