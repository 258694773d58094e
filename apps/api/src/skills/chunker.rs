//! Lightweight linguistic analysis: tokens, noun chunks, and named entities.
//!
//! Tokens follow Unicode word boundaries (UAX #29), with trailing `+`/`#`
//! glued onto the preceding word and `-`/`.` kept between two words, so
//! technology names like `C++`, `C#`, `scikit-learn`, and `Node.js` survive as
//! one token. Noun chunks are maximal runs of content words
//! between stop words and punctuation; entities are maximal runs of
//! capitalized content words.

use unicode_segmentation::UnicodeSegmentation;

use crate::matching::stop_words::is_stop_word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    fn is_content_word(&self) -> bool {
        self.kind == TokenKind::Word && !is_stop_word(&self.text.to_lowercase())
    }

    fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

/// The linguistic view of a text used by the skill extractor.
#[derive(Debug, Default)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub noun_chunks: Vec<String>,
    pub entities: Vec<String>,
}

pub fn analyze(text: &str) -> Analysis {
    let tokens = tokenize(text);
    let noun_chunks = spans(&tokens, Token::is_content_word);
    let entities = spans(&tokens, |t| t.is_content_word() && t.is_capitalized());
    Analysis {
        tokens,
        noun_chunks,
        entities,
    }
}

pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut adjacent = false;
    let mut segments = text.split_word_bounds().peekable();

    while let Some(segment) = segments.next() {
        if segment.chars().all(char::is_whitespace) {
            adjacent = false;
            continue;
        }

        let is_word = is_word_segment(segment);
        if !is_word && adjacent {
            if let Some(last) = tokens.last_mut().filter(|t| t.kind == TokenKind::Word) {
                if segment.chars().all(|c| c == '+' || c == '#') {
                    last.text.push_str(segment);
                    continue;
                }
                if matches!(segment, "-" | ".") {
                    if let Some(next) = segments.next_if(|next| is_word_segment(next)) {
                        last.text.push_str(segment);
                        last.text.push_str(next);
                        continue;
                    }
                }
            }
        }

        tokens.push(Token {
            text: segment.to_string(),
            kind: if is_word {
                TokenKind::Word
            } else {
                TokenKind::Punct
            },
        });
        adjacent = true;
    }

    tokens
}

fn is_word_segment(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

/// Collects maximal runs of tokens accepted by `keep`, joined by single spaces.
fn spans(tokens: &[Token], keep: impl Fn(&Token) -> bool) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for token in tokens {
        if keep(token) {
            current.push(&token.text);
        } else if !current.is_empty() {
            out.push(current.join(" "));
            current.clear();
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
    out
}
