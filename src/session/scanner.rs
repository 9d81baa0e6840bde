//! Whitespace tokenizer with line awareness.
//!
//! Tokens may span lines, but [`Scanner::rest_of_line`] hands back whatever
//! is left of the current line. Team names are read that way, so they may
//! contain spaces.

use std::io::BufRead;
use std::str::FromStr;

use crate::error::SessionError;

/// Token reader over buffered input.
#[derive(Debug)]
pub struct Scanner<R> {
    reader: R,
    line: String,
    cursor: usize,
}

impl<R: BufRead> Scanner<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            cursor: 0,
        }
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, SessionError> {
        loop {
            let rest = &self.line[self.cursor..];
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let start = self.cursor + (rest.len() - trimmed.len());
                let len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                self.cursor = start + len;
                return Ok(Some(self.line[start..self.cursor].to_string()));
            }
            if !self.read_line()? {
                return Ok(None);
            }
        }
    }

    /// Next token, failing at end of input.
    pub fn expect_token(&mut self, expected: &'static str) -> Result<String, SessionError> {
        self.next_token()?
            .ok_or(SessionError::UnexpectedEof { expected })
    }

    /// Next token parsed as a number.
    pub fn next_number<T: FromStr>(&mut self, expected: &'static str) -> Result<T, SessionError> {
        let token = self.expect_token(expected)?;
        token
            .parse()
            .map_err(|_| SessionError::InvalidNumber { expected, token })
    }

    /// Remainder of the current line, trimmed. The line is then consumed.
    pub fn rest_of_line(&mut self) -> String {
        let rest = self.line[self.cursor..].trim().to_string();
        self.cursor = self.line.len();
        rest
    }

    fn read_line(&mut self) -> Result<bool, SessionError> {
        self.line.clear();
        self.cursor = 0;
        Ok(self.reader.read_line(&mut self.line)? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(text: &str) -> Scanner<&[u8]> {
        Scanner::new(text.as_bytes())
    }

    #[test]
    fn test_tokens_span_lines() {
        let mut s = scanner("2 3\n  10 0\n\n5\n");
        let mut tokens = Vec::new();
        while let Some(t) = s.next_token().unwrap() {
            tokens.push(t);
        }
        assert_eq!(tokens, ["2", "3", "10", "0", "5"]);
    }

    #[test]
    fn test_rest_of_line_keeps_inner_spaces() {
        let mut s = scanner("escavacao 1 -2  Os Cavadores \nriqueza\n");
        assert_eq!(s.expect_token("command").unwrap(), "escavacao");
        assert_eq!(s.next_number::<i64>("rows").unwrap(), 1);
        assert_eq!(s.next_number::<i64>("cols").unwrap(), -2);
        assert_eq!(s.rest_of_line(), "Os Cavadores");
        assert_eq!(s.next_token().unwrap().as_deref(), Some("riqueza"));
    }

    #[test]
    fn test_rest_of_line_at_end_is_empty() {
        let mut s = scanner("estrela\nX\n");
        s.next_token().unwrap();
        assert_eq!(s.rest_of_line(), "");
        assert_eq!(s.next_token().unwrap().as_deref(), Some("X"));
    }

    #[test]
    fn test_invalid_number() {
        let mut s = scanner("abc");
        let err = s.next_number::<u32>("worth").unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidNumber { expected: "worth", ref token } if token == "abc"
        ));
    }

    #[test]
    fn test_eof() {
        let mut s = scanner("   \n");
        assert!(s.next_token().unwrap().is_none());
        assert!(matches!(
            s.expect_token("rows"),
            Err(SessionError::UnexpectedEof { expected: "rows" })
        ));
    }
}
