//! Line tokenizer and field parser.

use std::borrow::Cow;

use crate::conf::{IDX_TOKEN_COL, IDX_TOKEN_ROW, IDX_TOKEN_VALUE, N_TOKENS_MIN};
use crate::spec::{ParseLineError, SpecDataRecord, SpecRawFields};

fn is_token_separator(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// Split a raw line on runs of ASCII whitespace.
///
/// Bytes that are not valid UTF-8 are replaced per token, so they only fail
/// the run when they sit in a token that gets parsed.
pub fn split_tokens(line: &[u8]) -> Vec<Cow<'_, str>> {
    line.split(is_token_separator)
        .filter(|token| !token.is_empty())
        .map(String::from_utf8_lossy)
        .collect()
}

/// Pick the row/column/value tokens by position.
pub fn select_fields<T: AsRef<str>>(
    l_tokens: &[T],
) -> Result<SpecRawFields<'_>, ParseLineError> {
    if l_tokens.len() < N_TOKENS_MIN {
        return Err(ParseLineError::TooFewTokens {
            expected: N_TOKENS_MIN,
            found: l_tokens.len(),
        });
    }
    Ok(SpecRawFields {
        row: l_tokens[IDX_TOKEN_ROW].as_ref(),
        col: l_tokens[IDX_TOKEN_COL].as_ref(),
        value: l_tokens[IDX_TOKEN_VALUE].as_ref(),
    })
}

impl SpecRawFields<'_> {
    /// Parse the selected tokens into a record.
    pub fn parse(&self) -> Result<SpecDataRecord, ParseLineError> {
        Ok(SpecDataRecord {
            row: parse_index(self.row, IDX_TOKEN_ROW)?,
            col: parse_index(self.col, IDX_TOKEN_COL)?,
            value: parse_value(self.value)?,
        })
    }
}

/// Tokenize and parse one line.
pub fn parse_line(line: &str) -> Result<SpecDataRecord, ParseLineError> {
    select_fields(&split_tokens(line.as_bytes()))?.parse()
}

fn parse_index(token: &str, index: usize) -> Result<i64, ParseLineError> {
    token
        .parse::<i64>()
        .map_err(|_| ParseLineError::InvalidInteger {
            index,
            token: token.to_string(),
        })
}

fn parse_value(token: &str) -> Result<f64, ParseLineError> {
    let value = token
        .parse::<f64>()
        .map_err(|_| ParseLineError::InvalidFloat {
            index: IDX_TOKEN_VALUE,
            token: token.to_string(),
        })?;
    if !value.is_finite() {
        return Err(ParseLineError::NonFiniteValue {
            token: token.to_string(),
        });
    }
    Ok(value)
}
