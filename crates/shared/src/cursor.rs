use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Serialize;

use crate::{Error, Result};

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Encodes the id of the last row of a page into an opaque cursor.
pub fn encode_cursor(id: i64) -> String {
    STANDARD.encode(id.to_string())
}

/// Decodes a cursor produced by [`encode_cursor`]. An empty cursor starts
/// from the beginning.
pub fn decode_cursor(cursor: &str) -> Result<i64> {
    if cursor.is_empty() {
        return Ok(0);
    }

    let bytes = STANDARD
        .decode(cursor)
        .map_err(|_| Error::BadParamInput("invalid cursor".to_owned()))?;

    std::str::from_utf8(&bytes)
        .ok()
        .and_then(|value| value.parse::<i64>().ok())
        .filter(|id| *id >= 0)
        .ok_or_else(|| Error::BadParamInput("invalid cursor".to_owned()))
}

/// Keyset pagination arguments: rows with `id > after`, at most `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Args {
    pub after: i64,
    pub limit: u64,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            after: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Args {
    pub fn parse(cursor: Option<&str>, num: Option<i64>) -> Result<Self> {
        let after = decode_cursor(cursor.unwrap_or_default())?;
        let limit = match num {
            None => DEFAULT_LIMIT,
            Some(n) if n <= 0 => {
                return Err(Error::BadParamInput("num must be greater than 0".to_owned()));
            }
            Some(n) => (n as u64).min(MAX_LIMIT),
        };

        Ok(Self { after, limit })
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit.clamp(1, MAX_LIMIT);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Builds a page. A next cursor is only handed out when the page is full,
    /// a shorter page means the end was reached.
    pub fn new(items: Vec<T>, args: &Args, id: impl Fn(&T) -> i64) -> Self {
        let next_cursor = if items.len() as u64 >= args.limit {
            items.last().map(|item| encode_cursor(id(item)))
        } else {
            None
        };

        Self { items, next_cursor }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
        }
    }

    pub fn cursor_or_empty(&self) -> String {
        self.next_cursor.clone().unwrap_or_default()
    }
}
