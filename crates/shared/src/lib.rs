mod cursor;
mod error;

pub use cursor::*;
pub use error::*;

/// Current time as a unix timestamp in seconds.
pub fn now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}
