use chrono::{DateTime, Utc};

use crate::errors::InternalError;

/// Current time as stored in timestamp columns
pub fn now_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Render a stored Unix-seconds column as RFC 3339
pub fn to_rfc3339(timestamp: i64) -> Result<String, InternalError> {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|dt| dt.to_rfc3339())
        .ok_or_else(|| InternalError::parse("timestamp", format!("{} is out of range", timestamp)))
}
