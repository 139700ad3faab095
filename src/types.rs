use chrono::{DateTime, NaiveDateTime, Utc};

/// Values that travel between the framework and the native driver.
///
/// This enum is the unified representation of query parameters and result
/// cells. Naive and UTC-stamped timestamps are kept distinct so the cursor
/// wrapper can stamp naive values when the framework runs timezone-aware.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Timestamp without a zone, as the driver returns it
    Timestamp(NaiveDateTime),
    /// Timestamp carrying an explicit UTC zone
    TimestampTz(DateTime<Utc>),
    /// NULL value
    Null,
    /// Binary data
    Blob(Vec<u8>),
}

/// A result row normalized into a fixed sequence of values.
pub type Row = Vec<SqlValue>;

impl SqlValue {
    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        if let SqlValue::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        if let SqlValue::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SqlValue::Bool(value) => Some(*value),
            SqlValue::Int(1) => Some(true),
            SqlValue::Int(0) => Some(false),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        if let SqlValue::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            SqlValue::Timestamp(value) => Some(*value),
            SqlValue::TimestampTz(value) => Some(value.naive_utc()),
            _ => None,
        }
    }

    pub fn as_blob(&self) -> Option<&[u8]> {
        if let SqlValue::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }
}
