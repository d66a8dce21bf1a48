use std::fmt;

use serde::de;

use crate::protocol::LineNo;

/// Accepts whatever the bridges send for a line or column.
///
/// Numbers stay numbers, strings go through `LineNo::parse` and `null`
/// becomes `LineNo::Empty`.
pub struct LineNoVisitor;

impl<'de> de::Visitor<'de> for LineNoVisitor {
    type Value = LineNo;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a line number, a string or null")
    }

    fn visit_u64<E>(self, value: u64) -> Result<LineNo, E>
    where
        E: de::Error,
    {
        Ok(LineNo::Number(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<LineNo, E>
    where
        E: de::Error,
    {
        Ok(match u64::try_from(value) {
            Ok(number) => LineNo::Number(number),
            Err(_) => LineNo::Text(value.to_string()),
        })
    }

    fn visit_f64<E>(self, value: f64) -> Result<LineNo, E>
    where
        E: de::Error,
    {
        if value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
            Ok(LineNo::Number(value as u64))
        } else {
            Ok(LineNo::Text(value.to_string()))
        }
    }

    fn visit_str<E>(self, value: &str) -> Result<LineNo, E>
    where
        E: de::Error,
    {
        Ok(LineNo::parse(value))
    }

    fn visit_bool<E>(self, value: bool) -> Result<LineNo, E>
    where
        E: de::Error,
    {
        Ok(LineNo::Text(value.to_string()))
    }

    fn visit_unit<E>(self) -> Result<LineNo, E>
    where
        E: de::Error,
    {
        Ok(LineNo::Empty)
    }

    fn visit_none<E>(self) -> Result<LineNo, E>
    where
        E: de::Error,
    {
        Ok(LineNo::Empty)
    }
}
