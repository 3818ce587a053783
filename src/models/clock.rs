use crate::errors::AppResult;
use crate::utils::time::parse_required_time;
use chrono::{NaiveDateTime, NaiveTime};

/// A time-of-day as it reaches the calculator: typed by the user or
/// already structured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockInput {
    Text(String),
    Time(NaiveTime),
}

impl ClockInput {
    pub fn resolve(&self) -> AppResult<NaiveTime> {
        match self {
            ClockInput::Text(s) => parse_required_time(s),
            ClockInput::Time(t) => Ok(*t),
        }
    }
}

impl From<NaiveTime> for ClockInput {
    fn from(t: NaiveTime) -> Self {
        ClockInput::Time(t)
    }
}

impl From<&NaiveTime> for ClockInput {
    fn from(t: &NaiveTime) -> Self {
        ClockInput::Time(*t)
    }
}

impl From<NaiveDateTime> for ClockInput {
    fn from(dt: NaiveDateTime) -> Self {
        ClockInput::Time(dt.time())
    }
}

impl From<&str> for ClockInput {
    fn from(s: &str) -> Self {
        ClockInput::Text(s.to_string())
    }
}

impl From<String> for ClockInput {
    fn from(s: String) -> Self {
        ClockInput::Text(s)
    }
}

impl From<&String> for ClockInput {
    fn from(s: &String) -> Self {
        ClockInput::Text(s.clone())
    }
}
