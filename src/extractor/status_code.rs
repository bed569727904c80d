use std::fmt;
use std::ops::RangeInclusive;

/// An HTTP status code, guaranteed to lie in `100..=599`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const MIN: u16 = 100;
    pub const MAX: u16 = 599;

    /// Returns `None` when `value` is outside `100..=599`.
    pub fn new(value: i64) -> Option<Self> {
        if Self::valid_range().contains(&value) {
            Some(Self(value as u16))
        } else {
            None
        }
    }

    pub fn as_u16(self) -> u16 {
        self.0
    }

    pub fn valid_range() -> RangeInclusive<i64> {
        i64::from(Self::MIN)..=i64::from(Self::MAX)
    }

    /// Every valid status code in ascending order.
    pub fn all() -> impl Iterator<Item = StatusCode> {
        (Self::MIN..=Self::MAX).map(StatusCode)
    }

    /// Codes from `min` to `max`, both inclusive.
    pub fn span(min: StatusCode, max: StatusCode) -> impl Iterator<Item = StatusCode> {
        (min.0..=max.0).map(StatusCode)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_boundaries() {
        assert!(StatusCode::new(99).is_none());
        assert_eq!(StatusCode::new(100).map(StatusCode::as_u16), Some(100));
        assert_eq!(StatusCode::new(599).map(StatusCode::as_u16), Some(599));
        assert!(StatusCode::new(600).is_none());
        assert!(StatusCode::new(-200).is_none());
    }

    #[test]
    fn all_covers_every_code_once() {
        let codes: Vec<_> = StatusCode::all().collect();
        assert_eq!(codes.len(), 500);
        assert_eq!(codes.first().map(|c| c.as_u16()), Some(100));
        assert_eq!(codes.last().map(|c| c.as_u16()), Some(599));
    }

    #[test]
    fn span_is_inclusive() {
        let min = StatusCode::new(200).unwrap();
        let max = StatusCode::new(202).unwrap();
        let codes: Vec<u16> = StatusCode::span(min, max).map(u16::from).collect();
        assert_eq!(codes, vec![200, 201, 202]);
    }
}
