use anyhow::Context;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::Display;

/// One rider's pickup and drop-off floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub pickup_floor: i32,
    pub dropoff_floor: i32,
}

impl Request {
    pub fn new(pickup_floor: i32, dropoff_floor: i32) -> Self {
        Self {
            pickup_floor,
            dropoff_floor,
        }
    }
}

impl Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.pickup_floor, self.dropoff_floor)
    }
}

/// Parses `P,D` or `P D`.
impl TryFrom<&str> for Request {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        let line = value.trim();
        let mut parts = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty());

        let (Some(pickup), Some(dropoff), None) = (parts.next(), parts.next(), parts.next()) else {
            anyhow::bail!("expected two floors as 'pickup,dropoff', got '{line}'");
        };

        let pickup_floor = pickup
            .parse::<i32>()
            .context(format!("failed to parse pickup floor '{pickup}'"))?;
        let dropoff_floor = dropoff
            .parse::<i32>()
            .context(format!("failed to parse drop-off floor '{dropoff}'"))?;

        Ok(Request::new(pickup_floor, dropoff_floor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_and_space_separated() {
        assert_eq!(Request::try_from("3,6").unwrap(), Request::new(3, 6));
        assert_eq!(Request::try_from("  12 1 ").unwrap(), Request::new(12, 1));
        assert_eq!(Request::try_from("-2, 4").unwrap(), Request::new(-2, 4));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(Request::try_from("").is_err());
        assert!(Request::try_from("7").is_err());
        assert!(Request::try_from("1,2,3").is_err());
        let err = Request::try_from("x,2").unwrap_err();
        assert!(format!("{err:#}").contains("pickup floor 'x'"));
    }

    #[test]
    fn equal_floors_are_accepted() {
        assert_eq!(Request::try_from("4,4").unwrap(), Request::new(4, 4));
    }
}
