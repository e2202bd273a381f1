//! Vehicle identifiers.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::DomainError;

/// `[prefix.]LETTERS DIGITS`, e.g. `BE.NMBS.IC545`.
static VEHICLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[^.]+\.)*([A-Z]{1,3})([0-9]{1,4})$").expect("vehicle pattern compiles")
});

/// A parsed vehicle id: type code (`IC`, `L`, `S`, `P`, ...) and train number.
///
/// # Examples
///
/// ```
/// use irail::domain::Vehicle;
///
/// let vehicle = Vehicle::parse("BE.NMBS.IC545").unwrap();
/// assert_eq!(vehicle.code(), "IC");
/// assert_eq!(vehicle.number(), "545");
/// assert_eq!(vehicle.label(true), "IC545");
///
/// assert!(Vehicle::parse("BE.NMBS.").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vehicle {
    code: String,
    number: String,
}

impl Vehicle {
    /// Parse a vehicle id, with or without its operator prefix.
    pub fn parse(id: &str) -> Result<Self, DomainError> {
        let captures = VEHICLE_PATTERN
            .captures(id)
            .ok_or_else(|| DomainError::InvalidVehicleIdentifier(id.to_string()))?;

        Ok(Self {
            code: captures[1].to_string(),
            number: captures[2].to_string(),
        })
    }

    /// Type code such as `IC`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Train number digits as sent by the API.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Type code, with the number appended when `include_number` is set.
    pub fn label(&self, include_number: bool) -> String {
        if include_number {
            format!("{}{}", self.code, self.number)
        } else {
            self.code.clone()
        }
    }
}

impl fmt::Debug for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vehicle({}{})", self.code, self.number)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Human-readable vehicle type for a raw id.
pub fn parse_vehicle(id: &str, include_number: bool) -> Result<String, DomainError> {
    Vehicle::parse(id).map(|vehicle| vehicle.label(include_number))
}
