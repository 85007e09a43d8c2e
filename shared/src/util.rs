//! Date-time wire formats used by the backend
//!
//! Most timestamps use chrono's default ISO form. Appointments use two
//! minute-precision formats, one for booking and one for display.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

/// `yyyy-MM-ddTHH:mm`, accepted by `POST /agendamentos`
pub const BOOKING_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// `dd/MM/yyyy HH:mm`, returned on appointment responses
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Serde adapter for [`BOOKING_FORMAT`]
pub mod booking_time {
    use super::*;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format(BOOKING_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, BOOKING_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for [`DISPLAY_FORMAT`]
pub mod display_time {
    use super::*;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format(DISPLAY_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, DISPLAY_FORMAT).map_err(serde::de::Error::custom)
    }
}
