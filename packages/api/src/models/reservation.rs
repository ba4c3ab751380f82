//! Reservation records.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationArea {
    #[default]
    Indoor,
    Outdoor,
}

impl ReservationArea {
    pub const ALL: [ReservationArea; 2] = [ReservationArea::Indoor, ReservationArea::Outdoor];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationArea::Indoor => "INDOOR",
            ReservationArea::Outdoor => "OUTDOOR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ReservationArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Confirmed,
    #[default]
    Pending,
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 3] = [
        ReservationStatus::Confirmed,
        ReservationStatus::Pending,
        ReservationStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str().eq_ignore_ascii_case(s))
    }

    /// Lower-case name for CSS modifiers.
    pub fn slug(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Pending => "pending",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire format for times: `HH:MM`, tolerating `HH:MM:SS` on input.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

/// A reservation as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub reservation_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub reservation_time: NaiveTime,
    #[serde(alias = "partySize")]
    pub number_of_people: u32,
    #[serde(default)]
    pub reservation_area: ReservationArea,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl Reservation {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.reservation_date.and_time(self.reservation_time)
    }

    /// "20/06/2030 21:00"
    pub fn display_when(&self) -> String {
        self.starts_at().format("%d/%m/%Y %H:%M").to_string()
    }
}

/// Form state staged before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub reservation_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub reservation_time: NaiveTime,
    pub number_of_people: u32,
    pub reservation_area: ReservationArea,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl From<&Reservation> for ReservationRequest {
    fn from(r: &Reservation) -> Self {
        Self {
            name: r.name.clone(),
            email: r.email.clone(),
            phone: r.phone.clone(),
            reservation_date: r.reservation_date,
            reservation_time: r.reservation_time,
            number_of_people: r.number_of_people,
            reservation_area: r.reservation_area,
            special_requests: r.special_requests.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_accepts_party_size_alias() {
        let json = r#"{
            "id": 3,
            "name": "Grace",
            "email": "grace@example.com",
            "phone": "+34 600 000 000",
            "reservationDate": "2030-05-04",
            "reservationTime": "20:30:00",
            "partySize": 4,
            "reservationArea": "OUTDOOR",
            "status": "CONFIRMED"
        }"#;
        let r: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(r.number_of_people, 4);
        assert_eq!(r.reservation_area, ReservationArea::Outdoor);
        assert_eq!(r.status, ReservationStatus::Confirmed);
        assert_eq!(r.reservation_time, NaiveTime::from_hms_opt(20, 30, 0).unwrap());
        assert!(r.special_requests.is_none());
    }

    #[test]
    fn test_request_serializes_wire_names() {
        let request = ReservationRequest {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            phone: "600000000".into(),
            reservation_date: NaiveDate::from_ymd_opt(2030, 1, 2).unwrap(),
            reservation_time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            number_of_people: 2,
            reservation_area: ReservationArea::Indoor,
            special_requests: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["reservationTime"], "09:05");
        assert_eq!(json["reservationDate"], "2030-01-02");
        assert_eq!(json["numberOfPeople"], 2);
        assert_eq!(json["reservationArea"], "INDOOR");
        assert!(json.get("specialRequests").is_none());
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(ReservationStatus::parse("cancelled"), Some(ReservationStatus::Cancelled));
        assert_eq!(ReservationStatus::parse("nope"), None);
        assert_eq!(ReservationArea::parse("Outdoor"), Some(ReservationArea::Outdoor));
    }
}
