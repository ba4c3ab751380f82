//! CSV and JSON downloads for the admin tables.
//!
//! Purely presentational: the column set follows what the tables show and
//! carries no compatibility promise.

use serde::Serialize;

use crate::models::{AdminUser, Reservation};

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_document(header: &[&str], rows: impl Iterator<Item = Vec<String>>) -> String {
    let mut out = header.join(",");
    for row in rows {
        out.push('\n');
        let fields: Vec<String> = row.iter().map(|f| csv_field(f)).collect();
        out.push_str(&fields.join(","));
    }
    out.push('\n');
    out
}

pub fn reservations_to_csv(reservations: &[Reservation]) -> String {
    csv_document(
        &[
            "id", "name", "email", "phone", "date", "time", "people", "area", "status",
            "specialRequests",
        ],
        reservations.iter().map(|r| {
            vec![
                r.id.to_string(),
                r.name.clone(),
                r.email.clone(),
                r.phone.clone(),
                r.reservation_date.format("%Y-%m-%d").to_string(),
                r.reservation_time.format("%H:%M").to_string(),
                r.number_of_people.to_string(),
                r.reservation_area.to_string(),
                r.status.to_string(),
                r.special_requests.clone().unwrap_or_default(),
            ]
        }),
    )
}

pub fn users_to_csv(users: &[AdminUser]) -> String {
    let timestamp = |t: Option<chrono::NaiveDateTime>| {
        t.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    };
    csv_document(
        &[
            "id", "name", "surname", "email", "role", "enabled", "emailVerified", "createdAt",
            "lastLogin", "reservations",
        ],
        users.iter().map(|u| {
            vec![
                u.id.to_string(),
                u.name.clone(),
                u.surname.clone(),
                u.email.clone(),
                u.role.to_string(),
                u.enabled.to_string(),
                u.email_verified.to_string(),
                timestamp(u.created_at),
                timestamp(u.last_login),
                u.reservations_count.to_string(),
            ]
        }),
    )
}

pub fn to_json<T: Serialize>(rows: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

/// `data:` URL for an anchor `href` with a `download` attribute.
pub fn data_url(mime: &str, content: &str) -> String {
    let mut encoded = String::with_capacity(content.len());
    for byte in content.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    format!("data:{mime};charset=utf-8,{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReservationArea, ReservationStatus};
    use chrono::{NaiveDate, NaiveTime};

    fn reservation(requests: Option<&str>) -> Reservation {
        Reservation {
            id: 1,
            name: "Doe, Jane".into(),
            email: "jane@example.com".into(),
            phone: "600123456".into(),
            reservation_date: NaiveDate::from_ymd_opt(2030, 2, 3).unwrap(),
            reservation_time: NaiveTime::from_hms_opt(19, 45, 0).unwrap(),
            number_of_people: 3,
            reservation_area: ReservationArea::Outdoor,
            status: ReservationStatus::Confirmed,
            special_requests: requests.map(str::to_string),
        }
    }

    #[test]
    fn test_reservation_csv_quotes_fields() {
        let csv = reservations_to_csv(&[reservation(Some("say \"hi\""))]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("id,name,email"));
        assert_eq!(
            lines[1],
            r#"1,"Doe, Jane",jane@example.com,600123456,2030-02-03,19:45,3,OUTDOOR,CONFIRMED,"say ""hi""""#
        );
    }

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(users_to_csv(&[]).lines().count(), 1);
    }

    #[test]
    fn test_json_is_pretty() {
        let json = to_json(&[reservation(None)]).unwrap();
        assert!(json.contains("\n  {"));
        assert!(json.contains("\"reservationTime\": \"19:45\""));
    }

    #[test]
    fn test_data_url_escapes() {
        assert_eq!(data_url("text/csv", "a,b\n"), "data:text/csv;charset=utf-8,a%2Cb%0A");
    }
}
