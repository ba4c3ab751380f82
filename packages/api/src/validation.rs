//! # Form validation
//!
//! Format-level checks run before any request is sent. Each validator returns
//! every failing field at once so forms can show messages inline; the backend
//! still performs its own validation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::models::{LoginRequest, RegisterRequest, ReservationRequest, UserRequest};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex is valid"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{7,20}$").expect("static regex is valid"));

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PARTY_SIZE: u32 = 20;
pub const MAX_SPECIAL_REQUESTS_LEN: usize = 500;

/// Field name → message, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone.trim())
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if email.trim().is_empty() {
        errors.add("email", "email is required");
    } else if !is_valid_email(email) {
        errors.add("email", "please enter a valid email address");
    }
}

fn check_password(errors: &mut ValidationErrors, field: &'static str, password: &str) {
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(field, "password must be at least 8 characters");
    }
}

fn check_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.trim().chars().count();
    if len == 0 {
        errors.add(field, format!("{label} is required"));
    } else if len < min || len > max {
        errors.add(field, format!("{label} must be between {min} and {max} characters"));
    }
}

pub fn validate_login(request: &LoginRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_email(&mut errors, &request.email);
    check_password(&mut errors, "password", &request.password);
    errors.into_result()
}

pub fn validate_registration(request: &RegisterRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_length(&mut errors, "name", "name", &request.name, 2, 50);
    check_length(&mut errors, "surname", "surname", &request.surname, 2, 50);
    check_email(&mut errors, &request.email);
    check_password(&mut errors, "password", &request.password);
    let has_letter = request.password.chars().any(char::is_alphabetic);
    let has_digit = request.password.chars().any(|c| c.is_ascii_digit());
    if !(has_letter && has_digit) {
        errors.add("password", "password must contain a letter and a number");
    }
    if request.password != request.confirm_password {
        errors.add("confirmPassword", "passwords do not match");
    }
    errors.into_result()
}

/// Checks on the free-text reservation fields. Forms run these even when the
/// date, time or party size could not be parsed.
pub fn check_reservation_details(
    errors: &mut ValidationErrors,
    name: &str,
    email: &str,
    phone: &str,
    special_requests: Option<&str>,
) {
    check_length(errors, "name", "name", name, 2, 100);
    check_email(errors, email);
    if phone.trim().is_empty() {
        errors.add("phone", "phone is required");
    } else if !is_valid_phone(phone) {
        errors.add("phone", "please enter a valid phone number");
    }
    if let Some(notes) = special_requests {
        if notes.chars().count() > MAX_SPECIAL_REQUESTS_LEN {
            errors.add(
                "specialRequests",
                format!("special requests must be at most {MAX_SPECIAL_REQUESTS_LEN} characters"),
            );
        }
    }
}

/// `now` is the user's local wall-clock time.
pub fn validate_reservation(
    request: &ReservationRequest,
    now: NaiveDateTime,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_reservation_details(
        &mut errors,
        &request.name,
        &request.email,
        &request.phone,
        request.special_requests.as_deref(),
    );
    if request.number_of_people < 1 || request.number_of_people > MAX_PARTY_SIZE {
        errors.add(
            "numberOfPeople",
            format!("party size must be between 1 and {MAX_PARTY_SIZE}"),
        );
    }
    if request.reservation_date < now.date() {
        errors.add("reservationDate", "reservation date cannot be in the past");
    } else if request.reservation_date.and_time(request.reservation_time) <= now {
        errors.add("reservationTime", "reservation time cannot be in the past");
    }
    errors.into_result()
}

/// `creating` selects whether the password is mandatory.
pub fn validate_user(request: &UserRequest, creating: bool) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_length(&mut errors, "name", "name", &request.name, 1, 50);
    check_length(&mut errors, "surname", "surname", &request.surname, 1, 50);
    check_email(&mut errors, &request.email);
    match request.password.as_deref() {
        Some(p) if !p.is_empty() => check_password(&mut errors, "password", p),
        _ if creating => errors.add("password", "password is required"),
        _ => {}
    }
    errors.into_result()
}
