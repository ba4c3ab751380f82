//! # Client-side list processing
//!
//! Admin tables fetch a full collection once and then search, filter, sort and
//! paginate it locally. [`ListQuery::apply`] does all four in that order over
//! anything implementing [`Listable`].

use std::cmp::Ordering;

use crate::models::{AdminUser, Reservation};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn toggled(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Comparable projection of a row for one column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Number(i64),
    Text(String),
}

pub trait Listable {
    /// Lower-cased text the search box matches against.
    fn haystack(&self) -> String;
    /// Value of the row for `column`, or `None` if the column is unknown.
    fn sort_key(&self, column: &str) -> Option<SortKey>;
    /// Whether the row passes the named filter (e.g. a status or role).
    fn matches_filter(&self, filter: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub filter: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: SortDir,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: None,
            sort_by: None,
            sort_dir: SortDir::Asc,
            page: 1,
            page_size: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl ListQuery {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Click on a column header: same column flips direction, new column sorts ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort_by.as_deref() == Some(column) {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_by = Some(column.to_string());
            self.sort_dir = SortDir::Asc;
        }
        self.page = 1;
    }

    pub fn apply<T: Listable + Clone>(&self, rows: &[T]) -> Page<T> {
        let needle = self.search.trim().to_lowercase();
        let mut matched: Vec<&T> = rows
            .iter()
            .filter(|r| needle.is_empty() || r.haystack().contains(&needle))
            .filter(|r| match self.filter.as_deref() {
                None | Some("") => true,
                Some(f) => r.matches_filter(f),
            })
            .collect();

        if let Some(column) = self.sort_by.as_deref() {
            matched.sort_by(|a, b| {
                let ord = match (a.sort_key(column), b.sort_key(column)) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                };
                match self.sort_dir {
                    SortDir::Asc => ord,
                    SortDir::Desc => ord.reverse(),
                }
            });
        }

        let page_size = self.page_size.max(1);
        let total_items = matched.len();
        let total_pages = total_items.div_ceil(page_size).max(1);
        let page = self.page.clamp(1, total_pages);
        let items = matched
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .cloned()
            .collect();

        Page {
            items,
            page,
            total_pages,
            total_items,
        }
    }
}

impl Listable for Reservation {
    fn haystack(&self) -> String {
        format!("{} {} {} {}", self.name, self.email, self.phone, self.id).to_lowercase()
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        Some(match column {
            "id" => SortKey::Number(self.id),
            "name" => SortKey::Text(self.name.to_lowercase()),
            "email" => SortKey::Text(self.email.to_lowercase()),
            "date" => SortKey::Number(self.starts_at().and_utc().timestamp()),
            "people" => SortKey::Number(self.number_of_people.into()),
            "status" => SortKey::Text(self.status.as_str().to_string()),
            "area" => SortKey::Text(self.reservation_area.as_str().to_string()),
            _ => return None,
        })
    }

    fn matches_filter(&self, filter: &str) -> bool {
        self.status.as_str().eq_ignore_ascii_case(filter)
            || self.reservation_area.as_str().eq_ignore_ascii_case(filter)
    }
}

impl Listable for AdminUser {
    fn haystack(&self) -> String {
        format!("{} {} {}", self.name, self.surname, self.email).to_lowercase()
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "id" => Some(SortKey::Number(self.id)),
            "name" => Some(SortKey::Text(self.full_name().to_lowercase())),
            "email" => Some(SortKey::Text(self.email.to_lowercase())),
            "role" => Some(SortKey::Text(self.role.as_str().to_string())),
            "reservations" => Some(SortKey::Number(self.reservations_count.into())),
            "createdAt" => self
                .created_at
                .map(|t| SortKey::Number(t.and_utc().timestamp())),
            "lastLogin" => self
                .last_login
                .map(|t| SortKey::Number(t.and_utc().timestamp())),
            _ => None,
        }
    }

    fn matches_filter(&self, filter: &str) -> bool {
        match filter {
            "enabled" => self.enabled,
            "disabled" => !self.enabled,
            "unverified" => !self.email_verified,
            role => self.role.as_str().eq_ignore_ascii_case(role),
        }
    }
}
