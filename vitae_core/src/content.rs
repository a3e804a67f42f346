//! Résumé content model.
//!
//! Everything here is read-only after startup; it is deserialized from the
//! `[personal]`, `[[experience]]`, `[[education]]`, `[[skills]]`,
//! `[[certifications]]` and `[[additional]]` tables of the résumé file.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Path to a profile photo; a missing file falls back to initials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Personal {
    /// Up to two uppercase initials taken from the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Contact links in display order.
    pub fn contact_links(&self) -> Vec<(ContactKind, String)> {
        let mut links = Vec::new();
        if let Some(email) = &self.email {
            links.push((ContactKind::Email, format!("mailto:{}", email)));
        }
        if let Some(url) = &self.website {
            links.push((ContactKind::Website, url.clone()));
        }
        if let Some(url) = &self.linkedin {
            links.push((ContactKind::LinkedIn, url.clone()));
        }
        if let Some(url) = &self.github {
            links.push((ContactKind::GitHub, url.clone()));
        }
        links
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Website,
    LinkedIn,
    GitHub,
}

/// A month-precision date written as `"YYYY-MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    fn months(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
            .map_err(|e| format!("invalid year-month '{}': {}", value, e))?;
        Ok(Self::from_date(date))
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        format!("{:04}-{:02}", value.year, value.month)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub start: YearMonth,
    /// `None` means the position is current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<YearMonth>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Experience {
    /// Whole months between start and end (or `today` when current), inclusive
    /// of the starting month.
    pub fn months(&self, today: NaiveDate) -> u32 {
        let end = self.end.unwrap_or_else(|| YearMonth::from_date(today));
        (end.months() - self.start.months() + 1).max(0) as u32
    }

    /// Human readable span, e.g. "2 años 3 meses".
    pub fn duration_label(&self, today: NaiveDate) -> String {
        format_months(self.months(today))
    }

    pub fn is_current(&self) -> bool {
        self.end.is_none()
    }
}

/// Formats a month count as years and months.
pub fn format_months(total: u32) -> String {
    let years = total / 12;
    let months = total % 12;
    let unit = |n: u32, one: &str, many: &str| format!("{} {}", n, if n == 1 { one } else { many });
    match (years, months) {
        (0, m) => unit(m, "mes", "meses"),
        (y, 0) => unit(y, "año", "años"),
        (y, m) => format!("{} {}", unit(y, "año", "años"), unit(m, "mes", "meses")),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub start: YearMonth,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<YearMonth>,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, 0..=100.
    pub level: u8,
}

impl Skill {
    /// Level as a 0..=1 fraction, saturating at 100%.
    pub fn fraction(&self) -> f32 {
        f32::from(self.level.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalInfo {
    pub label: String,
    pub value: String,
}
