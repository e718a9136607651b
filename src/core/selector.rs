use crate::error::{LinksError, Result};
use crate::store::{Publication, PublicationStore};
use chrono::NaiveDate;

pub const NO_TITLE: &str = "No Title";
pub const NO_LINK: &str = "#";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The day a post is generated for.
///
/// Keeps the string exactly as the user typed it: file name and front matter
/// use the literal text, filtering uses the parsed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDate {
    raw: String,
    date: NaiveDate,
}

impl TargetDate {
    pub fn parse(input: &str) -> Result<Self> {
        let date = parse_day(input).ok_or_else(|| LinksError::InvalidDateFormat {
            input: input.to_string(),
        })?;
        Ok(Self {
            raw: input.to_string(),
            date,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Title and link of a publication selected for the post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub title: String,
    pub original_link: String,
}

impl LinkEntry {
    fn from_publication(p: Publication) -> Self {
        Self {
            title: non_empty_or(p.title, NO_TITLE),
            original_link: non_empty_or(p.original_link, NO_LINK),
        }
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Strict `YYYY-MM-DD`: four digit year, only digits and dashes
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let year = raw.split('-').next()?;
    if year.len() != 4 || !raw.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Date part of a `publication_date` value: everything before the first `T`
fn date_portion(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

/// Parse the date of a publication, `None` when missing or malformed
fn publication_day(p: &Publication) -> Option<NaiveDate> {
    let raw = p.publication_date.as_deref()?;
    parse_day(date_portion(raw))
}

/// Keep the publications dated `target`, in input order.
///
/// Records without a parseable date are skipped silently.
pub fn filter_by_date<I>(target: NaiveDate, publications: I) -> Vec<LinkEntry>
where
    I: IntoIterator<Item = Publication>,
{
    publications
        .into_iter()
        .filter(|p| match publication_day(p) {
            Some(day) => day == target,
            None => {
                tracing::trace!(date = ?p.publication_date, "skipping publication without valid date");
                false
            }
        })
        .map(LinkEntry::from_publication)
        .collect()
}

/// Links `service` published on `target_date`.
///
/// Fails with [`LinksError::InvalidDateFormat`] before touching the store when
/// `target_date` is not `YYYY-MM-DD`.
pub fn select(
    target_date: &str,
    service: &str,
    store: &dyn PublicationStore,
) -> Result<(TargetDate, Vec<LinkEntry>)> {
    let target = TargetDate::parse(target_date)?;

    let publications = store
        .get_publications_by_service(service)
        .map_err(|source| LinksError::Store {
            service: service.to_string(),
            source,
        })?;
    let total = publications.len();

    let entries = filter_by_date(target.date(), publications);
    tracing::debug!(
        service,
        date = target.as_str(),
        total,
        selected = entries.len(),
        "selected publications"
    );

    Ok((target, entries))
}
