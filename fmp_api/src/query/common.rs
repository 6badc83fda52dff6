//! Shared query infrastructure: the [`Query`] trait and the [`QueryCommon`] filters.

use chrono::NaiveDate;
use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for date ranges and pagination.
///
/// Filters that were never set are left out of the URL entirely; the API
/// treats a missing key as "unset", never an empty value.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the start of the date range (`from`).
    fn with_from_date(mut self, from: NaiveDate) -> Self
    where
        Self: Sized,
    {
        self.get_common().from = Some(from);
        self
    }

    /// Sets the end of the date range (`to`).
    fn with_to_date(mut self, to: NaiveDate) -> Self
    where
        Self: Sized,
    {
        self.get_common().to = Some(to);
        self
    }

    /// Sets both ends of the date range; either side may be left open.
    fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self
    where
        Self: Sized,
    {
        let common = self.get_common();
        common.from = from;
        common.to = to;
        self
    }

    /// Sets a single reporting date (`date`).
    fn with_date(mut self, date: NaiveDate) -> Self
    where
        Self: Sized,
    {
        self.get_common().date = Some(date);
        self
    }

    /// Sets the maximum number of rows to return.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }

    /// Sets the page number (0-indexed on the API side).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }
}

/// Fields shared by many endpoints: date filters and the single page/limit pair.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryCommon {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub date: Option<NaiveDate>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl QueryCommon {
    /// Appends whichever common parameters are set to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(from) = self.from {
            url.query_pairs_mut()
                .append_pair("from", &format_date(from));
        }
        if let Some(to) = self.to {
            url.query_pairs_mut().append_pair("to", &format_date(to));
        }
        if let Some(date) = self.date {
            url.query_pairs_mut()
                .append_pair("date", &format_date(date));
        }
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        if let Some(page) = self.page {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        url
    }
}

/// Renders a date the way the API expects it: `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
