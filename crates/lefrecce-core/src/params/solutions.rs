//! Journey-search query assembly
//!
//! Builds the `solutions` query string with the site's defaulting rules:
//! departure date defaults to today, departure time to the current hour,
//! one adult and no children, high-speed trains included. The return
//! date/time and the train code list are sent only when a caller provides
//! them; the API treats their absence as "not filtered".

use crate::params::{bool_str, current_hour, encode_query, today};
use crate::types::ReturnFlag;

/// Query builder for the journey search endpoint
///
/// # Example
/// ```
/// use lefrecce_core::SolutionsQuery;
///
/// let query = SolutionsQuery::new("Milano Centrale", "Roma Termini")
///     .adults(2)
///     .departure_date("25/12/2026");
/// ```
#[derive(Debug, Clone)]
pub struct SolutionsQuery {
    origin: String,
    destination: String,
    arflag: ReturnFlag,
    adate: Option<String>,
    atime: Option<String>,
    adultno: u32,
    childno: u32,
    direction: ReturnFlag,
    frecce: bool,
    only_regional: bool,
    rdate: Option<String>,
    rtime: Option<String>,
    code_list: Option<String>,
}

impl SolutionsQuery {
    /// Create a search between two locations with the default parameters.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            arflag: ReturnFlag::Outward,
            adate: None,
            atime: None,
            adultno: 1,
            childno: 0,
            direction: ReturnFlag::Outward,
            frecce: true,
            only_regional: false,
            rdate: None,
            rtime: None,
            code_list: None,
        }
    }

    /// Set the one-way/return flag.
    pub fn arflag(mut self, arflag: ReturnFlag) -> Self {
        self.arflag = arflag;
        self
    }

    /// Set the departure date (`dd/mm/yyyy`). Defaults to today.
    pub fn departure_date(mut self, adate: impl Into<String>) -> Self {
        self.adate = Some(adate.into());
        self
    }

    /// Set the departure hour (`HH`). Defaults to the current hour.
    pub fn departure_time(mut self, atime: impl Into<String>) -> Self {
        self.atime = Some(atime.into());
        self
    }

    /// Set the number of adult passengers. Defaults to 1.
    pub fn adults(mut self, adultno: u32) -> Self {
        self.adultno = adultno;
        self
    }

    /// Set the number of child passengers. Defaults to 0.
    pub fn children(mut self, childno: u32) -> Self {
        self.childno = childno;
        self
    }

    /// Set the search direction flag.
    pub fn direction(mut self, direction: ReturnFlag) -> Self {
        self.direction = direction;
        self
    }

    /// Include high-speed (Frecce) trains. Defaults to true.
    pub fn frecce(mut self, frecce: bool) -> Self {
        self.frecce = frecce;
        self
    }

    /// Restrict results to regional trains. Defaults to false.
    pub fn only_regional(mut self, only_regional: bool) -> Self {
        self.only_regional = only_regional;
        self
    }

    /// Set the return date (`dd/mm/yyyy`). Omitted unless set.
    pub fn return_date(mut self, rdate: impl Into<String>) -> Self {
        self.rdate = Some(rdate.into());
        self
    }

    /// Set the return hour (`HH`). Omitted unless set.
    pub fn return_time(mut self, rtime: impl Into<String>) -> Self {
        self.rtime = Some(rtime.into());
        self
    }

    /// Restrict the search to a train code. Omitted unless set.
    pub fn code_list(mut self, code_list: impl Into<String>) -> Self {
        self.code_list = Some(code_list.into());
        self
    }

    /// Assemble the query pairs, filling defaults for unset parameters.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("origin", self.origin.clone()),
            ("destination", self.destination.clone()),
            ("arflag", self.arflag.as_str().to_string()),
            ("adate", self.adate.clone().unwrap_or_else(today)),
            ("atime", self.atime.clone().unwrap_or_else(current_hour)),
            ("adultno", self.adultno.to_string()),
            ("childno", self.childno.to_string()),
            ("direction", self.direction.as_str().to_string()),
            ("frecce", bool_str(self.frecce).to_string()),
            ("onlyRegional", bool_str(self.only_regional).to_string()),
        ];

        if let Some(code_list) = &self.code_list {
            pairs.push(("codeList", code_list.clone()));
        }
        if let Some(rdate) = &self.rdate {
            pairs.push(("rdate", rdate.clone()));
        }
        if let Some(rtime) = &self.rtime {
            pairs.push(("rtime", rtime.clone()));
        }

        pairs
    }

    /// Assemble the full percent-encoded query string.
    pub fn to_query_string(&self) -> String {
        encode_query(&self.to_pairs())
    }
}
