//! Request body types for the lefrecce.it API
//!
//! These structs mirror the wire format the site expects, field names
//! included. Responses are not modeled: the upstream schemas belong to a
//! third party and change without notice, so JSON-returning operations
//! hand back `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One-way / return flag used by searches and passenger submission
///
/// Serializes to the literal `"A"` or `"R"` the API expects. Anything
/// outside that set is taken as `A`, matching the site's own behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnFlag {
    /// Outward leg / one-way ("A")
    #[default]
    Outward,
    /// Return leg / round trip ("R")
    Return,
}

impl ReturnFlag {
    /// Parse a flag, normalizing anything outside {"A", "R"} to `Outward`.
    pub fn parse(value: &str) -> Self {
        match value {
            "R" => ReturnFlag::Return,
            _ => ReturnFlag::Outward,
        }
    }

    /// The wire value: "A" or "R".
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnFlag::Outward => "A",
            ReturnFlag::Return => "R",
        }
    }
}

/// A selected offer within a solution, identified by the `xmlid` the
/// search response carries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    /// Offer identifier from the solution payload
    pub xmlid: String,
    /// Traveler type the offer applies to (e.g. "A" for adult)
    pub travelertype: String,
}

impl Selection {
    /// Create a new selection.
    pub fn new(xmlid: impl Into<String>, travelertype: impl Into<String>) -> Self {
        Self {
            xmlid: xmlid.into(),
            travelertype: travelertype.into(),
        }
    }
}

/// Body of the travels POST: turn a solution into travel legs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelsRequest {
    pub idsolution: String,
    pub selections: Vec<Selection>,
    pub revalidate: bool,
}

/// One element of the sales POST body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRequest {
    pub idtravel: String,
}

/// A single positional name/value traveler field
///
/// The server requires an ordered list of these, not a keyed map; see
/// [`crate::params::travelers`] for the ordering rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValue {
    pub name: String,
    pub value: String,
}

/// One traveler in the passengers PUT body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelerRecord {
    /// Zero-based position of the traveler in the submitted list
    pub id: usize,
    /// Ordered field list, template order preserved
    #[serde(rename = "travellerParameters")]
    pub traveller_parameters: Vec<NameValue>,
}

/// Body of the passengers PUT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengersRequest {
    pub arflag: String,
    pub validate: bool,
    pub travelers: Vec<TravelerRecord>,
}

/// One payment in the order POST body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub paymentid: String,
    /// Amount formatted to exactly two decimal places
    pub amount: String,
}

/// Body of the order POST
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub invoice: bool,
    /// Always null; the site sends it that way
    #[serde(rename = "orderParameterList")]
    pub order_parameter_list: Option<Value>,
    pub pin: String,
    pub payments: Vec<Payment>,
}
