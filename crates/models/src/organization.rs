use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// One organization entry as persisted and served.
///
/// `fund_amount` is currency-formatted text (e.g. `"₹1,000"`). It is stored
/// verbatim; numeric interpretation happens only when sorting, via
/// [`Organization::funding_value`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    pub id: u32,
    #[serde(alias = "name")]
    pub org_name: String,
    pub fund_amount: String,
}

/// Caller-suppliable fields for create requests.
///
/// Bounded schema: unknown payload fields are ignored, and a caller-supplied
/// `id` never survives into the stored record (the store assigns ids).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OrganizationInput {
    #[serde(alias = "name")]
    pub org_name: String,
    #[serde(default)]
    pub fund_amount: String,
}

impl OrganizationInput {
    pub fn into_record(self, id: u32) -> Organization {
        Organization {
            id,
            org_name: self.org_name,
            fund_amount: self.fund_amount,
        }
    }
}

impl Organization {
    /// Numeric funding value, obtained by stripping every non-digit
    /// character (currency symbol, thousands separators) and parsing the
    /// remainder as an integer.
    pub fn funding_value(&self) -> Result<i64, ModelError> {
        parse_funding(&self.fund_amount)
    }
}

/// Reduce a currency-formatted amount to its integer value.
pub fn parse_funding(amount: &str) -> Result<i64, ModelError> {
    let digits: String = amount.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(ModelError::Parse(format!(
            "funding amount has no digits: {amount:?}"
        )));
    }
    digits
        .parse::<i64>()
        .map_err(|e| ModelError::Parse(format!("funding amount {amount:?}: {e}")))
}
