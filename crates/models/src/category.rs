use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Organization category. Each category owns an independent record list and
/// id namespace; ids are unique within a category, not globally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Orphanage,
    #[serde(rename = "oldage")]
    OldageHome,
}

impl Category {
    /// Path token as it appears in request URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Orphanage => "orphanage",
            Category::OldageHome => "oldage",
        }
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orphanage" => Ok(Category::Orphanage),
            "oldage" => Ok(Category::OldageHome),
            other => Err(ModelError::Validation(format!(
                "invalid organization type: {other}"
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_resolve() {
        assert_eq!("orphanage".parse::<Category>().unwrap(), Category::Orphanage);
        assert_eq!("oldage".parse::<Category>().unwrap(), Category::OldageHome);
    }

    #[test]
    fn unknown_token_rejected() {
        assert!("shelter".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
        // Tokens are case-sensitive, matching the route contract.
        assert!("Orphanage".parse::<Category>().is_err());
    }
}
