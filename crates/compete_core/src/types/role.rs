//! Audience lens for narrative output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RoleError;

/// The audience an analysis narrative is written for.
///
/// A role view only changes wording and emphasis. No numeric result
/// depends on it.
///
/// # Examples
///
/// ```
/// use compete_core::types::RoleView;
///
/// let role: RoleView = "Manufacturing".parse().unwrap();
/// assert_eq!(role, RoleView::Manufacturing);
/// assert_eq!(role.to_string(), "manufacturing");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleView {
    /// Sellers: margin, payback, price positioning
    #[default]
    Retail,
    /// Makers: design, engineering, production
    Manufacturing,
}

impl RoleView {
    /// Every role view, in display order.
    pub const ALL: [RoleView; 2] = [RoleView::Retail, RoleView::Manufacturing];

    /// Lower-case tag used in config files and fingerprints.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleView::Retail => "retail",
            RoleView::Manufacturing => "manufacturing",
        }
    }
}

impl FromStr for RoleView {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "retail" => Ok(RoleView::Retail),
            "manufacturing" => Ok(RoleView::Manufacturing),
            _ => Err(RoleError::UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for RoleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
