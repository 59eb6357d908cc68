//! Emergency Guide Library
//!
//! Read-only reference procedures compiled into the crate, filterable by
//! category, priority and free-text term. Nothing here touches storage;
//! favorites live in user preferences keyed by guide id.

mod data;

use serde::{Deserialize, Serialize};

pub use data::GUIDES;

// ============================================================================
// TYPES
// ============================================================================

/// Guide grouping shown as dashboard sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuideCategory {
    /// Medical procedures
    FirstAid,
    /// Shelter construction
    Shelter,
    /// Disaster response protocols
    Protocols,
}

impl GuideCategory {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GuideCategory::FirstAid => "first-aid",
            GuideCategory::Shelter => "shelter",
            GuideCategory::Protocols => "protocols",
        }
    }

    /// Parse from string name
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "first-aid" => Some(GuideCategory::FirstAid),
            "shelter" => Some(GuideCategory::Shelter),
            "protocols" => Some(GuideCategory::Protocols),
            _ => None,
        }
    }
}

impl std::fmt::Display for GuideCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency ranking for triage-style filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuidePriority {
    /// Life-threatening situations
    Critical,
    /// Urgent but survivable
    High,
    /// Important preparation
    Medium,
    /// Background knowledge
    Low,
}

impl GuidePriority {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GuidePriority::Critical => "critical",
            GuidePriority::High => "high",
            GuidePriority::Medium => "medium",
            GuidePriority::Low => "low",
        }
    }

    /// Parse from string name
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Some(GuidePriority::Critical),
            "high" => Some(GuidePriority::High),
            "medium" => Some(GuidePriority::Medium),
            "low" => Some(GuidePriority::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for GuidePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reference procedure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    /// Stable identifier, e.g. "fa-001"
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Section the guide belongs to
    pub category: GuideCategory,
    /// Urgency ranking
    pub priority: GuidePriority,
    /// Reading time estimate, e.g. "3 min"
    pub time_to_read: &'static str,
    /// One-sentence description
    pub summary: &'static str,
    /// Ordered instructions
    pub steps: &'static [&'static str],
    /// Things to avoid
    pub warnings: &'static [&'static str],
    /// Equipment needed
    pub materials: &'static [&'static str],
    /// Search keywords
    pub tags: &'static [&'static str],
}

// ============================================================================
// FILTERING
// ============================================================================

/// Search criteria for the guide table
///
/// Unset fields match everything. The term matches title, summary or any
/// tag as a case-insensitive substring; steps and warnings are not scanned.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuideFilter<'a> {
    /// Restrict to one category
    pub category: Option<GuideCategory>,
    /// Free-text search term
    pub term: Option<&'a str>,
    /// Restrict to one priority
    pub priority: Option<GuidePriority>,
}

impl GuideFilter<'_> {
    /// Whether `guide` passes every set criterion
    pub fn matches(&self, guide: &Guide) -> bool {
        if let Some(category) = self.category {
            if guide.category != category {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if guide.priority != priority {
                return false;
            }
        }

        if let Some(term) = self.term {
            let term = term.to_lowercase();
            let hit = guide.title.to_lowercase().contains(&term)
                || guide.summary.to_lowercase().contains(&term)
                || guide
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        true
    }
}

/// All guides passing `filter`, in table order
pub fn search(filter: &GuideFilter<'_>) -> Vec<&'static Guide> {
    GUIDES.iter().filter(|guide| filter.matches(guide)).collect()
}

/// Look up a guide by its stable id
pub fn by_id(id: &str) -> Option<&'static Guide> {
    GUIDES.iter().find(|guide| guide.id == id)
}

// ============================================================================
// TESTS
// ============================================================================
