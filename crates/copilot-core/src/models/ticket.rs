use serde::{Deserialize, Serialize};

/// Ticket category as recorded by the ticketing system.
///
/// Serializes to the ticketing labels; deserializes any label through
/// [`TicketCategory::parse_lenient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum TicketCategory {
    #[serde(rename = "Network Issue")]
    Network,
    #[serde(rename = "Hardware Issue")]
    Hardware,
    #[serde(rename = "Software Issue")]
    Software,
    #[serde(rename = "Security Issue")]
    Security,
    #[serde(rename = "Performance Issue")]
    Performance,
    Other,
}

impl From<String> for TicketCategory {
    fn from(label: String) -> Self {
        Self::parse_lenient(&label)
    }
}

impl TicketCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "Network Issue",
            Self::Hardware => "Hardware Issue",
            Self::Software => "Software Issue",
            Self::Security => "Security Issue",
            Self::Performance => "Performance Issue",
            Self::Other => "Other",
        }
    }

    /// Parse a category label leniently: exact labels first, then keyword containment.
    pub fn parse_lenient(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        [
            Self::Network,
            Self::Hardware,
            Self::Software,
            Self::Security,
            Self::Performance,
        ]
        .into_iter()
        .find(|c| {
            let name = c.as_str().to_lowercase();
            lower == name || lower.contains(name.trim_end_matches(" issue"))
        })
        .unwrap_or(Self::Other)
    }

    /// The fallback template family this category maps to.
    pub fn family(&self) -> CategoryFamily {
        match self {
            Self::Network => CategoryFamily::Network,
            Self::Hardware => CategoryFamily::Hardware,
            Self::Software => CategoryFamily::Software,
            _ => CategoryFamily::Other,
        }
    }
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse grouping used to pick rule-based solution templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFamily {
    Network,
    Hardware,
    Software,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            "critical" => Self::Critical,
            _ => Self::Medium,
        }
    }
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ticket fields the retrieval pipeline reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: TicketCategory,
    #[serde(default)]
    pub priority: TicketPriority,
}

impl Ticket {
    /// Retrieval query: title, description and category label separated by spaces.
    pub fn retrieval_query(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.category)
    }

    /// A ticket carries usable context when its title or description is non-blank.
    pub fn has_context(&self) -> bool {
        !self.title.trim().is_empty() || !self.description.trim().is_empty()
    }
}
