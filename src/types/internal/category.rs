use std::fmt;

/// The closed set of event categories. The database column stores the
/// display label; every boundary parses back into this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Arts,
    Cultural,
    Technical,
    Science,
    Sports,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Arts,
        EventCategory::Cultural,
        EventCategory::Technical,
        EventCategory::Science,
        EventCategory::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Arts => "Arts",
            EventCategory::Cultural => "Cultural",
            EventCategory::Technical => "Technical",
            EventCategory::Science => "Science",
            EventCategory::Sports => "Sports",
        }
    }

    /// Parse a category label. Only exact members of the closed set match.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == raw)
    }

    /// Map a legacy free-text label onto the closed set. Labels the mapping
    /// does not know about fall back to Cultural, matching the one-time
    /// normalization migration.
    pub fn from_legacy(raw: &str) -> Self {
        if let Some(category) = Self::parse(raw) {
            return category;
        }
        match raw {
            "Workshop" | "Conference" | "Pitch Event" | "Bootcamp" | "Hackathon" | "Clinic"
            | "Education" => EventCategory::Technical,
            "Talks" | "Forum" => EventCategory::Science,
            _ => EventCategory::Cultural,
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|c| c.as_str().to_string()).collect()
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
