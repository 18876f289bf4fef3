use serde::Serialize;

/// The record collections of a workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sheet {
    Notes,
    BucketList,
    Calendar,
    Moods,
    Log,
}

impl Sheet {
    /// Sheets holding shared content (everything but the audit log).
    pub const CONTENT: [Sheet; 4] = [
        Sheet::Notes,
        Sheet::BucketList,
        Sheet::Calendar,
        Sheet::Moods,
    ];

    pub const ALL: [Sheet; 5] = [
        Sheet::Notes,
        Sheet::BucketList,
        Sheet::Calendar,
        Sheet::Moods,
        Sheet::Log,
    ];

    /// Tab name, also used as the CSV file stem.
    pub fn name(&self) -> &'static str {
        match self {
            Sheet::Notes => "Notes",
            Sheet::BucketList => "BucketList",
            Sheet::Calendar => "Calendar",
            Sheet::Moods => "Moods",
            Sheet::Log => "Log",
        }
    }

    /// Header row, in the order cells are written.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Sheet::Notes => &["Name", "Message", "Timestamp"],
            Sheet::BucketList => &["Item", "Name", "Added", "Done"],
            Sheet::Calendar => &[
                "Date",
                "Title",
                "Details",
                "Packing",
                "Created",
                "Completed",
                "CompletionNote",
            ],
            Sheet::Moods => &["Name", "Mood", "Note", "Timestamp"],
            Sheet::Log => &["Date", "Operation", "Target", "Message"],
        }
    }

    /// Column holding the moment a row was added, used by the recency feed.
    pub fn moment_field(&self) -> Option<&'static str> {
        match self {
            Sheet::Notes | Sheet::Moods => Some("Timestamp"),
            Sheet::BucketList => Some("Added"),
            Sheet::Calendar => Some("Created"),
            Sheet::Log => None,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name())
    }

    /// Accepts tab names and a few short aliases, case-insensitively.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "notes" | "note" => Some(Sheet::Notes),
            "bucketlist" | "bucket" => Some(Sheet::BucketList),
            "calendar" | "event" | "events" => Some(Sheet::Calendar),
            "moods" | "mood" => Some(Sheet::Moods),
            "log" => Some(Sheet::Log),
            _ => None,
        }
    }
}
