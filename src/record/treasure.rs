//! Treasure record definitions

/// Width of the username field, terminator included
pub const USERNAME_LEN: usize = 50;

/// Width of the clue field, terminator included
pub const CLUE_LEN: usize = 256;

/// A single treasure entry as stored in a hunt
#[derive(Debug, Clone, PartialEq)]
pub struct Treasure {
    /// Id unique within the hunt at the time it was assigned
    pub id: i32,
    /// Owner of the entry (at most `USERNAME_LEN - 1` bytes)
    pub username: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Free-form hint (at most `CLUE_LEN - 1` bytes)
    pub clue: String,
    /// Point value, sign unchecked
    pub value: i32,
}

/// Everything a user supplies for a new treasure; the store assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct TreasureDraft {
    pub username: String,
    pub latitude: f64,
    pub longitude: f64,
    pub clue: String,
    pub value: i32,
}

impl TreasureDraft {
    /// Attach an id, truncating text fields to what the record layout holds
    pub fn into_treasure(self, id: i32) -> Treasure {
        Treasure {
            id,
            username: truncate_to(self.username, USERNAME_LEN - 1),
            latitude: self.latitude,
            longitude: self.longitude,
            clue: truncate_to(self.clue, CLUE_LEN - 1),
            value: self.value,
        }
    }
}

/// Cut `text` to at most `max` bytes without splitting a UTF-8 sequence.
/// Anything after an embedded NUL is dropped since it could not be read back.
pub(crate) fn truncate_to(mut text: String, max: usize) -> String {
    if let Some(nul) = text.find('\0') {
        text.truncate(nul);
    }
    if text.len() > max {
        let mut end = max;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}
