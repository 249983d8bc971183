use viewer_core::HistoryEntry;

/// One slot of the session history: the location path plus the payload
/// recorded when the slot was created by an in-app navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    path: String,
    payload: Option<HistoryEntry>,
}

/// In-app model of the browser session history: a list of slots and a
/// cursor. Back and forward move the cursor and surface the new current
/// slot's payload; they never create slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHistory {
    slots: Vec<Slot>,
    cursor: usize,
}

impl SessionHistory {
    /// The initial-load slot carries no payload, whatever path it was
    /// reached under.
    pub fn new(start_path: impl Into<String>) -> Self {
        Self {
            slots: vec![Slot {
                path: start_path.into(),
                payload: None,
            }],
            cursor: 0,
        }
    }

    /// Records an in-app navigation: drops the forward tail and appends a
    /// slot with the given payload.
    pub fn push(&mut self, entry: HistoryEntry, path: impl Into<String>) {
        self.slots.truncate(self.cursor + 1);
        self.slots.push(Slot {
            path: path.into(),
            payload: Some(entry),
        });
        self.cursor = self.slots.len() - 1;
    }

    /// Moves one slot back and returns its payload; `None` when already at
    /// the oldest slot.
    pub fn back(&mut self) -> Option<Option<HistoryEntry>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.slots[self.cursor].payload.clone())
    }

    /// Moves one slot forward and returns its payload; `None` when already
    /// at the newest slot.
    pub fn forward(&mut self) -> Option<Option<HistoryEntry>> {
        if self.cursor + 1 >= self.slots.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.slots[self.cursor].payload.clone())
    }

    /// Location path of the current slot.
    pub fn current_path(&self) -> &str {
        &self.slots[self.cursor].path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(page: &str) -> HistoryEntry {
        HistoryEntry {
            page: page.to_string(),
        }
    }

    #[test]
    fn initial_slot_has_no_payload() {
        let mut history = SessionHistory::new("/abc");

        assert_eq!(history.current_path(), "/abc");
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn back_returns_previous_slot_payload() {
        let mut history = SessionHistory::new("/");
        history.push(entry("a"), "a");
        history.push(entry("b"), "b");

        assert_eq!(history.back(), Some(Some(entry("a"))));
        assert_eq!(history.current_path(), "a");
        assert_eq!(history.back(), Some(None));
        assert_eq!(history.current_path(), "/");
        assert_eq!(history.back(), None);
    }

    #[test]
    fn forward_replays_the_tail() {
        let mut history = SessionHistory::new("/");
        history.push(entry("a"), "a");
        let _ = history.back();

        assert_eq!(history.forward(), Some(Some(entry("a"))));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn push_drops_the_forward_tail() {
        let mut history = SessionHistory::new("/");
        history.push(entry("a"), "a");
        history.push(entry("b"), "b");
        let _ = history.back();
        let _ = history.back();

        history.push(entry("c"), "c");

        assert_eq!(history.forward(), None);
        assert_eq!(history.current_path(), "c");
        assert_eq!(history.back(), Some(None));
    }
}
