/// Previously submitted lines, unique, oldest first, walked with Up/Down.
#[derive(Debug, Clone, Default)]
pub struct RecallLog {
    entries: Vec<String>,
    // None = not recalling
    index: Option<usize>,
}

impl RecallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a submitted line (first occurrence only) and stop recalling.
    pub fn record(&mut self, line: &str) {
        if !self.entries.iter().any(|e| e == line) {
            self.entries.push(line.to_string());
        }
        self.index = None;
    }

    /// Step toward the oldest entry, sticking at the first one.
    /// `None` when there is nothing to recall.
    pub fn up(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let i = match self.index {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.index = Some(i);
        Some(self.entries[i].clone())
    }

    /// Step toward the newest entry. Past the newest the buffer empties and
    /// recall stops. `None` when not recalling.
    pub fn down(&mut self) -> Option<String> {
        let i = self.index?;
        if i + 1 >= self.entries.len() {
            self.index = None;
            Some(String::new())
        } else {
            self.index = Some(i + 1);
            Some(self.entries[i + 1].clone())
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_of(lines: &[&str]) -> RecallLog {
        let mut log = RecallLog::new();
        for l in lines {
            log.record(l);
        }
        log
    }

    #[test]
    fn test_record_dedupes_in_first_seen_order() {
        let log = log_of(&["ls", "help", "ls", "frobnicate", "frobnicate"]);
        assert_eq!(log.entries(), &["ls", "help", "frobnicate"]);
    }

    #[test]
    fn test_up_walks_back_and_clamps() {
        let mut log = log_of(&["a", "b", "c"]);
        assert_eq!(log.up().as_deref(), Some("c"));
        assert_eq!(log.up().as_deref(), Some("b"));
        assert_eq!(log.up().as_deref(), Some("a"));
        assert_eq!(log.up().as_deref(), Some("a"));
        assert_eq!(log.index(), Some(0));
    }

    #[test]
    fn test_down_past_newest_resets() {
        let mut log = log_of(&["a", "b"]);
        log.up();
        log.up();
        assert_eq!(log.down().as_deref(), Some("b"));
        assert_eq!(log.down().as_deref(), Some(""));
        assert_eq!(log.index(), None);
        assert_eq!(log.down(), None);
    }

    #[test]
    fn test_empty_log_does_nothing() {
        let mut log = RecallLog::new();
        assert_eq!(log.up(), None);
        assert_eq!(log.down(), None);
    }

    #[test]
    fn test_record_resets_index() {
        let mut log = log_of(&["a", "b"]);
        log.up();
        log.record("a");
        assert_eq!(log.index(), None);
        assert_eq!(log.up().as_deref(), Some("b"));
    }
}
