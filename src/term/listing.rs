use crate::lang::{Integer, Scanner};
use std::collections::BTreeMap;

/// ## Program listing
///
/// The lines typed at the prompt, kept sorted by line number.
/// A line is stored exactly as entered.

#[derive(Debug, Default, Clone)]
pub struct Listing {
    lines: BTreeMap<Integer, String>,
}

impl Listing {
    pub fn new() -> Listing {
        Listing::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Stores a numbered line, or deletes it when only the number was
    /// typed. Returns `false` when `line` does not start with a line number.
    pub fn enter(&mut self, line: &str) -> bool {
        let line = line.trim();
        let mut scanner = Scanner::new(line);
        let number = match scanner.number() {
            Some(number) => number,
            None => return false,
        };
        if line[scanner.column().end..].trim().is_empty() {
            self.lines.remove(&number);
        } else {
            self.lines.insert(number, line.to_string());
        }
        true
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.values().map(String::as_str)
    }

    /// The whole listing as one program text.
    pub fn source(&self) -> String {
        let mut s = String::new();
        for line in self.lines() {
            s.push_str(line);
            s.push('\n');
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_sorted() {
        let mut listing = Listing::new();
        assert!(listing.enter("20 print 2"));
        assert!(listing.enter("10 print 1  "));
        assert_eq!(listing.source(), "10 print 1\n20 print 2\n");
    }

    #[test]
    fn test_replace_and_delete() {
        let mut listing = Listing::new();
        listing.enter("10 print 1");
        listing.enter("10 print 9");
        listing.enter("20 end");
        assert_eq!(listing.lines().collect::<Vec<_>>(), ["10 print 9", "20 end"]);
        assert!(listing.enter("10"));
        assert_eq!(listing.source(), "20 end\n");
    }

    #[test]
    fn test_comment_line_is_stored() {
        let mut listing = Listing::new();
        listing.enter("10 print 1");
        assert!(listing.enter("10 rem comment"));
        assert_eq!(listing.source(), "10 rem comment\n");
        assert!(listing.enter("10   "));
        assert!(listing.is_empty());
    }

    #[test]
    fn test_commands_are_not_lines() {
        let mut listing = Listing::new();
        assert!(!listing.enter("list"));
        assert!(!listing.enter("1234567 print"));
        assert!(listing.is_empty());
    }
}
