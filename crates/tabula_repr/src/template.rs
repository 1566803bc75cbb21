//! Style templates with `%s` insertion points.

use std::fmt;

use serde::Deserialize;
use smallvec::SmallVec;

/// Insertion point marker.
const SLOT: &str = "%s";

/// A style string such as `{%s}` or `[%s] = %s`.
///
/// Slots are filled left to right. Missing arguments fill as empty text and
/// surplus arguments are ignored, so a user-supplied style can never make
/// formatting fail.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct Template {
    source: Box<str>,
    /// Literal text around the slots; always one more than the slot count.
    segments: SmallVec<[Box<str>; 3]>,
}

impl Template {
    pub fn new(source: &str) -> Self {
        Template {
            source: source.into(),
            segments: source.split(SLOT).map(Box::from).collect(),
        }
    }

    /// Number of insertion points.
    #[inline]
    pub fn slots(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Substitute `args` into the slots.
    pub fn fill(&self, args: &[&str]) -> String {
        let capacity = self.source.len() + args.iter().map(|a| a.len()).sum::<usize>();
        let mut out = String::with_capacity(capacity);
        let mut segments = self.segments.iter();
        if let Some(head) = segments.next() {
            out.push_str(head);
        }
        for (i, segment) in segments.enumerate() {
            out.push_str(args.get(i).copied().unwrap_or(""));
            out.push_str(segment);
        }
        out
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::new(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Template::new(&source)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Template({:?})", self.source)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn single_slot() {
        let t = Template::new("{%s}");
        assert_eq!(t.slots(), 1);
        assert_eq!(t.fill(&["a, b"]), "{a, b}");
    }

    #[test]
    fn two_slots_in_order() {
        let t = Template::new("[%s] = %s");
        assert_eq!(t.slots(), 2);
        assert_eq!(t.fill(&["1", "\"x\""]), "[1] = \"x\"");
    }

    #[test]
    fn missing_and_surplus_args() {
        let t = Template::new("%s:%s");
        assert_eq!(t.fill(&["a"]), "a:");
        assert_eq!(t.fill(&["a", "b", "c"]), "a:b");
    }

    #[test]
    fn no_slot_is_literal() {
        let t = Template::new("<hidden>");
        assert_eq!(t.slots(), 0);
        assert_eq!(t.fill(&["ignored"]), "<hidden>");
    }

    #[test]
    fn display_round_trips_source() {
        assert_eq!(Template::from("(%s)").to_string(), "(%s)");
    }
}
