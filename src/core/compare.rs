//! Version identifier ordering.
//!
//! Determines which version of a secret is "latest". Identifiers are
//! compared as alternating non-numeric/numeric runs, with numeric runs
//! compared by value, so `v2` sorts before `v10`.

use std::cmp::Ordering;

/// One run of a version identifier: all digits or no digits.
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Splits an identifier into alternating digit/non-digit runs.
struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let split = self
            .rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(split);
        self.rest = rest;
        Some(if digits {
            Run::Digits(run)
        } else {
            Run::Text(run)
        })
    }
}

/// Compare two numeric runs by value.
///
/// Leading zeros are stripped and magnitudes compared by digit count, so
/// arbitrarily large numbers compare correctly without overflow.
fn digits_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two non-numeric runs, ignoring ASCII case.
fn text_cmp(a: &str, b: &str) -> Ordering {
    let lhs = a.bytes().map(|c| c.to_ascii_lowercase());
    let rhs = b.bytes().map(|c| c.to_ascii_lowercase());
    lhs.cmp(rhs)
}

fn run_cmp(a: &Run<'_>, b: &Run<'_>) -> Ordering {
    match (a, b) {
        (Run::Digits(x), Run::Digits(y)) => digits_cmp(x, y),
        (Run::Text(x), Run::Text(y)) => text_cmp(x, y),
        // A numeric run sorts before a non-numeric run.
        (Run::Digits(_), Run::Text(_)) => Ordering::Less,
        (Run::Text(_), Run::Digits(_)) => Ordering::Greater,
    }
}

/// Compare two version identifiers.
///
/// Numeric-aware lexicographic comparison: the identifiers are split into
/// alternating non-numeric/numeric runs; numeric runs compare by numeric
/// value, non-numeric runs compare case-insensitively, and a shorter
/// identifier that is a prefix of a longer one sorts first. Identifiers
/// that are equal under this view fall back to a plain string comparison
/// so the ordering is total.
///
/// This is deliberately NOT semantic versioning: there is no
/// major.minor.patch decomposition and no pre-release precedence
/// (`1.0.0-rc1` sorts after `1.0.0`). Changing this would silently alter
/// "latest" resolution for existing data.
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut lhs = Runs { rest: a };
    let mut rhs = Runs { rest: b };

    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match run_cmp(&x, &y) {
                Ordering::Equal => continue,
                ord => return ord,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_runs_compare_by_value() {
        assert_eq!(compare("v1", "v2"), Ordering::Less);
        assert_eq!(compare("v2", "v10"), Ordering::Less);
        assert_eq!(compare("v10", "v9"), Ordering::Greater);
        assert_eq!(compare("v1.2", "v1.10"), Ordering::Less);
    }

    #[test]
    fn test_equal_identifiers() {
        assert_eq!(compare("v1.0", "v1.0"), Ordering::Equal);
        assert_eq!(compare("", ""), Ordering::Equal);
    }

    #[test]
    fn test_case_insensitive_text_runs() {
        assert_eq!(compare("V2", "v10"), Ordering::Less);
        assert_eq!(compare("release-2", "RELEASE-10"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare("v1", "v1.1"), Ordering::Less);
        assert_eq!(compare("v1.0.0", "v1.0"), Ordering::Greater);
    }

    #[test]
    fn test_leading_zeros() {
        // Equal value; the full-string tie-break keeps the order total.
        assert_eq!(compare("v01", "v1"), Ordering::Less);
        assert_eq!(compare("v001.2", "v1.10"), Ordering::Less);
        assert_eq!(compare("v010", "v9"), Ordering::Greater);
    }

    #[test]
    fn test_digit_run_before_text_run() {
        assert_eq!(compare("v1", "va"), Ordering::Less);
        assert_eq!(compare("1", "a"), Ordering::Less);
    }

    #[test]
    fn test_not_semver() {
        // Pre-release tags have no special precedence under this ordering.
        assert_eq!(compare("1.0.0-rc1", "1.0.0"), Ordering::Greater);
    }

    #[test]
    fn test_max_resolves_latest() {
        let mut ids = vec!["v10", "v1", "v2"];
        ids.sort_by(|a, b| compare(a, b));
        assert_eq!(ids, vec!["v1", "v2", "v10"]);
    }
}
