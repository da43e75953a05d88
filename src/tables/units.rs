//! Secondary-unit designators.
//!
//! Unlike street types these are not canonicalized: the designator is kept as
//! written (minus punctuation), so the table is a set of regex fragments
//! rather than a `Lookup`.

/// Designators that take a value (`Apt 4`, `Ste105`, `Lt 42`).
pub(crate) const NUMBERED: &[&str] = &[
    r"su?i?te",
    POSTAL_BOX,
    r"(?:ap|dep)(?:ar)?t(?:me?nt)?",
    r"ro*m",
    r"flo*r?",
    r"uni?t",
    r"bu?i?ldi?n?g",
    r"ha?nga?r",
    r"lo?t",
    r"pier",
    r"slip",
    r"spa?ce?",
    r"stop",
    r"tra?i?le?r",
    r"box",
];

/// Designators that stand alone (`Lobby`, `BSMT`, `Rear`).
pub(crate) const UNNUMBERED: &[&str] = &[
    r"ba?se?me?n?t",
    r"fro?nt",
    r"lo?bby",
    r"lowe?r",
    r"off?i?ce?",
    r"pe?n?t?ho?u?s?e?",
    r"rear",
    r"side",
    r"uppe?r",
];

/// Postal-box designators: `PO Box`, `P.O. box`, `POBox`, `Post office Box`,
/// `PMB`.
pub(crate) const POSTAL_BOX: &str = r"p\W*(?:[om]|ost\s*office)\W*b(?:ox)?";

/// `(?:a|b|...)` over a designator list.
pub(crate) fn alternation(designators: &[&str]) -> String {
    format!("(?:{})", designators.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn whole(pattern: &str) -> Regex {
        Regex::new(&format!(r"(?i)^{pattern}$")).unwrap()
    }

    #[test]
    fn numbered_designators() {
        let re = whole(&alternation(NUMBERED));
        for word in ["Suite", "Ste", "Apt", "apartment", "Dept", "Rm", "Fl", "Floor", "Unit", "Bldg", "Lt", "Lot"] {
            assert!(re.is_match(word), "{word} should be a numbered designator");
        }
        assert!(re.is_match("P.O. Box"));
        assert!(!re.is_match("Lobby"));
    }

    #[test]
    fn unnumbered_designators() {
        let re = whole(&alternation(UNNUMBERED));
        for word in ["BSMT", "Basement", "lobby", "Rear", "PH", "Penthouse", "Upper", "Frnt"] {
            assert!(re.is_match(word), "{word} should be an unnumbered designator");
        }
    }

    #[test]
    fn postal_box_variants() {
        let re = whole(POSTAL_BOX);
        for word in ["PO Box", "P.O. box", "POBox", "Post office Box", "PMB"] {
            assert!(re.is_match(word), "{word} should be a postal box designator");
        }
        assert!(!re.is_match("Pine"));
    }
}
