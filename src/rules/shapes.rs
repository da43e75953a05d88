//! Street shapes: the `prefix street type suffix` part of a rule.
//!
//! Every layout in `rules/mod.rs` is expanded once per shape, in the order of
//! [`Shape::ALL`]; the first shape that lets the whole rule match wins.

use super::slots::{Slots, TypeSearch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// Numbered grid street with a required post-directional: `S 400 E`,
    /// `County Hwy 60E`.
    Grid,
    /// Street name followed by a recognized type: `N Gravenstein Hwy`.
    Typed,
    /// Shortest street name that lets the rest of the rule match; type and
    /// post-directional optional: `Broadway`, `State Highway 116`.
    Loose,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Grid, Shape::Typed, Shape::Loose];
    /// Shapes that leave no free-text street name unanchored, for layouts
    /// with nothing after the street to stop a loose name.
    pub const ANCHORED: [Shape; 2] = [Shape::Grid, Shape::Typed];

    pub fn tag(self) -> &'static str {
        match self {
            Shape::Grid => "grid",
            Shape::Typed => "typed",
            Shape::Loose => "loose",
        }
    }

    /// Captures `prefix`, `street`, `street_type` and `suffix`.
    pub fn pattern(self, slots: &Slots) -> String {
        let d = &slots.direction;
        let t = &slots.street_type;

        match self {
            Shape::Grid => format!(r"(?:(?P<prefix>{d})\W+)?(?P<street>[^,]*\d)[^\w,]*(?P<suffix>{d})\b"),
            Shape::Typed => {
                let name = match slots.type_search {
                    TypeSearch::Rightmost => r"[^,]+",
                    TypeSearch::Leftmost => r"[^,]+?",
                };
                format!(
                    r"(?:(?P<prefix>{d})\W+)?(?P<street>{name})[^\w,]+(?P<street_type>{t})\b(?:[^\w,]+(?P<suffix>{d})\b)?"
                )
            }
            Shape::Loose => format!(
                r"(?:(?P<prefix>{d})\W+)?(?P<street>[^,]+?)(?:[^\w,]+(?P<street_type>{t})\b)?(?:[^\w,]+(?P<suffix>{d})\b)?"
            ),
        }
    }
}
