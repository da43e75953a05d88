//! Grammar rule sets.
//!
//! Each country module exposes `rules::get(&Tables)` (its ordered rule list)
//! and `PIPELINE` (its normalization stages). Both countries share the
//! layouts below and differ only in their [`CountrySlots`] and stages.
//!
//! Rule order, most specific first:
//!
//! 1. intersection (`Mission St and Valencia St`)
//! 2. postal box (`PO Box 3094 Collierville TN 38027`)
//! 3. civic layouts, longest tail first: city + state + postal code, city +
//!    state, postal code, nothing
//! 4. unit before the civic number (`#42 233 S Wacker Dr`)
//! 5. no civic number (`Pascoe Road Sooke BC`)
//!
//! Each layout is expanded once per street [`Shape`], so a layout's grid and
//! typed readings are tried before its loose one.

pub(crate) mod ca;
pub(crate) mod normalize;
pub(crate) mod shapes;
pub(crate) mod slots;
pub(crate) mod us;

pub(crate) use normalize::{Draft, Stage};

use crate::engine::BucketMask;
use crate::error::Result;
use crate::tables::Tables;
use crate::{Rule, RuleFamily};
use shapes::Shape;
use slots::{CountrySlots, Slots};

/// One rule template: a fixed head, a street shape, a fixed tail.
struct Layout {
    name: &'static str,
    family: RuleFamily,
    buckets: BucketMask,
    head: String,
    tail: String,
    shapes: &'static [Shape],
}

/// Build the full ordered rule list for one country.
pub(crate) fn build(tables: &Tables, country: CountrySlots) -> Result<Vec<Rule>> {
    let slots = Slots::new(tables, country);
    let mut rules = vec![intersection(&slots)?, postal_box(&slots)?];

    for layout in layouts(&slots) {
        for &shape in layout.shapes {
            rules.push(rule! {
                name: format!("{} [{}]", layout.name, shape.tag()),
                family: layout.family,
                buckets: layout.buckets,
                pattern: format!("{}{}{}", layout.head, shape.pattern(&slots), layout.tail),
            }?);
        }
    }

    Ok(rules)
}

/// Two streets joined by `and`/`&`, each with an optional type; the second
/// type may be plural. The first street may not open with a bare civic
/// number, though ordinals (`5th`) are fine.
fn intersection(slots: &Slots) -> Result<Rule> {
    let Slots { street_type: t, city, state, .. } = slots;

    rule!(
        name: "intersection",
        family: RuleFamily::Intersection,
        buckets: BucketMask::CONJUNCTION,
        pattern: format!(
            concat!(
                r"(?P<street1>[^\d,&\s][^,&]*?|\d+(?:st|nd|rd|th)\b[^,&]*?)(?:\W+(?P<type1>{t})\b)?",
                r"\s+(?:and|&)\s+",
                r"(?P<street2>[^,&]+?)(?:\W+(?P<type2>{t}s?)\b)?",
                r"(?:\W+{city}\W+{state})?",
            ),
            t = t,
            city = city,
            state = state,
        ),
    )
}

/// Postal-box designator and box number, then an optional place.
fn postal_box(slots: &Slots) -> Result<Rule> {
    let Slots { postal_box, city, state, postal_code, .. } = slots;

    rule!(
        name: "postal box",
        family: RuleFamily::PostalBox,
        buckets: BucketMask::HAS_DIGITS | BucketMask::BOX_LIKE,
        pattern: format!(
            r"{postal_box}\W*(?P<sec_unit_num>[\w-]+)(?:\W+{city}\W+{state})?(?:\W+{postal_code})?"
        ),
    )
}

fn layouts(slots: &Slots) -> Vec<Layout> {
    let Slots { number, fraction, unit, city, state, postal_code, .. } = slots;

    let civic = format!(r"{number}\W*{fraction}");
    let unit = format!(r"(?:\W+{unit})?");
    let place = format!(r"\W+{city}\W+{state}");
    let postal = format!(r"\W+{postal_code}");

    let civic_layout = |name, tail: String| Layout {
        name,
        family: RuleFamily::Civic,
        buckets: BucketMask::HAS_DIGITS,
        head: civic.clone(),
        tail: format!("{unit}{tail}"),
        shapes: &Shape::ALL,
    };

    vec![
        civic_layout("number street city state postal", format!("{place}{postal}")),
        civic_layout("number street city state", place.clone()),
        civic_layout("number street postal", postal.clone()),
        civic_layout("number street", String::new()),
        Layout {
            name: "unit number street",
            family: RuleFamily::UnitFirst,
            buckets: BucketMask::HAS_DIGITS,
            head: format!(r"{}\W+{civic}", slots.unit),
            tail: format!("(?:{place})?(?:{postal})?"),
            shapes: &Shape::ALL,
        },
        Layout {
            name: "street city state",
            family: RuleFamily::StreetOnly,
            buckets: BucketMask::empty(),
            head: String::new(),
            tail: format!("{unit}{place}(?:{postal})?"),
            shapes: &Shape::ALL,
        },
        Layout {
            name: "street",
            family: RuleFamily::StreetOnly,
            buckets: BucketMask::empty(),
            head: String::new(),
            tail: format!("{unit}(?:{postal})?"),
            shapes: &Shape::ANCHORED,
        },
    ]
}
