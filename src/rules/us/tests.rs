use crate::api::{AddressParser, Country};
use crate::record::{ParsedLocation, PostalCode};
use assert_matches::assert_matches;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static PARSER: Lazy<AddressParser> = Lazy::new(|| AddressParser::for_country(Country::UnitedStates).unwrap());

fn expected(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
    pairs.iter().map(|&(k, v)| (k, v.to_string())).collect()
}

fn check(cases: &[(&str, &[(&'static str, &str)])]) {
    for &(input, fields) in cases {
        let parsed = PARSER.parse_location(input);
        assert_eq!(parsed.fields(), expected(fields), "{input} was not parsed correctly");
    }
}

#[test]
fn street_and_postal_code() {
    check(&[
        ("1005 Gravenstein Hwy 95472", &[("number", "1005"), ("street", "Gravenstein"), ("type", "Hwy"), ("zip", "95472")]),
        ("1005 Gravenstein Hwy, 95472", &[("number", "1005"), ("street", "Gravenstein"), ("type", "Hwy"), ("zip", "95472")]),
        (
            "1005 Gravenstein Hwy N, 95472",
            &[("number", "1005"), ("street", "Gravenstein"), ("type", "Hwy"), ("suffix", "N"), ("zip", "95472")],
        ),
        (
            "1005 Gravenstein Highway North, 95472",
            &[("number", "1005"), ("street", "Gravenstein"), ("type", "Hwy"), ("suffix", "N"), ("zip", "95472")],
        ),
    ]);
}

#[test]
fn street_city_and_state() {
    check(&[
        (
            "1005 N Gravenstein Highway, Sebastopol, CA",
            &[("number", "1005"), ("prefix", "N"), ("street", "Gravenstein"), ("type", "Hwy"), ("city", "Sebastopol"), ("state", "CA")],
        ),
        (
            "1005 N Gravenstein Highway, Sebastopol, CA, 95472",
            &[
                ("number", "1005"),
                ("prefix", "N"),
                ("street", "Gravenstein"),
                ("type", "Hwy"),
                ("city", "Sebastopol"),
                ("state", "CA"),
                ("zip", "95472"),
            ],
        ),
        (
            "1005 N Gravenstein Highway Sebastopol CA 95472",
            &[
                ("number", "1005"),
                ("prefix", "N"),
                ("street", "Gravenstein"),
                ("type", "Hwy"),
                ("city", "Sebastopol"),
                ("state", "CA"),
                ("zip", "95472"),
            ],
        ),
        (
            "1005 Gravenstein Hwy N Sebastopol CA",
            &[("number", "1005"), ("street", "Gravenstein"), ("type", "Hwy"), ("suffix", "N"), ("city", "Sebastopol"), ("state", "CA")],
        ),
        (
            "1005 Gravenstein Hwy N, Sebastopol CA",
            &[("number", "1005"), ("street", "Gravenstein"), ("type", "Hwy"), ("suffix", "N"), ("city", "Sebastopol"), ("state", "CA")],
        ),
        (
            "1005 Gravenstein Hwy Sebastopol CA",
            &[("number", "1005"), ("street", "Gravenstein"), ("type", "Hwy"), ("city", "Sebastopol"), ("state", "CA")],
        ),
        (
            "115 Broadway San Francisco CA",
            &[("number", "115"), ("street", "Broadway"), ("city", "San Francisco"), ("state", "CA")],
        ),
        (
            "7800 Mill Station Rd, Sebastopol, CA 95472",
            &[
                ("number", "7800"),
                ("street", "Mill Station"),
                ("type", "Rd"),
                ("city", "Sebastopol"),
                ("state", "CA"),
                ("zip", "95472"),
            ],
        ),
        (
            "7800 Mill Station Rd Sebastopol CA 95472",
            &[
                ("number", "7800"),
                ("street", "Mill Station"),
                ("type", "Rd"),
                ("city", "Sebastopol"),
                ("state", "CA"),
                ("zip", "95472"),
            ],
        ),
        (
            "1005 State Highway 116 Sebastopol CA 95472",
            &[("number", "1005"), ("street", "State Highway 116"), ("city", "Sebastopol"), ("state", "CA"), ("zip", "95472")],
        ),
        (
            "1600 Pennsylvania Ave. Washington DC",
            &[("number", "1600"), ("street", "Pennsylvania"), ("type", "Ave"), ("city", "Washington"), ("state", "DC")],
        ),
        (
            "1600 Pennsylvania Avenue Washington DC",
            &[("number", "1600"), ("street", "Pennsylvania"), ("type", "Ave"), ("city", "Washington"), ("state", "DC")],
        ),
        (
            "100 South St, Philadelphia, PA",
            &[("number", "100"), ("street", "South"), ("type", "St"), ("city", "Philadelphia"), ("state", "PA")],
        ),
        (
            "100 S.E. Washington Ave, Minneapolis, MN",
            &[("number", "100"), ("prefix", "SE"), ("street", "Washington"), ("type", "Ave"), ("city", "Minneapolis"), ("state", "MN")],
        ),
        (
            "3813 1/2 Some Road, Los Angeles, CA",
            &[("number", "3813"), ("street", "Some"), ("type", "Rd"), ("city", "Los Angeles"), ("state", "CA")],
        ),
        (
            "123 Maple Rochester, New York",
            &[("number", "123"), ("street", "Maple"), ("city", "Rochester"), ("state", "NY")],
        ),
        (
            "2672 Industrial Row Troy, MI 48084",
            &[("number", "2672"), ("street", "Industrial"), ("type", "Row"), ("city", "Troy"), ("state", "MI"), ("zip", "48084")],
        ),
        ("321 S. Washington", &[("number", "321"), ("prefix", "S"), ("street", "Washington")]),
    ]);
}

#[test]
fn compass_city() {
    check(&[
        (
            "1005 Gravenstein Hwy, N Sebastopol CA",
            &[("number", "1005"), ("street", "Gravenstein"), ("type", "Hwy"), ("city", "North Sebastopol"), ("state", "CA")],
        ),
        (
            "1005 Gravenstein Hwy, North Sebastopol CA",
            &[("number", "1005"), ("street", "Gravenstein"), ("type", "Hwy"), ("city", "North Sebastopol"), ("state", "CA")],
        ),
        (
            "1 First St, e San Jose CA",
            &[("number", "1"), ("street", "First"), ("type", "St"), ("city", "East San Jose"), ("state", "CA")],
        ),
    ]);
}

#[test]
fn grid_streets() {
    check(&[
        (
            "48S 400E, Salt Lake City UT",
            &[("number", "48"), ("prefix", "S"), ("street", "400"), ("suffix", "E"), ("city", "Salt Lake City"), ("state", "UT")],
        ),
        (
            "550 S 400 E #3206, Salt Lake City UT 84111",
            &[
                ("number", "550"),
                ("prefix", "S"),
                ("street", "400"),
                ("suffix", "E"),
                ("sec_unit_type", "#"),
                ("sec_unit_num", "3206"),
                ("city", "Salt Lake City"),
                ("state", "UT"),
                ("zip", "84111"),
            ],
        ),
        (
            "6641 N 2200 W Apt D304 Park City, UT 84098",
            &[
                ("number", "6641"),
                ("prefix", "N"),
                ("street", "2200"),
                ("suffix", "W"),
                ("sec_unit_type", "Apt"),
                ("sec_unit_num", "D304"),
                ("city", "Park City"),
                ("state", "UT"),
                ("zip", "84098"),
            ],
        ),
        (
            "36401 County Road 43, Eaton, CO 80615",
            &[("number", "36401"), ("street", "County Road 43"), ("city", "Eaton"), ("state", "CO"), ("zip", "80615")],
        ),
        (
            "1234 COUNTY HWY 60E, Town, CO 12345",
            &[("number", "1234"), ("street", "COUNTY HWY 60"), ("suffix", "E"), ("city", "Town"), ("state", "CO"), ("zip", "12345")],
        ),
        (
            "N95W18855 Jay Dr, Menomonee Falls, WI 53051",
            &[("number", "N95W18855"), ("street", "Jay"), ("type", "Dr"), ("city", "Menomonee Falls"), ("state", "WI"), ("zip", "53051")],
        ),
        (
            "N95W18855 Jay Dr Menomonee Falls WI 53051",
            &[("number", "N95W18855"), ("street", "Jay"), ("type", "Dr"), ("city", "Menomonee Falls"), ("state", "WI"), ("zip", "53051")],
        ),
        (
            "n95w18855 Jay Dr Menomonee Falls WI 53051",
            &[("number", "n95w18855"), ("street", "Jay"), ("type", "Dr"), ("city", "Menomonee Falls"), ("state", "WI"), ("zip", "53051")],
        ),
    ]);
}

#[test]
fn zip_plus_four_separators() {
    let wacker = [("number", "233"), ("prefix", "S"), ("street", "Wacker"), ("type", "Dr"), ("zip", "60606"), ("plus4", "6306")];
    check(&[
        ("233 S Wacker Dr 60606-6306", &wacker),
        ("233 S Wacker Dr 606066306", &wacker),
        ("233 S Wacker Dr 60606 6306", &wacker),
        ("S Wacker Dr 60606 6306", &wacker[1..]),
    ]);
}

#[test]
fn secondary_units() {
    check(&[
        (
            "1005 N Gravenstein Highway, Suite 500, Sebastopol, CA",
            &[
                ("number", "1005"),
                ("prefix", "N"),
                ("street", "Gravenstein"),
                ("type", "Hwy"),
                ("sec_unit_type", "Suite"),
                ("sec_unit_num", "500"),
                ("city", "Sebastopol"),
                ("state", "CA"),
            ],
        ),
        (
            "1005 N Gravenstein Hwy Suite 500 Sebastopol, CA",
            &[
                ("number", "1005"),
                ("prefix", "N"),
                ("street", "Gravenstein"),
                ("type", "Hwy"),
                ("sec_unit_type", "Suite"),
                ("sec_unit_num", "500"),
                ("city", "Sebastopol"),
                ("state", "CA"),
            ],
        ),
        (
            "233 S Wacker Dr lobby 60606",
            &[("number", "233"), ("prefix", "S"), ("street", "Wacker"), ("type", "Dr"), ("sec_unit_type", "lobby"), ("zip", "60606")],
        ),
        (
            "(233 S Wacker Dr lobby 60606)",
            &[("number", "233"), ("prefix", "S"), ("street", "Wacker"), ("type", "Dr"), ("sec_unit_type", "lobby"), ("zip", "60606")],
        ),
        (
            "#42 233 S Wacker Dr 60606",
            &[
                ("sec_unit_type", "#"),
                ("sec_unit_num", "42"),
                ("number", "233"),
                ("prefix", "S"),
                ("street", "Wacker"),
                ("type", "Dr"),
                ("zip", "60606"),
            ],
        ),
        (
            "lt42 99 Some Road, Some City LA",
            &[
                ("sec_unit_type", "lt"),
                ("sec_unit_num", "42"),
                ("number", "99"),
                ("street", "Some"),
                ("type", "Rd"),
                ("city", "Some City"),
                ("state", "LA"),
            ],
        ),
        (
            "'45 Quaker Ave, Ste 105'",
            &[("number", "45"), ("street", "Quaker"), ("type", "Ave"), ("sec_unit_type", "Ste"), ("sec_unit_num", "105")],
        ),
    ]);
}

#[test]
fn postal_boxes_keep_their_designator() {
    let place = [("sec_unit_num", "3094"), ("city", "Collierville"), ("state", "TN"), ("zip", "38027")];
    for (input, designator) in [
        ("Post office Box 3094 Collierville TN 38027", "Post office Box"),
        ("P.O. box 3094 Collierville TN 38027", "PO box"),
        ("POBox 3094 Collierville TN 38027", "POBox"),
    ] {
        let mut fields = expected(&place);
        fields.insert("sec_unit_type", designator.to_string());
        assert_eq!(PARSER.parse_location(input).fields(), fields, "{input} was not parsed correctly");
    }
}

#[test]
fn uncommon_street_types() {
    let cases: &[(&str, &str, &str, &str, &str, &str, &str)] = &[
        ("10144 Potters Hatch Cmn Cupertino CA 95014", "10144", "Potters Hatch", "Cmn", "Cupertino", "CA", "95014"),
        ("10144 Potters Hatch Common Cupertino CA 95014", "10144", "Potters Hatch", "Cmn", "Cupertino", "CA", "95014"),
        ("36 Hathway Commons Lebanon OH 45036", "36", "Hathway", "Cmns", "Lebanon", "OH", "45036"),
        ("36 Hathway Cmns Lebanon OH 45036", "36", "Hathway", "Cmns", "Lebanon", "OH", "45036"),
        ("174 Sunset Crossroad Deer Isle ME 04627", "174", "Sunset", "Xrd", "Deer Isle", "ME", "04627"),
        ("174 Sunset Xrd Deer Isle ME 04627", "174", "Sunset", "Xrd", "Deer Isle", "ME", "04627"),
        ("905 Laing Crossroads Dawson GA 39842", "905", "Laing", "Xrds", "Dawson", "GA", "39842"),
        ("905 Laing Xrds Dawson GA 39842", "905", "Laing", "Xrds", "Dawson", "GA", "39842"),
        ("9402 Sequoia Fall San Antonio TX 78251", "9402", "Sequoia", "Fall", "San Antonio", "TX", "78251"),
        ("24411 Alamosa Fls San Antonio TX 78255", "24411", "Alamosa", "Fls", "San Antonio", "TX", "78255"),
        ("24411 Alamosa Falls San Antonio TX 78255", "24411", "Alamosa", "Fls", "San Antonio", "TX", "78255"),
        ("15235 Spring Land San Antonio TX 78247", "15235", "Spring", "Land", "San Antonio", "TX", "78247"),
        ("2146 University Square Mall Tampa FL 33612", "2146", "University Square", "Mall", "Tampa", "FL", "33612"),
        ("415 Van Wyck Mews Norfolk VA 23517", "415", "Van Wyck", "Mews", "Norfolk", "VA", "23517"),
        ("22 Cumbres Pass Santa Fe New Mexico 87508", "22", "Cumbres", "Pass", "Santa Fe", "NM", "87508"),
        ("6 Maison Rue Hattiesburg MS 39402", "6", "Maison", "Rue", "Hattiesburg", "MS", "39402"),
        ("12921 Coyote Run Fishers IN 46038", "12921", "Coyote", "Run", "Fishers", "IN", "46038"),
        ("2974 London Wall Bloomfield Hills MI 48304", "2974", "London", "Wall", "Bloomfield Hills", "MI", "48304"),
    ];

    for &(input, number, street, street_type, city, state, zip) in cases {
        let fields = expected(&[
            ("number", number),
            ("street", street),
            ("type", street_type),
            ("city", city),
            ("state", state),
            ("zip", zip),
        ]);
        assert_eq!(PARSER.parse_location(input).fields(), fields, "{input} was not parsed correctly");
    }
}

#[test]
fn intersections() {
    let sf = [("city", "San Francisco"), ("state", "CA")];
    let cases: &[(&str, &str, &str, bool)] = &[
        ("Mission & Valencia San Francisco CA", "", "", true),
        ("Mission & Valencia, San Francisco CA", "", "", true),
        ("Mission St and Valencia St San Francisco CA", "St", "St", true),
        ("Mission St and Valencia St", "St", "St", false),
        ("Mission St & Valencia St San Francisco CA", "St", "St", true),
        ("Mission and Valencia Sts San Francisco CA", "St", "St", true),
        ("Mission & Valencia Sts. San Francisco CA", "St", "St", true),
        ("Mission and Valencia Sts.", "St", "St", false),
        ("Mission & Valencia Streets San Francisco CA", "St", "St", true),
        ("Mission Avenue and Valencia Street San Francisco CA", "Ave", "St", true),
    ];

    for &(input, type1, type2, with_place) in cases {
        let mut fields =
            expected(&[("street1", "Mission"), ("type1", type1), ("street2", "Valencia"), ("type2", type2)]);
        if with_place {
            fields.extend(expected(&sf));
        }
        assert_eq!(PARSER.parse_location(input).fields(), fields, "{input} was not parsed correctly");
    }
}

#[test]
fn intersection_never_carries_civic_fields() {
    let parsed = PARSER.parse_location("Mission and Valencia Sts San Francisco CA");
    assert_matches!(parsed, ParsedLocation::Intersection(ref x) if x.type1 == "St" && x.type2 == "St");
    let fields = parsed.fields();
    assert!(!fields.contains_key("number"));
    assert!(!fields.contains_key("zip"));
}

#[test]
fn ordinal_street_can_start_an_intersection() {
    let parsed = PARSER.parse_location("5th Ave and Main St");
    assert_matches!(parsed, ParsedLocation::Intersection(ref x) if x.street1 == "5th" && x.type1 == "Ave");
}

#[test]
fn record_shapes() {
    let parsed = PARSER.parse_location("233 S Wacker Dr 60606-6306");
    let addr = parsed.as_standard().unwrap();
    assert_matches!(addr.postal_code, Some(PostalCode::Zip { ref code, plus4: Some(ref p) }) if code == "60606" && p == "6306");
    assert_eq!(addr.number_suffix, None);
}

#[test]
fn no_structural_match() {
    for input in ["12345", "hello world", "", "()"] {
        assert_eq!(PARSER.parse_location(input), ParsedLocation::Unmatched, "{input:?} should not match");
    }
}

#[test]
fn postal_code_digits_are_ascii() {
    check(&[("123 Main St ١٢٣٤٥", &[("number", "123"), ("street", "Main St ١٢٣٤٥")])]);

    let fields = PARSER.parse_location("123 Main St 12345٦٧٨٩").fields();
    assert!(!fields.contains_key("zip"), "{fields:?}");
    assert!(!fields.contains_key("plus4"), "{fields:?}");
    assert!(fields.values().all(|v| !v.is_empty()), "{fields:?}");
}
