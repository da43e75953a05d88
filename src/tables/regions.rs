//! State and province names keyed to their two-letter postal codes.

pub(crate) const US_STATES: &[(&str, &str)] = &[
    ("alabama", "al"),
    ("alaska", "ak"),
    ("american samoa", "as"),
    ("arizona", "az"),
    ("arkansas", "ar"),
    ("california", "ca"),
    ("colorado", "co"),
    ("connecticut", "ct"),
    ("delaware", "de"),
    ("district of columbia", "dc"),
    ("federated states of micronesia", "fm"),
    ("florida", "fl"),
    ("georgia", "ga"),
    ("guam", "gu"),
    ("hawaii", "hi"),
    ("idaho", "id"),
    ("illinois", "il"),
    ("indiana", "in"),
    ("iowa", "ia"),
    ("kansas", "ks"),
    ("kentucky", "ky"),
    ("louisiana", "la"),
    ("maine", "me"),
    ("marshall islands", "mh"),
    ("maryland", "md"),
    ("massachusetts", "ma"),
    ("michigan", "mi"),
    ("minnesota", "mn"),
    ("mississippi", "ms"),
    ("missouri", "mo"),
    ("montana", "mt"),
    ("nebraska", "ne"),
    ("nevada", "nv"),
    ("new hampshire", "nh"),
    ("new jersey", "nj"),
    ("new mexico", "nm"),
    ("new york", "ny"),
    ("north carolina", "nc"),
    ("north dakota", "nd"),
    ("northern mariana islands", "mp"),
    ("ohio", "oh"),
    ("oklahoma", "ok"),
    ("oregon", "or"),
    ("palau", "pw"),
    ("pennsylvania", "pa"),
    ("puerto rico", "pr"),
    ("rhode island", "ri"),
    ("south carolina", "sc"),
    ("south dakota", "sd"),
    ("tennessee", "tn"),
    ("texas", "tx"),
    ("utah", "ut"),
    ("vermont", "vt"),
    ("virgin islands", "vi"),
    ("virginia", "va"),
    ("washington", "wa"),
    ("west virginia", "wv"),
    ("wisconsin", "wi"),
    ("wyoming", "wy"),
    ("armed forces americas", "aa"),
    ("armed forces europe", "ae"),
    ("armed forces pacific", "ap"),
];

pub(crate) const CA_PROVINCES: &[(&str, &str)] = &[
    ("alberta", "ab"),
    ("british columbia", "bc"),
    ("colombie-britannique", "bc"),
    ("manitoba", "mb"),
    ("new brunswick", "nb"),
    ("nouveau-brunswick", "nb"),
    ("newfoundland and labrador", "nl"),
    ("newfoundland", "nl"),
    ("terre-neuve-et-labrador", "nl"),
    ("northwest territories", "nt"),
    ("territoires du nord-ouest", "nt"),
    ("nova scotia", "ns"),
    ("nouvelle-écosse", "ns"),
    ("nunavut", "nu"),
    ("ontario", "on"),
    ("prince edward island", "pe"),
    ("île-du-prince-édouard", "pe"),
    ("quebec", "qc"),
    ("québec", "qc"),
    ("que", "qc"),
    ("pq", "qc"),
    ("saskatchewan", "sk"),
    ("yukon", "yt"),
];
