//! Street-type tables.
//!
//! `US` follows the USPS Publication 28 suffix list; `CA` follows the Canada
//! Post street-type list (English and French). Each entry is
//! `(variant, canonical abbreviation)` in lowercase; canonical values are
//! registered as keys by [`super::Lookup::from_entries`].

pub(crate) const US: &[(&str, &str)] = &[
    ("allee", "aly"),
    ("alley", "aly"),
    ("ally", "aly"),
    ("anex", "anx"),
    ("annex", "anx"),
    ("annx", "anx"),
    ("arcade", "arc"),
    ("av", "ave"),
    ("aven", "ave"),
    ("avenu", "ave"),
    ("avenue", "ave"),
    ("avn", "ave"),
    ("avnue", "ave"),
    ("bayoo", "byu"),
    ("bayou", "byu"),
    ("beach", "bch"),
    ("bend", "bnd"),
    ("bluf", "blf"),
    ("bluff", "blf"),
    ("bluffs", "blfs"),
    ("bot", "btm"),
    ("bottm", "btm"),
    ("bottom", "btm"),
    ("boul", "blvd"),
    ("boulevard", "blvd"),
    ("boulv", "blvd"),
    ("branch", "br"),
    ("brnch", "br"),
    ("brdge", "brg"),
    ("bridge", "brg"),
    ("brook", "brk"),
    ("brooks", "brks"),
    ("burg", "bg"),
    ("burgs", "bgs"),
    ("bypa", "byp"),
    ("bypas", "byp"),
    ("bypass", "byp"),
    ("byps", "byp"),
    ("camp", "cp"),
    ("cmp", "cp"),
    ("canyn", "cyn"),
    ("canyon", "cyn"),
    ("cnyn", "cyn"),
    ("cape", "cpe"),
    ("causeway", "cswy"),
    ("causwa", "cswy"),
    ("center", "ctr"),
    ("centr", "ctr"),
    ("centre", "ctr"),
    ("cnter", "ctr"),
    ("cntr", "ctr"),
    ("centers", "ctrs"),
    ("circ", "cir"),
    ("circl", "cir"),
    ("circle", "cir"),
    ("crcl", "cir"),
    ("crcle", "cir"),
    ("circles", "cirs"),
    ("cliff", "clf"),
    ("cliffs", "clfs"),
    ("club", "clb"),
    ("common", "cmn"),
    ("commons", "cmns"),
    ("corner", "cor"),
    ("corners", "cors"),
    ("course", "crse"),
    ("court", "ct"),
    ("crt", "ct"),
    ("courts", "cts"),
    ("cove", "cv"),
    ("coves", "cvs"),
    ("creek", "crk"),
    ("crescent", "cres"),
    ("crsent", "cres"),
    ("crsnt", "cres"),
    ("crest", "crst"),
    ("crossing", "xing"),
    ("crssng", "xing"),
    ("crossroad", "xrd"),
    ("crossroads", "xrds"),
    ("curve", "curv"),
    ("dale", "dl"),
    ("dam", "dm"),
    ("div", "dv"),
    ("divide", "dv"),
    ("dvd", "dv"),
    ("driv", "dr"),
    ("drive", "dr"),
    ("drv", "dr"),
    ("drives", "drs"),
    ("estate", "est"),
    ("estates", "ests"),
    ("exp", "expy"),
    ("expr", "expy"),
    ("express", "expy"),
    ("expressway", "expy"),
    ("expw", "expy"),
    ("extension", "ext"),
    ("extn", "ext"),
    ("extnsn", "ext"),
    ("extensions", "exts"),
    ("fall", "fall"),
    ("falls", "fls"),
    ("ferry", "fry"),
    ("frry", "fry"),
    ("field", "fld"),
    ("fields", "flds"),
    ("flat", "flt"),
    ("flats", "flts"),
    ("ford", "frd"),
    ("fords", "frds"),
    ("forest", "frst"),
    ("forests", "frst"),
    ("forg", "frg"),
    ("forge", "frg"),
    ("forges", "frgs"),
    ("fork", "frk"),
    ("forks", "frks"),
    ("fort", "ft"),
    ("frt", "ft"),
    ("freeway", "fwy"),
    ("freewy", "fwy"),
    ("frway", "fwy"),
    ("frwy", "fwy"),
    ("garden", "gdn"),
    ("gardn", "gdn"),
    ("grden", "gdn"),
    ("grdn", "gdn"),
    ("gardens", "gdns"),
    ("grdns", "gdns"),
    ("gateway", "gtwy"),
    ("gatewy", "gtwy"),
    ("gatway", "gtwy"),
    ("gtway", "gtwy"),
    ("glen", "gln"),
    ("glens", "glns"),
    ("green", "grn"),
    ("greens", "grns"),
    ("grov", "grv"),
    ("grove", "grv"),
    ("groves", "grvs"),
    ("harb", "hbr"),
    ("harbor", "hbr"),
    ("harbr", "hbr"),
    ("hrbor", "hbr"),
    ("harbors", "hbrs"),
    ("haven", "hvn"),
    ("ht", "hts"),
    ("height", "hts"),
    ("heights", "hts"),
    ("highway", "hwy"),
    ("highwy", "hwy"),
    ("hiway", "hwy"),
    ("hiwy", "hwy"),
    ("hway", "hwy"),
    ("hill", "hl"),
    ("hills", "hls"),
    ("hllw", "holw"),
    ("hollow", "holw"),
    ("hollows", "holw"),
    ("holws", "holw"),
    ("inlet", "inlt"),
    ("island", "is"),
    ("islnd", "is"),
    ("islands", "iss"),
    ("islnds", "iss"),
    ("isles", "isle"),
    ("jction", "jct"),
    ("jctn", "jct"),
    ("junction", "jct"),
    ("junctn", "jct"),
    ("juncton", "jct"),
    ("jctns", "jcts"),
    ("junctions", "jcts"),
    ("key", "ky"),
    ("keys", "kys"),
    ("knol", "knl"),
    ("knoll", "knl"),
    ("knolls", "knls"),
    ("lake", "lk"),
    ("lakes", "lks"),
    ("land", "land"),
    ("landing", "lndg"),
    ("lndng", "lndg"),
    ("lane", "ln"),
    ("light", "lgt"),
    ("lights", "lgts"),
    ("loaf", "lf"),
    ("lock", "lck"),
    ("locks", "lcks"),
    ("ldge", "ldg"),
    ("lodg", "ldg"),
    ("lodge", "ldg"),
    ("loops", "loop"),
    ("mall", "mall"),
    ("manor", "mnr"),
    ("manors", "mnrs"),
    ("meadow", "mdw"),
    ("meadows", "mdws"),
    ("medows", "mdws"),
    ("mews", "mews"),
    ("mill", "ml"),
    ("mills", "mls"),
    ("mission", "msn"),
    ("missn", "msn"),
    ("mssn", "msn"),
    ("motorway", "mtwy"),
    ("mnt", "mt"),
    ("mount", "mt"),
    ("mntain", "mtn"),
    ("mntn", "mtn"),
    ("mountain", "mtn"),
    ("mountin", "mtn"),
    ("mtin", "mtn"),
    ("mntns", "mtns"),
    ("mountains", "mtns"),
    ("neck", "nck"),
    ("orchard", "orch"),
    ("orchrd", "orch"),
    ("ovl", "oval"),
    ("overpass", "opas"),
    ("prk", "park"),
    ("parks", "park"),
    ("parkway", "pkwy"),
    ("parkwy", "pkwy"),
    ("pkway", "pkwy"),
    ("pky", "pkwy"),
    ("parkways", "pkwy"),
    ("pkwys", "pkwy"),
    ("pass", "pass"),
    ("passage", "psge"),
    ("paths", "path"),
    ("pikes", "pike"),
    ("pine", "pne"),
    ("pines", "pnes"),
    ("place", "pl"),
    ("plain", "pln"),
    ("plains", "plns"),
    ("plaza", "plz"),
    ("plza", "plz"),
    ("point", "pt"),
    ("points", "pts"),
    ("port", "prt"),
    ("ports", "prts"),
    ("prairie", "pr"),
    ("prr", "pr"),
    ("rad", "radl"),
    ("radial", "radl"),
    ("radiel", "radl"),
    ("ramp", "ramp"),
    ("ranch", "rnch"),
    ("ranches", "rnch"),
    ("rnchs", "rnch"),
    ("rapid", "rpd"),
    ("rapids", "rpds"),
    ("rest", "rst"),
    ("rdge", "rdg"),
    ("ridge", "rdg"),
    ("ridges", "rdgs"),
    ("river", "riv"),
    ("rivr", "riv"),
    ("rvr", "riv"),
    ("road", "rd"),
    ("roads", "rds"),
    ("route", "rte"),
    ("row", "row"),
    ("rue", "rue"),
    ("run", "run"),
    ("shoal", "shl"),
    ("shoals", "shls"),
    ("shoar", "shr"),
    ("shore", "shr"),
    ("shores", "shrs"),
    ("skyway", "skwy"),
    ("spng", "spg"),
    ("spring", "spg"),
    ("sprng", "spg"),
    ("spngs", "spgs"),
    ("springs", "spgs"),
    ("sprngs", "spgs"),
    ("spurs", "spur"),
    ("sqr", "sq"),
    ("sqre", "sq"),
    ("squ", "sq"),
    ("square", "sq"),
    ("sqrs", "sqs"),
    ("squares", "sqs"),
    ("station", "sta"),
    ("statn", "sta"),
    ("stn", "sta"),
    ("strav", "stra"),
    ("straven", "stra"),
    ("stravenue", "stra"),
    ("stravn", "stra"),
    ("strvn", "stra"),
    ("strvnue", "stra"),
    ("stream", "strm"),
    ("streme", "strm"),
    ("str", "st"),
    ("street", "st"),
    ("strt", "st"),
    ("streets", "sts"),
    ("sumit", "smt"),
    ("sumitt", "smt"),
    ("summit", "smt"),
    ("terr", "ter"),
    ("terrace", "ter"),
    ("throughway", "trwy"),
    ("trace", "trce"),
    ("traces", "trce"),
    ("track", "trak"),
    ("tracks", "trak"),
    ("trk", "trak"),
    ("trks", "trak"),
    ("trafficway", "trfy"),
    ("trail", "trl"),
    ("trails", "trl"),
    ("trls", "trl"),
    ("tunel", "tunl"),
    ("tunls", "tunl"),
    ("tunnel", "tunl"),
    ("tunnels", "tunl"),
    ("tunnl", "tunl"),
    ("tpk", "tpke"),
    ("trnpk", "tpke"),
    ("trpk", "tpke"),
    ("turnpike", "tpke"),
    ("turnpk", "tpke"),
    ("underpass", "upas"),
    ("union", "un"),
    ("unions", "uns"),
    ("valley", "vly"),
    ("vally", "vly"),
    ("vlly", "vly"),
    ("valleys", "vlys"),
    ("vdct", "via"),
    ("viadct", "via"),
    ("viaduct", "via"),
    ("view", "vw"),
    ("views", "vws"),
    ("vill", "vlg"),
    ("villag", "vlg"),
    ("village", "vlg"),
    ("villg", "vlg"),
    ("villiage", "vlg"),
    ("villages", "vlgs"),
    ("ville", "vl"),
    ("vist", "vis"),
    ("vista", "vis"),
    ("vst", "vis"),
    ("vsta", "vis"),
    ("walks", "walk"),
    ("wall", "wall"),
    ("wy", "way"),
    ("ways", "ways"),
    ("well", "wl"),
    ("wells", "wls"),
];

pub(crate) const CA: &[(&str, &str)] = &[
    ("abbey", "abbey"),
    ("acres", "acres"),
    ("allée", "allée"),
    ("alley", "alley"),
    ("autoroute", "aut"),
    ("av", "ave"),
    ("avenue", "ave"),
    ("bay", "bay"),
    ("beach", "beach"),
    ("bend", "bend"),
    ("boulevard", "blvd"),
    ("boul", "blvd"),
    ("by-pass", "bypass"),
    ("byway", "byway"),
    ("campus", "campus"),
    ("cape", "cape"),
    ("carré", "car"),
    ("carrefour", "carref"),
    ("centre", "ctr"),
    ("center", "ctr"),
    ("cercle", "cercle"),
    ("chase", "chase"),
    ("chemin", "ch"),
    ("circle", "cir"),
    ("circuit", "circt"),
    ("close", "close"),
    ("common", "common"),
    ("concession", "conc"),
    ("corners", "crnrs"),
    ("côte", "côte"),
    ("cour", "cour"),
    ("cours", "cours"),
    ("court", "crt"),
    ("ct", "crt"),
    ("cove", "cove"),
    ("crescent", "cres"),
    ("croissant", "crois"),
    ("crossing", "cross"),
    ("cul-de-sac", "cds"),
    ("dale", "dale"),
    ("dell", "dell"),
    ("diversion", "divers"),
    ("downs", "downs"),
    ("drive", "dr"),
    ("échangeur", "éch"),
    ("end", "end"),
    ("esplanade", "espl"),
    ("estates", "estate"),
    ("expressway", "expy"),
    ("extension", "exten"),
    ("farm", "farm"),
    ("field", "field"),
    ("forest", "forest"),
    ("freeway", "fwy"),
    ("front", "front"),
    ("gardens", "gdns"),
    ("gate", "gate"),
    ("glade", "glade"),
    ("glen", "glen"),
    ("green", "green"),
    ("grounds", "grnds"),
    ("grove", "grove"),
    ("harbour", "harbr"),
    ("heath", "heath"),
    ("heights", "hts"),
    ("highlands", "hghlds"),
    ("highway", "hwy"),
    ("hill", "hill"),
    ("hollow", "hollow"),
    ("île", "île"),
    ("impasse", "imp"),
    ("inlet", "inlet"),
    ("island", "island"),
    ("key", "key"),
    ("knoll", "knoll"),
    ("landing", "landng"),
    ("lane", "lane"),
    ("limits", "lmts"),
    ("line", "line"),
    ("link", "link"),
    ("lookout", "lkout"),
    ("loop", "loop"),
    ("mall", "mall"),
    ("manor", "manor"),
    ("maze", "maze"),
    ("meadow", "meadow"),
    ("mews", "mews"),
    ("montée", "montée"),
    ("moor", "moor"),
    ("mount", "mount"),
    ("mountain", "mtn"),
    ("orchard", "orch"),
    ("parade", "parade"),
    ("parc", "parc"),
    ("park", "pk"),
    ("parkway", "pky"),
    ("passage", "pass"),
    ("path", "path"),
    ("pathway", "ptway"),
    ("pines", "pines"),
    ("place", "pl"),
    ("plateau", "plat"),
    ("plaza", "plaza"),
    ("point", "pt"),
    ("pointe", "pointe"),
    ("port", "port"),
    ("private", "pvt"),
    ("promenade", "prom"),
    ("quai", "quai"),
    ("quay", "quay"),
    ("ramp", "ramp"),
    ("rang", "rang"),
    ("range", "rg"),
    ("ridge", "ridge"),
    ("rise", "rise"),
    ("road", "rd"),
    ("rond-point", "rdpt"),
    ("route", "rte"),
    ("row", "row"),
    ("rue", "rue"),
    ("ruelle", "ruelle"),
    ("run", "run"),
    ("sentier", "sent"),
    ("square", "sq"),
    ("station", "sta"),
    ("street", "st"),
    ("subdivision", "subdiv"),
    ("terrace", "terr"),
    ("terrasse", "tsse"),
    ("thicket", "thick"),
    ("towers", "towers"),
    ("townline", "tline"),
    ("trail", "trail"),
    ("turnabout", "trnabt"),
    ("vale", "vale"),
    ("via", "via"),
    ("view", "view"),
    ("village", "villge"),
    ("villas", "villas"),
    ("vista", "vista"),
    ("voie", "voie"),
    ("walk", "walk"),
    ("way", "way"),
    ("wharf", "wharf"),
    ("wood", "wood"),
    ("wynd", "wynd"),
];
