//! Static classification lexicons.
//!
//! These tables are configuration, not behavior: the rule algorithm never
//! changes when an entry is added. All entries are lower-case Swedish;
//! matching happens on case-folded text.

/// Category labels that always mark an item non-vegan.
pub static NON_VEGAN_CATEGORIES: &[&str] = &[
    "kött", "fisk", "fågel", "ägg", "mjölk", "ost", "grädde", "smör",
    "inälvor", "chark", "korv", "skaldjur",
];

/// Name keywords that mark an item non-vegan unless suppressed, scanned in
/// this order.
pub static NON_VEGAN_KEYWORDS: &[&str] = &[
    "kyckling", "nöt", "gris", "lamm", "fisk", "lax", "torsk", "räkor",
    "kräftor", "mjölk", "ost", "smör", "grädde", "ägg", "honung",
    "gelatin", "vassle", "kasein", "yoghurt", "kvarg", "filmjölk",
    "crème fraiche", "ister", "talg", "skinka", "bacon", "lever", "blod",
    "ansjovis", "sardell", "kaviar",
];

/// Plant-derived substrings that suppress a keyword match anywhere in the
/// name ("kokosmjölk", "jordnötter").
pub static VEGAN_EXCEPTIONS: &[&str] = &[
    "kokos", "havre", "soja", "mandel", "ris", "cashew", "jordnöt",
    "valnöt", "hassel", "pecan", "pista", "macadamia", "para", "kokosfett",
];

/// "nöt" is both the beef word and the nut word; when the category carries
/// one of these markers, the nut sense wins.
pub static NUT_HOMOGRAPH: &str = "nöt";
pub static NUT_CATEGORY_MARKERS: &[&str] = &["nötter", "frö"];
