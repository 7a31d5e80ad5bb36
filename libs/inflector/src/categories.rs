//! Words that have no distinct plural form.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const UNCOUNTABLE: &[&str] = &[
    "adulthood",
    "advice",
    "agenda",
    "aid",
    "aircraft",
    "alcohol",
    "ammo",
    "analytics",
    "anime",
    "athletics",
    "audio",
    "bison",
    "blood",
    "buffalo",
    "butter",
    "carp",
    "cash",
    "chassis",
    "chess",
    "clothing",
    "cod",
    "commerce",
    "cooperation",
    "corps",
    "debris",
    "diabetes",
    "digestion",
    "elk",
    "energy",
    "equipment",
    "expertise",
    "firmware",
    "fun",
    "gallows",
    "garbage",
    "graffiti",
    "hardware",
    "headquarters",
    "health",
    "homework",
    "housework",
    "information",
    "jeans",
    "justice",
    "kudos",
    "labour",
    "literature",
    "machinery",
    "mail",
    "media",
    "metadata",
    "moose",
    "music",
    "mud",
    "news",
    "personnel",
    "plankton",
    "pliers",
    "police",
    "pollution",
    "premises",
    "rain",
    "research",
    "rice",
    "salmon",
    "scissors",
    "series",
    "sewage",
    "shrimp",
    "software",
    "species",
    "staff",
    "swine",
    "tennis",
    "traffic",
    "transportation",
    "trout",
    "tuna",
    "wealth",
    "welfare",
    "wildlife",
];

/// Suffixes that make a whole word uncountable, e.g. `reindeer` or `swordfish`.
pub(crate) static UNCOUNTABLE_SUFFIXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)pok[eé]mon$",
        r"(?i)[^aeiou]ese$",
        r"(?i)deer$",
        r"(?i)fish$",
        r"(?i)measles$",
        r"(?i)o[iu]s$",
        r"(?i)pox$",
        r"(?i)sheep$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});
