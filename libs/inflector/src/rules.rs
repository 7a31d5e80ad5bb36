//! Suffix rules, most specific first. The first matching rule wins.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) struct Rule {
    pub(crate) pattern: Regex,
    pub(crate) replacement: &'static str,
}

const PLURAL: &[(&str, &str)] = &[
    (r"^thou$", "you"),
    (r"m[ae]n$", "men"),
    (r"eaux$", "${0}"),
    (r"(child)(?:ren)?$", "${1}ren"),
    (r"(pe)(?:rson|ople)$", "${1}ople"),
    (r"\b((?:tit)?m|l)(?:ice|ouse)$", "${1}ice"),
    (r"(matr|cod|mur|sil|vert|ind|append)(?:ix|ex)$", "${1}ices"),
    (r"(x|ch|ss|sh|zz)$", "${1}es"),
    (r"([^ch][ieo][ln])ey$", "${1}ies"),
    (r"([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?:(kni|wi|li)fe|(ar|l|ea|eo|oa|hoo)f)$", "${1}${2}ves"),
    (r"sis$", "ses"),
    (
        r"(apheli|hyperbat|periheli|asyndet|noumen|phenomen|criteri|organ|prolegomen|hedr|automat)(?:a|on)$",
        "${1}a",
    ),
    (
        r"(agend|addend|millenni|dat|extrem|bacteri|desiderat|strat|candelabr|errat|ov|symposi|curricul|quor)(?:a|um)$",
        "${1}a",
    ),
    (r"(her|at|gr)o$", "${1}oes"),
    (r"(seraph|cherub)(?:im)?$", "${1}im"),
    (r"(alumn|alg|vertebr)(?:a|ae)$", "${1}ae"),
    (
        r"(alumn|syllab|vir|radi|nucle|fung|cact|stimul|termin|bacill|foc|uter|loc|strat)(?:us|i)$",
        "${1}i",
    ),
    (r"([^l]ias|[aeiou]las|[ejzr]as|[iu]am)$", "${1}"),
    (r"(e[mn]u)s?$", "${1}s"),
    (r"(alias|[^aou]us|t[lm]as|gas|ris)$", "${1}es"),
    (r"(ax|test)is$", "${1}es"),
    (r"([^aeiou]ese)$", "${1}"),
    (r"[^\x00-\x7F]$", "${0}"),
    (r"s?$", "s"),
];

pub(crate) static PLURAL_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    PLURAL
        .iter()
        .map(|(pattern, replacement)| Rule {
            pattern: Regex::new(&format!("(?i){pattern}")).unwrap(),
            replacement,
        })
        .collect()
});
