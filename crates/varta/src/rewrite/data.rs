//! Locale rewrite rule data.
//!
//! Patterns and replacements are kept in declared order; later rules
//! operate on the output of earlier ones, so the order is part of the
//! observable behavior. `\u{1}` brackets a substituted value and
//! `\u{5}` marks text an article rule already settled; both markers are
//! stripped after the pipeline runs. A replacement of `javascript`
//! lowercases the marked token that follows a `_` trigger.

use super::LocaleRules;

/// Metaclasses available to every locale's patterns.
pub(super) const GLOBAL_META: &[(&str, &str)] = &[
    ("_B", "([.,!?\\s]|^)"),
    ("_E", "([.,!?\\s]|$)"),
];

/// Rules applied after any locale's own, for every locale.
pub(super) const GLOBAL_PATTERNS: &[(&str, &str)] = &[
    ("_\u{1}([^\u{1}]*)\u{1}", "javascript"),
];

/// Per-locale rewrite rules.
pub(super) const LOCALE_RULES: &[LocaleRules] = &[
    LocaleRules {
        locale: "ar_AR",
        meta: &[
            ("_Delim", "(\u{1}\u{200F})"),
            ("_RTL", "(([֐-ֿ]|[׀-߿]))"),
        ],
        patterns: &[
            ("_RTL_Delim(\\s*)_RTL", "$1\u{1}$4$5"),
            ("ة_Delim_RTL", "ت\u{1}$2"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "bg_BG",
        meta: &[],
        patterns: &[
            ("_B(в|В) \u{1}(в|В|ф|Ф)", "$1$2ъв \u{1}$3"),
            ("_B(с|С) \u{1}(с|С|з|З)", "$1$2ъс \u{1}$3"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "ca_ES",
        meta: &[
            ("_C", "[b|c|d|f|g|h|j|k|l|m|n|p|q|r|s|t|v|w|x|y|z|B|C|D|F|G|H|J|K|L|M|N|P|Q|R|S|T|V|W|X|Y|Z]"),
            ("_V", "[a|e|i|o|u|A|E|I|O|U]"),
        ],
        patterns: &[
            ("_Bo \u{1}([Oo]|[Hh]o)", "$1u \u{1}$2"),
            ("_By \u{1}([Ii]|[Hh]i[^e])", "$1e \u{1}$2"),
        ],
        male: &[
            ("(.)\u{1}(_C.*)\u{1}", "$1\u{5}el $2\u{1}"),
            ("(.)\u{1}(_V.*)\u{1}", "$1\u{5}l'$2\u{1}"),
            ("^\u{1}(_C.*)\u{1}", "\u{5}El $1\u{1}"),
            ("^\u{1}(_V.*)\u{1}", "\u{5}L'$1\u{1}"),
        ],
        female: &[
            ("(.)\u{1}(_C.*)\u{1}", "$1\u{5}la $2\u{1}"),
            ("(.)\u{1}(_V.*)\u{1}", "$1\u{5}l'$2\u{1}"),
            ("^\u{1}(_C.*)\u{1}", "\u{5}La $1\u{1}"),
            ("^\u{1}(_V.*)\u{1}", "\u{5}L'$1\u{1}"),
        ],
        unknown: &[
            ("(.)\u{1}(_C.*)\u{1}", "$1\u{5}el $2\u{1}"),
            ("(.)\u{1}(_V.*)\u{1}", "$1\u{5}l'$2\u{1}"),
            ("^\u{1}(_C.*)\u{1}", "\u{5}El $1\u{1}"),
            ("^\u{1}(_V.*)\u{1}", "\u{5}L'$1\u{1}"),
        ],
    },
    LocaleRules {
        locale: "da_DK",
        meta: &[
            ("_U", "(Ø|Å|Æ)"),
        ],
        patterns: &[
            ("([A-Z]|[0-9]|_U)\u{1}s_E", "$1\u{1}'s$3"),
            ("([szxSZX])\u{1}s_E", "$1\u{1}'$2"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "de_DE",
        meta: &[],
        patterns: &[
            ("(ß|s|z|x)\u{1}s_E", "$1\u{1}$2"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "en_GB",
        meta: &[],
        patterns: &[
            ("\u{1}(.*)('|&#039;)s\u{1}(?:'|&#039;)s(.*)", "\u{1}$1$2s\u{1}$3"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "en_IN",
        meta: &[],
        patterns: &[
            ("\u{1}(.*)('|&#039;)s\u{1}(?:'|&#039;)s(.*)", "\u{1}$1$2s\u{1}$3"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "en_PI",
        meta: &[],
        patterns: &[
            ("\u{1}(.*)('|&#039;)s\u{1}(?:'|&#039;)s(.*)", "\u{1}$1$2s\u{1}$3"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "en_US",
        meta: &[],
        patterns: &[
            ("\u{1}(.*)('|&#039;)s\u{1}(?:'|&#039;)s(.*)", "\u{1}$1$2s\u{1}$3"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "es_CL",
        meta: &[],
        patterns: &[
            ("_Bo \u{1}([Oo]|[Hh]o)", "$1u \u{1}$2"),
            ("_By \u{1}([Ii]|[Hh]i[^e])", "$1e \u{1}$2"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "es_CO",
        meta: &[],
        patterns: &[
            ("_Bo \u{1}([Oo]|[Hh]o)", "$1u \u{1}$2"),
            ("_By \u{1}([Ii]|[Hh]i[^e])", "$1e \u{1}$2"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "es_ES",
        meta: &[],
        patterns: &[
            ("_Bo \u{1}([Oo]|[Hh]o)", "$1u \u{1}$2"),
            ("_By \u{1}([Ii]|[Hh]i[^e])", "$1e \u{1}$2"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "es_LA",
        meta: &[],
        patterns: &[
            ("_Bo \u{1}([Oo]|[Hh]o)", "$1u \u{1}$2"),
            ("_By \u{1}([Ii]|[Hh]i[^e])", "$1e \u{1}$2"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "es_MX",
        meta: &[],
        patterns: &[
            ("_Bo \u{1}([Oo]|[Hh]o)", "$1u \u{1}$2"),
            ("_By \u{1}([Ii]|[Hh]i[^e])", "$1e \u{1}$2"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "es_VE",
        meta: &[],
        patterns: &[
            ("_Bo \u{1}([Oo]|[Hh]o)", "$1u \u{1}$2"),
            ("_By \u{1}([Ii]|[Hh]i[^e])", "$1e \u{1}$2"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "nb_NO",
        meta: &[],
        patterns: &[
            ("([szx])\u{1}s_E", "$1\u{1}'$2"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "sk_SK",
        meta: &[],
        patterns: &[
            ("_B(k|K) \u{1}(g|k|G|K)", "$1$2u \u{1}$3"),
            ("_B(s|z|S|Z) \u{1}(s|š|z|ž|S|Š|Z|Ž)", "$1$2o \u{1}$3"),
            ("_B(v|V) \u{1}(f|v|F|V)", "$1$2o \u{1}$3"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "sv_SE",
        meta: &[],
        patterns: &[
            ("([szx])\u{1}s_E", "$1\u{1}$2"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
    LocaleRules {
        locale: "tr_TR",
        meta: &[
            ("_C", "(ş|ç|b|c|d|f|g|ğ|h|j|k|l|m|n|p|q|r|s|t|v|w|x|y|z|B|C|D|F|G|Ğ|H|J|K|L|M|N|P|Q|R|S|T|V|W|X|Y|Z)"),
            ("_T", "(ş|ç|p|t|k|s)"),
            ("_V", "(a|e|i|o|u|A|E|I|O|U|ä|ö|y|Ä|Ö|Y)"),
        ],
        patterns: &[
            ("\u{1}'\\(n\\)in_E", "\u{1}'in$1"),
            ("\u{1}'\\(y\\)e_E", "\u{1}'e$1"),
            ("\u{1}'\\(y\\)i_E", "\u{1}'i$1"),
            ("\u{1}'Da(ki|n|)_E", "\u{1}'da$1$2"),
            ("(_Cy)\u{1}'\\(n\\)in_E", "$1\u{1}'nin$3"),
            ("(_Cy)\u{1}'\\(y\\)e_E", "$1\u{1}'ye$3"),
            ("(_Cy)\u{1}'\\(y\\)i_E", "$1\u{1}'yi$3"),
            ("(‘|’)", "'"),
            ("((a|ı|A|I)_C+)\u{1}'\\(n\\)in_E", "$1\u{1}'ın$4"),
            ("((a|ı|A|I)_C+)\u{1}'\\(y\\)e_E", "$1\u{1}'a$4"),
            ("((a|ı|A|I)_C+)\u{1}'\\(y\\)i_E", "$1\u{1}'ı$4"),
            ("((a|ı|A|I|u|o|U|O)_C*_T)\u{1}'Da(ki|n|)_E", "$1\u{1}'ta$5$6"),
            ("((a|ı|A|I|u|o|U|O)_C*)\u{1}'Da(ki|n|)_E", "$1\u{1}'da$4$5"),
            ("((a|ı|A|I|u|o|U|O)_C*)\u{1} de\\/da_E", "$1\u{1} da$4"),
            ("((e|i|E|İ)_C+)\u{1}'\\(n\\)in_E", "$1\u{1}'in$4"),
            ("((e|i|E|İ)_C+)\u{1}'\\(y\\)e_E", "$1\u{1}'e$4"),
            ("((e|i|E|İ)_C+)\u{1}'\\(y\\)i_E", "$1\u{1}'i$4"),
            ("((e|i|E|İ|ö|ü|Ö|Ü)_C*_T)\u{1}'Da(ki|n|)_E", "$1\u{1}'te$5$6"),
            ("((e|i|E|İ|ö|ü|Ö|Ü)_C*)\u{1}'Da(ki|n|)_E", "$1\u{1}'de$4$5"),
            ("((e|i|E|İ|ö|ü|Ö|Ü)_C*)\u{1} de\\/da_E", "$1\u{1} de$4"),
            ("((ö|ü|Ö|Ü)_C+)\u{1}'\\(n\\)in_E", "$1\u{1}'ün$4"),
            ("((ö|ü|Ö|Ü)_C+)\u{1}'\\(y\\)e_E", "$1\u{1}'e$4"),
            ("((ö|ü|Ö|Ü)_C+)\u{1}'\\(y\\)i_E", "$1\u{1}'ü$4"),
            ("([uoUO]_C+)\u{1}'\\(n\\)in_E", "$1\u{1}'un$3"),
            ("([uoUO]_C+)\u{1}'\\(y\\)e_E", "$1\u{1}'a$3"),
            ("([uoUO]_C+)\u{1}'\\(y\\)i_E", "$1\u{1}'u$3"),
            ("([uoUO])\u{1}'\\(n\\)in_E", "$1\u{1}'nun$2"),
            ("([uoUO])\u{1}'\\(y\\)e_E", "$1\u{1}'ya$2"),
            ("([uoUO])\u{1}'\\(y\\)i_E", "$1\u{1}'yu$2"),
            ("(a|ı|A|I)\u{1}'\\(n\\)in_E", "$1\u{1}'nın$2"),
            ("(a|ı|A|I)\u{1}'\\(y\\)e_E", "$1\u{1}'ya$2"),
            ("(a|ı|A|I)\u{1}'\\(y\\)i_E", "$1\u{1}'yı$2"),
            ("(e|i|E|İ)\u{1}'\\(n\\)in_E", "$1\u{1}'nin$2"),
            ("(e|i|E|İ)\u{1}'\\(y\\)e_E", "$1\u{1}'ye$2"),
            ("(e|i|E|İ)\u{1}'\\(y\\)i_E", "$1\u{1}'yi$2"),
            ("(ö|ü|Ö|Ü)\u{1}'\\(n\\)in_E", "$1\u{1}'nün$2"),
            ("(ö|ü|Ö|Ü)\u{1}'\\(y\\)e_E", "$1\u{1}'ye$2"),
            ("(ö|ü|Ö|Ü)\u{1}'\\(y\\)i_E", "$1\u{1}'yü$2"),
            ("&#039;", "'"),
            ("\u{1} de\\/da_E", "\u{1} de$1"),
        ],
        male: &[],
        female: &[],
        unknown: &[],
    },
];
