/// Fixed directory of supported reporter countries. The first entry is the
/// reference entry: unknown names resolve to its code rather than failing.
pub const SUPPORTED_COUNTRIES: &[(&str, &str)] = &[
    ("Sırbistan", "688"),
    ("Moldova", "498"),
    ("Makedonya", "807"),
    ("Bosna-Hersek", "070"),
    ("Kosova", "833"),
    ("Romanya", "642"),
    ("Hırvatistan", "191"),
    ("Polonya", "616"),
    ("Ukrayna", "804"),
    ("Rusya", "643"),
    ("Özbekistan", "860"),
    ("Kırgızistan", "417"),
    ("Gürcistan", "268"),
    ("Ermenistan", "051"),
];

pub const DEFAULT_REPORTER: &str = "688";

/// Never fails: unsupported names get the default reporter code.
pub fn resolve(name: &str) -> &'static str {
    SUPPORTED_COUNTRIES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
        .unwrap_or(DEFAULT_REPORTER)
}

pub fn supported_names() -> impl Iterator<Item = &'static str> {
    SUPPORTED_COUNTRIES.iter().map(|(n, _)| *n)
}
