// Built-in sample dictionary and phone numbers
//
// The classic demonstration set. Entries with `"` stand for umlauts
// (`Bo"` = Bö) and exercise the normalization rules.

/// Sample dictionary, in index order.
pub const DICTIONARY: &[&str] = &[
    "an", "blau", "Bo\"", "Boot", "bo\"s", "da", "Fee", "fern", "Fest", "fort", "je", "jemand",
    "mir", "Mix", "Mixer", "Name", "neu", "o\"d", "Ort", "so", "Tor", "Torf", "Wasser",
];

/// Sample phone numbers. Several have no translation at all.
pub const PHONE_NUMBERS: &[&str] = &[
    "112",
    "5624-82",
    "4824",
    "0721/608-4067",
    "10/783--5",
    "1078-913-5",
    "381482",
    "04824",
];
