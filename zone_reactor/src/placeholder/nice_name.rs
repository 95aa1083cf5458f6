//! Human-readable monument names.

/// Turn a monument name like `bandit_town` into `Bandit Town`.
///
/// Underscores become spaces. Every run of letters and digits is a word, so
/// `gas-station` and `oil.rig` title-case on both sides of the separator. Words
/// that are already all upper-case (`OUTPOST`, `A`) are treated as acronyms and
/// left alone.
pub fn nice_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word = String::new();

    for c in name.chars() {
        if c.is_alphanumeric() {
            word.push(c);
            continue;
        }
        out.push_str(&title_case_word(&word));
        word.clear();
        out.push(if c == '_' { ' ' } else { c });
    }

    out.push_str(&title_case_word(&word));
    out
}

fn title_case_word(word: &str) -> String {
    let has_letters = word.chars().any(char::is_alphabetic);
    if has_letters && !word.chars().any(char::is_lowercase) {
        return word.to_string();
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
