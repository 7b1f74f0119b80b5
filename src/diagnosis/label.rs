/// Turns a raw classifier label such as `basal_cell_carcinoma` into the
/// display name used as the reference table key (`Basal Cell Carcinoma`).
///
/// Underscores become spaces. Every run of letters is capitalized on its
/// first letter and lower-cased after it; anything else is kept and ends the
/// run, so `keratosis-like` becomes `Keratosis-Like`.
pub fn normalize_label(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut in_word = false;

    for c in raw.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if in_word {
                normalized.extend(c.to_lowercase());
            } else {
                normalized.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            normalized.push(c);
            in_word = false;
        }
    }

    normalized
}
