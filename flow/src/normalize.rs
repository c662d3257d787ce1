//! Loose comparison of livestock type names.
//!
//! Seed data and the type chips do not agree on accents or number
//! ("Crías" vs "Cría", "Macho" vs "Machos"), so both sides go through
//! [`clean_type`] before comparing.
//!
//! Singularization is a single trailing-`s` strip. Irregular plurals are
//! not handled.

/// Lowercase, drop diacritics, trim, and strip one trailing `s`.
pub fn clean_type(raw: &str) -> String {
    let folded: String = raw.chars().flat_map(char::to_lowercase).filter_map(fold).collect();
    let trimmed = folded.trim();
    trimmed.strip_suffix('s').unwrap_or(trimmed).to_string()
}

/// Base letter for a lowercase char, `None` for a bare combining mark.
fn fold(c: char) -> Option<char> {
    if is_combining_mark(c) {
        return None;
    }
    Some(match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        other => other,
    })
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_and_singular_match() {
        assert_eq!(clean_type("Machos"), "macho");
        assert_eq!(clean_type("Macho"), "macho");
        assert_eq!(clean_type("Hembras"), clean_type("Hembra"));
    }

    #[test]
    fn test_accents_are_stripped() {
        assert_eq!(clean_type("Cría"), "cria");
        assert_eq!(clean_type("Crías"), "cria");
        // decomposed form: "i" followed by a combining acute accent
        assert_eq!(clean_type("Cri\u{0301}a"), "cria");
    }

    #[test]
    fn test_only_one_trailing_s_is_removed() {
        assert_eq!(clean_type("Todos"), "todo");
        assert_eq!(clean_type("ss"), "s");
        assert_eq!(clean_type("  Vacas  "), "vaca");
        assert_eq!(clean_type(""), "");
    }
}
