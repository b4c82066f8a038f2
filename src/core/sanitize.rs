// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Card label for a name: sex glyphs spelled out, empty becomes "Unknown".
pub fn display_name(name: &str) -> String {
    if name.is_empty() {
        return "Unknown".to_string();
    }
    name.replace('♀', " (F)").replace('♂', " (M)")
}

/// Artwork file stem: lower-cased, each whitespace run becomes one `-`, dots dropped.
/// No trimming, so surrounding whitespace also turns into hyphens.
pub fn artwork_slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_ws = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_ws { out.push('-'); in_ws = true; }
            continue;
        }
        in_ws = false;
        if ch == '.' { continue; }
        out.extend(ch.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  #001 \n\t Bulbasaur  "), "#001 Bulbasaur");
    }

    #[test]
    fn display_name_spells_out_sex_glyphs() {
        assert_eq!(display_name("Nidoran♀"), "Nidoran (F)");
        assert_eq!(display_name("Nidoran♂"), "Nidoran (M)");
        assert_eq!(display_name("Pikachu"), "Pikachu");
        assert_eq!(display_name(""), "Unknown");
    }

    #[test]
    fn slug_rules() {
        assert_eq!(artwork_slug("Charmander"), "charmander");
        assert_eq!(artwork_slug("Mr. Mime"), "mr-mime");
        assert_eq!(artwork_slug("Mime Jr."), "mime-jr");
        assert_eq!(artwork_slug("Tapu  \t Koko"), "tapu-koko");
        assert_eq!(artwork_slug(" Eevee "), "-eevee-");
        assert_eq!(artwork_slug("Farfetch'd"), "farfetch'd");
    }
}
