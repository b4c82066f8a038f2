// src/sheet/winansi.rs
//! Unicode to WinAnsiEncoding (code page 1252) for the standard Type1 fonts.

/// Encode `text` for a WinAnsi font. Characters with no code point in the
/// encoding become `?`.
pub fn to_winansi(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

fn encode_char(ch: char) -> u8 {
    match ch as u32 {
        cp @ 0x20..=0x7E => cp as u8,
        cp @ 0xA0..=0xFF => cp as u8,
        _ => match ch {
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(to_winansi("Mr. Mime #122"), b"Mr. Mime #122");
    }

    #[test]
    fn latin1_and_cp1252_extras() {
        assert_eq!(to_winansi("Pokédex"), b"Pok\xE9dex");
        assert_eq!(to_winansi("Flabébé"), b"Flab\xE9b\xE9");
        assert_eq!(to_winansi("Farfetch’d"), b"Farfetch\x92d");
    }

    #[test]
    fn unmapped_becomes_question_mark() {
        assert_eq!(to_winansi("♀"), b"?");
        assert_eq!(to_winansi("ピカチュウ"), b"?????");
        assert_eq!(to_winansi("a\tb"), b"a?b");
    }
}
