use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATOR_RUNS: Regex = Regex::new(r"\s+").unwrap();
}

/// Derives a URL-safe slug from a display title.
///
/// Lowercases, transliterates accented Latin, Cyrillic and Greek letters
/// and a handful of symbols, drops anything else that is not an ASCII letter or digit, and
/// joins the remaining words with single hyphens. Hyphens in the input are
/// word separators, so a slug maps to itself.
pub fn slugify(title: &str) -> String {
    let mut cleaned = String::with_capacity(title.len());

    for ch in title.to_lowercase().chars() {
        if ch == '-' || ch.is_whitespace() {
            cleaned.push(' ');
        } else if ch.is_ascii_alphanumeric() {
            cleaned.push(ch);
        } else if let Some(replacement) = transliterate(ch) {
            cleaned.push_str(replacement);
        }
    }

    SEPARATOR_RUNS.replace_all(cleaned.trim(), "-").into_owned()
}

fn transliterate(ch: char) -> Option<&'static str> {
    let replacement = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' | 'ĉ' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' | 'ĝ' | 'ģ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'ķ' => "k",
        'ł' | 'ľ' | 'ĺ' | 'ļ' => "l",
        'ñ' | 'ń' | 'ň' | 'ņ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ř' => "r",
        'ś' | 'š' | 'ş' | 'ș' => "s",
        'ß' => "ss",
        'ť' | 'ţ' | 'ț' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        // Cyrillic
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' | 'ґ' => "g",
        'д' => "d",
        'е' | 'э' => "e",
        'ё' => "yo",
        'є' => "ye",
        'ж' => "zh",
        'з' => "z",
        'и' | 'і' => "i",
        'ї' => "yi",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "c",
        'ч' => "ch",
        'ш' | 'щ' => "sh",
        'ъ' => "u",
        'ы' => "y",
        'ь' => "",
        'ю' => "yu",
        'я' => "ya",
        // Greek
        'α' | 'ά' => "a",
        'β' => "b",
        'γ' => "g",
        'δ' => "d",
        'ε' | 'έ' => "e",
        'ζ' => "z",
        'η' | 'ή' => "h",
        'θ' => "8",
        'ι' | 'ί' | 'ϊ' | 'ΐ' => "i",
        'κ' => "k",
        'λ' => "l",
        'μ' => "m",
        'ν' => "n",
        'ξ' => "3",
        'ο' | 'ό' => "o",
        'π' => "p",
        'ρ' => "r",
        'σ' | 'ς' => "s",
        'τ' => "t",
        'υ' | 'ύ' | 'ϋ' | 'ΰ' => "y",
        'φ' => "f",
        'χ' => "x",
        'ψ' => "ps",
        'ω' | 'ώ' => "w",
        '&' => "and",
        '$' => "dollar",
        '%' => "percent",
        '|' => "or",
        '<' => "less",
        '>' => "greater",
        '€' => "euro",
        '£' => "pound",
        '¢' => "cent",
        '©' => "c",
        '®' => "r",
        '™' => "tm",
        _ => return None,
    };
    Some(replacement)
}
