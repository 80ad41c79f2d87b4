///
/// Case
///
/// Identifier transforms for schema names. Both functions take any number of
/// parts, treat every character outside `[A-Za-z0-9_]` as a word separator,
/// and only ever touch the first character of each word.
///
/// `camel_case` produces type-style names (`TagQueryFilterInput`) and
/// `prop_case` produces field-style names (`reverseTagsArticle`). Downstream
/// schema consumers match on the literal output, so the two stay separate.
///

/// Join `parts` into an upper camel case identifier.
///
/// Leading digits of the joined result are dropped.
#[must_use]
pub fn camel_case<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();

    for part in parts {
        for word in part
            .as_ref()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|word| !word.is_empty())
        {
            push_capitalized(&mut out, word);
        }
    }

    out.trim_start_matches(|c: char| c.is_ascii_digit()).to_string()
}

/// Join `parts` into a lower camel case identifier.
///
/// A result made only of upper-case letters (e.g. `("ID")`) is lowered as a
/// whole instead of just its first character.
#[must_use]
pub fn prop_case<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let camel = camel_case(parts);

    if is_all_upper(&camel) {
        return camel.to_ascii_lowercase();
    }

    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => camel,
    }
}

// upper-case the first ASCII character, keep the rest verbatim
fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
    }
}

fn is_all_upper(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_uppercase())
}

///
/// TESTS
///
