//! Localized rendering of human-readable strings.
//!
//! Templates carry named placeholders whose first character selects how the
//! argument is inserted:
//!
//! - `@name`: HTML-escaped.
//! - `%name`: HTML-escaped and wrapped in `<em class="placeholder">`.
//! - `:name`: HTML-escaped; meant for URLs.
//!
//! Argument keys include the sigil (`"@description"`). Keys without one are
//! inserted verbatim. Placeholders with no matching argument are left alone.

use refgraph_config::TranslationConfig;
use std::collections::BTreeMap;

///
/// Translator
///

pub trait Translator {
    /// Translate `template` and substitute `args` into it.
    fn translate(&self, template: &str, args: &[(&str, &str)]) -> String;
}

///
/// Untranslated
/// Renders source templates as-is.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn translate(&self, template: &str, args: &[(&str, &str)]) -> String {
        format_placeholders(template, args)
    }
}

///
/// TranslationTable
///
/// Source template → translated template for a single language. Missing
/// entries fall back to the source template.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TranslationTable {
    language: String,
    strings: BTreeMap<String, String>,
}

impl TranslationTable {
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            strings: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_string(mut self, source: impl Into<String>, translated: impl Into<String>) -> Self {
        self.strings.insert(source.into(), translated.into());
        self
    }

    /// Build a table from the `[translations]` config section, if it names
    /// a language.
    #[must_use]
    pub fn from_config(config: &TranslationConfig) -> Option<Self> {
        let language = config.language.as_ref()?;

        Some(Self {
            language: language.clone(),
            strings: config.strings.clone(),
        })
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Translator for TranslationTable {
    fn translate(&self, template: &str, args: &[(&str, &str)]) -> String {
        let translated = self.strings.get(template).map_or(template, String::as_str);

        format_placeholders(translated, args)
    }
}

/// Substitute `args` into `template`, longest matching key first.
#[must_use]
pub fn format_placeholders(template: &str, args: &[(&str, &str)]) -> String {
    let mut keys = args
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .collect::<Vec<_>>();
    keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(c) = rest.chars().next() {
        for (key, value) in &keys {
            if let Some(after) = rest.strip_prefix(*key) {
                push_argument(&mut out, key, value);
                rest = after;
                continue 'scan;
            }
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn push_argument(out: &mut String, key: &str, value: &str) {
    match key.chars().next() {
        Some('@' | ':') => push_escaped(out, value),
        Some('%') => {
            out.push_str("<em class=\"placeholder\">");
            push_escaped(out, value);
            out.push_str("</em>");
        }
        _ => out.push_str(value),
    }
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_and_escapes_by_sigil() {
        let out = format_placeholders(
            "@a / %a / :url / raw",
            &[
                ("@a", "<b>"),
                ("%a", "x&y"),
                (":url", "/t?a=1&b=2"),
                ("raw", "R"),
            ],
        );

        assert_eq!(
            out,
            "&lt;b&gt; / <em class=\"placeholder\">x&amp;y</em> / /t?a=1&amp;b=2 / R"
        );
    }

    #[test]
    fn longest_key_wins() {
        let out = format_placeholders(
            "@description and @desc",
            &[("@desc", "short"), ("@description", "long")],
        );

        assert_eq!(out, "long and short");
    }

    #[test]
    fn unmatched_placeholders_are_kept() {
        assert_eq!(
            format_placeholders("Reverse reference: @description", &[]),
            "Reverse reference: @description"
        );
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        assert_eq!(
            format_placeholders("@a", &[("@a", "@b"), ("@b", "nope")]),
            "@b"
        );
    }

    #[test]
    fn table_falls_back_to_source_template() {
        let table = TranslationTable::new("de").with_string(
            "Reverse reference: @description",
            "Rückverweis: @description",
        );

        assert_eq!(table.language(), "de");
        assert_eq!(
            table.translate(
                "Reverse reference: @description",
                &[("@description", "Schlagwörter")],
            ),
            "Rückverweis: Schlagwörter"
        );
        assert_eq!(
            table.translate("Untranslated @x", &[("@x", "ü")]),
            "Untranslated ü"
        );
    }

    #[test]
    fn table_from_config_requires_language() {
        let mut config = TranslationConfig::default();
        assert!(TranslationTable::from_config(&config).is_none());

        config.language = Some("fr".to_string());
        config
            .strings
            .insert("a".to_string(), "b".to_string());
        let table = TranslationTable::from_config(&config).expect("language is set");

        assert_eq!(table.translate("a", &[]), "b");
    }
}
