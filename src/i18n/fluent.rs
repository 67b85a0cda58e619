// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                log::warn!("skipping translation file with invalid locale: {filename}");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    log::warn!("{} parse errors in {filename}", errors.len());
                    resource
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Isolation marks break plain-text rendering of placeables.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::warn!("{} duplicate messages in {filename}", errors.len());
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale = resolve_locale(
            cli_lang,
            config.general.language.as_deref(),
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or(default_locale);
        log::debug!("using locale {current_locale}");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting each `(name, value)` pair.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    os_lang: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |lang_str: &str| {
        lang_str
            .parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // CLI first, then config file, then OS locale
    cli_lang
        .as_deref()
        .and_then(pick)
        .or_else(|| config_lang.and_then(pick))
        .or_else(|| os_lang.as_deref().and_then(pick))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn cli_language_wins() {
        let lang = resolve_locale(Some("fr".to_string()), Some("en-US"), None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_language_is_used_without_cli() {
        let lang = resolve_locale(None, Some("fr"), Some("en-US".into()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unsupported_languages_fall_through() {
        let lang = resolve_locale(Some("de".into()), Some("es"), Some("fr".into()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
        assert_eq!(resolve_locale(None, None, Some("ja".into()), &available()), None);
    }

    #[test]
    fn bundled_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert!(i18n.available_locales.len() >= 2);
        assert_eq!(i18n.tr("layout-grid"), "Grid");
    }

    #[test]
    fn missing_keys_are_marked() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_substituted() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(
            i18n.tr_with_args("preview-status", &[("status", "404")]),
            "HTTP 404"
        );
    }
}
