// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles for every embedded locale and the lookup helpers used by
//! views.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when neither the CLI, the config nor the OS name one we ship.
pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .field("available_locales", &self.available_locales)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
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
                log::warn!("ignoring translation file with invalid locale: {}", filename);
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
                log::warn!("{} has {} syntax error(s)", filename, errors.len());
                partial
            });
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::warn!("{} redefines {} message(s)", filename, errors.len());
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(default_locale);

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

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting `{ $name }` placeables from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

/// Picks the first locale we ship from: CLI flag, config file, OS locale.
/// Matching falls back to the language subtag (`ru-RU` picks `ru`).
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find_map(|wanted| match_available(&wanted, available))
}

fn match_available(
    wanted: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    available
        .iter()
        .find(|locale| *locale == wanted)
        .or_else(|| {
            available
                .iter()
                .find(|locale| locale.language == wanted.language)
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs(raw: &[&str]) -> Vec<LanguageIdentifier> {
        raw.iter().map(|s| s.parse().expect("valid locale")).collect()
    }

    #[test]
    fn cli_language_wins_over_config() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let available = langs(&["en-US", "ru"]);
        let lang = resolve_locale(Some("ru".to_string()), &config, &available);
        assert_eq!(lang, Some("ru".parse().expect("locale")));
    }

    #[test]
    fn config_language_is_used_without_cli() {
        let mut config = Config::default();
        config.general.language = Some("ru".to_string());
        let available = langs(&["en-US", "ru"]);
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("ru".parse().expect("locale")));
    }

    #[test]
    fn region_variants_fall_back_to_language() {
        let available = langs(&["en-US", "ru"]);
        let wanted: LanguageIdentifier = "ru-RU".parse().expect("locale");
        assert_eq!(
            match_available(&wanted, &available),
            Some("ru".parse().expect("locale"))
        );
    }

    #[test]
    fn unknown_cli_language_is_skipped() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let available = langs(&["en-US", "ru"]);
        let lang = resolve_locale(Some("zz".to_string()), &config, &available);
        assert_eq!(lang, Some("en-US".parse().expect("locale")));
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert!(i18n.available_locales.len() >= 2);
        assert_eq!(i18n.tr("window-title"), "Pain Map");
    }

    #[test]
    fn missing_keys_are_marked() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_substituted() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let text = i18n.tr_with_args("confirm-title", &[("zone", "Forehead")]);
        assert!(text.contains("Forehead"));
    }

    #[test]
    fn every_locale_defines_the_english_keys() {
        let english = Asset::get("en-US.ftl").expect("english bundle");
        let english = String::from_utf8_lossy(english.data.as_ref()).to_string();
        let keys: Vec<&str> = english
            .lines()
            .filter_map(|line| line.split_once(" = ").map(|(key, _)| key.trim()))
            .filter(|key| !key.starts_with('#') && !key.is_empty())
            .collect();

        assert!(keys.contains(&"hovered-zone"));

        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        for locale in &i18n.available_locales {
            let bundle = i18n.bundles.get(locale).expect("bundle per locale");
            for key in &keys {
                assert!(bundle.has_message(key), "{} lacks {}", locale, key);
            }
        }
    }

    #[test]
    fn placeable_keys_format_in_every_locale() {
        let mut i18n = I18n::new(Some("en-US".into()), &Config::default());
        for locale in i18n.available_locales.clone() {
            i18n.set_locale(locale.clone());
            let text = i18n.tr_with_args("hovered-zone", &[("zone", "Forehead")]);
            assert!(text.contains("Forehead"), "{}: {}", locale, text);
        }
    }
}
