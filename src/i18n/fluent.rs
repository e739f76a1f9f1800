// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

fn default_locale() -> LanguageIdentifier {
    langid!("en-US")
}

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

fn load_bundle(locale: &LanguageIdentifier, filename: &str) -> Option<FluentBundle<FluentResource>> {
    let content = Asset::get(filename)?;
    let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(file = filename, errors = errors.len(), "translation file has syntax errors");
            resource
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Placeables would wrap arguments in Unicode isolation marks.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(file = filename, errors = errors.len(), "duplicate translation messages");
    }
    Some(bundle)
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            if let Some(bundle) = load_bundle(&locale, filename) {
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or_else(default_locale);
        tracing::debug!(locale = %current_locale, "selected UI locale");

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

    /// Translates `key` with named Fluent arguments.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            // Numeric strings become Fluent numbers so plural selectors work.
            match value.parse::<f64>() {
                Ok(number) => fluent_args.set(*name, number),
                Err(_) => fluent_args.set(*name, value.to_string()),
            }
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let fallback = default_locale();
        let formatted = [&self.current_locale, &fallback]
            .into_iter()
            .find_map(|locale| {
                let bundle = self.bundles.get(locale)?;
                let pattern = bundle.get_message(key)?.value()?;
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                errors.is_empty().then(|| value.to_string())
            })
            .unwrap_or_else(|| format!("MISSING: {key}"));
        formatted
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let supported = |lang: &str| {
        lang.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 2. Config file
    if let Some(lang) = config.general.language.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 3. OS locale, exact then by language only
    let os_locale = sys_locale::get_locale()?;
    let os_lang = os_locale.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&os_lang) {
        return Some(os_lang);
    }
    available
        .iter()
        .find(|candidate| candidate.language == os_lang.language)
        .cloned()
}
