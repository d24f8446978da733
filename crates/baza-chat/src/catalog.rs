//! Intent catalog: ordered canned question/answer pairs with trigger keywords.
//!
//! The catalog is built once at start-up, either from the built-in table or
//! from a TOML file, and never mutated afterwards. Declaration order is the
//! only priority between entries whose keywords overlap.

use std::path::Path;

use baza_core::BazaError;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CatalogError;

/// Built-in intents: (question, answer, keywords).
const BUILTIN_INTENTS: &[(&str, &str, &[&str])] = &[
    (
        "Как записаться?",
        "Вы можете записаться через форму на сайте, по телефону +420 123 456 789 или в Instagram @baza.barbershop",
        &["запись", "записаться", "как записаться", "онлайн"],
    ),
    (
        "Сколько стоит стрижка?",
        "Мужская стрижка от 600 CZK, борода от 400 CZK, комплекс от 900 CZK. Полный прайс в разделе Цены.",
        &["цена", "стоимость", "сколько", "прайс", "цены"],
    ),
    (
        "Где вы находитесь?",
        "Мы в Праге, район Vinohrady. Точный адрес: Náměstí Míru 15. Работаем ежедневно с 9:00 до 21:00.",
        &["адрес", "где", "локация", "место", "прага"],
    ),
    (
        "Нужна ли предоплата?",
        "Нет, предоплата не требуется. Но просим предупреждать об отмене минимум за 2 часа.",
        &["предоплата", "оплата", "залог"],
    ),
];

/// One canned question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentEntry {
    question: String,
    answer: String,
    /// Lower-case, trimmed, deduplicated.
    keywords: Vec<String>,
}

impl IntentEntry {
    /// Display-only question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if any keyword occurs in `normalized` (already trimmed and lower-cased).
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// Intent definition as written in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentDefinition {
    #[serde(default)]
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// On-disk catalog layout: a list of `[[intents]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub intents: Vec<IntentDefinition>,
}

/// Ordered, immutable collection of intents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntentCatalog {
    entries: Vec<IntentEntry>,
}

impl IntentCatalog {
    /// The barbershop's built-in FAQ.
    pub fn builtin() -> Self {
        let entries = BUILTIN_INTENTS
            .iter()
            .map(|(question, answer, keywords)| IntentEntry {
                question: (*question).to_string(),
                answer: (*answer).to_string(),
                keywords: normalize_keywords(keywords.iter().copied()),
            })
            .collect();
        Self { entries }
    }

    /// Build a catalog from definitions, normalizing keywords.
    ///
    /// Keywords are trimmed and lower-cased; duplicates within an entry are
    /// dropped. An entry with an empty answer, no keywords, or a blank keyword
    /// is rejected.
    pub fn from_definitions(definitions: Vec<IntentDefinition>) -> Result<Self, CatalogError> {
        let mut entries = Vec::with_capacity(definitions.len());

        for (index, def) in definitions.into_iter().enumerate() {
            if def.answer.trim().is_empty() {
                return Err(CatalogError::EmptyAnswer(index));
            }
            if def.keywords.is_empty() {
                return Err(CatalogError::NoKeywords(index));
            }
            if def.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(CatalogError::EmptyKeyword(index));
            }

            entries.push(IntentEntry {
                question: def.question,
                answer: def.answer,
                keywords: normalize_keywords(def.keywords.iter().map(String::as_str)),
            });
        }

        Ok(Self { entries })
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content).map_err(BazaError::from)?;
        Self::from_definitions(file.intents)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(BazaError::from)?;
        let catalog = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            intents = catalog.len(),
            "Intent catalog loaded"
        );
        Ok(catalog)
    }

    pub fn entries(&self) -> &[IntentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display-only questions in declaration order.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(IntentEntry::question)
    }
}

fn normalize_keywords<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in raw {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }
    keywords
}
