//! UI strings for the search frontend.
//!
//! Strings may contain `{{ name }}` placeholders. Keys with a `_plural`
//! sibling are selected by count.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is valid"));

/// Suffix selecting the plural variant of a key.
pub const PLURAL_SUFFIX: &str = "_plural";

/// Translation table used by the search UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translations {
    pub search_placeholder: String,
    pub see_all_results: String,
    pub no_results: String,
    pub search_results_for: String,
    pub search_the_documentation: String,
    pub count_documents_found: String,
    pub count_documents_found_plural: String,
    pub no_documents_were_found: String,
}

impl Default for Translations {
    fn default() -> Self {
        Self {
            search_placeholder: "Search".to_string(),
            see_all_results: "See all results".to_string(),
            no_results: "No results.".to_string(),
            search_results_for: "Search results for \"{{ keyword }}\"".to_string(),
            search_the_documentation: "Search the documentation".to_string(),
            count_documents_found: "{{ count }} document found".to_string(),
            count_documents_found_plural: "{{ count }} documents found".to_string(),
            no_documents_were_found: "No documents were found".to_string(),
        }
    }
}

impl Translations {
    /// Look up a string by id.
    pub fn get(&self, id: &str) -> Option<&str> {
        let value = match id {
            "search_placeholder" => &self.search_placeholder,
            "see_all_results" => &self.see_all_results,
            "no_results" => &self.no_results,
            "search_results_for" => &self.search_results_for,
            "search_the_documentation" => &self.search_the_documentation,
            "count_documents_found" => &self.count_documents_found,
            "count_documents_found_plural" => &self.count_documents_found_plural,
            "no_documents_were_found" => &self.no_documents_were_found,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Look up a string and fill in its placeholders.
    ///
    /// Placeholders without a matching parameter are left as written.
    pub fn translate(&self, id: &str, params: &[(&str, &str)]) -> Option<String> {
        self.get(id).map(|template| interpolate(template, params))
    }

    /// Look up a count-dependent string, using the `_plural` variant when
    /// `count != 1`, and fill in `{{ count }}`.
    pub fn translate_count(&self, id: &str, count: usize) -> Option<String> {
        let count_str = count.to_string();
        let template = if count == 1 {
            self.get(id)
        } else {
            self.get(&format!("{id}{PLURAL_SUFFIX}")).or_else(|| self.get(id))
        }?;
        Some(interpolate(template, &[("count", &count_str)]))
    }
}

/// Replace `{{ name }}` placeholders with the matching parameter values.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let replaced: Cow<'_, str> = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        params
            .iter()
            .find(|(name, _)| *name == &caps[1])
            .map_or_else(|| caps[0].to_string(), |(_, value)| (*value).to_string())
    });
    replaced.into_owned()
}
