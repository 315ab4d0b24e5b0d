use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

/// `id`/`class` attributes of an element, used to match stylesheet rules
/// against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTarget {
    id: Option<String>,
    classes: Vec<String>,
}

impl StyleTarget {
    #[must_use]
    pub fn new(id: Option<&str>, class: Option<&str>) -> Self {
        Self {
            id: id
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
            classes: class
                .map(|c| c.split_whitespace().map(str::to_owned).collect())
                .unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn with_id(id: &str) -> Self {
        Self::new(Some(id), None)
    }

    #[must_use]
    pub fn with_class(class: &str) -> Self {
        Self::new(None, Some(class))
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selector {
    Id(String),
    Class(String),
}

impl Selector {
    /// Accepts only the two selector shapes presentation resolution is
    /// defined over: a single `#id` or a single `.class`. Anything else
    /// (element selectors, combinators, pseudo-classes) is ignored.
    fn parse(token: &str) -> Option<Self> {
        let (kind, name): (fn(String) -> Self, &str) = if let Some(rest) = token.strip_prefix('#') {
            (Self::Id, rest)
        } else if let Some(rest) = token.strip_prefix('.') {
            (Self::Class, rest)
        } else {
            return None;
        };

        let simple = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        simple.then(|| kind(name.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct StyleRule {
    selector: Selector,
    properties: IndexMap<String, String>,
}

static RULE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)([^{}]+)\{([^{}]*)\}").expect("rule-block pattern is a valid regex")
});

/// A parsed stylesheet, reduced to the part presentation resolution reads:
/// custom properties on simple `#id`/`.class` rules.
///
/// Parsing never fails. Rules and declarations that cannot be read are
/// dropped, matching the policy that presentation resolution degrades to
/// defaults instead of erroring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    #[must_use]
    pub fn parse(css: &str) -> Self {
        let mut rules = Vec::new();
        for block in RULE_BLOCK.captures_iter(css) {
            let properties = parse_declarations(&block[2]);
            if properties.is_empty() {
                continue;
            }
            for token in block[1].split(',') {
                if let Some(selector) = Selector::parse(token.trim()) {
                    rules.push(StyleRule {
                        selector,
                        properties: properties.clone(),
                    });
                }
            }
        }
        Self { rules }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Custom property from a rule matching the target's `id`. Later rules
    /// win, as in CSS.
    #[must_use]
    pub fn id_property(&self, target: &StyleTarget, name: &str) -> Option<&str> {
        let id = target.id()?;
        self.rules
            .iter()
            .filter(|rule| matches!(&rule.selector, Selector::Id(rule_id) if rule_id == id))
            .filter_map(|rule| rule.properties.get(name))
            .next_back()
            .map(String::as_str)
    }

    /// Custom property from a rule matching any of the target's classes.
    #[must_use]
    pub fn class_property(&self, target: &StyleTarget, name: &str) -> Option<&str> {
        self.rules
            .iter()
            .filter(|rule| match &rule.selector {
                Selector::Class(class) => target.classes().iter().any(|c| c == class),
                Selector::Id(_) => false,
            })
            .filter_map(|rule| rule.properties.get(name))
            .next_back()
            .map(String::as_str)
    }
}

fn parse_declarations(body: &str) -> IndexMap<String, String> {
    let mut properties = IndexMap::new();
    for declaration in body.split(';') {
        let Some((name, value)) = declaration.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim();
        // Only custom properties are part of the chart styling surface.
        if name.starts_with("--") && !value.is_empty() {
            properties.insert(name.to_owned(), value.to_owned());
        }
    }
    properties
}
