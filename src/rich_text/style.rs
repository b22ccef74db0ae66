//! Inline `style` attribute model.
//!
//! A `style` attribute is never kept as an opaque string: it is parsed into
//! a `StyleSet` of `(property, value)` declarations so passes can reason
//! about `font-size`, `font-weight` or `color` individually, and so the
//! serializer can re-assemble it in one stable order.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a plain `em` length such as `1.875em` or `.5em`
static EM_LENGTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?|\.\d+)\s*em\s*$")
        .expect("EM_LENGTH_RE: hardcoded regex is valid")
});

/// Values that defer to inheritance or the initial value for any property
const GLOBAL_NOOP_VALUES: &[&str] = &["inherit", "initial", "unset", "revert"];

/// Property-specific values identical to what an unstyled element renders
const PROPERTY_NOOP_VALUES: &[(&str, &str)] = &[
    ("background-color", "transparent"),
    ("font-style", "normal"),
    ("font-weight", "400"),
    ("font-weight", "normal"),
    ("text-decoration", "none"),
];

/// Value fragments that can load resources or execute script
const UNSAFE_VALUE_FRAGMENTS: &[&str] = &["url(", "expression(", "javascript:", "\\"];

/// One parsed `property: value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    pub property: String,
    pub value: String,
}

impl StyleDeclaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Whether the declaration restates what inheritance already gives.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        let value = comparable_value(&self.value);
        GLOBAL_NOOP_VALUES.contains(&value.as_str())
            || PROPERTY_NOOP_VALUES
                .iter()
                .any(|(property, noop)| *property == self.property && *noop == value)
    }

    /// Whether the value could fetch a resource or run script when rendered.
    #[must_use]
    pub fn is_unsafe(&self) -> bool {
        let value = self.value.to_ascii_lowercase();
        let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
        UNSAFE_VALUE_FRAGMENTS
            .iter()
            .any(|fragment| compact.contains(fragment))
    }
}

fn comparable_value(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    lower
        .strip_suffix("!important")
        .unwrap_or(lower.as_str())
        .trim()
        .to_string()
}

/// Ordered, de-duplicated declaration set.
///
/// **INVARIANT:** declarations are sorted by property and each property
/// occurs once; when the source repeats a property the last one wins, as in
/// the CSS cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSet {
    declarations: Vec<StyleDeclaration>,
}

impl StyleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text of a `style` attribute.
    ///
    /// Malformed fragments (no colon, empty property or value, invalid
    /// property characters) are dropped rather than reported.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let declarations = source.split(';').filter_map(|fragment| {
            let (property, value) = fragment.split_once(':')?;
            let property = property.trim().to_ascii_lowercase();
            let value = collapse_spaces(value);
            let valid_property = !property.is_empty()
                && property
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-');
            (valid_property && !value.is_empty()).then(|| StyleDeclaration::new(property, value))
        });
        Self::from_declarations(declarations)
    }

    pub fn from_declarations(declarations: impl IntoIterator<Item = StyleDeclaration>) -> Self {
        let mut set = Self::new();
        for declaration in declarations {
            set.insert(declaration);
        }
        set
    }

    /// Insert or replace the declaration for its property.
    pub fn insert(&mut self, declaration: StyleDeclaration) {
        match self
            .declarations
            .binary_search_by(|d| d.property.as_str().cmp(&declaration.property))
        {
            Ok(index) => self.declarations[index] = declaration,
            Err(index) => self.declarations.insert(index, declaration),
        }
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .binary_search_by(|d| d.property.as_str().cmp(property))
            .ok()
            .map(|index| self.declarations[index].value.as_str())
    }

    pub fn retain(&mut self, keep: impl FnMut(&StyleDeclaration) -> bool) {
        self.declarations.retain(keep);
    }

    /// Add the declarations of `other` whose property is not set here.
    pub fn merge_missing(&mut self, other: &StyleSet) {
        for declaration in &other.declarations {
            if self.get(&declaration.property).is_none() {
                self.insert(declaration.clone());
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleDeclaration> {
        self.declarations.iter()
    }

    /// Canonical attribute text: `color: red; font-weight: bold;`
    #[must_use]
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|d| format!("{}: {};", d.property, d.value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn collapse_spaces(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse an `em` length into its numeric value.
///
/// Returns `None` for any other unit or malformed input.
#[must_use]
pub fn parse_em_length(value: &str) -> Option<f64> {
    EM_LENGTH_RE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
