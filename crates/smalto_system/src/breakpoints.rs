//! Ordered breakpoint table and media-query generation.
//!
//! Breakpoints are named viewport-width thresholds. Query methods return
//! literal CSS media-query strings; since CSS range conditions are inclusive,
//! exclusive upper bounds subtract `step / 100` from the threshold.

use enum_assoc::Assoc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::soft_warn;

/// Tier names of the default five-tier breakpoint scale.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn as_str(&self) -> &'static str)]
pub enum Breakpoint {
    /// Phones.
    #[assoc(as_str = "xs")]
    Xs,
    /// Tablets.
    #[assoc(as_str = "sm")]
    Sm,
    /// Small laptops.
    #[assoc(as_str = "md")]
    Md,
    /// Desktops.
    #[assoc(as_str = "lg")]
    Lg,
    /// Large screens.
    #[assoc(as_str = "xl")]
    Xl,
}

impl AsRef<str> for Breakpoint {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Options accepted by [`Breakpoints::new`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointsOptions {
    /// Each breakpoint name matched with a fixed screen width. Defaults to
    /// `xs: 0, sm: 600, md: 900, lg: 1200, xl: 1536`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<IndexMap<String, f64>>,
    /// The unit used for the breakpoint values. Defaults to `"px"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// The increment divided by 100 used to implement exclusive bounds, so
    /// `step: 5` makes `down(600)` end at `599.95`. Defaults to `5`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

/// A breakpoint key or an absolute viewport width.
#[derive(Clone, Debug, PartialEq)]
pub enum BreakpointQuery {
    Key(String),
    Width(f64),
}

impl From<&str> for BreakpointQuery {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for BreakpointQuery {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<f64> for BreakpointQuery {
    fn from(width: f64) -> Self {
        Self::Width(width)
    }
}

impl From<Breakpoint> for BreakpointQuery {
    fn from(breakpoint: Breakpoint) -> Self {
        Self::Key(breakpoint.as_str().to_string())
    }
}

fn default_values() -> IndexMap<String, f64> {
    IndexMap::from([
        ("xs".to_string(), 0.0),
        ("sm".to_string(), 600.0),
        ("md".to_string(), 900.0),
        ("lg".to_string(), 1200.0),
        ("xl".to_string(), 1536.0),
    ])
}

/// An ordered breakpoint table with derived media-query generators.
///
/// Entries are sorted ascending by value at construction and the table is
/// immutable afterwards, so every query method is a pure read.
#[derive(Clone, Debug, Serialize)]
pub struct Breakpoints {
    values: IndexMap<String, f64>,
    unit: String,
    step: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(BreakpointsOptions::default())
    }
}

impl<'de> Deserialize<'de> for Breakpoints {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let options = BreakpointsOptions::deserialize(deserializer)?;
        Ok(Self::new(options))
    }
}

impl Breakpoints {
    pub fn new(options: BreakpointsOptions) -> Self {
        let BreakpointsOptions { values, unit, step } = options;

        let mut entries: Vec<(String, f64)> =
            values.unwrap_or_else(default_values).into_iter().collect();
        entries.sort_by(|left, right| left.1.total_cmp(&right.1));

        Self {
            values: entries.into_iter().collect(),
            unit: unit.unwrap_or_else(|| "px".to_string()),
            step: step.unwrap_or(5.0),
        }
    }

    /// Breakpoint names in ascending threshold order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The name→threshold mapping, sorted ascending by threshold.
    pub fn values(&self) -> &IndexMap<String, f64> {
        &self.values
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Matches screen widths at least as wide as `query` (inclusive).
    pub fn up(&self, query: impl Into<BreakpointQuery>) -> String {
        format!("@media (min-width:{}{})", self.resolve(query.into()), self.unit)
    }

    /// Matches screen widths narrower than `query` (exclusive).
    pub fn down(&self, query: impl Into<BreakpointQuery>) -> String {
        format!(
            "@media (max-width:{}{})",
            self.resolve(query.into()) - self.step / 100.0,
            self.unit
        )
    }

    /// Matches screen widths from `start` (inclusive) to `end` (exclusive).
    pub fn between(
        &self,
        start: impl Into<BreakpointQuery>,
        end: impl Into<BreakpointQuery>,
    ) -> String {
        format!(
            "@media (min-width:{}{}) and (max-width:{}{})",
            self.resolve(start.into()),
            self.unit,
            self.resolve(end.into()) - self.step / 100.0,
            self.unit
        )
    }

    /// Matches only the span of `key`: from its threshold (inclusive) to the
    /// next key's threshold (exclusive), or open-ended for the last key.
    pub fn only(&self, key: impl AsRef<str>) -> String {
        let key = key.as_ref();

        match self.successor(key) {
            Some(next) => self.between(key, next),
            None => self.up(key),
        }
    }

    /// Matches everything except the span of `key`.
    pub fn not(&self, key: impl AsRef<str>) -> String {
        let key = key.as_ref();

        // A key with no successor has an open-ended span; its complement is
        // everything below the threshold. This also covers single-key tables
        // and unknown keys.
        let Some(next) = self.successor(key) else {
            return self.down(key);
        };

        if self.values.get_index_of(key) == Some(0) {
            return self.up(next);
        }

        self.between(key, next)
            .replacen("@media", "@media not all and", 1)
    }

    fn successor(&self, key: &str) -> Option<String> {
        let index = self.values.get_index_of(key)?;
        self.values.get_index(index + 1).map(|(next, _)| next.clone())
    }

    fn resolve(&self, query: BreakpointQuery) -> f64 {
        match query {
            BreakpointQuery::Width(width) => width,
            BreakpointQuery::Key(key) => match self.values.get(key.as_str()) {
                Some(value) => *value,
                None => {
                    soft_warn!(
                        "breakpoint key `{key}` is not defined; resolving to 0"
                    );
                    0.0
                }
            },
        }
    }
}
