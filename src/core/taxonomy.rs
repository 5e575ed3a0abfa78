use serde::Deserialize;

/// A sector category and the keywords that signal it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectorCategory {
    pub key: String,
    pub keywords: Vec<String>,
}

impl SectorCategory {
    pub fn new(key: &str, keywords: &[&str]) -> Self {
        Self {
            key: key.to_lowercase(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// True when `text` (already lower-cased) mentions the category key
    #[inline]
    pub fn names_key(&self, text: &str) -> bool {
        text.contains(self.key.as_str())
    }

    /// True when `text` (already lower-cased) mentions any related keyword
    #[inline]
    pub fn names_keyword(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

/// Synonym table used by the industry factor
#[derive(Debug, Clone, PartialEq)]
pub struct SectorTaxonomy {
    categories: Vec<SectorCategory>,
}

impl SectorTaxonomy {
    pub fn new(categories: Vec<SectorCategory>) -> Self {
        let mut taxonomy = Self { categories: Vec::new() };
        taxonomy.extend(categories);
        taxonomy
    }

    /// Built-in categories
    pub fn builtin() -> Self {
        Self::new(vec![
            SectorCategory::new(
                "fintech",
                &["finance", "banking", "payment", "cryptocurrency", "blockchain"],
            ),
            SectorCategory::new(
                "healthtech",
                &["healthcare", "medical", "biotech", "pharma", "wellness"],
            ),
            SectorCategory::new(
                "edtech",
                &["education", "learning", "training", "e-learning", "school"],
            ),
            SectorCategory::new(
                "proptech",
                &["real estate", "property", "construction", "housing"],
            ),
            SectorCategory::new(
                "retailtech",
                &["ecommerce", "e-commerce", "retail", "marketplace", "consumer"],
            ),
            SectorCategory::new(
                "foodtech",
                &["food", "agriculture", "agritech", "restaurant", "grocery"],
            ),
            SectorCategory::new(
                "mobility",
                &["transportation", "automotive", "logistics", "electric vehicle", "ride"],
            ),
            SectorCategory::new(
                "energy",
                &["cleantech", "renewable", "solar", "sustainability", "climate"],
            ),
        ])
    }

    /// Merge categories in. Keywords of an existing key are appended,
    /// unknown keys become new categories.
    pub fn extend<I>(&mut self, categories: I)
    where
        I: IntoIterator<Item = SectorCategory>,
    {
        for category in categories {
            let key = category.key.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }

            let keywords = category
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty());

            match self.categories.iter().position(|c| c.key == key) {
                Some(idx) => {
                    let existing = &mut self.categories[idx];
                    for keyword in keywords {
                        if !existing.keywords.contains(&keyword) {
                            existing.keywords.push(keyword);
                        }
                    }
                }
                None => self.categories.push(SectorCategory {
                    key,
                    keywords: keywords.collect(),
                }),
            }
        }
    }

    pub fn categories(&self) -> &[SectorCategory] {
        &self.categories
    }
}

impl Default for SectorTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Ordered funding stages, earliest first
const LADDER: &[&str] = &[
    "idea", "pre seed", "seed", "series a", "series b", "series c", "growth", "ipo",
];

/// Profile stage labels that sit off the ladder, and the rung they map to
const STAGE_ALIASES: &[(&str, &str)] = &[
    ("mvp", "seed"),
    ("revenue", "series a"),
    ("preseed", "pre seed"),
];

/// Ordered stage vocabulary used by the stage factor.
///
/// Profile setup stores `Idea | MVP | Revenue` while investors pick from the
/// funding-round ladder. With aliases enabled `MVP` and `Revenue` are placed
/// on the ladder; without them they are off-ladder and only ever score the
/// floor.
#[derive(Debug, Clone, PartialEq)]
pub struct StageLadder {
    aliases: bool,
}

impl StageLadder {
    pub fn new(aliases: bool) -> Self {
        Self { aliases }
    }

    /// Ladder without profile-stage aliases
    pub fn strict() -> Self {
        Self::new(false)
    }

    pub fn uses_aliases(&self) -> bool {
        self.aliases
    }

    /// Rung index of a stage label, if it is on the ladder
    pub fn position(&self, label: &str) -> Option<usize> {
        let normalized = normalize_stage(label);

        let rung = if self.aliases {
            STAGE_ALIASES
                .iter()
                .find(|(alias, _)| *alias == normalized)
                .map(|(_, rung)| *rung)
                .unwrap_or(normalized.as_str())
        } else {
            normalized.as_str()
        };

        LADDER.iter().position(|r| *r == rung)
    }
}

impl Default for StageLadder {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Lower-case, treat `-`/`_` as spaces and collapse whitespace
pub fn normalize_stage(label: &str) -> String {
    label
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
