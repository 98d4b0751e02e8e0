use std::fmt;

/// A character to practice, as supplied by the session collaborator.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// The glyph itself, e.g. `"感"`.
    #[serde(alias = "character")]
    pub glyph: String,
    /// Expected number of strokes; unknown when `None` or non-positive.
    #[serde(default, alias = "strokeCount")]
    pub target_stroke_count: Option<i32>,
    /// Comma-separated on readings.
    #[serde(default)]
    pub onyomi: Option<String>,
    /// Comma-separated kun readings.
    #[serde(default)]
    pub kunyomi: Option<String>,
    /// Comma-separated meanings.
    #[serde(default)]
    pub meanings: Option<String>,
}

impl Character {
    /// Character with only a glyph and a stroke target.
    pub fn new(glyph: impl Into<String>, target_stroke_count: Option<i32>) -> Self {
        Self {
            glyph: glyph.into(),
            target_stroke_count,
            onyomi: None,
            kunyomi: None,
            meanings: None,
        }
    }

    /// Stroke count that completes the character, if one is known and positive.
    pub fn completion_target(&self) -> Option<u32> {
        self.target_stroke_count
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok())
    }

    /// Meanings split on commas.
    pub fn meaning_list(&self) -> Vec<&str> {
        split_list(self.meanings.as_deref())
    }

    /// On readings split on commas.
    pub fn onyomi_list(&self) -> Vec<&str> {
        split_list(self.onyomi.as_deref())
    }

    /// Kun readings split on commas.
    pub fn kunyomi_list(&self) -> Vec<&str> {
        split_list(self.kunyomi.as_deref())
    }
}

fn split_list(s: Option<&str>) -> Vec<&str> {
    s.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Drawn strokes against the target, for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeProgress {
    /// Valid strokes drawn on the current character.
    pub drawn: u32,
    /// Completion target, `None` when unknown.
    pub target: Option<u32>,
}

impl StrokeProgress {
    /// Whether a known target has been reached.
    pub fn is_complete(&self) -> bool {
        self.target.is_some_and(|t| self.drawn >= t)
    }
}

impl fmt::Display for StrokeProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(t) => write!(f, "{} / {}", self.drawn, t),
            None => write!(f, "{} / ∞", self.drawn),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/practice/character.rs"]
mod tests;
