use serde::Serialize;

/// The fixed vocabulary of mood labels the analysis endpoint may return.
///
/// The AI service is instructed to answer with one of these; anything
/// outside the vocabulary is rejected by the parser and replaced with a
/// deterministic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Inspirational,
    Motivational,
    Philosophical,
    Humorous,
    Melancholic,
    Optimistic,
    Contemplative,
    Wise,
    Uplifting,
}

impl Mood {
    /// Vocabulary in canonical order. Substring scanning relies on this
    /// order being stable.
    pub const ALL: [Mood; 9] = [
        Mood::Inspirational,
        Mood::Motivational,
        Mood::Philosophical,
        Mood::Humorous,
        Mood::Melancholic,
        Mood::Optimistic,
        Mood::Contemplative,
        Mood::Wise,
        Mood::Uplifting,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Inspirational => "inspirational",
            Mood::Motivational => "motivational",
            Mood::Philosophical => "philosophical",
            Mood::Humorous => "humorous",
            Mood::Melancholic => "melancholic",
            Mood::Optimistic => "optimistic",
            Mood::Contemplative => "contemplative",
            Mood::Wise => "wise",
            Mood::Uplifting => "uplifting",
        }
    }

    /// Theme color used when the AI names a mood but no usable color
    pub fn default_color(&self) -> &'static str {
        match self {
            Mood::Inspirational => "#FFD700",
            Mood::Motivational => "#FF6B35",
            Mood::Philosophical => "#6A5ACD",
            Mood::Humorous => "#FF69B4",
            Mood::Melancholic => "#4682B4",
            Mood::Optimistic => "#32CD32",
            Mood::Contemplative => "#9370DB",
            Mood::Wise => "#8B4513",
            Mood::Uplifting => "#00CED1",
        }
    }

    /// Looks up a vocabulary label. Matching is exact on the lowercased
    /// label.
    pub fn from_label(label: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|m| m.label() == label)
    }
}

/// Mood and theme color for one analyzed quote. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodResult {
    pub mood: Mood,
    pub color: String,
}

impl MoodResult {
    pub fn new(mood: Mood, color: impl Into<String>) -> Self {
        Self {
            mood,
            color: color.into(),
        }
    }
}
