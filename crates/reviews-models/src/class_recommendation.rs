use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative bucket attached to a review.
///
/// Nominally tracks the numeric rating but is never recomputed from it.
/// Strings outside the canonical six (older catalogs used a second scheme,
/// see [`LEGACY_CLASS_RECOMMENDATIONS`]) are kept verbatim in `Other` so that
/// reading a document never fails and writing it back is lossless.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClassRecommendation {
    Masterclass,
    CouncilClass,
    Recommendable,
    Rewatchable,
    Existent,
    Meme,
    Other(String),
}

/// Class names from the older tone-based scheme still found in stored documents
pub const LEGACY_CLASS_RECOMMENDATIONS: [&str; 6] = [
    "Must Watch",
    "Highly Recommended",
    "Worth Your Time",
    "Casual Viewing",
    "Skip It",
    "Guilty Pleasure",
];

impl ClassRecommendation {
    /// Canonical classes, best first
    pub const CANONICAL: [ClassRecommendation; 6] = [
        ClassRecommendation::Masterclass,
        ClassRecommendation::CouncilClass,
        ClassRecommendation::Recommendable,
        ClassRecommendation::Rewatchable,
        ClassRecommendation::Existent,
        ClassRecommendation::Meme,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ClassRecommendation::Masterclass => "Masterclass",
            ClassRecommendation::CouncilClass => "Council Class",
            ClassRecommendation::Recommendable => "Recommendable",
            ClassRecommendation::Rewatchable => "Rewatchable",
            ClassRecommendation::Existent => "Existent",
            ClassRecommendation::Meme => "Meme",
            ClassRecommendation::Other(value) => value,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, ClassRecommendation::Other(_))
    }

    pub fn is_legacy(&self) -> bool {
        match self {
            ClassRecommendation::Other(value) => LEGACY_CLASS_RECOMMENDATIONS.contains(&value.as_str()),
            _ => false,
        }
    }

    /// Nominal rating range as shown next to the class (ranges overlap at the edges)
    pub fn range_label(&self) -> Option<&'static str> {
        match self {
            ClassRecommendation::Masterclass => Some("9.5-10"),
            ClassRecommendation::CouncilClass => Some("8.7-9.6"),
            ClassRecommendation::Recommendable => Some("7.7-8.7"),
            ClassRecommendation::Rewatchable => Some("6.8-7.8"),
            ClassRecommendation::Existent => Some("6.0-6.8"),
            ClassRecommendation::Meme => Some("0-6.0"),
            ClassRecommendation::Other(_) => None,
        }
    }

    fn lower_bound(&self) -> Option<f64> {
        match self {
            ClassRecommendation::Masterclass => Some(9.5),
            ClassRecommendation::CouncilClass => Some(8.7),
            ClassRecommendation::Recommendable => Some(7.7),
            ClassRecommendation::Rewatchable => Some(6.8),
            ClassRecommendation::Existent => Some(6.0),
            ClassRecommendation::Meme => Some(0.0),
            ClassRecommendation::Other(_) => None,
        }
    }

    /// Suggest a class for a rating: the best class whose lower bound the rating reaches.
    ///
    /// Only a hint for whoever is writing the review; stored classes are never
    /// derived from this.
    pub fn suggest_for_rating(rating: f64) -> ClassRecommendation {
        Self::CANONICAL
            .iter()
            .find(|class| class.lower_bound().map(|low| rating >= low).unwrap_or(false))
            .cloned()
            .unwrap_or(ClassRecommendation::Meme)
    }
}

impl From<String> for ClassRecommendation {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Masterclass" => ClassRecommendation::Masterclass,
            "Council Class" => ClassRecommendation::CouncilClass,
            "Recommendable" => ClassRecommendation::Recommendable,
            "Rewatchable" => ClassRecommendation::Rewatchable,
            "Existent" => ClassRecommendation::Existent,
            "Meme" => ClassRecommendation::Meme,
            _ => ClassRecommendation::Other(value),
        }
    }
}

impl From<&str> for ClassRecommendation {
    fn from(value: &str) -> Self {
        ClassRecommendation::from(value.to_string())
    }
}

impl From<ClassRecommendation> for String {
    fn from(value: ClassRecommendation) -> Self {
        match value {
            ClassRecommendation::Other(value) => value,
            canonical => canonical.as_str().to_string(),
        }
    }
}

impl Default for ClassRecommendation {
    fn default() -> Self {
        ClassRecommendation::Other(String::new())
    }
}

impl fmt::Display for ClassRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
