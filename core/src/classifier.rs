//! Category and priority classification strategies.
//!
//! Two interchangeable strategies cover the two deployed form variants:
//! fixed-choice (submitter picks category and severity, the strategy only
//! validates membership in the closed sets) and inferred (keyword groups
//! decide the category, sentiment polarity decides the urgency).

use crate::config::IntakeMode;
use crate::error::{IntakeError, IntakeResult};
use crate::record::{Category, Priority};
use vader_sentiment::SentimentIntensityAnalyzer;

/// The labels a strategy resolves for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub priority: Priority,
}

/// The contract both strategies fulfill. `category_choice` and
/// `severity_choice` carry the submitter's raw form values; the inferred
/// strategy ignores them.
pub trait Classifier {
    /// Unique stable name for this strategy.
    fn name(&self) -> &'static str;

    fn classify(
        &self,
        description: &str,
        category_choice: Option<&str>,
        severity_choice: Option<&str>,
    ) -> IntakeResult<Classification>;
}

/// Build the strategy for a configured mode.
pub fn for_mode(mode: IntakeMode) -> Box<dyn Classifier> {
    match mode {
        IntakeMode::FixedChoice => Box::new(FixedChoiceClassifier),
        IntakeMode::Inferred => Box::new(InferredClassifier::new()),
    }
}

// ── Fixed choice ─────────────────────────────────────────────────────

pub struct FixedChoiceClassifier;

impl Classifier for FixedChoiceClassifier {
    fn name(&self) -> &'static str {
        "fixed_choice"
    }

    /// No inference: parse both caller-supplied values and check
    /// membership. A missing value fails the same way an unknown one does.
    fn classify(
        &self,
        _description: &str,
        category_choice: Option<&str>,
        severity_choice: Option<&str>,
    ) -> IntakeResult<Classification> {
        let category = category_choice.unwrap_or("").parse::<Category>()?;
        let priority = severity_choice.unwrap_or("").parse::<Priority>()?;
        if !Priority::SEVERITY_SCALE.contains(&priority) {
            return Err(IntakeError::InvalidEnumValue {
                kind: "severity",
                value: priority.label().to_string(),
            });
        }
        Ok(Classification { category, priority })
    }
}

// ── Inferred ─────────────────────────────────────────────────────────

/// Keyword groups tested in order against the lower-cased description.
/// First group with any hit wins; no hit falls through to Misc.
const CATEGORY_KEYWORDS: [(&[&str], Category); 3] = [
    (
        &["hostel", "room", "water", "wifi", "electricity"],
        Category::Hostel,
    ),
    (&["laundry", "clothes", "washing"], Category::Laundry),
    (&["class", "teacher", "exam", "study"], Category::Academic),
];

/// Terms that force High urgency regardless of polarity.
const URGENCY_OVERRIDES: [&str; 2] = ["harass", "unsafe"];

pub struct InferredClassifier {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl InferredClassifier {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Compound sentiment polarity in [-1.0, 1.0]; negative means
    /// negative sentiment.
    fn polarity(&self, text: &str) -> f64 {
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}

impl Default for InferredClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for InferredClassifier {
    fn name(&self) -> &'static str {
        "inferred"
    }

    fn classify(
        &self,
        description: &str,
        _category_choice: Option<&str>,
        _severity_choice: Option<&str>,
    ) -> IntakeResult<Classification> {
        let lowered = description.to_lowercase();

        let category = CATEGORY_KEYWORDS
            .iter()
            .find(|(words, _)| words.iter().any(|w| lowered.contains(w)))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Misc);

        let priority = urgency_decision(self.polarity(description), &lowered);

        log::debug!(
            "classified description as {category}/{priority} ({} chars)",
            description.len()
        );
        Ok(Classification { category, priority })
    }
}

/// Urgency decision rules, first match wins. Split out from the scorer so
/// the threshold behavior at -0.3 (strict) and 0 is testable without
/// pinning any particular scorer's numbers.
fn urgency_decision(polarity: f64, lowered_description: &str) -> Priority {
    let overridden = URGENCY_OVERRIDES
        .iter()
        .any(|term| lowered_description.contains(term));
    if polarity < -0.3 || overridden {
        Priority::High
    } else if polarity < 0.0 {
        Priority::Medium
    } else {
        Priority::Low
    }
}
