use serde::{Deserialize, Serialize};

const MIN_WEIGHT: f64 = 0.01;
const MAX_SCORE: i32 = 100;

/// Slice of the application a factor was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Identity,
    Financial,
    Business,
    Documentation,
    Geographic,
    Behavioral,
    Signers,
}

impl RiskCategory {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Identity,
            Self::Financial,
            Self::Business,
            Self::Documentation,
            Self::Geographic,
            Self::Behavioral,
            Self::Signers,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Financial => "Financial",
            Self::Business => "Business",
            Self::Documentation => "Documentation",
            Self::Geographic => "Geographic",
            Self::Behavioral => "Behavioral",
            Self::Signers => "Signers",
        }
    }
}

/// Descriptive direction of a factor. Scoring math never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskImpact {
    Positive,
    Negative,
    Neutral,
}

/// Three-level classification derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Boundaries are inclusive on the lower-risk side: 30 is low, 65 is medium.
    pub const fn from_score(score: u8) -> Self {
        if score <= 30 {
            Self::Low
        } else if score <= 65 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One scored observation contributing to the overall assessment.
///
/// Score and weight are only set through [`RiskFactor::new`], so every factor, including one
/// read back from JSON, keeps a score in 0..=100 and a positive weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FactorRecord")]
pub struct RiskFactor {
    pub category: RiskCategory,
    pub factor: String,
    weight: f64,
    score: u8,
    pub impact: RiskImpact,
    pub description: String,
}

/// Wire shape of a factor before the score and weight bounds are applied.
#[derive(Deserialize)]
struct FactorRecord {
    category: RiskCategory,
    factor: String,
    weight: f64,
    score: i32,
    impact: RiskImpact,
    description: String,
}

impl From<FactorRecord> for RiskFactor {
    fn from(record: FactorRecord) -> Self {
        Self::new(
            record.category,
            record.factor,
            record.weight,
            record.score,
            record.impact,
            record.description,
        )
    }
}

impl RiskFactor {
    /// Build a factor, clamping the score into 0..=100 and the weight to a positive value.
    pub fn new(
        category: RiskCategory,
        factor: impl Into<String>,
        weight: f64,
        score: i32,
        impact: RiskImpact,
        description: impl Into<String>,
    ) -> Self {
        let weight = if weight.is_finite() && weight > 0.0 {
            weight
        } else {
            MIN_WEIGHT
        };

        Self {
            category,
            factor: factor.into(),
            weight,
            score: score.clamp(0, MAX_SCORE) as u8,
            impact,
            description: description.into(),
        }
    }

    pub fn positive(
        category: RiskCategory,
        factor: impl Into<String>,
        weight: f64,
        score: i32,
        description: impl Into<String>,
    ) -> Self {
        Self::new(
            category,
            factor,
            weight,
            score,
            RiskImpact::Positive,
            description,
        )
    }

    pub fn negative(
        category: RiskCategory,
        factor: impl Into<String>,
        weight: f64,
        score: i32,
        description: impl Into<String>,
    ) -> Self {
        Self::new(
            category,
            factor,
            weight,
            score,
            RiskImpact::Negative,
            description,
        )
    }

    pub fn neutral(
        category: RiskCategory,
        factor: impl Into<String>,
        weight: f64,
        score: i32,
        description: impl Into<String>,
    ) -> Self {
        Self::new(
            category,
            factor,
            weight,
            score,
            RiskImpact::Neutral,
            description,
        )
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    /// Case-insensitive substring match. A blank keyword never matches.
    pub fn label_contains(&self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        !keyword.is_empty()
            && self
                .factor
                .to_lowercase()
                .contains(&keyword.to_lowercase())
    }
}

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;
type Emitter<'a, T> = Box<dyn Fn(&T) -> RiskFactor + 'a>;

/// Ordered decision ladder over a single measurement.
///
/// Rungs are checked top to bottom and only the first rung whose predicate holds emits a
/// factor, so a dimension assessed through a ladder contributes at most one factor.
pub(crate) struct Ladder<'a, T> {
    subject: T,
    rungs: Vec<(Predicate<'a, T>, Emitter<'a, T>)>,
}

impl<'a, T> Ladder<'a, T> {
    pub(crate) fn over(subject: T) -> Self {
        Self {
            subject,
            rungs: Vec::new(),
        }
    }

    pub(crate) fn rung(
        mut self,
        when: impl Fn(&T) -> bool + 'a,
        emit: impl Fn(&T) -> RiskFactor + 'a,
    ) -> Self {
        self.rungs.push((Box::new(when), Box::new(emit)));
        self
    }

    pub(crate) fn otherwise(self, emit: impl Fn(&T) -> RiskFactor + 'a) -> Self {
        self.rung(|_| true, emit)
    }

    pub(crate) fn first_match(&self) -> Option<RiskFactor> {
        self.rungs
            .iter()
            .find(|(when, _)| when(&self.subject))
            .map(|(_, emit)| emit(&self.subject))
    }
}
