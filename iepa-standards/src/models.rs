//! Data model for standards alignment
//!
//! `Standard` records are owned by a [`StandardsCatalog`](crate::catalog::StandardsCatalog).
//! Analysis results borrow them, so an [`AlignmentResult`] lives no longer
//! than the catalog it was computed against.
//!
//! Serialized field names follow the JSON contract consumed by upstream
//! callers (`primaryStandards`, `matchedKeywords`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic subject of a standard
///
/// Closed set of known subjects with a fallback for anything else.
/// Serializes as the lowercase tag (`"ela"`, `"math"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Subject {
    /// English language arts
    Ela,
    Math,
    Science,
    /// Social studies
    Social,
    /// Unrecognized subject tag, kept verbatim
    Other(String),
}

impl Subject {
    /// Tag used for exact-match filtering and serialization
    pub fn as_str(&self) -> &str {
        match self {
            Subject::Ela => "ela",
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::Social => "social",
            Subject::Other(tag) => tag,
        }
    }
}

impl From<&str> for Subject {
    fn from(tag: &str) -> Self {
        match tag {
            "ela" => Subject::Ela,
            "math" => Subject::Math,
            "science" => Subject::Science,
            "social" => Subject::Social,
            other => Subject::Other(other.to_string()),
        }
    }
}

impl From<String> for Subject {
    fn from(tag: String) -> Self {
        Subject::from(tag.as_str())
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.as_str().to_string()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Topical grouping of a standard
///
/// Every variant except [`Domain::Other`] carries a display name that
/// matches the catalog data exactly. Only the first eleven variants have
/// representative keywords; the rest score zero for domain relevance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Domain {
    ReadingLiterature,
    ReadingFoundationalSkills,
    Writing,
    SpeakingAndListening,
    OperationsAndAlgebraicThinking,
    NumberAndOperationsInBaseTen,
    MeasurementAndData,
    LifeScience,
    PhysicalScience,
    EarthScience,
    EngineeringDesign,
    CountingAndCardinality,
    Civics,
    History,
    Geography,
    Economics,
    /// Domain name not in the known set, kept verbatim
    Other(String),
}

impl Domain {
    /// Display name as it appears in catalog data
    pub fn as_str(&self) -> &str {
        match self {
            Domain::ReadingLiterature => "Reading Literature",
            Domain::ReadingFoundationalSkills => "Reading Foundational Skills",
            Domain::Writing => "Writing",
            Domain::SpeakingAndListening => "Speaking and Listening",
            Domain::OperationsAndAlgebraicThinking => "Operations and Algebraic Thinking",
            Domain::NumberAndOperationsInBaseTen => "Number and Operations in Base Ten",
            Domain::MeasurementAndData => "Measurement and Data",
            Domain::LifeScience => "Life Science",
            Domain::PhysicalScience => "Physical Science",
            Domain::EarthScience => "Earth Science",
            Domain::EngineeringDesign => "Engineering Design",
            Domain::CountingAndCardinality => "Counting and Cardinality",
            Domain::Civics => "Civics",
            Domain::History => "History",
            Domain::Geography => "Geography",
            Domain::Economics => "Economics",
            Domain::Other(name) => name,
        }
    }

    /// Keywords whose presence in a goal signals this domain
    ///
    /// Empty for domains without an entry in the relevance table.
    pub fn representative_keywords(&self) -> &'static [&'static str] {
        match self {
            Domain::ReadingLiterature => {
                &["read", "story", "character", "plot", "literature", "fiction"]
            }
            Domain::ReadingFoundationalSkills => {
                &["phonics", "decoding", "fluency", "sight words", "letters"]
            }
            Domain::Writing => &["write", "compose", "essay", "paragraph", "sentence", "grammar"],
            Domain::SpeakingAndListening => {
                &["speak", "listen", "discussion", "presentation", "oral"]
            }
            Domain::OperationsAndAlgebraicThinking => {
                &["add", "subtract", "multiply", "divide", "equation"]
            }
            Domain::NumberAndOperationsInBaseTen => {
                &["place value", "hundreds", "tens", "ones", "digits"]
            }
            Domain::MeasurementAndData => &["measure", "length", "weight", "time", "data", "graph"],
            Domain::LifeScience => &["living", "plants", "animals", "habitat", "survival"],
            Domain::PhysicalScience => &["force", "motion", "energy", "matter", "sound", "light"],
            Domain::EarthScience => &["weather", "rocks", "soil", "water", "environment"],
            Domain::EngineeringDesign => &["design", "build", "solve", "problem", "solution"],
            Domain::CountingAndCardinality
            | Domain::Civics
            | Domain::History
            | Domain::Geography
            | Domain::Economics
            | Domain::Other(_) => &[],
        }
    }
}

impl From<&str> for Domain {
    fn from(name: &str) -> Self {
        match name {
            "Reading Literature" => Domain::ReadingLiterature,
            "Reading Foundational Skills" => Domain::ReadingFoundationalSkills,
            "Writing" => Domain::Writing,
            "Speaking and Listening" => Domain::SpeakingAndListening,
            "Operations and Algebraic Thinking" => Domain::OperationsAndAlgebraicThinking,
            "Number and Operations in Base Ten" => Domain::NumberAndOperationsInBaseTen,
            "Measurement and Data" => Domain::MeasurementAndData,
            "Life Science" => Domain::LifeScience,
            "Physical Science" => Domain::PhysicalScience,
            "Earth Science" => Domain::EarthScience,
            "Engineering Design" => Domain::EngineeringDesign,
            "Counting and Cardinality" => Domain::CountingAndCardinality,
            "Civics" => Domain::Civics,
            "History" => Domain::History,
            "Geography" => Domain::Geography,
            "Economics" => Domain::Economics,
            other => Domain::Other(other.to_string()),
        }
    }
}

impl From<String> for Domain {
    fn from(name: String) -> Self {
        Domain::from(name.as_str())
    }
}

impl From<Domain> for String {
    fn from(domain: Domain) -> Self {
        domain.as_str().to_string()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single curated educational standard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standard {
    /// Identifier such as "CCSS.ELA-LITERACY.RL.3.1"
    pub code: String,
    pub subject: Subject,
    /// Single grade token ("K", "3") or hyphenated range ("K-2")
    pub grade: String,
    /// Full standard text, compared against goal text for semantic similarity
    pub description: String,
    /// Lowercase concept phrases used for direct keyword matching
    pub keywords: Vec<String>,
    pub domain: Domain,
    /// Present only on state-specific variants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Standard {
    /// Create a national standard
    pub fn new(
        code: &str,
        subject: &str,
        grade: &str,
        description: &str,
        keywords: &[&str],
        domain: &str,
    ) -> Self {
        Self {
            code: code.to_string(),
            subject: Subject::from(subject),
            grade: grade.to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            domain: Domain::from(domain),
            state: None,
        }
    }

    /// Tag this standard as a state-specific variant
    pub fn for_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    /// Whether this is a national (non-state) standard
    pub fn is_national(&self) -> bool {
        self.state.is_none()
    }
}

/// One scored standard in an alignment report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardMatch<'a> {
    pub standard: &'a Standard,
    /// Combined weighted score (0.0-1.0)
    pub score: f64,
    /// Standard keywords hit by goal keywords, in hit order
    pub matched_keywords: Vec<&'a str>,
    pub reasoning: String,
}

/// Ranked and classified alignment report for one goal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentResult<'a> {
    /// Matches scoring at least 0.7, best first, at most 5
    pub primary_standards: Vec<StandardMatch<'a>>,
    /// Matches scoring 0.4 up to 0.7, best first, at most 3
    pub secondary_standards: Vec<StandardMatch<'a>>,
    /// Overall alignment strength (0-100)
    pub overall_score: f64,
    pub recommendations: Vec<String>,
    /// Trust in the primary matches (0.0-1.0)
    pub confidence: f64,
}

impl AlignmentResult<'_> {
    /// Best match across both tiers
    pub fn top_match(&self) -> Option<&StandardMatch<'_>> {
        self.primary_standards
            .first()
            .or_else(|| self.secondary_standards.first())
    }

    /// Whether neither tier holds any match
    pub fn is_empty(&self) -> bool {
        self.primary_standards.is_empty() && self.secondary_standards.is_empty()
    }
}

/// Alignment request as received from an upstream caller
///
/// Mirrors the route contract: only `goalText` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentRequest {
    pub goal_text: String,
    #[serde(default = "default_state")]
    pub state: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default)]
    pub grade_level: Option<String>,
}

impl AlignmentRequest {
    /// Request with national/all-subject defaults and no grade filter
    pub fn new(goal_text: impl Into<String>) -> Self {
        Self {
            goal_text: goal_text.into(),
            state: default_state(),
            subject: default_subject(),
            grade_level: None,
        }
    }
}

fn default_state() -> String {
    crate::catalog::NATIONAL.to_string()
}

fn default_subject() -> String {
    crate::catalog::ALL_SUBJECTS.to_string()
}
