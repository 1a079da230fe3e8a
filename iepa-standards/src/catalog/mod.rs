//! Standards Catalog
//!
//! Immutable collection of national standards plus additive state-specific
//! extensions. Built once and shared by reference; extending a catalog
//! produces a new snapshot.
//!
//! # Example
//! ```rust
//! use iepa_standards::catalog::StandardsCatalog;
//!
//! let catalog = StandardsCatalog::builtin();
//! let standards = catalog.get_relevant_standards("Texas", "ela", Some("K"));
//! assert!(standards.iter().any(|s| s.code == "TEKS.K.110.11.b.1"));
//! ```

mod data;
pub mod grade;

pub use grade::{grade_to_number, is_relevant_grade};

use crate::models::Standard;

/// State filter value meaning "national standards only"
pub const NATIONAL: &str = "national";

/// Subject filter value meaning "every subject"
pub const ALL_SUBJECTS: &str = "all";

/// State-specific standards appended to the national set
#[derive(Debug, Clone, PartialEq)]
pub struct StateExtension {
    pub name: String,
    pub standards: Vec<Standard>,
}

impl StateExtension {
    /// Create an extension, tagging every standard with the state name
    pub fn new(name: &str, standards: Vec<Standard>) -> Self {
        Self {
            name: name.to_string(),
            standards: standards
                .into_iter()
                .map(|standard| standard.for_state(name))
                .collect(),
        }
    }
}

/// Read-only standards reference table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StandardsCatalog {
    national: Vec<Standard>,
    states: Vec<StateExtension>,
}

impl StandardsCatalog {
    /// Create a catalog from explicit data
    pub fn new(national: Vec<Standard>, states: Vec<StateExtension>) -> Self {
        Self { national, states }
    }

    /// Built-in Common Core, NGSS, NCSS, and sample state standards
    pub fn builtin() -> Self {
        Self::new(data::national_standards(), data::state_extensions())
    }

    /// Return a new snapshot with `standards` added under `state`
    ///
    /// Appends to an existing extension of the same name, otherwise adds a
    /// new one after the existing states. `self` is left untouched.
    pub fn with_state_extension(&self, state: &str, standards: Vec<Standard>) -> Self {
        let mut snapshot = self.clone();
        let extension = StateExtension::new(state, standards);

        match snapshot.states.iter_mut().find(|s| s.name == state) {
            Some(existing) => existing.standards.extend(extension.standards),
            None => snapshot.states.push(extension),
        }

        snapshot
    }

    /// Every national standard, in catalog order
    pub fn all_standards(&self) -> &[Standard] {
        &self.national
    }

    /// Recognized state names, in insertion order
    pub fn state_names(&self) -> Vec<&str> {
        self.states.iter().map(|s| s.name.as_str()).collect()
    }

    /// Standards specific to one state, if the state is recognized
    pub fn state_standards(&self, state: &str) -> Option<&[Standard]> {
        self.states
            .iter()
            .find(|s| s.name == state)
            .map(|s| s.standards.as_slice())
    }

    /// First standard with the given code (national first, then states)
    pub fn find_by_code(&self, code: &str) -> Option<&Standard> {
        self.national
            .iter()
            .chain(self.states.iter().flat_map(|s| s.standards.iter()))
            .find(|standard| standard.code == code)
    }

    /// Total number of standards across national and state lists
    pub fn len(&self) -> usize {
        self.national.len() + self.states.iter().map(|s| s.standards.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Standards matching the state, subject, and grade filters
    ///
    /// # Arguments
    /// * `state` - "national", or a state name whose extension is appended
    /// * `subject` - "all", or a subject tag compared exactly
    /// * `grade_level` - Optional grade token; keeps standards whose grade is relevant
    ///
    /// # Returns
    /// Matching standards in catalog order. Unknown states and subjects are
    /// not errors; they simply add or match nothing.
    pub fn get_relevant_standards(
        &self,
        state: &str,
        subject: &str,
        grade_level: Option<&str>,
    ) -> Vec<&Standard> {
        let state_standards = if state != NATIONAL {
            self.state_standards(state).unwrap_or_default()
        } else {
            &[]
        };

        self.national
            .iter()
            .chain(state_standards.iter())
            .filter(|standard| subject == ALL_SUBJECTS || standard.subject.as_str() == subject)
            .filter(|standard| {
                grade_level.map_or(true, |grade| is_relevant_grade(&standard.grade, grade))
            })
            .collect()
    }
}
