//! Named predicate cases run as a batch.
//!
//! A [`CaseSet`] is the dynamic counterpart to writing one test per
//! input: cases are built at run time from data, each is checked and
//! logged individually, and the batch reports which ones failed.

use crate::error::ObserveError;

/// One named predicate case.
struct Case {
    name: String,
    check: Box<dyn Fn() -> bool + Send>,
}

/// A batch of named predicate cases.
///
/// # Example
///
/// ```rust
/// use azar_observe::CaseSet;
///
/// fn is_palindrome(text: &str) -> bool {
///     let normalized: Vec<char> = text
///         .chars()
///         .filter(|c| c.is_alphanumeric())
///         .flat_map(|c| c.to_lowercase())
///         .collect();
///     let reversed: Vec<char> = normalized.iter().rev().copied().collect();
///     normalized == reversed
/// }
///
/// let report = CaseSet::new("palindromes")
///     .case("racecar", || is_palindrome("racecar"))
///     .case("able was I ere I saw elba", || {
///         is_palindrome("able was I ere I saw elba")
///     })
///     .run();
/// assert!(report.all_passed());
/// ```
pub struct CaseSet {
    name: String,
    cases: Vec<Case>,
}

impl CaseSet {
    /// Creates an empty case set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    /// Adds a named predicate case.
    #[must_use]
    pub fn case(mut self, name: impl Into<String>, check: impl Fn() -> bool + Send + 'static) -> Self {
        self.cases.push(Case {
            name: name.into(),
            check: Box::new(check),
        });
        self
    }

    /// Adds one case per item, naming each by the item's display form.
    #[must_use]
    pub fn cases_from<I, T>(mut self, items: I, check: impl Fn(&T) -> bool + Clone + Send + 'static) -> Self
    where
        I: IntoIterator<Item = T>,
        T: std::fmt::Display + Send + 'static,
    {
        for item in items {
            let name = item.to_string();
            let check = check.clone();
            self.cases.push(Case {
                name,
                check: Box::new(move || check(&item)),
            });
        }
        self
    }

    /// Returns the number of cases in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true if the set has no cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Runs every case, logging each outcome.
    #[must_use]
    pub fn run(self) -> CaseReport {
        let total = self.cases.len();
        let mut failed = Vec::new();

        for case in &self.cases {
            let passed = (case.check)();
            if passed {
                tracing::debug!(set = %self.name, case = %case.name, "case passed");
            } else {
                tracing::warn!(set = %self.name, case = %case.name, "case failed");
                failed.push(case.name.clone());
            }
        }

        tracing::info!(
            set = %self.name,
            total = total,
            failed = failed.len(),
            "case set finished"
        );

        CaseReport {
            set: self.name,
            total,
            failed,
        }
    }
}

/// Outcome of running a [`CaseSet`].
#[derive(Debug, Clone)]
pub struct CaseReport {
    set: String,
    total: usize,
    failed: Vec<String>,
}

impl CaseReport {
    /// Returns the case set name.
    #[must_use]
    pub fn set(&self) -> &str {
        &self.set
    }

    /// Returns the number of cases run.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the names of the failed cases.
    #[must_use]
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    /// Returns true if every case passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }

    /// Converts the report into a `Result`, erroring if any case failed.
    ///
    /// # Errors
    /// Returns [`ObserveError::Cases`] listing the failed case names.
    pub fn into_result(self) -> crate::Result<()> {
        if self.failed.is_empty() {
            Ok(())
        } else {
            Err(ObserveError::Cases {
                set: self.set,
                failed: self.failed.len(),
                total: self.total,
                names: self.failed,
            })
        }
    }
}
