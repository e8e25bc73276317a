use crate::errors::AppError;

/// Work-experience band derived from a person's salary index.
///
/// Band boundaries use strict `<` comparisons, so an index sitting exactly on
/// a threshold (1.4, 1.8, 2.2) lands in the higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkExperience {
    Entry,
    EntryToMid,
    Middle,
    Senior,
}

impl WorkExperience {
    /// Classifies a salary index into a band. An index outside [1, 3] is a
    /// validation failure, never a descriptive success string.
    pub fn classify(salary_index: f64) -> Result<WorkExperience, AppError> {
        if !(1.0..=3.0).contains(&salary_index) {
            return Err(AppError::Validation(
                "Error: salary index outside of range 1 - 3.".to_string(),
            ));
        }

        Ok(if salary_index < 1.4 {
            WorkExperience::Entry
        } else if salary_index < 1.8 {
            WorkExperience::EntryToMid
        } else if salary_index < 2.2 {
            WorkExperience::Middle
        } else {
            WorkExperience::Senior
        })
    }

    /// Sentence fragment appended after the person's name in reports.
    pub fn description(&self) -> &'static str {
        match self {
            WorkExperience::Entry => {
                " is entry level; they have been working here less than 1 year;"
            }
            WorkExperience::EntryToMid => {
                " is entry-to-mid level; they have been working more than 1 year;"
            }
            WorkExperience::Middle => " is mid level; they have been working more than 2 years;",
            WorkExperience::Senior => {
                " is further than mid level; they have been working here more than 3 years;"
            }
        }
    }
}
