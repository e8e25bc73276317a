pub mod job;
pub mod person;

pub use job::JobService;
pub use person::PersonService;

pub const INVALID_SALARY_INDEX: &str =
    "Invalid Input for Salary Index - Please specify a value from 1 to 3!";
pub const INVALID_BASE_SALARY: &str =
    "Invalid Input for Base Salary - Please specify a value greater than 500!";

/// Name/domain fields accept letters and whitespace only.
pub(crate) fn is_letters_and_spaces(s: &str) -> bool {
    !s.trim().is_empty() && s.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}
