pub mod job;
pub mod person;
pub mod work_experience;

pub use job::Job;
pub use person::Person;
pub use work_experience::WorkExperience;
