use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A person row. Ids are caller-assigned; `job_id` points at a job row but is
/// not enforced by a foreign key, so a dangling value only surfaces when the
/// job is actually dereferenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[sqlx(rename = "jobId")]
    pub job_id: i32,
    #[sqlx(rename = "salaryIndex")]
    pub salary_index: f64,
}

impl Person {
    /// Single fixed-width line, used when listing the whole table.
    pub fn row_line(&self) -> String {
        format!(
            "Person id: {:2}; name: {:>18}; email: {:>25}; job id: {:3}; salary index: {:3.1}",
            self.id, self.name, self.email, self.job_id, self.salary_index
        )
    }

    /// Console variant of the list line.
    pub fn console_line(&self) -> String {
        format!(
            "Person database entry for: name = {:>18}, id = {:4}, email = {:>25}, job id = {:3}, salary index = {:5.1}",
            self.name, self.id, self.email, self.job_id, self.salary_index
        )
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nPerson database entry for:\n name = {},\n id = {},\n email = {},\n job id = {},\n salary index = {:.1}\n",
            self.name, self.id, self.email, self.job_id, self.salary_index
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Person {
        Person {
            id: 901,
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            job_id: 501,
            salary_index: 2.0,
        }
    }

    #[test]
    fn display_block_labels_every_field() {
        let text = sample().to_string();
        assert!(text.contains("name = Ana"));
        assert!(text.contains("id = 901"));
        assert!(text.contains("email = ana@x.com"));
        assert!(text.contains("job id = 501"));
        assert!(text.contains("salary index = 2.0"));
    }

    #[test]
    fn row_line_right_aligns_fixed_width_fields() {
        let line = sample().row_line();
        assert!(line.contains(&format!("name: {:>18};", "Ana")));
        assert!(line.contains("salary index: 2.0"));
    }

    #[test]
    fn json_uses_camel_case_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("jobId").is_some());
        assert!(json.get("salaryIndex").is_some());
    }
}
