use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job row. `base_salary` is kept at or above 500 by the validation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub name: String,
    pub domain: String,
    #[sqlx(rename = "baseSalary")]
    pub base_salary: f64,
}

impl Job {
    /// Single fixed-width line, used when listing the whole table.
    pub fn row_line(&self) -> String {
        format!(
            "Job id: {:2}; name: {:>22}; domain: {:>15}; base salary: {:3.1}",
            self.id, self.name, self.domain, self.base_salary
        )
    }

    /// Console variant of the list line.
    pub fn console_line(&self) -> String {
        format!(
            "Job database entry for: {:>20}, id = {:4}, domain = {:>10}, base salary = {:5.1}",
            self.name, self.id, self.domain, self.base_salary
        )
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Job database entry for:\n {},\n id = {},\n domain = {},\n base salary = {:.1}\n",
            self.name, self.id, self.domain, self.base_salary
        )
    }
}
