use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Engine settings. The scoring tables themselves are fixed policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Date treated as "today" when computing athlete age. `None` uses the local date.
    pub reference_date: Option<NaiveDate>,
}
