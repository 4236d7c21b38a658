use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// One logged workout as stored on disk and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    pub owner: String,
    pub activity_name: String,
    pub duration_minutes: DurationMinutes,
    pub calories_estimate: CaloriesEstimate,
    /// Epoch milliseconds.
    pub logged_at: i64,
}

/// Duration exactly as the caller sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationMinutes {
    Number(Number),
    Text(String),
}

impl DurationMinutes {
    /// Zero and the empty string are treated as absent.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64() == Some(0.0),
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl std::fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaloriesEstimate {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogWorkoutRequest {
    pub owner: Option<String>,
    pub activity_name: Option<String>,
    pub duration_minutes: Option<DurationMinutes>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub owner: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TextResponse {
    pub response: String,
}

/// History entries are passed through exactly as stored.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<Value>,
}
