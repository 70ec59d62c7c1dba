//! Question-set loader.
//!
//! Input format: a JSON array of objects with required `id` and `question`
//! fields; `category` and `complexity` are optional and defaulted. Duplicate
//! ids are a fatal configuration error.

use std::collections::HashSet;
use std::path::Path;

use crate::errors::ConfigError;
use crate::model::Question;

pub fn load_questions(path: &Path) -> Result<Vec<Question>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_questions(&raw, &path.display().to_string())
}

fn parse_questions(raw: &str, path: &str) -> Result<Vec<Question>, ConfigError> {
    let questions: Vec<Question> =
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    if questions.is_empty() {
        return Err(ConfigError::Empty {
            path: path.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for q in &questions {
        if !seen.insert(q.id.as_str()) {
            return Err(ConfigError::DuplicateId {
                path: path.to_string(),
                id: q.id.clone(),
            });
        }
    }

    Ok(questions)
}
