mod catalog;
mod sql;

pub use catalog::{
    BASE_SURVEY, DomainScoring, QUESTIONS, Question, QuestionKind, ScoringConfig, Survey,
    Thresholds, scoring_config,
};
pub use sql::seed_sql;
