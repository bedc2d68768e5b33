use serde::Deserialize;
use validator::Validate;

/// One submitted answer. For MCQ questions `text` is the chosen option
/// string verbatim, not an index.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerInput {
    pub question_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartAttemptRequest {
    #[validate(length(min = 1))]
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAttemptRequest {
    #[validate(length(min = 1))]
    pub user_id: String,
    pub answers: Vec<AnswerInput>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HostTestRequest {
    #[validate(length(min = 1))]
    pub user_id: String,
    pub answers: Vec<AnswerInput>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RateQuizRequest {
    #[validate(length(min = 1))]
    pub user_id: String,

    #[validate(length(min = 1))]
    pub attempt_id: String,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionListParams {
    pub include_pending: Option<bool>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PopularQuizParams {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}

impl PopularQuizParams {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(10).min(100)
    }
}
