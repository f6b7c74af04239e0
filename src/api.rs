use serde::{Deserialize, Serialize};
use post_optimizer::{AnalyzeOptions, MediaType, OptimizationReport};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAnalyzeRequest {
    pub text: Option<String>,
    pub request_id: Option<String>,
    pub media_type: Option<String>,
    pub goal: Option<String>,
    pub has_link: Option<bool>,
}

impl ApiAnalyzeRequest {
    pub fn into_parts(self) -> Result<(String, AnalyzeOptions), String> {
        let text = self.text.unwrap_or_default();
        if text.trim().is_empty() {
            return Err("text is required".to_string());
        }

        let mut options = AnalyzeOptions::default();
        if let Some(media) = self.media_type.as_deref() {
            options.media_type = MediaType::from_str_lossy(media);
        }
        if let Some(goal) = self.goal {
            if !goal.trim().is_empty() {
                options.goal = Some(goal);
            }
        }
        if let Some(has_link) = self.has_link {
            options.has_link = has_link;
        }

        Ok((text, options))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAnalyzeResponse {
    pub request_id: String,
    #[serde(flatten)]
    pub report: OptimizationReport,
}

impl ApiAnalyzeResponse {
    pub fn new(request_id: String, report: OptimizationReport) -> Self {
        Self { request_id, report }
    }
}
