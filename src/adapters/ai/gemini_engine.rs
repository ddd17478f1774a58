//! Gemini Engine - RecommendationEngine implementation backed by Google's
//! Gemini `generateContent` API.
//!
//! Every request carries the assessment prompt, the declared response
//! schema, and a low temperature, so repeated submissions of the same
//! profile produce consistent structured output. The engine performs no
//! caching and no retries; each call is one outbound request.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.5-flash")
//!     .with_temperature(0.3);
//!
//! let engine = GeminiEngine::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::{AiConfig, ValidationError};
use crate::domain::assessment::{AnalysisResult, AssessmentProfile};
use crate::ports::{RecommendationEngine, RecommendationError};

use super::schema::{SchemaNode, ANALYSIS_RESPONSE_SCHEMA};

/// Configuration for the Gemini engine.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g. "gemini-2.5-flash").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Sampling temperature; kept low so report quality stays consistent.
    pub temperature: f32,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(60),
            temperature: 0.3,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl TryFrom<&AiConfig> for GeminiConfig {
    type Error = ValidationError;

    fn try_from(config: &AiConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        let api_key = config
            .gemini_api_key
            .clone()
            .ok_or(ValidationError::MissingRequired("GEMINI_API_KEY"))?;

        Ok(Self::new(api_key)
            .with_model(config.model.clone())
            .with_timeout(config.timeout())
            .with_temperature(config.temperature))
    }
}

/// Gemini API engine implementation.
pub struct GeminiEngine {
    config: GeminiConfig,
    client: Client,
}

impl GeminiEngine {
    /// Creates a new Gemini engine with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Builds the wire request for a profile.
    fn to_generate_request(&self, profile: &AssessmentProfile) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: build_prompt(profile),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &ANALYSIS_RESPONSE_SCHEMA,
                temperature: self.config.temperature,
            },
        }
    }

    async fn send_request(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Response, RecommendationError> {
        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RecommendationError::service(format!(
                        "request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    RecommendationError::service(format!("connection failed: {}", e))
                } else {
                    RecommendationError::service(e.to_string())
                }
            })
    }

    /// Checks the HTTP status and maps failures onto the boundary taxonomy.
    async fn handle_response_status(response: Response) -> Result<Response, RecommendationError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(map_error_status(status, &error_body))
    }

    async fn request_analysis(
        &self,
        profile: &AssessmentProfile,
    ) -> Result<AnalysisResult, RecommendationError> {
        let request = self.to_generate_request(profile);
        debug!(model = %self.config.model, "requesting database analysis");

        let response = self.send_request(&request).await?;
        let response = Self::handle_response_status(response).await?;

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| RecommendationError::service(format!("unreadable response body: {}", e)))?;

        let text = extract_text(body)?;
        parse_analysis(&text)
    }
}

#[async_trait]
impl RecommendationEngine for GeminiEngine {
    async fn recommend(
        &self,
        profile: &AssessmentProfile,
    ) -> Result<AnalysisResult, RecommendationError> {
        match self.request_analysis(profile).await {
            Ok(result) => Ok(result),
            Err(err) => {
                warn!(error = %err, "analysis request failed");
                Err(err)
            }
        }
    }
}

/// Maps a non-success HTTP status onto the boundary taxonomy.
fn map_error_status(status: StatusCode, body: &str) -> RecommendationError {
    match status.as_u16() {
        401 | 403 => RecommendationError::configuration(
            "the API key was rejected by the recommendation service",
        ),
        429 => RecommendationError::service(format!("rate limited: {}", body)),
        500..=599 => RecommendationError::service(format!("server error {}: {}", status, body)),
        _ => RecommendationError::service(format!("unexpected status {}: {}", status, body)),
    }
}

/// Builds the natural-language assessment prompt.
///
/// All nine profile facets are embedded verbatim as their wire tokens;
/// the exact surrounding wording carries no compatibility weight.
fn build_prompt(profile: &AssessmentProfile) -> String {
    format!(
        "\
你是一位资深的中国国产数据库架构师，精通信创解决方案。请根据以下客户需求完成数据库选型评估。

【业务场景】
- 负载类型: {business_type}
- 数据规模: {data_volume}
- 并发要求: {concurrency}
- 未来关注点: {future_focus}

【技术现状】
- 兼容性需求: {compatibility}
- 存量系统: {current_stack}

【部署与信创】
- 部署模式: {deployment}
- 高可用规范: {ha_requirement}
- 硬件环境: {hardware_arch}

【任务】
推荐 3-4 款适合的数据库产品，优先考虑国产化替代（如 OceanBase、TiDB、openGauss/GaussDB、PolarDB、TDSQL、达梦等）。
评估须覆盖：
1. 针对 {hardware_arch} 的信创适配情况；
2. 能否满足 {ha_requirement} 对应的高可用部署架构（如多副本一致性协议）；
3. 基于 {current_stack} 与 {compatibility} 的迁移成本与平滑度；
4. 每款产品给出 0-100 的综合评分及详细理由（成本、技术相似度、业务场景匹配度）。

请用中文回答。",
        business_type = profile.business_type,
        data_volume = profile.data_volume,
        concurrency = profile.concurrency,
        future_focus = profile.future_focus,
        compatibility = profile.compatibility,
        current_stack = profile.current_stack,
        deployment = profile.deployment,
        ha_requirement = profile.ha_requirement,
        hardware_arch = profile.hardware_arch,
    )
}

/// Joins the text parts of the first candidate, or fails if none exist.
fn extract_text(response: GenerateContentResponse) -> Result<String, RecommendationError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(RecommendationError::EmptyResponse);
    }

    Ok(text)
}

/// Parses the analysis payload and applies the defensive contract checks.
fn parse_analysis(text: &str) -> Result<AnalysisResult, RecommendationError> {
    let result: AnalysisResult = serde_json::from_str(text)
        .map_err(|e| RecommendationError::schema_violation(e.to_string()))?;

    result
        .validate()
        .map_err(|e| RecommendationError::schema_violation(e.to_string()))?;

    Ok(result)
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: &'static SchemaNode,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}
