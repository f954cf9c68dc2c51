//! MCP (Model Context Protocol) server.
//!
//! Exposes the analyzers to AI assistants over stdio. The server is a thin
//! presentation layer: each `#[tool]` method checks the input size, calls
//! `jurbix_core` and returns the result as pretty-printed JSON.
//!
//! Every tool accepts an optional `profile`; omitted or unknown ids use the
//! profile the server was started with.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use jurbix_core::findings::accessibility_findings;
use jurbix_core::profiles::{ContentProfile, ProfileStore};
use jurbix_core::{
    AnalysisView, Finding, Lexicon, calculate_accessibility_metrics, check_input_size,
    run_full_analysis,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for tools that take only a text.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The Portuguese text to analyze.
    pub text: String,
    /// Content profile id (default, blog, relatorio-formal, redes-sociais, marketing, or custom).
    pub profile: Option<String>,
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The Portuguese text to analyze.
    pub text: String,
    /// Checks to run: basic, advanced, style, accessibility, seo. Omit for all.
    pub checks: Option<Vec<String>>,
    /// Which findings to report: geral, legibilidade, estilo or seo.
    pub view: Option<AnalysisView>,
    /// Content profile id.
    pub profile: Option<String>,
}

/// Parameters for the `generate_prompt` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GeneratePromptParams {
    /// The Portuguese text to revise.
    pub text: String,
    /// Which findings the prompt should address: geral, legibilidade, estilo or seo.
    pub view: Option<AnalysisView>,
    /// Content profile id.
    pub profile: Option<String>,
}

#[derive(Serialize)]
struct WithFindings<'a, T: Serialize> {
    profile: &'a str,
    #[serde(flatten)]
    result: T,
    findings: Vec<Finding>,
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// MCP server exposing the jurbix analyzers.
#[derive(Clone)]
pub struct JurbixServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    lexicon: Arc<Lexicon>,
    profiles: Arc<ProfileStore>,
    default_profile: String,
    max_input: Option<usize>,
}

impl Default for JurbixServer {
    fn default() -> Self {
        Self::new(
            Lexicon::builtin(),
            ProfileStore::builtin(),
            jurbix_core::profiles::DEFAULT_PROFILE_ID,
            Some(jurbix_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

#[tool_router]
impl JurbixServer {
    /// Create a server over the given lexicon and profiles.
    pub fn new(
        lexicon: Lexicon,
        profiles: ProfileStore,
        default_profile: impl Into<String>,
        max_input: Option<usize>,
    ) -> Self {
        Self {
            tool_router: Self::tool_router(),
            lexicon: Arc::new(lexicon),
            profiles: Arc::new(profiles),
            default_profile: default_profile.into(),
            max_input,
        }
    }

    fn profile(&self, requested: Option<&str>) -> &ContentProfile {
        self.profiles
            .get_profile_by_id(requested.unwrap_or(&self.default_profile))
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        check_input_size(text, self.max_input)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    /// Get project information.
    #[tool(description = "Get jurbix name, version, and description")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let profiles: Vec<&str> = self.profiles.profiles().iter().map(|p| p.id.as_str()).collect();
        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "default_profile": self.default_profile,
            "profiles": profiles,
        });

        if params.format == "json" {
            return to_json(&info);
        }
        let text = format!(
            "{} v{}\n{}\nProfiles: {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
            profiles.join(", "),
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Run the full analysis.
    #[tool(
        description = "Analyze Portuguese text: basic metrics, readability, redundancy, sentiment, style, accessibility and SEO. Returns every result plus the findings that fall outside the content profile."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_text", checks = ?params.checks, "executing MCP tool");
        self.check_size(&params.text)?;

        let profile = self.profile(params.profile.as_deref());
        let report = run_full_analysis(&params.text, &self.lexicon, params.checks.as_deref())
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let findings = report.findings(params.view.unwrap_or_default(), &profile.thresholds);

        tracing::info!(tool = "analyze_text", findings = findings.len(), "MCP tool completed");
        to_json(&WithFindings {
            profile: &profile.id,
            result: &report,
            findings,
        })
    }

    /// Score readability.
    #[tool(
        description = "Score Portuguese text on Gunning Fog, Flesch, SMOG, Coleman-Liau, Gulpease and JurbiX, plus redundancy and sentiment."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_readability", "executing MCP tool");
        self.check_size(&params.text)?;

        let profile = self.profile(params.profile.as_deref());
        let report = run_full_analysis(&params.text, &self.lexicon, None)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        let findings = report.findings(AnalysisView::Legibilidade, &profile.thresholds);

        tracing::info!(tool = "check_readability", "MCP tool completed");
        to_json(&WithFindings {
            profile: &profile.id,
            result: &report.advanced,
            findings,
        })
    }

    /// Check style.
    #[tool(
        description = "Check passive voice, adverbs, complex sentences, discourse connectors and lexical diversity in Portuguese text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_style(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_style", "executing MCP tool");
        self.check_size(&params.text)?;

        let profile = self.profile(params.profile.as_deref());
        let report = run_full_analysis(&params.text, &self.lexicon, None)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        let findings = report.findings(AnalysisView::Estilo, &profile.thresholds);

        tracing::info!(tool = "analyze_style", findings = findings.len(), "MCP tool completed");
        to_json(&WithFindings {
            profile: &profile.id,
            result: &report.style,
            findings,
        })
    }

    /// Score accessibility.
    #[tool(
        description = "Score cognitive, visual and linguistic accessibility of Portuguese text, with prioritized suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_accessibility(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_accessibility", "executing MCP tool");
        self.check_size(&params.text)?;

        let profile = self.profile(params.profile.as_deref());
        let result = calculate_accessibility_metrics(&params.text);
        let findings = accessibility_findings(&result, &profile.thresholds);

        tracing::info!(
            tool = "analyze_accessibility",
            overall = result.overall.score,
            "MCP tool completed"
        );
        to_json(&WithFindings {
            profile: &profile.id,
            result: &result,
            findings,
        })
    }

    /// Check SEO signals.
    #[tool(
        description = "Check main keyword density, LSI density, heading structure, readability and length of Portuguese text for search engines."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_seo(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_seo", "executing MCP tool");
        self.check_size(&params.text)?;

        let profile = self.profile(params.profile.as_deref());
        let report = run_full_analysis(&params.text, &self.lexicon, None)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        let findings = report.findings(AnalysisView::Seo, &profile.thresholds);

        tracing::info!(tool = "analyze_seo", findings = findings.len(), "MCP tool completed");
        to_json(&WithFindings {
            profile: &profile.id,
            result: &report.seo,
            findings,
        })
    }

    /// Build a revision prompt.
    #[tool(
        description = "Build a Portuguese revision prompt listing every finding for the chosen view, followed by the original text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn generate_prompt(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<GeneratePromptParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "generate_prompt", view = ?params.view, "executing MCP tool");
        self.check_size(&params.text)?;

        let profile = self.profile(params.profile.as_deref());
        let report = run_full_analysis(&params.text, &self.lexicon, None)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        let prompt = report
            .prompt(&params.text, params.view.unwrap_or_default(), &profile.thresholds)
            .ok_or_else(|| McpError::internal_error("analysis incomplete", None))?;

        tracing::info!(
            tool = "generate_prompt",
            feedbacks = prompt.included_feedbacks.len(),
            "MCP tool completed"
        );
        to_json(&prompt)
    }
}

#[tool_handler]
impl ServerHandler for JurbixServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Analyzes Portuguese text for readability, style, accessibility and SEO.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    const SAMPLE: &str = "O relatório foi escrito pelo gerente. A equipe gostou muito do resultado. \
                          Porém, ainda há pontos a melhorar no texto.";

    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("valid JSON")
    }

    fn text_params(text: &str) -> Parameters<TextParams> {
        Parameters(TextParams {
            text: text.to_string(),
            profile: None,
        })
    }

    #[test]
    fn server_info_has_correct_name() {
        let server = JurbixServer::default();
        let info = ServerHandler::get_info(&server);
        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains(env!("CARGO_PKG_NAME")));
    }

    #[test]
    fn get_info_tool_text_and_json() {
        let server = JurbixServer::default();
        let text = server
            .get_info(Parameters(GetInfoParams {
                format: "text".into(),
            }))
            .unwrap();
        assert!(extract_text(&text).unwrap().contains(env!("CARGO_PKG_VERSION")));

        let json = server
            .get_info(Parameters(GetInfoParams {
                format: "json".into(),
            }))
            .unwrap();
        let json = json_of(&json);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["default_profile"], "default");
    }

    #[test]
    fn analyze_text_returns_every_section() {
        let server = JurbixServer::default();
        let result = server
            .analyze_text(Parameters(AnalyzeTextParams {
                text: SAMPLE.into(),
                checks: None,
                view: None,
                profile: Some("blog".into()),
            }))
            .unwrap();
        let json = json_of(&result);
        assert_eq!(json["profile"], "blog");
        for key in ["basic", "advanced", "style", "accessibility", "seo"] {
            assert!(json[key].is_object(), "missing {key}");
        }
        assert!(json["findings"].is_array());
    }

    #[test]
    fn analyze_text_rejects_unknown_check() {
        let server = JurbixServer::default();
        let result = server.analyze_text(Parameters(AnalyzeTextParams {
            text: SAMPLE.into(),
            checks: Some(vec!["grammar".into()]),
            view: None,
            profile: None,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn oversized_input_is_rejected() {
        let server = JurbixServer::new(Lexicon::builtin(), ProfileStore::builtin(), "default", Some(8));
        assert!(server.check_readability(text_params(SAMPLE)).is_err());
    }

    #[test]
    fn check_readability_tool_works() {
        let server = JurbixServer::default();
        let json = json_of(&server.check_readability(text_params(SAMPLE)).unwrap());
        assert!(json["readability"]["jurbix"]["score"].as_f64().is_some());
        assert!(json["sentiment"]["compound"].as_f64().is_some());
    }

    #[test]
    fn analyze_style_flags_passive_voice() {
        let server = JurbixServer::default();
        let json = json_of(&server.analyze_style(text_params(SAMPLE)).unwrap());
        assert!(json["passive_voice"]["count"].as_u64().unwrap() >= 1);
    }

    #[test]
    fn analyze_accessibility_tool_works() {
        let server = JurbixServer::default();
        let json = json_of(&server.analyze_accessibility(text_params(SAMPLE)).unwrap());
        let overall = json["overall"]["score"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&overall));
    }

    #[test]
    fn analyze_seo_reports_short_text() {
        let server = JurbixServer::default();
        let json = json_of(&server.analyze_seo(text_params(SAMPLE)).unwrap());
        assert!(json["keyword"].is_object());
        let findings = json["findings"].as_array().unwrap();
        assert!(findings.iter().any(|f| f["metric"] == "word_count"));
    }

    #[test]
    fn generate_prompt_includes_text() {
        let server = JurbixServer::default();
        let json = json_of(
            &server
                .generate_prompt(Parameters(GeneratePromptParams {
                    text: SAMPLE.into(),
                    view: Some(AnalysisView::Estilo),
                    profile: None,
                }))
                .unwrap(),
        );
        assert!(json["prompt"].as_str().unwrap().contains("O relatório foi escrito"));
        assert!(json["included_feedbacks"].is_array());
    }
}
