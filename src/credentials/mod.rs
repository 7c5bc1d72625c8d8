//! Discovered credentials.
//!
//! Credentials are probed by an external collaborator (keychains, `gh auth`,
//! cloud SDK config) and handed to the resolver as a [`DiscoveredCredentials`]
//! value. This module only models them and knows which environment
//! variables each credential maps to.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variable holding an Anthropic API key.
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
/// Variable holding a Claude OAuth token.
pub const CLAUDE_CODE_OAUTH_TOKEN: &str = "CLAUDE_CODE_OAUTH_TOKEN";

/// Credentials discovered outside the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DiscoveredCredentials {
    /// Source-control credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubCredentials>,

    /// AI-service credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claude: Option<ClaudeCredentials>,
}

impl DiscoveredCredentials {
    /// Credentials carrying only a GitHub token.
    pub fn with_github_token(token: impl Into<String>) -> Self {
        Self {
            github: Some(GithubCredentials {
                token: Some(token.into()),
                git_config: None,
            }),
            claude: None,
        }
    }

    /// Check if nothing was discovered.
    pub fn is_empty(&self) -> bool {
        self.github.is_none() && self.claude.is_none()
    }
}

/// GitHub token and git identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GithubCredentials {
    /// Personal access or app token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Identity read from the user's git configuration.
    #[serde(alias = "gitConfig", skip_serializing_if = "Option::is_none")]
    pub git_config: Option<GitIdentity>,
}

/// Author/committer identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GitIdentity {
    /// `user.name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `user.email`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl GitIdentity {
    /// Author and committer variables for this identity.
    pub fn to_env_vars(&self) -> Vec<(&'static str, String)> {
        let mut vars = Vec::new();
        if let Some(name) = &self.name {
            vars.push(("GIT_AUTHOR_NAME", name.clone()));
            vars.push(("GIT_COMMITTER_NAME", name.clone()));
        }
        if let Some(email) = &self.email {
            vars.push(("GIT_AUTHOR_EMAIL", email.clone()));
            vars.push(("GIT_COMMITTER_EMAIL", email.clone()));
        }
        vars
    }
}

/// How the AI service is authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClaudeAuthType {
    /// Direct API key.
    ApiKey,
    /// OAuth token from a subscription login.
    Oauth,
    /// Routed through AWS Bedrock.
    Bedrock,
    /// Routed through Google Vertex AI.
    Vertex,
}

impl fmt::Display for ClaudeAuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey => write!(f, "api_key"),
            Self::Oauth => write!(f, "oauth"),
            Self::Bedrock => write!(f, "bedrock"),
            Self::Vertex => write!(f, "vertex"),
        }
    }
}

/// AI-service credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClaudeCredentials {
    /// Authentication variant.
    #[serde(rename = "type")]
    pub auth_type: ClaudeAuthType,

    /// Key, token or credentials path depending on `auth_type`.
    #[serde(default)]
    pub value: String,

    /// Cloud region (Bedrock, Vertex).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Cloud project (Vertex).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl ClaudeCredentials {
    /// Create a credential with no region or project.
    pub fn new(auth_type: ClaudeAuthType, value: impl Into<String>) -> Self {
        Self {
            auth_type,
            value: value.into(),
            region: None,
            project: None,
        }
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the project.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Provider variable set for this credential.
    ///
    /// # Example
    ///
    /// ```
    /// use sandenv::credentials::{ClaudeAuthType, ClaudeCredentials};
    ///
    /// let creds = ClaudeCredentials::new(ClaudeAuthType::ApiKey, "sk-ant-123");
    /// assert_eq!(
    ///     creds.to_env_vars(),
    ///     vec![("ANTHROPIC_API_KEY", "sk-ant-123".to_string())]
    /// );
    /// ```
    pub fn to_env_vars(&self) -> Vec<(&'static str, String)> {
        let mut vars = Vec::new();
        match self.auth_type {
            ClaudeAuthType::ApiKey => vars.push((ANTHROPIC_API_KEY, self.value.clone())),
            ClaudeAuthType::Oauth => vars.push((CLAUDE_CODE_OAUTH_TOKEN, self.value.clone())),
            ClaudeAuthType::Bedrock => {
                vars.push(("CLAUDE_CODE_USE_BEDROCK", "1".to_string()));
                if !self.value.is_empty() {
                    vars.push(("AWS_BEARER_TOKEN_BEDROCK", self.value.clone()));
                }
                if let Some(region) = &self.region {
                    vars.push(("AWS_REGION", region.clone()));
                }
            }
            ClaudeAuthType::Vertex => {
                vars.push(("CLAUDE_CODE_USE_VERTEX", "1".to_string()));
                if !self.value.is_empty() {
                    vars.push(("GOOGLE_APPLICATION_CREDENTIALS", self.value.clone()));
                }
                if let Some(region) = &self.region {
                    vars.push(("CLOUD_ML_REGION", region.clone()));
                }
                if let Some(project) = &self.project {
                    vars.push(("ANTHROPIC_VERTEX_PROJECT_ID", project.clone()));
                }
            }
        }
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(vars: &[(&'static str, String)]) -> Vec<&'static str> {
        vars.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn api_key_sets_anthropic_key() {
        let vars = ClaudeCredentials::new(ClaudeAuthType::ApiKey, "sk").to_env_vars();
        assert_eq!(vars, vec![(ANTHROPIC_API_KEY, "sk".to_string())]);
    }

    #[test]
    fn oauth_sets_oauth_token() {
        let vars = ClaudeCredentials::new(ClaudeAuthType::Oauth, "tok").to_env_vars();
        assert_eq!(vars, vec![(CLAUDE_CODE_OAUTH_TOKEN, "tok".to_string())]);
    }

    #[test]
    fn bedrock_sets_flag_token_and_region() {
        let vars = ClaudeCredentials::new(ClaudeAuthType::Bedrock, "bearer")
            .with_region("us-east-1")
            .to_env_vars();
        assert_eq!(
            names(&vars),
            vec!["CLAUDE_CODE_USE_BEDROCK", "AWS_BEARER_TOKEN_BEDROCK", "AWS_REGION"]
        );
        assert_eq!(vars[2].1, "us-east-1");
    }

    #[test]
    fn bedrock_without_value_skips_token() {
        let vars = ClaudeCredentials::new(ClaudeAuthType::Bedrock, "").to_env_vars();
        assert_eq!(names(&vars), vec!["CLAUDE_CODE_USE_BEDROCK"]);
    }

    #[test]
    fn vertex_sets_region_and_project() {
        let vars = ClaudeCredentials::new(ClaudeAuthType::Vertex, "/creds.json")
            .with_region("us-east5")
            .with_project("my-proj")
            .to_env_vars();
        assert_eq!(
            names(&vars),
            vec![
                "CLAUDE_CODE_USE_VERTEX",
                "GOOGLE_APPLICATION_CREDENTIALS",
                "CLOUD_ML_REGION",
                "ANTHROPIC_VERTEX_PROJECT_ID"
            ]
        );
        assert_eq!(vars[3].1, "my-proj");
    }

    #[test]
    fn git_identity_sets_author_and_committer() {
        let identity = GitIdentity {
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
        };
        assert_eq!(
            names(&identity.to_env_vars()),
            vec![
                "GIT_AUTHOR_NAME",
                "GIT_COMMITTER_NAME",
                "GIT_AUTHOR_EMAIL",
                "GIT_COMMITTER_EMAIL"
            ]
        );
    }

    #[test]
    fn parses_credentials_json() {
        let json = r#"{
            "github": {"token": "ghp_x", "gitConfig": {"name": "Ada"}},
            "claude": {"type": "vertex", "value": "", "region": "europe-west1", "project": "p"}
        }"#;
        let creds: DiscoveredCredentials = serde_json::from_str(json).unwrap();

        let github = creds.github.unwrap();
        assert_eq!(github.token.as_deref(), Some("ghp_x"));
        assert_eq!(github.git_config.unwrap().name.as_deref(), Some("Ada"));
        let claude = creds.claude.unwrap();
        assert_eq!(claude.auth_type, ClaudeAuthType::Vertex);
        assert_eq!(claude.region.as_deref(), Some("europe-west1"));
    }

    #[test]
    fn rejects_unknown_auth_type() {
        let json = r#"{"claude": {"type": "magic", "value": "x"}}"#;
        assert!(serde_json::from_str::<DiscoveredCredentials>(json).is_err());
    }

    #[test]
    fn empty_credentials() {
        assert!(DiscoveredCredentials::default().is_empty());
        assert!(!DiscoveredCredentials::with_github_token("t").is_empty());
    }

    #[test]
    fn auth_type_display_matches_serde_name() {
        for auth in [
            ClaudeAuthType::ApiKey,
            ClaudeAuthType::Oauth,
            ClaudeAuthType::Bedrock,
            ClaudeAuthType::Vertex,
        ] {
            let json = serde_json::to_string(&auth).unwrap();
            assert_eq!(json, format!("\"{}\"", auth));
        }
    }
}
