use std::process::Command;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::prompt::build_instruction;
use crate::types::DiffBundle;

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3:latest";

/// Produces a commit message for a bundle of diffs.
pub trait MessageGenerator {
    /// Check that the backing service can be reached before any generation
    /// is attempted
    ///
    /// # Errors
    ///
    /// Returns `Error::ToolNotFound` or `Error::ServiceUnavailable`
    fn ensure_available(&self) -> Result<()>;

    /// Generate a single-line commit message from the given diffs
    ///
    /// # Errors
    ///
    /// Returns `Error::NoChanges` when there is no diff text to describe,
    /// `Error::ModelRequest` when the request fails, and
    /// `Error::EmptyResponse` when the model returns no text
    fn generate(&self, bundle: &DiffBundle, user_context: &str) -> Result<String>;
}

/// Client for a locally hosted Ollama chat endpoint
pub struct OllamaClient {
    http: Client,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaClient {
    /// Creates a client for the service at `base_url` using `model` for
    /// every request
    #[must_use]
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    /// Check that the ollama binary is installed
    ///
    /// # Errors
    ///
    /// Returns `Error::ToolNotFound` when the binary cannot be launched
    pub fn ensure_installed() -> Result<()> {
        Command::new("ollama")
            .arg("--version")
            .output()
            .map_err(|_| Error::ToolNotFound)?;
        Ok(())
    }

    /// Probe the service root for reachability
    ///
    /// # Errors
    ///
    /// Returns `Error::ServiceUnavailable` when the port does not answer
    /// with a success status
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub fn health_check(&self) -> Result<()> {
        let response = self
            .http
            .get(&self.base_url)
            .timeout(Duration::from_secs(5))
            .send()
            .map_err(|_| Error::ServiceUnavailable(self.base_url.clone()))?;
        if !response.status().is_success() {
            return Err(Error::ServiceUnavailable(self.base_url.clone()));
        }
        debug!("service is reachable");
        Ok(())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends the instruction as a single user message and returns the
    /// response text. The request is non-streaming, one complete response.
    fn chat(&self, instruction: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: instruction,
            }],
            stream: false,
        };

        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .map_err(|e| Error::ModelRequest(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(Error::ModelRequest(format!("{status}: {body}")));
        }

        let body: ChatResponse = response
            .json()
            .map_err(|e| Error::ModelRequest(e.to_string()))?;

        let content = body.message.map(|m| m.content).unwrap_or_default();
        if content.trim().is_empty() {
            return Err(Error::EmptyResponse);
        }
        Ok(content)
    }
}

impl MessageGenerator for OllamaClient {
    fn ensure_available(&self) -> Result<()> {
        Self::ensure_installed()?;
        self.health_check()
    }

    #[instrument(skip(self, bundle, user_context), fields(model = %self.model))]
    fn generate(&self, bundle: &DiffBundle, user_context: &str) -> Result<String> {
        if bundle.is_empty() {
            return Err(Error::NoChanges);
        }

        let instruction = build_instruction(user_context, &bundle.combined());
        debug!(
            files_changed = bundle.files_changed.lines().count(),
            instruction_length = instruction.len(),
            "requesting commit message"
        );
        self.chat(&instruction)
    }
}
