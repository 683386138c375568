//! Run Assistant use case.
//!
//! A chat loop in which the model may request the `get_lyrics` tool. Each
//! reply is parsed into an [`AssistantTurn`]: a final answer ends the loop,
//! a tool request runs the retrieval cascade and feeds the result back.
//! The loop is bounded by `max_iterations` model calls.

use crate::config::AssistantParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::lyric_extractor::LyricExtractor;
use crate::ports::page_fetcher::PageFetcher;
use crate::use_cases::retrieve_lyrics::{RetrieveLyricsError, RetrieveLyricsUseCase};
use psalter_domain::util::truncate_str;
use psalter_domain::{
    AssistantTurn, Message, PromptTemplate, Song, ToolDefinition, ToolInvocation,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during an assistant run.
#[derive(Error, Debug)]
pub enum RunAssistantError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Assistant did not finish within {0} iterations")]
    IterationLimit(usize),

    /// A tool call found no lyrics and the sample fallback is disabled.
    #[error(transparent)]
    Retrieval(#[from] RetrieveLyricsError),
}

/// Final answer plus loop statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantOutput {
    pub answer: String,
    pub iterations: usize,
    pub tool_calls: usize,
}

pub struct RunAssistantUseCase<G, F, E>
where
    G: LlmGateway + 'static,
    F: PageFetcher + 'static,
    E: LyricExtractor + 'static,
{
    gateway: Arc<G>,
    lyrics: Arc<RetrieveLyricsUseCase<F, E>>,
    params: AssistantParams,
}

impl<G, F, E> RunAssistantUseCase<G, F, E>
where
    G: LlmGateway + 'static,
    F: PageFetcher + 'static,
    E: LyricExtractor + 'static,
{
    pub fn new(gateway: Arc<G>, lyrics: Arc<RetrieveLyricsUseCase<F, E>>) -> Self {
        Self {
            gateway,
            lyrics,
            params: AssistantParams::default(),
        }
    }

    pub fn with_params(mut self, params: AssistantParams) -> Self {
        self.params = params;
        self
    }

    /// Ask the assistant to analyze a song, fetching lyrics on request.
    pub async fn execute(&self, song: &Song) -> Result<AssistantOutput, RunAssistantError> {
        let request = PromptTemplate::assistant_request(song.title(), song.artist());
        self.chat(&request).await
    }

    /// Run the loop for an arbitrary user message.
    pub async fn chat(&self, user_message: &str) -> Result<AssistantOutput, RunAssistantError> {
        let tools = [ToolDefinition::get_lyrics()];
        let mut messages = vec![
            Message::system(PromptTemplate::assistant_system(&tools)),
            Message::user(user_message),
        ];
        let mut tool_calls = 0;

        for iteration in 1..=self.params.max_iterations {
            let reply = self.send(&messages).await?;
            debug!("Assistant turn {}: {}", iteration, truncate_str(&reply, 200));

            match AssistantTurn::parse(&reply) {
                AssistantTurn::Final(answer) => {
                    info!(
                        "Assistant finished after {} iterations ({} tool calls)",
                        iteration, tool_calls
                    );
                    return Ok(AssistantOutput {
                        answer,
                        iterations: iteration,
                        tool_calls,
                    });
                }
                AssistantTurn::ToolRequest(invocation) => {
                    tool_calls += 1;
                    let output = self.run_tool(&invocation).await?;
                    messages.push(Message::assistant(reply));
                    messages.push(Message::tool(PromptTemplate::tool_result(
                        invocation.name(),
                        &output,
                    )));
                    messages.push(Message::user(PromptTemplate::analyze_followup()));
                }
            }
        }

        warn!(
            "Assistant loop exceeded max_iterations ({})",
            self.params.max_iterations
        );
        Err(RunAssistantError::IterationLimit(self.params.max_iterations))
    }

    async fn send(&self, messages: &[Message]) -> Result<String, GatewayError> {
        let call = self
            .gateway
            .chat(&self.params.model, messages, &self.params.sampling);
        match tokio::time::timeout(self.params.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout),
        }
    }

    /// Run a requested tool. Bad arguments are reported back to the model;
    /// a retrieval failure (fallback disabled) ends the run.
    async fn run_tool(&self, invocation: &ToolInvocation) -> Result<String, RunAssistantError> {
        match invocation {
            ToolInvocation::GetLyrics { title, artist } => {
                info!("Tool call: get_lyrics(title={:?}, artist={:?})", title, artist);
                let song = match Song::try_new(title.as_str(), artist.as_deref()) {
                    Ok(song) => song,
                    Err(e) => return Ok(format!("Error: {}", e)),
                };
                let lyrics = self.lyrics.execute(&song).await.inspect_err(|e| {
                    warn!("get_lyrics failed: {}", e);
                })?;
                Ok(lyrics.text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetrievalParams;
    use crate::ports::fallback_provider::FallbackProvider;
    use crate::ports::llm_gateway::SamplingOptions;
    use crate::ports::page_fetcher::FetchedPage;
    use async_trait::async_trait;
    use psalter_domain::{LyricCandidate, Model, RetrievedLyrics, Role};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Mock gateway that returns scripted chat replies in order
    struct ScriptedGateway {
        replies: Mutex<VecDeque<String>>,
        transcripts: Mutex<Vec<Vec<Message>>>,
    }

    impl ScriptedGateway {
        fn new(replies: &[&str]) -> Self {
            Self {
                replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
                transcripts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        async fn generate(
            &self,
            _model: &Model,
            _prompt: &str,
            _options: &SamplingOptions,
        ) -> Result<String, GatewayError> {
            unreachable!("assistant only chats")
        }

        async fn chat(
            &self,
            _model: &Model,
            messages: &[Message],
            _options: &SamplingOptions,
        ) -> Result<String, GatewayError> {
            self.transcripts.lock().unwrap().push(messages.to_vec());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| GatewayError::RequestFailed("script exhausted".to_string()))
        }
    }

    struct OfflineFetcher;

    #[async_trait]
    impl PageFetcher for OfflineFetcher {
        async fn fetch(&self, url: &str) -> FetchedPage {
            FetchedPage::failed(url, None)
        }
    }

    struct NoExtractor;

    impl LyricExtractor for NoExtractor {
        fn extract(&self, _content: &str) -> Option<LyricCandidate> {
            None
        }
    }

    struct GraceSample;

    impl FallbackProvider for GraceSample {
        fn sample_for(&self, _song: &Song) -> RetrievedLyrics {
            RetrievedLyrics::sample("Amazing grace, how sweet the sound")
        }
    }

    const TOOL_REQUEST: &str =
        r#"{"tool": "get_lyrics", "arguments": {"title": "Amazing Grace", "artist": "John Newton"}}"#;

    fn use_case(
        gateway: Arc<ScriptedGateway>,
    ) -> RunAssistantUseCase<ScriptedGateway, OfflineFetcher, NoExtractor> {
        let lyrics = RetrieveLyricsUseCase::new(
            Arc::new(OfflineFetcher),
            Arc::new(NoExtractor),
            Arc::new(GraceSample),
        );
        RunAssistantUseCase::new(gateway, Arc::new(lyrics))
    }

    #[tokio::test]
    async fn test_no_lyrics_without_fallback_fails() {
        let gateway = Arc::new(ScriptedGateway::new(&[TOOL_REQUEST, "Never reached."]));
        let lyrics = RetrieveLyricsUseCase::new(
            Arc::new(OfflineFetcher),
            Arc::new(NoExtractor),
            Arc::new(GraceSample),
        )
        .with_params(RetrievalParams::default().with_fallback(false));
        let uc = RunAssistantUseCase::new(gateway.clone(), Arc::new(lyrics));

        let err = uc.execute(&song()).await.unwrap_err();

        assert!(matches!(
            err,
            RunAssistantError::Retrieval(RetrieveLyricsError::LyricsNotFound { ref title })
                if title == "Amazing Grace"
        ));
        // The model is not called again after the failed tool call
        assert_eq!(gateway.transcripts.lock().unwrap().len(), 1);
    }

    fn song() -> Song {
        Song::try_new("Amazing Grace", Some("John Newton")).unwrap()
    }

    #[tokio::test]
    async fn test_direct_answer() {
        let gateway = Arc::new(ScriptedGateway::new(&["A hymn about grace."]));
        let output = use_case(gateway).execute(&song()).await.unwrap();
        assert_eq!(output.answer, "A hymn about grace.");
        assert_eq!(output.iterations, 1);
        assert_eq!(output.tool_calls, 0);
    }

    #[tokio::test]
    async fn test_tool_request_feeds_lyrics_back() {
        let gateway = Arc::new(ScriptedGateway::new(&[
            TOOL_REQUEST,
            "Themes: grace and redemption.",
        ]));
        let output = use_case(gateway.clone()).execute(&song()).await.unwrap();

        assert_eq!(output.answer, "Themes: grace and redemption.");
        assert_eq!(output.iterations, 2);
        assert_eq!(output.tool_calls, 1);

        let transcripts = gateway.transcripts.lock().unwrap();
        let second = &transcripts[1];
        assert_eq!(second.len(), 5);
        assert_eq!(second[2].role, Role::Assistant);
        assert_eq!(second[3].role, Role::Tool);
        assert!(second[3].content.contains("Amazing grace, how sweet the sound"));
        assert_eq!(second[4].content, "Now please analyze these lyrics.");
    }

    #[tokio::test]
    async fn test_iteration_cap() {
        let gateway = Arc::new(ScriptedGateway::new(&[TOOL_REQUEST; 10]));
        let uc = use_case(gateway.clone())
            .with_params(AssistantParams::default().with_max_iterations(3));

        let err = uc.execute(&song()).await.unwrap_err();

        assert!(matches!(err, RunAssistantError::IterationLimit(3)));
        assert_eq!(gateway.transcripts.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let gateway = Arc::new(ScriptedGateway::new(&[]));
        let err = use_case(gateway).execute(&song()).await.unwrap_err();
        assert!(matches!(err, RunAssistantError::GatewayError(_)));
    }

    #[tokio::test]
    async fn test_blank_title_reported_to_model() {
        let gateway = Arc::new(ScriptedGateway::new(&[
            r#"{"tool": "get_lyrics", "arguments": {"title": " "}}"#,
            "Sorry.",
        ]));
        use_case(gateway.clone()).execute(&song()).await.unwrap();
        let transcripts = gateway.transcripts.lock().unwrap();
        assert!(transcripts[1][3].content.contains("Error: Song title cannot be empty"));
    }
}
