//! Retrieve Lyrics use case
//!
//! Sequences the retrieval cascade:
//!
//! 1. **Known hosts**: guessed URLs (only when an artist is given)
//! 2. **Lyrics search**: worship-weighted queries on the dedicated provider
//! 3. **Web search**: general queries, host-priority reordered
//!
//! Stages are resolved lazily, so a search only runs once every earlier
//! candidate has failed. The first extraction longer than the minimum wins.
//! When the cascade is exhausted the fallback provider supplies sample text.

use crate::config::RetrievalParams;
use crate::ports::fallback_provider::FallbackProvider;
use crate::ports::lyric_extractor::LyricExtractor;
use crate::ports::page_fetcher::PageFetcher;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::search_provider::SearchProvider;
use crate::use_cases::search_candidates::SearchExecutor;
use psalter_domain::util::truncate_chars;
use psalter_domain::{
    CandidateList, CandidateOutcome, QueryBuilder, RetrievalStage, RetrievedLyrics, Song,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during lyric retrieval
#[derive(Error, Debug)]
pub enum RetrieveLyricsError {
    /// Only returned when the fallback is disabled.
    #[error("Lyrics not found for '{title}'")]
    LyricsNotFound { title: String },
}

/// Use case for retrieving lyrics from the open web
pub struct RetrieveLyricsUseCase<F: PageFetcher + 'static, E: LyricExtractor + 'static> {
    fetcher: Arc<F>,
    extractor: Arc<E>,
    fallback: Arc<dyn FallbackProvider>,
    dedicated_search: Option<Arc<dyn SearchProvider>>,
    web_search: Option<Arc<dyn SearchProvider>>,
    params: RetrievalParams,
}

impl<F: PageFetcher + 'static, E: LyricExtractor + 'static> RetrieveLyricsUseCase<F, E> {
    pub fn new(fetcher: Arc<F>, extractor: Arc<E>, fallback: Arc<dyn FallbackProvider>) -> Self {
        Self {
            fetcher,
            extractor,
            fallback,
            dedicated_search: None,
            web_search: None,
            params: RetrievalParams::default(),
        }
    }

    pub fn with_dedicated_search(mut self, provider: Arc<dyn SearchProvider>) -> Self {
        self.dedicated_search = Some(provider);
        self
    }

    pub fn with_web_search(mut self, provider: Arc<dyn SearchProvider>) -> Self {
        self.web_search = Some(provider);
        self
    }

    pub fn with_params(mut self, params: RetrievalParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &RetrievalParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, song: &Song) -> Result<RetrievedLyrics, RetrieveLyricsError> {
        self.execute_with_progress(song, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        song: &Song,
        progress: &dyn ProgressNotifier,
    ) -> Result<RetrievedLyrics, RetrieveLyricsError> {
        info!("Retrieving lyrics for {}", song);
        let mut tried = CandidateList::new();

        for stage in RetrievalStage::ALL {
            let candidates: Vec<String> = self
                .candidates_for(stage, song)
                .await
                .into_iter()
                .filter(|url| !tried.contains(url))
                .collect();

            progress.on_stage_start(stage, candidates.len());
            debug!("Stage {}: {} candidates", stage, candidates.len());

            for url in candidates {
                tried.push(url.clone());
                let (outcome, text) = self.try_candidate(&url).await;
                progress.on_candidate_result(stage, &url, &outcome);

                if let Some(text) = text {
                    let lyrics = RetrievedLyrics::live(text, url, stage);
                    info!(
                        "Accepted lyrics from {} ({}, {})",
                        lyrics.source_url().unwrap_or_default(),
                        stage,
                        lyrics.affinity.label()
                    );
                    progress.on_lyrics_found(&lyrics);
                    return Ok(lyrics);
                }
            }

            progress.on_stage_complete(stage);
        }

        warn!(
            "All {} candidates exhausted for {}",
            tried.len(),
            song
        );

        if !self.params.allow_fallback {
            return Err(RetrieveLyricsError::LyricsNotFound {
                title: song.title().to_string(),
            });
        }

        progress.on_fallback(song);
        let sample = self.fallback.sample_for(song);
        progress.on_lyrics_found(&sample);
        Ok(sample)
    }

    async fn candidates_for(&self, stage: RetrievalStage, song: &Song) -> Vec<String> {
        let per_source = self.params.max_candidates_per_source;
        match stage {
            RetrievalStage::DirectHosts => QueryBuilder::direct_urls(song),
            RetrievalStage::DedicatedSearch => match &self.dedicated_search {
                Some(provider) => self
                    .search(provider.as_ref(), &QueryBuilder::worship_queries(song), per_source)
                    .await,
                None => Vec::new(),
            },
            RetrievalStage::WebSearch => match &self.web_search {
                Some(provider) => self
                    .search(provider.as_ref(), &QueryBuilder::general_queries(song), per_source)
                    .await,
                None => Vec::new(),
            },
        }
    }

    async fn search(
        &self,
        provider: &dyn SearchProvider,
        queries: &[psalter_domain::SearchQuery],
        take: usize,
    ) -> Vec<String> {
        SearchExecutor::new(provider, &self.params.domain_policy)
            .candidates(queries, self.params.max_search_results)
            .await
            .into_vec()
            .into_iter()
            .take(take)
            .collect()
    }

    /// Fetch and extract one candidate; returns the accepted text, if any.
    async fn try_candidate(&self, url: &str) -> (CandidateOutcome, Option<String>) {
        let page = self.fetcher.fetch(url).await;
        let Some(content) = page.content.as_deref().filter(|_| page.is_success()) else {
            debug!("Fetch failed for {} (status {:?})", url, page.status);
            return (CandidateOutcome::FetchFailed { status: page.status }, None);
        };

        let Some(candidate) = self.extractor.extract(content) else {
            debug!("No lyric block found at {}", url);
            return (CandidateOutcome::NoLyrics, None);
        };

        let chars = candidate.char_len();
        if chars <= self.params.min_lyrics_chars {
            debug!("Lyric block at {} too short ({} chars)", url, chars);
            return (CandidateOutcome::TooShort { chars }, None);
        }

        let text = match self.params.max_excerpt_chars {
            Some(max) => truncate_chars(&candidate.text, max).to_string(),
            None => candidate.text,
        };
        (CandidateOutcome::Accepted { chars }, Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::page_fetcher::FetchedPage;
    use crate::ports::search_provider::{SearchError, SearchHit, SearchProviderKind};
    use async_trait::async_trait;
    use psalter_domain::lyrics::content_lines;
    use psalter_domain::{ExtractionPolicy, LyricCandidate, LyricSource};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves fixed pages by URL and 404s everything else.
    struct MapFetcher {
        pages: HashMap<String, String>,
        requested: Mutex<Vec<String>>,
    }

    impl MapFetcher {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(u, c)| (u.to_string(), c.to_string()))
                    .collect(),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageFetcher for MapFetcher {
        async fn fetch(&self, url: &str) -> FetchedPage {
            self.requested.lock().unwrap().push(url.to_string());
            match self.pages.get(url) {
                Some(content) => FetchedPage::ok(url, 200, content.clone()),
                None => FetchedPage::failed(url, Some(404)),
            }
        }
    }

    /// Treats the whole page as one structured block.
    struct PlainTextExtractor;

    impl LyricExtractor for PlainTextExtractor {
        fn extract(&self, content: &str) -> Option<LyricCandidate> {
            ExtractionPolicy::default().accept_block(&content_lines(content), "text")
        }
    }

    struct FixedSearch {
        kind: SearchProviderKind,
        urls: Vec<&'static str>,
        calls: Mutex<usize>,
    }

    impl FixedSearch {
        fn new(kind: SearchProviderKind, urls: Vec<&'static str>) -> Self {
            Self {
                kind,
                urls,
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl SearchProvider for FixedSearch {
        fn name(&self) -> &str {
            "fixed"
        }

        fn kind(&self) -> SearchProviderKind {
            self.kind
        }

        async fn search(&self, _query: &str, limit: usize) -> Result<Vec<SearchHit>, SearchError> {
            *self.calls.lock().unwrap() += 1;
            Ok(self
                .urls
                .iter()
                .take(limit)
                .map(|u| SearchHit::new(*u))
                .collect())
        }
    }

    struct StaticFallback;

    impl FallbackProvider for StaticFallback {
        fn sample_for(&self, song: &Song) -> RetrievedLyrics {
            RetrievedLyrics::sample(format!("[Sample lyrics for '{}']", song.title()))
        }
    }

    const LYRICS: &str = "Amazing grace how sweet the sound\n\
        That saved a wretch like me\n\
        I once was lost but now am found\n\
        Was blind but now I see\n\
        Twas grace that taught my heart to fear\n\
        And grace my fears relieved\n\
        How precious did that grace appear\n\
        The hour I first believed\n\
        Through many dangers toils and snares\n\
        I have already come\n";

    fn song(artist: Option<&str>) -> Song {
        Song::try_new("Amazing Grace", artist).unwrap()
    }

    fn use_case(fetcher: Arc<MapFetcher>) -> RetrieveLyricsUseCase<MapFetcher, PlainTextExtractor> {
        RetrieveLyricsUseCase::new(fetcher, Arc::new(PlainTextExtractor), Arc::new(StaticFallback))
    }

    #[tokio::test]
    async fn test_direct_host_hit_short_circuits() {
        let fetcher = Arc::new(MapFetcher::new(&[(
            "https://www.christianlyrics.com/john-newton/amazing-grace.html",
            LYRICS,
        )]));
        let search = Arc::new(FixedSearch::new(SearchProviderKind::Dedicated, vec![]));
        let uc = use_case(fetcher.clone()).with_dedicated_search(search.clone());

        let lyrics = uc.execute(&song(Some("John Newton"))).await.unwrap();

        assert_eq!(
            lyrics.source,
            LyricSource::Live {
                url: "https://www.christianlyrics.com/john-newton/amazing-grace.html".to_string(),
                stage: RetrievalStage::DirectHosts,
            }
        );
        assert_eq!(fetcher.requested().len(), 3);
        assert_eq!(*search.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_falls_through_to_dedicated_search() {
        let fetcher = Arc::new(MapFetcher::new(&[("https://genius.com/amazing-grace-lyrics", LYRICS)]));
        let search = Arc::new(FixedSearch::new(
            SearchProviderKind::Dedicated,
            vec!["https://genius.com/amazing-grace-lyrics"],
        ));
        let uc = use_case(fetcher.clone()).with_dedicated_search(search);

        let lyrics = uc.execute(&song(Some("John Newton"))).await.unwrap();

        assert!(!lyrics.is_synthetic());
        assert_eq!(lyrics.text.lines().count(), 10);
        // six direct hosts, then the search hit
        assert_eq!(fetcher.requested().len(), 7);
    }

    #[tokio::test]
    async fn test_candidates_capped_per_source() {
        let fetcher = Arc::new(MapFetcher::new(&[]));
        let search = Arc::new(FixedSearch::new(
            SearchProviderKind::GeneralWeb,
            vec!["https://a.com/1", "https://b.com/2", "https://c.com/3", "https://d.com/4"],
        ));
        let uc = use_case(fetcher.clone()).with_web_search(search);

        let lyrics = uc.execute(&song(None)).await.unwrap();

        assert!(lyrics.is_synthetic());
        assert_eq!(
            fetcher.requested(),
            vec!["https://a.com/1", "https://b.com/2", "https://c.com/3"]
        );
    }

    #[tokio::test]
    async fn test_url_tried_once_across_stages() {
        let fetcher = Arc::new(MapFetcher::new(&[]));
        let dedicated = Arc::new(FixedSearch::new(
            SearchProviderKind::Dedicated,
            vec!["https://hymnary.org/text/amazing-grace"],
        ));
        let web = Arc::new(FixedSearch::new(
            SearchProviderKind::GeneralWeb,
            vec!["https://hymnary.org/text/amazing-grace", "https://e.com/5"],
        ));
        let uc = use_case(fetcher.clone())
            .with_dedicated_search(dedicated)
            .with_web_search(web);

        uc.execute(&song(Some("John Newton"))).await.unwrap();

        let requested = fetcher.requested();
        let hymnary = requested
            .iter()
            .filter(|u| *u == "https://hymnary.org/text/amazing-grace")
            .count();
        assert_eq!(hymnary, 1);
        assert_eq!(requested.last().map(String::as_str), Some("https://e.com/5"));
    }

    #[tokio::test]
    async fn test_short_extraction_is_rejected() {
        let fetcher = Arc::new(MapFetcher::new(&[("https://hymnary.org/text/amazing-grace", LYRICS)]));
        let uc = use_case(fetcher)
            .with_params(RetrievalParams::default().with_min_lyrics_chars(LYRICS.len()));

        let lyrics = uc.execute(&song(Some("John Newton"))).await.unwrap();
        assert!(lyrics.is_synthetic());
    }

    #[tokio::test]
    async fn test_fallback_disabled_returns_not_found() {
        let fetcher = Arc::new(MapFetcher::new(&[]));
        let uc = use_case(fetcher).with_params(RetrievalParams::default().with_fallback(false));

        let err = uc.execute(&song(Some("John Newton"))).await.unwrap_err();
        assert!(matches!(err, RetrieveLyricsError::LyricsNotFound { title } if title == "Amazing Grace"));
    }

    #[tokio::test]
    async fn test_accepted_text_is_capped() {
        let fetcher = Arc::new(MapFetcher::new(&[("https://hymnary.org/text/amazing-grace", LYRICS)]));
        let uc = use_case(fetcher)
            .with_params(RetrievalParams::default().with_max_excerpt_chars(Some(120)));

        let lyrics = uc.execute(&song(Some("John Newton"))).await.unwrap();
        assert_eq!(lyrics.text.chars().count(), 120);
    }
}
