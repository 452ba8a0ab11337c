use leptos::prelude::*;

use crate::session::AnalysisSession;
use crate::types::{ContentReport, VideoReport, VoiceReport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Content,
    Voice,
    Video,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Content, Page::Voice, Page::Video];
    pub const ANALYSIS: [Page; 3] = [Page::Content, Page::Voice, Page::Video];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "홈",
            Page::Content => "내용 분석",
            Page::Voice => "음성 분석",
            Page::Video => "영상 분석",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::Content => "📄",
            Page::Voice => "🎤",
            Page::Video => "🎬",
        }
    }
}

/// App-wide view state: the active page plus one analysis session per kind.
/// Sessions live here rather than in the page components so navigating
/// away and back does not silently discard an in-flight analysis.
#[derive(Clone, Copy)]
pub struct AppState {
    pub page: RwSignal<Page>,
    pub content: AnalysisSession<ContentReport>,
    pub voice: AnalysisSession<VoiceReport>,
    pub video: AnalysisSession<VideoReport>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Home),
            content: AnalysisSession::new(),
            voice: AnalysisSession::new(),
            video: AnalysisSession::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
