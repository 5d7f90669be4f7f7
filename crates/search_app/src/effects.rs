use search_core::{Article, Effect, Msg};
use search_engine::{plain_text, ClientSettings, EngineEvent, EngineHandle, FetchError};
use search_logging::{search_debug, search_info, search_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    /// Executes one effect. Effects the hosting screen answers itself come
    /// back as follow-up messages.
    pub fn run(&self, effect: Effect) -> Vec<Msg> {
        match effect {
            Effect::FetchHotKeywords => {
                search_info!("FetchHotKeywords");
                self.engine.fetch_hot_keywords();
                Vec::new()
            }
            Effect::SearchPage {
                generation,
                page,
                keyword,
            } => {
                search_info!(
                    "SearchPage generation={} page={} keyword={}",
                    generation,
                    page,
                    keyword
                );
                self.engine.search_page(generation, page, keyword);
                Vec::new()
            }
            Effect::HotKeywordSelected(keyword) => {
                search_debug!("Hot keyword selected: {}", keyword);
                vec![Msg::InputChanged(keyword), Msg::SearchSubmitted]
            }
            Effect::CancelAll => {
                search_info!("CancelAll");
                self.engine.cancel_all();
                Vec::new()
            }
        }
    }

    /// Completions received since the last call, as core messages.
    pub fn drain(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::HotKeywordsLoaded(result) => {
            match &result {
                Ok(keywords) if keywords.is_empty() => {
                    search_warn!("Hot keyword list is empty; suggestions stay hidden");
                }
                Ok(keywords) => search_info!("Loaded {} hot keywords", keywords.len()),
                Err(err) => search_warn!("Hot keyword fetch failed: {}", err),
            }
            Msg::HotKeywordsLoaded(result.map_err(|err| err.to_string()))
        }
        EngineEvent::PageLoaded {
            generation,
            page,
            result,
        } => {
            if let Err(err) = &result {
                search_warn!(
                    "Search page {} (generation {}) failed: {}",
                    page,
                    generation,
                    err
                );
            }
            Msg::PageLoaded {
                generation,
                page,
                result: result
                    .map(|articles| articles.into_iter().map(map_article).collect())
                    .map_err(|err| err.to_string()),
            }
        }
    }
}

fn map_article(article: search_engine::Article) -> Article {
    let chapter = match (
        article.super_chapter_name.is_empty(),
        article.chapter_name.is_empty(),
    ) {
        (false, false) => format!("{} / {}", article.super_chapter_name, article.chapter_name),
        (true, _) => article.chapter_name.clone(),
        (false, true) => article.super_chapter_name.clone(),
    };
    Article {
        id: article.id,
        title: plain_text(&article.title),
        author: article.display_author().to_string(),
        link: article.link,
        chapter,
        published: article.nice_date,
    }
}
