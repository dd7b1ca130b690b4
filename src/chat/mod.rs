mod greeting;
mod offline;
mod prompt;

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use crate::model::{ChatProvider, ProviderError};
use crate::web::models::HistoryEntry;

pub use greeting::ensure_greeting;
pub use offline::offline_answer;
pub use prompt::build_prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Provider,
    Offline,
}

#[derive(Debug, Clone)]
pub struct ResolvedReply {
    pub text: String,
    pub source: ReplySource,
}

pub struct AnswerResolver {
    provider: Option<Arc<dyn ChatProvider>>,
    timeout: Duration,
}

impl AnswerResolver {
    pub fn new(provider: Option<Arc<dyn ChatProvider>>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub fn offline(timeout: Duration) -> Self {
        Self::new(None, timeout)
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn resolve(&self, message: &str, history: &[HistoryEntry]) -> ResolvedReply {
        let Some(provider) = &self.provider else {
            return Self::offline_reply(message);
        };

        let prompt = build_prompt(message, history);
        match self.call_provider(provider.as_ref(), &prompt).await {
            Ok(text) => ResolvedReply {
                text: ensure_greeting(&text),
                source: ReplySource::Provider,
            },
            Err(e) => {
                warn!("Provider {} unavailable, answering offline: {}", provider.name(), e);
                Self::offline_reply(message)
            }
        }
    }

    pub fn offline_reply(message: &str) -> ResolvedReply {
        ResolvedReply {
            text: ensure_greeting(&offline_answer(message)),
            source: ReplySource::Offline,
        }
    }

    async fn call_provider(
        &self,
        provider: &dyn ChatProvider,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        info!("Calling provider {}", provider.name());
        let text = tokio::time::timeout(self.timeout, provider.generate(prompt))
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout))??;

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyText);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::{Script, ScriptedProvider};
    use crate::web::models::Role;

    fn resolver_with(script: Script) -> (AnswerResolver, Arc<ScriptedProvider>) {
        let provider = Arc::new(ScriptedProvider::new(script));
        let resolver = AnswerResolver::new(
            Some(provider.clone() as Arc<dyn ChatProvider>),
            Duration::from_millis(200),
        );
        (resolver, provider)
    }

    #[actix_web::test]
    async fn without_provider_answers_offline() {
        let resolver = AnswerResolver::offline(Duration::from_secs(1));
        let reply = resolver.resolve("How do I register?", &[]).await;
        assert_eq!(reply.source, ReplySource::Offline);
        assert_eq!(reply.text, ensure_greeting(&offline_answer("How do I register?")));
        assert!(reply.text.starts_with("Hi there! 👋 • "));
    }

    #[actix_web::test]
    async fn provider_text_is_greeted_and_dispatcher_bypassed() {
        let (resolver, provider) = resolver_with(Script::Reply("• Vamana is emesis therapy".into()));
        let history = vec![HistoryEntry {
            role: Role::User,
            content: "Hello".into(),
        }];
        let reply = resolver.resolve("What is Vamana?", &history).await;
        assert_eq!(reply.source, ReplySource::Provider);
        assert_eq!(reply.text, "Hi there! 👋 • Vamana is emesis therapy");

        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], build_prompt("What is Vamana?", &history));
    }

    #[actix_web::test]
    async fn already_greeted_provider_text_is_unchanged() {
        let (resolver, _) = resolver_with(Script::Reply("Namaste! Basti is...".into()));
        let reply = resolver.resolve("basti?", &[]).await;
        assert_eq!(reply.text, "Namaste! Basti is...");
    }

    #[actix_web::test]
    async fn provider_failures_match_offline_output() {
        let message = "What's the price to register?";
        let expected = AnswerResolver::offline(Duration::from_secs(1))
            .resolve(message, &[])
            .await
            .text;

        for script in [
            Script::Status(500),
            Script::Empty,
            Script::Reply("   ".into()),
            Script::Hang(Duration::from_secs(5)),
        ] {
            let (resolver, provider) = resolver_with(script.clone());
            let reply = resolver.resolve(message, &[]).await;
            assert_eq!(reply.source, ReplySource::Offline, "{:?}", script);
            assert_eq!(reply.text, expected, "{:?}", script);
            assert_eq!(provider.calls(), 1, "exactly one attempt for {:?}", script);
        }
    }
}
