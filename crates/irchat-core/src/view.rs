use crate::backend::{ChatBackend, ChatRequest, ChatResponse};
use crate::error::ChatError;
use crate::session::SessionId;
use crate::types::Message;

/// Ephemeral UI state owned by a [`ChatView`]
#[derive(Debug, Clone, Default)]
struct ChatState {
    messages: Vec<Message>,
    draft: String,
    loading: bool,
    /// Bumped whenever `messages` changes; front ends scroll when it moves.
    revision: u64,
}

/// One row of the rendered conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    Message(&'a Message),
    /// Placeholder shown after the messages while a request is in flight.
    Pending,
}

/// The conversation, the draft and the request/response cycle.
///
/// Submission is split in two so a front end can draw the user's message
/// before the backend answers:
///
/// ```rust,no_run
/// # use irchat_core::{ChatView, ChatBackend, SessionId};
/// # async fn demo(view: &mut ChatView, backend: &dyn ChatBackend) {
/// if let Some(request) = view.begin_submit() {
///     // render here: user message visible, placeholder shown
///     let outcome = backend.send(&request).await;
///     view.finish_submit(outcome);
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChatView {
    session_id: SessionId,
    state: ChatState,
}

impl ChatView {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            state: ChatState::default(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.state.messages
    }

    pub fn draft(&self) -> &str {
        &self.state.draft
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn revision(&self) -> u64 {
        self.state.revision
    }

    /// Replace the draft. Ignored while a request is in flight, matching a
    /// disabled input control.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.state.loading {
            return;
        }
        self.state.draft = text.into();
    }

    /// Whether the input control accepts edits.
    pub fn input_enabled(&self) -> bool {
        !self.state.loading
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.state.loading && !self.state.draft.trim().is_empty()
    }

    /// Commit the draft: append the user message, clear the draft, mark the
    /// view as loading and hand back the request to send.
    ///
    /// Returns `None` without touching any state when the draft is blank or
    /// a request is already outstanding.
    pub fn begin_submit(&mut self) -> Option<ChatRequest> {
        if !self.can_submit() {
            return None;
        }

        let prompt = std::mem::take(&mut self.state.draft);
        self.push(Message::user(prompt.clone()));
        self.state.loading = true;

        Some(ChatRequest {
            session_id: self.session_id.as_str().to_string(),
            prompt,
        })
    }

    /// Record the outcome of the request started by [`ChatView::begin_submit`]
    /// and return the bot message that was appended.
    pub fn finish_submit(&mut self, outcome: Result<ChatResponse, ChatError>) -> &Message {
        let reply = match outcome {
            Ok(response) => Message::bot(response.response),
            Err(error) => {
                log::debug!("Chat request failed: {}", error);
                error.into_message()
            }
        };
        self.push(reply);
        self.state.loading = false;

        &self.state.messages[self.state.messages.len() - 1]
    }

    /// Run a whole submit cycle against `backend`. Returns whether a request
    /// was issued.
    pub async fn submit<B>(&mut self, backend: &B) -> bool
    where
        B: ChatBackend + ?Sized,
    {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let outcome = backend.send(&request).await;
        self.finish_submit(outcome);
        true
    }

    /// Rows to draw, in display order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.state
            .messages
            .iter()
            .map(Entry::Message)
            .chain(self.state.loading.then_some(Entry::Pending))
    }

    fn push(&mut self, message: Message) {
        self.state.messages.push(message);
        self.state.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FALLBACK_MESSAGE;
    use crate::types::Role;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Backend that replays canned outcomes and records what it was sent
    #[derive(Default)]
    struct ScriptedBackend {
        outcomes: RefCell<VecDeque<Result<ChatResponse, ChatError>>>,
        requests: RefCell<Vec<ChatRequest>>,
    }

    impl ScriptedBackend {
        fn replying(text: &str) -> Self {
            let backend = Self::default();
            backend.outcomes.borrow_mut().push_back(Ok(ChatResponse {
                response: text.to_string(),
            }));
            backend
        }

        fn failing(error: ChatError) -> Self {
            let backend = Self::default();
            backend.outcomes.borrow_mut().push_back(Err(error));
            backend
        }
    }

    #[async_trait(?Send)]
    impl ChatBackend for ScriptedBackend {
        async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
            self.requests.borrow_mut().push(request.clone());
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ChatError::Network("no scripted outcome".into())))
        }
    }

    /// Collects records at `Info` and above so tests can check that chat
    /// failures stay out of user-visible logs.
    struct RecordingLogger {
        records: Mutex<Vec<String>>,
    }

    impl log::Log for RecordingLogger {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            metadata.level() <= log::Level::Info
        }

        fn log(&self, record: &log::Record<'_>) {
            if self.enabled(record.metadata()) {
                if let Ok(mut records) = self.records.lock() {
                    records.push(format!("{} {}", record.level(), record.args()));
                }
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: RecordingLogger = RecordingLogger {
        records: Mutex::new(Vec::new()),
    };

    fn view() -> ChatView {
        ChatView::new(SessionId::from("session-1".to_string()))
    }

    #[test]
    fn test_user_message_is_appended_before_resolution() {
        let mut view = view();
        view.set_draft("What is the fund's AUM?");

        let request = view.begin_submit().expect("request issued");

        assert_eq!(request.session_id, "session-1");
        assert_eq!(request.prompt, "What is the fund's AUM?");
        assert_eq!(view.messages(), &[Message::user("What is the fund's AUM?")]);
        assert!(view.is_loading());
        assert_eq!(view.draft(), "");
    }

    #[test]
    fn test_fund_aum_scenario() {
        let mut view = view();
        view.set_draft("What is the fund's AUM?");
        view.begin_submit().unwrap();

        let reply = view.finish_submit(Ok(ChatResponse {
            response: "The fund's AUM is $120M.".into(),
        }));
        assert_eq!(reply, &Message::bot("The fund's AUM is $120M."));

        assert_eq!(
            view.messages(),
            &[
                Message::user("What is the fund's AUM?"),
                Message::bot("The fund's AUM is $120M."),
            ]
        );
        assert!(!view.is_loading());
        assert_eq!(view.draft(), "");
    }

    #[test]
    fn test_blank_draft_is_a_noop() {
        for draft in ["", "   ", "\t\n"] {
            let mut view = view();
            view.set_draft(draft);

            assert!(!view.can_submit());
            assert!(view.begin_submit().is_none());
            assert!(view.messages().is_empty());
            assert!(!view.is_loading());
            assert_eq!(view.revision(), 0);
        }
    }

    #[test]
    fn test_raw_draft_is_sent_untrimmed() {
        let mut view = view();
        view.set_draft("  padded question  ");

        let request = view.begin_submit().unwrap();
        assert_eq!(request.prompt, "  padded question  ");
        assert_eq!(view.messages()[0].text(), "  padded question  ");
    }

    #[test]
    fn test_submit_is_blocked_while_loading() {
        let mut view = view();
        view.set_draft("first");
        view.begin_submit().unwrap();

        view.set_draft("second");
        assert_eq!(view.draft(), "");
        assert!(!view.can_submit());
        assert!(!view.input_enabled());
        assert!(view.begin_submit().is_none());
        assert_eq!(view.messages().len(), 1);
    }

    #[test]
    fn test_pending_entry_only_while_loading() {
        let mut view = view();
        view.set_draft("question");
        view.begin_submit().unwrap();

        let entries: Vec<_> = view.entries().collect();
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0], Entry::Message(m) if m.is_user()));
        assert_eq!(entries[1], Entry::Pending);

        view.finish_submit(Ok(ChatResponse { response: "answer".into() }));
        let entries: Vec<_> = view.entries().collect();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| matches!(e, Entry::Message(_))));
    }

    #[test]
    fn test_revision_tracks_message_changes() {
        let mut view = view();
        view.set_draft("question");
        assert_eq!(view.revision(), 0);

        view.begin_submit().unwrap();
        assert_eq!(view.revision(), 1);

        view.finish_submit(Err(ChatError::Network("down".into())));
        assert_eq!(view.revision(), 2);
    }

    #[tokio::test]
    async fn test_submit_success_appends_user_then_bot() {
        let backend = ScriptedBackend::replying("The fund's AUM is $120M.");
        let mut view = view();
        view.set_draft("What is the fund's AUM?");

        assert!(view.submit(&backend).await);

        let roles: Vec<Role> = view.messages().iter().map(Message::role).collect();
        assert_eq!(roles, vec![Role::User, Role::Bot]);
        assert_eq!(view.messages()[1].text(), "The fund's AUM is $120M.");
        assert_eq!(backend.requests.borrow().len(), 1);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_submit_failure_appends_fallback() {
        let backend = ScriptedBackend::failing(ChatError::Status {
            status: 500,
            body: "internal error".into(),
        });
        let mut view = view();
        view.set_draft("Hello");

        assert!(view.submit(&backend).await);

        assert_eq!(view.messages(), &[Message::user("Hello"), Message::bot(FALLBACK_MESSAGE)]);
        assert!(!view.is_loading());
        assert!(view.input_enabled());
        assert_eq!(view.draft(), "");
    }

    #[tokio::test]
    async fn test_blank_submit_sends_nothing() {
        let backend = ScriptedBackend::replying("unused");
        let mut view = view();
        view.set_draft("   ");

        assert!(!view.submit(&backend).await);
        assert!(backend.requests.borrow().is_empty());
        assert!(view.messages().is_empty());
    }

    #[tokio::test]
    async fn test_session_id_is_sent_on_every_request() {
        let backend = ScriptedBackend::default();
        {
            let mut outcomes = backend.outcomes.borrow_mut();
            outcomes.push_back(Ok(ChatResponse { response: "one".into() }));
            outcomes.push_back(Ok(ChatResponse { response: "two".into() }));
        }
        let mut view = view();

        view.set_draft("a");
        view.submit(&backend).await;
        view.set_draft("b");
        view.submit(&backend).await;

        let requests = backend.requests.borrow();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.session_id == "session-1"));
        assert_eq!(view.messages().len(), 4);
    }

    #[test]
    fn test_failure_is_not_logged_above_debug() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        let mut view = view();
        view.set_draft("What is the fund's AUM?");
        view.begin_submit().unwrap();
        view.finish_submit(Err(ChatError::Network(
            "error sending request for url (http://127.0.0.1:1/chat)".into(),
        )));

        assert_eq!(view.messages()[1], Message::bot(FALLBACK_MESSAGE));
        let records = LOGGER.records.lock().unwrap();
        assert!(
            records.iter().all(|r| !r.contains("127.0.0.1:1")),
            "failure leaked into logs: {:?}",
            *records
        );
    }
}
