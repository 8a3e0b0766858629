use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

use irchat_core::{ChatBackend, ChatView, Entry, SessionId};

use crate::dom;
use crate::fetch::FetchBackend;
use crate::markdown;
use crate::storage::LocalStore;

const MESSAGES_ID: &str = "messagesContainer";
const FORM_ID: &str = "chatForm";
const INPUT_ID: &str = "messageInput";
const BUTTON_ID: &str = "sendButton";

/// The chat page. Cloning shares the same view and DOM handles, which is how
/// event handlers get access to it.
#[derive(Clone)]
pub struct ChatApp {
    document: Document,
    view: Rc<RefCell<ChatView>>,
    backend: Rc<FetchBackend>,
    /// Revision of the conversation at the last scroll
    scrolled_revision: Rc<Cell<u64>>,
}

impl ChatApp {
    pub fn new(backend_url: &str) -> Result<Self, JsValue> {
        let document = crate::document()?;

        let mut store = LocalStore::open()?;
        let session_id = SessionId::bootstrap(&mut store)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Session: {}", session_id);

        Ok(Self {
            document,
            view: Rc::new(RefCell::new(ChatView::new(session_id))),
            backend: Rc::new(FetchBackend::new(backend_url)),
            scrolled_revision: Rc::new(Cell::new(0)),
        })
    }

    pub fn start(self) -> Result<(), JsValue> {
        self.setup_input()?;
        self.setup_form()?;
        self.render()
    }

    fn input(&self) -> Result<HtmlInputElement, JsValue> {
        dom::get_input_by_id(&self.document, INPUT_ID)
    }

    fn button(&self) -> Result<HtmlButtonElement, JsValue> {
        dom::get_button_by_id(&self.document, BUTTON_ID)
    }

    fn setup_input(&self) -> Result<(), JsValue> {
        let input = dom::get_element_by_id(&self.document, INPUT_ID)?;
        let app = self.clone();

        dom::add_listener(&input, "input", move |_event| {
            if let Ok(input) = app.input() {
                app.view.borrow_mut().set_draft(input.value());
            }
            if let Err(e) = app.update_controls() {
                log::error!("Failed to update controls: {:?}", e);
            }
        })
    }

    fn setup_form(&self) -> Result<(), JsValue> {
        let form = dom::get_element_by_id(&self.document, FORM_ID)?;
        let app = self.clone();

        dom::add_listener(&form, "submit", move |event| {
            event.prevent_default();
            if let Err(e) = app.handle_submit() {
                log::error!("Failed to submit: {:?}", e);
            }
        })
    }

    fn handle_submit(&self) -> Result<(), JsValue> {
        // The borrow must end before the await below
        let Some(request) = self.view.borrow_mut().begin_submit() else {
            return Ok(());
        };

        self.input()?.set_value("");
        self.render()?;

        let app = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = app.backend.send(&request).await;
            app.view.borrow_mut().finish_submit(outcome);

            if let Err(e) = app.render() {
                log::error!("Failed to render: {:?}", e);
            }
        });

        Ok(())
    }

    fn render(&self) -> Result<(), JsValue> {
        let container = dom::get_element_by_id(&self.document, MESSAGES_ID)?;
        dom::clear_element(&container);

        let view = self.view.borrow();
        for entry in view.entries() {
            let row = self.render_entry(entry)?;
            container.append_child(&row)?;
        }

        if view.revision() != self.scrolled_revision.get() {
            self.scrolled_revision.set(view.revision());
            dom::scroll_to_bottom(&container);
        }
        drop(view);

        self.update_controls()
    }

    fn render_entry(&self, entry: Entry<'_>) -> Result<Element, JsValue> {
        match entry {
            Entry::Message(message) => {
                let row = dom::create_element_with_class(
                    &self.document,
                    "div",
                    &format!("message {}", message.role()),
                )?;
                let content = dom::create_element_with_class(&self.document, "div", "message-content")?;
                content.set_inner_html(&markdown::render_message_content(message));
                row.append_child(&content)?;
                Ok(row)
            }
            Entry::Pending => {
                let row = dom::create_element_with_class(&self.document, "div", "message bot pending")?;
                row.set_inner_html(r#"<span class="skeleton wide"></span><span class="skeleton"></span>"#);
                Ok(row)
            }
        }
    }

    fn update_controls(&self) -> Result<(), JsValue> {
        let view = self.view.borrow();
        self.input()?.set_disabled(!view.input_enabled());
        self.button()?.set_disabled(!view.can_submit());
        Ok(())
    }
}
