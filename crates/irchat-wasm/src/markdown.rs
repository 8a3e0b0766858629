use pulldown_cmark::{html, Options, Parser};

use irchat_core::{Message, Role};

/// Render markdown to HTML. Raw HTML in the source is escaped rather than
/// passed through.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        pulldown_cmark::Event::Html(raw) | pulldown_cmark::Event::InlineHtml(raw) => {
            pulldown_cmark::Event::Text(raw)
        }
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// HTML for a message body: bot replies are markdown, user text is shown
/// verbatim with its line breaks.
pub fn render_message_content(message: &Message) -> String {
    match message.role() {
        Role::Bot => render_markdown(message.text()),
        Role::User => crate::utils::escape_html(message.text()).replace('\n', "<br>"),
    }
}
