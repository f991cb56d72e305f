use caminio_contracts::MarkupRenderer;
use pulldown_cmark::{Options, Parser, html};

/// Markdown to HTML via pulldown-cmark.
#[derive(Debug, Clone, Copy)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self {
            options: Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
        }
    }
}

impl MarkupRenderer for CommonMarkRenderer {
    fn render(&self, source: &str) -> String {
        let parser = Parser::new_ext(source, self.options);
        let mut out = String::with_capacity(source.len() + source.len() / 2);
        html::push_html(&mut out, parser);
        out
    }
}
