/// Converts rich-text source (markdown) into display markup.
pub trait MarkupRenderer: Send + Sync + std::fmt::Debug {
    fn render(&self, source: &str) -> String;
}
