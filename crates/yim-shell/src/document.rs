//! Shell document: the HTML page that hosts the mount element.

use yim_common::MountError;

/// An HTML document containing the element the root component mounts into.
#[derive(Debug, Clone)]
pub struct ShellDocument {
    html: String,
}

impl ShellDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Whether an element with `id="{element_id}"` exists.
    pub fn has_element(&self, element_id: &str) -> bool {
        self.content_start(element_id).is_some()
    }

    /// Return the document with `markup` inserted as the first child of the
    /// element whose id is `element_id`.
    pub fn mount_into(&self, element_id: &str, markup: &str) -> Result<String, MountError> {
        let at = self
            .content_start(element_id)
            .ok_or_else(|| MountError::ElementNotFound(element_id.to_string()))?;

        let mut html = String::with_capacity(self.html.len() + markup.len());
        html.push_str(&self.html[..at]);
        html.push_str(markup);
        html.push_str(&self.html[at..]);
        Ok(html)
    }

    /// Byte offset just past the `>` of the opening tag carrying the id.
    fn content_start(&self, element_id: &str) -> Option<usize> {
        [format!("id=\"{element_id}\""), format!("id='{element_id}'")]
            .iter()
            .flat_map(|needle| {
                self.html
                    .match_indices(needle.as_str())
                    .map(move |(pos, _)| (pos, pos + needle.len()))
            })
            .filter_map(|(start, end)| self.opening_tag_end(start, end))
            .min()
    }

    /// For an `id=...` attribute spanning `start..end`, the offset past the
    /// enclosing opening tag, or `None` if the match is not a real attribute.
    fn opening_tag_end(&self, start: usize, end: usize) -> Option<usize> {
        // `data-id="app"` is a different attribute.
        let preceding = self.html[..start].chars().next_back()?;
        if !preceding.is_ascii_whitespace() {
            return None;
        }

        // Must sit inside a tag, not in text content.
        let tag_open = self.html[..start].rfind('<')?;
        if self.html[tag_open..start].contains('>') {
            return None;
        }

        let tag_close = self.html[end..].find('>')?;
        Some(end + tag_close + 1)
    }
}
