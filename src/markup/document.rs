use roxmltree::{Document, Node};

use crate::error::{ChartError, ChartResult};
use crate::style::StyleTarget;

/// Parsed chart-element markup.
///
/// The wrapper borrows the markup source for the duration of one extraction
/// pass; nothing from the tree outlives the pass, extraction copies what it
/// keeps into owned model types.
pub struct ChartMarkup<'input> {
    doc: Document<'input>,
}

impl<'input> ChartMarkup<'input> {
    /// Parses a chart element snippet. The outermost element is the chart
    /// element itself and carries the `width`/`height`/`id`/`class`
    /// attributes.
    pub fn parse(source: &'input str) -> ChartResult<Self> {
        let doc = Document::parse(source)
            .map_err(|e| ChartError::Structure(format!("markup is not well-formed: {e}")))?;
        Ok(Self { doc })
    }

    /// The chart element node.
    #[must_use]
    pub fn root(&self) -> Node<'_, 'input> {
        self.doc.root_element()
    }

    /// First descendant element with the given tag name, in document order.
    #[must_use]
    pub fn find(&self, tag: &str) -> Option<Node<'_, 'input>> {
        self.root()
            .descendants()
            .find(|n| n.is_element() && n.has_tag_name(tag))
    }

    /// All descendant elements with the given tag name, in document order.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
        self.root()
            .descendants()
            .filter(move |n| n.is_element() && n.has_tag_name(tag))
    }

    /// Attribute of the chart element itself.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.root().attribute(name)
    }

    /// Stylesheet matching target (`id`/`class`) of the chart element.
    #[must_use]
    pub fn style_target(&self) -> StyleTarget {
        element_style_target(self.root())
    }

    /// Text of the first `tag` descendant, if the element exists and its
    /// content is non-empty after trimming.
    #[must_use]
    pub fn element_text(&self, tag: &str) -> Option<String> {
        let node = self.find(tag)?;
        let text = text_content(node);
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }
}

/// Concatenated text of all text descendants, DOM `textContent` style.
#[must_use]
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// `id`/`class` attributes of an element as a stylesheet matching target.
#[must_use]
pub fn element_style_target(node: Node<'_, '_>) -> StyleTarget {
    StyleTarget::new(node.attribute("id"), node.attribute("class"))
}
