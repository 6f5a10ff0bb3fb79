//! The generic tree node every constructor produces

/// A single node of an XDMF document: a tag, its attributes, an optional text
/// payload, and child elements in document order.
///
/// Attributes keep the order they were first set in so that the written
/// document is stable, but setting an existing attribute replaces its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new<T: Into<String>>(tag: T) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// create an element with a set of attributes
    pub fn with_attributes<T, I, K, V>(tag: T, attributes: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut element = Self::new(tag);
        for (key, value) in attributes {
            element.set_attribute(key, value);
        }
        element
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();

        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// the value of the attribute `key`, if it is set
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text<T: Into<String>>(&mut self, text: T) {
        self.text = Some(text.into());
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// append each child in the order it is yielded
    pub fn append_children<I: IntoIterator<Item = Element>>(&mut self, children: I) {
        self.children.extend(children);
    }

    /// number of elements in the tree rooted here, including this one
    pub fn count_elements(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Element::count_elements)
            .sum::<usize>()
    }
}

/// Append `child` as the last child of `parent`
pub fn append_child(parent: &mut Element, child: Element) {
    parent.append_child(child)
}

/// Append every element of `children` to `parent`, keeping their order
pub fn append_children<I: IntoIterator<Item = Element>>(parent: &mut Element, children: I) {
    parent.append_children(children)
}

/// Replace the text payload of `element`
pub fn set_text<T: Into<String>>(element: &mut Element, text: T) {
    element.set_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_replace() {
        let mut element = Element::with_attributes("Grid", [("GridType", "Uniform")]);
        element.set_attribute("Name", "mesh");
        element.set_attribute("GridType", "Collection");

        assert_eq!(element.attribute("GridType"), Some("Collection"));
        assert_eq!(element.attribute("Name"), Some("mesh"));
        assert_eq!(element.attribute("Section"), None);

        let keys: Vec<_> = element.attributes().map(|(k, _)| k).collect();
        assert_eq!(keys, ["GridType", "Name"]);
    }

    #[test]
    fn children_keep_call_order() {
        let mut grid = Element::new("Grid");
        append_child(&mut grid, Element::new("Time"));
        append_children(
            &mut grid,
            [Element::new("Topology"), Element::new("Geometry")],
        );
        grid.append_child(Element::new("Attribute"));

        let tags: Vec<_> = grid.children().iter().map(Element::tag).collect();
        assert_eq!(tags, ["Time", "Topology", "Geometry", "Attribute"]);
        assert_eq!(grid.count_elements(), 5);
    }

    #[test]
    fn text_payload() {
        let mut item = Element::new("DataItem");
        assert_eq!(item.text(), None);

        set_text(&mut item, "1 2 3");
        assert_eq!(item.text(), Some("1 2 3"));
    }
}
