use crate::prelude::*;

use std::fs::File;
use std::io::BufWriter;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;
use tracing::debug;

/// Indentation applied to each nesting level of the written document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    pub indent_char: u8,
    pub size: usize,
}

impl Default for Indent {
    fn default() -> Self {
        Self {
            indent_char: b' ',
            size: 2,
        }
    }
}

/// How a document is laid out when it is serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// `None` writes the whole document on a single line
    pub indent: Option<Indent>,
    /// start the document with `<?xml version="1.0" encoding="UTF-8"?>`
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: Some(Indent::default()),
            declaration: true,
        }
    }
}

impl WriteOptions {
    /// no declaration and no whitespace between elements
    pub fn compact() -> Self {
        Self {
            indent: None,
            declaration: false,
        }
    }
}

/// Write the tree rooted at `root` to a file at `path` with the default
/// [`WriteOptions`].
///
/// A failed write may leave a partially written file behind.
pub fn write<P: AsRef<Path>>(root: &Element, path: P) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_to(root, &mut writer, &WriteOptions::default())?;
    writer.flush()?;

    debug!(
        path = %path.display(),
        elements = root.count_elements(),
        "wrote xdmf document"
    );

    Ok(())
}

/// Serialize the tree rooted at `root` to any `Write`r
pub fn write_to<W: Write>(root: &Element, writer: W, options: &WriteOptions) -> Result<(), Error> {
    let mut writer = match options.indent {
        Some(indent) => Writer::new_with_indent(writer, indent.indent_char, indent.size),
        None => Writer::new(writer),
    };

    if options.declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }

    write_element(&mut writer, root)?;

    Ok(())
}

/// Serialize the tree rooted at `root` into a `String`
pub fn to_xml_string(root: &Element, options: &WriteOptions) -> Result<String, Error> {
    let mut output = Vec::new();
    write_to(root, &mut output, options)?;
    Ok(String::from_utf8(output)?)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), Error> {
    let mut start = BytesStart::new(element.tag());
    for attribute in element.attributes() {
        start.push_attribute(attribute);
    }

    // elements without content are written as `<Tag ... />`
    if element.text().is_none() && element.children().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;

    if let Some(text) = element.text() {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }

    for child in element.children() {
        write_element(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new(element.tag())))?;

    Ok(())
}
