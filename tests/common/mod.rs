#![allow(dead_code)]

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use xdmf::Element;

fn start_to_element(start: &BytesStart<'_>) -> Element {
    let tag = String::from_utf8(start.name().as_ref().to_vec()).unwrap();
    let mut element = Element::new(tag);

    for attribute in start.attributes() {
        let attribute = attribute.unwrap();
        let key = String::from_utf8(attribute.key.as_ref().to_vec()).unwrap();
        let value = attribute.unescape_value().unwrap().into_owned();
        element.set_attribute(key, value);
    }

    element
}

/// read a written document back into an element tree so the tests can inspect it
pub fn parse_document(xml: &str) -> Element {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event().unwrap() {
            Event::Start(start) => stack.push(start_to_element(&start)),
            Event::Empty(start) => {
                let element = start_to_element(&start);
                match stack.last_mut() {
                    Some(parent) => parent.append_child(element),
                    None => return element,
                }
            }
            Event::Text(text) => {
                let text = text.unescape().unwrap().into_owned();
                stack.last_mut().unwrap().set_text(text);
            }
            Event::End(_) => {
                let element = stack.pop().unwrap();
                match stack.last_mut() {
                    Some(parent) => parent.append_child(element),
                    None => return element,
                }
            }
            Event::Eof => panic!("document ended before the root element was closed"),
            _ => (),
        }
    }
}

pub fn read_document(path: &std::path::Path) -> Element {
    let xml = std::fs::read_to_string(path).unwrap();
    parse_document(&xml)
}

pub fn child_tags(element: &Element) -> Vec<&str> {
    element.children().iter().map(Element::tag).collect()
}
