// SPDX-License-Identifier: MPL-2.0
//! Raw markup scan for clickable region ids.
//!
//! Only `<path>` elements carrying a non-empty `id` are regions. `usvg`
//! turns every shape into a path, so the element names have to be read from
//! the source before it is converted.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashSet;

/// Ids of every `<path id="…">` in document order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionIds {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl RegionIds {
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    fn insert(&mut self, id: String) {
        if self.lookup.insert(id.clone()) {
            self.ordered.push(id);
        }
    }
}

/// Scans `markup` and collects region ids.
///
/// # Errors
///
/// Returns [`Error::Svg`] if the document is not well-formed XML or its
/// root element is not `<svg>`.
pub fn scan_region_ids(markup: &[u8]) -> Result<RegionIds> {
    let mut reader = Reader::from_reader(markup);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut ids = RegionIds::default();
    let mut saw_root = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let local_name = e.local_name();
                let name = local_name.as_ref();
                if !saw_root {
                    if name != b"svg" {
                        return Err(Error::Svg(format!(
                            "root element is <{}>, expected <svg>",
                            String::from_utf8_lossy(name)
                        )));
                    }
                    saw_root = true;
                }
                if name == b"path" {
                    if let Some(id) = element_id(e)? {
                        ids.insert(id);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(Error::Svg("document has no root element".into()));
    }
    Ok(ids)
}

fn element_id(element: &BytesStart<'_>) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.local_name().as_ref() == b"id" {
            let value = attr.unescape_value()?;
            let value = value.trim();
            return Ok((!value.is_empty()).then(|| value.to_string()));
        }
    }
    Ok(None)
}
