//! Marker interchange XML parsing.
//!
//! The editor's XML marker export stores each marker as an attribute
//! class whose list entries pair a key with a string or int value:
//!
//! ```xml
//! <AvClass id="ATTR">
//!   <List>
//!     <ListElem>
//!       <AvProp id="ATTR" name="OMFI:ATTB:Name" type="string">_ATN_CRM_COM</AvProp>
//!       <AvProp id="ATTR" name="OMFI:ATTB:StringAttribute" type="string">ABC0010</AvProp>
//!     </ListElem>
//!     <ListElem>
//!       <AvProp id="ATTR" name="OMFI:ATTB:Name" type="string">_ATN_CRM_TC</AvProp>
//!       <AvProp id="ATTR" name="OMFI:ATTB:StringAttribute" type="string">01:00:00:00</AvProp>
//!     </ListElem>
//!   </List>
//! </AvClass>
//! ```
//!
//! Only classes carrying at least one `_ATN_CRM_` key are markers; the
//! wrapper classes around them are skipped.

use std::collections::HashMap;

use super::error::{FieldError, MarkerError, MarkerResult};
use super::types::{parse_duration, Marker, MarkerColor, DEFAULT_MARKER_NAME};
use crate::timecode::{FrameRate, Timecode};

const KEY_PREFIX: &str = "_ATN_CRM_";
const KEY_NAME: &str = "_ATN_CRM_NAME";
const KEY_TIMECODE: &str = "_ATN_CRM_TC";
const KEY_TRACK: &str = "_ATN_CRM_TRK";
const KEY_COLOR: &str = "_ATN_CRM_COLOR";
const KEY_COLOR_EXTENDED: &str = "_ATN_CRM_COLOR_EXTENDED";
const KEY_COMMENT: &str = "_ATN_CRM_COM";
const KEY_LENGTH: &str = "_ATN_CRM_LENGTH";
const KEY_USER: &str = "_ATN_CRM_USER";

const DEFAULT_TRACK: &str = "V1";
const DEFAULT_COLOR: MarkerColor = MarkerColor::Red;

/// Parse every marker in an interchange document, in document order.
pub fn parse_marker_xml(xml: &str, rate: FrameRate) -> MarkerResult<Vec<Marker>> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| MarkerError::MalformedXml(format!("XML parse error: {}", e)))?;

    let mut markers = Vec::new();

    for class in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "AvClass")
    {
        let properties = marker_properties(&class);
        if properties.is_empty() {
            continue;
        }

        let line = doc.text_pos_at(class.range().start).row as usize;
        let marker = marker_from_properties(&properties, rate)
            .map_err(|source| MarkerError::format(line, source))?;
        markers.push(marker);
    }

    Ok(markers)
}

/// Collect the `_ATN_CRM_*` key/value pairs directly owned by a class.
fn marker_properties<'a>(class: &roxmltree::Node<'a, '_>) -> HashMap<&'a str, &'a str> {
    let mut properties = HashMap::new();

    let entries = class
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "List")
        .flat_map(|list| list.children())
        .filter(|n| n.is_element() && n.tag_name().name() == "ListElem");

    for entry in entries {
        let mut key = None;
        let mut value = None;

        for prop in entry
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "AvProp")
        {
            match prop.attribute("name") {
                Some("OMFI:ATTB:Name") => key = prop.text().map(str::trim),
                Some(name) if name.ends_with("Attribute") => {
                    value = Some(prop.text().map(str::trim).unwrap_or(""));
                }
                _ => {}
            }
        }

        if let (Some(key), Some(value)) = (key, value) {
            if key.starts_with(KEY_PREFIX) {
                properties.insert(key, value);
            }
        }
    }

    properties
}

fn marker_from_properties(
    properties: &HashMap<&str, &str>,
    rate: FrameRate,
) -> Result<Marker, FieldError> {
    let timecode = properties
        .get(KEY_TIMECODE)
        .ok_or(FieldError::MissingTimecode)?;
    let start = Timecode::parse(timecode, rate)?;

    let color = match properties
        .get(KEY_COLOR_EXTENDED)
        .filter(|value| !value.is_empty())
        .or_else(|| properties.get(KEY_COLOR))
    {
        Some(value) => value.to_lowercase().parse::<MarkerColor>()?,
        None => DEFAULT_COLOR,
    };

    let duration = match properties.get(KEY_LENGTH) {
        Some(value) => parse_duration(value)?,
        None => 1,
    };

    let lookup = |key: &str, default: &'static str| properties.get(key).copied().unwrap_or(default);

    Marker::new(
        lookup(KEY_NAME, DEFAULT_MARKER_NAME),
        start,
        lookup(KEY_TRACK, DEFAULT_TRACK),
        color,
        lookup(KEY_COMMENT, ""),
    )
    .with_duration(duration)
    .map(|marker| marker.with_user(lookup(KEY_USER, "")))
}
