//! Feeds quick-xml events into a conversion session.

use crate::attributes::Attributes;
use crate::entities;
use crate::environment::XhtmlEnvironment;
use crate::error::ConvertError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parses `xml` and drives `env` with its events.
///
/// `offset` is the length of any prefix the caller added to the input;
/// reported positions are relative to the caller's own text.
pub(crate) fn parse(
    xml: &str,
    offset: u64,
    env: &mut XhtmlEnvironment<'_>,
) -> Result<(), ConvertError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);
    let mut entity = String::with_capacity(16);

    loop {
        let position = reader.buffer_position().saturating_sub(offset);
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let (name, attributes) = read_start(&reader, &e, position)?;
                env.on_start(&name, &attributes)?;
            }
            Ok(Event::Empty(e)) => {
                let (name, attributes) = read_start(&reader, &e, position)?;
                env.on_start(&name, &attributes)?;
                env.on_end(&name)?;
            }
            Ok(Event::End(e)) => {
                let qname = e.name();
                let name = reader.decoder().decode(qname.as_ref())?;
                env.on_end(&name)?;
            }
            Ok(Event::Text(e)) => {
                let text = reader.decoder().decode(&e)?;
                env.on_characters(&text);
            }
            Ok(Event::CData(e)) => {
                let text = reader.decoder().decode(&e)?;
                env.on_characters(&text);
            }
            Ok(Event::GeneralRef(e)) => {
                entity.clear();
                entity.push('&');
                entity.push_str(&e.decode()?);
                entity.push(';');
                let value = entities::unescape(&entity)
                    .map_err(|err| ConvertError::from_escape(err, position))?;
                env.on_characters(&value);
            }
            Ok(Event::Eof) => break,
            // Declarations, comments and processing instructions carry no content.
            Ok(_) => {}
            Err(source) => {
                return Err(ConvertError::Xml {
                    source,
                    position: reader.error_position().saturating_sub(offset),
                });
            }
        }
    }
    Ok(())
}

fn read_start(
    reader: &Reader<&[u8]>,
    e: &BytesStart<'_>,
    position: u64,
) -> Result<(String, Attributes), ConvertError> {
    let decoder = reader.decoder();
    let qname = e.name();
    let name = decoder.decode(qname.as_ref())?.into_owned();
    let mut attributes = Attributes::new();
    for attr in e.html_attributes() {
        let attr = attr?;
        let key = decoder.decode(attr.key.as_ref())?;
        let raw = decoder.decode(&attr.value)?;
        let value = entities::unescape(&raw)
            .map_err(|err| ConvertError::from_escape(err, position))?;
        attributes.push(&key, value.into_owned());
    }
    Ok((name, attributes))
}
