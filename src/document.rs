//! Business document records and their XML serialization.
//!
//! Produces the namespace-qualified ACTES v1 business document for an act
//! transmission or a cancellation notice. The serialized bytes are transcoded
//! to the configured output encoding (default ISO-8859-1), and the XML
//! declaration carries the same label.

use crate::error::DropError;
use chrono::{DateTime, NaiveDate, Utc};
use encoding_rs::Encoding;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// ACTES schema namespace.
pub const ACTES_NS: &str = "http://www.interieur.gouv.fr/ACTES#v1.1-20040216";

const ELEM_ACT: &str = "actes:DonneesActe";
const ELEM_NATURE_CODE: &str = "actes:CodeNatureActe";
const ELEM_OBJECT: &str = "actes:Objet";
const ELEM_INTERNAL_NUMBER: &str = "actes:NumeroInterne";
const ELEM_CLASSIFICATION: &str = "actes:ClassificationDateVersion";
const ELEM_DATE: &str = "actes:Date";
const ELEM_MATIERE_1: &str = "actes:CodeMatiere1";
const ELEM_MATIERE_2: &str = "actes:CodeMatiere2";
const ELEM_MATIERE_CODE: &str = "actes:CodeMatiere";
const ELEM_DOCUMENT: &str = "actes:Document";
const ELEM_ANNEXES: &str = "actes:Annexes";
const ELEM_ANNEX: &str = "actes:Annexe";
const ELEM_CANCELLATION: &str = "actes:Annulation";
const ELEM_ACT_ID: &str = "actes:IDActe";
const ATTR_FILE_NAME: &str = "NomFichier";
const ATTR_COUNT: &str = "Nombre";
const DATE_CALENDAR: &str = "%Y-%m-%d";

/// One legal act ready for transmission.
///
/// `object_text` is expected to be sanitized already; `main_document` and
/// `annexes` hold the on-disk file names produced by the filename builder,
/// with annex order driving the recorded numbering.
#[derive(Debug, Clone)]
pub struct ActRecord {
    pub nature_code: u32,
    pub object_text: String,
    pub internal_number: String,
    pub classification_date: NaiveDate,
    pub decision_date: DateTime<Utc>,
    pub matiere1: u32,
    pub matiere2: u32,
    pub main_document: String,
    pub annexes: Vec<String>,
}

/// A request to cancel a previously transmitted act.
#[derive(Debug, Clone)]
pub struct CancellationRecord {
    /// Canonical act identifier (no transaction code)
    pub act_id: String,
}

/// Serialize an act record, transcoded to `encoding_label`.
pub fn serialize_act(record: &ActRecord, encoding_label: &str) -> Result<Vec<u8>, DropError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some(encoding_label), None)))?;

    let mut root = BytesStart::new(ELEM_ACT);
    root.push_attribute(("xmlns:actes", ACTES_NS));
    writer.write_event(Event::Start(root))?;

    text_element(&mut writer, ELEM_NATURE_CODE, &record.nature_code.to_string())?;
    text_element(&mut writer, ELEM_OBJECT, &record.object_text)?;
    text_element(&mut writer, ELEM_INTERNAL_NUMBER, &record.internal_number)?;
    text_element(
        &mut writer,
        ELEM_CLASSIFICATION,
        &record.classification_date.format(DATE_CALENDAR).to_string(),
    )?;
    text_element(
        &mut writer,
        ELEM_DATE,
        &record.decision_date.format(DATE_CALENDAR).to_string(),
    )?;

    matiere_element(&mut writer, ELEM_MATIERE_1, record.matiere1)?;
    matiere_element(&mut writer, ELEM_MATIERE_2, record.matiere2)?;

    let mut document = BytesStart::new(ELEM_DOCUMENT);
    document.push_attribute((ATTR_FILE_NAME, record.main_document.as_str()));
    writer.write_event(Event::Empty(document))?;

    let mut annexes = BytesStart::new(ELEM_ANNEXES);
    annexes.push_attribute((ATTR_COUNT, record.annexes.len().to_string().as_str()));
    writer.write_event(Event::Start(annexes))?;
    for annex in &record.annexes {
        let mut elem = BytesStart::new(ELEM_ANNEX);
        elem.push_attribute((ATTR_FILE_NAME, annex.as_str()));
        writer.write_event(Event::Empty(elem))?;
    }
    writer.write_event(Event::End(BytesEnd::new(ELEM_ANNEXES)))?;

    writer.write_event(Event::End(BytesEnd::new(ELEM_ACT)))?;

    encode(&String::from_utf8(writer.into_inner())?, encoding_label)
}

/// Serialize a cancellation record, transcoded to `encoding_label`.
pub fn serialize_cancellation(
    record: &CancellationRecord,
    encoding_label: &str,
) -> Result<Vec<u8>, DropError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some(encoding_label), None)))?;

    let mut root = BytesStart::new(ELEM_CANCELLATION);
    root.push_attribute(("xmlns:actes", ACTES_NS));
    writer.write_event(Event::Start(root))?;
    text_element(&mut writer, ELEM_ACT_ID, &record.act_id)?;
    writer.write_event(Event::End(BytesEnd::new(ELEM_CANCELLATION)))?;

    encode(&String::from_utf8(writer.into_inner())?, encoding_label)
}

fn text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    value: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn matiere_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    code: u32,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    text_element(writer, ELEM_MATIERE_CODE, &code.to_string())?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn encode(xml: &str, encoding_label: &str) -> Result<Vec<u8>, DropError> {
    let encoding = Encoding::for_label(encoding_label.as_bytes())
        .ok_or_else(|| DropError::Encoding(encoding_label.to_string()))?;
    let (bytes, _, _) = encoding.encode(xml);
    Ok(bytes.into_owned())
}
