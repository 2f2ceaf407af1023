//! Webservice envelope generation (`.ws` files).
//!
//! The downstream connector expects a fixed single-operation SOAP 1.1 request
//! wrapping the business file reference. The template is literal text: no XML
//! escaping is performed, the substituted identifiers and file names are
//! assumed free of markup characters (they are built from configuration
//! values and the dash-separated naming scheme).

const CONNECTOR_NS: &str = "http://dev.cdcfast.fr/connecteur/V20";

/// Build the envelope document referencing `business_file`.
///
/// `routing_user` and `siren` must come from the same resolved organization
/// profile that named the business file.
pub fn build_envelope(
    processing_type: &str,
    routing_user: &str,
    siren: &str,
    business_file: &str,
) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:SOAP-ENC="http://schemas.xmlsoap.org/soap/encoding/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:cascl="{CONNECTOR_NS}"><SOAP-ENV:Body><cascl:traiterACTES><cascl:typeTraitement>{processing_type}</cascl:typeTraitement><cascl:DNUtilisateur>{routing_user}</cascl:DNUtilisateur><cascl:SIREN>{siren}</cascl:SIREN><cascl:fichierACTES>{business_file}</cascl:fichierACTES></cascl:traiterACTES></SOAP-ENV:Body></SOAP-ENV:Envelope>"#
    )
}
