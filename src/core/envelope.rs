//! SOAP-style envelope around FpMate documents.
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
//!     <s:Body>
//!         <printerFiscalReceipt>...</printerFiscalReceipt>
//!     </s:Body>
//! </s:Envelope>
//! ```
//!
//! The device answers with the same nesting and a `response` element inside
//! the body.

use crate::core::xml::{self, Element};
use crate::utils::error::{FpMateError, Result};
use serde_json::Value;

pub const ENVELOPE: &str = "s:Envelope";
pub const BODY: &str = "s:Body";
pub const RESPONSE: &str = "response";
pub const SOAP_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

pub fn wrap(document: Element) -> Result<String> {
    let mut body = Element::new(BODY);
    body.push(document);

    let mut envelope = Element::new(ENVELOPE).attr("xmlns:s", SOAP_NAMESPACE);
    envelope.push(body);

    xml::render_document(&envelope)
}

/// Returns the `response` element of a device answer.
pub fn unwrap(text: &str) -> Result<Value> {
    let mut tree = xml::parse_tree(text)?;

    let mut node = &mut tree;
    for name in [ENVELOPE, BODY, RESPONSE] {
        node = node
            .get_mut(name)
            .ok_or_else(|| FpMateError::malformed(format!("missing <{}> element", name)))?;
    }

    match node.take() {
        response @ Value::Object(_) => Ok(response),
        // <response/> with no attributes decodes to ""
        Value::String(_) => Ok(Value::Object(Default::default())),
        _ => Err(FpMateError::malformed("more than one <response> element")),
    }
}
