//! Values the builder substitutes for omitted fields.
//!
//! Every emission site asks [`CommandDefaults`] instead of hard-coding a
//! literal, so the whole defaulting policy can be read in this file.

use serde::{Deserialize, Serialize};

pub const OPERATOR: u32 = 1;
pub const DEPARTMENT: u32 = 1;
pub const JUSTIFICATION: u32 = 1;
pub const DESCRIPTION: &str = "";

pub const REFUND_AMOUNT: f64 = 0.0;
pub const REFUND_QUANTITY: f64 = 1.0;
pub const REFUND_UNIT_PRICE: f64 = 0.0;

pub const PAYMENT_AMOUNT: f64 = 0.0;
pub const PAYMENT_INDEX: u32 = 1;

pub const BARCODE_POSITION: u32 = 900;
pub const BARCODE_WIDTH: u32 = 1;
pub const BARCODE_HEIGHT: u32 = 1;
pub const BARCODE_HRI_POSITION: u32 = 0;
pub const BARCODE_HRI_FONT: &str = "A";
pub const CODE_TYPE: &str = "CODE128";
pub const CODE_DATA: &str = "";

pub const QR_ALIGNMENT: u32 = 0;
pub const QR_SIZE: u32 = 1;
pub const QR_ERROR_CORRECTION: u32 = 0;

pub const GRAPHIC_FORMAT: &str = "B";

/// Milliseconds the device may spend on a Z report.
pub const Z_REPORT_TIMEOUT: u64 = 6000;
/// Milliseconds the device may spend on an X report followed by a Z report.
pub const XZ_REPORT_TIMEOUT: u64 = 12000;

/// `messageType` of the free-text line that references a cancelled document.
pub const CANCEL_MESSAGE_TYPE: &str = "4";

/// Identity fields that a job may pin to a different cashier or department.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandDefaults {
    pub operator: u32,
    pub department: u32,
    pub justification: u32,
}

impl CommandDefaults {
    pub const STANDARD: CommandDefaults = CommandDefaults {
        operator: OPERATOR,
        department: DEPARTMENT,
        justification: JUSTIFICATION,
    };

    pub fn operator(&self, value: Option<u32>) -> u32 {
        value.unwrap_or(self.operator)
    }

    pub fn department(&self, value: Option<u32>) -> u32 {
        value.unwrap_or(self.department)
    }

    pub fn justification(&self, value: Option<u32>) -> u32 {
        value.unwrap_or(self.justification)
    }

    pub fn description<'a>(&self, value: Option<&'a str>) -> &'a str {
        value.unwrap_or(DESCRIPTION)
    }
}

impl Default for CommandDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}
