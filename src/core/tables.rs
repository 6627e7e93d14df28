//! Domain adjustment kinds to vendor numeric codes.
//!
//! The same kind maps to a different wire code depending on where it is
//! emitted, so each context gets its own code type. Kinds the context does
//! not support fall back to a fixed code instead of failing:
//!
//! | context  | attribute        | fallback |
//! |----------|------------------|----------|
//! | sale     | `adjustmentType` | 0        |
//! | subtotal | `adjustmentType` | 1        |
//! | refund   | `operationType`  | 10       |

use crate::domain::model::AdjustmentKind;
use std::fmt;

/// `adjustmentType` of `printRecItemAdjustment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleAdjustmentType(u8);

/// `adjustmentType` of `printRecSubtotalAdjustment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtotalAdjustmentType(u8);

/// `operationType` of an amount-based `printRecRefund`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefundOperationType(u8);

impl From<AdjustmentKind> for SaleAdjustmentType {
    fn from(kind: AdjustmentKind) -> Self {
        use AdjustmentKind::*;
        Self(match kind {
            DiscountSale => 0,
            DiscountDepartment => 3,
            SurchargeSale => 5,
            SurchargeDepartment => 8,
            Deposit => 10,
            FreeOfCharge => 11,
            SingleUseVoucher => 12,
            DiscountSubtotalPrint
            | DiscountSubtotalNotPrint
            | SurchargeSubtotalPrint
            | SurchargeSubtotalNotPrint => 0,
        })
    }
}

impl From<AdjustmentKind> for SubtotalAdjustmentType {
    fn from(kind: AdjustmentKind) -> Self {
        use AdjustmentKind::*;
        Self(match kind {
            DiscountSubtotalPrint => 1,
            DiscountSubtotalNotPrint => 2,
            SurchargeSubtotalPrint => 6,
            SurchargeSubtotalNotPrint => 7,
            DiscountSale | DiscountDepartment | SurchargeSale | SurchargeDepartment | Deposit
            | FreeOfCharge | SingleUseVoucher => 1,
        })
    }
}

impl From<AdjustmentKind> for RefundOperationType {
    fn from(kind: AdjustmentKind) -> Self {
        use AdjustmentKind::*;
        Self(match kind {
            Deposit => 10,
            FreeOfCharge => 11,
            SingleUseVoucher => 12,
            DiscountSale
            | DiscountDepartment
            | DiscountSubtotalPrint
            | DiscountSubtotalNotPrint
            | SurchargeSale
            | SurchargeDepartment
            | SurchargeSubtotalPrint
            | SurchargeSubtotalNotPrint => 10,
        })
    }
}

macro_rules! wire_code {
    ($($ty:ty),*) => {$(
        impl $ty {
            pub fn value(self) -> u8 {
                self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    )*};
}

wire_code!(SaleAdjustmentType, SubtotalAdjustmentType, RefundOperationType);

pub fn adjustment_code_for_sale(kind: AdjustmentKind) -> u8 {
    SaleAdjustmentType::from(kind).value()
}

pub fn adjustment_code_for_subtotal(kind: AdjustmentKind) -> u8 {
    SubtotalAdjustmentType::from(kind).value()
}

pub fn refund_operation_code(kind: AdjustmentKind) -> u8 {
    RefundOperationType::from(kind).value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use AdjustmentKind::*;

    #[test]
    fn test_sale_table() {
        let expected = [
            (DiscountSale, 0),
            (DiscountDepartment, 3),
            (DiscountSubtotalPrint, 0),
            (DiscountSubtotalNotPrint, 0),
            (SurchargeSale, 5),
            (SurchargeDepartment, 8),
            (SurchargeSubtotalPrint, 0),
            (SurchargeSubtotalNotPrint, 0),
            (Deposit, 10),
            (FreeOfCharge, 11),
            (SingleUseVoucher, 12),
        ];
        for (kind, code) in expected {
            assert_eq!(adjustment_code_for_sale(kind), code, "{:?}", kind);
        }
    }

    #[test]
    fn test_subtotal_table() {
        let expected = [
            (DiscountSale, 1),
            (DiscountDepartment, 1),
            (DiscountSubtotalPrint, 1),
            (DiscountSubtotalNotPrint, 2),
            (SurchargeSale, 1),
            (SurchargeDepartment, 1),
            (SurchargeSubtotalPrint, 6),
            (SurchargeSubtotalNotPrint, 7),
            (Deposit, 1),
            (FreeOfCharge, 1),
            (SingleUseVoucher, 1),
        ];
        for (kind, code) in expected {
            assert_eq!(adjustment_code_for_subtotal(kind), code, "{:?}", kind);
        }
    }

    #[test]
    fn test_refund_table_falls_back_to_generic_refund() {
        assert_eq!(refund_operation_code(Deposit), 10);
        assert_eq!(refund_operation_code(FreeOfCharge), 11);
        assert_eq!(refund_operation_code(SingleUseVoucher), 12);
        for kind in AdjustmentKind::ALL.into_iter().take(8) {
            assert_eq!(refund_operation_code(kind), 10, "{:?}", kind);
        }
    }

    #[test]
    fn test_codes_render_as_plain_integers() {
        assert_eq!(SaleAdjustmentType::from(SurchargeDepartment).to_string(), "8");
        assert_eq!(SubtotalAdjustmentType::from(SurchargeSubtotalNotPrint).to_string(), "7");
        assert_eq!(RefundOperationType::from(SingleUseVoucher).to_string(), "12");
    }
}
