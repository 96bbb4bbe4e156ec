use serde::{Deserialize, Serialize};
use std::fmt;

/// 폼에서 사용하는 필드 이름 (닫힌 집합)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Title,
    PaymentMethod,
    CartSubtotal,
    DeliveryOptionName,
    Operation,
    RenameTo,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::Title,
        FieldName::PaymentMethod,
        FieldName::CartSubtotal,
        FieldName::DeliveryOptionName,
        FieldName::Operation,
        FieldName::RenameTo,
    ];

    /// API와 주고받는 camelCase 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Title => "title",
            FieldName::PaymentMethod => "paymentMethod",
            FieldName::CartSubtotal => "cartSubtotal",
            FieldName::DeliveryOptionName => "deliveryOptionName",
            FieldName::Operation => "operation",
            FieldName::RenameTo => "renameTo",
        }
    }

    /// 화면에 표시되는 레이블
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Title => "Title",
            FieldName::PaymentMethod => "Payment method",
            FieldName::CartSubtotal => "Subtotal",
            FieldName::DeliveryOptionName => "Delivery option name",
            FieldName::Operation => "Operation",
            FieldName::RenameTo => "New name",
        }
    }

    pub fn from_str(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 필드 값 검증. 유효하면 `None`, 아니면 사용자에게 보여줄 에러 메시지.
pub fn validate(field: FieldName, raw: &str) -> Option<String> {
    match field {
        FieldName::CartSubtotal => positive_number(field, raw),
        _ => required(field, raw),
    }
}

fn required(field: FieldName, raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        Some(format!("{} is required", field.label()))
    } else {
        None
    }
}

/// 순서대로 검사하고 첫 번째 실패에서 멈춘다: 비어있음 → 숫자 아님 → 0 이하
fn positive_number(field: FieldName, raw: &str) -> Option<String> {
    if let Some(error) = required(field, raw) {
        return Some(error);
    }

    let number = match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => return Some(format!("{} must be a number", field.label())),
    };

    if number <= 0.0 {
        return Some(format!("{} must be greater than 0", field.label()));
    }

    None
}
