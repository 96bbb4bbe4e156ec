pub mod factory;
pub mod store;

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use factory::ApiFactory;
pub use store::LocalStore;

/// 서버가 반환하는 도메인 검증 실패 (전송 실패와 구분됨)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    /// 입력 필드 경로 (예: ["paymentMethod"])
    pub field: Vec<String>,
    pub message: String,
}

impl UserError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: vec![field.to_string()],
            message: message.into(),
        }
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.field.join("."), self.message)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomizationKind {
    Payment,
    Delivery,
}

impl CustomizationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomizationKind::Payment => "payment",
            CustomizationKind::Delivery => "delivery",
        }
    }
}

/// 커스터마이제이션 규칙
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all_fields = "camelCase")]
pub enum CustomizationRule {
    /// 장바구니 소계가 기준을 넘으면 결제 수단 숨김
    HidePaymentMethod {
        payment_method: String,
        cart_subtotal: f64,
    },
    /// 이름이 정확히 일치하는 배송 옵션 숨김
    HideDeliveryOption { delivery_option_name: String },
    /// 이름이 정확히 일치하는 배송 옵션 이름 변경
    RenameDeliveryOption {
        delivery_option_name: String,
        rename_to: String,
    },
}

impl CustomizationRule {
    pub fn kind(&self) -> CustomizationKind {
        match self {
            CustomizationRule::HidePaymentMethod { .. } => CustomizationKind::Payment,
            CustomizationRule::HideDeliveryOption { .. }
            | CustomizationRule::RenameDeliveryOption { .. } => CustomizationKind::Delivery,
        }
    }

    /// 목록 테이블에 표시할 한 줄 요약
    pub fn summary(&self) -> String {
        match self {
            CustomizationRule::HidePaymentMethod {
                payment_method,
                cart_subtotal,
            } => format!("Hide {} when subtotal > {}", payment_method, cart_subtotal),
            CustomizationRule::HideDeliveryOption {
                delivery_option_name,
            } => format!("Hide {}", delivery_option_name),
            CustomizationRule::RenameDeliveryOption {
                delivery_option_name,
                rename_to,
            } => format!("Rename {} to {}", delivery_option_name, rename_to),
        }
    }

    /// 같은 대상을 가리키는 규칙인지 (중복 검사용)
    pub fn conflicts_with(&self, other: &CustomizationRule) -> bool {
        match (self, other) {
            (
                CustomizationRule::HidePaymentMethod { payment_method: a, .. },
                CustomizationRule::HidePaymentMethod { payment_method: b, .. },
            ) => a.eq_ignore_ascii_case(b),
            (
                CustomizationRule::HideDeliveryOption { delivery_option_name: a },
                CustomizationRule::HideDeliveryOption { delivery_option_name: b },
            ) => a == b,
            (
                CustomizationRule::RenameDeliveryOption { delivery_option_name: a, .. },
                CustomizationRule::RenameDeliveryOption { delivery_option_name: b, .. },
            ) => a == b,
            _ => false,
        }
    }
}

/// 목록/조회 API가 반환하는 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    pub id: String,
    pub title: String,
    pub function_id: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(flatten)]
    pub rule: CustomizationRule,
    pub created_at: DateTime<Utc>,
}

fn default_enabled() -> bool {
    true
}

/// create/update 요청 본문
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationPayload {
    pub title: String,
    pub function_id: String,
    #[serde(flatten)]
    pub rule: CustomizationRule,
}

/// create/update 응답
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MutationResponse {
    pub user_errors: Vec<UserError>,
    pub customization: Option<Customization>,
}

impl MutationResponse {
    pub fn accepted(customization: Customization) -> Self {
        Self {
            user_errors: Vec::new(),
            customization: Some(customization),
        }
    }

    pub fn rejected(user_errors: Vec<UserError>) -> Self {
        Self {
            user_errors,
            customization: None,
        }
    }
}

/// Customization API collaborator
///
/// `Err`는 전송 실패, `Ok` 응답의 `user_errors`는 서버가 거부한 입력을 뜻한다.
#[async_trait]
pub trait CustomizationApi: Send + Sync {
    /// Backend name (e.g., "memory", "file")
    fn name(&self) -> &str;

    async fn create(&self, payload: &CustomizationPayload) -> Result<MutationResponse>;

    async fn update(&self, id: &str, payload: &CustomizationPayload) -> Result<MutationResponse>;

    async fn delete(&self, id: &str) -> Result<()>;

    async fn list(&self) -> Result<Vec<Customization>>;

    async fn get(&self, id: &str) -> Result<Customization>;
}
