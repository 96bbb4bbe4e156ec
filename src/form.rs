use crate::api::{Customization, CustomizationPayload, CustomizationRule};
use crate::error::{CustomizationError, Result};
use crate::navigation::{HOME_PATH, PAYMENT_CUSTOMIZATIONS_PATH, SHIPPING_CUSTOMIZATIONS_PATH};
use crate::validation::{validate, FieldName};
use std::collections::BTreeMap;

/// 폼 종류. 종류마다 필드 목록과 검증 규칙이 정적으로 정해진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// 결제 수단 숨김 (생성/편집)
    Payment,
    /// 배송 옵션 숨김
    HideDelivery,
    /// 배송 옵션 이름 변경
    RenameDelivery,
}

impl FormKind {
    pub fn fields(&self) -> &'static [FieldName] {
        match self {
            FormKind::Payment => &[FieldName::PaymentMethod, FieldName::CartSubtotal],
            FormKind::HideDelivery => &[
                FieldName::Title,
                FieldName::DeliveryOptionName,
                FieldName::Operation,
            ],
            FormKind::RenameDelivery => &[
                FieldName::Title,
                FieldName::DeliveryOptionName,
                FieldName::RenameTo,
            ],
        }
    }

    /// 페이지 마운트 시 값 (baseline)
    fn initial_values(&self) -> &'static [(FieldName, &'static str)] {
        match self {
            FormKind::Payment => &[],
            FormKind::HideDelivery => &[(FieldName::Title, "Hide")],
            FormKind::RenameDelivery => &[(FieldName::Title, "Rename")],
        }
    }

    /// 첫 마운트 직후 한 번만 채우는 기본값
    fn defaults(&self) -> &'static [(FieldName, &'static str)] {
        match self {
            FormKind::HideDelivery => &[
                (FieldName::DeliveryOptionName, "Express"),
                (FieldName::Operation, "Hide"),
            ],
            _ => &[],
        }
    }

    pub fn page_title(&self) -> &'static str {
        match self {
            FormKind::Payment => "Payment customization",
            FormKind::HideDelivery => "Hide Delivery Option",
            FormKind::RenameDelivery => "Rename delivery option",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            FormKind::Payment => {
                "Hide a payment method when the cart subtotal is above the given amount."
            }
            FormKind::HideDelivery => {
                "Any delivery option matching this name exactly will be hidden."
            }
            FormKind::RenameDelivery => {
                "Any delivery option matching this name exactly will be renamed."
            }
        }
    }

    /// 저장 성공 후 이동할 경로
    pub fn destination(&self) -> &'static str {
        match self {
            FormKind::Payment => PAYMENT_CUSTOMIZATIONS_PATH,
            FormKind::HideDelivery => HOME_PATH,
            FormKind::RenameDelivery => SHIPPING_CUSTOMIZATIONS_PATH,
        }
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.fields().contains(&field)
    }
}

/// 단일 필드 상태. `error`는 마지막 검증이 실패했을 때만 `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    pub value: String,
    pub error: Option<String>,
}

pub type FormData = BTreeMap<FieldName, FormField>;

/// 페이지 하나의 폼 상태
#[derive(Debug, Clone)]
pub struct FormState {
    kind: FormKind,
    function_id: String,
    fields: FormData,
    baseline: BTreeMap<FieldName, String>,
    dirty: bool,
    defaults_applied: bool,
}

impl FormState {
    /// "new" 페이지용 폼
    pub fn new(kind: FormKind, function_id: impl Into<String>) -> Self {
        let mut fields: FormData = kind
            .fields()
            .iter()
            .map(|f| (*f, FormField::default()))
            .collect();

        for (name, value) in kind.initial_values() {
            if let Some(field) = fields.get_mut(name) {
                field.value = value.to_string();
            }
        }

        let baseline = Self::values_of(&fields);

        Self {
            kind,
            function_id: function_id.into(),
            fields,
            baseline,
            dirty: false,
            defaults_applied: false,
        }
    }

    /// "edit" 페이지용 폼: 불러온 값이 baseline이 된다
    pub fn with_values<I>(kind: FormKind, function_id: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (FieldName, String)>,
    {
        let mut form = Self::new(kind, function_id);

        for (name, value) in values {
            let field = form.field_mut(name)?;
            field.value = value;
        }

        form.baseline = Self::values_of(&form.fields);
        // 불러온 값은 편집 없이도 기본값 적용 대상이 아니다
        form.defaults_applied = true;

        Ok(form)
    }

    /// 서버에서 가져온 커스터마이제이션으로 편집 폼 구성
    pub fn from_customization(customization: &Customization) -> Result<Self> {
        let (kind, values) = match &customization.rule {
            CustomizationRule::HidePaymentMethod {
                payment_method,
                cart_subtotal,
            } => (
                FormKind::Payment,
                vec![
                    (FieldName::PaymentMethod, payment_method.clone()),
                    (FieldName::CartSubtotal, cart_subtotal.to_string()),
                ],
            ),
            CustomizationRule::HideDeliveryOption {
                delivery_option_name,
            } => (
                FormKind::HideDelivery,
                vec![
                    (FieldName::Title, customization.title.clone()),
                    (FieldName::DeliveryOptionName, delivery_option_name.clone()),
                    (FieldName::Operation, "Hide".to_string()),
                ],
            ),
            CustomizationRule::RenameDeliveryOption {
                delivery_option_name,
                rename_to,
            } => (
                FormKind::RenameDelivery,
                vec![
                    (FieldName::Title, customization.title.clone()),
                    (FieldName::DeliveryOptionName, delivery_option_name.clone()),
                    (FieldName::RenameTo, rename_to.clone()),
                ],
            ),
        };

        Self::with_values(kind, customization.function_id.clone(), values)
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn function_id(&self) -> &str {
        &self.function_id
    }

    /// 종류별 기본값을 한 번만 채운다. dirty로 표시하지 않는다.
    ///
    /// 사용자가 이미 편집했거나 이미 적용된 경우 `false`.
    pub fn apply_defaults(&mut self) -> bool {
        if self.defaults_applied || self.dirty {
            return false;
        }

        for (name, value) in self.kind.defaults() {
            if let Some(field) = self.fields.get_mut(name) {
                field.value = value.to_string();
                field.error = None;
            }
        }

        self.baseline = Self::values_of(&self.fields);
        self.defaults_applied = true;
        true
    }

    /// 값 변경 + 해당 필드만 재검증
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) -> Result<()> {
        let field = self.field_mut(name)?;
        field.value = value.into();
        field.error = validate(name, &field.value);
        self.dirty = true;
        Ok(())
    }

    /// 모든 필드 검증. 에러가 없으면 `true`.
    pub fn validate_all(&mut self) -> bool {
        for (name, field) in self.fields.iter_mut() {
            field.error = validate(*name, &field.value);
        }
        self.fields.values().all(|f| f.error.is_none())
    }

    pub fn value(&self, name: FieldName) -> Option<&str> {
        self.fields.get(&name).map(|f| f.value.as_str())
    }

    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.fields.get(&name).and_then(|f| f.error.as_deref())
    }

    /// 필드 에러 목록 (폼 순서)
    pub fn errors(&self) -> Vec<(FieldName, &str)> {
        self.fields
            .iter()
            .filter_map(|(name, f)| f.error.as_deref().map(|e| (*name, e)))
            .collect()
    }

    pub fn snapshot(&self) -> FormData {
        self.fields.clone()
    }

    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|(name, f)| f.error.is_none() && validate(*name, &f.value).is_none())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// 불러온 baseline과 값이 다른지
    pub fn has_changed(&self) -> bool {
        self.fields
            .iter()
            .any(|(name, f)| {
                self.baseline.get(name).map(String::as_str) != Some(f.value.as_str())
            })
    }

    /// 저장 성공 후 호출: dirty 해제, 현재 값을 새 baseline으로
    pub fn mark_clean(&mut self) {
        self.dirty = false;
        self.baseline = Self::values_of(&self.fields);
    }

    /// 현재 값으로 API 요청 본문 생성
    pub fn payload(&self) -> Result<CustomizationPayload> {
        let text = |name: FieldName| self.value(name).unwrap_or_default().trim().to_string();

        let (title, rule) = match self.kind {
            FormKind::Payment => {
                let payment_method = text(FieldName::PaymentMethod);
                let raw = text(FieldName::CartSubtotal);
                let cart_subtotal = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| {
                        CustomizationError::InvalidForm(format!(
                            "cartSubtotal '{}' is not a number",
                            raw
                        ))
                    })?;
                let title = format!(
                    "Hide {} if cart subtotal > {}",
                    payment_method, cart_subtotal
                );
                (
                    title,
                    CustomizationRule::HidePaymentMethod {
                        payment_method,
                        cart_subtotal,
                    },
                )
            }
            FormKind::HideDelivery => {
                let operation = text(FieldName::Operation);
                if operation != "Hide" {
                    return Err(CustomizationError::InvalidForm(format!(
                        "unsupported operation '{}'",
                        operation
                    )));
                }
                (
                    text(FieldName::Title),
                    CustomizationRule::HideDeliveryOption {
                        delivery_option_name: text(FieldName::DeliveryOptionName),
                    },
                )
            }
            FormKind::RenameDelivery => (
                text(FieldName::Title),
                CustomizationRule::RenameDeliveryOption {
                    delivery_option_name: text(FieldName::DeliveryOptionName),
                    rename_to: text(FieldName::RenameTo),
                },
            ),
        };

        Ok(CustomizationPayload {
            title,
            function_id: self.function_id.clone(),
            rule,
        })
    }

    fn field_mut(&mut self, name: FieldName) -> Result<&mut FormField> {
        let kind = self.kind;
        self.fields
            .get_mut(&name)
            .ok_or_else(|| CustomizationError::UnknownField {
                field: name.to_string(),
                form: kind.page_title().to_string(),
            })
    }

    fn values_of(fields: &FormData) -> BTreeMap<FieldName, String> {
        fields
            .iter()
            .map(|(name, f)| (*name, f.value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_validates_only_that_field() {
        let mut form = FormState::new(FormKind::Payment, "fn");

        form.set_field(FieldName::CartSubtotal, "abc").unwrap();

        assert_eq!(
            form.error(FieldName::CartSubtotal),
            Some("Subtotal must be a number")
        );
        // 아직 건드리지 않은 필드는 에러 표시 없음
        assert_eq!(form.error(FieldName::PaymentMethod), None);
        assert!(form.is_dirty());
        assert!(!form.is_valid());
    }

    #[test]
    fn test_is_valid_requires_non_empty_required_fields() {
        let mut form = FormState::new(FormKind::Payment, "fn");
        assert!(!form.is_valid());

        form.set_field(FieldName::PaymentMethod, "Cash").unwrap();
        assert!(!form.is_valid());

        form.set_field(FieldName::CartSubtotal, "10").unwrap();
        assert!(form.is_valid());

        form.set_field(FieldName::CartSubtotal, "0").unwrap();
        assert!(!form.is_valid());
    }

    #[test]
    fn test_validate_all_surfaces_errors() {
        let mut form = FormState::new(FormKind::Payment, "fn");
        assert!(!form.validate_all());
        assert_eq!(form.errors().len(), 2);
        assert_eq!(form.error(FieldName::PaymentMethod), Some("Payment method is required"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut form = FormState::new(FormKind::Payment, "fn");
        let result = form.set_field(FieldName::RenameTo, "x");
        assert!(matches!(result, Err(CustomizationError::UnknownField { .. })));
    }

    #[test]
    fn test_defaults_apply_once_without_dirty() {
        let mut form = FormState::new(FormKind::HideDelivery, "fn");

        assert!(form.apply_defaults());
        assert_eq!(form.value(FieldName::DeliveryOptionName), Some("Express"));
        assert_eq!(form.value(FieldName::Operation), Some("Hide"));
        assert!(!form.is_dirty());
        assert!(!form.has_changed());

        form.set_field(FieldName::DeliveryOptionName, "Standard").unwrap();
        assert!(!form.apply_defaults());
        assert_eq!(form.value(FieldName::DeliveryOptionName), Some("Standard"));
    }

    #[test]
    fn test_defaults_skipped_after_user_edit() {
        let mut form = FormState::new(FormKind::HideDelivery, "fn");
        form.set_field(FieldName::DeliveryOptionName, "Pickup").unwrap();

        assert!(!form.apply_defaults());
        assert_eq!(form.value(FieldName::DeliveryOptionName), Some("Pickup"));
    }

    #[test]
    fn test_has_changed_and_mark_clean() {
        let mut form = FormState::new(FormKind::RenameDelivery, "fn");
        assert_eq!(form.value(FieldName::Title), Some("Rename"));
        assert!(!form.has_changed());

        form.set_field(FieldName::RenameTo, "Fast").unwrap();
        assert!(form.has_changed());

        form.mark_clean();
        assert!(!form.is_dirty());
        assert!(!form.has_changed());
    }

    #[test]
    fn test_payment_payload() {
        let mut form = FormState::new(FormKind::Payment, "payment-fn");
        form.set_field(FieldName::PaymentMethod, " Cash ").unwrap();
        form.set_field(FieldName::CartSubtotal, "25").unwrap();

        let payload = form.payload().unwrap();
        assert_eq!(payload.function_id, "payment-fn");
        assert_eq!(
            payload.rule,
            CustomizationRule::HidePaymentMethod {
                payment_method: "Cash".to_string(),
                cart_subtotal: 25.0,
            }
        );
    }

    #[test]
    fn test_infinite_subtotal_is_invalid() {
        let mut form = FormState::new(FormKind::Payment, "payment-fn");
        form.set_field(FieldName::PaymentMethod, "Cash").unwrap();
        form.set_field(FieldName::CartSubtotal, "inf").unwrap();

        assert!(!form.is_valid());
        assert!(matches!(
            form.payload(),
            Err(CustomizationError::InvalidForm(_))
        ));
    }

    #[test]
    fn test_from_customization_round_trip() {
        let customization = Customization {
            id: "gid://shopify/DeliveryCustomization/1".to_string(),
            title: "Rename express".to_string(),
            function_id: "delivery-fn".to_string(),
            enabled: true,
            rule: CustomizationRule::RenameDeliveryOption {
                delivery_option_name: "Express".to_string(),
                rename_to: "Fast".to_string(),
            },
            created_at: chrono::Utc::now(),
        };

        let form = FormState::from_customization(&customization).unwrap();
        assert_eq!(form.kind(), FormKind::RenameDelivery);
        assert!(!form.has_changed());
        assert!(form.is_valid());
        assert_eq!(form.payload().unwrap().rule, customization.rule);
    }
}
