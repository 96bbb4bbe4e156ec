use crate::api::{
    Customization, CustomizationApi, CustomizationKind, CustomizationPayload, MutationResponse,
    UserError,
};
use crate::error::{CustomizationError, Result};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

const MAX_TITLE_LENGTH: usize = 255;

/// 로컬 커스터마이제이션 저장소
///
/// 호스팅된 API 대신 프로세스 내부에서 요청을 처리합니다.
/// `path`가 있으면 변경이 일어날 때마다 JSON 파일에 저장합니다.
#[derive(Debug)]
pub struct LocalStore {
    items: RwLock<Vec<Customization>>,
    path: Option<PathBuf>,
}

impl LocalStore {
    /// 메모리 전용 저장소
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<Customization>) -> Self {
        Self {
            items: RwLock::new(items),
            path: None,
        }
    }

    /// JSON 파일 기반 저장소 열기 (파일이 없으면 빈 저장소)
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let items = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            Vec::new()
        };

        tracing::debug!(path = %path.display(), count = items.len(), "Opened customization store");

        Ok(Self {
            items: RwLock::new(items),
            path: Some(path),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 디스크에 먼저 쓰고, 성공했을 때만 호출자가 메모리에 반영한다
    async fn persist(&self, items: &[Customization]) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }

        let json = serde_json::to_string_pretty(items)?;
        tokio::fs::write(path, json).await.map_err(|e| {
            CustomizationError::Transport(format!("failed to write {}: {}", path.display(), e))
        })
    }

    /// 서버 측 검증: 제목 길이, 같은 대상에 대한 중복 규칙
    fn check_payload(
        items: &[Customization],
        payload: &CustomizationPayload,
        exclude_id: Option<&str>,
    ) -> Vec<UserError> {
        let mut errors = Vec::new();

        if payload.title.chars().count() > MAX_TITLE_LENGTH {
            errors.push(UserError::new(
                "title",
                format!("Title must be {} characters or fewer", MAX_TITLE_LENGTH),
            ));
        }

        let duplicate = items
            .iter()
            .filter(|c| Some(c.id.as_str()) != exclude_id)
            .any(|c| c.rule.conflicts_with(&payload.rule));

        if duplicate {
            let error = match payload.rule.kind() {
                CustomizationKind::Payment => UserError::new(
                    "paymentMethod",
                    "A customization for this payment method already exists",
                ),
                CustomizationKind::Delivery => UserError::new(
                    "deliveryOptionName",
                    "A customization for this delivery option already exists",
                ),
            };
            errors.push(error);
        }

        errors
    }

    fn next_id(items: &[Customization], kind: CustomizationKind) -> String {
        let next = items
            .iter()
            .filter_map(|c| c.id.rsplit('/').next()?.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        let resource = match kind {
            CustomizationKind::Payment => "PaymentCustomization",
            CustomizationKind::Delivery => "DeliveryCustomization",
        };

        format!("gid://shopify/{}/{}", resource, next)
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomizationApi for LocalStore {
    fn name(&self) -> &str {
        if self.path.is_some() {
            "file"
        } else {
            "memory"
        }
    }

    async fn create(&self, payload: &CustomizationPayload) -> Result<MutationResponse> {
        let mut items = self.items.write().await;

        let user_errors = Self::check_payload(&items, payload, None);
        if !user_errors.is_empty() {
            return Ok(MutationResponse::rejected(user_errors));
        }

        let customization = Customization {
            id: Self::next_id(&items, payload.rule.kind()),
            title: payload.title.clone(),
            function_id: payload.function_id.clone(),
            enabled: true,
            rule: payload.rule.clone(),
            created_at: chrono::Utc::now(),
        };

        let mut next = items.clone();
        next.push(customization.clone());
        self.persist(&next).await?;
        *items = next;

        Ok(MutationResponse::accepted(customization))
    }

    async fn update(&self, id: &str, payload: &CustomizationPayload) -> Result<MutationResponse> {
        let mut items = self.items.write().await;

        if !items.iter().any(|c| c.id == id) {
            return Err(CustomizationError::NotFound(id.to_string()));
        }

        let user_errors = Self::check_payload(&items, payload, Some(id));
        if !user_errors.is_empty() {
            return Ok(MutationResponse::rejected(user_errors));
        }

        let mut next = items.clone();
        let updated = {
            let Some(existing) = next.iter_mut().find(|c| c.id == id) else {
                return Err(CustomizationError::NotFound(id.to_string()));
            };
            existing.title = payload.title.clone();
            existing.function_id = payload.function_id.clone();
            existing.rule = payload.rule.clone();
            existing.clone()
        };

        self.persist(&next).await?;
        *items = next;

        Ok(MutationResponse::accepted(updated))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut items = self.items.write().await;

        let next: Vec<Customization> = items.iter().filter(|c| c.id != id).cloned().collect();
        if next.len() == items.len() {
            return Err(CustomizationError::NotFound(id.to_string()));
        }

        self.persist(&next).await?;
        *items = next;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Customization>> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Customization> {
        self.items
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| CustomizationError::NotFound(id.to_string()))
    }
}
