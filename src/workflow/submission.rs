use crate::api::{CustomizationApi, UserError};
use crate::form::{FormKind, FormState};
use crate::navigation::Navigator;
use crate::view::{BannerStatus, ErrorBanner};
use crate::workflow::mutations::{MutationKey, MutationTracker};
use std::sync::Arc;

/// 전송 실패 시 사용자에게 보여주는 고정 메시지 (원인은 로그로만 남긴다)
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// 제출 한 번의 결과. 제출마다 정확히 하나가 만들어진다.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// 저장 성공, 목적지로 이동함
    Success,
    /// 서버가 입력을 거부함. 폼은 계속 편집 가능
    UserErrors(Vec<UserError>),
    /// 네트워크/예상치 못한 실패
    TransportFailure(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }

    /// 페이지 상단에 표시할 배너 (성공이면 없음)
    pub fn banner(&self) -> Option<ErrorBanner> {
        match self {
            SubmissionOutcome::Success => None,
            SubmissionOutcome::UserErrors(errors) => Some(ErrorBanner {
                status: BannerStatus::Warning,
                title: user_error_banner_title(errors).to_string(),
                errors: errors.iter().map(|e| e.message.clone()).collect(),
            }),
            SubmissionOutcome::TransportFailure(message) => Some(ErrorBanner {
                status: BannerStatus::Critical,
                title: message.clone(),
                errors: Vec::new(),
            }),
        }
    }
}

/// 에러가 정확히 하나면 단수형, 아니면 복수형
pub fn user_error_banner_title(errors: &[UserError]) -> &'static str {
    if errors.len() == 1 {
        "There was an error saving this customization"
    } else {
        "There were errors saving this customization"
    }
}

/// `submit`/`delete` 호출 결과
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// 로컬 검증 실패. API를 호출하지 않았다
    Invalid,
    /// 이미 진행 중인 요청이 있어 무시됨
    InFlight,
    Finished(SubmissionOutcome),
}

impl SubmitAttempt {
    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        match self {
            SubmitAttempt::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome().is_some_and(SubmissionOutcome::is_success)
    }
}

/// 저장 대상: 새로 만들기 또는 기존 항목 수정
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(String),
}

/// 검증 → API 호출 → 결과 해석 → 이동/배너 결정
pub struct SubmissionWorkflow {
    api: Arc<dyn CustomizationApi>,
    navigator: Arc<dyn Navigator>,
    mutations: MutationTracker,
    target: SubmitTarget,
    destination: String,
}

impl SubmissionWorkflow {
    /// "new" 페이지용
    pub fn new(
        api: Arc<dyn CustomizationApi>,
        navigator: Arc<dyn Navigator>,
        kind: FormKind,
    ) -> Self {
        Self {
            api,
            navigator,
            mutations: MutationTracker::new(),
            target: SubmitTarget::Create,
            destination: kind.destination().to_string(),
        }
    }

    /// "edit" 페이지용
    pub fn for_update(
        api: Arc<dyn CustomizationApi>,
        navigator: Arc<dyn Navigator>,
        kind: FormKind,
        id: impl Into<String>,
    ) -> Self {
        Self {
            target: SubmitTarget::Update(id.into()),
            ..Self::new(api, navigator, kind)
        }
    }

    /// 다른 페이지와 진행 중 요청 집합을 공유
    pub fn with_tracker(mut self, tracker: MutationTracker) -> Self {
        self.mutations = tracker;
        self
    }

    pub fn with_destination(mut self, path: impl Into<String>) -> Self {
        self.destination = path.into();
        self
    }

    pub fn target(&self) -> &SubmitTarget {
        &self.target
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn tracker(&self) -> &MutationTracker {
        &self.mutations
    }

    pub fn is_submitting(&self) -> bool {
        self.mutations.is_mutating_key(&self.mutation_key())
    }

    pub fn is_deleting(&self) -> bool {
        self.mutations.any_deleting()
    }

    fn mutation_key(&self) -> MutationKey {
        match &self.target {
            SubmitTarget::Create => MutationKey::Create,
            SubmitTarget::Update(id) => MutationKey::Update(id.clone()),
        }
    }

    pub async fn submit(&self, form: &FormState) -> SubmitAttempt {
        if !form.is_valid() {
            tracing::debug!(errors = ?form.errors(), "Form invalid, not submitting");
            return SubmitAttempt::Invalid;
        }

        let conflicting = match &self.target {
            SubmitTarget::Create => Vec::new(),
            SubmitTarget::Update(id) => vec![MutationKey::Delete(id.clone())],
        };

        let Some(guard) = self.mutations.begin_unless(self.mutation_key(), &conflicting) else {
            tracing::debug!(key = %self.mutation_key(), "Submission already in flight, ignoring");
            return SubmitAttempt::InFlight;
        };

        let payload = match form.payload() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "Could not build payload from form");
                return SubmitAttempt::Invalid;
            }
        };

        tracing::info!(
            backend = self.api.name(),
            key = %guard.key(),
            "Submitting customization"
        );

        let response = match &self.target {
            SubmitTarget::Create => self.api.create(&payload).await,
            SubmitTarget::Update(id) => self.api.update(id, &payload).await,
        };

        let outcome = match response {
            Err(e) => {
                tracing::error!(error = %e, "Customization save failed");
                SubmissionOutcome::TransportFailure(GENERIC_FAILURE_MESSAGE.to_string())
            }
            Ok(response) if !response.user_errors.is_empty() => {
                tracing::info!(count = response.user_errors.len(), "Customization rejected");
                SubmissionOutcome::UserErrors(response.user_errors)
            }
            Ok(_) => {
                self.navigator.navigate_to(&self.destination);
                SubmissionOutcome::Success
            }
        };

        SubmitAttempt::Finished(outcome)
    }

    /// 편집 페이지의 "Delete" 동작
    pub async fn delete(&self, id: &str) -> SubmitAttempt {
        let key = MutationKey::Delete(id.to_string());
        let Some(_guard) = self.mutations.begin_unless(key, &[self.mutation_key()]) else {
            tracing::debug!(id, "Save or delete already in flight, ignoring");
            return SubmitAttempt::InFlight;
        };

        let outcome = match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "Customization deleted");
                self.navigator.navigate_to(&self.destination);
                SubmissionOutcome::Success
            }
            Err(e) => {
                tracing::error!(id, error = %e, "Customization delete failed");
                SubmissionOutcome::TransportFailure(GENERIC_FAILURE_MESSAGE.to_string())
            }
        };

        SubmitAttempt::Finished(outcome)
    }

    /// breadcrumb: 목록으로 돌아가기
    pub fn back(&self) {
        self.navigator.navigate_to(&self.destination);
    }
}
