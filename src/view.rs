use crate::api::Customization;
use crate::form::{FormKind, FormState};
use crate::navigation::edit_path;
use crate::validation::FieldName;
use crate::workflow::list::{ListWorkflow, SelectedCount};
use crate::workflow::submission::{SubmissionOutcome, SubmissionWorkflow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStatus {
    /// 서버가 입력을 거부한 경우
    Warning,
    /// 전송 실패
    Critical,
}

/// 페이지 상단 에러 배너
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub status: BannerStatus,
    pub title: String,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: FieldName,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
}

/// 폼 페이지 뷰 모델
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub loading: bool,
    pub fields_disabled: bool,
    pub save_disabled: bool,
    pub delete_disabled: bool,
    pub banner: Option<ErrorBanner>,
    pub fields: Vec<FieldView>,
}

impl FormView {
    pub fn build(
        form: &FormState,
        workflow: &SubmissionWorkflow,
        last_outcome: Option<&SubmissionOutcome>,
    ) -> Self {
        let submitting = workflow.is_submitting();
        let deleting = workflow.is_deleting();

        let fields = form
            .snapshot()
            .into_iter()
            .map(|(name, field)| FieldView {
                name,
                label: name.label(),
                value: field.value,
                error: field.error,
            })
            .collect();

        Self {
            title: form.kind().page_title(),
            subtitle: form.kind().subtitle(),
            loading: submitting,
            fields_disabled: submitting || deleting,
            save_disabled: save_disabled(form, submitting, deleting),
            delete_disabled: submitting,
            banner: last_outcome.and_then(SubmissionOutcome::banner),
            fields,
        }
    }
}

/// 저장 버튼 비활성화 규칙 (폼 종류별)
pub fn save_disabled(form: &FormState, submitting: bool, deleting: bool) -> bool {
    match form.kind() {
        FormKind::Payment => deleting || !form.is_dirty(),
        FormKind::HideDelivery => submitting,
        // 변경 사항이 없을 때 비활성화
        FormKind::RenameDelivery => submitting || !form.has_changed(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub kind: &'static str,
    pub url: String,
    pub selected: bool,
}

impl RowView {
    fn from_customization(customization: &Customization, selected: bool) -> Self {
        Self {
            id: customization.id.clone(),
            title: customization.title.clone(),
            summary: customization.rule.summary(),
            kind: customization.rule.kind().as_str(),
            url: edit_path(&customization.function_id, &customization.id),
            selected,
        }
    }
}

/// 목록 페이지 뷰 모델
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub loading: bool,
    pub rows: Vec<RowView>,
    pub selected_count: SelectedCount,
    pub empty: bool,
}

impl ListView {
    pub fn build(list: &ListWorkflow) -> Self {
        let rows: Vec<RowView> = list
            .items()
            .iter()
            .map(|c| RowView::from_customization(c, list.is_selected(&c.id)))
            .collect();

        Self {
            loading: !list.is_loaded() || list.is_deleting(),
            empty: rows.is_empty(),
            selected_count: list.selected_count(),
            rows,
        }
    }
}
