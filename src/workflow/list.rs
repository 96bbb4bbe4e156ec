use crate::api::{Customization, CustomizationApi};
use crate::error::{CustomizationError, Result};
use crate::workflow::mutations::{MutationKey, MutationTracker};
use futures::future::join_all;
use std::collections::BTreeSet;
use std::sync::Arc;

/// 선택된 항목 수 표시 ("All" 또는 개수)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedCount {
    All,
    Some(usize),
}

/// 목록 페이지: 조회, 다중 선택, 일괄 삭제
pub struct ListWorkflow {
    api: Arc<dyn CustomizationApi>,
    mutations: MutationTracker,
    items: Vec<Customization>,
    selection: BTreeSet<String>,
    loaded: bool,
}

impl ListWorkflow {
    pub fn new(api: Arc<dyn CustomizationApi>) -> Self {
        Self {
            api,
            mutations: MutationTracker::new(),
            items: Vec::new(),
            selection: BTreeSet::new(),
            loaded: false,
        }
    }

    pub fn with_tracker(mut self, tracker: MutationTracker) -> Self {
        self.mutations = tracker;
        self
    }

    pub fn tracker(&self) -> &MutationTracker {
        &self.mutations
    }

    /// 현재 컬렉션 조회 (기존 항목을 교체)
    pub async fn load(&mut self) -> Result<&[Customization]> {
        let items = self.api.list().await?;
        tracing::debug!(count = items.len(), "Loaded customizations");

        self.items = items;
        self.loaded = true;
        // 사라진 항목은 선택에서도 제거
        let ids: BTreeSet<&str> = self.items.iter().map(|c| c.id.as_str()).collect();
        self.selection.retain(|id| ids.contains(id.as_str()));

        Ok(&self.items)
    }

    pub async fn refetch(&mut self) -> Result<&[Customization]> {
        self.load().await
    }

    pub fn items(&self) -> &[Customization] {
        &self.items
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_deleting(&self) -> bool {
        self.mutations.any_deleting()
    }

    pub fn select<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection.extend(ids.into_iter().map(Into::into));
    }

    /// 선택 토글. 토글 후 선택 상태를 반환
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selection.remove(id) {
            false
        } else {
            self.selection.insert(id.to_string());
            true
        }
    }

    pub fn select_all(&mut self) {
        self.selection = self.items.iter().map(|c| c.id.clone()).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn selected_count(&self) -> SelectedCount {
        let all_selected = !self.items.is_empty()
            && self.items.iter().all(|c| self.selection.contains(&c.id));

        if all_selected {
            SelectedCount::All
        } else {
            SelectedCount::Some(self.selection.len())
        }
    }

    /// 현재 선택 항목 일괄 삭제
    pub async fn delete_selected(&mut self) -> Result<()> {
        let ids: Vec<String> = self.selection.iter().cloned().collect();
        self.bulk_delete(&ids).await
    }

    /// id마다 delete를 동시에 보내고 모두 기다린다.
    ///
    /// 하나라도 실패하면 전체가 실패로 보고되며 재조회/선택 해제는 하지 않는다.
    /// 모두 성공하면 한 번 재조회한 뒤 선택을 비운다.
    pub async fn bulk_delete(&mut self, ids: &[String]) -> Result<()> {
        let ids: BTreeSet<&String> = ids.iter().collect();
        if ids.is_empty() {
            return Ok(());
        }

        let keys = ids
            .iter()
            .map(|id| MutationKey::Delete((*id).clone()))
            .collect();
        let Some(guards) = self.mutations.begin_all(keys) else {
            tracing::debug!("Delete already in flight, ignoring bulk delete");
            return Err(CustomizationError::MutationInProgress(
                "bulk delete".to_string(),
            ));
        };

        tracing::info!(count = ids.len(), "Deleting customizations");

        let api = &self.api;
        let results = join_all(ids.iter().map(|id| async move {
            let result = api.delete(id).await;
            (*id, result)
        }))
        .await;

        let errors: Vec<String> = results
            .into_iter()
            .filter_map(|(id, result)| {
                result.err().map(|e| {
                    tracing::error!(id = %id, error = %e, "Delete failed");
                    format!("{}: {}", id, e)
                })
            })
            .collect();

        if !errors.is_empty() {
            return Err(CustomizationError::BulkDeleteFailed {
                failed: errors.len(),
                total: ids.len(),
                errors,
            });
        }

        drop(guards);
        self.load().await?;
        self.clear_selection();

        Ok(())
    }
}
