//! 단위 테스트용 mock API 와 navigator

use crate::api::{
    Customization, CustomizationApi, CustomizationPayload, CustomizationRule, MutationResponse,
};
use crate::error::{CustomizationError, Result};
use crate::navigation::Navigator;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn sample_customization(id: &str) -> Customization {
    Customization {
        id: id.to_string(),
        title: format!("Customization {}", id),
        function_id: "payment-fn".to_string(),
        enabled: true,
        rule: CustomizationRule::HidePaymentMethod {
            payment_method: format!("Method {}", id),
            cart_subtotal: 10.0,
        },
        created_at: chrono::Utc::now(),
    }
}

/// 호출 횟수를 세는 mock API
#[derive(Default)]
pub struct MockApi {
    items: Mutex<Vec<Customization>>,
    create_response: MutationResponse,
    fail_create: bool,
    failing_deletes: HashSet<String>,
    delay: Option<Duration>,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(self, items: Vec<Customization>) -> Self {
        *self.items.lock().unwrap() = items;
        self
    }

    pub fn with_create_response(mut self, response: MutationResponse) -> Self {
        self.create_response = response;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_delete(mut self, id: &str) -> Self {
        self.failing_deletes.insert(id.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl CustomizationApi for MockApi {
    fn name(&self) -> &str {
        "mock"
    }

    async fn create(&self, _payload: &CustomizationPayload) -> Result<MutationResponse> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        if self.fail_create {
            return Err(CustomizationError::Transport("connection reset".to_string()));
        }
        Ok(self.create_response.clone())
    }

    async fn update(&self, _id: &str, _payload: &CustomizationPayload) -> Result<MutationResponse> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        Ok(MutationResponse::default())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        if self.failing_deletes.contains(id) {
            return Err(CustomizationError::Transport(format!("delete {} refused", id)));
        }
        self.items.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Customization>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> Result<Customization> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| CustomizationError::NotFound(id.to_string()))
    }
}

/// 이동 경로를 기록하는 navigator
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}
