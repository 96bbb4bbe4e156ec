use colored::*;

/// 결제 커스터마이제이션 관리 페이지 (admin)
pub const PAYMENT_CUSTOMIZATIONS_PATH: &str = "/settings/payments/customizations";

/// 배송 커스터마이제이션 관리 페이지 (admin)
pub const SHIPPING_CUSTOMIZATIONS_PATH: &str = "/settings/shipping/customizations";

/// 앱 홈 (커스터마이제이션 목록)
pub const HOME_PATH: &str = "/";

/// 목록 행에서 편집 페이지로 가는 링크
pub fn edit_path(function_id: &str, id: &str) -> String {
    format!("/hide/{}/{}", function_id, id)
}

/// Navigation capability injected into workflows
///
/// Fire-and-forget: callers never consume a result.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}

/// 터미널에 리다이렉트 대상을 출력하는 Navigator
pub struct TerminalNavigator;

impl TerminalNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate_to(&self, path: &str) {
        tracing::debug!(path, "Navigating");
        eprintln!("{} {}", "[->]".cyan(), path.dimmed());
    }
}
