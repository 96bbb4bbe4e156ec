use crate::error::{CustomizationError, Result};
use colored::*;
use dialoguer::Confirm;

pub struct ConfirmPrompt;

impl ConfirmPrompt {
    pub fn new() -> Self {
        Self
    }

    /// 일괄 삭제 확인. stderr로 대상 목록을 출력한다.
    pub fn confirm_bulk_delete(&self, ids: &[String]) -> Result<bool> {
        eprintln!(
            "\n{} {} customization(s) will be deleted:",
            "[!]".yellow().bold(),
            ids.len().to_string().bold()
        );

        for id in ids {
            eprintln!("  - {}", id.red());
        }

        let result = Confirm::new()
            .with_prompt("Delete these customizations?")
            .default(false)
            .interact()
            .map_err(|_| CustomizationError::UserCancelled)?;

        Ok(result)
    }
}

impl Default for ConfirmPrompt {
    fn default() -> Self {
        Self::new()
    }
}
