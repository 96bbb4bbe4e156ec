use crate::api::CustomizationKind;
use crate::commands::App;
use crate::error::{CustomizationError, Result};
use crate::ui::{print_list, with_spinner, ConfirmPrompt};
use crate::view::ListView;
use crate::workflow::ListWorkflow;
use colored::*;

fn list_workflow(app: &App) -> ListWorkflow {
    ListWorkflow::new(app.api.clone()).with_tracker(app.tracker.clone())
}

pub async fn list(app: &App, kind: Option<CustomizationKind>) -> Result<()> {
    let mut workflow = list_workflow(app);
    with_spinner("Loading customizations...", workflow.load()).await?;

    print_list(&ListView::build(&workflow), kind);
    Ok(())
}

/// 목록 페이지의 "Delete customizations" 일괄 동작
pub async fn bulk_delete(app: &App, ids: Vec<String>, all: bool) -> Result<()> {
    let mut workflow = list_workflow(app);
    with_spinner("Loading customizations...", workflow.load()).await?;

    if all {
        workflow.select_all();
    } else {
        workflow.select(ids);
    }

    let selected: Vec<String> = workflow.selection().iter().cloned().collect();
    if selected.is_empty() {
        eprintln!("{} Nothing selected", "[i]".cyan());
        return Ok(());
    }

    if app.config.confirm_bulk_delete && !app.yes {
        let prompt = ConfirmPrompt::new();
        if !prompt.confirm_bulk_delete(&selected)? {
            return Err(CustomizationError::UserCancelled);
        }
    }

    let result = with_spinner("Deleting customizations...", workflow.delete_selected()).await;

    if let Err(CustomizationError::BulkDeleteFailed { errors, .. }) = &result {
        eprintln!("{} Failed deletions:", "[X]".red());
        for error in errors {
            eprintln!("  - {}", error.red());
        }
    }
    result?;

    eprintln!(
        "{} Deleted {} customization(s)",
        "[OK]".green(),
        selected.len().to_string().bold()
    );
    print_list(&ListView::build(&workflow), None);

    Ok(())
}
