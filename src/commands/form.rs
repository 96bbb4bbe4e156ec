use crate::commands::App;
use crate::error::{CustomizationError, Result};
use crate::form::{FormKind, FormState};
use crate::ui::{print_form, with_spinner};
use crate::validation::FieldName;
use crate::view::FormView;
use crate::workflow::{SubmissionOutcome, SubmissionWorkflow, SubmitAttempt};
use colored::*;

/// 플래그로 받은 값 중 지정된 것만 편집으로 변환
fn edits(values: Vec<(FieldName, Option<String>)>) -> Vec<(FieldName, String)> {
    values
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
}

fn workflow_for(app: &App, kind: FormKind) -> SubmissionWorkflow {
    SubmissionWorkflow::new(app.api.clone(), app.navigator.clone(), kind)
        .with_tracker(app.tracker.clone())
}

pub async fn new_payment(
    app: &App,
    payment_method: Option<String>,
    cart_subtotal: Option<String>,
) -> Result<()> {
    let form = FormState::new(FormKind::Payment, app.config.payment_function_id.clone());
    let workflow = workflow_for(app, FormKind::Payment);

    let edits = edits(vec![
        (FieldName::PaymentMethod, payment_method),
        (FieldName::CartSubtotal, cart_subtotal),
    ]);

    save(form, &workflow, edits).await
}

pub async fn edit_payment(
    app: &App,
    id: &str,
    payment_method: Option<String>,
    cart_subtotal: Option<String>,
) -> Result<()> {
    let customization = with_spinner("Loading customization...", app.api.get(id)).await?;
    let form = FormState::from_customization(&customization)?;

    if form.kind() != FormKind::Payment {
        return Err(CustomizationError::InvalidForm(format!(
            "{} is not a payment customization",
            id
        )));
    }

    let workflow = SubmissionWorkflow::for_update(
        app.api.clone(),
        app.navigator.clone(),
        FormKind::Payment,
        id,
    )
    .with_tracker(app.tracker.clone());

    let edits = edits(vec![
        (FieldName::PaymentMethod, payment_method),
        (FieldName::CartSubtotal, cart_subtotal),
    ]);

    save(form, &workflow, edits).await
}

pub async fn delete_payment(app: &App, id: &str) -> Result<()> {
    let workflow = SubmissionWorkflow::for_update(
        app.api.clone(),
        app.navigator.clone(),
        FormKind::Payment,
        id,
    )
    .with_tracker(app.tracker.clone());

    let attempt = with_spinner("Deleting customization...", workflow.delete(id)).await;
    finish(attempt, |outcome| {
        if let Some(banner) = outcome.banner() {
            crate::ui::print_banner(&banner);
        }
    })?;

    eprintln!("{} Customization deleted", "[OK]".green());
    Ok(())
}

pub async fn hide_delivery(
    app: &App,
    title: Option<String>,
    delivery_option_name: Option<String>,
) -> Result<()> {
    let form = FormState::new(
        FormKind::HideDelivery,
        app.config.delivery_function_id.clone(),
    );
    let workflow = workflow_for(app, FormKind::HideDelivery);

    let edits = edits(vec![
        (FieldName::Title, title),
        (FieldName::DeliveryOptionName, delivery_option_name),
    ]);

    save(form, &workflow, edits).await
}

pub async fn rename_delivery(
    app: &App,
    function_id: Option<String>,
    title: Option<String>,
    delivery_option_name: Option<String>,
    rename_to: Option<String>,
) -> Result<()> {
    let function_id = function_id.unwrap_or_else(|| app.config.delivery_function_id.clone());
    let form = FormState::new(FormKind::RenameDelivery, function_id);
    let workflow = workflow_for(app, FormKind::RenameDelivery);

    let edits = edits(vec![
        (FieldName::Title, title),
        (FieldName::DeliveryOptionName, delivery_option_name),
        (FieldName::RenameTo, rename_to),
    ]);

    save(form, &workflow, edits).await
}

/// 기본값 적용 → 편집 적용 → 검증 → 제출 → 결과 출력
async fn save(
    mut form: FormState,
    workflow: &SubmissionWorkflow,
    edits: Vec<(FieldName, String)>,
) -> Result<()> {
    form.apply_defaults();

    for (name, value) in edits {
        form.set_field(name, value)?;
    }

    if !form.validate_all() {
        print_form(&FormView::build(&form, workflow, None));
        let errors: Vec<String> = form
            .errors()
            .into_iter()
            .map(|(_, error)| error.to_string())
            .collect();
        return Err(CustomizationError::InvalidForm(errors.join(", ")));
    }

    if FormView::build(&form, workflow, None).save_disabled {
        eprintln!("{} Nothing to save", "[i]".cyan());
        return Ok(());
    }

    let attempt = with_spinner("Saving customization...", workflow.submit(&form)).await;
    finish(attempt, |outcome| {
        print_form(&FormView::build(&form, workflow, Some(outcome)));
    })?;

    form.mark_clean();
    eprintln!("{} Customization saved", "[OK]".green());
    Ok(())
}

/// 성공이 아니면 `render`로 배너를 그린 뒤 에러로 변환
fn finish<F>(attempt: SubmitAttempt, render: F) -> Result<()>
where
    F: FnOnce(&SubmissionOutcome),
{
    match attempt {
        SubmitAttempt::Finished(SubmissionOutcome::Success) => Ok(()),
        SubmitAttempt::Finished(outcome) => {
            render(&outcome);
            match outcome {
                SubmissionOutcome::UserErrors(errors) => Err(CustomizationError::InvalidForm(
                    crate::workflow::user_error_banner_title(&errors).to_string(),
                )),
                SubmissionOutcome::TransportFailure(message) => {
                    Err(CustomizationError::Transport(message))
                }
                SubmissionOutcome::Success => Ok(()),
            }
        }
        SubmitAttempt::Invalid => Err(CustomizationError::InvalidForm(
            "form has invalid fields".to_string(),
        )),
        SubmitAttempt::InFlight => Err(CustomizationError::MutationInProgress(
            "this customization".to_string(),
        )),
    }
}
