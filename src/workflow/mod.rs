pub mod list;
pub mod mutations;
pub mod submission;

pub use list::{ListWorkflow, SelectedCount};
pub use mutations::{MutationGuard, MutationKey, MutationTracker};
pub use submission::{
    user_error_banner_title, SubmissionOutcome, SubmissionWorkflow, SubmitAttempt, SubmitTarget,
    GENERIC_FAILURE_MESSAGE,
};
