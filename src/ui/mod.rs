pub mod progress;
pub mod prompt;
pub mod render;

pub use progress::{create_spinner, with_spinner};
pub use prompt::ConfirmPrompt;
pub use render::{print_banner, print_form, print_list};
