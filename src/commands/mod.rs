pub mod form;
pub mod list;

use crate::api::{ApiFactory, CustomizationApi};
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use crate::navigation::{Navigator, TerminalNavigator};
use crate::workflow::MutationTracker;
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

/// 명령 실행에 필요한 공유 의존성
pub struct App {
    pub config: Config,
    pub api: Arc<dyn CustomizationApi>,
    pub navigator: Arc<dyn Navigator>,
    pub tracker: MutationTracker,
    pub yes: bool,
}

impl App {
    pub fn new(cli: &Cli, config: Config) -> Result<Self> {
        let backend = cli.backend.as_deref().unwrap_or(&config.backend).to_string();
        let store_path = cli
            .store
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.store_path));

        let api = ApiFactory::create(&backend, &store_path)?;
        tracing::debug!(backend = api.name(), store = %store_path.display(), "Using backend");

        Ok(Self {
            config,
            api,
            navigator: Arc::new(TerminalNavigator::new()),
            tracker: MutationTracker::new(),
            yes: cli.yes,
        })
    }
}

pub async fn run(cli: Cli, config: Config) -> Result<()> {
    if let Command::InitConfig = cli.command {
        let path = Config::init()?;
        eprintln!("{} Wrote {}", "[OK]".green(), path.display());
        return Ok(());
    }

    let app = App::new(&cli, config)?;

    match cli.command {
        Command::List { kind } => list::list(&app, kind.map(Into::into)).await,
        Command::NewPayment {
            payment_method,
            cart_subtotal,
        } => form::new_payment(&app, payment_method, cart_subtotal).await,
        Command::EditPayment {
            id,
            payment_method,
            cart_subtotal,
        } => form::edit_payment(&app, &id, payment_method, cart_subtotal).await,
        Command::DeletePayment { id } => form::delete_payment(&app, &id).await,
        Command::HideDelivery {
            title,
            delivery_option_name,
        } => form::hide_delivery(&app, title, delivery_option_name).await,
        Command::RenameDelivery {
            function_id,
            title,
            delivery_option_name,
            rename_to,
        } => {
            form::rename_delivery(&app, function_id, title, delivery_option_name, rename_to).await
        }
        Command::Delete { ids, all } => list::bulk_delete(&app, ids, all).await,
        Command::InitConfig => Ok(()),
    }
}
