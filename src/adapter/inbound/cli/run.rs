//! Entry point for a parsed command line.

use std::io::IsTerminal;

use tracing::info;

use super::command::{
    Cli, ColorChoice, Commands, ConfigCommand, OrdersCommand, ProductsCommand, StockCommand,
    StockOutCommand, VendorsCommand,
};
use super::session::Session;
use super::{config, orders, products, stock_out, vendors};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::Backend;

/// Decide whether to emit ANSI colors. `NO_COLOR` disables `auto`.
#[must_use]
pub fn resolve_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    if let Commands::Config(command) = &cli.command {
        return match command {
            ConfigCommand::Init(args) => config::execute_init(config_path, args.force),
            ConfigCommand::Show => config::execute_show(
                config_path,
                cli.base_url.as_deref(),
                cli.schema.as_deref(),
            ),
            ConfigCommand::Validate => config::execute_validate(config_path),
        };
    }

    let mut settings = Config::load_or_default(config_path)?;
    settings.apply_overrides(cli.base_url.clone(), cli.schema.clone());
    settings.validate()?;
    settings.init_logging(cli.verbose);
    info!(
        base_url = %settings.backend.base_url,
        schema = %settings.backend.schema,
        "opsdesk starting"
    );

    let session = Session::connect(&settings)?;
    dispatch(&session, &cli.command).await
}

/// Route a page command to its handler.
pub async fn dispatch<B: Backend>(session: &Session<B>, command: &Commands) -> Result<()> {
    match command {
        Commands::Vendors(VendorsCommand::List(args)) => vendors::list(session, args).await,
        Commands::Vendors(VendorsCommand::Show(arg)) => vendors::show(session, arg).await,
        Commands::Products(ProductsCommand::List(args)) => {
            products::list_products(session, args).await
        }
        Commands::Stock(StockCommand::List(args)) => products::list_stock(session, args).await,
        Commands::Orders(OrdersCommand::List(args)) => orders::list(session, args).await,
        Commands::Orders(OrdersCommand::Show(args)) => orders::show(session, args).await,
        Commands::Orders(OrdersCommand::Register(form)) => orders::register(session, form).await,
        Commands::Orders(OrdersCommand::Update(args)) => orders::update(session, args).await,
        Commands::Orders(OrdersCommand::Delete(args)) => orders::delete(session, args).await,
        Commands::Progress(args) => orders::progress(session, args).await,
        Commands::StockOut(StockOutCommand::List(args)) => stock_out::list(session, args).await,
        Commands::StockOut(StockOutCommand::Show(args)) => stock_out::show(session, args).await,
        Commands::StockOut(StockOutCommand::Register(form)) => {
            stock_out::register(session, form).await
        }
        Commands::StockOut(StockOutCommand::Update(args)) => {
            stock_out::update(session, args).await
        }
        Commands::StockOut(StockOutCommand::Delete(args)) => {
            stock_out::delete(session, args).await
        }
        // Needs no backend; handled in `run`.
        Commands::Config(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_color_choices_win() {
        assert!(resolve_color(ColorChoice::Always));
        assert!(!resolve_color(ColorChoice::Never));
    }
}
