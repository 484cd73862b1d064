//! Command-line interface definitions.
//!
//! Defines the CLI structure for the opsdesk console using `clap`. Each page
//! of the console is a subcommand group; global flags control output and
//! the backend schema.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::date_range::parse_date;
use crate::domain::DateRange;

/// Operator console for vendors, stock, orders and stock-outs
#[derive(Parser, Debug)]
#[command(name = "opsdesk")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file [default: opsdesk.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding config and OPSDESK_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Backend schema (v_db), overriding config and OPSDESK_SCHEMA
    #[arg(long, global = true)]
    pub schema: Option<String>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up vendors
    #[command(subcommand)]
    Vendors(VendorsCommand),

    /// List finished products
    #[command(subcommand)]
    Products(ProductsCommand),

    /// Inquire product stock
    #[command(subcommand)]
    Stock(StockCommand),

    /// Register and manage orders
    #[command(subcommand)]
    Orders(OrdersCommand),

    /// Track production progress of orders
    Progress(RangeArgs),

    /// Register and manage stock-out results
    #[command(subcommand)]
    StockOut(StockOutCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `opsdesk vendors`.
#[derive(Subcommand, Debug)]
pub enum VendorsCommand {
    /// List vendors, optionally filtered.
    List(VendorListArgs),
    /// Show one vendor's contact details.
    Show(CodeArg),
}

/// Subcommands for `opsdesk products`.
#[derive(Subcommand, Debug)]
pub enum ProductsCommand {
    /// List finished products, optionally filtered.
    List(SearchArg),
}

/// Subcommands for `opsdesk stock`.
#[derive(Subcommand, Debug)]
pub enum StockCommand {
    /// List current stock, optionally filtered.
    List(SearchArg),
}

/// Subcommands for `opsdesk orders`.
#[derive(Subcommand, Debug)]
pub enum OrdersCommand {
    /// List orders placed in a range (today by default).
    List(RangeArgs),
    /// Show one order.
    Show(OrderShowArgs),
    /// Register a new order.
    Register(OrderFormArgs),
    /// Replace an order's fields.
    Update(OrderUpdateArgs),
    /// Delete an order.
    Delete(DeleteArgs),
}

/// Subcommands for `opsdesk stock-out`.
#[derive(Subcommand, Debug)]
pub enum StockOutCommand {
    /// List stock-outs in a range (month to date by default).
    List(RangeArgs),
    /// Show one stock-out.
    Show(StockOutShowArgs),
    /// Register a stock-out result.
    Register(StockOutFormArgs),
    /// Replace a stock-out's fields.
    Update(StockOutUpdateArgs),
    /// Delete a stock-out.
    Delete(DeleteArgs),
}

/// Subcommands for `opsdesk config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults and overrides applied.
    Show,
    /// Validate the configuration file.
    Validate,
}

/// Free-text filter.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArg {
    /// Case-insensitive text matched against codes and names
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct VendorListArgs {
    #[command(flatten)]
    pub search: SearchArg,

    /// Only vendors that receive shipments
    #[arg(long)]
    pub outbound: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CodeArg {
    /// Record code
    pub code: String,
}

/// Edits applied to a page's default date range.
///
/// `--from`/`--open-from` is applied before `--to`/`--open-to`, so when the
/// two bounds cross the range collapses onto the upper bound.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Lower bound (YYYY-MM-DD or YYYYMMDD)
    #[arg(long, value_parser = parse_date_arg, conflicts_with = "open_from")]
    pub from: Option<NaiveDate>,

    /// Upper bound (YYYY-MM-DD or YYYYMMDD)
    #[arg(long, value_parser = parse_date_arg, conflicts_with = "open_to")]
    pub to: Option<NaiveDate>,

    /// Drop the lower bound
    #[arg(long)]
    pub open_from: bool,

    /// Drop the upper bound
    #[arg(long)]
    pub open_to: bool,
}

impl RangeArgs {
    /// Apply the requested edits to `range`.
    #[must_use]
    pub fn apply(&self, mut range: DateRange) -> DateRange {
        if self.open_from {
            range.set_from(None);
        } else if let Some(from) = self.from {
            range.set_from(Some(from));
        }
        if self.open_to {
            range.set_to(None);
        } else if let Some(to) = self.to {
            range.set_to(Some(to));
        }
        range
    }
}

#[derive(Args, Debug, Clone)]
pub struct OrderShowArgs {
    /// Order code (suju_cd)
    pub code: String,

    #[command(flatten)]
    pub range: RangeArgs,
}

/// Fields of the order form.
#[derive(Args, Debug, Clone)]
pub struct OrderFormArgs {
    /// Product code
    #[arg(long)]
    pub product: String,

    /// Vendor code
    #[arg(long)]
    pub vendor: String,

    /// Ordered quantity
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub qty: i64,

    /// Order date [default: today]
    #[arg(long, value_parser = parse_date_arg)]
    pub order_date: Option<NaiveDate>,

    /// Due date
    #[arg(long, value_parser = parse_date_arg)]
    pub due_date: Option<NaiveDate>,

    /// Free-text note
    #[arg(long)]
    pub note: Option<String>,
}

/// `orders update`: fields left out keep the stored order's values.
#[derive(Args, Debug, Clone)]
pub struct OrderUpdateArgs {
    /// Order code (suju_cd)
    pub code: String,

    /// Product code
    #[arg(long)]
    pub product: Option<String>,

    /// Vendor code
    #[arg(long)]
    pub vendor: Option<String>,

    /// Ordered quantity
    #[arg(long, allow_negative_numbers = true)]
    pub qty: Option<i64>,

    /// Order date
    #[arg(long, value_parser = parse_date_arg)]
    pub order_date: Option<NaiveDate>,

    /// Due date
    #[arg(long, value_parser = parse_date_arg, conflicts_with = "clear_due")]
    pub due_date: Option<NaiveDate>,

    /// Remove the due date
    #[arg(long)]
    pub clear_due: bool,

    /// Free-text note (empty to clear)
    #[arg(long)]
    pub note: Option<String>,

    /// Range searched for the order
    #[command(flatten)]
    pub range: RangeArgs,
}

#[derive(Args, Debug, Clone)]
pub struct StockOutShowArgs {
    /// Stock-out number (inout_no)
    pub no: String,

    #[command(flatten)]
    pub range: RangeArgs,
}

/// Fields of the stock-out form.
#[derive(Args, Debug, Clone)]
pub struct StockOutFormArgs {
    /// Ship date (YYYY-MM-DD or YYYYMMDD)
    #[arg(long, value_parser = parse_date_arg)]
    pub date: NaiveDate,

    /// Product code
    #[arg(long)]
    pub product: String,

    /// Vendor code
    #[arg(long)]
    pub vendor: Option<String>,

    /// Shipped quantity
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub qty: i64,

    /// Free-text note
    #[arg(long)]
    pub note: Option<String>,
}

/// `stock-out update`: fields left out keep the stored stock-out's values.
#[derive(Args, Debug, Clone)]
pub struct StockOutUpdateArgs {
    /// Stock-out number (inout_no)
    pub no: String,

    /// Ship date (YYYY-MM-DD or YYYYMMDD)
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// Product code
    #[arg(long)]
    pub product: Option<String>,

    /// Vendor code (blank to clear)
    #[arg(long)]
    pub vendor: Option<String>,

    /// Shipped quantity
    #[arg(long, allow_negative_numbers = true)]
    pub qty: Option<i64>,

    /// Free-text note (empty to clear)
    #[arg(long)]
    pub note: Option<String>,

    /// Range searched for the stock-out
    #[command(flatten)]
    pub range: RangeArgs,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Identifier of the record to delete
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Parse a command-line date in `YYYY-MM-DD` or `YYYYMMDD` form.
pub fn parse_date_arg(input: &str) -> Result<NaiveDate, String> {
    parse_date(input).ok_or_else(|| format!("'{input}' is not a date (use YYYY-MM-DD or YYYYMMDD)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_name_and_version() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "opsdesk");
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["opsdesk", "stock", "list", "--json", "-vv", "--schema", "24_KR"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.schema.as_deref(), Some("24_KR"));
        assert!(cli.base_url.is_none());
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn progress_accepts_both_date_forms() {
        let cli =
            Cli::try_parse_from(["opsdesk", "progress", "--from", "2025-03-01", "--to", "20250314"])
                .unwrap();
        let Commands::Progress(range) = cli.command else {
            panic!("expected progress");
        };
        assert_eq!(range.from, Some(d(2025, 3, 1)));
        assert_eq!(range.to, Some(d(2025, 3, 14)));
    }

    #[test]
    fn bad_date_is_a_usage_error() {
        assert!(Cli::try_parse_from(["opsdesk", "progress", "--from", "2025/03/01"]).is_err());
    }

    #[test]
    fn open_and_explicit_bound_conflict() {
        assert!(
            Cli::try_parse_from(["opsdesk", "progress", "--from", "20250301", "--open-from"])
                .is_err()
        );
    }

    #[test]
    fn range_edits_apply_from_before_to() {
        let base = DateRange::new(Some(d(2025, 2, 14)), Some(d(2025, 3, 14)));
        let args = RangeArgs {
            from: Some(d(2025, 3, 20)),
            to: Some(d(2025, 3, 10)),
            ..RangeArgs::default()
        };

        let range = args.apply(base);

        assert_eq!(range.from(), Some(d(2025, 3, 10)));
        assert_eq!(range.to(), Some(d(2025, 3, 10)));
    }

    #[test]
    fn open_flags_clear_bounds() {
        let base = DateRange::new(Some(d(2025, 2, 14)), Some(d(2025, 3, 14)));
        let args = RangeArgs {
            open_from: true,
            open_to: true,
            ..RangeArgs::default()
        };
        assert_eq!(args.apply(base), DateRange::unbounded());
    }

    #[test]
    fn stock_out_register_requires_date() {
        assert!(Cli::try_parse_from(["opsdesk", "stock-out", "register", "--product", "P100"]).is_err());
        let cli = Cli::try_parse_from([
            "opsdesk", "stock-out", "register", "--date", "20250310", "--product", "P100", "--qty", "3",
        ])
        .unwrap();
        let Commands::StockOut(StockOutCommand::Register(form)) = cli.command else {
            panic!("expected stock-out register");
        };
        assert_eq!(form.qty, 3);
        assert!(form.vendor.is_none());
    }

    #[test]
    fn update_flags_are_all_optional() {
        let cli = Cli::try_parse_from(["opsdesk", "orders", "update", "S0001", "--qty", "9"]).unwrap();
        let Commands::Orders(OrdersCommand::Update(args)) = cli.command else {
            panic!("expected orders update");
        };
        assert_eq!(args.qty, Some(9));
        assert!(args.product.is_none() && args.due_date.is_none() && !args.clear_due);

        assert!(Cli::try_parse_from([
            "opsdesk", "orders", "update", "S0001", "--due-date", "20250331", "--clear-due",
        ])
        .is_err());
    }
}
