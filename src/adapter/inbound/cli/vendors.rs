//! Handlers for `opsdesk vendors`.

use serde::Serialize;
use serde_json::json;
use tabled::Tabled;

use super::command::{CodeArg, VendorListArgs};
use super::output;
use super::session::Session;
use crate::application::{VendorLookup, VendorScope};
use crate::domain::Vendor;
use crate::error::Result;
use crate::port::Backend;

#[derive(Serialize, Tabled)]
struct VendorRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

impl From<&Vendor> for VendorRow {
    fn from(vendor: &Vendor) -> Self {
        Self {
            code: vendor.code.clone(),
            name: vendor.name.clone(),
            city: vendor.city.clone().unwrap_or_default(),
            phone: vendor.phone.clone().unwrap_or_default(),
        }
    }
}

/// Execute `vendors list`.
pub async fn list<B: Backend>(session: &Session<B>, args: &VendorListArgs) -> Result<()> {
    let scope = if args.outbound {
        VendorScope::Sales
    } else {
        VendorScope::All
    };
    let mut page = VendorLookup::new(session.backend.clone(), session.schema.clone(), scope);

    let pb = output::spinner("Loading vendors");
    let loaded = page.load().await;
    output::spinner_clear(&pb);
    loaded?;

    let query = args.search.search.as_deref().unwrap_or_default();
    let rows: Vec<VendorRow> = page.filter(query).into_iter().map(VendorRow::from).collect();

    if output::is_json() {
        output::json_output(json!({
            "command": "vendors.list",
            "schema": session.schema,
            "outbound": args.outbound,
            "vendors": rows,
        }));
        return Ok(());
    }

    output::section(if args.outbound { "Sales vendors" } else { "Vendors" });
    output::table(&rows, "No vendors match.");
    Ok(())
}

/// Execute `vendors show`.
pub async fn show<B: Backend>(session: &Session<B>, arg: &CodeArg) -> Result<()> {
    let mut page = VendorLookup::new(
        session.backend.clone(),
        session.schema.clone(),
        VendorScope::All,
    );
    page.load().await?;
    let vendor = page.show(&arg.code)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "vendors.show",
            "vendor": vendor,
        }));
        return Ok(());
    }

    output::section(&vendor.name);
    output::field("Code", &vendor.code);
    output::field("City", vendor.city.as_deref().unwrap_or("-"));
    output::field("Address", vendor.address.as_deref().unwrap_or("-"));
    output::field("Phone", vendor.phone.as_deref().unwrap_or("-"));
    Ok(())
}
