//! Handlers for `opsdesk stock-out`.

use serde_json::json;

use super::command::{DeleteArgs, RangeArgs, StockOutFormArgs, StockOutShowArgs, StockOutUpdateArgs};
use super::output;
use super::session::{confirm, Session};
use crate::application::StockOutResults;
use crate::domain::{StockOut, StockOutDraft, StockOutNo};
use crate::error::Result;
use crate::port::Backend;

fn draft_from(form: &StockOutFormArgs) -> StockOutDraft {
    StockOutDraft::new(Some(form.date), form.product.trim())
        .with_vendor(form.vendor.as_deref().map(|v| v.trim().to_string()))
        .with_quantity(form.qty)
        .with_note(form.note.clone())
}

fn open_page<B: Backend>(session: &Session<B>) -> StockOutResults<B> {
    StockOutResults::new(
        session.backend.clone(),
        session.schema.clone(),
        session.today,
    )
}

fn print_table<B: Backend>(page: &StockOutResults<B>) {
    output::section(&format!("Stock-outs {}", output::muted(page.range())));
    output::table(&page.rows(), "No stock-outs in this range.");
}

/// Execute `stock-out list`.
pub async fn list<B: Backend>(session: &Session<B>, args: &RangeArgs) -> Result<()> {
    let mut page = open_page(session);
    let range = args.apply(page.range());

    let pb = output::spinner("Loading stock-outs");
    let loaded = page.search(range).await.map(|_| ());
    output::spinner_clear(&pb);
    loaded?;

    if output::is_json() {
        output::json_output(json!({
            "command": "stock-out.list",
            "schema": session.schema,
            "range": output::range_json(page.range()),
            "stock_outs": page.rows(),
        }));
        return Ok(());
    }

    print_table(&page);
    if !page.rows().is_empty() {
        output::hint(&format!(
            "run {} for details",
            output::highlight("opsdesk stock-out show <NO>")
        ));
    }
    Ok(())
}

/// Execute `stock-out show`.
pub async fn show<B: Backend>(session: &Session<B>, args: &StockOutShowArgs) -> Result<()> {
    let mut page = open_page(session);
    let range = args.range.apply(page.range());
    page.search(range).await?;
    let detail = page.detail(&StockOutNo::new(args.no.trim()))?;

    if output::is_json() {
        output::json_output(json!({
            "command": "stock-out.show",
            "stock_out": detail,
        }));
        return Ok(());
    }

    output::section(&format!("Stock-out {}", detail.no));
    output::field("Shipped", &detail.shipped_on);
    output::field(
        "Product",
        format!("{} ({})", detail.product_name, detail.product_code),
    );
    if detail.vendor_code.is_empty() {
        output::field("Vendor", "-");
    } else {
        output::field(
            "Vendor",
            format!("{} ({})", detail.vendor_name, detail.vendor_code),
        );
    }
    output::field("Quantity", detail.quantity);
    if !detail.note.is_empty() {
        output::field("Note", &detail.note);
    }
    Ok(())
}

/// Execute `stock-out register`.
pub async fn register<B: Backend>(session: &Session<B>, form: &StockOutFormArgs) -> Result<()> {
    let draft = draft_from(form);
    let mut page = open_page(session);
    page.register(&draft).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "stock-out.register",
            "stock_outs": page.rows(),
        }));
        return Ok(());
    }

    output::success(&format!(
        "Registered stock-out of {} x {}",
        draft.quantity, draft.product_code
    ));
    print_table(&page);
    Ok(())
}

/// The stored stock-out with the given flags applied on top.
fn edited_draft(stored: &StockOut, args: &StockOutUpdateArgs) -> StockOutDraft {
    let mut draft = StockOutDraft::from(stored);
    if let Some(shipped_on) = args.date {
        draft.shipped_on = Some(shipped_on);
    }
    if let Some(product) = &args.product {
        draft.product_code = product.trim().to_string();
    }
    if let Some(vendor) = &args.vendor {
        draft = draft.with_vendor(Some(vendor.trim().to_string()));
    }
    if let Some(qty) = args.qty {
        draft.quantity = qty;
    }
    if let Some(note) = &args.note {
        draft.note = Some(note.clone()).filter(|n| !n.is_empty());
    }
    draft
}

/// Execute `stock-out update`.
pub async fn update<B: Backend>(session: &Session<B>, args: &StockOutUpdateArgs) -> Result<()> {
    let no = StockOutNo::new(args.no.trim());
    let mut page = open_page(session);
    let range = args.range.apply(page.range());
    page.search(range).await?;
    let draft = edited_draft(page.record(&no)?, args);
    page.update(&no, &draft).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "stock-out.update",
            "no": no,
            "stock_outs": page.rows(),
        }));
        return Ok(());
    }

    output::success(&format!("Updated stock-out {no}"));
    print_table(&page);
    Ok(())
}

/// Execute `stock-out delete`.
pub async fn delete<B: Backend>(session: &Session<B>, args: &DeleteArgs) -> Result<()> {
    let no = StockOutNo::new(args.id.trim());
    if !confirm(&format!("Delete stock-out {no}?"), args.yes)? {
        output::note("Nothing deleted.");
        return Ok(());
    }

    let mut page = open_page(session);
    page.delete(&no).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "stock-out.delete",
            "no": no,
            "stock_outs": page.rows(),
        }));
        return Ok(());
    }

    output::success(&format!("Deleted stock-out {no}"));
    Ok(())
}
