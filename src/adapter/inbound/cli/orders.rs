//! Handlers for `opsdesk orders` and `opsdesk progress`.

use serde_json::json;
use tracing::warn;

use super::command::{DeleteArgs, OrderFormArgs, OrderShowArgs, OrderUpdateArgs, RangeArgs};
use super::output;
use super::session::{confirm, Session};
use crate::application::order_progress::OrderProgress;
use crate::application::{OrderRegistration, ReferenceLists};
use crate::domain::{Order, OrderCode, OrderDraft};
use crate::error::Result;
use crate::port::Backend;

fn draft_from(form: &OrderFormArgs, today: chrono::NaiveDate) -> OrderDraft {
    OrderDraft::new(form.product.trim(), form.vendor.trim())
        .with_quantity(form.qty)
        .with_dates(Some(form.order_date.unwrap_or(today)), form.due_date)
        .with_note(form.note.clone())
}

/// Product and vendor labels for a confirmation line; bare codes when the
/// reference lists cannot be fetched.
async fn describe<B: Backend>(session: &Session<B>, draft: &OrderDraft) -> (String, String) {
    let mut lists = ReferenceLists::new(session.backend.clone(), session.schema.clone());
    if let Err(e) = lists.load().await {
        warn!(error = %e, "Reference lists unavailable");
    }
    (
        lists.describe_product(&draft.product_code),
        lists.describe_vendor(&draft.vendor_code),
    )
}

/// Execute `orders list`.
pub async fn list<B: Backend>(session: &Session<B>, args: &RangeArgs) -> Result<()> {
    let mut page = OrderRegistration::new(
        session.backend.clone(),
        session.schema.clone(),
        session.today,
    );
    let range = args.apply(page.range());

    let pb = output::spinner("Loading orders");
    let loaded = page.search(range).await.map(|_| ());
    output::spinner_clear(&pb);
    loaded?;

    let rows = page.rows();
    if output::is_json() {
        output::json_output(json!({
            "command": "orders.list",
            "schema": session.schema,
            "range": output::range_json(page.range()),
            "orders": rows,
        }));
        return Ok(());
    }

    output::section(&format!("Orders {}", output::muted(page.range())));
    output::table(&rows, "No orders in this range.");
    if !rows.is_empty() {
        output::hint(&format!(
            "run {} for details",
            output::highlight("opsdesk orders show <ORDER>")
        ));
    }
    Ok(())
}

/// Execute `orders show`.
pub async fn show<B: Backend>(session: &Session<B>, args: &OrderShowArgs) -> Result<()> {
    let mut page = OrderRegistration::new(
        session.backend.clone(),
        session.schema.clone(),
        session.today,
    );
    let range = args.range.apply(page.range());
    page.search(range).await?;
    let detail = page.detail(&OrderCode::new(args.code.trim()))?;

    if output::is_json() {
        output::json_output(json!({
            "command": "orders.show",
            "order": detail,
        }));
        return Ok(());
    }

    let date = |value: &str| if value.is_empty() { "-".to_string() } else { value.to_string() };
    output::section(&format!("Order {}", detail.code));
    output::field("Ordered", date(&detail.ordered_on));
    output::field("Due", date(&detail.due_on));
    output::field(
        "Product",
        format!("{} ({})", detail.product_name, detail.product_code),
    );
    output::field(
        "Vendor",
        format!("{} ({})", detail.vendor_name, detail.vendor_code),
    );
    output::field("Quantity", detail.quantity);
    output::field("Status", &detail.status);
    if !detail.note.is_empty() {
        output::field("Note", &detail.note);
    }
    Ok(())
}

/// Execute `orders register`.
pub async fn register<B: Backend>(session: &Session<B>, form: &OrderFormArgs) -> Result<()> {
    let draft = draft_from(form, session.today);
    draft.validate()?;
    let (product, vendor) = describe(session, &draft).await;

    let mut page = OrderRegistration::new(
        session.backend.clone(),
        session.schema.clone(),
        session.today,
    );
    let code = page.register(&draft).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "orders.register",
            "code": code,
            "orders": page.rows(),
        }));
        return Ok(());
    }

    let label = code.map_or_else(|| "order".to_string(), |c| format!("order {c}"));
    output::success(&format!(
        "Registered {label}: {} x {product} for {vendor}",
        draft.quantity
    ));
    output::section(&format!("Orders {}", output::muted(page.range())));
    output::table(&page.rows(), "No orders in this range.");
    Ok(())
}

/// The stored order with the given flags applied on top.
fn edited_draft(stored: &Order, args: &OrderUpdateArgs) -> OrderDraft {
    let mut draft = OrderDraft::from(stored);
    if let Some(product) = &args.product {
        draft.product_code = product.trim().to_string();
    }
    if let Some(vendor) = &args.vendor {
        draft.vendor_code = vendor.trim().to_string();
    }
    if let Some(qty) = args.qty {
        draft.quantity = qty;
    }
    if let Some(ordered_on) = args.order_date {
        draft.ordered_on = Some(ordered_on);
    }
    if args.clear_due {
        draft.due_on = None;
    } else if let Some(due_on) = args.due_date {
        draft.due_on = Some(due_on);
    }
    if let Some(note) = &args.note {
        draft.note = Some(note.clone()).filter(|n| !n.is_empty());
    }
    draft
}

/// Execute `orders update`.
pub async fn update<B: Backend>(session: &Session<B>, args: &OrderUpdateArgs) -> Result<()> {
    let code = OrderCode::new(args.code.trim());
    let mut page = OrderRegistration::new(
        session.backend.clone(),
        session.schema.clone(),
        session.today,
    );
    let range = args.range.apply(page.range());
    page.search(range).await?;
    let draft = edited_draft(page.show(&code)?, args);
    page.update(&code, &draft).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "orders.update",
            "code": code,
            "orders": page.rows(),
        }));
        return Ok(());
    }

    output::success(&format!("Updated order {code}"));
    output::table(&page.rows(), "No orders in this range.");
    Ok(())
}

/// Execute `orders delete`.
pub async fn delete<B: Backend>(session: &Session<B>, args: &DeleteArgs) -> Result<()> {
    let code = OrderCode::new(args.id.trim());
    if !confirm(&format!("Delete order {code}?"), args.yes)? {
        output::note("Nothing deleted.");
        return Ok(());
    }

    let mut page = OrderRegistration::new(
        session.backend.clone(),
        session.schema.clone(),
        session.today,
    );
    page.delete(&code).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "orders.delete",
            "code": code,
            "orders": page.rows(),
        }));
        return Ok(());
    }

    output::success(&format!("Deleted order {code}"));
    Ok(())
}

/// Execute `progress`.
pub async fn progress<B: Backend>(session: &Session<B>, args: &RangeArgs) -> Result<()> {
    let mut page = OrderProgress::new(
        session.backend.clone(),
        session.schema.clone(),
        session.today,
    );
    let range = args.apply(page.range());

    let pb = output::spinner("Loading production orders");
    let loaded = page.search(range).await.map(|_| ());
    output::spinner_clear(&pb);
    loaded?;

    let rows = page.rows();
    if output::is_json() {
        output::json_output(json!({
            "command": "progress",
            "schema": session.schema,
            "range": output::range_json(page.range()),
            "orders": rows,
        }));
        return Ok(());
    }

    output::section(&format!("Production progress {}", output::muted(page.range())));
    output::table(&rows, "No production orders in this range.");
    Ok(())
}
