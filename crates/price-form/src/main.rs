//! # Price Form Demo
//!
//! Drives a [`TableView`] through a scripted session, the way a browser would deliver
//! events to the page, and prints the table after every step.
//!
//! ```bash
//! RUST_LOG=info cargo run -p price-form
//! ```

use ledger_framework::tracing::setup_tracing;
use ledger_framework::LedgerConfig;
use price_form::form::{FormEvent, ProductForm};
use price_form::lifecycle::FormSystem;
use price_form::model::ProductId;
use price_form::view::{InputField, TableView};
use tracing::{info, warn, Instrument};

enum Step {
    Event(FormEvent),
    Type(ProductId, InputField, &'static str),
}

fn script() -> Vec<Step> {
    let first = ProductId::new(1);
    let second = ProductId::new(2);
    vec![
        Step::Event(FormEvent::Loaded),
        Step::Type(first, InputField::Name, "Bread"),
        Step::Type(first, InputField::Price, "3,50"),
        Step::Event(FormEvent::AddClicked),
        Step::Type(second, InputField::Name, "Butter"),
        Step::Type(second, InputField::Price, "abc"),
        Step::Type(second, InputField::Price, "1,25"),
        Step::Event(FormEvent::DeleteClicked),
        Step::Event(FormEvent::DeleteClicked),
    ]
}

async fn run_step(form: &mut ProductForm<TableView>, step: Step) {
    let event = match step {
        Step::Event(event) => event,
        Step::Type(id, field, text) => {
            form.view_mut().type_into(id, field, text);
            FormEvent::Input { id, field }
        }
    };

    if let Err(e) = form.handle(event).await {
        warn!(?event, error = %e, "Event rejected");
    }
    println!("{}\n", form.view());
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting price form");
    let system = FormSystem::new(&LedgerConfig::default());
    let mut form = system.form(TableView::new());

    for step in script() {
        run_step(&mut form, step)
            .instrument(tracing::info_span!("event"))
            .await;
    }

    let view = form.into_view();
    info!(rows = view.rows().len(), total = ?view.total(), "Session finished");

    system.shutdown().await
}
