use ledger_framework::tracing::try_setup_tracing;
use ledger_framework::{IdPolicy, LedgerConfig};
use price_form::form::FormEvent;
use price_form::lifecycle::FormSystem;
use price_form::model::{Product, ProductId};
use price_form::product_ledger::ProductError;
use price_form::view::{InputField, ProductView, TableView};

fn id(n: u32) -> ProductId {
    ProductId::new(n)
}

/// Full end-to-end test with a real ledger actor and a table view.
#[tokio::test]
async fn test_bread_scenario_totals_through_the_form() {
    try_setup_tracing();
    let system = FormSystem::new(&LedgerConfig::default());
    let mut form = system.form(TableView::new());

    let first = form.start().await.expect("Failed to start form");
    assert_eq!(first, id(1));
    assert_eq!(form.view().focused(), Some((id(1), InputField::Name)));

    form.view_mut().type_into(first, InputField::Name, "Bread");
    form.on_input(first, InputField::Name).await.unwrap();
    form.view_mut().type_into(first, InputField::Price, "3,50");
    form.on_input(first, InputField::Price).await.unwrap();

    let second = form.add_row().await.unwrap();
    assert_eq!(second, id(2));
    form.view_mut().type_into(second, InputField::Price, "1,25");
    form.on_input(second, InputField::Price).await.unwrap();

    assert_eq!(form.view().total(), Some(4.75));
    assert_eq!(system.product_client.total_price().await.unwrap(), 4.75);

    let products = system.product_client.products().await.unwrap();
    assert_eq!(products[&first], Product::new("Bread", Some(3.5)));
    assert_eq!(products[&second], Product::new("", Some(1.25)));

    drop(form);
    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_invalid_price_is_cleared_and_never_poisons_the_total() {
    let system = FormSystem::new(&LedgerConfig::default());
    let mut form = system.form(TableView::new());
    let row = form.start().await.unwrap();

    form.view_mut().type_into(row, InputField::Price, "2");
    form.on_input(row, InputField::Price).await.unwrap();
    assert_eq!(form.view().total(), Some(2.0));

    form.view_mut().type_into(row, InputField::Price, "abc");
    let result = form.on_input(row, InputField::Price).await;
    assert_eq!(
        result,
        Err(ProductError::InvalidNumericInput("abc".to_string()))
    );

    assert_eq!(
        form.view().input_value(row, InputField::Price),
        Some(String::new())
    );
    assert_eq!(form.view().total(), Some(0.0));
    let total = system.product_client.total_price().await.unwrap();
    assert!(total.is_finite());
    let products = system.product_client.products().await.unwrap();
    assert_eq!(products[&row].price, None);

    drop(form);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_huge_prices_cannot_overflow_the_total() {
    let system = FormSystem::new(&LedgerConfig::default());
    let mut form = system.form(TableView::new());
    let first = form.start().await.unwrap();
    let second = form.add_row().await.unwrap();

    for row in [first, second] {
        form.view_mut().type_into(row, InputField::Price, "1e308");
        assert_eq!(
            form.on_input(row, InputField::Price).await,
            Err(ProductError::InvalidNumericInput("1e308".to_string()))
        );
    }

    let total = system.product_client.total_price().await.unwrap();
    assert_eq!(total, 0.0);
    assert_eq!(form.view().total(), Some(0.0));
    assert!(!form.view().to_string().contains("inf"));

    for row in [first, second] {
        form.view_mut().type_into(row, InputField::Price, "1e12");
        form.on_input(row, InputField::Price).await.unwrap();
    }
    assert_eq!(system.product_client.total_price().await.unwrap(), 2e12);

    drop(form);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleting_the_last_row_recreates_an_empty_one() {
    let system = FormSystem::new(&LedgerConfig::default());
    let mut form = system.form(TableView::new());
    let row = form.start().await.unwrap();

    form.view_mut().type_into(row, InputField::Price, "9,99");
    form.on_input(row, InputField::Price).await.unwrap();

    let removed = form.delete_row().await.unwrap();
    assert_eq!(removed, row);

    // one fresh row, same id because the ledger was empty again
    assert_eq!(form.view().row_ids(), vec![id(1)]);
    assert_eq!(
        form.view().input_value(id(1), InputField::Price),
        Some(String::new())
    );
    assert_eq!(form.view().total(), Some(0.0));

    let products = system.product_client.products().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[&id(1)], Product::default());

    drop(form);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_button_removes_the_last_row_only() {
    let system = FormSystem::new(&LedgerConfig::default());
    let mut form = system.form(TableView::new());

    form.handle(FormEvent::Loaded).await.unwrap();
    form.handle(FormEvent::AddClicked).await.unwrap();
    form.handle(FormEvent::AddClicked).await.unwrap();

    form.view_mut().type_into(id(2), InputField::Price, "5");
    form.handle(FormEvent::Input {
        id: id(2),
        field: InputField::Price,
    })
    .await
    .unwrap();
    form.view_mut().type_into(id(3), InputField::Price, "1");
    form.handle(FormEvent::Input {
        id: id(3),
        field: InputField::Price,
    })
    .await
    .unwrap();
    assert_eq!(form.view().total(), Some(6.0));

    form.handle(FormEvent::DeleteClicked).await.unwrap();
    assert_eq!(form.view().row_ids(), vec![id(1), id(2)]);
    assert_eq!(form.view().total(), Some(5.0));

    // the next row reuses the freed id without colliding
    assert_eq!(form.add_row().await.unwrap(), id(3));

    drop(form);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_input_for_missing_row_is_unknown_product() {
    let system = FormSystem::new(&LedgerConfig::default());
    let mut form = system.form(TableView::new());
    form.start().await.unwrap();

    let result = form.on_input(id(4), InputField::Name).await;
    assert_eq!(result, Err(ProductError::UnknownProduct(id(4))));

    drop(form);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ledger_contract_through_the_client() {
    let system = FormSystem::new(&LedgerConfig::default());
    let client = &system.product_client;

    // sequential ids
    for expected in 1..=3 {
        assert_eq!(client.add_product().await.unwrap(), id(expected));
    }
    assert_eq!(client.total_price().await.unwrap(), 0.0);

    // add then remove restores the prior state
    client.edit_name(id(2), "Milk").await.unwrap();
    let before = client.products().await.unwrap();
    let added = client.add_product().await.unwrap();
    assert_eq!(client.remove_product().await.unwrap(), added);
    assert_eq!(client.products().await.unwrap(), before);

    // a never-created id is not silently created
    assert_eq!(
        client.edit_name(id(42), "Ghost").await,
        Err(ProductError::UnknownProduct(id(42)))
    );
    assert_eq!(client.products().await.unwrap().len(), 3);

    // drain, then one removal too many
    for _ in 0..3 {
        client.remove_product().await.unwrap();
    }
    assert!(client.products().await.unwrap().is_empty());
    assert_eq!(
        client.remove_product().await,
        Err(ProductError::EmptyLedgerRemoval)
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_buffer_config_starts_a_working_form() {
    let system = FormSystem::new(&LedgerConfig {
        buffer_size: 0,
        id_policy: IdPolicy::EntryCount,
    });
    let mut form = system.form(TableView::new());

    assert_eq!(form.start().await.unwrap(), id(1));
    assert_eq!(form.view().total(), Some(0.0));

    drop(form);
    system.shutdown().await.unwrap();
}
