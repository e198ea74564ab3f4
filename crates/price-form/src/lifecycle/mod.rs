//! # System Lifecycle
//!
//! Starts the product ledger, hands out forms bound to it and shuts it down again.
//!
//! ## Dependency Injection
//!
//! There is no global ledger. [`FormSystem::new`] constructs exactly one ledger actor and
//! keeps its [`ProductClient`]; every form built with [`FormSystem::form`] gets a clone of
//! that client. A view never reaches the ledger any other way.
//!
//! ```rust
//! use ledger_framework::LedgerConfig;
//! use price_form::lifecycle::FormSystem;
//! use price_form::view::TableView;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = FormSystem::new(&LedgerConfig::default());
//!     let mut form = system.form(TableView::new());
//!     form.start().await?;
//!
//!     // forms hold a client clone; release them before shutting down
//!     let view = form.into_view();
//!     assert_eq!(view.rows().len(), 1);
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the ledger channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the actor logs its final size and the task ends
//!
//! Shutdown only completes once every form built from the system has been dropped
//! (or turned back into its view with [`ProductForm::into_view`]).

use crate::clients::ProductClient;
use crate::form::ProductForm;
use crate::view::ProductView;
use ledger_framework::LedgerConfig;
use tracing::{error, info};

/// Owns the running product ledger.
pub struct FormSystem {
    /// Client for interacting with the product ledger
    pub product_client: ProductClient,

    /// Task handle of the ledger actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl FormSystem {
    /// Creates the product ledger and spawns its actor. Must be called inside a Tokio runtime.
    pub fn new(config: &LedgerConfig) -> Self {
        let (actor, client) = crate::product_ledger::new(config);
        let handle = tokio::spawn(actor.run());

        Self {
            product_client: ProductClient::new(client),
            handle,
        }
    }

    /// Builds a form controller over `view`, bound to this system's ledger.
    pub fn form<V: ProductView>(&self, view: V) -> ProductForm<V> {
        ProductForm::new(self.product_client.clone(), view)
    }

    /// Gracefully shuts down the ledger.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor stopped cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down form system...");

        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Ledger task failed: {:?}", e);
            return Err(format!("Ledger task failed: {:?}", e));
        }

        info!("Form system shutdown complete.");
        Ok(())
    }
}
