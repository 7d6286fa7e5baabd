// Composition root.
//
// - Build the stores the configuration asks for.
// - Wire them into the reconciler, ledger and aggregator.
// - Expose everything over the HTTP router.

pub mod http;
pub mod state;
