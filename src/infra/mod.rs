// ============================================================
// Infrastructure Layer
// ============================================================
// Cross-cutting concerns used by the application layer:
//
//   model_store.rs — Classifier persistence
//                    Writes the three trained classifiers and
//                    the TrainConfig as JSON into the model
//                    directory, and reads them back for parsing.
//
//   metrics.rs     — Evaluation reports
//                    Per-label precision / recall / F1 over a
//                    held-out corpus, appended to metrics.csv.

/// Classifier and config saving and loading
pub mod model_store;

/// Classification reports and the metrics CSV logger
pub mod metrics;
