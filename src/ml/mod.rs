// ============================================================
// ML Layer
// ============================================================
// Line classification, from strings to labels:
//
//   vectorizer.rs — term counts weighted by smoothed IDF,
//                   L2-normalised sparse vectors
//
//   model.rs      — the ProbabilisticModel seam and the
//                   multinomial naive Bayes behind it
//
//   classifier.rs — TextClassifier: vectorizer + model trained
//                   on a labelled corpus, saved as JSON
//
//   trainer.rs    — fits the line, header and work classifiers
//                   from bulk records
//
// Nothing here knows about résumé layout. Sections, headers and
// clustering live in the analysis layer.

/// TF-IDF vectorizer
pub mod vectorizer;

/// Fittable probabilistic models
pub mod model;

/// Label-group text classifier
pub mod classifier;

/// Trains the classifier set
pub mod trainer;
