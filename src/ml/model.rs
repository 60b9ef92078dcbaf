// ============================================================
// Probabilistic Model
// ============================================================
// The fittable model behind a TextClassifier. Anything that can
// learn from sparse feature vectors labelled with class indices
// and then score a vector against every class fits the seam.
//
// MultinomialNb is the shipped implementation:
//
//   prior(c)        = ln(count(c) / n)
//   likelihood(t|c) = ln((fc(t) + α) / (Σ fc + α · |V|))
//   score(x, c)     = prior(c) + Σ x(t) · likelihood(t|c)
//
// Scores are normalised with a log-sum-exp softmax. A class
// with no training samples has prior -inf and always scores 0.
// Raw class counts are stored instead of log priors since JSON
// has no representation for -inf.

use anyhow::{bail, ensure, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::ml::vectorizer::SparseVector;

/// A classification model fitted on sparse vectors.
pub trait ProbabilisticModel: Serialize + DeserializeOwned {
    /// Fit on `samples` where `targets[i]` is the class index of `samples[i]`.
    fn fit(
        &mut self,
        samples:    &[SparseVector],
        targets:    &[usize],
        n_classes:  usize,
        n_features: usize,
    ) -> Result<()>;

    /// Probability of every class, summing to 1 for a fitted model
    fn predict_proba(&self, sample: &SparseVector) -> Vec<f64>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    alpha:            f64,
    class_count:      Vec<f64>,
    /// [class][feature]
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            class_count:      Vec::new(),
            feature_log_prob: Vec::new(),
        }
    }
}

impl Default for MultinomialNb {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ProbabilisticModel for MultinomialNb {
    fn fit(
        &mut self,
        samples:    &[SparseVector],
        targets:    &[usize],
        n_classes:  usize,
        n_features: usize,
    ) -> Result<()> {
        ensure!(!samples.is_empty(), "cannot fit a model on zero samples");
        ensure!(
            samples.len() == targets.len(),
            "{} samples but {} targets",
            samples.len(),
            targets.len()
        );
        if self.alpha <= 0.0 || !self.alpha.is_finite() {
            bail!("smoothing alpha must be positive, got {}", self.alpha);
        }

        let mut class_count   = vec![0.0f64; n_classes];
        let mut feature_count = vec![vec![0.0f64; n_features]; n_classes];

        for (sample, &target) in samples.iter().zip(targets) {
            ensure!(target < n_classes, "target {target} out of range for {n_classes} classes");
            class_count[target] += 1.0;
            for (feature, weight) in sample.iter() {
                ensure!(feature < n_features, "feature {feature} out of range");
                feature_count[target][feature] += weight;
            }
        }

        self.class_count = class_count;

        self.feature_log_prob = feature_count
            .iter()
            .map(|counts| {
                let total = counts.iter().sum::<f64>() + self.alpha * n_features as f64;
                counts.iter().map(|&fc| ((fc + self.alpha) / total).ln()).collect()
            })
            .collect();

        tracing::debug!(
            "MultinomialNb fitted: {} samples, {} classes, {} features",
            samples.len(),
            n_classes,
            n_features
        );
        Ok(())
    }

    fn predict_proba(&self, sample: &SparseVector) -> Vec<f64> {
        let n = self.class_count.iter().sum::<f64>();
        let joint: Vec<f64> = self
            .class_count
            .iter()
            .map(|&c| (c / n).ln())
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                prior
                    + sample
                        .iter()
                        .filter_map(|(f, w)| log_probs.get(f).map(|lp| w * lp))
                        .sum::<f64>()
            })
            .collect();

        softmax(&joint)
    }
}

/// Log-sum-exp normalisation of joint log likelihoods
fn softmax(joint: &[f64]) -> Vec<f64> {
    let max = joint.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return vec![0.0; joint.len()];
    }
    let exp: Vec<f64> = joint.iter().map(|&j| (j - max).exp()).collect();
    let sum: f64      = exp.iter().sum();
    exp.into_iter().map(|e| e / sum).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn vector(entries: &[(usize, f64)]) -> SparseVector {
        SparseVector { entries: entries.to_vec() }
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let mut nb = MultinomialNb::default();
        nb.fit(
            &[vector(&[(0, 1.0)]), vector(&[(1, 1.0)])],
            &[0, 1],
            2,
            2,
        )
        .unwrap();

        let p = nb.predict_proba(&vector(&[(0, 1.0)]));
        assert_eq!(p.len(), 2);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(p[0] > p[1]);
    }

    #[test]
    fn test_empty_class_scores_zero() {
        let mut nb = MultinomialNb::default();
        nb.fit(&[vector(&[(0, 1.0)])], &[0], 2, 1).unwrap();

        let p = nb.predict_proba(&vector(&[(0, 1.0)]));
        assert_eq!(p, vec![1.0, 0.0]);
    }

    #[test]
    fn test_zero_vector_falls_back_to_prior() {
        let mut nb = MultinomialNb::default();
        nb.fit(
            &[vector(&[(0, 1.0)]), vector(&[(0, 1.0)]), vector(&[(1, 1.0)])],
            &[0, 0, 1],
            2,
            2,
        )
        .unwrap();

        let p = nb.predict_proba(&SparseVector::default());
        assert!((p[0] - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_rejects_bad_input() {
        let mut nb = MultinomialNb::default();
        assert!(nb.fit(&[], &[], 2, 2).is_err());
        assert!(nb.fit(&[vector(&[(0, 1.0)])], &[0, 1], 2, 2).is_err());
        assert!(nb.fit(&[vector(&[(0, 1.0)])], &[5], 2, 2).is_err());

        let mut unsmoothed = MultinomialNb::new(0.0);
        assert!(unsmoothed.fit(&[vector(&[(0, 1.0)])], &[0], 1, 1).is_err());
    }

    #[test]
    fn test_unfitted_model_predicts_nothing() {
        let nb = MultinomialNb::default();
        assert!(nb.predict_proba(&vector(&[(0, 1.0)])).is_empty());
    }
}
