/**
 * RecoEval
 * Copyright (C) 2026 RecoEval contributors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use std::cmp::Ordering;

use crate::errors::EvalError;

/// Fraction of the first `k` positions that are positive in both vectors,
/// assuming position order already reflects descending predicted rank.
/// Expects binary (0/1) inputs; this is the per-prefix building block of
/// `average_precision_at_k`.
pub fn precision_at_k(prediction: &[f64], truth: &[f64], k: usize) -> Result<f64, EvalError> {

    check_dimensions(prediction, truth, k)?;

    let hits: f64 = prediction[..k]
        .iter()
        .zip(truth[..k].iter())
        .map(|(predicted, actual)| predicted * actual)
        .sum();

    Ok(hits / k as f64)
}

/// Average precision over the top `k` positions. We binarize both vectors at
/// `threshold` and rank the index-aligned pairs by descending prediction
/// value before accumulating the per-prefix precisions.
pub fn average_precision_at_k(
    prediction: &[f64],
    truth: &[f64],
    k: usize,
    threshold: f64,
) -> Result<f64, EvalError> {

    check_dimensions(prediction, truth, k)?;

    let binarized_prediction: Vec<f64> =
        prediction.iter().map(|&value| binarize(value, threshold)).collect();
    let binarized_truth: Vec<f64> =
        truth.iter().map(|&value| binarize(value, threshold)).collect();

    let pairs = ranked_pairs(&binarized_prediction, &binarized_truth);

    let predictions: Vec<f64> = pairs.iter().take(k).map(|pair| pair.0).collect();
    let truths: Vec<f64> = pairs.iter().take(k).map(|pair| pair.1).collect();

    let mut total = 0.0;
    for prefix in 1..=k {
        total += truths[prefix - 1] * precision_at_k(&predictions, &truths, prefix)?;
    }

    Ok(total / k as f64)
}

/// Normalized discounted cumulative gain over the top `k` positions. The
/// gains follow the predicted ranking; the normalizer is the DCG of the
/// ideal ranking of `truth` itself. Fails with `DegenerateInput` when the
/// ideal DCG is zero, which happens for an all-zero truth vector.
pub fn ndcg_at_k(prediction: &[f64], truth: &[f64], k: usize) -> Result<f64, EvalError> {

    check_dimensions(prediction, truth, k)?;

    let pairs = ranked_pairs(prediction, truth);
    let ranked_gains: Vec<f64> = pairs.iter().take(k).map(|pair| pair.1).collect();

    let mut ideal_gains = truth.to_vec();
    ideal_gains.sort_unstable_by(|gain_a, gain_b| {
        gain_b.partial_cmp(gain_a).unwrap_or(Ordering::Equal)
    });

    let dcg = discounted_cumulative_gain(&ranked_gains);
    let ideal_dcg = discounted_cumulative_gain(&ideal_gains[..k]);

    if ideal_dcg == 0.0 {
        return Err(EvalError::DegenerateInput(
            "the ideal DCG of the truth vector is zero".to_string(),
        ));
    }

    Ok(dcg / ideal_dcg)
}

fn binarize(value: f64, threshold: f64) -> f64 {
    if value >= threshold {
        1.0
    } else {
        0.0
    }
}

/// Pairs `prediction[i]` with `truth[i]` and sorts by descending prediction
/// value. Equal predictions are ordered by descending truth value, the rule
/// callers rely on when predicted scores collide.
fn ranked_pairs(prediction: &[f64], truth: &[f64]) -> Vec<(f64, f64)> {

    let mut pairs: Vec<(f64, f64)> = prediction
        .iter()
        .cloned()
        .zip(truth.iter().cloned())
        .collect();

    pairs.sort_unstable_by(cmp_pairs_descending);

    pairs
}

/// Descending order on (prediction, truth) pairs. There is no total order on
/// floating point numbers, so incomparable values count as equal and fall
/// through to the truth column.
fn cmp_pairs_descending(pair_a: &(f64, f64), pair_b: &(f64, f64)) -> Ordering {
    match pair_b.0.partial_cmp(&pair_a.0) {
        Some(Ordering::Equal) | None => {
            pair_b.1.partial_cmp(&pair_a.1).unwrap_or(Ordering::Equal)
        },
        Some(ordering) => ordering,
    }
}

/// `sum over positions p of (2^gain_p - 1) / log2(p + 1)`, positions counted
/// from one.
fn discounted_cumulative_gain(gains: &[f64]) -> f64 {
    gains
        .iter()
        .enumerate()
        .map(|(position, &gain)| (gain.exp2() - 1.0) / ((position + 2) as f64).log2())
        .sum()
}

fn check_dimensions(prediction: &[f64], truth: &[f64], k: usize) -> Result<(), EvalError> {

    if prediction.len() != truth.len() {
        return Err(EvalError::InvalidArgument(format!(
            "prediction and truth must have the same length, got {} and {}",
            prediction.len(),
            truth.len(),
        )));
    }

    if k == 0 || k > truth.len() {
        return Err(EvalError::InvalidArgument(format!(
            "cutoff must lie in [1, {}], got {}",
            truth.len(),
            k,
        )));
    }

    Ok(())
}
