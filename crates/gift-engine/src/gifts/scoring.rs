use super::catalog::GiftCatalog;
use super::domain::{Answer, GiftScores, KeyPolicy, MAX_RATING, MIN_RATING};
use super::error::{AnswerViolation, AssessmentError};
use std::cmp::Ordering;

const SCORE_PRECISION: f64 = 10_000.0;

/// An answer whose rating and weights have been checked and whose keys are
/// resolved to catalog positions.
struct ResolvedAnswer {
    index: usize,
    rating: f64,
    weights: Vec<(usize, f64)>,
}

/// Scores every catalog category against the answers. The result always
/// contains one entry per category and sums to 1.0 at four decimal places,
/// except for the equal-share fallback when nothing carries positive weight.
pub fn compute_scores(
    catalog: &GiftCatalog,
    answers: &[Answer],
    policy: KeyPolicy,
) -> Result<GiftScores, AssessmentError> {
    let resolved = answers
        .iter()
        .enumerate()
        .map(|(index, answer)| resolve_answer(catalog, index, answer, policy))
        .collect::<Result<Vec<_>, _>>()?;

    let normalized = normalize(catalog, &resolved)?;
    Ok(distribute(catalog, &normalized))
}

fn resolve_answer(
    catalog: &GiftCatalog,
    index: usize,
    answer: &Answer,
    policy: KeyPolicy,
) -> Result<ResolvedAnswer, AssessmentError> {
    let invalid = |violation| AssessmentError::InvalidAnswer { index, violation };

    if !(MIN_RATING..=MAX_RATING).contains(&answer.rating) {
        return Err(invalid(AnswerViolation::RatingOutOfRange(answer.rating)));
    }

    // One weight per category. When several spellings of a key resolve to the
    // same category, the catalog spelling wins, otherwise the last in key order.
    let mut weights: Vec<(usize, f64, bool)> = Vec::with_capacity(answer.correlation.len());
    for (key, &weight) in &answer.correlation {
        if !weight.is_finite() || weight < 0.0 {
            return Err(invalid(AnswerViolation::InvalidWeight {
                key: key.clone(),
                weight,
            }));
        }
        if !(weight * f64::from(MAX_RATING)).is_finite() {
            return Err(invalid(AnswerViolation::WeightOverflow(key.clone())));
        }

        let position = match (catalog.position(key), policy) {
            (Some(position), _) => position,
            (None, KeyPolicy::Lenient) => continue,
            (None, KeyPolicy::Strict) => {
                return Err(invalid(AnswerViolation::UnknownKey(key.clone())))
            }
        };
        let exact = catalog.gifts()[position].key == *key;
        match weights.iter_mut().find(|(seen, _, _)| *seen == position) {
            Some(entry) if exact || !entry.2 => *entry = (position, weight, exact),
            Some(_) => {}
            None => weights.push((position, weight, exact)),
        }
    }

    Ok(ResolvedAnswer {
        index,
        rating: f64::from(answer.rating),
        weights: weights
            .into_iter()
            .map(|(position, weight, _)| (position, weight))
            .collect(),
    })
}

/// Each category scaled against its own best possible total.
fn normalize(
    catalog: &GiftCatalog,
    answers: &[ResolvedAnswer],
) -> Result<Vec<f64>, AssessmentError> {
    let categories = catalog.len();
    let mut raw = vec![0.0; categories];
    let mut max_possible = vec![0.0; categories];

    for answer in answers {
        for &(position, weight) in &answer.weights {
            raw[position] += answer.rating * weight;
            max_possible[position] += f64::from(MAX_RATING) * weight;
            if !max_possible[position].is_finite() {
                return Err(AssessmentError::InvalidAnswer {
                    index: answer.index,
                    violation: AnswerViolation::WeightOverflow(
                        catalog.gifts()[position].key.clone(),
                    ),
                });
            }
        }
    }

    Ok(raw
        .iter()
        .zip(&max_possible)
        .map(|(raw, max)| if *max > 0.0 { raw / max } else { 0.0 })
        .collect())
}

fn distribute(catalog: &GiftCatalog, normalized: &[f64]) -> GiftScores {
    let gifts = catalog.gifts();
    let mut scores = GiftScores::default();
    let total: f64 = normalized.iter().sum();

    if total <= 0.0 {
        let equal_share = round_share(1.0 / gifts.len() as f64);
        for gift in gifts {
            scores.insert(gift.key.clone(), equal_share);
        }
        return scores;
    }

    let order = rank_by_score(catalog, normalized);
    let Some((&last, leading)) = order.split_last() else {
        return scores;
    };

    let mut shares = Vec::with_capacity(order.len());
    let mut running_total = 0.0;
    for &position in leading {
        let share = round_share(normalized[position] / total);
        running_total += share;
        shares.push((position, share));
    }

    // The lowest-ranked category absorbs the rounding remainder. When rounding
    // overshoots 1.0 the shortfall comes out of the largest share instead, so
    // no share goes negative.
    let remainder = round_share(1.0 - running_total);
    match shares.first_mut() {
        Some((_, largest)) if remainder < 0.0 => {
            *largest = round_share(*largest + remainder);
            shares.push((last, 0.0));
        }
        _ => shares.push((last, remainder)),
    }

    for (position, share) in shares {
        scores.insert(gifts[position].key.clone(), share);
    }
    scores
}

/// Catalog positions ordered by score descending, then key ascending.
fn rank_by_score(catalog: &GiftCatalog, values: &[f64]) -> Vec<usize> {
    let gifts = catalog.gifts();
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| match values[b].total_cmp(&values[a]) {
        Ordering::Equal => gifts[a].key.cmp(&gifts[b].key),
        other => other,
    });
    order
}

pub(crate) fn round_share(value: f64) -> f64 {
    (value * SCORE_PRECISION).round() / SCORE_PRECISION
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gifts::catalog::GiftProfile;

    #[test]
    fn round_share_keeps_four_decimals() {
        assert_eq!(round_share(1.0 / 7.0), 0.1429);
        assert_eq!(round_share(2.0 / 3.0), 0.6667);
        assert_eq!(round_share(0.0), 0.0);
    }

    #[test]
    fn normalize_scales_each_category_independently() {
        let catalog = GiftCatalog::new(
            ["A", "B", "C"]
                .into_iter()
                .map(|key| GiftProfile::new(key, key, "", ""))
                .collect(),
        )
        .expect("catalog valid");
        let answers = vec![
            ResolvedAnswer {
                index: 0,
                rating: 5.0,
                weights: vec![(0, 0.2)],
            },
            ResolvedAnswer {
                index: 1,
                rating: 1.0,
                weights: vec![(1, 1.0)],
            },
        ];

        let normalized = normalize(&catalog, &answers).expect("finite sums");

        assert_eq!(normalized[0], 1.0);
        assert!((normalized[1] - 0.2).abs() < 1e-12);
        assert_eq!(normalized[2], 0.0);
    }
}
