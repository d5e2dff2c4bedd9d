//! Cross-item consistency: per-category variance of raw values converted to
//! a 0–100 figure (the second insight that re-reads the raw answers).
//!
//! Max population variance on a 1–5 scale is 4 (values split between the
//! endpoints), which anchors the conversion.

use serde::Serialize;

use crate::catalog::{Answer, QuestionCatalog, QuestionCategory};

/// Variance anchor: ((5−1)/2)² = 4.
const MAX_VARIANCE: f64 = 4.0;

/// Consistency figure for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryConsistency {
    pub category: QuestionCategory,
    /// 0–100; higher = steadier responding within the category.
    pub consistency: f64,
    pub samples: usize,
}

/// Per-category breakdown with the extremes surfaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyBreakdown {
    /// Categories with at least two resolved answers, in category order.
    pub categories: Vec<CategoryConsistency>,
    pub weakest: Option<QuestionCategory>,
    pub strongest: Option<QuestionCategory>,
}

pub fn consistency_breakdown(catalog: &QuestionCatalog, answers: &[Answer]) -> ConsistencyBreakdown {
    let mut buckets: [Vec<f64>; 10] = Default::default();
    for answer in answers {
        let Some((question, option)) = catalog.resolve(answer) else {
            continue;
        };
        let idx = QuestionCategory::ALL
            .iter()
            .position(|c| *c == question.category)
            .expect("category in ALL");
        buckets[idx].push(option.value);
    }

    let categories: Vec<CategoryConsistency> = QuestionCategory::ALL
        .into_iter()
        .enumerate()
        .filter_map(|(i, category)| {
            let values = &buckets[i];
            // One answer has no spread to measure.
            if values.len() < 2 {
                return None;
            }
            let n = values.len() as f64;
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            let consistency =
                ((100.0 * (1.0 - variance / MAX_VARIANCE)).clamp(0.0, 100.0) * 10.0).round() / 10.0;
            Some(CategoryConsistency {
                category,
                consistency,
                samples: values.len(),
            })
        })
        .collect();

    let weakest = categories
        .iter()
        .min_by(|a, b| a.consistency.partial_cmp(&b.consistency).unwrap_or(std::cmp::Ordering::Equal))
        .map(|c| c.category);
    let strongest = categories
        .iter()
        .max_by(|a, b| {
            a.consistency
                .partial_cmp(&b.consistency)
                .unwrap_or(std::cmp::Ordering::Equal)
                // Prefer the earlier category on ties.
                .then(b.category.cmp(&a.category))
        })
        .map(|c| c.category);

    ConsistencyBreakdown {
        categories,
        weakest,
        strongest,
    }
}
