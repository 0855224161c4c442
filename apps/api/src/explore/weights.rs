use crate::errors::AppError;
use crate::explore::fit_scoring::ScoringParams;
use crate::models::session::ObsessionWeights;

/// Rebuilds the weight map for the active interests.
///
/// Every active interest gets an entry (neutral unless the caller supplied one).
/// Weights for interests no longer active are dropped. Supplied keys are
/// normalized like interests (trimmed, lowercased), so `"Sport"` weighs `sport`.
/// Supplied weights must be finite and inside `[min_weight, max_weight]`.
pub fn build_weights(
    interests: &[String],
    supplied: &ObsessionWeights,
    params: &ScoringParams,
) -> Result<ObsessionWeights, AppError> {
    let supplied = normalize_keys(supplied)?;
    interests
        .iter()
        .map(|interest| {
            let weight = supplied
                .get(interest)
                .copied()
                .unwrap_or(params.neutral_weight);
            if !weight.is_finite() || weight < params.min_weight || weight > params.max_weight {
                return Err(AppError::Validation(format!(
                    "weight for '{interest}' must be between {} and {}, got {weight}",
                    params.min_weight, params.max_weight
                )));
            }
            Ok((interest.clone(), weight))
        })
        .collect()
}

/// Two keys that collapse to the same interest must agree on the weight.
fn normalize_keys(supplied: &ObsessionWeights) -> Result<ObsessionWeights, AppError> {
    let mut normalized = ObsessionWeights::with_capacity(supplied.len());
    for (key, &weight) in supplied {
        let interest = key.trim().to_lowercase();
        match normalized.get(&interest) {
            Some(&existing) if existing.to_bits() != weight.to_bits() => {
                return Err(AppError::Validation(format!(
                    "conflicting weights for '{interest}': {existing} and {weight}"
                )));
            }
            _ => {
                normalized.insert(interest, weight);
            }
        }
    }
    Ok(normalized)
}
