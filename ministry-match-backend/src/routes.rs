pub mod assessments;
pub mod catalog;
pub mod matches;
pub mod opportunities;

use crate::error::AppError;

/// Referential validity check for opportunity payloads: every gift key must
/// name a catalog gift and every ability key a catalog ability. The scorer
/// itself stays permissive; this is the calling layer rejecting malformed
/// records before they are stored.
pub(crate) fn validate_opportunity_keys(
    new: &ministry_match_store::NewOpportunity,
) -> Result<(), AppError> {
    let gift_keys = new.required_gifts.iter().chain(new.preferred_gifts.iter());
    for key in gift_keys {
        if ministry_match_catalog::gift_by_key(key).is_none() {
            return Err(AppError::UnknownAttributeKey(key.clone()));
        }
    }
    let ability_keys = new
        .required_abilities
        .iter()
        .chain(new.preferred_abilities.iter());
    for key in ability_keys {
        if ministry_match_catalog::ability_by_key(key).is_none() {
            return Err(AppError::UnknownAttributeKey(key.clone()));
        }
    }
    Ok(())
}
