use uuid::Uuid;

use crate::domain::repository::FoundItemRepository;
use crate::domain::types::{ClaimantDetails, ClaimedItem};
use crate::error::CatalogServiceError;

fn require(value: &str, field: &'static str) -> Result<(), CatalogServiceError> {
    if value.trim().is_empty() {
        return Err(CatalogServiceError::MissingClaimField(field));
    }
    Ok(())
}

/// Transition a found item from the active pool to the claimed set.
///
/// Two states, one transition: the repository's `claim` performs the
/// fetch, guarded delete and claimed-row insert in a single transaction, so
/// that, of any number of concurrent claims on one item, exactly one
/// succeeds.
/// Deliberately open: nothing ties the claimant to the original reporter,
/// anyone with the item id and the required fields may claim.
pub struct SubmitClaimUseCase<F: FoundItemRepository> {
    pub items: F,
}

impl<F: FoundItemRepository> SubmitClaimUseCase<F> {
    pub async fn execute(
        &self,
        item_id: Uuid,
        claimant: ClaimantDetails,
    ) -> Result<ClaimedItem, CatalogServiceError> {
        // Validation fails fast with no state change.
        require(&claimant.details, "details")?;
        require(&claimant.name, "name")?;
        require(&claimant.email, "email")?;
        require(&claimant.sap_id, "sapId")?;
        require(&claimant.contact_number, "contactNumber")?;

        self.items
            .claim(item_id, claimant)
            .await?
            .ok_or(CatalogServiceError::ItemNotFound)
    }
}
