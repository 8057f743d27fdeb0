use crate::models::{Pot, Sprinkler};

/// Feed a freshly watered pot from the sprinkler's Enricher.
///
/// Applies only when every link is present:
/// - the sprinkler holds an attachment named `Enricher`
/// - that attachment has an inventory whose first stack still has units
/// - the pot's soil has no fertilizer yet
///
/// On success the first stack's item id goes into the soil and the stack
/// loses exactly one unit; the applied id is returned. An emptied stack is
/// left in the inventory for the host to clean up.
pub fn try_fertilize(pot: &mut Pot, sprinkler: &mut Sprinkler) -> Option<String> {
    let Some(enricher) = sprinkler.enricher_mut() else {
        tracing::trace!("no Enricher attached");
        return None;
    };

    let Some(stack) = enricher.inventory.as_mut().and_then(|inv| inv.first_mut()) else {
        tracing::trace!("Enricher inventory is empty");
        return None;
    };

    if stack.is_depleted() {
        tracing::trace!(item = %stack.item_id, "Enricher stack is used up");
        return None;
    }

    if pot.soil.is_fertilized() {
        return None;
    }

    let item_id = stack.item_id.clone();
    if !stack.consume_one() {
        return None;
    }
    pot.soil.fertilizer = Some(item_id.clone());

    tracing::debug!(item = %item_id, remaining = stack.stack, "Fertilized pot from Enricher");
    Some(item_id)
}
