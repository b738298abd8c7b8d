use crate::model::ShoppingItem;

fn next_id(items: &[ShoppingItem]) -> u32 {
    items.iter().map(|i| i.id).max().map_or(1, |max| max + 1)
}

/// Append `candidate` with a freshly assigned id and return that id.
pub fn add_item(items: &mut Vec<ShoppingItem>, mut candidate: ShoppingItem) -> u32 {
    let id = next_id(items);
    candidate.id = id;
    items.push(candidate);
    id
}

/// Remove the item with the given id. Missing ids are a silent no-op.
pub fn delete_item(items: &mut Vec<ShoppingItem>, id: u32) {
    items.retain(|i| i.id != id);
}

/// Replace the item carrying `updated.id` by full value substitution.
/// Missing ids are a silent no-op.
pub fn update_item(items: &mut [ShoppingItem], updated: ShoppingItem) {
    if let Some(slot) = items.iter_mut().find(|i| i.id == updated.id) {
        *slot = updated;
    }
}

/// Sum of `price * quantity` over all items; 0 for an empty list.
pub fn total_price(items: &[ShoppingItem]) -> f64 {
    items.iter().map(|i| i.price * i.quantity).sum()
}
