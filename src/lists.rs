use crate::model::ShoppingList;

fn next_id(lists: &[ShoppingList]) -> u32 {
    lists.iter().map(|l| l.id).max().map_or(1, |max| max + 1)
}

/// Append `candidate` with a freshly assigned id and return that id.
/// Whatever id the caller put on the candidate is overwritten.
pub fn add_list(lists: &mut Vec<ShoppingList>, mut candidate: ShoppingList) -> u32 {
    let id = next_id(lists);
    candidate.id = id;
    lists.push(candidate);
    id
}

/// Remove the list with the given id. Missing ids are a silent no-op.
pub fn delete_list(lists: &mut Vec<ShoppingList>, id: u32) {
    lists.retain(|l| l.id != id);
}

/// Replace the list carrying `updated.id` by full value substitution.
/// Missing ids are a silent no-op.
pub fn update_list(lists: &mut [ShoppingList], updated: ShoppingList) {
    if let Some(slot) = lists.iter_mut().find(|l| l.id == updated.id) {
        *slot = updated;
    }
}

/// Change only the name of the matching list.
pub fn rename_list(lists: &mut [ShoppingList], id: u32, new_name: &str) {
    if let Some(list) = lists.iter_mut().find(|l| l.id == id) {
        list.name = new_name.to_string();
    }
}

/// Case-insensitive substring filter on list names, order-preserving.
/// An empty query matches everything.
pub fn search<'a>(lists: &'a [ShoppingList], query: &str) -> Vec<&'a ShoppingList> {
    let needle = query.to_lowercase();
    lists
        .iter()
        .filter(|l| l.name.to_lowercase().contains(&needle))
        .collect()
}
