use blades_models::ItemRecord;
use rand::distributions::Alphanumeric;
use rand::Rng;

const ID_LENGTH: usize = 16;

/// Random 16-character alphanumeric identifier
pub fn random_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}

/// A blank item of `item_type`, named with a placeholder random id
pub fn new_owned_item(item_type: &str) -> ItemRecord {
    ItemRecord::new(random_id(), item_type, random_id())
}
