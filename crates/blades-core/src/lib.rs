pub mod catalog;
pub mod clock;
pub mod duplicates;
pub mod labels;
pub mod nested;
pub mod new_item;

pub use catalog::{all_items_by_type, CatalogError};
pub use clock::{clock_asset_key, clock_asset_path, clock_size_options, clock_to_data_uri, recolor_svg, svg_data_uri, ClockError};
pub use duplicates::{compute_duplicates, DuplicatePolicy};
pub use labels::{attribute_label, is_action, is_attribute, roll_label};
pub use nested::{get_nested, get_nested_mut, NestedProperty, PropertyResolutionError};
pub use new_item::{new_owned_item, random_id};
