pub mod clock;
pub mod item;
pub mod schema;

pub use clock::ClockSpec;
pub use item::ItemRecord;
pub use schema::{AttributeDef, AttributeSchema, SkillDef};
