//! Data transfer objects exchanged with the catalog API

mod catalog;

pub use catalog::{
    capitalize, CatalogEntry, CatalogPage, CreatureDetail, NamedResource, Sprites, TypeSlot,
    SPRITE_BASE_URL,
};
