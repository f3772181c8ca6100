use axum::Json;
use ministry_match_catalog::{
    NaturalAbility, SpiritualGift, CATALOG_VERSION, NATURAL_ABILITIES, SPIRITUAL_GIFTS,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct GiftCatalog {
    pub version: u32,
    pub gifts: &'static [SpiritualGift],
}

#[derive(Serialize)]
pub struct AbilityCatalog {
    pub version: u32,
    pub abilities: &'static [NaturalAbility],
}

pub async fn gifts() -> Json<GiftCatalog> {
    Json(GiftCatalog {
        version: CATALOG_VERSION,
        gifts: &SPIRITUAL_GIFTS,
    })
}

pub async fn abilities() -> Json<AbilityCatalog> {
    Json(AbilityCatalog {
        version: CATALOG_VERSION,
        abilities: NATURAL_ABILITIES,
    })
}
