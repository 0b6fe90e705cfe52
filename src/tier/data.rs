//! Bundled tier-3 honing table.

use super::types::{EquipmentType, Enhancement, HoningTier, Material};
use crate::constants::{DEFAULT_ARTISAN_CAP, DEFAULT_BOOK_RATE_PERMYRIA};

fn armor_tier(
    base_item_level: u32,
    next_item_level: u32,
    base_level: u8,
    base_rate_permyria: u32,
    cost: Vec<Material>,
) -> HoningTier {
    HoningTier {
        base_item_level,
        next_item_level,
        tier: 3,
        base_level,
        equipment_type: EquipmentType::Armor,
        base_rate_permyria,
        cost,
        enhancements: Vec::new(),
        max_enhancement_rate_permyria: 0,
        book_id: None,
        book_rate_permyria: DEFAULT_BOOK_RATE_PERMYRIA,
        artisan_cap: DEFAULT_ARTISAN_CAP,
    }
}

/// Returns every tier in the bundled table.
pub fn all_tiers() -> Vec<HoningTier> {
    vec![
        // +0 -> +3: guaranteed
        armor_tier(
            1302,
            1304,
            0,
            10000,
            vec![
                Material::new("guardian-stone-crystal-0", 82),
                Material::new("honor-shard", 22),
                Material::new("honor-leapstone-2", 2),
                Material::new("silver", 11100),
            ],
        ),
        armor_tier(
            1304,
            1307,
            1,
            10000,
            vec![
                Material::new("guardian-stone-crystal-0", 82),
                Material::new("honor-shard", 22),
                Material::new("honor-leapstone-2", 2),
                Material::new("silver", 11380),
            ],
        ),
        armor_tier(
            1307,
            1310,
            2,
            10000,
            vec![
                Material::new("guardian-stone-crystal-0", 82),
                Material::new("honor-shard", 22),
                Material::new("honor-leapstone-2", 2),
                Material::new("silver", 11660),
            ],
        ),
        armor_tier(
            1310,
            1315,
            3,
            10000,
            vec![
                Material::new("guardian-stone-crystal-0", 120),
                Material::new("honor-shard", 32),
                Material::new("honor-leapstone-2", 4),
                Material::new("simple-oreha-fusion-material-1", 2),
                Material::new("silver", 11960),
            ],
        ),
        // +6 -> +7: first step with boosters
        HoningTier {
            enhancements: vec![
                Enhancement::new("solar-grace-1", 125, 24),
                Enhancement::new("solar-blessing-2", 250, 12),
                Enhancement::new("solar-protection-3", 750, 4),
            ],
            max_enhancement_rate_permyria: 4000,
            book_id: Some("tailoring-basic-mending-3".to_string()),
            ..armor_tier(
                1325,
                1330,
                6,
                6000,
                vec![
                    Material::new("guardian-stone-crystal-0", 156),
                    Material::new("honor-shard", 42),
                    Material::new("honor-leapstone-2", 4),
                    Material::new("simple-oreha-fusion-material-1", 4),
                    Material::new("silver", 12840),
                    Material::new("gold", 70),
                ],
            )
        },
    ]
}

/// Look up the tier that starts at `item_level` for the given equipment type.
pub fn find_tier(item_level: u32, equipment_type: EquipmentType) -> Option<HoningTier> {
    all_tiers()
        .into_iter()
        .find(|t| t.base_item_level == item_level && t.equipment_type == equipment_type)
}
