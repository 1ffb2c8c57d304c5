//! Weapon vocabulary: categories, properties and damage.

use crate::types::closed_set::closed_enum;

closed_enum! {
    /// Weapon category: training level crossed with range.
    pub enum WeaponType("weapon type") {
        SimpleRange = "SIMPLE_RANGE",
        SimpleMelee = "SIMPLE_MELEE",
        MartialRange = "MARTIAL_RANGE",
        MartialMelee = "MARTIAL_MELEE",
    }
}

impl WeaponType {
    pub fn is_martial(&self) -> bool {
        matches!(self, WeaponType::MartialRange | WeaponType::MartialMelee)
    }

    pub fn is_ranged(&self) -> bool {
        matches!(self, WeaponType::SimpleRange | WeaponType::MartialRange)
    }
}

closed_enum! {
    /// Name of a weapon property. Decides which optional property fields apply.
    pub enum WeaponPropertyName("weapon property") {
        Ammunition = "AMMUNITION",
        Distance = "DISTANCE",
        Finesse = "FINESSE",
        Heavy = "HEAVY",
        Light = "LIGHT",
        Loading = "LOADING",
        Special = "SPECIAL",
        Thrown = "THROWN",
        TwoHanded = "TWO_HANDED",
        Versatile = "VERSATILE",
    }
}

impl WeaponPropertyName {
    /// Whether `base_range` / `max_range` belong to this property.
    pub fn takes_range(&self) -> bool {
        matches!(self, WeaponPropertyName::Ammunition)
    }

    /// Whether `second_hand_dice` belongs to this property.
    pub fn takes_second_hand_dice(&self) -> bool {
        matches!(self, WeaponPropertyName::Versatile)
    }
}

closed_enum! {
    pub enum DamageType("damage type") {
        Acid = "ACID",
        Bludgeoning = "BLUDGEONING",
        Cold = "COLD",
        Fire = "FIRE",
        Force = "FORCE",
        Lightning = "LIGHTNING",
        Necrotic = "NECROTIC",
        Piercing = "PIERCING",
        Poison = "POISON",
        Psychic = "PSYCHIC",
        Radiant = "RADIANT",
        Slashing = "SLASHING",
        Thunder = "THUNDER",
    }
}
