//! Creature taxonomy used by races.

use crate::types::closed_set::closed_enum;

closed_enum! {
    pub enum CreatureType("creature type") {
        Aberration = "ABERRATION",
        Beast = "BEAST",
        Celestial = "CELESTIAL",
        Construct = "CONSTRUCT",
        Dragon = "DRAGON",
        Elemental = "ELEMENTAL",
        Fey = "FEY",
        Fiend = "FIEND",
        Giant = "GIANT",
        Humanoid = "HUMANOID",
        Monstrosity = "MONSTROSITY",
        Ooze = "OOZE",
        Plant = "PLANT",
        Undead = "UNDEAD",
    }
}

closed_enum! {
    pub enum CreatureSize("creature size") {
        Tiny = "TINY",
        Small = "SMALL",
        Medium = "MEDIUM",
        Large = "LARGE",
        Huge = "HUGE",
        Gargantuan = "GARGANTUAN",
    }
}
