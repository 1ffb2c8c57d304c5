//! Ability scores, skills and armor training.

use crate::types::closed_set::closed_enum;

closed_enum! {
    /// One of the six ability-score axes.
    pub enum Modifier("modifier") {
        Strength = "STRENGTH",
        Dexterity = "DEXTERITY",
        Constitution = "CONSTITUTION",
        Intelligence = "INTELLIGENCE",
        Wisdom = "WISDOM",
        Charisma = "CHARISMA",
    }
}

closed_enum! {
    /// Skills a class may grant proficiency in.
    pub enum Skill("skill") {
        Acrobatics = "ACROBATICS",
        AnimalHandling = "ANIMAL_HANDLING",
        Arcana = "ARCANA",
        Athletics = "ATHLETICS",
        Deception = "DECEPTION",
        History = "HISTORY",
        Insight = "INSIGHT",
        Intimidation = "INTIMIDATION",
        Investigation = "INVESTIGATION",
        Medicine = "MEDICINE",
        Nature = "NATURE",
        Perception = "PERCEPTION",
        Performance = "PERFORMANCE",
        Persuasion = "PERSUASION",
        Religion = "RELIGION",
        SleightOfHand = "SLEIGHT_OF_HAND",
        Stealth = "STEALTH",
        Survival = "SURVIVAL",
    }
}

impl Skill {
    /// The ability a skill check is normally made with.
    pub fn modifier(&self) -> Modifier {
        match self {
            Skill::Athletics => Modifier::Strength,
            Skill::Acrobatics | Skill::SleightOfHand | Skill::Stealth => Modifier::Dexterity,
            Skill::Arcana
            | Skill::History
            | Skill::Investigation
            | Skill::Nature
            | Skill::Religion => Modifier::Intelligence,
            Skill::AnimalHandling
            | Skill::Insight
            | Skill::Medicine
            | Skill::Perception
            | Skill::Survival => Modifier::Wisdom,
            Skill::Deception | Skill::Intimidation | Skill::Performance | Skill::Persuasion => {
                Modifier::Charisma
            }
        }
    }
}

closed_enum! {
    /// Armor categories a class may be trained with.
    pub enum ArmorType("armor type") {
        Light = "LIGHT_ARMOR",
        Medium = "MEDIUM_ARMOR",
        Heavy = "HEAVY_ARMOR",
        Shield = "SHIELD",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_six_modifiers() {
        assert_eq!(Modifier::ALL.len(), 6);
    }

    #[test]
    fn skills_map_to_their_ability() {
        assert_eq!(Skill::Athletics.modifier(), Modifier::Strength);
        assert_eq!(Skill::Stealth.modifier(), Modifier::Dexterity);
        assert_eq!(Skill::Persuasion.modifier(), Modifier::Charisma);
        assert!(Skill::ALL
            .iter()
            .all(|skill| skill.modifier() != Modifier::Constitution));
    }

    #[test]
    fn multi_word_names_use_underscores() {
        assert_eq!(
            "sleight_of_hand".parse::<Skill>().unwrap(),
            Skill::SleightOfHand
        );
        assert_eq!(ArmorType::Heavy.to_string(), "HEAVY_ARMOR");
    }
}
