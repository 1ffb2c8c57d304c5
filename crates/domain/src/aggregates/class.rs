//! CharacterClass aggregate - a playable class such as bard or fighter
//!
//! # Invariants
//!
//! - `primary_modifiers` holds at least one modifier and no duplicates
//! - every proficiency list is duplicate free
//! - `number_tools` is 0 whenever the tool list is empty

use crate::error::{DomainError, DomainResult};
use crate::ids::{ClassId, SourceId, ToolId, WeaponId};
use crate::types::{ArmorType, Modifier, Skill};
use crate::value_objects::invariants::{
    ensure_changed, ensure_distinct, ensure_list_changed, same_elements,
};
use crate::value_objects::{impl_fields, Description, Dice, Name, NameInEnglish};

// ============================================================================
// Hits
// ============================================================================

/// Hit point progression of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassHits {
    hit_dice: Dice,
    starting_hits: u16,
    hit_modifier: Modifier,
    next_level_hits: u16,
}

impl ClassHits {
    /// # Errors
    ///
    /// Returns `DomainError::InvalidData` if `starting_hits` or
    /// `next_level_hits` is zero.
    pub fn new(
        hit_dice: Dice,
        starting_hits: u16,
        hit_modifier: Modifier,
        next_level_hits: u16,
    ) -> DomainResult<Self> {
        if starting_hits == 0 {
            return Err(DomainError::invalid_data("Starting hits must be at least 1"));
        }
        if next_level_hits == 0 {
            return Err(DomainError::invalid_data(
                "Next level hits must be at least 1",
            ));
        }
        Ok(Self {
            hit_dice,
            starting_hits,
            hit_modifier,
            next_level_hits,
        })
    }

    pub fn hit_dice(&self) -> Dice {
        self.hit_dice
    }

    pub fn starting_hits(&self) -> u16 {
        self.starting_hits
    }

    pub fn hit_modifier(&self) -> Modifier {
        self.hit_modifier
    }

    pub fn next_level_hits(&self) -> u16 {
        self.next_level_hits
    }
}

// ============================================================================
// Proficiencies
// ============================================================================

/// Training a class starts with
///
/// Two proficiency sets are equal when every list holds the same entries,
/// whatever their order.
#[derive(Debug, Clone)]
pub struct ClassProficiencies {
    armors: Vec<ArmorType>,
    weapons: Vec<WeaponId>,
    tools: Vec<ToolId>,
    saving_throws: Vec<Modifier>,
    skills: Vec<Skill>,
    number_skills: u8,
    number_tools: u8,
}

impl ClassProficiencies {
    /// Validate and build a proficiency set.
    ///
    /// `number_tools` is replaced by 0 when `tools` is empty.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidData` if any list contains duplicates.
    pub fn new(
        armors: Vec<ArmorType>,
        weapons: Vec<WeaponId>,
        tools: Vec<ToolId>,
        saving_throws: Vec<Modifier>,
        skills: Vec<Skill>,
        number_skills: u8,
        number_tools: u8,
    ) -> DomainResult<Self> {
        ensure_distinct(&armors, "armors")?;
        ensure_distinct(&weapons, "weapons")?;
        ensure_distinct(&tools, "tools")?;
        ensure_distinct(&saving_throws, "saving throws")?;
        ensure_distinct(&skills, "skills")?;

        let number_tools = if tools.is_empty() { 0 } else { number_tools };

        Ok(Self {
            armors,
            weapons,
            tools,
            saving_throws,
            skills,
            number_skills,
            number_tools,
        })
    }

    /// A proficiency set with nothing in it.
    pub fn none() -> Self {
        Self {
            armors: Vec::new(),
            weapons: Vec::new(),
            tools: Vec::new(),
            saving_throws: Vec::new(),
            skills: Vec::new(),
            number_skills: 0,
            number_tools: 0,
        }
    }

    pub fn armors(&self) -> &[ArmorType] {
        &self.armors
    }

    pub fn weapons(&self) -> &[WeaponId] {
        &self.weapons
    }

    pub fn tools(&self) -> &[ToolId] {
        &self.tools
    }

    pub fn saving_throws(&self) -> &[Modifier] {
        &self.saving_throws
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn number_skills(&self) -> u8 {
        self.number_skills
    }

    pub fn number_tools(&self) -> u8 {
        self.number_tools
    }
}

impl PartialEq for ClassProficiencies {
    fn eq(&self, other: &Self) -> bool {
        same_elements(&self.armors, &other.armors)
            && same_elements(&self.weapons, &other.weapons)
            && same_elements(&self.tools, &other.tools)
            && same_elements(&self.saving_throws, &other.saving_throws)
            && same_elements(&self.skills, &other.skills)
            && self.number_skills == other.number_skills
            && self.number_tools == other.number_tools
    }
}

impl Eq for ClassProficiencies {}

// ============================================================================
// Aggregate
// ============================================================================

/// A playable character class
#[derive(Debug, Clone)]
pub struct CharacterClass {
    id: ClassId,
    name: Name,
    description: Description,
    primary_modifiers: Vec<Modifier>,
    hits: ClassHits,
    proficiencies: ClassProficiencies,
    name_in_english: NameInEnglish,
    source_id: SourceId,
}

impl_fields!(CharacterClass {
    name: name,
    description: description,
    name_in_english: name_in_english,
    source: source_id,
});

identity_eq!(CharacterClass, ClassId);

impl CharacterClass {
    /// Build a class, validating every field first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidData` on the first violated rule.
    pub fn new(
        id: ClassId,
        name: &str,
        description: &str,
        primary_modifiers: Vec<Modifier>,
        hits: ClassHits,
        proficiencies: ClassProficiencies,
        name_in_english: &str,
        source_id: SourceId,
    ) -> DomainResult<Self> {
        let name = Name::new(name)?;
        let description = Description::new(description)?;
        validate_primary_modifiers(&primary_modifiers)?;
        let name_in_english = NameInEnglish::new(name_in_english)?;

        Ok(Self {
            id,
            name,
            description,
            primary_modifiers,
            hits,
            proficiencies,
            name_in_english,
            source_id,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn primary_modifiers(&self) -> &[Modifier] {
        &self.primary_modifiers
    }

    pub fn hits(&self) -> &ClassHits {
        &self.hits
    }

    pub fn proficiencies(&self) -> &ClassProficiencies {
        &self.proficiencies
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    pub fn new_primary_modifiers(&mut self, modifiers: Vec<Modifier>) -> DomainResult<()> {
        ensure_list_changed(&self.primary_modifiers, &modifiers, "primary modifiers")?;
        validate_primary_modifiers(&modifiers)?;
        self.primary_modifiers = modifiers;
        Ok(())
    }

    pub fn new_hits(&mut self, hits: ClassHits) -> DomainResult<()> {
        ensure_changed(&self.hits, &hits, "hits")?;
        self.hits = hits;
        Ok(())
    }

    pub fn new_proficiencies(&mut self, proficiencies: ClassProficiencies) -> DomainResult<()> {
        ensure_changed(&self.proficiencies, &proficiencies, "proficiencies")?;
        self.proficiencies = proficiencies;
        Ok(())
    }
}

fn validate_primary_modifiers(modifiers: &[Modifier]) -> DomainResult<()> {
    if modifiers.is_empty() {
        return Err(DomainError::invalid_data(
            "Primary modifiers must contain at least one modifier",
        ));
    }
    ensure_distinct(modifiers, "primary modifiers")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{DiceType, Named, Sourced, MAX_NAME_LENGTH};

    fn bard_hits() -> ClassHits {
        ClassHits::new(
            Dice::new(1, DiceType::D8).unwrap(),
            8,
            Modifier::Constitution,
            5,
        )
        .unwrap()
    }

    fn create_bard() -> CharacterClass {
        CharacterClass::new(
            ClassId::new(),
            "бард",
            "Мастер песни и слова",
            vec![Modifier::Charisma],
            bard_hits(),
            ClassProficiencies::none(),
            "Bard",
            SourceId::new(),
        )
        .unwrap()
    }

    mod constructor {
        use super::*;

        #[test]
        fn valid_fields_build_a_class() {
            let bard = create_bard();
            assert_eq!(bard.name(), "бард");
            assert_eq!(bard.primary_modifiers(), &[Modifier::Charisma]);
            assert_eq!(bard.hits().starting_hits(), 8);
        }

        #[test]
        fn rejects_empty_name_and_description() {
            let build = |name: &str, description: &str| {
                CharacterClass::new(
                    ClassId::new(),
                    name,
                    description,
                    vec![Modifier::Charisma],
                    bard_hits(),
                    ClassProficiencies::none(),
                    "",
                    SourceId::new(),
                )
            };
            assert!(build("", "d").unwrap_err().is_invalid_data());
            assert!(build("бард", "").unwrap_err().is_invalid_data());
            assert!(build(&"x".repeat(MAX_NAME_LENGTH + 1), "d").is_err());
        }

        #[test]
        fn rejects_empty_or_repeated_primary_modifiers() {
            for modifiers in [vec![], vec![Modifier::Charisma, Modifier::Charisma]] {
                let result = CharacterClass::new(
                    ClassId::new(),
                    "бард",
                    "d",
                    modifiers,
                    bard_hits(),
                    ClassProficiencies::none(),
                    "",
                    SourceId::new(),
                );
                assert!(result.unwrap_err().is_invalid_data());
            }
        }

        #[test]
        fn hits_must_be_positive() {
            let d8 = Dice::new(1, DiceType::D8).unwrap();
            assert!(ClassHits::new(d8, 0, Modifier::Constitution, 5).is_err());
            assert!(ClassHits::new(d8, 8, Modifier::Constitution, 0).is_err());
        }
    }

    mod proficiencies {
        use super::*;

        #[test]
        fn number_tools_is_zero_without_tools() {
            let profs =
                ClassProficiencies::new(vec![], vec![], vec![], vec![], vec![], 0, 3).unwrap();
            assert_eq!(profs.number_tools(), 0);

            let profs = ClassProficiencies::new(
                vec![],
                vec![],
                vec![ToolId::new()],
                vec![],
                vec![],
                0,
                1,
            )
            .unwrap();
            assert_eq!(profs.number_tools(), 1);
        }

        #[test]
        fn duplicate_entries_are_rejected() {
            let weapon = WeaponId::new();
            assert!(ClassProficiencies::new(
                vec![ArmorType::Light, ArmorType::Light],
                vec![],
                vec![],
                vec![],
                vec![],
                0,
                0
            )
            .is_err());
            assert!(ClassProficiencies::new(
                vec![],
                vec![weapon, weapon],
                vec![],
                vec![],
                vec![],
                0,
                0
            )
            .is_err());
            assert!(ClassProficiencies::new(
                vec![],
                vec![],
                vec![],
                vec![],
                vec![Skill::Stealth, Skill::Stealth],
                1,
                0
            )
            .is_err());
        }

        #[test]
        fn equality_ignores_order() {
            let a = ClassProficiencies::new(
                vec![ArmorType::Light, ArmorType::Shield],
                vec![],
                vec![],
                vec![Modifier::Dexterity, Modifier::Charisma],
                vec![],
                0,
                0,
            )
            .unwrap();
            let b = ClassProficiencies::new(
                vec![ArmorType::Shield, ArmorType::Light],
                vec![],
                vec![],
                vec![Modifier::Charisma, Modifier::Dexterity],
                vec![],
                0,
                0,
            )
            .unwrap();
            assert_eq!(a, b);
        }
    }

    mod mutators {
        use super::*;

        #[test]
        fn same_primary_modifiers_in_any_order_are_idempotent() {
            let mut bard = create_bard();
            bard.new_primary_modifiers(vec![Modifier::Charisma, Modifier::Dexterity])
                .unwrap();
            let err = bard
                .new_primary_modifiers(vec![Modifier::Dexterity, Modifier::Charisma])
                .unwrap_err();
            assert!(err.is_idempotent());
        }

        #[test]
        fn new_primary_modifiers_cannot_be_empty() {
            let mut bard = create_bard();
            assert!(bard.new_primary_modifiers(vec![]).unwrap_err().is_invalid_data());
        }

        #[test]
        fn new_hits_rejects_same_hits() {
            let mut bard = create_bard();
            assert!(bard.new_hits(bard_hits()).unwrap_err().is_idempotent());

            let d10 = Dice::new(1, DiceType::D10).unwrap();
            let hits = ClassHits::new(d10, 10, Modifier::Constitution, 6).unwrap();
            bard.new_hits(hits).unwrap();
            assert_eq!(bard.hits().hit_dice().dice_type(), DiceType::D10);
        }

        #[test]
        fn new_proficiencies_rejects_same_set() {
            let mut bard = create_bard();
            let err = bard
                .new_proficiencies(ClassProficiencies::none())
                .unwrap_err();
            assert!(err.is_idempotent());
        }

        #[test]
        fn shared_field_mutators_apply() {
            let mut bard = create_bard();
            bard.new_name("скальд").unwrap();
            let source = SourceId::new();
            bard.new_source_id(source).unwrap();
            assert_eq!(bard.name(), "скальд");
            assert_eq!(bard.source_id(), source);
        }
    }

    mod equality {
        use super::*;

        #[test]
        fn classes_compare_by_identity() {
            let bard = create_bard();
            let mut renamed = bard.clone();
            renamed.new_name("скальд").unwrap();
            assert_eq!(bard, renamed);
            assert!(bard == bard.id());
            assert_ne!(bard, create_bard());
        }
    }
}
