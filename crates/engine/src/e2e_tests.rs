//! End-to-end catalogue flows through `App` and the in-memory stores.

use grimoire_domain::{
    Age, ClassHits, ClassProficiencies, CreatureSize, CreatureType, DamageType, Described, Dice,
    DiceType, EnglishNamed, IncreaseModifier, Modifier, Named, RaceFeature, RaceId,
    RequiredModifier, SourceId, Sourced, Speed, SubclassId, UserId, WeaponKindId,
    WeaponPropertyName, WeaponType,
};

use crate::app::App;
use crate::config::EngineConfig;
use crate::use_cases::management::class::CreateClassCommand;
use crate::use_cases::management::class_feature::CreateClassFeatureCommand;
use crate::use_cases::management::class_level::CreateClassLevelCommand;
use crate::use_cases::management::feat::CreateFeatCommand;
use crate::use_cases::management::race::CreateRaceCommand;
use crate::use_cases::management::subclass_feature::CreateSubclassFeatureCommand;
use crate::use_cases::management::subrace::{
    CreateSubraceCommand, SubraceChanges, UpdateSubraceCommand,
};
use crate::use_cases::management::weapon::CreateWeaponCommand;
use crate::use_cases::management::weapon_kind::CreateWeaponKindCommand;
use crate::use_cases::management::weapon_property::{
    CreateWeaponPropertyCommand, UpdateWeaponPropertyCommand, WeaponPropertyChanges,
};
use crate::use_cases::{ErrorStatus, Patch};

struct Harness {
    app: App,
    admin: UserId,
    source: SourceId,
}

impl Harness {
    fn new() -> Self {
        let admin = UserId::new();
        let config = EngineConfig {
            admin_user_ids: vec![admin],
            ..EngineConfig::default()
        };
        let app = App::in_memory(&config);
        let source = SourceId::new();
        app.repositories.sources.register(source);
        Self { app, admin, source }
    }

    fn bard_command(&self) -> CreateClassCommand {
        CreateClassCommand {
            user_id: self.admin,
            name: "бард".into(),
            description: "Мастер песни и слова".into(),
            primary_modifiers: vec![Modifier::Charisma],
            hits: ClassHits::new(
                Dice::new(1, DiceType::D8).unwrap(),
                8,
                Modifier::Constitution,
                5,
            )
            .unwrap(),
            proficiencies: ClassProficiencies::new(
                vec![],
                vec![],
                vec![],
                vec![Modifier::Dexterity, Modifier::Charisma],
                vec![],
                3,
                2,
            )
            .unwrap(),
            name_in_english: "Bard".into(),
            source_id: self.source,
        }
    }

    async fn create_kind(&self, name: &str) -> WeaponKindId {
        self.app
            .use_cases
            .weapon_kind
            .create
            .execute(CreateWeaponKindCommand {
                user_id: self.admin,
                weapon_type: WeaponType::MartialMelee,
                name: name.into(),
                description: "Описание".into(),
            })
            .await
            .unwrap()
    }

    fn elf_command(&self) -> CreateRaceCommand {
        CreateRaceCommand {
            user_id: self.admin,
            name: "эльф".into(),
            description: "Дивный народ".into(),
            creature_type: CreatureType::Humanoid,
            creature_size: CreatureSize::Medium,
            speed: Speed::new(30, "").unwrap(),
            age: Age::new(750, "").unwrap(),
            increase_modifiers: vec![],
            features: vec![],
            name_in_english: "Elf".into(),
            source_id: self.source,
        }
    }

    async fn create_race(&self) -> RaceId {
        self.app
            .use_cases
            .race
            .create
            .execute(self.elf_command())
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn created_class_reads_back_with_identical_fields() {
    let h = Harness::new();
    let command = h.bard_command();

    let id = h.app.use_cases.class.create.execute(command.clone()).await.unwrap();
    let class = h.app.use_cases.class.get.execute(id).await.unwrap();

    assert_eq!(class.id(), id);
    assert_eq!(class.name(), "бард");
    assert_eq!(class.description(), command.description);
    assert_eq!(class.primary_modifiers(), [Modifier::Charisma]);
    assert_eq!(*class.hits(), command.hits);
    assert_eq!(*class.proficiencies(), command.proficiencies);
    assert_eq!(class.proficiencies().number_tools(), 0);
    assert_eq!(class.name_in_english(), "Bard");
    assert_eq!(class.source_id(), h.source);
}

#[tokio::test]
async fn second_class_with_same_name_is_rejected() {
    let h = Harness::new();
    h.app.use_cases.class.create.execute(h.bard_command()).await.unwrap();

    let err = h
        .app
        .use_cases
        .class
        .create
        .execute(h.bard_command())
        .await
        .unwrap_err();

    assert_eq!(err.status(), ErrorStatus::InvalidData);
    assert_eq!(h.app.use_cases.class.list.execute().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_caller_is_denied() {
    let h = Harness::new();
    let mut command = h.bard_command();
    command.user_id = UserId::new();

    let err = h.app.use_cases.class.create.execute(command).await.unwrap_err();
    assert_eq!(err.status(), ErrorStatus::Access);
    assert_eq!(err.status().http_code(), 403);
}

#[tokio::test]
async fn ammunition_property_renamed_to_versatile_then_rejected_without_dice() {
    let h = Harness::new();
    let properties = &h.app.use_cases.weapon_property;
    let id = properties
        .create
        .execute(CreateWeaponPropertyCommand {
            user_id: h.admin,
            name: WeaponPropertyName::Ammunition,
            description: "Нужны боеприпасы".into(),
            base_range: Some(20),
            max_range: Some(40),
            second_hand_dice: None,
        })
        .await
        .unwrap();

    let to_versatile = UpdateWeaponPropertyCommand::new(
        h.admin,
        id,
        WeaponPropertyChanges {
            name: Patch::Present(WeaponPropertyName::Versatile),
            second_hand_dice: Patch::Present(Dice::new(1, DiceType::D10).unwrap()),
            ..Default::default()
        },
    )
    .unwrap();
    properties.update.execute(to_versatile).await.unwrap();

    let property = properties.get.execute(id).await.unwrap();
    assert_eq!(property.name(), WeaponPropertyName::Versatile);
    assert_eq!(property.base_range(), None);
    assert_eq!(property.max_range(), None);
    assert_eq!(
        property.second_hand_dice(),
        Some(Dice::new(1, DiceType::D10).unwrap())
    );

    let without_dice = UpdateWeaponPropertyCommand::new(
        h.admin,
        id,
        WeaponPropertyChanges {
            name: Patch::Present(WeaponPropertyName::Versatile),
            ..Default::default()
        },
    )
    .unwrap();
    let err = properties.update.execute(without_dice).await.unwrap_err();
    assert_eq!(err.status(), ErrorStatus::InvalidData);

    let unchanged = properties.get.execute(id).await.unwrap();
    assert!(unchanged.second_hand_dice().is_some());
}

#[tokio::test]
async fn subrace_feature_both_added_and_removed_fails_at_command() {
    let h = Harness::new();
    let race_id = h.create_race().await;
    let subrace_id = h
        .app
        .use_cases
        .subrace
        .create
        .execute(CreateSubraceCommand {
            user_id: h.admin,
            race_id,
            name: "высший эльф".into(),
            description: "Знатоки магии".into(),
            increase_modifiers: vec![],
            features: vec![RaceFeature::new("f1", "d1").unwrap()],
            name_in_english: "High elf".into(),
        })
        .await
        .unwrap();

    let err = UpdateSubraceCommand::new(
        h.admin,
        subrace_id,
        SubraceChanges {
            add_features: Patch::Present(vec![RaceFeature::new("f1", "d1").unwrap()]),
            remove_features: Patch::Present(vec!["f1".into()]),
            ..Default::default()
        },
    )
    .unwrap_err();

    assert_eq!(err.status(), ErrorStatus::InvalidData);
}

#[tokio::test]
async fn race_with_subraces_cannot_be_deleted() {
    let h = Harness::new();
    let race_id = h.create_race().await;
    let subrace_id = h
        .app
        .use_cases
        .subrace
        .create
        .execute(CreateSubraceCommand {
            user_id: h.admin,
            race_id,
            name: "тёмный эльф".into(),
            description: "Жители Подземья".into(),
            increase_modifiers: vec![],
            features: vec![],
            name_in_english: "Drow".into(),
        })
        .await
        .unwrap();

    let err = h.app.use_cases.race.delete.execute(h.admin, race_id).await.unwrap_err();
    assert_eq!(err.status(), ErrorStatus::InvalidData);

    h.app.use_cases.subrace.delete.execute(h.admin, subrace_id).await.unwrap();
    h.app.use_cases.race.delete.execute(h.admin, race_id).await.unwrap();
}

#[tokio::test]
async fn weapon_kind_in_use_is_deleted_only_after_its_weapon() {
    let h = Harness::new();
    let kind_id = h.create_kind("длинные мечи").await;
    let weapon_id = h
        .app
        .use_cases
        .weapon
        .create
        .execute(CreateWeaponCommand {
            user_id: h.admin,
            kind_id,
            name: "длинный меч".into(),
            description: "Классический клинок".into(),
            cost: 15,
            damage_dice: Dice::new(1, DiceType::D8).unwrap(),
            damage_type: DamageType::Slashing,
            weight: 3.0,
            property_ids: vec![],
            name_in_english: "Longsword".into(),
            source_id: h.source,
        })
        .await
        .unwrap();

    let kinds = &h.app.use_cases.weapon_kind;
    let err = kinds.delete.execute(h.admin, kind_id).await.unwrap_err();
    assert_eq!(err.status(), ErrorStatus::InvalidData);

    h.app.use_cases.weapon.delete.execute(h.admin, weapon_id).await.unwrap();
    kinds.delete.execute(h.admin, kind_id).await.unwrap();
}

#[tokio::test]
async fn deleted_entity_is_gone_and_second_delete_is_not_found() {
    let h = Harness::new();
    let kind_id = h.create_kind("топоры").await;
    let kinds = &h.app.use_cases.weapon_kind;

    kinds.delete.execute(h.admin, kind_id).await.unwrap();

    assert!(!h.app.repositories.weapon_kind.id_exists(kind_id).await.unwrap());
    let err = kinds.get.execute(kind_id).await.unwrap_err();
    assert_eq!(err.status(), ErrorStatus::NotFound);
    let err = kinds.delete.execute(h.admin, kind_id).await.unwrap_err();
    assert_eq!(err.status(), ErrorStatus::NotFound);
    assert_eq!(err.status().http_code(), 404);
}

#[tokio::test]
async fn weapon_kind_reads_back_with_identical_fields() {
    let h = Harness::new();
    let kind_id = h.create_kind("рапиры").await;

    let stored = h.app.repositories.weapon_kind.get(kind_id).await.unwrap().unwrap();
    let fetched = h.app.use_cases.weapon_kind.get.execute(kind_id).await.unwrap();

    assert_eq!(fetched.id(), kind_id);
    assert_eq!(fetched.name(), "рапиры");
    assert_eq!(fetched.description(), "Описание");
    assert_eq!(fetched.weapon_type(), WeaponType::MartialMelee);
    assert_eq!(stored.name(), fetched.name());
    assert_eq!(stored.weapon_type(), fetched.weapon_type());
}

#[tokio::test]
async fn weapon_property_reads_back_with_identical_fields() {
    let h = Harness::new();
    let properties = &h.app.use_cases.weapon_property;
    let id = properties
        .create
        .execute(CreateWeaponPropertyCommand {
            user_id: h.admin,
            name: WeaponPropertyName::Versatile,
            description: "Можно держать двумя руками".into(),
            base_range: None,
            max_range: None,
            second_hand_dice: Some(Dice::new(1, DiceType::D10).unwrap()),
        })
        .await
        .unwrap();

    let property = properties.get.execute(id).await.unwrap();
    assert_eq!(property.id(), id);
    assert_eq!(property.name(), WeaponPropertyName::Versatile);
    assert_eq!(property.description(), "Можно держать двумя руками");
    assert_eq!(property.base_range(), None);
    assert_eq!(property.max_range(), None);
    assert_eq!(
        property.second_hand_dice(),
        Some(Dice::new(1, DiceType::D10).unwrap())
    );
}

#[tokio::test]
async fn weapon_reads_back_with_identical_fields() {
    let h = Harness::new();
    let kind_id = h.create_kind("длинные мечи").await;
    let property_id = h
        .app
        .use_cases
        .weapon_property
        .create
        .execute(CreateWeaponPropertyCommand {
            user_id: h.admin,
            name: WeaponPropertyName::Heavy,
            description: "Тяжёлое".into(),
            base_range: None,
            max_range: None,
            second_hand_dice: None,
        })
        .await
        .unwrap();

    let weapons = &h.app.use_cases.weapon;
    let id = weapons
        .create
        .execute(CreateWeaponCommand {
            user_id: h.admin,
            kind_id,
            name: "двуручный меч".into(),
            description: "Огромный клинок".into(),
            cost: 50,
            damage_dice: Dice::new(2, DiceType::D6).unwrap(),
            damage_type: DamageType::Slashing,
            weight: 6.0,
            property_ids: vec![property_id],
            name_in_english: "Greatsword".into(),
            source_id: h.source,
        })
        .await
        .unwrap();

    let weapon = weapons.get.execute(id).await.unwrap();
    assert_eq!(weapon.id(), id);
    assert_eq!(weapon.kind_id(), kind_id);
    assert_eq!(weapon.name(), "двуручный меч");
    assert_eq!(weapon.description(), "Огромный клинок");
    assert_eq!(weapon.cost(), 50);
    assert_eq!(weapon.damage_dice(), Dice::new(2, DiceType::D6).unwrap());
    assert_eq!(weapon.damage_type(), DamageType::Slashing);
    assert_eq!(weapon.weight(), 6.0);
    assert_eq!(weapon.property_ids(), [property_id]);
    assert_eq!(weapon.name_in_english(), "Greatsword");
    assert_eq!(weapon.source_id(), h.source);
}

#[tokio::test]
async fn weapon_listed_in_class_proficiencies_cannot_be_deleted() {
    let h = Harness::new();
    let kind_id = h.create_kind("луки").await;
    let weapon_id = h
        .app
        .use_cases
        .weapon
        .create
        .execute(CreateWeaponCommand {
            user_id: h.admin,
            kind_id,
            name: "длинный лук".into(),
            description: "Дальнобойный лук".into(),
            cost: 50,
            damage_dice: Dice::new(1, DiceType::D8).unwrap(),
            damage_type: DamageType::Piercing,
            weight: 2.0,
            property_ids: vec![],
            name_in_english: "Longbow".into(),
            source_id: h.source,
        })
        .await
        .unwrap();

    let mut ranger = h.bard_command();
    ranger.name = "следопыт".into();
    ranger.proficiencies =
        ClassProficiencies::new(vec![], vec![weapon_id], vec![], vec![], vec![], 0, 0).unwrap();
    let class_id = h.app.use_cases.class.create.execute(ranger).await.unwrap();

    let err = h
        .app
        .use_cases
        .weapon
        .delete
        .execute(h.admin, weapon_id)
        .await
        .unwrap_err();
    assert_eq!(err.status(), ErrorStatus::InvalidData);

    let class = h.app.use_cases.class.get.execute(class_id).await.unwrap();
    assert_eq!(class.proficiencies().weapons(), [weapon_id]);
    assert!(h.app.use_cases.weapon.get.execute(weapon_id).await.is_ok());

    h.app.use_cases.class.delete.execute(h.admin, class_id).await.unwrap();
    h.app.use_cases.weapon.delete.execute(h.admin, weapon_id).await.unwrap();
}

#[tokio::test]
async fn race_reads_back_with_identical_fields() {
    let h = Harness::new();
    let mut command = h.elf_command();
    command.speed = Speed::new(35, "Быстрые ноги").unwrap();
    command.increase_modifiers = vec![IncreaseModifier::new(Modifier::Dexterity, 2).unwrap()];
    command.features = vec![RaceFeature::new("Тёмное зрение", "Видит во тьме").unwrap()];

    let id = h.app.use_cases.race.create.execute(command.clone()).await.unwrap();
    let race = h.app.use_cases.race.get.execute(id).await.unwrap();

    assert_eq!(race.id(), id);
    assert_eq!(race.name(), "эльф");
    assert_eq!(race.description(), command.description);
    assert_eq!(race.creature_type(), CreatureType::Humanoid);
    assert_eq!(race.creature_size(), CreatureSize::Medium);
    assert_eq!(*race.speed(), command.speed);
    assert_eq!(*race.age(), command.age);
    assert_eq!(race.increase_modifiers(), command.increase_modifiers.as_slice());
    assert_eq!(race.features(), command.features.as_slice());
    assert_eq!(race.name_in_english(), "Elf");
    assert_eq!(race.source_id(), h.source);
}

#[tokio::test]
async fn subrace_reads_back_with_identical_fields() {
    let h = Harness::new();
    let race_id = h.create_race().await;
    let increase = vec![IncreaseModifier::new(Modifier::Intelligence, 1).unwrap()];
    let features = vec![RaceFeature::new("Заговор", "Один заговор волшебника").unwrap()];

    let id = h
        .app
        .use_cases
        .subrace
        .create
        .execute(CreateSubraceCommand {
            user_id: h.admin,
            race_id,
            name: "высший эльф".into(),
            description: "Знатоки магии".into(),
            increase_modifiers: increase.clone(),
            features: features.clone(),
            name_in_english: "High elf".into(),
        })
        .await
        .unwrap();
    let subrace = h.app.use_cases.subrace.get.execute(id).await.unwrap();

    assert_eq!(subrace.id(), id);
    assert_eq!(subrace.race_id(), race_id);
    assert_eq!(subrace.name(), "высший эльф");
    assert_eq!(subrace.description(), "Знатоки магии");
    assert_eq!(subrace.increase_modifiers(), increase.as_slice());
    assert_eq!(subrace.features(), features.as_slice());
    assert_eq!(subrace.name_in_english(), "High elf");
}

#[tokio::test]
async fn feat_reads_back_with_identical_fields() {
    let h = Harness::new();
    let required = vec![RequiredModifier::new(Modifier::Strength, 13).unwrap()];

    let id = h
        .app
        .use_cases
        .feat
        .create
        .execute(CreateFeatCommand {
            user_id: h.admin,
            name: "борец".into(),
            description: "Мастер захватов".into(),
            required_modifiers: required.clone(),
            increase_modifiers: vec![Modifier::Strength, Modifier::Constitution],
        })
        .await
        .unwrap();
    let feat = h.app.use_cases.feat.get.execute(id).await.unwrap();

    assert_eq!(feat.id(), id);
    assert_eq!(feat.name(), "борец");
    assert_eq!(feat.description(), "Мастер захватов");
    assert_eq!(feat.required_modifiers(), required.as_slice());
    assert_eq!(
        feat.increase_modifiers(),
        [Modifier::Strength, Modifier::Constitution]
    );
}

#[tokio::test]
async fn class_level_reads_back_with_identical_fields() {
    let h = Harness::new();
    let class_id = h.app.use_cases.class.create.execute(h.bard_command()).await.unwrap();

    let levels = &h.app.use_cases.class_level;
    let id = levels
        .create
        .execute(CreateClassLevelCommand {
            user_id: h.admin,
            class_id,
            level: 5,
            proficiency_bonus: 3,
            dice: Some(Dice::new(1, DiceType::D8).unwrap()),
            dice_description: Some("Кость вдохновения".into()),
            points: None,
            points_description: None,
            bonus_damage: Some(2),
            bonus_damage_description: Some("Урон заговорами".into()),
        })
        .await
        .unwrap();
    let level = levels.get.execute(id).await.unwrap();

    assert_eq!(level.id(), id);
    assert_eq!(level.class_id(), class_id);
    assert_eq!(level.level().value(), 5);
    assert_eq!(level.proficiency_bonus(), 3);
    let dice = level.dice().unwrap();
    assert_eq!(dice.value(), Dice::new(1, DiceType::D8).unwrap());
    assert_eq!(dice.description(), "Кость вдохновения");
    assert!(level.points().is_none());
    let bonus = level.bonus_damage().unwrap();
    assert_eq!(bonus.value(), 2);
    assert_eq!(bonus.description(), "Урон заговорами");
}

#[tokio::test]
async fn class_feature_reads_back_with_identical_fields() {
    let h = Harness::new();
    let class_id = h.app.use_cases.class.create.execute(h.bard_command()).await.unwrap();

    let features = &h.app.use_cases.class_feature;
    let id = features
        .create
        .execute(CreateClassFeatureCommand {
            user_id: h.admin,
            class_id,
            name: "Песнь отдыха".into(),
            description: "Союзники восстанавливают больше хитов".into(),
            level: 2,
        })
        .await
        .unwrap();
    let feature = features.get.execute(id).await.unwrap();

    assert_eq!(feature.id(), id);
    assert_eq!(feature.owner_id(), class_id);
    assert_eq!(feature.name(), "Песнь отдыха");
    assert_eq!(feature.description(), "Союзники восстанавливают больше хитов");
    assert_eq!(feature.level().value(), 2);
}

#[tokio::test]
async fn subclass_feature_reads_back_with_identical_fields() {
    let h = Harness::new();
    let subclass_id = SubclassId::new();
    h.app.repositories.subclasses.register(subclass_id);

    let features = &h.app.use_cases.subclass_feature;
    let id = features
        .create
        .execute(CreateSubclassFeatureCommand {
            user_id: h.admin,
            subclass_id,
            name: "Режущие слова".into(),
            description: "Насмешка ослабляет атаку".into(),
            level: 3,
        })
        .await
        .unwrap();
    let feature = features.get.execute(id).await.unwrap();

    assert_eq!(feature.id(), id);
    assert_eq!(feature.owner_id(), subclass_id);
    assert_eq!(feature.name(), "Режущие слова");
    assert_eq!(feature.description(), "Насмешка ослабляет атаку");
    assert_eq!(feature.level().value(), 3);
}
