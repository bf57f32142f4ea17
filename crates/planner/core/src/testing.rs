//! Small synthetic dataset shared by the unit tests.

use std::collections::BTreeMap;

use crate::env::{
    Color, Evolution, MoveType, RefineVariant, ReferenceData, SkillCategory, SkillDefinition,
    SpecialRefine, UnitDefinition, UpgradeFlags, UpgradeTables, WeaponData, WeaponType,
};
use crate::stats::{Rarity, Stat, Stats};

fn weapon(name: &str, cost: u32, might: i32, weapon_type: WeaponType) -> SkillDefinition {
    SkillDefinition::weapon(name, cost, WeaponData::new(might, weapon_type))
}

fn refinable(mut skill: SkillDefinition, flags: &str) -> SkillDefinition {
    if let Some(data) = skill.weapon.as_mut() {
        data.upgrade = Some(UpgradeFlags::parse(flags));
    }
    skill
}

fn colored(mut skill: SkillDefinition, color: Color) -> SkillDefinition {
    if let Some(data) = skill.weapon.as_mut() {
        data.colors.push(color);
    }
    skill
}

fn skill(category: SkillCategory, name: &str, cost: u32) -> SkillDefinition {
    SkillDefinition::new(category, name, cost)
}

fn units() -> Vec<UnitDefinition> {
    use SkillCategory::*;

    let chrom = UnitDefinition::new("Chrom", Color::Red, WeaponType::Sword, MoveType::Infantry)
        .with_base_stats(Rarity::Five, Stats::new(19, 9, 5, 8, 4))
        .with_growths(Stats::new(60, 55, 40, 50, 25))
        .with_skill(Weapon, "Iron Sword", Some(1))
        .with_skill(Weapon, "Steel Sword", Some(2))
        .with_skill(Weapon, "Silver Sword", Some(3))
        .with_skill(Weapon, "Falchion", Some(5))
        .with_skill(Special, "Aether", Some(5))
        .with_skill(PassiveA, "Death Blow 1", Some(3));

    let abel = UnitDefinition::new("Abel", Color::Blue, WeaponType::Lance, MoveType::Cavalry)
        .with_lowest_rarity(Rarity::Three)
        .with_base_stats(Rarity::Three, Stats::new(16, 7, 8, 6, 4))
        .with_base_stats(Rarity::Four, Stats::new(17, 7, 9, 6, 5))
        .with_base_stats(Rarity::Five, Stats::new(18, 8, 9, 7, 5))
        .with_growths(Stats::new(50, 55, 60, 45, 30))
        .with_skill(Weapon, "Iron Lance", Some(1))
        .with_skill(Weapon, "Steel Lance", Some(2))
        .with_skill(Weapon, "Brave Lance", Some(4))
        .with_skill(Weapon, "Brave Lance+", Some(5))
        .with_skill(PassiveB, "Swordbreaker 1", Some(3))
        .with_skill(PassiveB, "Swordbreaker 2", Some(4))
        .with_skill(PassiveB, "Swordbreaker 3", None);

    let lilina = UnitDefinition::new("Lilina", Color::Red, WeaponType::Tome, MoveType::Infantry)
        .with_base_stats(Rarity::Five, Stats::new(16, 10, 6, 4, 8))
        .with_growths(Stats::new(40, 65, 50, 25, 45))
        .with_skill(Weapon, "Fire", Some(1))
        .with_skill(Weapon, "Elfire", Some(3))
        .with_skill(Special, "Moonbow", Some(4));

    let priscilla =
        UnitDefinition::new("Priscilla", Color::Neutral, WeaponType::Staff, MoveType::Cavalry)
            .with_lowest_rarity(Rarity::Four)
            .with_base_stats(Rarity::Four, Stats::new(16, 6, 7, 4, 8))
            .with_base_stats(Rarity::Five, Stats::new(17, 7, 8, 4, 9))
            .with_growths(Stats::new(45, 50, 55, 20, 55))
            .with_skill(Weapon, "Assault", Some(1))
            .with_skill(Weapon, "Gravity", Some(4))
            .with_skill(Assist, "Heal", Some(1));

    let mut ayra = UnitDefinition::new("Ayra", Color::Red, WeaponType::Sword, MoveType::Infantry)
        .with_max_stats(Rarity::Five, Stats::new(41, 33, 37, 24, 21))
        .with_skill(Weapon, "Silver Sword", Some(5));
    ayra.boon_table = BTreeMap::from([(Stat::Spd, 4)]);
    ayra.bane_table = BTreeMap::from([(Stat::Spd, 4)]);

    vec![chrom, abel, lilina, priscilla, ayra]
}

fn weapons() -> Vec<SkillDefinition> {
    vec![
        weapon("Iron Sword", 50, 6, WeaponType::Sword),
        weapon("Steel Sword", 100, 8, WeaponType::Sword),
        weapon("Silver Sword", 200, 11, WeaponType::Sword),
        refinable(weapon("Silver Sword+", 300, 15, WeaponType::Sword), "Yes"),
        refinable(weapon("Falchion", 400, 16, WeaponType::Sword), "Mt:1")
            .with_effect("Effective against dragons.")
            .with_restriction("Exclusive"),
        refinable(weapon("Ragnell", 400, 16, WeaponType::Sword), "Legendary")
            .with_restriction("Exclusive"),
        weapon("Iron Lance", 50, 6, WeaponType::Lance),
        weapon("Steel Lance", 100, 8, WeaponType::Lance),
        weapon("Brave Lance", 200, 5, WeaponType::Lance),
        refinable(weapon("Brave Lance+", 300, 10, WeaponType::Lance), "Yes")
            .with_effect("Inflicts Spd-5. Unit attacks twice."),
        colored(weapon("Fire", 50, 4, WeaponType::Tome), Color::Red),
        colored(weapon("Elfire", 100, 6, WeaponType::Tome), Color::Red),
        colored(weapon("Thoron", 200, 11, WeaponType::Tome), Color::Blue),
        colored(weapon("Assault", 50, 10, WeaponType::Staff), Color::Neutral),
        colored(weapon("Gravity", 150, 6, WeaponType::Staff), Color::Neutral)
            .with_effect("After combat, inflicts Gravity on target."),
        colored(weapon("Gravity+", 300, 10, WeaponType::Staff), Color::Neutral)
            .with_effect("After combat, inflicts Gravity on target and foes within 1 space."),
        colored(weapon("Pain+", 300, 10, WeaponType::Staff), Color::Neutral),
    ]
}

fn support_skills() -> Vec<SkillDefinition> {
    use SkillCategory::*;
    vec![
        skill(Assist, "Reposition", 150),
        skill(Assist, "Rally Attack", 150).with_restriction("Offense"),
        skill(Assist, "Heal", 50).with_restriction("Staff"),
        skill(Special, "Moonbow", 100),
        skill(Special, "Aether", 500).with_restriction("Exclusive"),
        skill(Special, "Iceberg", 200)
            .with_restriction("Magic")
            .with_value("Res:0.5")
            .with_effect("Boosts damage by {value}."),
    ]
}

fn passives() -> Vec<SkillDefinition> {
    use SkillCategory::*;
    let fury = "Grants Atk/Spd/Def/Res+{n}. After combat, unit takes {d} damage.";
    let mut skills = vec![
        skill(PassiveA, "HP +3", 50),
        skill(PassiveA, "HP +4", 100),
        skill(PassiveA, "HP +5", 200),
        skill(PassiveA, "Attack +1", 30).with_effect("Grants Atk+1."),
        skill(PassiveA, "Attack +2", 60).with_effect("Grants Atk+2."),
        skill(PassiveA, "Attack +3", 120).with_effect("Grants Atk+3."),
        skill(PassiveA, "Death Blow 1", 50)
            .with_effect("Grants Atk+2 during combat if unit initiates combat."),
        skill(PassiveA, "Darting Blow 1", 50)
            .with_effect("Grants Spd+2 during combat if unit initiates combat."),
        skill(PassiveA, "Armored Blow 1", 50).with_restriction("Armored"),
        skill(PassiveA, "Armored Blow 2", 100).with_restriction("Armored"),
        skill(PassiveA, "Armored Blow 3", 200).with_restriction("Armored"),
        skill(PassiveA, "Swift Sparrow 1", 120).with_require("Death Blow 1|Darting Blow 1"),
        skill(PassiveA, "Swift Sparrow 2", 240),
        skill(PassiveA, "Life and Death 3", 200),
        skill(PassiveA, "Fortress Def 1", 60).with_restriction("Armored"),
        skill(PassiveB, "Swordbreaker 1", 50).with_restriction("Weapon:L,A,Bo,Da,Tr,Tb,Tg,St"),
        skill(PassiveB, "Swordbreaker 2", 100).with_restriction("Weapon:L,A,Bo,Da,Tr,Tb,Tg,St"),
        skill(PassiveB, "Swordbreaker 3", 200).with_restriction("Weapon:L,A,Bo,Da,Tr,Tb,Tg,St"),
        skill(PassiveB, "Vantage 1", 50).with_restriction("Offense"),
        skill(PassiveB, "Vantage 2", 100).with_restriction("Offense"),
        skill(PassiveB, "Vantage 3", 200).with_restriction("Offense"),
        skill(PassiveC, "Hone Cavalry", 200).with_restriction("Cavalry"),
        skill(PassiveC, "Spur Atk 1", 50),
        skill(PassiveC, "Spur Atk 2", 100),
        skill(Seal, "HP +1", 0),
        skill(Seal, "Attack +1", 0).with_effect("Grants Atk+1."),
        skill(Seal, "Squad Ace A 1", 0).with_effect("Grants HP+1."),
        skill(Seal, "Heavy Blade 1", 0).with_restriction("Melee"),
    ];
    for (level, damage, cost) in [(1, 2, 50), (2, 4, 100), (3, 6, 200)] {
        let effect = fury
            .replace("{n}", &level.to_string())
            .replace("{d}", &damage.to_string());
        skills.push(skill(PassiveA, &format!("Fury {level}"), cost).with_effect(effect));
    }
    skills
}

fn upgrades() -> UpgradeTables {
    UpgradeTables {
        melee: BTreeMap::from([
            (Stat::Atk, Stats::new(5, 2, 0, 0, 0)),
            (Stat::Spd, Stats::new(5, 0, 3, 0, 0)),
            (Stat::Def, Stats::new(5, 0, 0, 4, 0)),
            (Stat::Res, Stats::new(5, 0, 0, 0, 4)),
        ]),
        ranged: BTreeMap::from([
            (Stat::Atk, Stats::new(2, 1, 0, 0, 0)),
            (Stat::Spd, Stats::new(2, 0, 2, 0, 0)),
            (Stat::Def, Stats::new(2, 0, 0, 3, 0)),
            (Stat::Res, Stats::new(2, 0, 0, 0, 3)),
        ]),
        wrathful: Some("Damage from staff calculated like other weapons.".into()),
        dazzling: Some("Foe cannot counterattack.".into()),
        special: BTreeMap::from([(
            "Falchion".to_owned(),
            SpecialRefine {
                effect: Some("Grants Atk+2.".into()),
                stats: None,
                common_effect: None,
                variants: vec![RefineVariant {
                    units: vec!["Chrom".into()],
                    effect: "Grants Spd+2.".into(),
                    stats: Some(Stats::new(3, 0, 0, 0, 0)),
                }],
            },
        )]),
        evolutions: vec![Evolution::new("Gravity+", "Pain+")],
    }
}

/// Chrom, Abel, Lilina, Priscilla and Ayra with a matching skill catalog.
pub fn sample_data() -> ReferenceData {
    let mut data = ReferenceData::new().with_upgrades(upgrades());
    for unit in units() {
        data.insert_unit(unit);
    }
    for skill in weapons()
        .into_iter()
        .chain(support_skills())
        .chain(passives())
    {
        data.insert_skill(skill);
    }
    data
}
