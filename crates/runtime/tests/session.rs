use std::path::PathBuf;
use std::sync::Arc;

use planner_core::{BuildEdit, SkillCategory, Stat, WeaponRefine};
use planner_runtime::{
    BuildRepository, FileStore, InMemoryStore, OracleManager, RuntimeError, Session,
};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../planner/content/tests/data")
}

fn session(unit: &str) -> Session {
    let oracles = OracleManager::load(&data_dir()).expect("fixture data should load");
    let builds = BuildRepository::new(Arc::new(InMemoryStore::new()));
    Session::start(oracles, builds, unit).expect("session should start")
}

/// Planning Scenario Test
///
/// 1. Session starts on Chrom's default loadout
/// 2. Edits change cost and stats
/// 3. The build is saved, changed, and restored
/// 4. Rejected edits leave the session untouched
#[test]
fn test_complete_planning_scenario() {
    // ================================================================
    // PHASE 1: Start
    // ================================================================
    let mut session = session("Chrom");
    assert_eq!(session.build().skills.weapon.as_deref(), Some("Falchion"));
    assert_eq!(session.summary().total_cost, 0);
    let base_atk = session.summary().stats.atk;

    // ================================================================
    // PHASE 2: Edits
    // ================================================================
    let summary = session
        .apply(BuildEdit::SetSkill {
            slot: SkillCategory::PassiveA,
            skill: "Attack +3".into(),
        })
        .expect("passive should apply");
    assert_eq!(summary.total_cost, 315);
    // Death Blow 1 (combat-only) is replaced by a flat Atk+3
    assert_eq!(summary.stats.atk, base_atk + 3);

    session
        .apply(BuildEdit::SetBoon(Some(Stat::Atk)))
        .expect("boon should apply");
    session
        .apply(BuildEdit::SetBane(Some(Stat::Res)))
        .expect("bane should apply");

    // ================================================================
    // PHASE 3: Save and restore
    // ================================================================
    session.save_as("Offense").expect("save should succeed");
    session.apply(BuildEdit::Reset).expect("reset should apply");
    assert_eq!(session.summary().total_cost, 0);

    let summary = session.load_saved("Offense").expect("saved build loads");
    assert_eq!(summary.total_cost, 315);
    assert_eq!(session.build().boon_bane().boon(), Some(Stat::Atk));
    assert_eq!(session.saved_builds().len(), 1);

    assert!(session.delete_saved("Offense").expect("delete"));
    assert!(matches!(
        session.load_saved("Offense"),
        Err(RuntimeError::BuildNotFound { .. })
    ));

    // ================================================================
    // PHASE 4: Rejected edits
    // ================================================================
    let before = session.build().clone();
    let err = session
        .apply(BuildEdit::SelectUnit("Nobody".into()))
        .expect_err("unknown unit is rejected");
    assert!(matches!(err, RuntimeError::Build(_)));
    assert_eq!(session.build(), &before);
}

#[test]
fn refines_add_surcharge_and_stats() {
    let mut session = session("Abel");
    let base = session.summary().stats;
    let summary = session
        .apply(BuildEdit::SetRefine(Some(WeaponRefine::Speed)))
        .expect("Brave Lance+ is refinable");
    assert_eq!(summary.slot_costs.weapon, 350);
    assert_eq!(summary.stats.hp, base.hp + 5);
    assert_eq!(summary.stats.spd, base.spd + 3);
}

#[test]
fn saved_builds_persist_in_a_file_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let oracles = OracleManager::load(&data_dir()).expect("data");
    {
        let store = Arc::new(FileStore::new(dir.path()).expect("store"));
        let session = Session::start(oracles.clone(), BuildRepository::new(store), "Abel")
            .expect("session");
        session.save_as("Default").expect("save");
        assert!(matches!(session.save_as("  "), Err(RuntimeError::EmptyBuildName)));
    }

    let store = Arc::new(FileStore::new(dir.path()).expect("store"));
    let session = Session::start(oracles, BuildRepository::new(store), "Abel").expect("session");
    let saved = session.saved_builds();
    assert_eq!(saved["Default"].weapon, "Brave Lance+");
}

#[test]
fn wiki_import_uses_the_session_unit() {
    let session = session("Priscilla");
    let builds = session
        .import_wiki("{{Skillbuild Infobox|name=Support|weapon=Gravity+|weaponRefine=skill}}")
        .expect("import");
    assert_eq!(builds[0].record.upgrade, "W");
}

#[test]
fn missing_data_directory_is_a_content_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = OracleManager::load(dir.path()).err().expect("load should fail");
    assert!(matches!(err, RuntimeError::Content { .. }));
}

#[test]
fn special_effect_follows_the_current_stats() {
    let mut session = session("Chrom");
    let summary = session
        .apply(BuildEdit::SetSkill {
            slot: SkillCategory::Special,
            skill: "Iceberg".into(),
        })
        .expect("special should apply");
    let res = summary.stats.res;
    assert_eq!(
        summary.special_effect.as_deref(),
        Some(format!("Boosts damage by {}.", res / 2).as_str())
    );

    let summary = session
        .apply(BuildEdit::SetSupport(planner_core::SupportRank::C))
        .expect("support should apply");
    assert_eq!(summary.stats.res, res + 2);
    assert_eq!(
        summary.special_effect.as_deref(),
        Some(format!("Boosts damage by {}.", (res + 2) / 2).as_str())
    );
}
