//! Import of community builds from wiki markup.
//!
//! Builds are `{{Skillbuild Infobox | key = value | ...}}` templates. Values
//! run up to the next `|`, `}` or line break.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use planner_core::{BoonBane, BuildRecord, SkillSet, Stat, UnitDefinition};
use regex::Regex;

/// Appended to the name of a build whose markup could not be read fully.
pub const ERROR_SUFFIX: &str = " !!Error!!";

static INFOBOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{\s*Skillbuild[_ ]Infobox(.*?)\}\}").expect("static infobox pattern")
});

static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\|\s*([A-Za-z0-9]+)\s*=([^|}\n]*)").expect("static field pattern")
});

static BOON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\+\s*(HP|Atk|Spd|Def|Res)").expect("static boon pattern"));

static BANE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)-\s*(HP|Atk|Spd|Def|Res)").expect("static bane pattern"));

static NEUTRAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Neutral|Any|Flexible").expect("static neutral pattern"));

static QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \(\w+\)").expect("static qualifier pattern"));

static ATTACK_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Atk/(Def|Res) \d").expect("static passive pattern"));

/// A named build read from wiki markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportedBuild {
    pub name: String,
    pub record: BuildRecord,
}

impl ImportedBuild {
    pub fn has_error(&self) -> bool {
        self.name.ends_with(ERROR_SUFFIX)
    }
}

/// Template fields keyed by lowercase name.
fn fields(block: &str) -> HashMap<String, String> {
    FIELD
        .captures_iter(block)
        .map(|caps| (caps[1].to_ascii_lowercase(), caps[2].trim().to_owned()))
        .collect()
}

fn is_flexible(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("flexible")
}

/// `+Atk -HP` style IVs. Empty or neutral text means no boon/bane.
fn parse_ivs(ivs: &str) -> Option<BoonBane> {
    if ivs.is_empty() || NEUTRAL.is_match(ivs) {
        return Some(BoonBane::NEUTRAL);
    }
    let stat = |regex: &Regex| {
        regex
            .captures(ivs)
            .and_then(|caps| Stat::from_str(&caps[1]).ok())
    };
    Some(BoonBane::new(Some(stat(&BOON)?), Some(stat(&BANE)?)))
}

/// Wiki spellings of weapon names that differ from the game data.
fn normalize_weapon(weapon: &str) -> String {
    let weapon = weapon
        .replacen("Blar", "Blár", 1)
        .replacen("Raudr", "Rauðr", 1)
        .replacen("Urdr", "Urðr", 1);
    QUALIFIER.replace(&weapon, "").into_owned()
}

fn normalize_passive_a(passive: &str) -> String {
    match ATTACK_PAIR.captures(passive) {
        Some(caps) if &caps[1] == "Def" => passive.replacen("Atk/Def ", "Attack/Def +", 1),
        Some(_) => passive.replacen("Atk", "Attack", 1),
        None => passive.to_owned(),
    }
}

fn refine_code(refine: &str, staff: bool) -> &'static str {
    match refine.to_ascii_lowercase().as_str() {
        "skill" if staff => "W",
        "skill" => "X",
        "atk" => "A",
        "spd" => "S",
        "def" | "skill2" => "D",
        "res" => "R",
        _ => "",
    }
}

/// Skill fields of a build. Values still carrying link or template markup
/// cannot be read.
fn parse_skills<'f>(get: &impl Fn(&str) -> &'f str, staff: bool) -> Option<BuildRecord> {
    let skill = |key: &str| {
        let value = get(key);
        (!value.contains("[[") && !value.contains("{{")).then(|| value.to_owned())
    };
    Some(BuildRecord {
        weapon: normalize_weapon(&skill("weapon")?),
        upgrade: refine_code(get("weaponrefine"), staff).to_owned(),
        assist: skill("assist")?,
        special: skill("special")?,
        passive_a: normalize_passive_a(&skill("passivea")?),
        passive_b: skill("passiveb")?,
        passive_c: skill("passivec")?,
        seal: skill("seal")?,
        ..BuildRecord::default()
    })
}

fn parse_block(unit: &UnitDefinition, block: &str) -> Option<ImportedBuild> {
    let fields = fields(block);
    let get = |key: &str| {
        fields
            .get(key)
            .map(String::as_str)
            .filter(|value| !is_flexible(value))
            .unwrap_or_default()
    };

    let name = fields.get("name").map(String::as_str).unwrap_or_default();
    if name.is_empty() || name == "-" {
        tracing::debug!(unit = %unit.name, "skipping unnamed wiki build");
        return None;
    }

    let mut has_error = false;
    let boon_bane = parse_ivs(get("ivs")).unwrap_or_else(|| {
        tracing::warn!(unit = %unit.name, build = name, "unreadable IVs in wiki build");
        has_error = true;
        BoonBane::NEUTRAL
    });

    let record = match parse_skills(&get, unit.is_staff_user()) {
        Some(skills) => BuildRecord {
            boon: boon_bane.boon().map(|stat| stat.to_string()).unwrap_or_default(),
            bane: boon_bane.bane().map(|stat| stat.to_string()).unwrap_or_default(),
            ..skills
        },
        None => {
            tracing::warn!(unit = %unit.name, build = name, "unreadable skills in wiki build");
            has_error = true;
            BuildRecord::new(&SkillSet::default_for(unit), boon_bane)
        }
    };

    let name = if has_error {
        format!("{name}{ERROR_SUFFIX}")
    } else {
        name.to_owned()
    };
    Some(ImportedBuild { name, record })
}

/// Reads every build template in `text` for `unit`, in order.
///
/// A later build with an already-seen name replaces the earlier one in place.
pub fn parse_wiki_builds(unit: &UnitDefinition, text: &str) -> Vec<ImportedBuild> {
    let mut builds: Vec<ImportedBuild> = Vec::new();
    for caps in INFOBOX.captures_iter(text) {
        let Some(build) = parse_block(unit, &caps[1]) else {
            continue;
        };
        match builds.iter_mut().find(|existing| existing.name == build.name) {
            Some(existing) => *existing = build,
            None => builds.push(build),
        }
    }
    tracing::debug!(unit = %unit.name, count = builds.len(), "imported wiki builds");
    builds
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{Color, MoveType, SkillCategory, WeaponType};

    fn lilina() -> UnitDefinition {
        UnitDefinition::new("Lilina", Color::Red, WeaponType::Tome, MoveType::Infantry)
            .with_skill(SkillCategory::Weapon, "Forblaze", None)
    }

    fn priscilla() -> UnitDefinition {
        UnitDefinition::new("Priscilla", Color::Neutral, WeaponType::Staff, MoveType::Cavalry)
    }

    const PAGE: &str = "intro text
{{Skillbuild Infobox
|name=Nuke
|ivs=+atk -HP
|weapon=Blarblade+ (Tome)
|weaponRefine=atk
|assist=Flexible
|special=Moonbow
|passiveA=Atk/Def 2
|passiveB=Desperation 3
|passiveC=Atk Smoke 3
|seal=Attack +3
}}
{{Skillbuild_Infobox|name=Tank|ivs=Neutral|weapon=Forblaze|passiveA=Atk/Res 2}}
{{Skillbuild Infobox|name=-|weapon=Forblaze}}";

    #[test]
    fn reads_every_named_build() {
        let builds = parse_wiki_builds(&lilina(), PAGE);
        let names: Vec<_> = builds.iter().map(|build| build.name.as_str()).collect();
        assert_eq!(names, ["Nuke", "Tank"]);
    }

    #[test]
    fn fields_are_normalized() {
        let builds = parse_wiki_builds(&lilina(), PAGE);
        let nuke = &builds[0].record;
        assert_eq!(nuke.boon, "Atk");
        assert_eq!(nuke.bane, "HP");
        assert_eq!(nuke.weapon, "Blárblade+");
        assert_eq!(nuke.upgrade, "A");
        assert_eq!(nuke.assist, "");
        assert_eq!(nuke.passive_a, "Attack/Def +2");
        assert_eq!(nuke.seal, "Attack +3");

        let tank = &builds[1].record;
        assert_eq!(tank.boon, "");
        assert_eq!(tank.passive_a, "Attack/Res 2");
        assert_eq!(tank.special, "");
    }

    #[test]
    fn skill_refine_depends_on_staff_users() {
        let page = "{{Skillbuild Infobox|name=Heal|weaponRefine=skill}}";
        assert_eq!(parse_wiki_builds(&priscilla(), page)[0].record.upgrade, "W");
        assert_eq!(parse_wiki_builds(&lilina(), page)[0].record.upgrade, "X");
    }

    #[test]
    fn unreadable_ivs_flag_the_build() {
        let page = "{{Skillbuild Infobox|name=Odd|ivs=+Luck -Atk|weapon=Forblaze}}";
        let build = &parse_wiki_builds(&lilina(), page)[0];
        assert!(build.has_error());
        assert_eq!(build.name, "Odd !!Error!!");
        assert_eq!(build.record.boon, "");
        assert_eq!(build.record.weapon, "Forblaze");
    }

    #[test]
    fn duplicate_names_keep_the_first_position() {
        let page = "{{Skillbuild Infobox|name=A|weapon=One}}\
                    {{Skillbuild Infobox|name=B|weapon=Two}}\
                    {{Skillbuild Infobox|name=A|weapon=Three}}";
        let builds = parse_wiki_builds(&lilina(), page);
        assert_eq!(builds.len(), 2);
        assert_eq!(builds[0].record.weapon, "Three");
    }

    #[test]
    fn unreadable_skills_fall_back_to_the_default_loadout() {
        let page = "{{Skillbuild Infobox|name=Linked|ivs=+Spd -Def|weapon=Tome{{sic}}|special=Moonbow}}";
        let build = &parse_wiki_builds(&lilina(), page)[0];
        assert!(build.has_error());
        assert_eq!(build.record.weapon, "Forblaze");
        assert_eq!(build.record.special, "");
        assert_eq!(build.record.boon, "Spd");
    }
}
