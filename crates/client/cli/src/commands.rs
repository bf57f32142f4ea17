//! Subcommand handlers.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use planner_core::{
    BuildEdit, SkillCategory, WeaponRefine, calc_cost, possible_skills, units_with_skill,
};
use planner_runtime::{BuildRepository, FileStore, OracleManager, Session};

use crate::args::{BuildArgs, BuildsAction, Commands};
use crate::config::CliConfig;
use crate::presentation::{render_breakdown, render_learners, render_possible, render_summary};

/// Loaded reference data plus saved builds.
pub struct CliApp {
    oracles: OracleManager,
    builds: BuildRepository,
}

impl CliApp {
    pub fn new(config: &CliConfig) -> Result<Self> {
        let oracles = OracleManager::load(&config.data_dir)?;
        let store = FileStore::new(&config.save_dir).with_context(|| {
            format!("Failed to open save directory {}", config.save_dir.display())
        })?;
        Ok(Self {
            oracles,
            builds: BuildRepository::new(Arc::new(store)),
        })
    }

    pub fn from_parts(oracles: OracleManager, builds: BuildRepository) -> Self {
        Self { oracles, builds }
    }

    /// Runs one subcommand and returns what to print.
    pub fn run(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Stats { build, breakdown } => {
                let session = self.session(&build)?;
                let mut out = render_summary(session.build(), session.summary());
                if breakdown {
                    out.push('\n');
                    out.push_str(&render_breakdown(&session.summary().breakdown));
                }
                Ok(out)
            }
            Commands::Cost {
                unit,
                skill,
                refine,
            } => {
                let env = self.oracles.env();
                let definition = env.require_unit(&unit)?;
                let refine = parse_refine(refine.as_deref(), definition.is_staff_user())?;
                let cost = calc_cost(&env, &unit, &skill, refine);
                Ok(format!("{unit} inherits {skill} for {cost} SP\n"))
            }
            Commands::Skills { unit, slot } => {
                let env = self.oracles.env();
                let definition = env.require_unit(&unit)?;
                Ok(render_possible(&possible_skills(&env, definition), slot))
            }
            Commands::Learners { skill, slot } => {
                let env = self.oracles.env();
                Ok(render_learners(&skill, &units_with_skill(&env, &skill, slot)))
            }
            Commands::Builds { action } => self.run_builds(action),
            Commands::Import { unit, file, save } => {
                let text = std::fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                let session = Session::start(self.oracles.clone(), self.builds.clone(), &unit)?;
                let imported = session.import_wiki(&text)?;

                let mut out = format!("{} build(s) for {unit}\n", imported.len());
                for build in &imported {
                    out.push_str(&format!(
                        "  {} [{}]\n",
                        build.name,
                        [
                            build.record.weapon.as_str(),
                            &build.record.assist,
                            &build.record.special,
                            &build.record.passive_a,
                            &build.record.passive_b,
                            &build.record.passive_c,
                            &build.record.seal,
                        ]
                        .join(" / ")
                    ));
                    if save {
                        self.builds.save(&unit, &build.name, build.record.clone())?;
                    }
                }
                Ok(out)
            }
        }
    }

    fn run_builds(&self, action: BuildsAction) -> Result<String> {
        match action {
            BuildsAction::List { unit } => {
                let saved = self.builds.list(&unit);
                if saved.is_empty() {
                    return Ok(format!("No saved builds for {unit}\n"));
                }
                Ok(saved.into_keys().map(|name| format!("{name}\n")).collect())
            }
            BuildsAction::Save { build, name } => {
                let session = self.session(&build)?;
                session.save_as(&name)?;
                Ok(format!("Saved {} build '{name}'\n", build.unit))
            }
            BuildsAction::Delete { unit, name } => {
                if !self.builds.delete(&unit, &name)? {
                    bail!("No saved build '{name}' for {unit}");
                }
                Ok(format!("Deleted {unit} build '{name}'\n"))
            }
        }
    }

    /// Session with every flag of `args` applied as an edit.
    fn session(&self, args: &BuildArgs) -> Result<Session> {
        let mut session = Session::start(self.oracles.clone(), self.builds.clone(), &args.unit)?;
        if let Some(name) = &args.saved {
            session.load_saved(name)?;
        }
        if args.empty {
            for slot in SkillCategory::ALL {
                session.apply(BuildEdit::SetSkill {
                    slot,
                    skill: String::new(),
                })?;
            }
        }

        let mut edits = Vec::new();
        edits.extend(args.rarity.map(BuildEdit::SetRarity));
        edits.extend(args.level.map(BuildEdit::SetLevel));
        edits.extend(args.merge.map(BuildEdit::SetMerge));
        edits.extend(args.support.map(BuildEdit::SetSupport));
        edits.extend(args.slots().map(|(slot, skill)| BuildEdit::SetSkill {
            slot,
            skill: skill.to_owned(),
        }));
        edits.extend(args.boon.map(|stat| BuildEdit::SetBoon(Some(stat))));
        edits.extend(args.bane.map(|stat| BuildEdit::SetBane(Some(stat))));
        for edit in edits {
            session.apply(edit)?;
        }

        if let Some(code) = args.refine.as_deref() {
            let staff = self.oracles.env().require_unit(&args.unit)?.is_staff_user();
            session.apply(BuildEdit::SetRefine(parse_refine(Some(code), staff)?))?;
        }
        Ok(session)
    }
}

fn parse_refine(code: Option<&str>, staff: bool) -> Result<Option<WeaponRefine>> {
    match code.map(str::trim) {
        None | Some("") => Ok(None),
        Some(code) => WeaponRefine::from_code(code, staff)
            .map(Some)
            .with_context(|| format!("Unknown refine code '{code}' (expected X A S D R W)")),
    }
}
