//! Build engine - Aggregation, effect resolution and stat calculation in one call

use crate::build::BuildSelection;
use crate::calc::{calculate_stats, CalculatedStats};
use crate::catalog::{ArmorDefinition, ReferenceCatalog, WeaponDefinition};
use crate::config::EngineConstants;
use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::effects::{resolve_active_effects, ModifierBundle};
use crate::skills::{aggregate_skills, SkillSummary};
use crate::source::serde_label;
use crate::types::ArmorSlot;
use serde::Serialize;

/// Everything computed for one build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildReport {
    pub skills: SkillSummary,
    pub effects: ModifierBundle,
    pub stats: CalculatedStats,
    pub rampage_skills: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Evaluate a build against a catalog
///
/// Never fails: references the catalog does not know contribute nothing
/// and are listed in [`BuildReport::diagnostics`].
pub fn calculate_build(
    build: &BuildSelection,
    catalog: &ReferenceCatalog,
    constants: &EngineConstants,
) -> BuildReport {
    let aggregation = aggregate_skills(build, catalog, &constants.propagation);
    let mut diagnostics = Diagnostics::new();

    let weapon = resolve_weapon(build, catalog, &mut diagnostics);
    let armor = resolve_armor(build, catalog, &mut diagnostics);
    diagnostics.extend(aggregation.diagnostics);

    let effects = resolve_active_effects(
        &aggregation.skills,
        &build.active_skills,
        &constants.affinity,
    );
    let stats = calculate_stats(weapon, &armor, &effects, constants);

    for field in stats.non_finite_fields() {
        diagnostics.push(Diagnostic::NonFiniteStat { field });
    }

    tracing::debug!(
        build = %build.name,
        catalog = catalog.version(),
        skills = aggregation.skills.len(),
        effective_raw = stats.effective_raw,
        diagnostics = diagnostics.len(),
        "calculated build"
    );

    BuildReport {
        skills: aggregation.skills,
        effects,
        stats,
        rampage_skills: aggregation.rampage_skills,
        diagnostics: diagnostics.into_vec(),
    }
}

fn resolve_weapon<'c>(
    build: &BuildSelection,
    catalog: &'c ReferenceCatalog,
    diagnostics: &mut Diagnostics,
) -> Option<&'c WeaponDefinition> {
    let name = &build.weapon.name;
    if name.is_empty() {
        return None;
    }
    let weapon = catalog.weapon(name);
    if weapon.is_none() {
        diagnostics.push(Diagnostic::UnknownWeapon { name: name.clone() });
    }
    weapon
}

fn resolve_armor<'c>(
    build: &BuildSelection,
    catalog: &'c ReferenceCatalog,
    diagnostics: &mut Diagnostics,
) -> Vec<&'c ArmorDefinition> {
    let mut pieces = Vec::with_capacity(ArmorSlot::all().len());
    for slot in ArmorSlot::all() {
        let choice = build.armor(*slot);
        if choice.is_empty() {
            continue;
        }
        match catalog.armor(&choice.name) {
            Some(armor) => pieces.push(armor),
            None => diagnostics.push(Diagnostic::UnknownArmor {
                slot: serde_label(*slot).to_string(),
                name: choice.name.clone(),
            }),
        }
    }
    pieces
}

/// Caches the last report, keyed on the build and the catalog version
///
/// The catalog is treated as frozen for a given version string; bump the
/// version when its contents change.
#[derive(Debug)]
pub struct MemoizedCalculator {
    constants: EngineConstants,
    last: Option<(BuildSelection, String, BuildReport)>,
    computations: u64,
}

impl MemoizedCalculator {
    pub fn new(constants: EngineConstants) -> Self {
        MemoizedCalculator {
            constants,
            last: None,
            computations: 0,
        }
    }

    pub fn constants(&self) -> &EngineConstants {
        &self.constants
    }

    /// Report for `build`, recomputed only when the build or catalog version changed
    pub fn calculate(&mut self, build: &BuildSelection, catalog: &ReferenceCatalog) -> &BuildReport {
        let entry = match self.last.take() {
            Some(entry) if entry.0 == *build && entry.1 == catalog.version() => {
                tracing::trace!(build = %build.name, "reusing cached report");
                entry
            }
            _ => {
                self.computations += 1;
                let report = calculate_build(build, catalog, &self.constants);
                (build.clone(), catalog.version().to_string(), report)
            }
        };
        &self.last.insert(entry).2
    }

    /// Number of times the full pipeline actually ran
    pub fn computations(&self) -> u64 {
        self.computations
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

impl Default for MemoizedCalculator {
    fn default() -> Self {
        Self::new(EngineConstants::default())
    }
}
