//! ReferenceCatalog - Read-only item and skill definitions keyed by name

mod items;

pub use items::{
    ArmorDefinition, ArmorStats, DecorationDefinition, RampageDecorationDefinition,
    RampageSkillDefinition, SkillDefinition, SkillLevel, WeaponDefinition, WeaponElement,
    WeaponStats, WeaponStatus, WeaponType,
};

use crate::config::{self, ConfigError, SHARPNESS_TIERS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// On-disk layout of a catalog: flat lists of definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub weapons: Vec<WeaponDefinition>,
    #[serde(default)]
    pub armor: Vec<ArmorDefinition>,
    #[serde(default)]
    pub decorations: Vec<DecorationDefinition>,
    #[serde(default)]
    pub rampage_decorations: Vec<RampageDecorationDefinition>,
    #[serde(default)]
    pub skills: Vec<SkillDefinition>,
    #[serde(default)]
    pub rampage_skills: Vec<RampageSkillDefinition>,
}

fn default_version() -> String {
    "unversioned".to_string()
}

/// Item and skill definitions, frozen after load
///
/// Every lookup returns `Option`; callers decide how to degrade
/// when a build references something the catalog does not know.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    version: String,
    weapons: HashMap<String, WeaponDefinition>,
    armor: HashMap<String, ArmorDefinition>,
    decorations: HashMap<String, DecorationDefinition>,
    rampage_decorations: HashMap<String, RampageDecorationDefinition>,
    skills: HashMap<String, SkillDefinition>,
    rampage_skills: HashMap<String, RampageSkillDefinition>,
}

fn index_by_name<T>(items: Vec<T>, name: impl Fn(&T) -> &str) -> HashMap<String, T> {
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        map.insert(name(&item).to_string(), item);
    }
    map
}

impl From<CatalogData> for ReferenceCatalog {
    fn from(data: CatalogData) -> Self {
        ReferenceCatalog {
            version: data.version,
            weapons: index_by_name(data.weapons, |w| &w.name),
            armor: index_by_name(data.armor, |a| &a.name),
            decorations: index_by_name(data.decorations, |d| &d.name),
            rampage_decorations: index_by_name(data.rampage_decorations, |d| &d.name),
            skills: index_by_name(data.skills, |s| &s.name),
            rampage_skills: index_by_name(data.rampage_skills, |s| &s.name),
        }
    }
}

impl ReferenceCatalog {
    /// Catalog version; memoized results are keyed on it
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn weapon(&self, name: &str) -> Option<&WeaponDefinition> {
        self.weapons.get(name)
    }

    pub fn armor(&self, name: &str) -> Option<&ArmorDefinition> {
        self.armor.get(name)
    }

    pub fn decoration(&self, name: &str) -> Option<&DecorationDefinition> {
        self.decorations.get(name)
    }

    pub fn rampage_decoration(&self, name: &str) -> Option<&RampageDecorationDefinition> {
        self.rampage_decorations.get(name)
    }

    pub fn skill(&self, name: &str) -> Option<&SkillDefinition> {
        self.skills.get(name)
    }

    pub fn rampage_skill(&self, name: &str) -> Option<&RampageSkillDefinition> {
        self.rampage_skills.get(name)
    }

    /// Number of weapons, armor pieces, decorations and skills
    pub fn len(&self) -> usize {
        self.weapons.len() + self.armor.len() + self.decorations.len() + self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the catalog for data the engine cannot use
    ///
    /// Sharpness arrays must be empty (ranged weapons) or hold exactly one
    /// value per tier, with current never above max. Skills need at least
    /// one level and all stats must be finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        for weapon in self.weapons.values() {
            let stats = &weapon.stats;
            let mut numbers = vec![stats.attack, stats.affinity, stats.defense];
            numbers.extend(stats.element.map(|e| e.power));
            numbers.extend(stats.status.map(|s| s.power));
            if numbers.iter().any(|n| !n.is_finite()) {
                problems.push(format!("weapon '{}' has a non-finite stat", weapon.name));
            }

            let lengths = (weapon.sharpness.len(), weapon.max_sharpness.len());
            match lengths {
                (0, 0) => {}
                (SHARPNESS_TIERS, SHARPNESS_TIERS) => {
                    let over_max = weapon
                        .sharpness
                        .iter()
                        .zip(&weapon.max_sharpness)
                        .any(|(current, max)| current > max);
                    if over_max {
                        problems.push(format!(
                            "weapon '{}' has sharpness above its maximum",
                            weapon.name
                        ));
                    }
                }
                (current, max) => problems.push(format!(
                    "weapon '{}' has {} sharpness and {} max sharpness tiers, expected {}",
                    weapon.name, current, max, SHARPNESS_TIERS
                )),
            }
        }

        for armor in self.armor.values() {
            let finite = armor.stats.defense.is_finite()
                && armor.stats.resistances.iter().all(|(_, r)| r.is_finite());
            if !finite {
                problems.push(format!("armor '{}' has a non-finite stat", armor.name));
            }
        }

        for skill in self.skills.values() {
            if skill.levels.is_empty() {
                problems.push(format!("skill '{}' has no levels", skill.name));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            problems.sort();
            Err(ConfigError::ValidationError(problems.join("; ")))
        }
    }
}

/// Load and validate a catalog from a `.toml` or `.json` file
pub fn load_catalog(path: &Path) -> Result<ReferenceCatalog, ConfigError> {
    let data: CatalogData = config::load_data_file(path)?;
    let catalog = ReferenceCatalog::from(data);
    catalog.validate()?;
    tracing::debug!(
        version = catalog.version(),
        entries = catalog.len(),
        "loaded reference catalog from {}",
        path.display()
    );
    Ok(catalog)
}

/// Parse and validate a catalog from a TOML string
pub fn parse_catalog_toml(content: &str) -> Result<ReferenceCatalog, ConfigError> {
    let data: CatalogData = config::parse_toml(content)?;
    let catalog = ReferenceCatalog::from(data);
    catalog.validate()?;
    Ok(catalog)
}

/// Parse and validate a catalog from a JSON string
pub fn parse_catalog_json(content: &str) -> Result<ReferenceCatalog, ConfigError> {
    let data: CatalogData = serde_json::from_str(content)?;
    let catalog = ReferenceCatalog::from(data);
    catalog.validate()?;
    Ok(catalog)
}

/// The sample catalog bundled with the crate
pub fn sample_catalog() -> Result<ReferenceCatalog, ConfigError> {
    parse_catalog_toml(include_str!("../../data/sample_catalog.toml"))
}
