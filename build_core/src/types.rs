//! Core types shared by the catalog, the build selection and the engine

use serde::{Deserialize, Serialize};

/// Elemental damage / resistance type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Fire,
    Water,
    Thunder,
    Ice,
    Dragon,
}

impl ElementType {
    /// Get all element types
    pub fn all() -> &'static [ElementType] {
        &[
            ElementType::Fire,
            ElementType::Water,
            ElementType::Thunder,
            ElementType::Ice,
            ElementType::Dragon,
        ]
    }
}

/// Status ailment a weapon can inflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusType {
    Poison,
    Paralyze,
    Sleep,
    Blast,
}

impl StatusType {
    /// Get all status types
    pub fn all() -> &'static [StatusType] {
        &[
            StatusType::Poison,
            StatusType::Paralyze,
            StatusType::Sleep,
            StatusType::Blast,
        ]
    }
}

/// Armor piece slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorSlot {
    Head,
    Body,
    Arms,
    Waist,
    Legs,
}

impl ArmorSlot {
    /// Get all armor slots in display order
    pub fn all() -> &'static [ArmorSlot] {
        &[
            ArmorSlot::Head,
            ArmorSlot::Body,
            ArmorSlot::Arms,
            ArmorSlot::Waist,
            ArmorSlot::Legs,
        ]
    }
}

/// A named skill granted at a level by an item, decoration or talisman
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillGrant {
    pub name: String,
    pub level: u32,
}

impl SkillGrant {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        SkillGrant {
            name: name.into(),
            level,
        }
    }
}

/// One value per element type
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementTable<T> {
    pub fire: T,
    pub water: T,
    pub thunder: T,
    pub ice: T,
    pub dragon: T,
}

impl<T> ElementTable<T> {
    /// Build a table by evaluating `f` for every element
    pub fn from_fn(mut f: impl FnMut(ElementType) -> T) -> Self {
        ElementTable {
            fire: f(ElementType::Fire),
            water: f(ElementType::Water),
            thunder: f(ElementType::Thunder),
            ice: f(ElementType::Ice),
            dragon: f(ElementType::Dragon),
        }
    }

    pub fn get(&self, element: ElementType) -> &T {
        match element {
            ElementType::Fire => &self.fire,
            ElementType::Water => &self.water,
            ElementType::Thunder => &self.thunder,
            ElementType::Ice => &self.ice,
            ElementType::Dragon => &self.dragon,
        }
    }

    pub fn get_mut(&mut self, element: ElementType) -> &mut T {
        match element {
            ElementType::Fire => &mut self.fire,
            ElementType::Water => &mut self.water,
            ElementType::Thunder => &mut self.thunder,
            ElementType::Ice => &mut self.ice,
            ElementType::Dragon => &mut self.dragon,
        }
    }

    /// Iterate `(element, value)` pairs in element order
    pub fn iter(&self) -> impl Iterator<Item = (ElementType, &T)> {
        ElementType::all().iter().map(move |e| (*e, self.get(*e)))
    }
}

/// One value per status type
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusTable<T> {
    pub poison: T,
    pub paralyze: T,
    pub sleep: T,
    pub blast: T,
}

impl<T> StatusTable<T> {
    /// Build a table by evaluating `f` for every status
    pub fn from_fn(mut f: impl FnMut(StatusType) -> T) -> Self {
        StatusTable {
            poison: f(StatusType::Poison),
            paralyze: f(StatusType::Paralyze),
            sleep: f(StatusType::Sleep),
            blast: f(StatusType::Blast),
        }
    }

    pub fn get(&self, status: StatusType) -> &T {
        match status {
            StatusType::Poison => &self.poison,
            StatusType::Paralyze => &self.paralyze,
            StatusType::Sleep => &self.sleep,
            StatusType::Blast => &self.blast,
        }
    }

    pub fn get_mut(&mut self, status: StatusType) -> &mut T {
        match status {
            StatusType::Poison => &mut self.poison,
            StatusType::Paralyze => &mut self.paralyze,
            StatusType::Sleep => &mut self.sleep,
            StatusType::Blast => &mut self.blast,
        }
    }

    /// Iterate `(status, value)` pairs in status order
    pub fn iter(&self) -> impl Iterator<Item = (StatusType, &T)> {
        StatusType::all().iter().map(move |s| (*s, self.get(*s)))
    }
}
