use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{CaError, Result};

/// Highest proficiency level a profile skill can hold.
pub const MAX_LEVEL: u8 = 5;

/// A named professional profile with per-skill proficiency levels.
///
/// Skill keys are stored lowercased so lookups are case-insensitive.
/// Re-adding a skill overwrites its level rather than duplicating the key.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    name: String,
    skills: BTreeMap<String, u8>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CaError::validation("profile name must be non-empty"));
        }
        Ok(Self {
            name,
            skills: BTreeMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets or overwrites the proficiency for `skill`.
    pub fn add_skill(&mut self, skill: &str, level: u8) -> Result<()> {
        let key = normalize(skill);
        if key.is_empty() {
            return Err(CaError::validation("skill name must be non-empty"));
        }
        if level > MAX_LEVEL {
            return Err(CaError::validation(format!(
                "proficiency level must be between 0 and {MAX_LEVEL}, got {level}"
            )));
        }
        self.skills.insert(key, level);
        Ok(())
    }

    /// Proficiency for `skill`, or 0 when the profile does not have it.
    pub fn level(&self, skill: &str) -> u8 {
        self.skills.get(&normalize(skill)).copied().unwrap_or(0)
    }

    pub fn skills(&self) -> impl Iterator<Item = (&str, u8)> {
        self.skills.iter().map(|(name, level)| (name.as_str(), *level))
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}

pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// In-memory profile collection for a single run, keyed case-insensitively.
#[derive(Debug, Default)]
pub struct Roster {
    profiles: BTreeMap<String, Profile>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, profile: Profile) {
        self.profiles.insert(normalize(profile.name()), profile);
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(&normalize(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Profile> {
        self.profiles.get_mut(&normalize(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.values().map(Profile::name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
