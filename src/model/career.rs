use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{CaError, Result};
use crate::model::profile::normalize;

/// A target role with required skills and per-skill importance weights.
///
/// Immutable after construction; the catalog is fixed at process start.
#[derive(Debug, Clone, Serialize)]
pub struct Career {
    name: String,
    requirements: BTreeMap<String, f64>,
}

impl Career {
    pub fn new<S: Into<String>>(name: impl Into<String>, requirements: impl IntoIterator<Item = (S, f64)>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CaError::validation("career name must be non-empty"));
        }
        let mut map = BTreeMap::new();
        for (skill, weight) in requirements {
            let key = normalize(&skill.into());
            if key.is_empty() {
                return Err(CaError::validation(format!(
                    "career '{name}' has an empty required-skill name"
                )));
            }
            if weight <= 0.0 || !weight.is_finite() {
                return Err(CaError::validation(format!(
                    "career '{name}': weight for '{key}' must be a positive number"
                )));
            }
            map.insert(key, weight);
        }
        Ok(Self {
            name,
            requirements: map,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requirements(&self) -> impl Iterator<Item = (&str, f64)> {
        self.requirements
            .iter()
            .map(|(skill, weight)| (skill.as_str(), *weight))
    }

    pub fn requires(&self, skill: &str) -> bool {
        self.requirements.contains_key(&normalize(skill))
    }

    pub fn total_weight(&self) -> f64 {
        self.requirements.values().sum()
    }
}

/// The fixed, ordered career catalog populated at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    careers: Vec<Career>,
}

impl Catalog {
    pub fn new(careers: Vec<Career>) -> Self {
        Self { careers }
    }

    /// The built-in catalog of common technology careers.
    pub fn builtin() -> Result<Self> {
        let careers = vec![
            Career::new(
                "Data Analyst",
                [
                    ("sql", 3.0),
                    ("data visualization", 2.5),
                    ("statistics", 2.5),
                    ("python", 2.0),
                    ("communication", 1.5),
                ],
            )?,
            Career::new(
                "Data Scientist",
                [
                    ("python", 3.0),
                    ("machine learning", 3.0),
                    ("statistics", 2.5),
                    ("data visualization", 2.0),
                    ("critical thinking", 1.5),
                    ("communication", 1.5),
                ],
            )?,
            Career::new(
                "Data Engineer",
                [
                    ("sql", 3.0),
                    ("data modeling", 2.5),
                    ("spark", 2.0),
                    ("hadoop", 1.5),
                    ("data governance", 1.5),
                    ("planning", 1.0),
                ],
            )?,
            Career::new(
                "Machine Learning Engineer",
                [
                    ("python", 3.0),
                    ("machine learning", 3.0),
                    ("deep learning", 2.5),
                    ("predictive analytics", 2.0),
                    ("natural language processing", 2.0),
                    ("continuous learning", 1.5),
                ],
            )?,
            Career::new(
                "Business Intelligence Analyst",
                [
                    ("power bi", 2.5),
                    ("data visualization", 2.5),
                    ("sql", 2.0),
                    ("storytelling", 1.5),
                    ("customer focus", 1.5),
                ],
            )?,
            Career::new(
                "DevOps Engineer",
                [
                    ("devops", 3.0),
                    ("ci cd", 2.5),
                    ("kubernetes", 2.5),
                    ("docker", 2.0),
                    ("observability", 1.5),
                    ("collaboration", 1.0),
                ],
            )?,
            Career::new(
                "Cloud Solutions Architect",
                [
                    ("cloud architecture", 3.0),
                    ("microservice architecture", 2.5),
                    ("kubernetes", 2.0),
                    ("infrastructure as code", 2.0),
                    ("leadership", 1.5),
                    ("strategic vision", 1.5),
                ],
            )?,
            Career::new(
                "Cybersecurity Specialist",
                [
                    ("network security", 3.0),
                    ("applied cryptography", 2.5),
                    ("linux administration", 2.0),
                    ("problem solving", 1.5),
                    ("attention to detail", 1.5),
                    ("professional ethics", 1.5),
                ],
            )?,
        ];
        Ok(Self::new(careers))
    }

    pub fn careers(&self) -> &[Career] {
        &self.careers
    }

    pub fn get(&self, name: &str) -> Option<&Career> {
        let key = normalize(name);
        self.careers.iter().find(|c| normalize(c.name()) == key)
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}
