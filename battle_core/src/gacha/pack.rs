//! Pack types and their probability tables

use crate::config::ConfigError;
use crate::types::Grade;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Purchasable pack kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackType {
    Normal,
    Rare,
    Hero,
    Legend,
}

impl PackType {
    pub fn all() -> &'static [PackType] {
        &[PackType::Normal, PackType::Rare, PackType::Hero, PackType::Legend]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PackType::Normal => "normal",
            PackType::Rare => "rare",
            PackType::Hero => "hero",
            PackType::Legend => "legend",
        }
    }
}

impl fmt::Display for PackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PackType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(PackType::Normal),
            "rare" => Ok(PackType::Rare),
            "hero" => Ok(PackType::Hero),
            "legend" => Ok(PackType::Legend),
            _ => Err(ConfigError::UnknownPackType(s.to_string())),
        }
    }
}

/// Percent chance per slot of rolling each non-common grade
///
/// Common takes whatever is left of 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRates {
    pub legend: f64,
    pub hero: f64,
    pub rare: f64,
}

impl GradeRates {
    pub fn new(legend: f64, hero: f64, rare: f64) -> Self {
        GradeRates { legend, hero, rare }
    }

    pub fn common(&self) -> f64 {
        (100.0 - self.legend - self.hero - self.rare).max(0.0)
    }

    /// Grade for a roll in [0, 100): the first cumulative band (rarest first)
    /// that exceeds the roll, common otherwise
    pub fn grade_for_roll(&self, roll: f64) -> Grade {
        let bands = [
            (Grade::Legend, self.legend),
            (Grade::Hero, self.hero),
            (Grade::Rare, self.rare),
        ];
        let mut cumulative = 0.0;
        for (grade, rate) in bands {
            cumulative += rate;
            if roll < cumulative {
                return grade;
            }
        }
        Grade::Common
    }

    /// Percent chance of `grade`
    pub fn rate_of(&self, grade: Grade) -> f64 {
        match grade {
            Grade::Legend => self.legend,
            Grade::Hero => self.hero,
            Grade::Rare => self.rare,
            Grade::Common => self.common(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let rates = [self.legend, self.hero, self.rare];
        if rates.iter().any(|r| *r < 0.0) {
            return Err(ConfigError::ValidationError("grade rates must not be negative".to_string()));
        }
        if rates.iter().sum::<f64>() > 100.0 {
            return Err(ConfigError::ValidationError("grade rates exceed 100 percent".to_string()));
        }
        Ok(())
    }
}

/// Size, guarantee and rates of one pack type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackInfo {
    pub card_count: usize,
    pub guaranteed_grade: Grade,
    pub rates: GradeRates,
}

impl PackInfo {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.card_count == 0 {
            return Err(ConfigError::ValidationError("pack card_count must be at least 1".to_string()));
        }
        self.rates.validate()
    }
}

/// Pack configuration for every pack type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackTable {
    packs: HashMap<PackType, PackInfo>,
}

impl PackTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in drop tables
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert(PackType::Normal, PackInfo {
            card_count: 5,
            guaranteed_grade: Grade::Common,
            rates: GradeRates::new(1.0, 4.0, 20.0),
        });
        table.insert(PackType::Rare, PackInfo {
            card_count: 5,
            guaranteed_grade: Grade::Rare,
            rates: GradeRates::new(3.0, 12.0, 35.0),
        });
        table.insert(PackType::Hero, PackInfo {
            card_count: 5,
            guaranteed_grade: Grade::Hero,
            rates: GradeRates::new(5.0, 25.0, 40.0),
        });
        table.insert(PackType::Legend, PackInfo {
            card_count: 5,
            guaranteed_grade: Grade::Legend,
            rates: GradeRates::new(20.0, 35.0, 30.0),
        });
        table
    }

    pub fn insert(&mut self, pack_type: PackType, info: PackInfo) {
        self.packs.insert(pack_type, info);
    }

    pub fn get(&self, pack_type: PackType) -> Option<&PackInfo> {
        self.packs.get(&pack_type)
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}
