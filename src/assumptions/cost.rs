//! Baseline monthly cost of living by region and lifestyle

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Cities and counties offered by the input form, in display order
pub const REGIONS: [&str; 22] = [
    "基隆市", "台北市", "新北市", "桃園市", "新竹市", "新竹縣", "苗栗縣", "台中市",
    "彰化縣", "南投縣", "雲林縣", "嘉義市", "嘉義縣", "台南市", "高雄市", "屏東縣",
    "宜蘭縣", "花蓮縣", "台東縣", "澎湖縣", "金門縣", "連江縣",
];

/// Desired standard of living in retirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifestyleTier {
    /// Basic (survival)
    Basic,
    /// Comfortable living
    Comfortable,
    /// Affluent (enjoyment)
    Affluent,
}

impl LifestyleTier {
    pub const ALL: [LifestyleTier; 3] = [
        LifestyleTier::Basic,
        LifestyleTier::Comfortable,
        LifestyleTier::Affluent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LifestyleTier::Basic => "Basic",
            LifestyleTier::Comfortable => "Comfortable",
            LifestyleTier::Affluent => "Affluent",
        }
    }
}

impl fmt::Display for LifestyleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifestyleTier {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Basic" | "basic" | "基礎" => Ok(LifestyleTier::Basic),
            "Comfortable" | "comfortable" | "舒適" => Ok(LifestyleTier::Comfortable),
            "Affluent" | "affluent" | "富裕" => Ok(LifestyleTier::Affluent),
            other => Err(PlanError::Parse(format!("Unknown LifestyleTier: {}", other))),
        }
    }
}

/// Region x lifestyle lookup of the monthly cost in today's money
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostOfLivingTable {
    /// Basic-tier monthly cost per region
    region_base: HashMap<String, f64>,

    /// Multiplier applied to the regional base per lifestyle tier
    lifestyle_multipliers: HashMap<LifestyleTier, f64>,
}

impl CostOfLivingTable {
    /// Build a table; every lifestyle tier must have a multiplier
    pub fn new(
        region_base: HashMap<String, f64>,
        lifestyle_multipliers: HashMap<LifestyleTier, f64>,
    ) -> Result<Self> {
        if let Some(&tier) = LifestyleTier::ALL
            .iter()
            .find(|tier| !lifestyle_multipliers.contains_key(tier))
        {
            return Err(PlanError::MissingMultiplier(tier));
        }
        Ok(Self {
            region_base,
            lifestyle_multipliers,
        })
    }

    /// Default table: 30,000 everywhere except Taipei at 45,000
    pub fn taiwan_default() -> Self {
        let region_base = REGIONS
            .iter()
            .map(|&region| {
                let base = if region == "台北市" { 45_000.0 } else { 30_000.0 };
                (region.to_string(), base)
            })
            .collect();

        Self {
            region_base,
            lifestyle_multipliers: Self::default_multipliers(),
        }
    }

    pub fn default_multipliers() -> HashMap<LifestyleTier, f64> {
        HashMap::from([
            (LifestyleTier::Basic, 1.0),
            (LifestyleTier::Comfortable, 1.5),
            (LifestyleTier::Affluent, 2.5),
        ])
    }

    /// Monthly cost for a region and lifestyle in today's money
    pub fn monthly_cost(&self, region: &str, lifestyle: LifestyleTier) -> Result<f64> {
        let base = self
            .region_base
            .get(region)
            .copied()
            .ok_or_else(|| PlanError::UnknownRegion(region.to_string()))?;
        let multiplier = self
            .lifestyle_multipliers
            .get(&lifestyle)
            .copied()
            .ok_or(PlanError::MissingMultiplier(lifestyle))?;
        Ok(base * multiplier)
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.region_base.keys().map(String::as_str)
    }
}

impl Default for CostOfLivingTable {
    fn default() -> Self {
        Self::taiwan_default()
    }
}
