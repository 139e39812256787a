//! Ordered geography tier descriptors
//!
//! Each descriptor pairs a tier with the accessors that read its grouping value from
//! a worker row or from a county index entry. The fallback estimator and the
//! aggregator iterate [`TIER_DESCRIPTORS`] instead of branching per tier.

use crate::models::{CountyGeography, STATE_GEO, Tier, WorkerRecord};

/// Tier name plus its grouping-value accessors
#[derive(Debug, Clone, Copy)]
pub struct TierDescriptor {
    /// The tier
    pub tier: Tier,
    /// Display label
    pub label: &'static str,
    worker_key: fn(&WorkerRecord) -> &str,
    index_key: fn(&CountyGeography) -> &str,
}

impl TierDescriptor {
    /// Grouping value of a worker at this tier
    #[must_use]
    pub fn worker_value<'a>(&self, record: &'a WorkerRecord) -> &'a str {
        (self.worker_key)(record)
    }

    /// Grouping value of a county index entry at this tier
    #[must_use]
    pub fn county_value<'a>(&self, geography: &'a CountyGeography) -> &'a str {
        (self.index_key)(geography)
    }
}

fn worker_county(record: &WorkerRecord) -> &str {
    &record.county
}

fn worker_regional_urban_rural(record: &WorkerRecord) -> &str {
    &record.regional_urban_rural_class
}

fn worker_region(record: &WorkerRecord) -> &str {
    &record.region
}

fn worker_urban_rural(record: &WorkerRecord) -> &str {
    &record.urban_rural_class
}

fn worker_state(_record: &WorkerRecord) -> &str {
    STATE_GEO
}

fn index_county(geography: &CountyGeography) -> &str {
    &geography.county
}

fn index_regional_urban_rural(geography: &CountyGeography) -> &str {
    &geography.regional_urban_rural_class
}

fn index_region(geography: &CountyGeography) -> &str {
    &geography.region
}

fn index_urban_rural(geography: &CountyGeography) -> &str {
    &geography.urban_rural_class
}

fn index_state(_geography: &CountyGeography) -> &str {
    STATE_GEO
}

/// All tiers in fallback precedence, finest first
pub static TIER_DESCRIPTORS: [TierDescriptor; 5] = [
    TierDescriptor {
        tier: Tier::County,
        label: "County",
        worker_key: worker_county,
        index_key: index_county,
    },
    TierDescriptor {
        tier: Tier::RegionalUrbanRural,
        label: "Regional Urban/Rural",
        worker_key: worker_regional_urban_rural,
        index_key: index_regional_urban_rural,
    },
    TierDescriptor {
        tier: Tier::Region,
        label: "Region",
        worker_key: worker_region,
        index_key: index_region,
    },
    TierDescriptor {
        tier: Tier::UrbanRural,
        label: "Urban/Rural",
        worker_key: worker_urban_rural,
        index_key: index_urban_rural,
    },
    TierDescriptor {
        tier: Tier::State,
        label: "State",
        worker_key: worker_state,
        index_key: index_state,
    },
];

/// Descriptor for `tier`
#[must_use]
pub fn descriptor(tier: Tier) -> &'static TierDescriptor {
    &TIER_DESCRIPTORS[tier.rank()]
}

/// Descriptors from `start` down to state
#[must_use]
pub fn descent_from(start: Tier) -> &'static [TierDescriptor] {
    &TIER_DESCRIPTORS[start.rank()..]
}
