//! Tunable match rules

/// Numeric rules a match is played under
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Rules {
    /// Members per roster
    pub roster_size: usize,

    /// Resource pool for templates that do not specify one
    pub default_max_resource: u32,

    /// Resource restored to the defending side's active character after each attack
    pub resource_recovery: u32,

    /// Lower bound of the damage variance factor
    pub variance_min: f64,

    /// Upper bound of the damage variance factor
    pub variance_max: f64,

    /// How many entries [`recent_log`](crate::MatchState::recent_log) returns
    pub recent_log_len: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            roster_size: 3,
            default_max_resource: 100,
            resource_recovery: 20,
            variance_min: 0.85,
            variance_max: 1.15,
            recent_log_len: 15,
        }
    }
}
