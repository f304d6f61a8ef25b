use serde::{Deserialize, Serialize};

use crate::constants::{BASE_SPEED, LEVEL_THRESHOLDS, OBSTACLE_COUNTS, SPEED_STEP};

/// Score-driven progression: level from an ascending threshold table,
/// speed and obstacle count derived from the level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPolicy {
    pub thresholds: Vec<u32>,
    pub base_speed: u32,
    pub speed_step: u32,
    pub obstacle_counts: Vec<u32>,
}

impl Default for LevelPolicy {
    fn default() -> Self {
        LevelPolicy {
            thresholds: LEVEL_THRESHOLDS.to_vec(),
            base_speed: BASE_SPEED,
            speed_step: SPEED_STEP,
            obstacle_counts: OBSTACLE_COUNTS.to_vec(),
        }
    }
}

impl LevelPolicy {
    /// Highest level whose threshold is <= score. Level 1 if the table is empty.
    pub fn level_for(&self, score: u32) -> u32 {
        let mut level = 1;
        for (i, &threshold) in self.thresholds.iter().enumerate() {
            if score >= threshold {
                level = i as u32 + 1;
            }
        }
        level
    }

    pub fn speed_for(&self, level: u32) -> u32 {
        self.base_speed + level.saturating_sub(1) * self.speed_step
    }

    /// Obstacle count for the level, clamped to the last table entry.
    pub fn obstacle_count_for(&self, level: u32) -> u32 {
        if self.obstacle_counts.is_empty() {
            return 0;
        }
        let idx = (level.saturating_sub(1) as usize).min(self.obstacle_counts.len() - 1);
        self.obstacle_counts[idx]
    }
}
