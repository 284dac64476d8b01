//! The dataset row model.

use crate::error::DataError;
use serde::{Deserialize, Serialize};

/// The six stat dimensions shown on the parallel-coordinates chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatAxis {
    /// Hit points
    Hp,
    /// Physical attack
    Attack,
    /// Physical defense
    Defense,
    /// Special attack
    SpAtk,
    /// Special defense
    SpDef,
    /// Speed
    Speed,
}

impl StatAxis {
    /// All axes in display order, left to right.
    pub const ALL: [Self; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpAtk,
        Self::SpDef,
        Self::Speed,
    ];

    /// Column/axis label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpAtk => "Sp_Atk",
            Self::SpDef => "Sp_Def",
            Self::Speed => "Speed",
        }
    }
}

/// One dataset row.
///
/// Field names mirror the CSV header. `Type_2` is empty for mono-typed
/// rows and deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Entity name
    #[serde(rename = "Name")]
    pub name: String,
    /// Primary category
    #[serde(rename = "Type_1")]
    pub primary_type: String,
    /// Optional secondary category
    #[serde(rename = "Type_2")]
    pub secondary_type: Option<String>,
    /// Sum of the six stats
    #[serde(rename = "Total")]
    pub total: f64,
    /// Hit points
    #[serde(rename = "HP")]
    pub hp: f64,
    /// Physical attack
    #[serde(rename = "Attack")]
    pub attack: f64,
    /// Physical defense
    #[serde(rename = "Defense")]
    pub defense: f64,
    /// Special attack
    #[serde(rename = "Sp_Atk")]
    pub sp_atk: f64,
    /// Special defense
    #[serde(rename = "Sp_Def")]
    pub sp_def: f64,
    /// Speed
    #[serde(rename = "Speed")]
    pub speed: f64,
    /// Capture difficulty (higher = easier to catch)
    #[serde(rename = "Catch_Rate")]
    pub catch_rate: f64,
}

impl Record {
    /// Value of one stat axis.
    #[must_use]
    pub const fn stat(&self, axis: StatAxis) -> f64 {
        match axis {
            StatAxis::Hp => self.hp,
            StatAxis::Attack => self.attack,
            StatAxis::Defense => self.defense,
            StatAxis::SpAtk => self.sp_atk,
            StatAxis::SpDef => self.sp_def,
            StatAxis::Speed => self.speed,
        }
    }

    /// Reject non-finite numeric fields.
    ///
    /// `row` is the 1-based CSV line number used in the error.
    pub(crate) fn validate(&self, row: usize) -> Result<(), DataError> {
        let fields = [
            ("Total", self.total),
            ("HP", self.hp),
            ("Attack", self.attack),
            ("Defense", self.defense),
            ("Sp_Atk", self.sp_atk),
            ("Sp_Def", self.sp_def),
            ("Speed", self.speed),
            ("Catch_Rate", self.catch_rate),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(DataError::InvalidNumber { row, field });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, primary: &str, total: f64) -> Record {
        Record {
            name: name.to_string(),
            primary_type: primary.to_string(),
            secondary_type: None,
            total,
            hp: 45.0,
            attack: 49.0,
            defense: 49.0,
            sp_atk: 65.0,
            sp_def: 65.0,
            speed: 45.0,
            catch_rate: 45.0,
        }
    }

    #[test]
    fn stat_projection_matches_fields() {
        let r = sample("Bulbasaur", "Grass", 318.0);
        assert_eq!(r.stat(StatAxis::Hp), 45.0);
        assert_eq!(r.stat(StatAxis::SpAtk), 65.0);
        assert_eq!(r.stat(StatAxis::Speed), 45.0);
    }

    #[test]
    fn axis_labels_match_columns() {
        let labels: Vec<_> = StatAxis::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            vec!["HP", "Attack", "Defense", "Sp_Atk", "Sp_Def", "Speed"]
        );
    }

    #[test]
    fn validate_rejects_nan() {
        let mut r = sample("Missingno", "Normal", 0.0);
        r.attack = f64::NAN;
        let err = r.validate(7).expect_err("NaN must be rejected");
        assert!(matches!(
            err,
            DataError::InvalidNumber { row: 7, field: "Attack" }
        ));
    }
}
