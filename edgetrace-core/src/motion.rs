// Motion planner
// Classifies deltas as button-held steps or button-released jumps

use serde::{Deserialize, Serialize};

use crate::emitter;
use crate::types::{Coordinate, Delta};

/// One entry of a replay plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Motion {
    /// Both components in [-1, 1]; moved while the drag button stays down
    Step(Delta),
    /// Anything larger; button released, walked axis by axis, pressed again
    Jump(Delta),
}

impl Motion {
    pub fn delta(&self) -> Delta {
        match *self {
            Motion::Step(d) | Motion::Jump(d) => d,
        }
    }

    pub fn is_jump(&self) -> bool {
        matches!(self, Motion::Jump(_))
    }
}

/// Step when |dx| <= 1 and |dy| <= 1, jump otherwise
pub fn classify(delta: Delta) -> Motion {
    if delta.is_unit() {
        Motion::Step(delta)
    } else {
        Motion::Jump(delta)
    }
}

/// Classified motions in replay order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionPlan {
    pub motions: Vec<Motion>,
}

/// Totals over a plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub steps: usize,
    pub jumps: usize,
    /// Unit moves needed to walk every jump
    pub jump_moves: u64,
    /// Sum of all deltas
    pub net: Delta,
}

impl MotionPlan {
    pub fn from_deltas(deltas: &[Delta]) -> Self {
        Self {
            motions: deltas.iter().copied().map(classify).collect(),
        }
    }

    pub fn from_path(path: &[Coordinate]) -> Self {
        Self::from_deltas(&emitter::deltas(path))
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Motion> {
        self.motions.iter()
    }

    pub fn summary(&self) -> PlanSummary {
        self.motions
            .iter()
            .fold(PlanSummary::default(), |mut acc, motion| {
                match motion {
                    Motion::Step(_) => acc.steps += 1,
                    Motion::Jump(d) => {
                        acc.jumps += 1;
                        acc.jump_moves += d.manhattan();
                    }
                }
                acc.net = acc.net + motion.delta();
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classification_boundary() {
        assert_eq!(classify(Delta::new(1, 1)), Motion::Step(Delta::new(1, 1)));
        assert_eq!(classify(Delta::new(-1, -1)), Motion::Step(Delta::new(-1, -1)));
        assert_eq!(classify(Delta::new(0, 0)), Motion::Step(Delta::new(0, 0)));
        assert_eq!(classify(Delta::new(2, 0)), Motion::Jump(Delta::new(2, 0)));
        assert_eq!(classify(Delta::new(0, -2)), Motion::Jump(Delta::new(0, -2)));
        assert_eq!(classify(Delta::new(1, -2)), Motion::Jump(Delta::new(1, -2)));
    }

    #[test]
    fn summary_counts_jump_moves() {
        let plan = MotionPlan::from_deltas(&[
            Delta::new(1, 0),
            Delta::new(-3, 2),
            Delta::new(0, 1),
            Delta::new(4, 0),
        ]);
        assert_eq!(
            plan.summary(),
            PlanSummary {
                steps: 2,
                jumps: 2,
                jump_moves: 9,
                net: Delta::new(2, 3),
            }
        );
    }

    #[test]
    fn plan_serializes_with_kind_tag() {
        let plan = MotionPlan::from_deltas(&[Delta::new(1, 0), Delta::new(0, 5)]);
        let json = serde_json::to_string(&plan).unwrap();
        assert_eq!(
            json,
            r#"{"motions":[{"kind":"step","dx":1,"dy":0},{"kind":"jump","dx":0,"dy":5}]}"#
        );
        let back: MotionPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
