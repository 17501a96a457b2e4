//! Element-wise combination of ensemble members' score vectors.
//!
//! Members are summed, not averaged: the ranking is identical either way,
//! and a sum keeps each member's contribution on the same scale it was
//! produced on (typically sigmoid outputs in `[0, 1]`).

use crate::error::{ScoringError, ScoringResult};

/// Sum score vectors element-wise.
///
/// All vectors must have the same length; the first one fixes `L`. A single
/// input is returned unchanged, so an "ensemble of one" and a per-model
/// evaluation share the same downstream path.
pub fn aggregate<V: AsRef<[f32]>>(score_vectors: &[V]) -> ScoringResult<Vec<f32>> {
    let Some((first, rest)) = score_vectors.split_first() else {
        return Err(ScoringError::DimensionMismatch {
            expected: 1,
            found: 0,
        });
    };

    let mut combined = first.as_ref().to_vec();
    for member in rest {
        let member = member.as_ref();
        if member.len() != combined.len() {
            return Err(ScoringError::DimensionMismatch {
                expected: combined.len(),
                found: member.len(),
            });
        }
        for (acc, score) in combined.iter_mut().zip(member) {
            *acc += score;
        }
    }

    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f32], b: &[f32]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-6, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_two_members_sum() {
        let combined =
            aggregate(&[vec![0.9, 0.1, 0.2, 0.3], vec![0.1, 0.8, 0.6, 0.0]]).unwrap();
        assert_close(&combined, &[1.0, 0.9, 0.8, 0.3]);
    }

    #[test]
    fn test_single_member_is_identity() {
        let v = vec![0.25, -1.5, 3.0];
        let combined = aggregate(&[v.clone()]).unwrap();
        assert_eq!(combined, v);
    }

    #[test]
    fn test_order_independent() {
        let a = vec![0.1, 0.7, 0.3];
        let b = vec![0.5, 0.2, 0.9];
        let c = vec![0.4, 0.4, 0.0];
        let abc = aggregate(&[&a, &b, &c]).unwrap();
        let cab = aggregate(&[&c, &a, &b]).unwrap();
        let nested = aggregate(&[aggregate(&[&a, &b]).unwrap(), c.clone()]).unwrap();
        assert_close(&abc, &cab);
        assert_close(&abc, &nested);
    }

    #[test]
    fn test_length_mismatch() {
        let err = aggregate(&[vec![0.1, 0.2], vec![0.1, 0.2, 0.3]]).unwrap_err();
        assert_eq!(
            err,
            ScoringError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_no_members() {
        let empty: [Vec<f32>; 0] = [];
        assert!(matches!(
            aggregate(&empty),
            Err(ScoringError::DimensionMismatch { found: 0, .. })
        ));
    }
}
