//! Ring rotation

use super::state::RingSequence;

/// Rotate every ring, not just the innermost one. Angles are left unwrapped;
/// consumers normalize at the point of use.
pub fn rotate_rings(rings: &mut RingSequence, dt: f32) {
    for ring in rings.iter_mut() {
        ring.rotate(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ring;

    #[test]
    fn test_rotates_all_rings() {
        let mut rings = RingSequence::new([
            Ring::new(80.0, 1.0, 0.6),
            Ring::new(100.0, 1.0, -1.2),
        ]);
        rotate_rings(&mut rings, 0.5);
        let rotations: Vec<f32> = rings.iter().map(|r| r.rotation).collect();
        assert!((rotations[0] - 0.3).abs() < 1e-6);
        assert!((rotations[1] + 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_is_not_wrapped() {
        let mut rings = RingSequence::new([Ring::new(80.0, 1.0, 10.0)]);
        rotate_rings(&mut rings, 1.0);
        assert!(rings.innermost().is_some_and(|r| r.rotation > std::f32::consts::TAU));
    }
}
