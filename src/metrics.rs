//! Physical summaries of configurations used by downstream statistics.

use crate::model::configuration::Configuration;

/// Scalar descriptors of a single configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigurationMetrics {
    /// Total energy (eV).
    pub energy: f64,
    /// Total energy divided by the number of atoms (eV/atom).
    pub energy_per_atom: f64,
    /// Mechanical pressure (kbar).
    pub pressure: f64,
    /// Lengths of the three lattice vectors (Å).
    pub lattice_lengths: [f64; 3],
    /// Cell volume (Å³).
    pub volume: f64,
}

impl ConfigurationMetrics {
    /// Returns `None` for configurations without atoms or without a 3×3
    /// lattice.
    pub fn from_configuration(configuration: &Configuration) -> Option<Self> {
        let lattice = configuration.lattice()?;
        let atoms = configuration.number_of_atoms();
        if atoms == 0 {
            return None;
        }

        Some(Self {
            energy: configuration.energy,
            energy_per_atom: configuration.energy / atoms as f64,
            pressure: configuration.stress.mechanical_pressure(),
            lattice_lengths: [norm(&lattice[0]), norm(&lattice[1]), norm(&lattice[2])],
            volume: cell_volume(&lattice),
        })
    }
}

/// Absolute triple product of the lattice vectors.
pub fn cell_volume(lattice: &[[f64; 3]; 3]) -> f64 {
    let [a, b, c] = lattice;
    dot(a, &cross(b, c)).abs()
}

/// Half the length of the shortest non-zero lattice translation among the
/// 26 neighbouring images `i·a + j·b + k·c` with `i, j, k ∈ {-1, 0, 1}`.
///
/// Within this radius around an atom no periodic copy of the same atom can
/// appear.
pub fn non_periodic_radius(lattice: &[[f64; 3]; 3]) -> f64 {
    let mut shortest = f64::INFINITY;

    for i in -1i32..=1 {
        for j in -1i32..=1 {
            for k in -1i32..=1 {
                if i == 0 && j == 0 && k == 0 {
                    continue;
                }
                let mut offset = [0.0; 3];
                for (weight, vector) in [i, j, k].into_iter().zip(lattice) {
                    for axis in 0..3 {
                        offset[axis] += f64::from(weight) * vector[axis];
                    }
                }
                shortest = shortest.min(norm(&offset));
            }
        }
    }

    shortest / 2.0
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn norm(v: &[f64; 3]) -> f64 {
    dot(v, v).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::configuration::StressTensor;
    use crate::model::header::ConfigurationHeader;
    use crate::model::matrix::Matrix;
    use std::sync::Arc;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    const CUBIC: [[f64; 3]; 3] = [[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]];

    #[test]
    fn cubic_cell_volume() {
        assert!(approx_eq(cell_volume(&CUBIC), 64.0, 1e-12));
    }

    #[test]
    fn skewed_cell_volume_uses_triple_product() {
        let lattice = [[2.0, 0.0, 0.0], [1.0, 2.0, 0.0], [0.0, 0.0, 3.0]];
        assert!(approx_eq(cell_volume(&lattice), 12.0, 1e-12));
    }

    #[test]
    fn radius_of_cubic_cell_is_half_edge() {
        assert!(approx_eq(non_periodic_radius(&CUBIC), 2.0, 1e-12));
    }

    #[test]
    fn radius_uses_shortest_image() {
        let elongated = [[10.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 8.0]];
        assert!(approx_eq(non_periodic_radius(&elongated), 1.5, 1e-12));
    }

    #[test]
    fn metrics_of_simple_configuration() {
        let header = Arc::new(ConfigurationHeader::new(
            "C2",
            1,
            2,
            vec![("C".to_string(), 2)],
        ));
        let rows = CUBIC.iter().map(|r| r.to_vec()).collect();
        let conf = Configuration {
            index: 1,
            header,
            ctifor: None,
            lattice_vectors: Matrix::from_rows(rows).unwrap(),
            positions: Matrix::from_rows(vec![vec![0.0; 3]; 2]).unwrap(),
            energy: -10.0,
            forces: Matrix::from_rows(vec![vec![0.0; 3]; 2]).unwrap(),
            stress: StressTensor::new([-3.0, -3.0, -3.0], [0.0, 0.0, 0.0]),
            charges: None,
        };

        let metrics = ConfigurationMetrics::from_configuration(&conf).unwrap();
        assert!(approx_eq(metrics.energy_per_atom, -5.0, 1e-12));
        assert!(approx_eq(metrics.pressure, 3.0, 1e-12));
        assert_eq!(metrics.lattice_lengths, [4.0, 4.0, 4.0]);
        assert!(approx_eq(metrics.volume, 64.0, 1e-12));
    }
}
