use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid::Grid;

pub fn generate_fractal<Alg: FractalAlgorithm>(grid: &Grid, algorithm: &Alg) -> Vec<Alg::Success> {
    grid.samples()
        .iter()
        .map(|&c| algorithm.compute(c))
        .collect()
}
