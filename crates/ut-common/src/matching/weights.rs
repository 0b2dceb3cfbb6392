/// Aggregation weights for the four dimension scores.
/// Experience and location carry the most signal; salary and availability
/// refine the ordering. The table is a fixed policy constant, never loaded
/// at runtime, and must sum to 1.0 so the overall score stays in [0,1].
pub const DEFAULT_WEIGHTS: Weights = Weights {
    experience: 0.35,
    location: 0.30,
    salary: 0.20,
    availability: 0.15,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
    pub availability: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.experience + self.location + self.salary + self.availability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-6);
    }
}
