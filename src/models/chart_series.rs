use crate::models::Projection;

/// Two index-aligned sequences handed to whatever draws the chart:
/// month labels `1..=N` and the closing balance of each month.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<usize>,
    pub balances: Vec<f64>,
    /// Deposits without interest, same alignment as `balances`.
    pub principal: Vec<f64>,
}

impl ChartSeries {
    pub fn from_projection(projection: &Projection) -> Self {
        let labels = projection.labels();
        let principal = labels.iter().map(|&m| projection.principal_at(m)).collect();
        Self {
            labels,
            balances: projection.balances().to_vec(),
            principal,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn balance_points(&self) -> Vec<[f64; 2]> {
        Self::points(&self.labels, &self.balances)
    }

    pub fn principal_points(&self) -> Vec<[f64; 2]> {
        Self::points(&self.labels, &self.principal)
    }

    fn points(labels: &[usize], values: &[f64]) -> Vec<[f64; 2]> {
        labels
            .iter()
            .zip(values)
            .map(|(&m, &v)| [m as f64, v])
            .collect()
    }

    /// Largest value on either line, used for the y bounds.
    pub fn max_value(&self) -> Option<f64> {
        self.balances
            .iter()
            .chain(&self.principal)
            .copied()
            .reduce(f64::max)
    }
}
