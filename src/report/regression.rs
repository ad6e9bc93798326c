#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub n: usize,
    x_mean: f64,
    sxx: f64,
    residual_se: Option<f64>,
}

const T_975: [f64; 30] = [
    12.706, 4.303, 3.182, 2.776, 2.571, 2.447, 2.365, 2.306, 2.262, 2.228, 2.201, 2.179, 2.160,
    2.145, 2.131, 2.120, 2.110, 2.101, 2.093, 2.086, 2.080, 2.074, 2.069, 2.064, 2.060, 2.056,
    2.052, 2.048, 2.045, 2.042,
];

pub fn t_quantile_975(df: usize) -> f64 {
    match df {
        0 => f64::INFINITY,
        1..=30 => T_975[df - 1],
        31..=60 => 2.000,
        61..=120 => 1.980,
        _ => 1.960,
    }
}

pub fn fit_linear(points: &[(f64, f64)]) -> Option<LinearFit> {
    let n = points.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let x_mean = points.iter().map(|p| p.0).sum::<f64>() / nf;
    let y_mean = points.iter().map(|p| p.1).sum::<f64>() / nf;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for &(x, y) in points {
        sxx += (x - x_mean) * (x - x_mean);
        sxy += (x - x_mean) * (y - y_mean);
    }
    if sxx <= f64::EPSILON {
        return None;
    }
    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    let residual_se = if n > 2 {
        let sse: f64 = points
            .iter()
            .map(|&(x, y)| {
                let r = y - (intercept + slope * x);
                r * r
            })
            .sum();
        Some((sse / (nf - 2.0)).sqrt())
    } else {
        None
    };

    Some(LinearFit {
        slope,
        intercept,
        n,
        x_mean,
        sxx,
        residual_se,
    })
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    pub fn confidence_half_width(&self, x: f64) -> Option<f64> {
        let s = self.residual_se?;
        let se = s * (1.0 / self.n as f64 + (x - self.x_mean).powi(2) / self.sxx).sqrt();
        Some(t_quantile_975(self.n - 2) * se)
    }
}
