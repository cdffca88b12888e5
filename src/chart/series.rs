//! Contribution, simple interest and compound interest series
//!
//! All values are closed-form functions of time in years.

use super::params::ChartParams;
use crate::error::GeneratorError;

/// Fraction of the value axis a layer may dip below zero before it is rejected.
///
/// With continuous simple interest and monthly compounding the compound layer
/// runs a few pounds negative during the first couple of years.
pub const NEGATIVE_LAYER_TOLERANCE: f64 = 1e-4;

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Principal paid in after `t` years
pub fn contributed(params: &ChartParams, t: f64) -> f64 {
    params.monthly_contribution * 12.0 * t
}

/// Principal plus interest that is never reinvested
/// PMT * 12 * r * t^2 / 2 on top of the principal
pub fn simple_total(params: &ChartParams, t: f64) -> f64 {
    contributed(params, t) + params.monthly_contribution * 12.0 * params.annual_rate * t * t / 2.0
}

/// Future value of the monthly annuity
/// FV = PMT * ((1 + r/n)^(n*t) - 1) / (r/n)
///
/// Defined as 0 at the origin rather than evaluating 0/0.
pub fn compound_total(params: &ChartParams, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    let i = params.period_rate();
    let n = params.compounds_per_year as f64;
    params.monthly_contribution * ((1.0 + i).powf(n * t) - 1.0) / i
}

/// Sampled series and the three stack layers drawn by the chart
#[derive(Debug, Clone)]
pub struct GrowthSeries {
    pub t: Vec<f64>,
    pub contributed: Vec<f64>,
    pub simple_total: Vec<f64>,
    pub compound_total: Vec<f64>,
    /// Layer 1: total contributed
    pub principal: Vec<f64>,
    /// Layer 2: simple interest component (simple total - contributed)
    pub simple_interest: Vec<f64>,
    /// Layer 3: compounding bonus (compound total - simple total)
    pub compound_interest: Vec<f64>,
    years: f64,
}

impl GrowthSeries {
    /// Sample every series over `0..=years` and run the sanity checks
    pub fn compute(params: &ChartParams) -> Result<Self, GeneratorError> {
        if params.samples < 2 {
            return Err(GeneratorError::InvalidParams(format!(
                "need at least 2 samples, got {}",
                params.samples
            )));
        }
        if !(params.years > 0.0) {
            return Err(GeneratorError::InvalidParams(format!(
                "years must be positive, got {}",
                params.years
            )));
        }
        if params.compounds_per_year == 0 || !(params.annual_rate > 0.0) {
            return Err(GeneratorError::InvalidParams(format!(
                "rate {} compounded {} times a year is not a growth rate",
                params.annual_rate, params.compounds_per_year
            )));
        }

        let t = linspace(0.0, params.years, params.samples);
        let contributed: Vec<f64> = t.iter().map(|&x| contributed(params, x)).collect();
        let simple_total: Vec<f64> = t.iter().map(|&x| simple_total(params, x)).collect();
        let compound_total: Vec<f64> = t.iter().map(|&x| compound_total(params, x)).collect();

        let principal = contributed.clone();
        let simple_interest: Vec<f64> = simple_total
            .iter()
            .zip(&contributed)
            .map(|(s, c)| s - c)
            .collect();
        let compound_interest: Vec<f64> = compound_total
            .iter()
            .zip(&simple_total)
            .map(|(c, s)| c - s)
            .collect();

        let series = Self {
            t,
            contributed,
            simple_total,
            compound_total,
            principal,
            simple_interest,
            compound_interest,
            years: params.years,
        };
        series.check(params)?;

        log::debug!(
            "Computed {} samples; final totals: contributed={:.2}, simple={:.2}, compound={:.2}",
            series.len(),
            series.contributed.last().copied().unwrap_or(0.0),
            series.simple_total.last().copied().unwrap_or(0.0),
            series.compound_total.last().copied().unwrap_or(0.0),
        );

        Ok(series)
    }

    fn check(&self, params: &ChartParams) -> Result<(), GeneratorError> {
        let tolerance = params.value_axis_max * NEGATIVE_LAYER_TOLERANCE;
        for (layer, values) in self.layers().iter().enumerate() {
            if let Some((index, &value)) = values
                .iter()
                .enumerate()
                .find(|(_, v)| **v < -tolerance)
            {
                return Err(GeneratorError::NegativeLayer {
                    layer: layer + 1,
                    index,
                    value,
                });
            }
        }

        if let Some(&value) = self
            .compound_total
            .iter()
            .find(|v| **v > params.value_axis_max)
        {
            return Err(GeneratorError::ValueAxisOverflow {
                value,
                max: params.value_axis_max,
            });
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Layers in stacking order, bottom first
    pub fn layers(&self) -> [&[f64]; 3] {
        [
            self.principal.as_slice(),
            self.simple_interest.as_slice(),
            self.compound_interest.as_slice(),
        ]
    }

    /// Height of the stack at sample `i`
    pub fn stack_total(&self, i: usize) -> f64 {
        self.principal[i] + self.simple_interest[i] + self.compound_interest[i]
    }

    /// Sample used to anchor the pointer labels, one year before the horizon
    pub fn annotation_index(&self) -> usize {
        let n = self.len();
        let idx = (n as f64 * (self.years - 1.0) / self.years).floor().max(0.0) as usize;
        idx.min(n.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_linspace() {
        let t = linspace(0.0, 25.0, 100);
        assert_eq!(t.len(), 100);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[99], 25.0);
        assert_relative_eq!(t[1] - t[0], 25.0 / 99.0, epsilon = 1e-12);

        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_origin_is_zero() {
        let params = ChartParams::default();
        assert_eq!(contributed(&params, 0.0), 0.0);
        assert_eq!(simple_total(&params, 0.0), 0.0);
        assert_eq!(compound_total(&params, 0.0), 0.0);
        assert!(compound_total(&params, 0.0).is_finite());
    }

    #[test]
    fn test_values_at_horizon() {
        let params = ChartParams::default();

        // 300 * 12 * 25
        assert_relative_eq!(contributed(&params, 25.0), 90_000.0, epsilon = 1e-6);

        // 90000 + 300 * 12 * 0.07 * 625 / 2
        assert_relative_eq!(simple_total(&params, 25.0), 168_750.0, epsilon = 1e-6);

        let fv = compound_total(&params, 25.0);
        let expected = 300.0 * ((1.0 + 0.07_f64 / 12.0).powf(300.0) - 1.0) / (0.07 / 12.0);
        assert_relative_eq!(fv, expected, epsilon = 1e-6);
        assert!((fv - 243_000.0).abs() < 243_000.0 * 0.03, "fv = {}", fv);
        assert!(fv < params.value_axis_max);
    }

    #[test]
    fn test_layers_sum_to_compound_total() {
        let series = GrowthSeries::compute(&ChartParams::default()).unwrap();
        assert_eq!(series.len(), 100);
        for i in 0..series.len() {
            assert_abs_diff_eq!(series.stack_total(i), series.compound_total[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_layers_non_negative() {
        let params = ChartParams::default();
        let series = GrowthSeries::compute(&params).unwrap();
        let tolerance = params.value_axis_max * NEGATIVE_LAYER_TOLERANCE;

        for i in 0..series.len() {
            assert!(series.principal[i] >= 0.0);
            assert!(series.simple_interest[i] >= 0.0);
            assert!(series.compound_interest[i] >= -tolerance);
            // Compounding overtakes continuous simple interest within two years
            if series.t[i] >= 2.0 {
                assert!(series.compound_interest[i] >= 0.0, "t = {}", series.t[i]);
            }
        }
    }

    #[test]
    fn test_annotation_index() {
        let series = GrowthSeries::compute(&ChartParams::default()).unwrap();
        assert_eq!(series.annotation_index(), 96);
    }

    #[test]
    fn test_overflow_rejected() {
        let params = ChartParams {
            years: 40.0,
            ..ChartParams::default()
        };
        match GrowthSeries::compute(&params) {
            Err(GeneratorError::ValueAxisOverflow { max, .. }) => assert_eq!(max, 250_000.0),
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_layer_rejected() {
        // Compounding lags continuous simple interest by a few pounds in the
        // first year; against a tiny value axis that exceeds the tolerance
        let params = ChartParams {
            value_axis_max: 1.0,
            monthly_contribution: 300.0,
            years: 1.0,
            ..ChartParams::default()
        };
        assert!(matches!(
            GrowthSeries::compute(&params),
            Err(GeneratorError::NegativeLayer { layer: 3, .. })
        ));
    }

    #[test]
    fn test_invalid_params() {
        let params = ChartParams {
            samples: 1,
            ..ChartParams::default()
        };
        assert!(matches!(
            GrowthSeries::compute(&params),
            Err(GeneratorError::InvalidParams(_))
        ));

        let params = ChartParams {
            years: 0.0,
            ..ChartParams::default()
        };
        assert!(matches!(
            GrowthSeries::compute(&params),
            Err(GeneratorError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_deterministic() {
        let a = GrowthSeries::compute(&ChartParams::default()).unwrap();
        let b = GrowthSeries::compute(&ChartParams::default()).unwrap();
        assert_eq!(a.compound_total, b.compound_total);
        assert_eq!(a.simple_total, b.simple_total);
    }
}
