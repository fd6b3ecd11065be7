use market_core::ModelError;
use serde::{Deserialize, Serialize};

/// Discounted cash flow valuation assumptions
///
/// The model projects revenue forward at a constant growth rate, derives
/// free cash flow from after-tax operating income, discounts each year
/// back to the present, and closes with a Gordon-growth terminal value:
///   TV = FCF_N * (1 + g) / (r - g)
/// where:
///   FCF_N = final projected free cash flow
///   g = terminal growth rate
///   r = discount rate
///
/// All rates are decimal fractions (0.10 = 10%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationAssumptions {
    /// Most recent annual revenue, in whatever currency unit the caller
    /// uses consistently (the dashboards use millions)
    pub starting_revenue: f64,

    /// Annual revenue growth rate (e.g., 0.10 = 10%)
    /// Dashboards typically offer 0-30%
    pub revenue_growth: f64,

    /// Operating (EBIT) margin applied to each year's revenue
    /// (e.g., 0.20 = 20%); typical range 0-50%
    pub ebit_margin: f64,

    /// Tax rate applied to EBIT (e.g., 0.25 = 25%); typical range 0-40%
    pub tax_rate: f64,

    /// Discount rate / WACC (e.g., 0.12 = 12%); typical range 5-20%
    /// Must strictly exceed `terminal_growth`
    pub discount_rate: f64,

    /// Perpetual growth rate beyond the horizon (e.g., 0.03 = 3%)
    /// Typical range 0-6%
    pub terminal_growth: f64,

    /// Number of years to project explicitly (at least 1); dashboards
    /// offer 5-15
    pub horizon_years: u32,

    /// Share count the enterprise value is spread across (positive),
    /// in the same unit scale as revenue
    pub shares_outstanding: f64,
}

impl Default for ValuationAssumptions {
    fn default() -> Self {
        Self {
            starting_revenue: 1000.0, // $1B revenue base
            revenue_growth: 0.10,     // 10% annual growth
            ebit_margin: 0.20,        // 20% operating margin
            tax_rate: 0.25,           // 25% tax
            discount_rate: 0.12,      // 12% WACC
            terminal_growth: 0.03,    // 3% perpetual growth
            horizon_years: 10,
            shares_outstanding: 100.0,
        }
    }
}

/// One projected year of the cash flow model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectedYear {
    /// 1-based projection year.
    pub year: u32,
    pub revenue: f64,
    pub ebit: f64,
    /// EBIT after tax.
    pub nopat: f64,
    /// Taken as NOPAT; the model carries no capex or working-capital
    /// adjustment.
    pub free_cash_flow: f64,
    /// `(1 + discount_rate)^year`.
    pub discount_factor: f64,
    pub discounted_fcf: f64,
}

/// Full output of a projection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DcfValuation {
    /// One row per projected year, ordered year 1 through the horizon.
    pub projections: Vec<ProjectedYear>,
    /// Sum of the discounted projected free cash flows.
    pub pv_of_projected_fcf: f64,
    /// Gordon-growth terminal value at the end of the horizon.
    pub terminal_value: f64,
    /// Terminal value discounted back to the present.
    pub discounted_terminal_value: f64,
    /// PV of the projected cash flows plus the discounted terminal value.
    pub enterprise_value: f64,
    /// Enterprise value spread across the share count.
    pub intrinsic_value_per_share: f64,
}

impl ValuationAssumptions {
    /// Check the assumptions without running the projection.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.horizon_years == 0 {
            return Err(ModelError::InvalidInput(
                "projection horizon must be at least one year".to_string(),
            ));
        }
        if self.shares_outstanding <= 0.0 {
            return Err(ModelError::InvalidInput(format!(
                "shares outstanding must be positive, got {}",
                self.shares_outstanding
            )));
        }
        if self.discount_rate <= self.terminal_growth {
            return Err(ModelError::Domain(format!(
                "discount rate {} must exceed terminal growth {} for the terminal value to converge",
                self.discount_rate, self.terminal_growth
            )));
        }
        Ok(())
    }

    /// Run the projection and valuation.
    ///
    /// Assumptions are validated up front; an error never returns a
    /// partially computed valuation.
    pub fn project(&self) -> Result<DcfValuation, ModelError> {
        self.validate()?;

        let mut projections = Vec::with_capacity(self.horizon_years as usize);
        let mut revenue = self.starting_revenue;
        let mut last_fcf = 0.0;

        for year in 1..=self.horizon_years {
            revenue *= 1.0 + self.revenue_growth;
            let ebit = revenue * self.ebit_margin;
            let nopat = ebit * (1.0 - self.tax_rate);
            let free_cash_flow = nopat;
            let discount_factor = (1.0 + self.discount_rate).powi(year as i32);
            let discounted_fcf = free_cash_flow / discount_factor;

            last_fcf = free_cash_flow;
            projections.push(ProjectedYear {
                year,
                revenue,
                ebit,
                nopat,
                free_cash_flow,
                discount_factor,
                discounted_fcf,
            });
        }

        let pv_of_projected_fcf: f64 = projections.iter().map(|p| p.discounted_fcf).sum();

        let terminal_value = last_fcf * (1.0 + self.terminal_growth)
            / (self.discount_rate - self.terminal_growth);
        let horizon_discount = (1.0 + self.discount_rate).powi(self.horizon_years as i32);
        let discounted_terminal_value = terminal_value / horizon_discount;

        let enterprise_value = pv_of_projected_fcf + discounted_terminal_value;
        let intrinsic_value_per_share = enterprise_value / self.shares_outstanding;

        Ok(DcfValuation {
            projections,
            pv_of_projected_fcf,
            terminal_value,
            discounted_terminal_value,
            enterprise_value,
            intrinsic_value_per_share,
        })
    }
}
