use rust_decimal::Decimal;
use serde::Serialize;

/// Deduction rules of one jurisdiction for one tax year.
///
/// Federal and cantonal policies share this shape but differ in every
/// amount; the aggregator never mixes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeductionPolicy {
    /// Flat allowance granted once per return.
    pub personal_deduction: Decimal,

    /// Allowance per dependent child.
    pub child_deduction: Decimal,

    pub insurance: InsuranceCaps,

    pub professional: ProfessionalExpensePolicy,

    pub pillar_3a: Pillar3aCeilings,

    /// Ceiling on third-party childcare costs, per child.
    pub childcare_cap_per_child: Decimal,

    pub donations: DonationPolicy,

    pub social: SocialInsuranceRates,

    pub special: &'static [SpecialDeduction],
}

/// Ceiling on health and life insurance premiums.
///
/// The applicable cap is `single` or `married` depending on civil status,
/// plus `per_child` for every child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsuranceCaps {
    pub single: Decimal,
    pub married: Decimal,
    pub per_child: Decimal,
}

/// Professional expenses: itemised caps plus the standardised flat rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfessionalExpensePolicy {
    /// Annual ceiling on commuting costs.
    pub transport_cap: Decimal,

    /// Allowed meal cost per working day.
    pub meals_per_day: Decimal,

    /// Allowance per kilometre when commuting by car.
    pub rate_per_km: Decimal,

    /// Working days per year used for the per-day and per-km estimates.
    pub working_days: u32,

    /// Standardised deduction as a percentage of gross salary...
    pub standard_rate: Decimal,

    /// ...never below this amount per earner...
    pub standard_minimum: Decimal,

    /// ...and never above this one.
    pub standard_maximum: Decimal,

    /// Unconditional minimum for the chosen professional-expense figure.
    pub floor: Decimal,
}

/// Pillar 3a contribution ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pillar3aCeilings {
    /// Ceiling for employees affiliated with an occupational pension fund.
    pub employed: Decimal,

    /// Absolute ceiling for the self-employed.
    pub self_employed: Decimal,

    /// Self-employed contributions are further limited to this percentage of
    /// net self-employment income.
    pub self_employed_income_share: Decimal,
}

/// Charitable donations policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DonationPolicy {
    /// Donations below this total are not deductible at all.
    pub minimum: Decimal,

    /// Deductible donations never exceed this percentage of gross income.
    pub max_share_of_income: Decimal,
}

/// Statutory employee contribution rates, all percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialInsuranceRates {
    /// Old-age, disability and income-compensation insurance (AHV/IV/EO).
    pub ahv_rate: Decimal,

    /// Unemployment insurance (ALV).
    pub alv_rate: Decimal,

    /// Salary above this amount is not subject to ALV.
    pub alv_ceiling: Decimal,

    /// Employee share of the occupational pension (pillar 2) contribution.
    pub pension_rate: Decimal,

    /// Subtracted from salary to obtain the coordinated salary.
    pub pension_coordination_deduction: Decimal,

    pub pension_max_coordinated_salary: Decimal,

    /// AHV rate applied to net self-employment income.
    pub self_employed_ahv_rate: Decimal,
}

/// Jurisdiction-specific deductions beyond the common categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpecialDeduction {
    /// Applied once to every joint return.
    MarriedCouple { amount: Decimal },

    /// Joint return with two salaries: `rate` percent of the lower salary,
    /// clamped to `[minimum, maximum]`.
    DualEarner {
        rate: Decimal,
        minimum: Decimal,
        maximum: Decimal,
    },

    /// Unmarried taxpayer without children.
    SinglePerson { amount: Decimal },

    /// Unmarried taxpayer living with at least one child.
    SingleParent { amount: Decimal },
}
