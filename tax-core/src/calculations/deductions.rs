//! Deduction aggregation.
//!
//! Turns a [`TaxpayerProfile`] and one jurisdiction's [`DeductionPolicy`]
//! into a capped [`DeductionSummary`]. Federal and cantonal summaries are
//! computed independently; [`reconcile`] derives a display-only combined
//! figure from the two.
//!
//! # Categories
//!
//! | Category     | Lines |
//! |--------------|-------|
//! | Personal     | personal allowance, child allowance, special deductions |
//! | Professional | `max(itemised, standard)`, never below the policy floor |
//! | Social       | AHV/IV/EO + ALV, occupational pension (statutory, never capped) |
//! | Other        | insurance premiums, pillar 3a, childcare, donations (each capped) |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::common::{clamp, percent_of, round_half_up};
use crate::error::TaxError;
use crate::models::{
    DeductionBreakdown, DeductionPolicy, Employment, SpecialDeduction, TaxpayerProfile,
};

/// The four buckets of a [`DeductionSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionCategory {
    Personal,
    Professional,
    Social,
    Other,
}

/// One deduction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionKind {
    PersonalAllowance,
    ChildAllowance,
    MarriedCouple,
    DualEarner,
    SinglePerson,
    SingleParent,
    SocialInsurance,
    OccupationalPension,
    ProfessionalExpenses,
    InsurancePremiums,
    Pillar3a,
    Childcare,
    Donations,
}

impl DeductionKind {
    pub fn category(&self) -> DeductionCategory {
        match self {
            Self::PersonalAllowance
            | Self::ChildAllowance
            | Self::MarriedCouple
            | Self::DualEarner
            | Self::SinglePerson
            | Self::SingleParent => DeductionCategory::Personal,
            Self::ProfessionalExpenses => DeductionCategory::Professional,
            Self::SocialInsurance | Self::OccupationalPension => DeductionCategory::Social,
            Self::InsurancePremiums | Self::Pillar3a | Self::Childcare | Self::Donations => {
                DeductionCategory::Other
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PersonalAllowance => "Personal allowance",
            Self::ChildAllowance => "Child allowance",
            Self::MarriedCouple => "Married couple",
            Self::DualEarner => "Dual earner",
            Self::SinglePerson => "Single person",
            Self::SingleParent => "Single parent",
            Self::SocialInsurance => "AHV/IV/EO and ALV contributions",
            Self::OccupationalPension => "Occupational pension (pillar 2)",
            Self::ProfessionalExpenses => "Professional expenses",
            Self::InsurancePremiums => "Insurance premiums",
            Self::Pillar3a => "Pillar 3a",
            Self::Childcare => "Childcare",
            Self::Donations => "Donations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionItem {
    pub kind: DeductionKind,
    pub amount: Decimal,
}

/// Deductions of one rule set, bucketed by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSummary {
    pub personal: Decimal,
    pub professional: Decimal,
    pub social: Decimal,
    pub other: Decimal,
    pub total: Decimal,
    /// Non-zero lines in the order they were computed.
    pub items: Vec<DeductionItem>,
}

impl DeductionSummary {
    /// Buckets `items` and totals them. Zero lines are dropped.
    pub fn from_items(items: Vec<DeductionItem>) -> Self {
        let items: Vec<_> = items
            .into_iter()
            .filter(|item| !item.amount.is_zero())
            .collect();

        let in_category = |category: DeductionCategory| -> Decimal {
            items
                .iter()
                .filter(|item| item.kind.category() == category)
                .map(|item| item.amount)
                .sum()
        };

        let personal = in_category(DeductionCategory::Personal);
        let professional = in_category(DeductionCategory::Professional);
        let social = in_category(DeductionCategory::Social);
        let other = in_category(DeductionCategory::Other);

        Self {
            personal,
            professional,
            social,
            other,
            total: personal + professional + social + other,
            items,
        }
    }

    /// Amount of one line, zero when absent.
    pub fn amount(
        &self,
        kind: DeductionKind,
    ) -> Decimal {
        self.items
            .iter()
            .filter(|item| item.kind == kind)
            .map(|item| item.amount)
            .sum()
    }
}

/// The two ways of arriving at professional expenses, and the one used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalExpenses {
    /// Transport + meals + other, each within its cap.
    pub itemized: Decimal,
    /// Flat percentage of every salary, clamped per earner.
    pub standard: Decimal,
    /// `max(itemized, standard)`, raised to the policy floor if below it.
    pub deducted: Decimal,
    pub floor_applied: bool,
}

/// Calculator for one jurisdiction's deductions.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::DeductionAggregator;
/// use tax_core::{
///     DeductionPolicy, DonationPolicy, InsuranceCaps, Pillar3aCeilings,
///     ProfessionalExpensePolicy, SocialInsuranceRates, TaxpayerProfile,
/// };
///
/// let policy = DeductionPolicy {
///     personal_deduction: dec!(0),
///     child_deduction: dec!(6700),
///     insurance: InsuranceCaps { single: dec!(1800), married: dec!(3600), per_child: dec!(700) },
///     professional: ProfessionalExpensePolicy {
///         transport_cap: dec!(3200),
///         meals_per_day: dec!(15),
///         rate_per_km: dec!(0.70),
///         working_days: 220,
///         standard_rate: dec!(3),
///         standard_minimum: dec!(2000),
///         standard_maximum: dec!(4000),
///         floor: dec!(2000),
///     },
///     pillar_3a: Pillar3aCeilings {
///         employed: dec!(7056),
///         self_employed: dec!(35280),
///         self_employed_income_share: dec!(20),
///     },
///     childcare_cap_per_child: dec!(25500),
///     donations: DonationPolicy { minimum: dec!(100), max_share_of_income: dec!(20) },
///     social: SocialInsuranceRates {
///         ahv_rate: dec!(5.3),
///         alv_rate: dec!(1.1),
///         alv_ceiling: dec!(148200),
///         pension_rate: dec!(5),
///         pension_coordination_deduction: dec!(25725),
///         pension_max_coordinated_salary: dec!(62475),
///         self_employed_ahv_rate: dec!(10),
///     },
///     special: &[],
/// };
///
/// let mut profile = TaxpayerProfile::default();
/// profile.income.employment_gross = dec!(85000);
/// profile.deductions.pillar_3a = dec!(10000);
///
/// let summary = DeductionAggregator::new(&policy).aggregate(&profile).unwrap();
///
/// // 3% of salary beats the empty itemised figure.
/// assert_eq!(summary.professional, dec!(2550.00));
/// // Pillar 3a is truncated to the ceiling.
/// assert_eq!(summary.other, dec!(7056.00));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DeductionAggregator<'a> {
    policy: &'a DeductionPolicy,
}

impl<'a> DeductionAggregator<'a> {
    pub fn new(policy: &'a DeductionPolicy) -> Self {
        Self { policy }
    }

    /// Computes every deduction line and buckets the result.
    ///
    /// # Errors
    ///
    /// Any error from [`TaxpayerProfile::validate`].
    pub fn aggregate(
        &self,
        profile: &TaxpayerProfile,
    ) -> Result<DeductionSummary, TaxError> {
        profile.validate()?;

        let mut items = self.personal_items(profile);
        items.push(self.item(DeductionKind::SocialInsurance, self.social_insurance(profile)));
        items.push(self.item(
            DeductionKind::OccupationalPension,
            self.occupational_pension(profile),
        ));
        items.push(self.item(
            DeductionKind::ProfessionalExpenses,
            self.professional_expenses(profile).deducted,
        ));
        items.push(self.item(DeductionKind::InsurancePremiums, self.insurance_premiums(profile)));
        items.push(self.item(DeductionKind::Pillar3a, self.pillar_3a(profile)));
        items.push(self.item(DeductionKind::Childcare, self.childcare(profile)));
        items.push(self.item(DeductionKind::Donations, self.donations(profile)));

        let summary = DeductionSummary::from_items(items);
        debug!(
            personal = %summary.personal,
            professional = %summary.professional,
            social = %summary.social,
            other = %summary.other,
            total = %summary.total,
            "deductions aggregated"
        );
        Ok(summary)
    }

    fn item(
        &self,
        kind: DeductionKind,
        amount: Decimal,
    ) -> DeductionItem {
        DeductionItem {
            kind,
            amount: round_half_up(amount),
        }
    }

    /// Personal allowance, child allowance and the policy's specials.
    fn personal_items(
        &self,
        profile: &TaxpayerProfile,
    ) -> Vec<DeductionItem> {
        let children = Decimal::from(profile.personal.children);
        let joint = profile.is_joint();

        let mut items = vec![
            self.item(DeductionKind::PersonalAllowance, self.policy.personal_deduction),
            self.item(
                DeductionKind::ChildAllowance,
                self.policy.child_deduction * children,
            ),
        ];

        for special in self.policy.special {
            let line = match *special {
                SpecialDeduction::MarriedCouple { amount } if joint => {
                    Some((DeductionKind::MarriedCouple, amount))
                }
                SpecialDeduction::DualEarner {
                    rate,
                    minimum,
                    maximum,
                } if joint => self.lower_of_two_salaries(profile).map(|lower| {
                    let amount = clamp(percent_of(lower, rate), minimum, maximum);
                    (DeductionKind::DualEarner, amount)
                }),
                SpecialDeduction::SinglePerson { amount }
                    if !joint && profile.personal.children == 0 =>
                {
                    Some((DeductionKind::SinglePerson, amount))
                }
                SpecialDeduction::SingleParent { amount }
                    if !joint && profile.personal.children > 0 =>
                {
                    Some((DeductionKind::SingleParent, amount))
                }
                _ => None,
            };
            if let Some((kind, amount)) = line {
                items.push(self.item(kind, amount));
            }
        }

        items
    }

    /// The lower salary of a two-earner couple; `None` unless both earn.
    fn lower_of_two_salaries(
        &self,
        profile: &TaxpayerProfile,
    ) -> Option<Decimal> {
        let own = profile.income.employment_gross;
        let spouse = profile.income.spouse_employment_gross;
        (own > Decimal::ZERO && spouse > Decimal::ZERO).then(|| own.min(spouse))
    }

    /// AHV/IV/EO on every salary, ALV up to the insured ceiling, and the
    /// self-employed AHV rate on business income.
    fn social_insurance(
        &self,
        profile: &TaxpayerProfile,
    ) -> Decimal {
        let rates = &self.policy.social;

        let employees: Decimal = profile
            .salaries()
            .into_iter()
            .map(|salary| {
                percent_of(salary, rates.ahv_rate)
                    + percent_of(salary.min(rates.alv_ceiling), rates.alv_rate)
            })
            .sum();

        let self_employed = percent_of(
            profile.income.self_employment_net.max(Decimal::ZERO),
            rates.self_employed_ahv_rate,
        );

        employees + self_employed
    }

    /// Employee share of pillar 2 on each coordinated salary.
    fn occupational_pension(
        &self,
        profile: &TaxpayerProfile,
    ) -> Decimal {
        let rates = &self.policy.social;

        profile
            .salaries()
            .into_iter()
            .map(|salary| {
                let coordinated = clamp(
                    salary - rates.pension_coordination_deduction,
                    Decimal::ZERO,
                    rates.pension_max_coordinated_salary,
                );
                percent_of(coordinated, rates.pension_rate)
            })
            .sum()
    }

    /// Computes itemised and standard professional expenses and picks the
    /// larger, subject to the unconditional floor.
    pub fn professional_expenses(
        &self,
        profile: &TaxpayerProfile,
    ) -> ProfessionalExpenses {
        let policy = &self.policy.professional;
        let declared = &profile.deductions;
        let working_days = Decimal::from(policy.working_days);

        let by_car = declared.commute_km * Decimal::TWO * policy.rate_per_km * working_days;
        let transport = declared.public_transport.max(by_car).min(policy.transport_cap);
        let meals = declared.meals.min(policy.meals_per_day * working_days);
        let itemized = round_half_up(transport + meals + declared.other_professional);

        let standard: Decimal = profile
            .salaries()
            .into_iter()
            .filter(|salary| *salary > Decimal::ZERO)
            .map(|salary| {
                clamp(
                    percent_of(salary, policy.standard_rate),
                    policy.standard_minimum,
                    policy.standard_maximum,
                )
            })
            .sum();
        let standard = round_half_up(standard);

        let chosen = itemized.max(standard);
        let floor_applied = chosen < policy.floor;
        if floor_applied {
            warn!(
                itemized = %itemized,
                standard = %standard,
                floor = %policy.floor,
                "professional expenses below floor; floor applied"
            );
        }

        ProfessionalExpenses {
            itemized,
            standard,
            deducted: chosen.max(policy.floor),
            floor_applied,
        }
    }

    /// Health + life premiums up to the status- and child-dependent cap.
    fn insurance_premiums(
        &self,
        profile: &TaxpayerProfile,
    ) -> Decimal {
        let caps = &self.policy.insurance;
        let declared = profile.deductions.health_insurance + profile.deductions.life_insurance;
        let base_cap = if profile.is_joint() {
            caps.married
        } else {
            caps.single
        };
        let cap = base_cap + caps.per_child * Decimal::from(profile.personal.children);

        if declared > cap {
            warn!(declared = %declared, cap = %cap, "insurance premiums capped");
        }
        declared.min(cap)
    }

    /// Pillar 3a contributions, silently truncated to each earner's ceiling.
    fn pillar_3a(
        &self,
        profile: &TaxpayerProfile,
    ) -> Decimal {
        let ceilings = &self.policy.pillar_3a;

        let own_ceiling = match profile.personal.employment {
            Employment::Employed => ceilings.employed,
            Employment::SelfEmployed => ceilings.self_employed.min(percent_of(
                profile.income.self_employment_net.max(Decimal::ZERO),
                ceilings.self_employed_income_share,
            )),
        };
        let own = self.truncate_contribution(profile.deductions.pillar_3a, own_ceiling);

        let spouse = if profile.is_joint() {
            self.truncate_contribution(profile.deductions.spouse_pillar_3a, ceilings.employed)
        } else {
            Decimal::ZERO
        };

        own + spouse
    }

    fn truncate_contribution(
        &self,
        declared: Decimal,
        ceiling: Decimal,
    ) -> Decimal {
        if declared > ceiling {
            warn!(
                declared = %declared,
                ceiling = %ceiling,
                "pillar 3a contribution above ceiling; excess ignored"
            );
        }
        declared.min(ceiling)
    }

    /// Third-party childcare costs, capped per child.
    fn childcare(
        &self,
        profile: &TaxpayerProfile,
    ) -> Decimal {
        let cap =
            self.policy.childcare_cap_per_child * Decimal::from(profile.personal.children);
        let declared = profile.deductions.childcare;

        if declared > cap {
            warn!(declared = %declared, cap = %cap, "childcare costs capped");
        }
        declared.min(cap)
    }

    /// Donations at or above the minimum, capped at a share of gross income.
    fn donations(
        &self,
        profile: &TaxpayerProfile,
    ) -> Decimal {
        let policy = &self.policy.donations;
        let declared = profile.deductions.donations;

        if declared.is_zero() {
            return Decimal::ZERO;
        }
        if declared < policy.minimum {
            warn!(
                declared = %declared,
                minimum = %policy.minimum,
                "donations below minimum; not deductible"
            );
            return Decimal::ZERO;
        }

        declared.min(percent_of(profile.gross_income(), policy.max_share_of_income))
    }
}

/// Aggregates `profile` under a single policy.
///
/// # Errors
///
/// Any error from [`TaxpayerProfile::validate`].
pub fn aggregate_deductions(
    profile: &TaxpayerProfile,
    policy: &DeductionPolicy,
) -> Result<DeductionSummary, TaxError> {
    DeductionAggregator::new(policy).aggregate(profile)
}

/// Aggregates under the federal and cantonal policies and reconciles the
/// two into the display-only combined summary.
///
/// # Errors
///
/// Any error from [`TaxpayerProfile::validate`].
pub fn aggregate_all(
    profile: &TaxpayerProfile,
    federal: &DeductionPolicy,
    cantonal: &DeductionPolicy,
) -> Result<DeductionBreakdown, TaxError> {
    let federal = aggregate_deductions(profile, federal)?;
    let cantonal = aggregate_deductions(profile, cantonal)?;
    let combined = reconcile(&federal, &cantonal);

    Ok(DeductionBreakdown {
        federal,
        cantonal,
        combined,
    })
}

/// Blends the two rule sets for display.
///
/// Takes the federal lines, with professional expenses replaced by the
/// higher of the federal and cantonal figures. Never used for a tax amount.
pub fn reconcile(
    federal: &DeductionSummary,
    cantonal: &DeductionSummary,
) -> DeductionSummary {
    let professional = federal.professional.max(cantonal.professional);

    let mut items: Vec<_> = federal
        .items
        .iter()
        .copied()
        .filter(|item| item.kind != DeductionKind::ProfessionalExpenses)
        .collect();
    items.push(DeductionItem {
        kind: DeductionKind::ProfessionalExpenses,
        amount: professional,
    });

    DeductionSummary::from_items(items)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;
    use crate::models::{
        CivilStatus, DonationPolicy, InsuranceCaps, Pillar3aCeilings, ProfessionalExpensePolicy,
        SocialInsuranceRates,
    };

    const SPECIALS: &[SpecialDeduction] = &[
        SpecialDeduction::MarriedCouple { amount: dec!(2800) },
        SpecialDeduction::DualEarner {
            rate: dec!(50),
            minimum: dec!(8600),
            maximum: dec!(14100),
        },
        SpecialDeduction::SingleParent { amount: dec!(3500) },
    ];

    /// Federal-like 2024 policy.
    fn test_policy() -> DeductionPolicy {
        DeductionPolicy {
            personal_deduction: dec!(0),
            child_deduction: dec!(6700),
            insurance: InsuranceCaps {
                single: dec!(1800),
                married: dec!(3600),
                per_child: dec!(700),
            },
            professional: ProfessionalExpensePolicy {
                transport_cap: dec!(3200),
                meals_per_day: dec!(15),
                rate_per_km: dec!(0.70),
                working_days: 220,
                standard_rate: dec!(3),
                standard_minimum: dec!(2000),
                standard_maximum: dec!(4000),
                floor: dec!(2000),
            },
            pillar_3a: Pillar3aCeilings {
                employed: dec!(7056),
                self_employed: dec!(35280),
                self_employed_income_share: dec!(20),
            },
            childcare_cap_per_child: dec!(25500),
            donations: DonationPolicy {
                minimum: dec!(100),
                max_share_of_income: dec!(20),
            },
            social: SocialInsuranceRates {
                ahv_rate: dec!(5.3),
                alv_rate: dec!(1.1),
                alv_ceiling: dec!(148200),
                pension_rate: dec!(5),
                pension_coordination_deduction: dec!(25725),
                pension_max_coordinated_salary: dec!(62475),
                self_employed_ahv_rate: dec!(10),
            },
            special: SPECIALS,
        }
    }

    fn single(salary: Decimal) -> TaxpayerProfile {
        let mut profile = TaxpayerProfile::default();
        profile.personal.canton = "ZH".to_string();
        profile.income.employment_gross = salary;
        profile
    }

    fn married(
        salary: Decimal,
        spouse: Decimal,
        children: u32,
    ) -> TaxpayerProfile {
        let mut profile = single(salary);
        profile.personal.civil_status = CivilStatus::Married;
        profile.personal.children = children;
        profile.income.spouse_employment_gross = spouse;
        profile
    }

    fn aggregate(profile: &TaxpayerProfile) -> DeductionSummary {
        aggregate_deductions(profile, &test_policy()).unwrap()
    }

    /// Initializes tracing subscriber for tests that exercise warn paths.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // social deductions
    // =========================================================================

    #[test]
    fn social_contributions_are_statutory_percentages() {
        let summary = aggregate(&single(dec!(85000)));

        // 5.3% + 1.1% of 85,000
        assert_eq!(summary.amount(DeductionKind::SocialInsurance), dec!(5440.00));
        // 5% of (85,000 − 25,725)
        assert_eq!(summary.amount(DeductionKind::OccupationalPension), dec!(2963.75));
        assert_eq!(summary.social, dec!(8403.75));
    }

    #[test]
    fn unemployment_insurance_stops_at_ceiling() {
        let summary = aggregate(&single(dec!(200000)));

        // 5.3% of 200,000 + 1.1% of 148,200
        assert_eq!(summary.amount(DeductionKind::SocialInsurance), dec!(12230.20));
        // coordinated salary capped at 62,475
        assert_eq!(
            summary.amount(DeductionKind::OccupationalPension),
            dec!(3123.75)
        );
    }

    #[test]
    fn low_salary_has_no_pension_contribution() {
        let summary = aggregate(&single(dec!(20000)));

        assert_eq!(summary.amount(DeductionKind::OccupationalPension), dec!(0));
    }

    #[test]
    fn self_employed_pay_ahv_on_business_income() {
        let mut profile = single(dec!(0));
        profile.personal.employment = Employment::SelfEmployed;
        profile.income.self_employment_net = dec!(100000);

        let summary = aggregate(&profile);

        assert_eq!(summary.amount(DeductionKind::SocialInsurance), dec!(10000.00));
    }

    #[test]
    fn social_contributions_ignore_caps_on_other_lines() {
        // Social lines are never truncated, even when other caps bind.
        let mut profile = single(dec!(85000));
        profile.deductions.health_insurance = dec!(9000);

        let summary = aggregate(&profile);

        assert_eq!(summary.social, dec!(8403.75));
        assert_eq!(summary.amount(DeductionKind::InsurancePremiums), dec!(1800));
    }

    // =========================================================================
    // professional expenses
    // =========================================================================

    #[test]
    fn standard_beats_empty_itemized() {
        let expenses =
            DeductionAggregator::new(&test_policy()).professional_expenses(&single(dec!(85000)));

        assert_eq!(
            expenses,
            ProfessionalExpenses {
                itemized: dec!(0),
                standard: dec!(2550.00),
                deducted: dec!(2550.00),
                floor_applied: false,
            }
        );
    }

    #[test]
    fn itemized_beats_standard_when_larger() {
        let mut profile = single(dec!(85000));
        profile.deductions.public_transport = dec!(1200);
        profile.deductions.meals = dec!(3500);
        profile.deductions.other_professional = dec!(500);

        let expenses = DeductionAggregator::new(&test_policy()).professional_expenses(&profile);

        // meals capped at 15 × 220 = 3,300
        assert_eq!(expenses.itemized, dec!(5000.00));
        assert_eq!(expenses.deducted, dec!(5000.00));
    }

    #[test]
    fn car_commute_is_capped_at_transport_cap() {
        let mut profile = single(dec!(85000));
        // 20 km × 2 × 0.70 × 220 = 6,160
        profile.deductions.commute_km = dec!(20);

        let expenses = DeductionAggregator::new(&test_policy()).professional_expenses(&profile);

        assert_eq!(expenses.itemized, dec!(3200.00));
    }

    #[test]
    fn standard_is_clamped_per_earner() {
        let profile = married(dec!(200000), dec!(30000), 0);

        let expenses = DeductionAggregator::new(&test_policy()).professional_expenses(&profile);

        // 4,000 (capped) + 2,000 (raised to minimum)
        assert_eq!(expenses.standard, dec!(6000.00));
    }

    #[test]
    fn floor_applies_without_salary() {
        let _guard = init_test_tracing();

        let expenses =
            DeductionAggregator::new(&test_policy()).professional_expenses(&single(dec!(0)));

        assert_eq!(expenses.deducted, dec!(2000));
        assert!(expenses.floor_applied);
    }

    // =========================================================================
    // insurance premiums
    // =========================================================================

    #[test]
    fn single_premiums_capped_at_single_ceiling() {
        let mut profile = single(dec!(85000));
        profile.deductions.health_insurance = dec!(4200);
        profile.deductions.life_insurance = dec!(600);

        let summary = aggregate(&profile);

        assert_eq!(summary.amount(DeductionKind::InsurancePremiums), dec!(1800));
    }

    #[test]
    fn premium_cap_grows_per_child() {
        let mut profile = married(dec!(150000), dec!(0), 2);
        profile.deductions.health_insurance = dec!(12000);

        let summary = aggregate(&profile);

        assert_eq!(summary.amount(DeductionKind::InsurancePremiums), dec!(5000));
    }

    #[test]
    fn premiums_below_cap_are_deducted_in_full() {
        let mut profile = single(dec!(85000));
        profile.deductions.health_insurance = dec!(1500);

        let summary = aggregate(&profile);

        assert_eq!(summary.amount(DeductionKind::InsurancePremiums), dec!(1500));
    }

    // =========================================================================
    // pillar 3a
    // =========================================================================

    #[test]
    fn pillar_3a_truncated_to_employed_ceiling() {
        let mut over = single(dec!(85000));
        over.deductions.pillar_3a = dec!(10000);
        let mut exact = single(dec!(85000));
        exact.deductions.pillar_3a = dec!(7056);

        assert_eq!(aggregate(&over).amount(DeductionKind::Pillar3a), dec!(7056));
        assert_eq!(aggregate(&over), aggregate(&exact));
    }

    #[test]
    fn self_employed_ceiling_is_share_of_income() {
        let mut profile = single(dec!(0));
        profile.personal.employment = Employment::SelfEmployed;
        profile.income.self_employment_net = dec!(100000);
        profile.deductions.pillar_3a = dec!(30000);

        let summary = aggregate(&profile);

        assert_eq!(summary.amount(DeductionKind::Pillar3a), dec!(20000));
    }

    #[test]
    fn self_employed_ceiling_has_absolute_maximum() {
        let mut profile = single(dec!(0));
        profile.personal.employment = Employment::SelfEmployed;
        profile.income.self_employment_net = dec!(400000);
        profile.deductions.pillar_3a = dec!(50000);

        let summary = aggregate(&profile);

        assert_eq!(summary.amount(DeductionKind::Pillar3a), dec!(35280));
    }

    #[test]
    fn spouse_contribution_counts_only_on_joint_return() {
        let mut couple = married(dec!(90000), dec!(60000), 0);
        couple.deductions.pillar_3a = dec!(7056);
        couple.deductions.spouse_pillar_3a = dec!(9000);
        let mut alone = single(dec!(90000));
        alone.deductions.pillar_3a = dec!(7056);
        alone.deductions.spouse_pillar_3a = dec!(9000);

        assert_eq!(aggregate(&couple).amount(DeductionKind::Pillar3a), dec!(14112));
        assert_eq!(aggregate(&alone).amount(DeductionKind::Pillar3a), dec!(7056));
    }

    // =========================================================================
    // childcare and donations
    // =========================================================================

    #[test]
    fn childcare_capped_per_child() {
        let mut profile = married(dec!(120000), dec!(0), 1);
        profile.deductions.childcare = dec!(30000);

        let summary = aggregate(&profile);

        assert_eq!(summary.amount(DeductionKind::Childcare), dec!(25500));
    }

    #[test]
    fn childcare_without_children_is_not_deductible() {
        let mut profile = single(dec!(85000));
        profile.deductions.childcare = dec!(5000);

        let summary = aggregate(&profile);

        assert_eq!(summary.amount(DeductionKind::Childcare), dec!(0));
    }

    #[test]
    fn donations_below_minimum_are_dropped() {
        let mut profile = single(dec!(85000));
        profile.deductions.donations = dec!(99.95);

        let summary = aggregate(&profile);

        assert_eq!(summary.amount(DeductionKind::Donations), dec!(0));
    }

    #[test]
    fn donations_at_minimum_are_deductible() {
        let mut profile = single(dec!(85000));
        profile.deductions.donations = dec!(100);

        let summary = aggregate(&profile);

        assert_eq!(summary.amount(DeductionKind::Donations), dec!(100));
    }

    #[test]
    fn donations_capped_at_share_of_gross_income() {
        let mut profile = single(dec!(85000));
        profile.deductions.donations = dec!(30000);

        let summary = aggregate(&profile);

        assert_eq!(summary.amount(DeductionKind::Donations), dec!(17000));
    }

    // =========================================================================
    // personal and special deductions
    // =========================================================================

    #[test]
    fn married_couple_with_children() {
        let summary = aggregate(&married(dec!(150000), dec!(0), 2));

        assert_eq!(summary.amount(DeductionKind::ChildAllowance), dec!(13400));
        assert_eq!(summary.amount(DeductionKind::MarriedCouple), dec!(2800));
        assert_eq!(summary.amount(DeductionKind::SingleParent), dec!(0));
        // one earner: no dual-earner deduction
        assert_eq!(summary.amount(DeductionKind::DualEarner), dec!(0));
        assert_eq!(summary.personal, dec!(16200));
    }

    #[test]
    fn dual_earner_deduction_clamped() {
        let high = aggregate(&married(dec!(80000), dec!(40000), 0));
        let low = aggregate(&married(dec!(80000), dec!(10000), 0));

        // 50% of 40,000 capped at 14,100
        assert_eq!(high.amount(DeductionKind::DualEarner), dec!(14100));
        // 50% of 10,000 raised to 8,600
        assert_eq!(low.amount(DeductionKind::DualEarner), dec!(8600));
    }

    #[test]
    fn single_parent_deduction() {
        let mut profile = single(dec!(70000));
        profile.personal.children = 1;

        let summary = aggregate(&profile);

        assert_eq!(summary.amount(DeductionKind::SingleParent), dec!(3500));
        assert_eq!(summary.amount(DeductionKind::MarriedCouple), dec!(0));
    }

    // =========================================================================
    // summary and reconciliation
    // =========================================================================

    #[test]
    fn total_is_sum_of_categories() {
        let mut profile = married(dec!(90000), dec!(45000), 2);
        profile.deductions.health_insurance = dec!(6000);
        profile.deductions.pillar_3a = dec!(7056);
        profile.deductions.donations = dec!(500);

        let s = aggregate(&profile);

        assert_eq!(s.total, s.personal + s.professional + s.social + s.other);
        assert!(s.items.iter().all(|item| !item.amount.is_zero()));
    }

    #[test]
    fn negative_declared_amount_fails() {
        let mut profile = single(dec!(85000));
        profile.deductions.meals = dec!(-10);

        assert_eq!(
            aggregate_deductions(&profile, &test_policy()),
            Err(TaxError::NegativeAmount {
                field: "deductions.meals",
                value: dec!(-10),
            })
        );
    }

    #[test]
    fn salary_beyond_limit_fails_before_any_arithmetic() {
        let profile = single(dec!(50000000000000000000000000000));

        assert_eq!(
            aggregate_deductions(&profile, &test_policy()),
            Err(TaxError::AmountOutOfRange {
                field: "income.employment_gross",
                value: dec!(50000000000000000000000000000),
            })
        );
    }

    #[test]
    fn reconcile_takes_higher_professional_figure() {
        let mut cantonal_policy = test_policy();
        cantonal_policy.professional.standard_maximum = dec!(6000);
        cantonal_policy.professional.standard_rate = dec!(5);
        let profile = single(dec!(100000));

        let breakdown = aggregate_all(&profile, &test_policy(), &cantonal_policy).unwrap();

        assert_eq!(breakdown.federal.professional, dec!(3000.00));
        assert_eq!(breakdown.cantonal.professional, dec!(5000.00));
        assert_eq!(breakdown.combined.professional, dec!(5000.00));
        assert_eq!(
            breakdown.combined.total,
            breakdown.federal.total + dec!(2000)
        );
    }

    #[test]
    fn reconcile_leaves_authoritative_totals_untouched() {
        let federal = aggregate(&single(dec!(85000)));
        let cantonal = aggregate(&single(dec!(85000)));

        let combined = reconcile(&federal, &cantonal);

        assert_eq!(combined.total, federal.total);
        assert_eq!(combined.professional, federal.professional);
    }
}
