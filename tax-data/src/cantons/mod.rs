mod be;
mod bs;
mod ge;
mod lu;
mod ti;
mod vd;
mod zg;
mod zh;

use tax_core::Jurisdiction;

/// The compiled cantons, in official cantonal order.
pub(crate) const CANTONS_2024: &[Jurisdiction] =
    &[zh::ZH, be::BE, lu::LU, zg::ZG, bs::BS, vd::VD, ge::GE, ti::TI];
