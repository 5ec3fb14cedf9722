use serde::{Deserialize, Serialize};

/// Fixed per-hire price schedule.
pub const TEMPORARY_ROLE_PRICE: u32 = 1000;
pub const PERMANENT_ROLE_PRICE: u32 = 2000;

/// Companies above this headcount are routed to manual consultation.
pub const CONSULTATION_EMPLOYEE_THRESHOLD: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    Temporary,
    Permanent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiringVolume {
    One,
    TwoToFour,
    FivePlus,
}

/// A contract shorter than six months is temporary, anything else permanent.
pub fn classify(duration_months: u32) -> ContractKind {
    if duration_months < 6 {
        ContractKind::Temporary
    } else {
        ContractKind::Permanent
    }
}

/// Listed price for the requested kind, except that any duration longer
/// than three months is promoted to the permanent price regardless of the
/// label the caller chose.
pub fn simplified_price(kind: ContractKind, duration_months: u32) -> u32 {
    if duration_months > 3 {
        return PERMANENT_ROLE_PRICE;
    }
    match kind {
        ContractKind::Temporary => TEMPORARY_ROLE_PRICE,
        ContractKind::Permanent => PERMANENT_ROLE_PRICE,
    }
}

pub fn needs_consultation(employee_count: u32, volume: HiringVolume) -> bool {
    employee_count >= CONSULTATION_EMPLOYEE_THRESHOLD || volume == HiringVolume::FivePlus
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn four_month_temporary_contract_is_promoted_to_the_permanent_price() {
        assert_eq!(
            simplified_price(ContractKind::Temporary, 4),
            PERMANENT_ROLE_PRICE
        );
    }

    #[test]
    fn short_temporary_contract_keeps_the_temporary_price() {
        assert_eq!(
            simplified_price(ContractKind::Temporary, 2),
            TEMPORARY_ROLE_PRICE
        );
    }

    #[test]
    fn permanent_price_applies_at_every_duration() {
        assert_eq!(
            simplified_price(ContractKind::Permanent, 1),
            PERMANENT_ROLE_PRICE
        );
        assert_eq!(
            simplified_price(ContractKind::Permanent, 12),
            PERMANENT_ROLE_PRICE
        );
    }

    #[test]
    fn six_months_is_the_temporary_permanent_boundary() {
        assert_eq!(classify(5), ContractKind::Temporary);
        assert_eq!(classify(6), ContractKind::Permanent);
    }

    #[test]
    fn consultation_gate_covers_headcount_and_volume() {
        assert!(needs_consultation(250, HiringVolume::One));
        assert!(needs_consultation(10, HiringVolume::FivePlus));
        assert!(!needs_consultation(249, HiringVolume::TwoToFour));
    }
}
