use crate::storage_types::*;

/// Campaign accepts contributions: active status, headroom below cap, and
/// strictly inside the height window. Does not look at the halt flag.
pub fn is_active(params: &ParameterSet, org: &Organization, height: u32) -> bool {
    params.status == CampaignStatus::Active
        && org.total_raised < params.cap
        && params.start_height < height
        && height < params.end_height
}

/// Whether a close at `height` can resolve the campaign yet.
pub fn is_resolvable(params: &ParameterSet, org: &Organization, height: u32) -> bool {
    if height <= params.start_height {
        return false;
    }
    height > params.end_height || org.total_raised >= params.cap
}

/// Split an offered amount into (accepted, change) against the remaining headroom.
pub fn clamp_to_cap(cap: i128, total_raised: i128, amount: i128) -> (i128, i128) {
    let remaining = cap - total_raised;
    if amount > remaining {
        (remaining, amount - remaining)
    } else {
        (amount, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

    fn fixture(
        env: &Env,
        status: CampaignStatus,
        total_raised: i128,
    ) -> (ParameterSet, Organization) {
        let params = ParameterSet {
            cap: 100,
            price: 1,
            start_height: 10,
            end_height: 20,
            beneficiary: Address::generate(env),
            admin: Address::generate(env),
            status,
        };
        let org = Organization {
            params_hash: BytesN::from_array(env, &[0; 32]),
            proxy: Address::generate(env),
            total_raised,
            halted: false,
            token: Address::generate(env),
            reputation: Address::generate(env),
        };
        (params, org)
    }

    #[test]
    fn window_bounds_are_exclusive() {
        let env = Env::default();
        let (params, org) = fixture(&env, CampaignStatus::Active, 0);

        assert!(!is_active(&params, &org, 10));
        assert!(is_active(&params, &org, 11));
        assert!(is_active(&params, &org, 19));
        assert!(!is_active(&params, &org, 20));
    }

    #[test]
    fn inactive_when_cap_reached_or_not_active() {
        let env = Env::default();
        let (params, org) = fixture(&env, CampaignStatus::Active, 100);
        assert!(!is_active(&params, &org, 15));

        for status in [
            CampaignStatus::Unset,
            CampaignStatus::ClosedSuccessful,
            CampaignStatus::ClosedFailed,
        ] {
            let (params, org) = fixture(&env, status, 0);
            assert!(!is_active(&params, &org, 15));
        }
    }

    #[test]
    fn halt_flag_does_not_affect_predicate() {
        let env = Env::default();
        let (params, mut org) = fixture(&env, CampaignStatus::Active, 0);
        org.halted = true;
        assert!(is_active(&params, &org, 15));
    }

    #[test]
    fn resolvable_after_deadline_or_cap() {
        let env = Env::default();
        let (params, org) = fixture(&env, CampaignStatus::Active, 40);
        assert!(!is_resolvable(&params, &org, 10));
        assert!(!is_resolvable(&params, &org, 20));
        assert!(is_resolvable(&params, &org, 21));

        let (params, org) = fixture(&env, CampaignStatus::Active, 100);
        assert!(!is_resolvable(&params, &org, 10));
        assert!(is_resolvable(&params, &org, 11));
    }

    #[test]
    fn clamp_returns_change_above_headroom() {
        assert_eq!(clamp_to_cap(100, 0, 30), (30, 0));
        assert_eq!(clamp_to_cap(100, 30, 80), (70, 10));
        assert_eq!(clamp_to_cap(100, 30, 70), (70, 0));
    }
}
