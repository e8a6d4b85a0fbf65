#![no_std]


mod events;
mod ledger;
mod lifecycle;
mod registry;
mod settlement;
mod storage_types;

pub use storage_types::{
    CampaignParams, CampaignStatus, CloseOutcome, CreditIssuers, CrowdsaleError, LedgerBalance,
    Organization, ParameterSet, CREDIT_UNIT,
};

use events::{
    emit_campaign_closed, emit_campaign_halted, emit_campaign_started, emit_donation_received,
    emit_refund_withdrawn, CampaignClosedEvent, CampaignHaltedEvent, CampaignStartedEvent,
    DonationReceivedEvent, RefundWithdrawnEvent,
};
use ledger::{
    extend_instance, load_balance, load_organization, read_currency, store_balance,
    store_organization,
};
use storage_types::DataKey;

use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env};

#[contract]
pub struct CrowdsaleContract;

#[contractimpl]
impl CrowdsaleContract {
    /// Initialize the contract with the token contributions are made in
    pub fn initialize(e: Env, currency: Address) -> Result<(), CrowdsaleError> {
        if e.storage().instance().has(&DataKey::Currency) {
            return Err(CrowdsaleError::AlreadyInitialized);
        }

        e.storage().instance().set(&DataKey::Currency, &currency);
        extend_instance(&e);
        Ok(())
    }

    /// Register a parameter set and return its content hash. Idempotent.
    pub fn register_params(e: Env, params: CampaignParams) -> BytesN<32> {
        registry::register(&e, &params)
    }

    /// Compute the key `params` would be registered under, without storing it.
    pub fn params_hash(e: Env, params: CampaignParams) -> BytesN<32> {
        registry::hash_params(&e, &params)
    }

    /// Start a campaign for `org`, registering `params` if needed.
    pub fn start(
        e: Env,
        org: Address,
        params: CampaignParams,
        proxy: Address,
        credits: CreditIssuers,
    ) -> Result<BytesN<32>, CrowdsaleError> {
        org.require_auth();
        read_currency(&e)?;
        ensure_no_live_campaign(&e, &org)?;

        let params_hash = registry::register(&e, &params);
        activate(&e, &org, params_hash, proxy, credits)
    }

    /// Start a campaign for `org` against an already registered parameter set.
    pub fn start_registered(
        e: Env,
        org: Address,
        params_hash: BytesN<32>,
        proxy: Address,
        credits: CreditIssuers,
    ) -> Result<BytesN<32>, CrowdsaleError> {
        org.require_auth();
        read_currency(&e)?;
        ensure_no_live_campaign(&e, &org)?;

        activate(&e, &org, params_hash, proxy, credits)
    }

    pub fn is_active(e: Env, org: Address) -> bool {
        let Some(record) = load_organization(&e, &org) else {
            return false;
        };
        match registry::load_params(&e, &record.params_hash) {
            Some(params) => lifecycle::is_active(&params, &record, e.ledger().sequence()),
            None => false,
        }
    }

    pub fn halt(e: Env, org: Address, caller: Address) -> Result<(), CrowdsaleError> {
        set_halted(&e, &org, &caller, true)
    }

    pub fn resume(e: Env, org: Address, caller: Address) -> Result<(), CrowdsaleError> {
        set_halted(&e, &org, &caller, false)
    }

    /// Contribute `amount` to `org`'s campaign on behalf of `donor`, crediting
    /// `beneficiary`. Anything above the remaining headroom is recorded as change
    /// the donor can withdraw later. Returns the campaign credits issued; 0 means
    /// the contribution was rejected.
    pub fn donate(
        e: Env,
        org: Address,
        donor: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<i128, CrowdsaleError> {
        donor.require_auth();
        let currency = read_currency(&e)?;

        if amount <= 0 {
            return Ok(0);
        }

        let (mut record, params) = load_campaign(&e, &org)?;
        if !lifecycle::is_active(&params, &record, e.ledger().sequence()) {
            return Err(CrowdsaleError::InvalidState);
        }
        if record.halted {
            return Err(CrowdsaleError::CampaignHalted);
        }

        let (incoming, change) = lifecycle::clamp_to_cap(params.cap, record.total_raised, amount);

        let mut balance = load_balance(&e, &record.params_hash, &donor);
        balance.deposit += incoming;
        balance.refund_due += change;
        store_balance(&e, &record.params_hash, &donor, &balance);

        record.total_raised += incoming;
        store_organization(&e, &org, &record);

        settlement::collect(&e, &currency, &donor, amount);

        let issued = CREDIT_UNIT;
        token::StellarAssetClient::new(&e, &record.token).mint(&beneficiary, &issued);
        token::StellarAssetClient::new(&e, &record.reputation).mint(&beneficiary, &incoming);

        emit_donation_received(
            &e,
            DonationReceivedEvent {
                organization: org,
                beneficiary,
                incoming,
                issued,
            },
        );

        Ok(issued)
    }

    /// Resolve the campaign once its window has ended or its cap is reached.
    pub fn close(e: Env, org: Address) -> Result<CloseOutcome, CrowdsaleError> {
        let currency = read_currency(&e)?;
        let (record, mut params) = load_campaign(&e, &org)?;
        if params.status != CampaignStatus::Active {
            return Err(CrowdsaleError::InvalidState);
        }

        if !lifecycle::is_resolvable(&params, &record, e.ledger().sequence()) {
            return Ok(CloseOutcome::NotReady);
        }

        let outcome = if record.total_raised >= params.cap {
            params.status = CampaignStatus::ClosedSuccessful;
            registry::store_params(&e, &record.params_hash, &params);

            let paid = settlement::payout(&e, &currency, &params.beneficiary, record.total_raised);
            if let Err(err) = paid {
                params.status = CampaignStatus::Active;
                registry::store_params(&e, &record.params_hash, &params);
                return Err(err);
            }
            CloseOutcome::Successful
        } else {
            params.status = CampaignStatus::ClosedFailed;
            registry::store_params(&e, &record.params_hash, &params);
            CloseOutcome::Failed
        };

        emit_campaign_closed(
            &e,
            CampaignClosedEvent {
                organization: org,
                outcome,
                total_raised: record.total_raised,
            },
        );

        Ok(outcome)
    }

    /// Pay `caller` what `org`'s current campaign owes them and return the amount moved.
    /// Failed transfers leave the balance in place for a later retry.
    pub fn withdraw(e: Env, org: Address, caller: Address) -> i128 {
        let Some(record) = load_organization(&e, &org) else {
            caller.require_auth();
            return 0;
        };
        Self::withdraw_params(e, record.params_hash, caller)
    }

    /// Same as `withdraw`, addressed by parameter set so balances of an
    /// organization's earlier campaigns stay reachable after it starts a new one.
    pub fn withdraw_params(e: Env, params_hash: BytesN<32>, caller: Address) -> i128 {
        caller.require_auth();

        let Ok(currency) = read_currency(&e) else {
            return 0;
        };
        let Some(params) = registry::load_params(&e, &params_hash) else {
            return 0;
        };

        let paid = settlement::withdraw_owed(&e, &currency, &params_hash, params.status, &caller);
        if paid > 0 {
            emit_refund_withdrawn(
                &e,
                RefundWithdrawnEvent {
                    params_hash,
                    contributor: caller,
                    amount: paid,
                },
            );
        }
        paid
    }

    /// View functions
    pub fn get_params(e: Env, params_hash: BytesN<32>) -> Option<ParameterSet> {
        registry::load_params(&e, &params_hash)
    }

    pub fn get_organization(e: Env, org: Address) -> Option<Organization> {
        load_organization(&e, &org)
    }

    /// Amounts still owed to `contributor`. Deposits of a successful campaign
    /// read as zero since they were paid to the beneficiary at close.
    pub fn get_balance(e: Env, params_hash: BytesN<32>, contributor: Address) -> LedgerBalance {
        let mut balance = load_balance(&e, &params_hash, &contributor);
        if let Some(params) = registry::load_params(&e, &params_hash) {
            if params.status == CampaignStatus::ClosedSuccessful {
                balance.deposit = 0;
            }
        }
        balance
    }

    pub fn get_currency(e: Env) -> Result<Address, CrowdsaleError> {
        read_currency(&e)
    }
}

// Helper functions
fn ensure_no_live_campaign(e: &Env, org: &Address) -> Result<(), CrowdsaleError> {
    if let Ok((_, params)) = load_campaign(e, org) {
        if params.status == CampaignStatus::Active {
            return Err(CrowdsaleError::AlreadyActive);
        }
    }
    Ok(())
}

fn load_campaign(e: &Env, org: &Address) -> Result<(Organization, ParameterSet), CrowdsaleError> {
    let record = load_organization(e, org).ok_or(CrowdsaleError::InvalidState)?;
    let params = registry::load_params(e, &record.params_hash)
        .ok_or(CrowdsaleError::MissingParameters)?;
    Ok((record, params))
}

fn activate(
    e: &Env,
    org: &Address,
    params_hash: BytesN<32>,
    proxy: Address,
    credits: CreditIssuers,
) -> Result<BytesN<32>, CrowdsaleError> {
    let mut params = registry::load_params(e, &params_hash)
        .ok_or(CrowdsaleError::MissingParameters)?;
    if params.cap <= 0 {
        return Err(CrowdsaleError::MissingParameters);
    }
    if params.status != CampaignStatus::Unset {
        return Err(CrowdsaleError::AlreadyActive);
    }

    params.status = CampaignStatus::Active;
    registry::store_params(e, &params_hash, &params);

    let record = Organization {
        params_hash: params_hash.clone(),
        proxy: proxy.clone(),
        total_raised: 0,
        halted: false,
        token: credits.token,
        reputation: credits.reputation,
    };
    store_organization(e, org, &record);
    extend_instance(e);

    emit_campaign_started(
        e,
        CampaignStartedEvent {
            organization: org.clone(),
            params_hash: params_hash.clone(),
            proxy,
        },
    );

    Ok(params_hash)
}

fn set_halted(
    e: &Env,
    org: &Address,
    caller: &Address,
    halted: bool,
) -> Result<(), CrowdsaleError> {
    caller.require_auth();

    let (mut record, params) = load_campaign(e, org)?;
    if *caller != params.admin {
        return Err(CrowdsaleError::Unauthorized);
    }
    if params.status != CampaignStatus::Active {
        return Err(CrowdsaleError::InvalidState);
    }

    record.halted = halted;
    store_organization(e, org, &record);

    emit_campaign_halted(
        e,
        CampaignHaltedEvent {
            organization: org.clone(),
            halted,
        },
    );
    Ok(())
}
