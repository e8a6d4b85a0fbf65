use soroban_sdk::{contracttype, Address, BytesN, Env, Symbol};

use crate::storage_types::CloseOutcome;

#[contracttype]
#[derive(Clone)]
pub struct ParamsRegisteredEvent {
    pub params_hash: BytesN<32>,
    pub cap: i128,
    pub beneficiary: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignStartedEvent {
    pub organization: Address,
    pub params_hash: BytesN<32>,
    pub proxy: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationReceivedEvent {
    pub organization: Address,
    pub beneficiary: Address,
    pub incoming: i128,
    pub issued: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignHaltedEvent {
    pub organization: Address,
    pub halted: bool,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignClosedEvent {
    pub organization: Address,
    pub outcome: CloseOutcome,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundWithdrawnEvent {
    pub params_hash: BytesN<32>,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_params_registered(env: &Env, event: ParamsRegisteredEvent) {
    env.events().publish(
        (Symbol::new(env, "params_registered"),),
        event,
    );
}

pub fn emit_campaign_started(env: &Env, event: CampaignStartedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_started"),),
        event,
    );
}

pub fn emit_donation_received(env: &Env, event: DonationReceivedEvent) {
    env.events().publish(
        (Symbol::new(env, "donation_received"),),
        event,
    );
}

pub fn emit_campaign_halted(env: &Env, event: CampaignHaltedEvent) {
    let topic = if event.halted { "campaign_halted" } else { "campaign_resumed" };
    env.events().publish((Symbol::new(env, topic),), event);
}

pub fn emit_campaign_closed(env: &Env, event: CampaignClosedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_closed"),),
        event,
    );
}

pub fn emit_refund_withdrawn(env: &Env, event: RefundWithdrawnEvent) {
    env.events().publish(
        (Symbol::new(env, "refund_withdrawn"),),
        event,
    );
}
