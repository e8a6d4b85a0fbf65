use soroban_sdk::{log, token, Address, BytesN, Env};

use crate::ledger::{load_balance, store_balance};
use crate::storage_types::*;

#[derive(Clone, Copy)]
enum Entitlement {
    RefundDue,
    Deposit,
}

impl Entitlement {
    fn amount(&self, balance: &LedgerBalance) -> i128 {
        match self {
            Entitlement::RefundDue => balance.refund_due,
            Entitlement::Deposit => balance.deposit,
        }
    }

    fn set(&self, balance: &mut LedgerBalance, amount: i128) {
        match self {
            Entitlement::RefundDue => balance.refund_due = amount,
            Entitlement::Deposit => balance.deposit = amount,
        }
    }
}

/// Single transfer attempt out of the contract. Returns false if the token call failed.
fn try_pay(e: &Env, currency: &Address, to: &Address, amount: i128) -> bool {
    let token_client = token::Client::new(e, currency);
    matches!(
        token_client.try_transfer(&e.current_contract_address(), to, &amount),
        Ok(Ok(()))
    )
}

/// Pull a contribution from the donor into the contract.
pub fn collect(e: &Env, currency: &Address, from: &Address, amount: i128) {
    let token_client = token::Client::new(e, currency);
    token_client.transfer(from, &e.current_contract_address(), &amount);
}

/// Pay the raised total to the beneficiary. Failure aborts the enclosing close.
pub fn payout(
    e: &Env,
    currency: &Address,
    beneficiary: &Address,
    amount: i128,
) -> Result<(), CrowdsaleError> {
    if try_pay(e, currency, beneficiary, amount) {
        Ok(())
    } else {
        Err(CrowdsaleError::TransferFailure)
    }
}

// Cleared before the transfer, restored if it fails.
fn settle(
    e: &Env,
    currency: &Address,
    params_hash: &BytesN<32>,
    contributor: &Address,
    entitlement: Entitlement,
) -> i128 {
    let mut balance = load_balance(e, params_hash, contributor);
    let amount = entitlement.amount(&balance);
    if amount <= 0 {
        return 0;
    }

    entitlement.set(&mut balance, 0);
    store_balance(e, params_hash, contributor, &balance);

    if try_pay(e, currency, contributor, amount) {
        return amount;
    }

    let mut balance = load_balance(e, params_hash, contributor);
    let restored = entitlement.amount(&balance) + amount;
    entitlement.set(&mut balance, restored);
    store_balance(e, params_hash, contributor, &balance);
    log!(e, "withdrawal transfer failed, balance restored", contributor.clone(), amount);

    0
}

// Deposits of a successful campaign went to the beneficiary at close.
fn release_deposit(e: &Env, params_hash: &BytesN<32>, contributor: &Address) {
    let mut balance = load_balance(e, params_hash, contributor);
    if balance.deposit != 0 {
        balance.deposit = 0;
        store_balance(e, params_hash, contributor, &balance);
    }
}

/// Pay out everything owed to `contributor` for a closed campaign and return the amount moved.
pub fn withdraw_owed(
    e: &Env,
    currency: &Address,
    params_hash: &BytesN<32>,
    status: CampaignStatus,
    contributor: &Address,
) -> i128 {
    if !status.is_closed() {
        return 0;
    }

    let mut paid = settle(e, currency, params_hash, contributor, Entitlement::RefundDue);
    match status {
        CampaignStatus::ClosedFailed => {
            paid += settle(e, currency, params_hash, contributor, Entitlement::Deposit);
        }
        _ => release_deposit(e, params_hash, contributor),
    }
    paid
}
