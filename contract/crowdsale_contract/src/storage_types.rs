use soroban_sdk::{contracterror, contracttype, Address, BytesN};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Currency,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Params(BytesN<32>),
    Organization(Address),
    Balance(BytesN<32>, Address),
}

// Campaign status
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Unset,
    Active,
    ClosedSuccessful,
    ClosedFailed,
}

impl CampaignStatus {
    pub fn is_closed(&self) -> bool {
        matches!(self, CampaignStatus::ClosedSuccessful | CampaignStatus::ClosedFailed)
    }
}

/// The six fields a parameter set is keyed on.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignParams {
    pub cap: i128,
    pub price: i128,
    pub start_height: u32,
    pub end_height: u32,
    pub beneficiary: Address,
    pub admin: Address,
}

/// A registered parameter set. Fields never change after registration, only `status`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ParameterSet {
    pub cap: i128,
    pub price: i128,          // Not consulted by issuance
    pub start_height: u32,
    pub end_height: u32,
    pub beneficiary: Address,
    pub admin: Address,       // May halt and resume
    pub status: CampaignStatus,
}

// Addresses of the credit-issuance token contracts this contract administers
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CreditIssuers {
    pub token: Address,
    pub reputation: Address,
}

// Campaign state of one organization
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Organization {
    pub params_hash: BytesN<32>,
    pub proxy: Address,
    pub total_raised: i128,
    pub halted: bool,
    pub token: Address,
    pub reputation: Address,
}

/// Per (parameter set, contributor) amounts owed back.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct LedgerBalance {
    pub deposit: i128,     // Repaid only if the campaign fails
    pub refund_due: i128,  // Repaid whatever the outcome
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CloseOutcome {
    NotReady,
    Successful,
    Failed,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdsaleError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Operation attempted outside its lifecycle state.
    InvalidState = 3,
    /// Caller is not the parameter set's admin.
    Unauthorized = 4,
    /// Organization already runs a campaign, or the parameter set already backed one.
    AlreadyActive = 5,
    /// Zero cap or unknown parameter hash.
    MissingParameters = 6,
    CampaignHalted = 7,
    TransferFailure = 8,
}

// Constants
pub const CREDIT_UNIT: i128 = 1; // Campaign tokens issued per accepted donation
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
