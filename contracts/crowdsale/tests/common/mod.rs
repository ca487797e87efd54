#![allow(dead_code)]

use crowdsale::{
    schedule, ContributionWindow, CrowdsaleContract, CrowdsaleContractClient, OpenPolicy,
    ReserveShare, SaleConfig, REFERENCE_BASE_RATE,
};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype,
    testutils::{Address as _, Ledger},
    token, Address, Env, Vec,
};

pub const UNIT: i128 = 10_000_000;
pub const OPENS_AT: u32 = 1_000_000;
pub const PUBLIC_OPENS_AT: u32 = 1_003_000;
pub const CLOSES_AT: u32 = 1_040_000;

// ==================== Mock collaborators ====================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockError {
    Disabled = 1,
}

#[derive(Clone)]
#[contracttype]
enum MockKey {
    Balance(Address),
    Supply,
    Controller,
    FailMint,
    FailController,
    Fail,
    Calls,
    LastAt,
}

/// Minimal allocation asset: balances, supply and a controller slot.
#[contract]
pub struct MockAllocationAsset;

#[contractimpl]
impl MockAllocationAsset {
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), MockError> {
        if env.storage().instance().get(&MockKey::FailMint).unwrap_or(false) {
            return Err(MockError::Disabled);
        }
        let key = MockKey::Balance(to);
        let balance: i128 = env.storage().instance().get(&key).unwrap_or(0);
        env.storage().instance().set(&key, &(balance + amount));
        let supply: i128 = env.storage().instance().get(&MockKey::Supply).unwrap_or(0);
        env.storage().instance().set(&MockKey::Supply, &(supply + amount));
        Ok(())
    }

    pub fn set_controller(env: Env, new_controller: Address) -> Result<(), MockError> {
        if env
            .storage()
            .instance()
            .get(&MockKey::FailController)
            .unwrap_or(false)
        {
            return Err(MockError::Disabled);
        }
        env.storage().instance().set(&MockKey::Controller, &new_controller);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage().instance().get(&MockKey::Balance(id)).unwrap_or(0)
    }

    pub fn supply(env: Env) -> i128 {
        env.storage().instance().get(&MockKey::Supply).unwrap_or(0)
    }

    pub fn controller(env: Env) -> Option<Address> {
        env.storage().instance().get(&MockKey::Controller)
    }

    pub fn set_fail_mint(env: Env, fail: bool) {
        env.storage().instance().set(&MockKey::FailMint, &fail);
    }

    pub fn set_fail_controller(env: Env, fail: bool) {
        env.storage().instance().set(&MockKey::FailController, &fail);
    }
}

/// Stands in for both the reserve holder and the funds custodian: counts
/// finalization notices and can be told to reject them.
#[contract]
pub struct MockFinalizeHook;

#[contractimpl]
impl MockFinalizeHook {
    pub fn on_sale_finalized(env: Env, finalized_at: u32) -> Result<(), MockError> {
        if env.storage().instance().get(&MockKey::Fail).unwrap_or(false) {
            return Err(MockError::Disabled);
        }
        let calls: u32 = env.storage().instance().get(&MockKey::Calls).unwrap_or(0);
        env.storage().instance().set(&MockKey::Calls, &(calls + 1));
        env.storage().instance().set(&MockKey::LastAt, &finalized_at);
        Ok(())
    }

    pub fn calls(env: Env) -> u32 {
        env.storage().instance().get(&MockKey::Calls).unwrap_or(0)
    }

    pub fn last_finalized_at(env: Env) -> Option<u32> {
        env.storage().instance().get(&MockKey::LastAt)
    }

    pub fn set_fail(env: Env, fail: bool) {
        env.storage().instance().set(&MockKey::Fail, &fail);
    }
}

// ==================== Fixture ====================

pub struct SaleTest<'a> {
    pub env: &'a Env,
    pub client: CrowdsaleContractClient<'a>,
    pub asset: MockAllocationAssetClient<'a>,
    pub payment: token::Client<'a>,
    pub payment_admin: token::StellarAssetClient<'a>,
    pub holder: MockFinalizeHookClient<'a>,
    pub custodian: MockFinalizeHookClient<'a>,
    pub admin: Address,
    pub successor: Address,
}

impl<'a> SaleTest<'a> {
    /// Advance the ledger sequence used as the sale checkpoint.
    pub fn at(&self, checkpoint: u32) {
        self.env.ledger().set_sequence_number(checkpoint);
    }

    /// A fresh address holding `units` whole payment-token units.
    pub fn funded_participant(&self, units: i128) -> Address {
        let participant = Address::generate(self.env);
        self.payment_admin.mint(&participant, &(units * UNIT));
        participant
    }

    pub fn custodian_balance(&self) -> i128 {
        self.payment.balance(&self.custodian.address)
    }
}

pub fn setup_sale<'a>(env: &'a Env) -> SaleTest<'a> {
    setup_sale_with(env, OpenPolicy::Unrestricted, |_| Vec::new(env))
}

pub fn setup_sale_with<'a>(
    env: &'a Env,
    open_policy: OpenPolicy,
    reserve_shares: impl FnOnce(&Env) -> Vec<ReserveShare>,
) -> SaleTest<'a> {
    env.mock_all_auths();
    env.ledger().set_sequence_number(OPENS_AT - 1_000);

    let admin = Address::generate(env);
    let successor = Address::generate(env);

    let payment_id = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let asset_id = env.register_contract(None, MockAllocationAsset);
    let holder_id = env.register_contract(None, MockFinalizeHook);
    let custodian_id = env.register_contract(None, MockFinalizeHook);

    let contract_id = env.register_contract(None, CrowdsaleContract);
    let client = CrowdsaleContractClient::new(env, &contract_id);

    let config = SaleConfig {
        admin: admin.clone(),
        allocation_asset: asset_id.clone(),
        payment_token: payment_id.clone(),
        custodian: custodian_id.clone(),
        reserve_holder: holder_id.clone(),
        successor_controller: successor.clone(),
        window: ContributionWindow {
            opens_at: OPENS_AT,
            public_opens_at: PUBLIC_OPENS_AT,
            closes_at: CLOSES_AT,
        },
        base_rate: REFERENCE_BASE_RATE,
    };
    client.initialize(
        &config,
        &schedule::reference_tiers(env, UNIT),
        &reserve_shares(env),
        &open_policy,
    );

    SaleTest {
        env,
        client,
        asset: MockAllocationAssetClient::new(env, &asset_id),
        payment: token::Client::new(env, &payment_id),
        payment_admin: token::StellarAssetClient::new(env, &payment_id),
        holder: MockFinalizeHookClient::new(env, &holder_id),
        custodian: MockFinalizeHookClient::new(env, &custodian_id),
        admin,
        successor,
    }
}

/// Allocation in asset units for `units` contributed at `multiplier_bps`.
pub fn allocation(units: i128, multiplier_bps: i128) -> i128 {
    units * UNIT * REFERENCE_BASE_RATE * multiplier_bps / 10_000
}
