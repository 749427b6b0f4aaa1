use crate::common::Money;

/// Rule constants and tunable parameters of a game.
///
/// Every field has a default matching the standard edition; a partial TOML
/// file only overrides the keys it names.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Fee for leaving jail early, also due after the last jailed turn.
    pub jail_fee: Money,
    /// Salary for passing or landing on Go.
    pub go_salary: Money,
    /// Turns a player may spend trying to roll doubles in jail.
    pub max_turns_in_jail: u8,
    pub income_tax_cap: Money,
    pub income_tax_percent: Money,
    pub luxury_tax: Money,
    /// Cash each player receives from the bank before the first round.
    pub starting_cash: Money,
    pub bank_money: Money,
    pub bank_houses: u32,
    pub bank_hotels: u32,
    /// Interest charged on top of the mortgage value to lift a mortgage.
    pub mortgage_interest_percent: Money,
}

impl GameConfig {
    // ===== compile-time constants =====
    pub const MIN_PLAYERS: usize = 1;
    pub const MAX_PLAYERS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_JAIL_FEE: Money = 50;
    pub const DEFAULT_GO_SALARY: Money = 200;
    pub const DEFAULT_MAX_TURNS_IN_JAIL: u8 = 3;
    pub const DEFAULT_INCOME_TAX_CAP: Money = 200;
    pub const DEFAULT_INCOME_TAX_PERCENT: Money = 10;
    pub const DEFAULT_LUXURY_TAX: Money = 100;
    pub const DEFAULT_STARTING_CASH: Money = 1500;
    pub const DEFAULT_BANK_MONEY: Money = 20580;
    pub const DEFAULT_BANK_HOUSES: u32 = 32;
    pub const DEFAULT_BANK_HOTELS: u32 = 12;
    pub const DEFAULT_MORTGAGE_INTEREST_PERCENT: Money = 10;

    pub fn new() -> Self {
        Self {
            jail_fee: Self::DEFAULT_JAIL_FEE,
            go_salary: Self::DEFAULT_GO_SALARY,
            max_turns_in_jail: Self::DEFAULT_MAX_TURNS_IN_JAIL,
            income_tax_cap: Self::DEFAULT_INCOME_TAX_CAP,
            income_tax_percent: Self::DEFAULT_INCOME_TAX_PERCENT,
            luxury_tax: Self::DEFAULT_LUXURY_TAX,
            starting_cash: Self::DEFAULT_STARTING_CASH,
            bank_money: Self::DEFAULT_BANK_MONEY,
            bank_houses: Self::DEFAULT_BANK_HOUSES,
            bank_hotels: Self::DEFAULT_BANK_HOTELS,
            mortgage_interest_percent: Self::DEFAULT_MORTGAGE_INTEREST_PERCENT,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
