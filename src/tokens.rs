//! Standalone CEP-18 token used as a vault's underlying asset in tests and CLI deployments
use odra::prelude::*;
use odra::casper_types::U256;
use crate::token::Cep18Ledger;

/// Underlying asset token with an open faucet `mint`
#[odra::module]
pub struct AssetToken {
    ledger: SubModule<Cep18Ledger>,
}

#[odra::module]
impl AssetToken {
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        self.ledger.init(name, symbol, decimals);
    }

    pub fn name(&self) -> String { self.ledger.name() }
    pub fn symbol(&self) -> String { self.ledger.symbol() }
    pub fn decimals(&self) -> u8 { self.ledger.decimals() }
    pub fn total_supply(&self) -> U256 { self.ledger.total_supply() }
    pub fn balance_of(&self, owner: Address) -> U256 { self.ledger.balance_of(owner) }
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.ledger.allowance(owner, spender)
    }

    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        self.ledger.transfer(to, amount)
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        self.ledger.approve(spender, amount)
    }

    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        self.ledger.transfer_from(from, to, amount)
    }

    pub fn mint(&mut self, to: Address, amount: U256) {
        self.ledger.mint(to, amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odra::host::Deployer;

    #[test]
    fn test_asset_token_faucet() {
        let env = odra_test::env();
        let mut token = AssetToken::deploy(&env, AssetTokenInitArgs {
            name: String::from("Token0 Name"),
            symbol: String::from("Token0"),
            decimals: 18,
        });
        let user = env.get_account(1);

        token.mint(user, U256::from(5));
        assert_eq!(token.balance_of(user), U256::from(5));
        assert_eq!(token.total_supply(), U256::from(5));
        assert_eq!(token.symbol(), "Token0");
    }
}
