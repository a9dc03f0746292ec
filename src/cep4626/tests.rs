//! Tests for the plain CEP-4626 vault

#[cfg(test)]
mod tests {
    use odra::host::{Deployer, HostEnv};
    use odra::prelude::*;
    use odra::casper_types::U256;
    use crate::cep4626::vault::{Cep4626Vault, Cep4626VaultHostRef, Cep4626VaultInitArgs};
    use crate::errors::{TokenError, VaultError};
    use crate::tokens::{AssetToken, AssetTokenHostRef, AssetTokenInitArgs};

    const ONE: u128 = 1_000_000_000_000_000_000;

    fn units(tenths: u128) -> U256 {
        U256::from(tenths * ONE / 10)
    }

    fn setup() -> (HostEnv, AssetTokenHostRef, Cep4626VaultHostRef) {
        let env = odra_test::env();
        let deployer = env.get_account(0);

        let mut token = AssetToken::deploy(&env, AssetTokenInitArgs {
            name: String::from("Token0 Name"),
            symbol: String::from("Token0"),
            decimals: 18,
        });
        token.mint(deployer, units(20));
        token.transfer(env.get_account(1), units(10));
        token.transfer(env.get_account(2), units(10));

        let vault = Cep4626Vault::deploy(&env, Cep4626VaultInitArgs {
            asset: token.address().clone(),
            name: String::from("ERC20Name"),
            symbol: String::from("ERC20Symbol"),
            decimals_offset: 0,
        });
        (env, token, vault)
    }

    fn deposit_as(
        env: &HostEnv,
        token: &mut AssetTokenHostRef,
        vault: &mut Cep4626VaultHostRef,
        user: Address,
        assets: U256,
    ) -> U256 {
        env.set_caller(user);
        token.approve(vault.address().clone(), assets);
        vault.deposit(assets, user)
    }

    #[test]
    fn test_vault_metadata() {
        let (_, token, vault) = setup();
        assert_eq!(vault.name(), "ERC20Name");
        assert_eq!(vault.symbol(), "ERC20Symbol");
        assert_eq!(vault.decimals(), 18);
        assert_eq!(vault.asset(), token.address().clone());
        assert_eq!(vault.total_assets(), U256::zero());
    }

    #[test]
    fn test_deposit_then_redeem_returns_deposit() {
        let (env, mut token, mut vault) = setup();
        let user1 = env.get_account(1);

        assert_eq!(vault.max_redeem(user1), U256::zero());
        assert_eq!(vault.convert_to_shares(units(10)), units(10));

        let shares = deposit_as(&env, &mut token, &mut vault, user1, units(10));
        assert_eq!(shares, units(10));
        assert_eq!(vault.max_redeem(user1), shares);
        assert_eq!(vault.total_assets(), units(10));

        assert_eq!(vault.convert_to_assets(shares), units(10));
        let assets = vault.redeem(shares, user1, user1);
        assert_eq!(assets, units(10));
        assert_eq!(vault.max_redeem(user1), U256::zero());
        assert_eq!(token.balance_of(user1), units(10));
    }

    #[test]
    fn test_multi_user_partial_redemptions() {
        let (env, mut token, mut vault) = setup();
        let user1 = env.get_account(1);
        let user2 = env.get_account(2);

        let shares1 = deposit_as(&env, &mut token, &mut vault, user1, units(10));
        let shares2 = deposit_as(&env, &mut token, &mut vault, user2, units(10));
        assert_eq!(shares1, shares2);
        assert_eq!(vault.total_assets(), units(20));

        env.set_caller(user1);
        vault.redeem(shares1 / 2, user1, user1);
        assert_eq!(vault.max_redeem(user1), shares1 - shares1 / 2);
        assert_eq!(token.balance_of(user1), units(5));

        env.set_caller(user2);
        vault.redeem(shares2 / 5, user2, user2);
        assert_eq!(vault.max_redeem(user2), shares2 - shares2 / 5);
        assert_eq!(token.balance_of(user2), units(2));

        env.set_caller(user1);
        vault.redeem(vault.max_redeem(user1), user1, user1);
        assert_eq!(token.balance_of(user1), units(10));

        env.set_caller(user2);
        vault.redeem(vault.max_redeem(user2), user2, user2);
        assert_eq!(token.balance_of(user2), units(10));
        assert_eq!(vault.total_supply(), U256::zero());
    }

    #[test]
    fn test_donation_is_visible_immediately() {
        let (env, mut token, mut vault) = setup();
        let user1 = env.get_account(1);
        let user2 = env.get_account(2);

        let shares = deposit_as(&env, &mut token, &mut vault, user1, units(10));

        env.set_caller(user2);
        token.transfer(vault.address().clone(), units(1));

        assert_eq!(vault.total_assets(), units(11));
        // the virtual share keeps one base unit of dust
        assert_eq!(vault.preview_redeem(shares), units(11) - U256::one());
        assert_eq!(vault.preview_mint(shares), units(11));
    }

    #[test]
    fn test_rounding_directions() {
        let (env, mut token, mut vault) = setup();
        let user1 = env.get_account(1);
        let user2 = env.get_account(2);

        deposit_as(&env, &mut token, &mut vault, user1, U256::from(1_000));
        env.set_caller(user2);
        token.transfer(vault.address().clone(), U256::one());

        // 10 * 1001 / 1002 = 9.99
        assert_eq!(vault.preview_deposit(U256::from(10)), U256::from(9));
        assert_eq!(vault.preview_withdraw(U256::from(10)), U256::from(10));

        env.set_caller(user1);
        let burned = vault.withdraw(U256::from(10), user1, user1);
        assert_eq!(burned, U256::from(10));
        assert_eq!(vault.balance_of(user1), U256::from(990));
    }

    #[test]
    fn test_mint_pulls_rounded_up_assets() {
        let (env, mut token, mut vault) = setup();
        let user1 = env.get_account(1);

        env.set_caller(user1);
        token.approve(vault.address().clone(), units(10));
        let assets = vault.mint(units(5), user1);
        assert_eq!(assets, units(5));
        assert_eq!(vault.balance_of(user1), units(5));
        assert_eq!(token.balance_of(user1), units(5));
    }

    #[test]
    fn test_delegated_redeem_spends_share_allowance() {
        let (env, mut token, mut vault) = setup();
        let user1 = env.get_account(1);
        let user2 = env.get_account(2);

        let shares = deposit_as(&env, &mut token, &mut vault, user1, units(10));
        env.set_caller(user1);
        vault.approve(user2, shares / 2);

        env.set_caller(user2);
        vault.redeem(shares / 2, user2, user1);
        assert_eq!(token.balance_of(user2), units(15));
        assert_eq!(vault.allowance(user1, user2), U256::zero());

        let result = vault.try_redeem(U256::one(), user2, user1);
        assert_eq!(result, Err(TokenError::InsufficientAllowance.into()));
    }

    #[test]
    fn test_redeem_above_balance_fails() {
        let (env, _, mut vault) = setup();
        let user2 = env.get_account(2);

        env.set_caller(user2);
        let result = vault.try_redeem(U256::one(), user2, user2);
        assert_eq!(result, Err(VaultError::ExceededMaxRedeem.into()));

        let result = vault.try_withdraw(U256::one(), user2, user2);
        assert_eq!(result, Err(VaultError::ExceededMaxWithdraw.into()));
    }

    #[test]
    fn test_deposit_without_allowance_fails_atomically() {
        let (env, token, mut vault) = setup();
        let user1 = env.get_account(1);

        env.set_caller(user1);
        let result = vault.try_deposit(units(10), user1);
        assert_eq!(result, Err(TokenError::InsufficientAllowance.into()));
        assert_eq!(vault.total_supply(), U256::zero());
        assert_eq!(token.balance_of(user1), units(10));
    }

    #[test]
    fn test_deposit_above_balance_fails_atomically() {
        let (env, mut token, mut vault) = setup();
        let user1 = env.get_account(1);

        env.set_caller(user1);
        token.approve(vault.address().clone(), units(20));
        let result = vault.try_deposit(units(15), user1);
        assert_eq!(result, Err(TokenError::InsufficientBalance.into()));
        assert_eq!(vault.total_supply(), U256::zero());
        assert_eq!(vault.total_assets(), U256::zero());
        assert_eq!(token.balance_of(user1), units(10));
    }
}
