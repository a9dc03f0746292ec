//! CLI tool for deploying and interacting with the vault contracts.

use streaming_vault_contracts::cep4626::Cep4626Vault;
use streaming_vault_contracts::tokens::AssetToken;
use streaming_vault_contracts::xvault::StreamingVault;
use odra::casper_types::U256;
use odra::prelude::{Address, Addressable};
use odra::host::HostEnv;
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// One day in block-time milliseconds
const DEFAULT_CYCLE_LENGTH: u64 = 86_400_000;

/// Deploys the underlying asset token.
pub struct AssetTokenDeployScript;

impl DeployScript for AssetTokenDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use streaming_vault_contracts::tokens::AssetTokenInitArgs;

        let _token = AssetToken::load_or_deploy(
            &env,
            AssetTokenInitArgs {
                name: String::from("Vault Asset"),
                symbol: String::from("ASSET"),
                decimals: 18,
            },
            container,
            300_000_000_000
        )?;

        Ok(())
    }
}

/// Deploys the plain CEP-4626 vault.
/// Requires the asset token to be deployed first.
pub struct Cep4626VaultDeployScript;

impl DeployScript for Cep4626VaultDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use streaming_vault_contracts::cep4626::vault::Cep4626VaultInitArgs;

        let asset = container.contract_ref::<AssetToken>(env)?;

        let _vault = Cep4626Vault::load_or_deploy(
            &env,
            Cep4626VaultInitArgs {
                asset: asset.address().clone(),
                name: String::from("Vault Shares"),
                symbol: String::from("vASSET"),
                decimals_offset: 0,
            },
            container,
            400_000_000_000
        )?;

        Ok(())
    }
}

/// Deploys the streaming vault.
/// Requires the asset token to be deployed first.
pub struct StreamingVaultDeployScript;

impl DeployScript for StreamingVaultDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use streaming_vault_contracts::xvault::vault::StreamingVaultInitArgs;

        let asset = container.contract_ref::<AssetToken>(env)?;

        let _vault = StreamingVault::load_or_deploy(
            &env,
            StreamingVaultInitArgs {
                asset: asset.address().clone(),
                name: String::from("Streaming Vault Shares"),
                symbol: String::from("xASSET"),
                rewards_cycle_length: DEFAULT_CYCLE_LENGTH,
                decimals_offset: 0,
            },
            container,
            500_000_000_000
        )?;

        Ok(())
    }
}

/// Deploys the asset token and both vaults.
pub struct VaultsDeployScript;

impl DeployScript for VaultsDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        AssetTokenDeployScript.deploy(env, container)?;
        Cep4626VaultDeployScript.deploy(env, container)?;
        StreamingVaultDeployScript.deploy(env, container)?;

        Ok(())
    }
}

/// Scenario to start a new reward cycle on the streaming vault.
pub struct SyncRewardsScenario;

impl Scenario for SyncRewardsScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args
    ) -> Result<(), Error> {
        let mut vault = container.contract_ref::<StreamingVault>(env)?;

        env.set_gas(100_000_000_000);
        let reward = vault.try_sync_rewards()?;

        println!("New cycle ends at {}, vesting {}", vault.rewards_cycle_end(), reward);
        Ok(())
    }
}

impl ScenarioMetadata for SyncRewardsScenario {
    const NAME: &'static str = "sync-rewards";
    const DESCRIPTION: &'static str = "Fold received profit into a new reward cycle";
}

/// Scenario to deposit assets into the streaming vault.
pub struct DepositScenario;

impl Scenario for DepositScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new(
                "assets",
                "Amount of the underlying asset to deposit",
                NamedCLType::U256,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut asset = container.contract_ref::<AssetToken>(env)?;
        let mut vault = container.contract_ref::<StreamingVault>(env)?;
        let assets = args.get_single::<U256>("assets")?;
        let receiver: Address = env.caller();

        env.set_gas(50_000_000_000);
        asset.try_approve(vault.address().clone(), assets)?;

        env.set_gas(150_000_000_000);
        let shares = vault.try_deposit(assets, receiver)?;

        println!("Deposited {} assets for {} shares", assets, shares);
        Ok(())
    }
}

impl ScenarioMetadata for DepositScenario {
    const NAME: &'static str = "deposit";
    const DESCRIPTION: &'static str = "Deposit assets into the streaming vault";
}

/// Scenario to redeem shares from the streaming vault.
pub struct RedeemScenario;

impl Scenario for RedeemScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new(
                "shares",
                "Amount of vault shares to redeem",
                NamedCLType::U256,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut vault = container.contract_ref::<StreamingVault>(env)?;
        let shares = args.get_single::<U256>("shares")?;
        let owner: Address = env.caller();

        env.set_gas(150_000_000_000);
        let assets = vault.try_redeem(shares, owner, owner)?;

        println!("Redeemed {} shares for {} assets", shares, assets);
        Ok(())
    }
}

impl ScenarioMetadata for RedeemScenario {
    const NAME: &'static str = "redeem";
    const DESCRIPTION: &'static str = "Redeem shares from the streaming vault";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for the streaming vault contracts")
        // Deploy scripts
        .deploy(AssetTokenDeployScript)
        .deploy(Cep4626VaultDeployScript)
        .deploy(StreamingVaultDeployScript)
        .deploy(VaultsDeployScript)
        // Contract references
        .contract::<AssetToken>()
        .contract::<Cep4626Vault>()
        .contract::<StreamingVault>()
        // Scenarios
        .scenario(SyncRewardsScenario)
        .scenario(DepositScenario)
        .scenario(RedeemScenario)
        .build()
        .run();
}
