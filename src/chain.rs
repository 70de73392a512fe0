//! Blockchains served by the OpenSea v2 API.
//!
//! Each chain is addressed in URLs and request payloads by its API slug
//! (e.g. `ethereum`, `matic`, `sepolia`), not its numeric chain id. Testnet
//! chains are served from a separate public host; see
//! [`Client::for_chain`](crate::nft::Client) constructors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::error::Error;

/// A blockchain supported by the marketplace.
///
/// Solana and its devnet are listed by the API but are not EVM networks;
/// their numeric ids here are the marketplace's internal sentinels.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Chain {
    /// Arbitrum One
    Arbitrum,
    /// Arbitrum Goerli Testnet
    ArbitrumGoerli,
    /// Arbitrum Nova
    ArbitrumNova,
    /// Avalanche C-Chain
    Avalanche,
    /// Avalanche Fuji Testnet
    AvalancheFuji,
    /// Klaytn Testnet Baobab
    Baobab,
    /// Base
    Base,
    /// Base Goerli Testnet
    BaseGoerli,
    /// BNB Smart Chain Mainnet
    Bsc,
    /// BNB Smart Chain Testnet
    #[serde(rename = "bsctestnet")]
    #[strum(serialize = "bsctestnet")]
    BscTestnet,
    /// Ethereum Mainnet
    Ethereum,
    /// Goerli
    Goerli,
    /// Klaytn Mainnet Cypress
    Klaytn,
    /// Polygon Mainnet
    Matic,
    /// Mumbai
    Mumbai,
    /// OP Mainnet
    Optimism,
    /// Optimism Goerli Testnet
    OptimismGoerli,
    /// Sepolia
    Sepolia,
    /// Solana
    Solana,
    /// Solana Devnet
    Soldev,
    /// Zora
    Zora,
    /// Zora Testnet
    ZoraTestnet,
}

/// Chains served from the production host.
pub const MAINNET_CHAINS: [Chain; 11] = [
    Chain::Arbitrum,
    Chain::ArbitrumNova,
    Chain::Avalanche,
    Chain::Base,
    Chain::Bsc,
    Chain::Ethereum,
    Chain::Klaytn,
    Chain::Matic,
    Chain::Optimism,
    Chain::Solana,
    Chain::Zora,
];

/// Chains served from the testnets host.
pub const TESTNET_CHAINS: [Chain; 11] = [
    Chain::ArbitrumGoerli,
    Chain::AvalancheFuji,
    Chain::Baobab,
    Chain::BaseGoerli,
    Chain::BscTestnet,
    Chain::Goerli,
    Chain::OptimismGoerli,
    Chain::Mumbai,
    Chain::Sepolia,
    Chain::Soldev,
    Chain::ZoraTestnet,
];

impl Chain {
    /// Numeric chain id. Negative for the non-EVM Solana entries.
    #[must_use]
    pub const fn id(self) -> i64 {
        match self {
            Self::Arbitrum => 42_161,
            Self::ArbitrumGoerli => 421_613,
            Self::ArbitrumNova => 42_170,
            Self::Avalanche => 43_114,
            Self::AvalancheFuji => 43_113,
            Self::Baobab => 1_001,
            Self::Base => 8_453,
            Self::BaseGoerli => 84_531,
            Self::Bsc => 56,
            Self::BscTestnet => 97,
            Self::Ethereum => 1,
            Self::Goerli => 5,
            Self::Klaytn => 8_217,
            Self::Matic => 137,
            Self::Mumbai => 80_001,
            Self::Optimism => 10,
            Self::OptimismGoerli => 420,
            Self::Sepolia => 11_155_111,
            Self::Solana => -1,
            Self::Soldev => -2,
            Self::Zora => 7_777_777,
            Self::ZoraTestnet => 999,
        }
    }

    /// Symbol of the chain's native currency.
    #[must_use]
    pub const fn currency(self) -> &'static str {
        match self {
            Self::Arbitrum | Self::ArbitrumNova => "ETH",
            Self::ArbitrumGoerli => "AGOR",
            Self::Avalanche | Self::AvalancheFuji => "AVAX",
            Self::Baobab | Self::Klaytn => "KLAY",
            Self::Base | Self::BaseGoerli => "ETH",
            Self::Bsc => "BNB",
            Self::BscTestnet => "tBNB",
            Self::Ethereum | Self::Goerli | Self::Sepolia => "ETH",
            Self::Matic | Self::Mumbai => "MATIC",
            Self::Optimism | Self::OptimismGoerli => "ETH",
            Self::Solana | Self::Soldev => "SOL",
            Self::Zora | Self::ZoraTestnet => "ETH",
        }
    }

    /// Human-readable network name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arbitrum => "Arbitrum One",
            Self::ArbitrumGoerli => "Arbitrum Goerli",
            Self::ArbitrumNova => "Arbitrum Nova",
            Self::Avalanche => "Avalanche C-Chain",
            Self::AvalancheFuji => "Avalanche Fuji Testnet",
            Self::Baobab => "Klaytn Testnet Baobab",
            Self::Base => "Base",
            Self::BaseGoerli => "Base Goerli Testnet",
            Self::Bsc => "BNB Smart Chain Mainnet",
            Self::BscTestnet => "BNB Smart Chain Testnet",
            Self::Ethereum => "Ethereum Mainnet",
            Self::Goerli => "Goerli",
            Self::Klaytn => "Klaytn Mainnet Cypress",
            Self::Matic => "Polygon Mainnet",
            Self::Mumbai => "Mumbai",
            Self::Optimism => "OP Mainnet",
            Self::OptimismGoerli => "Optimism Goerli Testnet",
            Self::Sepolia => "Sepolia",
            Self::Solana => "Solana",
            Self::Soldev => "Solana Devnet",
            Self::Zora => "Zora",
            Self::ZoraTestnet => "Zora Testnet",
        }
    }

    /// Whether the chain is served from the testnets host.
    #[must_use]
    pub const fn is_testnet(self) -> bool {
        matches!(
            self,
            Self::ArbitrumGoerli
                | Self::AvalancheFuji
                | Self::Baobab
                | Self::BaseGoerli
                | Self::BscTestnet
                | Self::Goerli
                | Self::OptimismGoerli
                | Self::Mumbai
                | Self::Sepolia
                | Self::Soldev
                | Self::ZoraTestnet
        )
    }
}

impl FromStr for Chain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arbitrum" => Ok(Self::Arbitrum),
            "arbitrum_goerli" => Ok(Self::ArbitrumGoerli),
            "arbitrum_nova" => Ok(Self::ArbitrumNova),
            "avalanche" => Ok(Self::Avalanche),
            "avalanche_fuji" => Ok(Self::AvalancheFuji),
            "baobab" => Ok(Self::Baobab),
            "base" => Ok(Self::Base),
            "base_goerli" => Ok(Self::BaseGoerli),
            "bsc" => Ok(Self::Bsc),
            "bsctestnet" => Ok(Self::BscTestnet),
            "ethereum" => Ok(Self::Ethereum),
            "goerli" => Ok(Self::Goerli),
            "klaytn" => Ok(Self::Klaytn),
            "matic" => Ok(Self::Matic),
            "mumbai" => Ok(Self::Mumbai),
            "optimism" => Ok(Self::Optimism),
            "optimism_goerli" => Ok(Self::OptimismGoerli),
            "sepolia" => Ok(Self::Sepolia),
            "solana" => Ok(Self::Solana),
            "soldev" => Ok(Self::Soldev),
            "zora" => Ok(Self::Zora),
            "zora_testnet" => Ok(Self::ZoraTestnet),
            other => Err(Error::validation(format!("unknown chain: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trip_should_succeed() {
        for chain in MAINNET_CHAINS.into_iter().chain(TESTNET_CHAINS) {
            let slug = chain.to_string();
            let parsed = slug.parse::<Chain>().expect("slug should parse back");
            assert_eq!(parsed, chain, "round trip failed for {slug}");
        }
    }

    #[test]
    fn bsc_testnet_uses_legacy_slug() {
        assert_eq!(Chain::BscTestnet.to_string(), "bsctestnet");
        assert_eq!(
            "bsctestnet".parse::<Chain>().expect("should parse"),
            Chain::BscTestnet
        );
    }

    #[test]
    fn unknown_slug_should_fail() {
        let err = "dogechain".parse::<Chain>().expect_err("must not parse");
        assert_eq!(err.kind(), crate::error::Kind::Validation);
    }

    #[test]
    fn ids_match_network_registry() {
        assert_eq!(Chain::Ethereum.id(), 1);
        assert_eq!(Chain::Matic.id(), 137);
        assert_eq!(Chain::Sepolia.id(), 11_155_111);
        assert_eq!(Chain::Solana.id(), -1);
    }

    #[test]
    fn testnet_split_is_consistent() {
        assert!(MAINNET_CHAINS.iter().all(|c| !c.is_testnet()));
        assert!(TESTNET_CHAINS.iter().all(|c| c.is_testnet()));
    }

    #[test]
    fn serde_uses_slugs() {
        let json = serde_json::to_string(&Chain::BscTestnet).expect("serialize");
        assert_eq!(json, "\"bsctestnet\"");

        let chain: Chain = serde_json::from_str("\"arbitrum_nova\"").expect("deserialize");
        assert_eq!(chain, Chain::ArbitrumNova);
    }
}
