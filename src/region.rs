use std::fmt;
use std::str::FromStr;

use crate::error::RiotApiError;

/// Platform routing values (Summoner-v4, League-v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    // europe
    EUW1,
    EUN1,
    TR1,
    RU,
    // asia
    KR,
    JP1,
    // americas
    BR1,
    LA1,
    LA2,
    OC1,
    NA1,
}

impl Region {
    pub const ALL: [Region; 11] = [
        Self::EUW1,
        Self::EUN1,
        Self::TR1,
        Self::RU,
        Self::KR,
        Self::JP1,
        Self::BR1,
        Self::LA1,
        Self::LA2,
        Self::OC1,
        Self::NA1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EUW1 => "euw1",
            Self::EUN1 => "eun1",
            Self::TR1 => "tr1",
            Self::RU => "ru",
            Self::KR => "kr",
            Self::JP1 => "jp1",
            Self::BR1 => "br1",
            Self::LA1 => "la1",
            Self::LA2 => "la2",
            Self::OC1 => "oc1",
            Self::NA1 => "na1",
        }
    }

    /// Routing cluster serving the account and match endpoints of this platform.
    pub fn routing_cluster(self) -> RoutingCluster {
        match self {
            Self::BR1 | Self::LA1 | Self::LA2 | Self::OC1 | Self::NA1 => RoutingCluster::Americas,
            Self::KR | Self::JP1 => RoutingCluster::Asia,
            Self::EUN1 | Self::EUW1 | Self::TR1 | Self::RU => RoutingCluster::Europe,
        }
    }
}

impl FromStr for Region {
    type Err = RiotApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euw1" => Ok(Self::EUW1),
            "eun1" => Ok(Self::EUN1),
            "tr1" => Ok(Self::TR1),
            "ru" => Ok(Self::RU),
            "kr" => Ok(Self::KR),
            "jp1" => Ok(Self::JP1),
            "br1" => Ok(Self::BR1),
            "la1" => Ok(Self::LA1),
            "la2" => Ok(Self::LA2),
            "oc1" => Ok(Self::OC1),
            "na1" => Ok(Self::NA1),
            _ => Err(RiotApiError::UnknownRegion(s.to_string())),
        }
    }
}

impl TryFrom<String> for Region {
    type Error = RiotApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regional routing values (Match-v5 and account scoped endpoints).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingCluster {
    Americas,
    Asia,
    Europe,
}

impl RoutingCluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
        }
    }
}

impl fmt::Display for RoutingCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
