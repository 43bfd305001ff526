use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// National Zoho API host, selected by top-level domain suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    #[serde(rename = ".com")]
    UnitedStates,
    #[serde(rename = ".eu")]
    EuropeanUnion,
    #[serde(rename = ".in")]
    India,
    #[serde(rename = ".com.au")]
    Australia,
    #[serde(rename = ".com.cn")]
    China,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::UnitedStates,
        Region::EuropeanUnion,
        Region::India,
        Region::Australia,
        Region::China,
    ];

    pub fn tld(&self) -> &'static str {
        match self {
            Region::UnitedStates => ".com",
            Region::EuropeanUnion => ".eu",
            Region::India => ".in",
            Region::Australia => ".com.au",
            Region::China => ".com.cn",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::UnitedStates => "United States of America",
            Region::EuropeanUnion => "European Union",
            Region::India => "India",
            Region::Australia => "Australia",
            Region::China => "China",
        }
    }

    pub fn base_url(&self) -> String {
        format!("https://www.zohoapis{}/bookings/v1/json", self.tld())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tld())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.tld() == s)
            .ok_or_else(|| format!("unknown Zoho region '{}'", s))
    }
}

#[derive(Clone)]
pub struct Config {
    pub region: Region,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            region: env::var("ZOHO_REGION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            request_timeout_secs: env::var("ZOHO_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: Region::default(),
            request_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_maps_to_documented_hosts() {
        assert_eq!(Region::UnitedStates.tld(), ".com");
        assert_eq!(Region::EuropeanUnion.tld(), ".eu");
        assert_eq!(Region::India.tld(), ".in");
        assert_eq!(Region::Australia.tld(), ".com.au");
        assert_eq!(Region::China.tld(), ".com.cn");
    }

    #[test]
    fn base_url_targets_regional_host() {
        assert_eq!(
            Region::Australia.base_url(),
            "https://www.zohoapis.com.au/bookings/v1/json"
        );
        assert_eq!(
            Region::default().base_url(),
            "https://www.zohoapis.com/bookings/v1/json"
        );
    }

    #[test]
    fn region_round_trips_through_tld() {
        for region in Region::ALL {
            assert_eq!(region.tld().parse::<Region>().unwrap(), region);
        }
        assert!(".de".parse::<Region>().is_err());
    }
}
