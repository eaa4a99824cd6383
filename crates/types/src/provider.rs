use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cloud or virtualization backend the tool can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderId {
    Aws,
    AwsChina,
    AwsGov,
    Maas,
    Azure,
    AzureChina,
    Google,
    Cloudsigma,
    Joyent,
    Openstack,
    Rackspace,
    Vsphere,
}

impl ProviderId {
    /// Every provider, in the order the configuration UI lists them.
    pub const ALL: [ProviderId; 12] = [
        ProviderId::Aws,
        ProviderId::AwsChina,
        ProviderId::AwsGov,
        ProviderId::Maas,
        ProviderId::Azure,
        ProviderId::AzureChina,
        ProviderId::Google,
        ProviderId::Cloudsigma,
        ProviderId::Joyent,
        ProviderId::Openstack,
        ProviderId::Rackspace,
        ProviderId::Vsphere,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::AwsChina => "aws-china",
            Self::AwsGov => "aws-gov",
            Self::Maas => "maas",
            Self::Azure => "azure",
            Self::AzureChina => "azure-china",
            Self::Google => "google",
            Self::Cloudsigma => "cloudsigma",
            Self::Joyent => "joyent",
            Self::Openstack => "openstack",
            Self::Rackspace => "rackspace",
            Self::Vsphere => "vsphere",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ParseProviderIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseProviderIdError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProviderIdError(pub String);

impl fmt::Display for ParseProviderIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown provider identifier '{}'", self.0)
    }
}

impl Error for ParseProviderIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_identifier_it_prints() {
        for id in ProviderId::ALL {
            assert_eq!(id.as_str().parse::<ProviderId>(), Ok(id));
        }
    }

    #[test]
    fn parsing_is_exact() {
        assert!("AWS".parse::<ProviderId>().is_err());
        assert!(" aws".parse::<ProviderId>().is_err());
        assert_eq!(
            "localhost".parse::<ProviderId>(),
            Err(ParseProviderIdError("localhost".into()))
        );
    }

    #[test]
    fn serde_uses_identifier() {
        let json = serde_json::to_string(&ProviderId::AzureChina).expect("serialize ProviderId");
        assert_eq!(json, "\"azure-china\"");
        let back: ProviderId = serde_json::from_str("\"cloudsigma\"").expect("deserialize ProviderId");
        assert_eq!(back, ProviderId::Cloudsigma);
    }
}
