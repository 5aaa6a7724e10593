use crate::Error;
use derive_more::{AsRef, Deref, Display, Into};
use serde::{Deserialize, Serialize};

/// The hex form of a public key, which identifies an actor (usually a person)
///
/// A relay declares its operator with one of these. This crate only checks its
/// shape; looking up whoever it belongs to is left to the caller.
#[derive(AsRef, Clone, Debug, Deref, Display, Eq, Hash, Into, PartialEq, Serialize)]
pub struct PublicKeyHex(String);

impl PublicKeyHex {
    // Mock data for testing
    #[allow(dead_code)]
    pub(crate) fn mock() -> PublicKeyHex {
        PublicKeyHex("ee11a5dff40c19a555f41fe42b48f00e618c91225622ae37b6c2bb67b76c4e49".to_owned())
    }

    /// Try from &str
    pub fn try_from_str(s: &str) -> Result<PublicKeyHex, Error> {
        Self::try_from_string(s.to_owned())
    }

    /// Try from String
    ///
    /// Upper case hex is accepted and normalized to lower case.
    pub fn try_from_string(s: String) -> Result<PublicKeyHex, Error> {
        if s.len() != 64 {
            return Err(Error::InvalidPublicKey);
        }
        let vec: Vec<u8> = hex::decode(&s)?;
        if vec.len() != 32 {
            return Err(Error::InvalidPublicKey);
        }
        Ok(PublicKeyHex(hex::encode(vec)))
    }

    /// As &str
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Into String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for PublicKeyHex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PublicKeyHex::try_from_string(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    test_serde! {PublicKeyHex, test_public_key_hex_serde}

    #[test]
    fn test_public_key_hex_validation() {
        let pk = PublicKeyHex::try_from_str(
            "EE11A5DFF40C19A555F41FE42B48F00E618C91225622AE37B6C2BB67B76C4E49",
        )
        .unwrap();
        assert_eq!(pk, PublicKeyHex::mock());

        assert!(matches!(
            PublicKeyHex::try_from_str("ee11a5"),
            Err(Error::InvalidPublicKey)
        ));
        assert!(matches!(
            PublicKeyHex::try_from_str(
                "zz11a5dff40c19a555f41fe42b48f00e618c91225622ae37b6c2bb67b76c4e49"
            ),
            Err(Error::HexDecode(_))
        ));
    }
}
