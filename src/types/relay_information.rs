use crate::versioned::relay_information1::{
    FeeV1, RelayFeesV1, RelayInformationV1, RelayLimitationV1,
};

/// Relay limitations
pub type RelayLimitation = RelayLimitationV1;

/// Fee
pub type Fee = FeeV1;

/// Relay fees
pub type RelayFees = RelayFeesV1;

/// Relay information document as described in NIP-11, supplied by a relay
pub type RelayInformation = RelayInformationV1;
