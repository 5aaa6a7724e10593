pub(crate) mod relay_information1;
pub use relay_information1::{
    EffectiveLimitation, FeeV1, RelayFeesV1, RelayInformationV1, RelayLimitationV1,
};
