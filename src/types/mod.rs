mod nip_link;
pub use nip_link::{nip_links, pad_nip_id, NipLink, NIP_REGISTRY_BASE};

mod public_key;
pub use public_key::PublicKeyHex;

mod relay_information;
pub use relay_information::{Fee, RelayFees, RelayInformation, RelayLimitation};

mod satoshi;
pub use satoshi::MilliSatoshi;

mod url;
pub use self::url::{UncheckedUrl, Url};

pub use crate::versioned::EffectiveLimitation;
