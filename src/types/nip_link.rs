use crate::RelayInformation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the NIP documents live. Links are formed as `{base}/{padded-id}.md`
pub const NIP_REGISTRY_BASE: &str = "https://github.com/nostr-protocol/nips/blob/master";

/// Left-pad a NIP identifier with zeroes to at least two characters
///
/// `1` becomes `01`, `11` stays `11`, and longer identifiers such as `7D` or `100`
/// are left alone.
pub fn pad_nip_id(id: &str) -> String {
    format!("{:0>2}", id)
}

/// A supported NIP, as a label and a link into the NIP registry
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct NipLink {
    /// The zero-padded identifier, e.g. `01`
    pub label: String,

    /// The link to the NIP document
    pub url: String,
}

impl NipLink {
    /// Build the link for `id` under the registry at `base`
    pub fn new(id: &str, base: &str) -> NipLink {
        let label = pad_nip_id(id);
        let url = format!("{}/{}.md", base.trim_end_matches('/'), label);
        NipLink { label, url }
    }

    // Mock data for testing
    #[allow(dead_code)]
    pub(crate) fn mock() -> NipLink {
        NipLink::new("11", NIP_REGISTRY_BASE)
    }
}

impl fmt::Display for NipLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NIP-{} <{}>", self.label, self.url)
    }
}

/// Links for every NIP the relay supports: numeric NIPs first, then the
/// extension identifiers, each in the order the relay listed them
pub fn nip_links(rid: &RelayInformation, base: &str) -> Vec<NipLink> {
    let numeric = rid
        .supported_nips
        .iter()
        .flatten()
        .map(|nip| NipLink::new(&nip.to_string(), base));

    let extensions = rid
        .supported_nip_extensions
        .iter()
        .flatten()
        .map(|ext| NipLink::new(ext, base));

    numeric.chain(extensions).collect()
}
