use crate::types::{nip_links, MilliSatoshi, NipLink, PublicKeyHex, UncheckedUrl, Url};
use crate::{Error, NIP_REGISTRY_BASE};
use serde::de::{DeserializeOwned, Deserializer, Error as DeError, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::{event, Level};

/// Relay limitations
///
/// Every limit is optional. The `*_or_default` accessors and [`RelayLimitationV1::effective`]
/// treat an absent limit as zero and an absent flag as false.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RelayLimitationV1 {
    /// max message length
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub max_message_length: Option<usize>,

    /// max subscriptions
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub max_subscriptions: Option<usize>,

    /// max filters
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub max_filters: Option<usize>,

    /// max limit
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub max_limit: Option<usize>,

    /// max subid length
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub max_subid_length: Option<usize>,

    /// min prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub min_prefix: Option<usize>,

    /// max event tags
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub max_event_tags: Option<usize>,

    /// max content length
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub max_content_length: Option<usize>,

    /// min pow difficulty
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub min_pow_difficulty: Option<usize>,

    /// auth required
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub auth_required: Option<bool>,

    /// payment required
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub payment_required: Option<bool>,

    /// restricted writes
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub restricted_writes: Option<bool>,
}

/// Relay limitations with absent values filled in as zero or false
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EffectiveLimitation {
    /// max message length
    pub max_message_length: usize,
    /// max subscriptions
    pub max_subscriptions: usize,
    /// max filters
    pub max_filters: usize,
    /// max limit
    pub max_limit: usize,
    /// max subid length
    pub max_subid_length: usize,
    /// min prefix
    pub min_prefix: usize,
    /// max event tags
    pub max_event_tags: usize,
    /// max content length
    pub max_content_length: usize,
    /// min pow difficulty
    pub min_pow_difficulty: usize,
    /// auth required
    pub auth_required: bool,
    /// payment required
    pub payment_required: bool,
    /// restricted writes
    pub restricted_writes: bool,
}

impl RelayLimitationV1 {
    /// max message length, 0 if not declared
    pub fn max_message_length_or_default(&self) -> usize {
        self.max_message_length.unwrap_or_default()
    }

    /// max subscriptions, 0 if not declared
    pub fn max_subscriptions_or_default(&self) -> usize {
        self.max_subscriptions.unwrap_or_default()
    }

    /// max filters, 0 if not declared
    pub fn max_filters_or_default(&self) -> usize {
        self.max_filters.unwrap_or_default()
    }

    /// max subid length, 0 if not declared
    pub fn max_subid_length_or_default(&self) -> usize {
        self.max_subid_length.unwrap_or_default()
    }

    /// min prefix, 0 if not declared
    pub fn min_prefix_or_default(&self) -> usize {
        self.min_prefix.unwrap_or_default()
    }

    /// max event tags, 0 if not declared
    pub fn max_event_tags_or_default(&self) -> usize {
        self.max_event_tags.unwrap_or_default()
    }

    /// max content length, 0 if not declared
    pub fn max_content_length_or_default(&self) -> usize {
        self.max_content_length.unwrap_or_default()
    }

    /// min pow difficulty, 0 if not declared
    pub fn min_pow_difficulty_or_default(&self) -> usize {
        self.min_pow_difficulty.unwrap_or_default()
    }

    /// auth required, false if not declared
    pub fn auth_required_or_default(&self) -> bool {
        self.auth_required.unwrap_or_default()
    }

    /// payment required, false if not declared
    pub fn payment_required_or_default(&self) -> bool {
        self.payment_required.unwrap_or_default()
    }

    /// All limits, with anything not declared as zero or false
    pub fn effective(&self) -> EffectiveLimitation {
        EffectiveLimitation {
            max_message_length: self.max_message_length_or_default(),
            max_subscriptions: self.max_subscriptions_or_default(),
            max_filters: self.max_filters_or_default(),
            max_limit: self.max_limit.unwrap_or_default(),
            max_subid_length: self.max_subid_length_or_default(),
            min_prefix: self.min_prefix_or_default(),
            max_event_tags: self.max_event_tags_or_default(),
            max_content_length: self.max_content_length_or_default(),
            min_pow_difficulty: self.min_pow_difficulty_or_default(),
            auth_required: self.auth_required_or_default(),
            payment_required: self.payment_required_or_default(),
            restricted_writes: self.restricted_writes.unwrap_or_default(),
        }
    }
}

impl fmt::Display for RelayLimitationV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Relay Limitation:")?;
        if let Some(mml) = &self.max_message_length {
            write!(f, " MaxMessageLength=\"{mml}\"")?;
        }
        if let Some(ms) = &self.max_subscriptions {
            write!(f, " MaxSubscriptions=\"{ms}\"")?;
        }
        if let Some(mf) = &self.max_filters {
            write!(f, " MaxFilters=\"{mf}\"")?;
        }
        if let Some(ml) = &self.max_limit {
            write!(f, " MaxLimit=\"{ml}\"")?;
        }
        if let Some(msil) = &self.max_subid_length {
            write!(f, " MaxSubidLength=\"{msil}\"")?;
        }
        if let Some(mp) = &self.min_prefix {
            write!(f, " MinPrefix=\"{mp}\"")?;
        }
        if let Some(met) = &self.max_event_tags {
            write!(f, " MaxEventTags=\"{met}\"")?;
        }
        if let Some(mcl) = &self.max_content_length {
            write!(f, " MaxContentLength=\"{mcl}\"")?;
        }
        if let Some(mpd) = &self.min_pow_difficulty {
            write!(f, " MinPowDifficulty=\"{mpd}\"")?;
        }
        if let Some(ar) = &self.auth_required {
            write!(f, " AuthRequired=\"{ar}\"")?;
        }
        if let Some(pr) = &self.payment_required {
            write!(f, " PaymentRequired=\"{pr}\"")?;
        }
        if let Some(rw) = &self.restricted_writes {
            write!(f, " RestrictedWrites=\"{rw}\"")?;
        }
        Ok(())
    }
}

/// Fee
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FeeV1 {
    /// Amount of the fee, in millisatoshi
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub amount: Option<MilliSatoshi>,

    /// Unit of the amount as the relay wrote it (normally "msats")
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub unit: Option<String>,

    /// Kinds of events the fee applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub kinds: Option<Vec<u32>>,

    /// Period purchase lasts for, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub period: Option<u64>,
}

impl FeeV1 {
    /// The fee in whole sats. A fee without an amount counts as zero.
    pub fn sats(&self) -> u64 {
        self.amount.unwrap_or_default().to_sats()
    }

    /// The fee as display text, e.g. `5 sats`
    pub fn label(&self) -> String {
        format!("{} sats", self.sats())
    }
}

impl fmt::Display for FeeV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fee=[{}", self.amount.unwrap_or_default())?;
        if let Some(unit) = &self.unit {
            write!(f, " {}", unit)?;
        }
        if let Some(kinds) = &self.kinds {
            write!(f, " Kinds=\"{:?}\"", kinds)?;
        }
        if let Some(period) = &self.period {
            write!(f, " Period=\"{}\"", period)?;
        }
        write!(f, "]")
    }
}

/// Relay fees
///
/// A `null` entry in any of the lists is kept as a fee with nothing declared, so
/// it shows as zero.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "RawRelayFees")]
pub struct RelayFeesV1 {
    /// Admission fee (read and write)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub admission: Option<Vec<FeeV1>>,

    /// Subscription fee (read)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub subscription: Option<Vec<FeeV1>>,

    /// Publication fee (write)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub publication: Option<Vec<FeeV1>>,
}

// The wire form of the fees object, where list entries may be null
#[derive(Deserialize)]
struct RawRelayFees {
    #[serde(default)]
    admission: Option<Vec<Option<FeeV1>>>,

    #[serde(default)]
    subscription: Option<Vec<Option<FeeV1>>>,

    #[serde(default)]
    publication: Option<Vec<Option<FeeV1>>>,
}

fn fill_null_fees(fees: Option<Vec<Option<FeeV1>>>) -> Option<Vec<FeeV1>> {
    fees.map(|list| list.into_iter().map(Option::unwrap_or_default).collect())
}

impl From<RawRelayFees> for RelayFeesV1 {
    fn from(raw: RawRelayFees) -> RelayFeesV1 {
        RelayFeesV1 {
            admission: fill_null_fees(raw.admission),
            subscription: fill_null_fees(raw.subscription),
            publication: fill_null_fees(raw.publication),
        }
    }
}

impl fmt::Display for RelayFeesV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Relay Fees:")?;
        write!(f, " Admission=[")?;
        for fee in self.admission.iter().flatten() {
            write!(f, "{} ", fee)?;
        }
        write!(f, "],Subscription=[")?;
        for fee in self.subscription.iter().flatten() {
            write!(f, "{} ", fee)?;
        }
        write!(f, "],Publication=[")?;
        for fee in self.publication.iter().flatten() {
            write!(f, "{} ", fee)?;
        }
        write!(f, "]")
    }
}

/// Relay information document as described in NIP-11, supplied by a relay
///
/// Every field is optional, and a relay that declares nothing at all (`{}`) is
/// perfectly valid. A JSON `null` is read the same as a missing field. A field that
/// is present but of the wrong type makes the whole document fail to parse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelayInformationV1 {
    /// Name of the relay
    pub name: Option<String>,

    /// Description of the relay in plain text
    pub description: Option<String>,

    /// Public key of an administrative contact of the relay, as declared.
    /// See [`RelayInformationV1::owner`] for the checked form.
    pub pubkey: Option<String>,

    /// An administrative contact for the relay, often an email address
    pub contact: Option<String>,

    /// A list of NIPs supported by the relay
    pub supported_nips: Option<Vec<u32>>,

    /// Non-numeric NIP identifiers supported by the relay
    pub supported_nip_extensions: Option<Vec<String>>,

    /// The software running the relay
    pub software: Option<String>,

    /// The software version
    pub version: Option<String>,

    /// limitation
    pub limitation: Option<RelayLimitationV1>,

    /// content limitation: relay countries
    pub relay_countries: Option<Vec<String>>,

    /// community preferences: language tags
    pub language_tags: Option<Vec<String>>,

    /// community preferences: tags
    pub tags: Option<Vec<String>>,

    /// community preferences: posting policy
    pub posting_policy: Option<UncheckedUrl>,

    /// payments_url
    pub payments_url: Option<UncheckedUrl>,

    /// fees
    pub fees: Option<RelayFeesV1>,

    /// Additional fields not modeled here
    pub other: Map<String, Value>,
}

impl RelayInformationV1 {
    /// Parse a relay information document from its JSON text
    pub fn from_json(json: &str) -> Result<RelayInformationV1, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// If the relay supports the queried `nip`
    pub fn supports_nip(&self, nip: u32) -> bool {
        self.supported_nips
            .as_ref()
            .map(|nips| nips.contains(&nip))
            .unwrap_or(false)
    }

    /// The declared software, usable as a link (a leading `git+` is removed)
    pub fn software_url(&self) -> Option<&str> {
        self.software
            .as_deref()
            .map(|s| s.strip_prefix("git+").unwrap_or(s))
    }

    /// The relay operator's public key, if one was declared and it is well formed
    pub fn owner(&self) -> Option<PublicKeyHex> {
        let pubkey = self.pubkey.as_deref()?;
        match PublicKeyHex::try_from_str(pubkey) {
            Ok(pkh) => Some(pkh),
            Err(e) => {
                event!(Level::DEBUG, "ignoring relay owner pubkey: {e}");
                None
            }
        }
    }

    /// The posting policy URL, if declared and usable as an http(s) link
    pub fn checked_posting_policy(&self) -> Option<Url> {
        self.posting_policy.as_ref()?.to_http_url().ok()
    }

    /// The payments URL, if declared and usable as an http(s) link
    pub fn checked_payments_url(&self) -> Option<Url> {
        self.payments_url.as_ref()?.to_http_url().ok()
    }

    /// Admission fees as display text, in the order the relay listed them
    pub fn admission_fee_labels(&self) -> Vec<String> {
        self.fees
            .iter()
            .flat_map(|fees| fees.admission.iter().flatten())
            .map(|fee| fee.label())
            .collect()
    }

    /// Links for the supported NIPs into the public NIP registry
    pub fn nip_links(&self) -> Vec<NipLink> {
        nip_links(self, NIP_REGISTRY_BASE)
    }

    #[allow(dead_code)]
    pub(crate) fn mock() -> RelayInformationV1 {
        let mut m = Map::new();
        let _ = m.insert(
            "icon".to_string(),
            Value::String("https://example.com/icon.png".to_owned()),
        );
        RelayInformationV1 {
            name: Some("Crazy Horse".to_string()),
            description: Some("A really wild horse".to_string()),
            pubkey: Some(PublicKeyHex::mock().into_string()),
            contact: Some("mailto:admin@example.com".to_owned()),
            supported_nips: Some(vec![1, 11, 12, 13, 14]),
            supported_nip_extensions: Some(vec!["7D".to_owned()]),
            software: Some("git+https://github.com/example/relay.git".to_owned()),
            version: Some("1.2.3".to_owned()),
            limitation: Some(RelayLimitationV1 {
                max_message_length: Some(16384),
                max_subscriptions: Some(20),
                max_filters: Some(100),
                max_limit: Some(5000),
                max_subid_length: Some(100),
                min_prefix: Some(4),
                max_event_tags: Some(100),
                max_content_length: Some(8196),
                min_pow_difficulty: Some(30),
                auth_required: Some(true),
                payment_required: Some(true),
                restricted_writes: None,
            }),
            relay_countries: Some(vec!["CA".to_owned(), "US".to_owned()]),
            language_tags: Some(vec!["en".to_owned()]),
            tags: Some(vec!["sfw-only".to_owned(), "bitcoin-only".to_owned()]),
            posting_policy: Some(UncheckedUrl::from_str(
                "https://example.com/posting-policy.html",
            )),
            payments_url: Some(UncheckedUrl::mock()),
            fees: Some(RelayFeesV1 {
                admission: Some(vec![FeeV1 {
                    amount: Some(MilliSatoshi(1000000)),
                    unit: Some("msats".to_owned()),
                    kinds: None,
                    period: None,
                }]),
                subscription: Some(vec![FeeV1 {
                    amount: Some(MilliSatoshi(5000000)),
                    unit: Some("msats".to_owned()),
                    kinds: None,
                    period: Some(2592000),
                }]),
                publication: Some(vec![FeeV1 {
                    amount: Some(MilliSatoshi(100)),
                    unit: Some("msats".to_owned()),
                    kinds: Some(vec![4]),
                    period: None,
                }]),
            }),
            other: m,
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, label: &str, list: &Option<Vec<String>>) -> fmt::Result {
    if let Some(list) = list {
        write!(f, " {label}=[")?;
        for item in list {
            write!(f, "{item},")?;
        }
        write!(f, "]")?;
    }
    Ok(())
}

impl fmt::Display for RelayInformationV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Relay Information:")?;
        if let Some(name) = &self.name {
            write!(f, " Name=\"{name}\"")?;
        }
        if let Some(desc) = &self.description {
            write!(f, " Description=\"{desc}\"")?;
        }
        if let Some(pubkey) = &self.pubkey {
            write!(f, " Pubkey=\"{pubkey}\"")?;
        }
        if let Some(contact) = &self.contact {
            write!(f, " Contact=\"{contact}\"")?;
        }
        if let Some(nips) = &self.supported_nips {
            write!(f, " NIPS={:?}", nips)?;
        }
        if let Some(exts) = &self.supported_nip_extensions {
            write!(f, " NipExtensions={:?}", exts)?;
        }
        if let Some(software) = &self.software {
            write!(f, " Software=\"{software}\"")?;
        }
        if let Some(version) = &self.version {
            write!(f, " Version=\"{version}\"")?;
        }
        if let Some(limitation) = &self.limitation {
            write!(f, " Limitation=\"{limitation}\"")?;
        }
        write_list(f, "Countries", &self.relay_countries)?;
        write_list(f, "Languages", &self.language_tags)?;
        write_list(f, "Tags", &self.tags)?;
        if let Some(policy_url) = &self.posting_policy {
            write!(f, " PostingPolicy={policy_url}")?;
        }
        if let Some(url) = &self.payments_url {
            write!(f, " PaymentsUrl={url}")?;
        }
        if let Some(fees) = &self.fees {
            write!(f, " Fees={fees}")?;
        }
        for (k, v) in self.other.iter() {
            write!(f, " {k}=\"{v}\"")?;
        }
        Ok(())
    }
}

impl Serialize for RelayInformationV1 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        if let Some(description) = &self.description {
            map.serialize_entry("description", description)?;
        }
        if let Some(pubkey) = &self.pubkey {
            map.serialize_entry("pubkey", pubkey)?;
        }
        if let Some(contact) = &self.contact {
            map.serialize_entry("contact", contact)?;
        }
        if let Some(nips) = &self.supported_nips {
            map.serialize_entry("supported_nips", nips)?;
        }
        if let Some(exts) = &self.supported_nip_extensions {
            map.serialize_entry("supported_nip_extensions", exts)?;
        }
        if let Some(software) = &self.software {
            map.serialize_entry("software", software)?;
        }
        if let Some(version) = &self.version {
            map.serialize_entry("version", version)?;
        }
        if let Some(limitation) = &self.limitation {
            map.serialize_entry("limitation", limitation)?;
        }
        if let Some(countries) = &self.relay_countries {
            map.serialize_entry("relay_countries", countries)?;
        }
        if let Some(languages) = &self.language_tags {
            map.serialize_entry("language_tags", languages)?;
        }
        if let Some(tags) = &self.tags {
            map.serialize_entry("tags", tags)?;
        }
        if let Some(policy) = &self.posting_policy {
            map.serialize_entry("posting_policy", policy)?;
        }
        if let Some(url) = &self.payments_url {
            map.serialize_entry("payments_url", url)?;
        }
        if let Some(fees) = &self.fees {
            map.serialize_entry("fees", fees)?;
        }
        for (k, v) in &self.other {
            map.serialize_entry(&k, &v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RelayInformationV1 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RidVisitor)
    }
}

// Remove `key` from the map and decode it. Missing and null are both absent;
// anything else must decode as `T`.
fn take_field<T, E>(map: &mut Map<String, Value>, key: &str) -> Result<Option<T>, E>
where
    T: DeserializeOwned,
    E: DeError,
{
    match map.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => serde_json::from_value::<T>(v)
            .map(Some)
            .map_err(|e| E::custom(format!("field `{key}`: {e}"))),
    }
}

struct RidVisitor;

impl<'de> Visitor<'de> for RidVisitor {
    type Value = RelayInformationV1;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A JSON object")
    }

    fn visit_map<M>(self, mut access: M) -> Result<RelayInformationV1, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut map: Map<String, Value> = Map::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            if map.contains_key(&key) {
                return Err(M::Error::custom(format!("duplicate field `{key}`")));
            }
            let _ = map.insert(key, value);
        }

        let rid = RelayInformationV1 {
            name: take_field(&mut map, "name")?,
            description: take_field(&mut map, "description")?,
            pubkey: take_field(&mut map, "pubkey")?,
            contact: take_field(&mut map, "contact")?,
            supported_nips: take_field(&mut map, "supported_nips")?,
            supported_nip_extensions: take_field(&mut map, "supported_nip_extensions")?,
            software: take_field(&mut map, "software")?,
            version: take_field(&mut map, "version")?,
            limitation: take_field(&mut map, "limitation")?,
            relay_countries: take_field(&mut map, "relay_countries")?,
            language_tags: take_field(&mut map, "language_tags")?,
            tags: take_field(&mut map, "tags")?,
            posting_policy: take_field(&mut map, "posting_policy")?,
            payments_url: take_field(&mut map, "payments_url")?,
            fees: take_field(&mut map, "fees")?,
            other: map,
        };

        Ok(rid)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    test_serde! {RelayInformationV1, test_relay_information_serde}

    #[test]
    fn test_name_only() {
        let rid = RelayInformationV1::from_json(r#"{"name":"Test"}"#).unwrap();
        assert_eq!(rid.name.as_deref(), Some("Test"));
        assert_eq!(
            rid,
            RelayInformationV1 {
                name: Some("Test".to_owned()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_empty_object() {
        let rid = RelayInformationV1::from_json("{}").unwrap();
        assert_eq!(rid, RelayInformationV1::default());
        assert!(rid.nip_links().is_empty());
        assert!(rid.admission_fee_labels().is_empty());
        assert_eq!(rid.owner(), None);
        assert_eq!(rid.software_url(), None);
    }

    #[test]
    fn test_nulls_are_absent() {
        let rid = RelayInformationV1::from_json(
            r#"{"name": null, "description": null, "supported_nips": null, "limitation": null, "fees": {"admission": null}}"#,
        )
        .unwrap();
        assert_eq!(rid.name, None);
        assert_eq!(rid.supported_nips, None);
        assert_eq!(rid.limitation, None);
        assert_eq!(rid.fees, Some(RelayFeesV1::default()));

        let rid = RelayInformationV1::from_json(
            r#"{"fees":{"admission":[null,{"amount":5000}],"publication":[null]}}"#,
        )
        .unwrap();
        assert_eq!(rid.admission_fee_labels(), vec!["0 sats", "5 sats"]);
        assert_eq!(
            rid.fees.unwrap().publication,
            Some(vec![FeeV1::default()])
        );
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        for json in [
            r#"{"name": 5}"#,
            r#"{"supported_nips": ["1", "11"]}"#,
            r#"{"supported_nips": [1, -2]}"#,
            r#"{"supported_nip_extensions": [7]}"#,
            r#"{"limitation": {"max_message_length": "big"}}"#,
            r#"{"limitation": {"auth_required": "yes"}}"#,
            r#"{"fees": {"admission": [{"amount": "5000"}]}}"#,
            r#"{"relay_countries": "CA"}"#,
            r#"{"payments_url": 12}"#,
            r#"{"name": 5, "name": "a"}"#,
            r#"{"name": "a", "name": "b"}"#,
            r#"{"myfield": 1, "myfield": 2}"#,
            r#"{"limitation": {"max_filters": 1, "max_filters": 2}}"#,
            r#"[]"#,
            r#""just a string""#,
            "not json at all",
            "",
        ] {
            assert!(
                RelayInformationV1::from_json(json).is_err(),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_full_document() {
        let json = r##"{
  "name": "JellyFish",
  "description": "Stay Immortal!",
  "pubkey": "bf2bee5281149c7c350f5d12ae32f514c7864ff10805182f4178538c2c421007",
  "contact": "hi@dezh.tech",
  "supported_nips": [1, 9, 11, 13, 17, 40, 42, 59, 62, 70],
  "supported_nip_extensions": ["7D"],
  "software": "git+https://github.com/dezh-tech/immortal.git",
  "version": "immortal - 0.0.9",
  "relay_countries": ["*"],
  "language_tags": ["*"],
  "tags": [],
  "posting_policy": "https://jellyfish.land/tos.txt",
  "payments_url": "https://www.jellyfish.land/relay",
  "icon": "https://image.nostr.build/2547e9ec4b23589e09bc7071e0806a7ea7b7ba7b6e7e8ec2e5b8a5d8d0c5f1e0.jpg",
  "limitation": {
    "auth_required": false,
    "max_message_length": 70000,
    "max_event_tags": 2000,
    "max_subscriptions": 350,
    "restricted_writes": true,
    "payment_required": true,
    "created_at_lower_limit": 94608000
  },
  "fees": {
    "subscription": [
      { "amount": 3000000, "unit": "msats", "period": 2628003 },
      { "amount": 8000000, "unit": "msats", "period": 7884009 }
    ],
    "admission": [ { "amount": 5000 }, { "unit": "msats" } ]
  }
}"##;
        let rid = RelayInformationV1::from_json(json).unwrap();
        assert_eq!(rid.name.as_deref(), Some("JellyFish"));
        assert!(rid.supports_nip(42));
        assert!(!rid.supports_nip(2));
        assert_eq!(
            rid.software_url(),
            Some("https://github.com/dezh-tech/immortal.git")
        );
        assert_eq!(
            rid.owner().map(|pk| pk.into_string()),
            Some("bf2bee5281149c7c350f5d12ae32f514c7864ff10805182f4178538c2c421007".to_owned())
        );
        assert_eq!(rid.tags, Some(vec![]));
        assert_eq!(rid.admission_fee_labels(), vec!["5 sats", "0 sats"]);

        let limitation = rid.limitation.unwrap();
        assert_eq!(limitation.max_message_length_or_default(), 70000);
        assert_eq!(limitation.max_filters_or_default(), 0);
        assert_eq!(limitation.min_pow_difficulty_or_default(), 0);
        assert!(!limitation.auth_required_or_default());
        assert!(limitation.payment_required_or_default());
        assert!(limitation.effective().restricted_writes);

        let fees = rid.fees.as_ref().unwrap();
        let subscription = fees.subscription.as_ref().unwrap();
        assert_eq!(subscription.len(), 2);
        assert_eq!(subscription[1].sats(), 8000);
        assert_eq!(fees.publication, None);

        assert_eq!(
            rid.checked_posting_policy().map(|u| u.as_str().to_owned()),
            Some("https://jellyfish.land/tos.txt".to_owned())
        );
        assert!(rid.other.contains_key("icon"));

        let labels: Vec<String> = rid.nip_links().into_iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec!["01", "09", "11", "13", "17", "40", "42", "59", "62", "70", "7D"]
        );
    }

    #[test]
    fn test_fee_label() {
        let fee = FeeV1 {
            amount: Some(MilliSatoshi(5000)),
            ..Default::default()
        };
        assert_eq!(fee.label(), "5 sats");
        assert_eq!(FeeV1::default().label(), "0 sats");
    }

    #[test]
    fn test_effective_limitation_defaults() {
        let limitation: RelayLimitationV1 = serde_json::from_str("{}").unwrap();
        assert_eq!(limitation.effective(), EffectiveLimitation::default());
    }

    #[test]
    fn test_owner_is_checked() {
        let rid = RelayInformationV1 {
            pubkey: Some("npub-not-hex".to_owned()),
            ..Default::default()
        };
        assert_eq!(rid.owner(), None);
    }

    #[test]
    fn test_unchecked_urls() {
        let rid = RelayInformationV1::from_json(
            r#"{"payments_url": "ftp://example.com/pay", "posting_policy": "https://example.com/p"}"#,
        )
        .unwrap();
        assert!(rid.payments_url.is_some());
        assert_eq!(rid.checked_payments_url(), None);
        assert!(rid.checked_posting_policy().is_some());
    }

    #[test]
    fn test_to_json_keeps_other_fields() {
        let json = r##"{ "name": "A Relay", "description": null, "myfield": [1,2], "supported_nips": [11,12] }"##;
        let rid = RelayInformationV1::from_json(json).unwrap();
        let json2 = serde_json::to_string(&rid).unwrap();
        let expected_json2 = r##"{"name":"A Relay","supported_nips":[11,12],"myfield":[1,2]}"##;
        assert_eq!(json2, expected_json2);
    }

    #[test]
    fn test_display() {
        let rid = RelayInformationV1::mock();
        let s = format!("{}", rid);
        assert!(s.starts_with("Relay Information: Name=\"Crazy Horse\""));
        assert!(s.contains("Countries=[CA,US,]"));
    }
}
