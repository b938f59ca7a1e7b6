// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the codec, the transports and the client.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StarterKitError;

/// A 20-byte account or contract address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; 20]);

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = StarterKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_hex_prefix(s.trim());
        if digits.len() != 40 {
            return Err(StarterKitError::MalformedInput(format!(
                "address `{s}` must be 20 bytes (40 hex digits)"
            )));
        }
        let mut out = [0u8; 20];
        hex::decode_to_slice(digits, &mut out).map_err(|e| {
            StarterKitError::MalformedInput(format!("address `{s}` is not valid hex: {e}"))
        })?;
        Ok(Address(out))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Opaque reference to a versionable website instance.
///
/// Owned by the platform; the client only passes it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebsiteHandle(pub Address);

impl fmt::Display for WebsiteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for WebsiteHandle {
    type Err = StarterKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(WebsiteHandle)
    }
}

/// Weak reference to another plugin, resolved by the host registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginRef(pub Address);

impl fmt::Display for PluginRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Index of one version of a website's content tree.
///
/// On chain this is a `uint256`. Indices beyond `u64::MAX` parse to
/// [`StarterKitError::NotFound`] rather than `MalformedInput`, since no
/// website can hold that many versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionIndex(pub u64);

impl VersionIndex {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for VersionIndex {
    fn from(value: u64) -> Self {
        VersionIndex(value)
    }
}

impl fmt::Display for VersionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for VersionIndex {
    type Err = StarterKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('-') {
            return Err(StarterKitError::MalformedInput(format!(
                "version index must not be negative, got `{s}`"
            )));
        }
        if trimmed.contains(['.', 'e', 'E']) && trimmed.parse::<f64>().is_ok() {
            return Err(StarterKitError::MalformedInput(format!(
                "version index must be an integer, got `{s}`"
            )));
        }
        match trimmed.parse::<u64>() {
            Ok(index) => Ok(VersionIndex(index)),
            Err(_) if fits_uint256(trimmed) => Err(StarterKitError::NotFound {
                reason: format!("version index {trimmed} exceeds any website's version count"),
            }),
            Err(e) => Err(StarterKitError::MalformedInput(format!(
                "invalid version index `{s}`: {e}"
            ))),
        }
    }
}

/// Decimal digits of `2^256 - 1`.
const UINT256_MAX: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639935";

/// Whether `digits` is a decimal `uint256`. Such an index is well formed on
/// the wire; one past `u64::MAX` can never name a stored version.
fn fits_uint256(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let significant = digits.trim_start_matches('0');
    significant.len() < UINT256_MAX.len()
        || (significant.len() == UINT256_MAX.len() && significant <= UINT256_MAX)
}

/// A 4-byte interface identifier as used by `supportsInterface(bytes4)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceId(pub [u8; 4]);

impl InterfaceId {
    /// Identifier of the introspection interface itself (ERC-165).
    pub const IERC165: InterfaceId = InterfaceId([0x01, 0xff, 0xc9, 0xa7]);

    /// Derives an interface id as the XOR of the selectors of its functions.
    pub fn from_selectors<I>(selectors: I) -> Self
    where
        I: IntoIterator<Item = [u8; 4]>,
    {
        let mut id = [0u8; 4];
        for selector in selectors {
            for (acc, b) in id.iter_mut().zip(selector) {
                *acc ^= b;
            }
        }
        InterfaceId(id)
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InterfaceId({self})")
    }
}

impl FromStr for InterfaceId {
    type Err = StarterKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_hex_prefix(s.trim());
        if digits.len() != 8 {
            return Err(StarterKitError::MalformedInput(format!(
                "interface id `{s}` must be 4 bytes (8 hex digits)"
            )));
        }
        let mut out = [0u8; 4];
        hex::decode_to_slice(digits, &mut out).map_err(|e| {
            StarterKitError::MalformedInput(format!("interface id `{s}` is not valid hex: {e}"))
        })?;
        Ok(InterfaceId(out))
    }
}

impl Serialize for InterfaceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for InterfaceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The plugin's configuration for one `(website, version)` pair.
///
/// `root_path` is where the static frontend bundle is mounted inside the
/// version's file tree. Segments are opaque and order matters; an empty
/// path means the site root.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(rename = "rootPath")]
    pub root_path: Vec<String>,
}

impl PluginConfig {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root_path: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// True when no root path has been configured.
    pub fn is_site_root(&self) -> bool {
        self.root_path.is_empty()
    }
}

/// Kind of an admin panel descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminPanelType {
    Primary,
    Secondary,
    /// A discriminant this client does not know about yet.
    Unknown(u8),
}

impl From<u8> for AdminPanelType {
    fn from(value: u8) -> Self {
        match value {
            0 => AdminPanelType::Primary,
            1 => AdminPanelType::Secondary,
            other => AdminPanelType::Unknown(other),
        }
    }
}

impl From<AdminPanelType> for u8 {
    fn from(value: AdminPanelType) -> Self {
        match value {
            AdminPanelType::Primary => 0,
            AdminPanelType::Secondary => 1,
            AdminPanelType::Unknown(other) => other,
        }
    }
}

impl fmt::Display for AdminPanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminPanelType::Primary => write!(f, "primary"),
            AdminPanelType::Secondary => write!(f, "secondary"),
            AdminPanelType::Unknown(v) => write!(f, "unknown({v})"),
        }
    }
}

/// An admin panel the plugin contributes to the website admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPanel {
    pub title: String,
    pub url: String,
    /// Plugin whose module renders this panel in the global admin panel.
    pub module_for_global_admin_panel: PluginRef,
    pub panel_type: AdminPanelType,
}

/// Static description of the deployed plugin.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub title: String,
    pub sub_title: String,
    pub author: String,
    pub homepage: String,
    /// Plugins this one requires, in on-chain order. Identifiers only.
    pub dependencies: Vec<PluginRef>,
    pub admin_panels: Vec<AdminPanel>,
}
