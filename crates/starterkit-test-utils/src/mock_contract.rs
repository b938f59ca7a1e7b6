// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory StarterKit contract for deterministic testing.
//!
//! `MockStarterKit` implements `ContractTransport` by decoding the calldata
//! it receives with the real ABI codec, executing it against in-memory
//! state and ABI-encoding the answer, so the client under test exercises
//! the same bytes it would send to a node.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use starterkit_abi::contract::{encode_address_output, encode_bool_output, encode_config_output, encode_infos_output};
use starterkit_abi::revert::PANIC_ARRAY_OUT_OF_BOUNDS;
use starterkit_abi::{RevertReason, StarterKitCall};
use starterkit_core::{
    Address, AdminPanel, AdminPanelType, ContractTransport, InterfaceId, PluginConfig,
    PluginInfo, PluginRef, TransportError, VersionIndex, WebsiteHandle,
};
use tokio::sync::Mutex;
use tracing::debug;

/// Revert reason for a website that was never registered.
pub const WEBSITE_NOT_FOUND: &str = "Website not found";

/// Revert reason for a write by someone other than the website owner.
pub const NOT_OWNER: &str = "Unauthorized: caller is not the website owner";

/// Revert reason for a write to a locked website.
pub const LOCKED: &str = "Website is locked";

/// The reserved id ERC-165 contracts must never claim.
const INVALID_INTERFACE: InterfaceId = InterfaceId([0xff; 4]);

#[derive(Debug, Clone)]
struct Website {
    owner: Address,
    versions: u64,
    locked: bool,
}

#[derive(Debug)]
struct ContractState {
    caller: Address,
    websites: HashMap<WebsiteHandle, Website>,
    configs: HashMap<(WebsiteHandle, VersionIndex), PluginConfig>,
    infos: PluginInfo,
    frontend: Address,
    oc_web_admin_plugin: Address,
    static_frontend_plugin: Address,
    interfaces: HashSet<InterfaceId>,
    offline: bool,
    calls: u64,
    writes: u64,
}

impl ContractState {
    /// Checks that the pair exists, reverting the way the deployed
    /// contract does when it does not.
    fn target(&self, website: &WebsiteHandle, version: VersionIndex) -> Result<&Website, TransportError> {
        let site = self
            .websites
            .get(website)
            .ok_or_else(|| revert(RevertReason::encode_message(WEBSITE_NOT_FOUND)))?;
        if version.as_u64() >= site.versions {
            return Err(revert(RevertReason::encode_panic(PANIC_ARRAY_OUT_OF_BOUNDS)));
        }
        Ok(site)
    }

    fn check_write(&self, website: &WebsiteHandle, version: VersionIndex) -> Result<(), TransportError> {
        let site = self.target(website, version)?;
        if site.owner != self.caller {
            return Err(revert(RevertReason::encode_message(NOT_OWNER)));
        }
        if site.locked {
            return Err(revert(RevertReason::encode_message(LOCKED)));
        }
        Ok(())
    }

    fn execute_view(&self, call: &StarterKitCall) -> Result<Vec<u8>, TransportError> {
        let out = match call {
            StarterKitCall::Frontend => encode_address_output(&self.frontend),
            StarterKitCall::OcWebAdminPlugin => encode_address_output(&self.oc_web_admin_plugin),
            StarterKitCall::StaticFrontendPlugin => {
                encode_address_output(&self.static_frontend_plugin)
            }
            StarterKitCall::Infos => encode_infos_output(&self.infos),
            StarterKitCall::GetConfig { website, version } => {
                self.target(website, *version)?;
                let config = self
                    .configs
                    .get(&(*website, *version))
                    .cloned()
                    .unwrap_or_default();
                encode_config_output(&config)
            }
            StarterKitCall::SetConfig {
                website, version, ..
            } => {
                // eth_call of a write: checks run, state is untouched.
                self.check_write(website, *version)?;
                Vec::new()
            }
            StarterKitCall::SupportsInterface(id) => {
                encode_bool_output(*id != INVALID_INTERFACE && self.interfaces.contains(id))
            }
        };
        Ok(out)
    }
}

fn revert(data: Vec<u8>) -> TransportError {
    TransportError::Reverted {
        data,
        message: Some("execution reverted".to_string()),
    }
}

/// A mock StarterKit contract backed by in-memory state.
#[derive(Debug)]
pub struct MockStarterKit {
    state: Mutex<ContractState>,
}

impl MockStarterKit {
    /// Start building a mock contract.
    pub fn builder() -> MockStarterKitBuilder {
        MockStarterKitBuilder::default()
    }

    /// Sets the account that subsequent calls come from.
    pub async fn set_caller(&self, caller: Address) {
        self.state.lock().await.caller = caller;
    }

    /// Registers a website, replacing any previous registration.
    pub async fn add_website(&self, website: WebsiteHandle, owner: Address, versions: u64) {
        self.state.lock().await.websites.insert(
            website,
            Website {
                owner,
                versions,
                locked: false,
            },
        );
    }

    /// Appends a version to a registered website and returns its index.
    pub async fn add_version(&self, website: &WebsiteHandle) -> Option<VersionIndex> {
        let mut state = self.state.lock().await;
        let site = state.websites.get_mut(website)?;
        site.versions += 1;
        Some(VersionIndex(site.versions - 1))
    }

    /// Locks or unlocks a website against writes.
    pub async fn set_locked(&self, website: &WebsiteHandle, locked: bool) {
        if let Some(site) = self.state.lock().await.websites.get_mut(website) {
            site.locked = locked;
        }
    }

    /// Makes every subsequent call fail as if the node were unreachable.
    pub async fn set_offline(&self, offline: bool) {
        self.state.lock().await.offline = offline;
    }

    /// The stored configuration of a pair, bypassing the ABI.
    pub async fn stored_config(
        &self,
        website: &WebsiteHandle,
        version: VersionIndex,
    ) -> Option<PluginConfig> {
        self.state
            .lock()
            .await
            .configs
            .get(&(*website, version))
            .cloned()
    }

    /// Number of committed writes.
    pub async fn write_count(&self) -> u64 {
        self.state.lock().await.writes
    }

    /// Number of calls and sends received, including failed ones.
    pub async fn call_count(&self) -> u64 {
        self.state.lock().await.calls
    }
}

#[async_trait]
impl ContractTransport for MockStarterKit {
    fn name(&self) -> &str {
        "mock-starterkit"
    }

    async fn call(&self, _contract: &Address, calldata: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        let mut state = self.state.lock().await;
        state.calls += 1;
        if state.offline {
            return Err(TransportError::unavailable("mock node is offline"));
        }
        let call = StarterKitCall::decode(&calldata).map_err(|_| revert(Vec::new()))?;
        debug!(function = call.function().name(), "mock call");
        state.execute_view(&call)
    }

    async fn send(&self, _contract: &Address, calldata: Vec<u8>) -> Result<(), TransportError> {
        let mut state = self.state.lock().await;
        state.calls += 1;
        if state.offline {
            return Err(TransportError::unavailable("mock node is offline"));
        }
        let call = StarterKitCall::decode(&calldata).map_err(|_| revert(Vec::new()))?;
        debug!(function = call.function().name(), "mock send");

        if let StarterKitCall::SetConfig {
            website,
            version,
            config,
        } = call
        {
            state.check_write(&website, version)?;
            state.configs.insert((website, version), config);
            state.writes += 1;
        }
        Ok(())
    }
}

/// Builder for [`MockStarterKit`].
#[derive(Debug)]
pub struct MockStarterKitBuilder {
    state: ContractState,
}

impl Default for MockStarterKitBuilder {
    fn default() -> Self {
        Self {
            state: ContractState {
                caller: Address::ZERO,
                websites: HashMap::new(),
                configs: HashMap::new(),
                infos: sample_infos(),
                frontend: Address([0xf0; 20]),
                oc_web_admin_plugin: Address([0xad; 20]),
                static_frontend_plugin: Address([0x5f; 20]),
                interfaces: HashSet::from([InterfaceId::IERC165]),
                offline: false,
                calls: 0,
                writes: 0,
            },
        }
    }
}

impl MockStarterKitBuilder {
    /// Registers a website with `versions` versions owned by `owner`.
    pub fn website(mut self, website: WebsiteHandle, owner: Address, versions: u64) -> Self {
        self.state.websites.insert(
            website,
            Website {
                owner,
                versions,
                locked: false,
            },
        );
        self
    }

    /// Sets the initial caller.
    pub fn caller(mut self, caller: Address) -> Self {
        self.state.caller = caller;
        self
    }

    /// Declares support for an interface id.
    pub fn interface(mut self, id: InterfaceId) -> Self {
        self.state.interfaces.insert(id);
        self
    }

    /// Replaces the metadata record.
    pub fn infos(mut self, infos: PluginInfo) -> Self {
        self.state.infos = infos;
        self
    }

    /// Replaces the three module addresses.
    pub fn modules(mut self, frontend: Address, admin: Address, static_frontend: Address) -> Self {
        self.state.frontend = frontend;
        self.state.oc_web_admin_plugin = admin;
        self.state.static_frontend_plugin = static_frontend;
        self
    }

    pub fn build(self) -> MockStarterKit {
        MockStarterKit {
            state: Mutex::new(self.state),
        }
    }
}

/// A representative metadata record with one dependency and two panels.
pub fn sample_infos() -> PluginInfo {
    PluginInfo {
        name: "starterKit".to_string(),
        version: "0.1.0".to_string(),
        title: "Starter kit".to_string(),
        sub_title: "A starter kit for your plugins".to_string(),
        author: "StarterKit Contributors".to_string(),
        homepage: "https://example.org/starterkit".to_string(),
        dependencies: vec![PluginRef(Address([0x5f; 20]))],
        admin_panels: vec![
            AdminPanel {
                title: "Starter Kit".to_string(),
                url: "/plugins/starterkit/admin/index.html".to_string(),
                module_for_global_admin_panel: PluginRef(Address([0xad; 20])),
                panel_type: AdminPanelType::Primary,
            },
            AdminPanel {
                title: "Advanced".to_string(),
                url: "/plugins/starterkit/admin/advanced.html".to_string(),
                module_for_global_admin_panel: PluginRef(Address::ZERO),
                panel_type: AdminPanelType::Secondary,
            },
        ],
    }
}
