// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The StarterKit plugin client.
//!
//! [`StarterKitClient`] encodes each operation with the contract ABI, hands
//! the calldata to a [`ContractTransport`] and decodes the answer. It holds
//! no state between calls: every read goes to the external store.

use async_trait::async_trait;
use starterkit_abi::contract::{
    decode_address_output, decode_bool_output, decode_config_output, decode_infos_output,
};
use starterkit_abi::{AbiError, StarterKitCall};
use starterkit_core::{
    Address, CapabilityProbe, ConfigGateway, ContractTransport, InterfaceId, MetadataProvider,
    PluginConfig, PluginInfo, StarterKitError, VersionIndex, WebsiteHandle,
};
use tracing::{debug, info, warn};

use crate::classify::RevertClassifier;

/// Client for one deployed StarterKit plugin contract.
#[derive(Debug)]
pub struct StarterKitClient<T> {
    transport: T,
    contract: Address,
    classifier: RevertClassifier,
}

impl<T: ContractTransport> StarterKitClient<T> {
    /// Creates a client for the contract at `contract` with the default
    /// revert classification keywords.
    pub fn new(transport: T, contract: Address) -> Self {
        Self {
            transport,
            contract,
            classifier: RevertClassifier::default(),
        }
    }

    /// Replaces the revert classifier.
    pub fn with_classifier(mut self, classifier: RevertClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Address of the plugin contract.
    pub fn contract(&self) -> &Address {
        &self.contract
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn read<R>(
        &self,
        call: StarterKitCall,
        decode: fn(&[u8]) -> Result<R, AbiError>,
    ) -> Result<R, StarterKitError> {
        let function = call.function().name();
        debug!(
            function,
            contract = %self.contract,
            transport = self.transport.name(),
            "calling contract"
        );

        let data = self
            .transport
            .call(&self.contract, call.encode())
            .await
            .map_err(|e| {
                let err = self.classifier.classify(e);
                debug!(function, kind = %err.kind(), error = %err, "read failed");
                err
            })?;

        if data.is_empty() {
            warn!(function, contract = %self.contract, "contract returned no data");
            return Err(StarterKitError::Abi(format!(
                "{function} returned no data; is {} a StarterKit plugin contract?",
                self.contract
            )));
        }

        decode(&data).map_err(|e| {
            warn!(function, error = %e, "undecodable return data");
            StarterKitError::from(e)
        })
    }
}

#[async_trait]
impl<T: ContractTransport> MetadataProvider for StarterKitClient<T> {
    async fn infos(&self) -> Result<PluginInfo, StarterKitError> {
        self.read(StarterKitCall::Infos, decode_infos_output).await
    }

    async fn frontend(&self) -> Result<Address, StarterKitError> {
        self.read(StarterKitCall::Frontend, decode_address_output)
            .await
    }

    async fn oc_web_admin_plugin(&self) -> Result<Address, StarterKitError> {
        self.read(StarterKitCall::OcWebAdminPlugin, decode_address_output)
            .await
    }

    async fn static_frontend_plugin(&self) -> Result<Address, StarterKitError> {
        self.read(StarterKitCall::StaticFrontendPlugin, decode_address_output)
            .await
    }
}

#[async_trait]
impl<T: ContractTransport> ConfigGateway for StarterKitClient<T> {
    async fn get_config(
        &self,
        website: &WebsiteHandle,
        version: VersionIndex,
    ) -> Result<PluginConfig, StarterKitError> {
        let call = StarterKitCall::GetConfig {
            website: *website,
            version,
        };
        self.read(call, decode_config_output).await
    }

    async fn set_config(
        &self,
        website: &WebsiteHandle,
        version: VersionIndex,
        config: &PluginConfig,
    ) -> Result<(), StarterKitError> {
        let call = StarterKitCall::SetConfig {
            website: *website,
            version,
            config: config.clone(),
        };
        debug!(
            %website,
            %version,
            segments = config.root_path.len(),
            transport = self.transport.name(),
            "submitting configuration"
        );

        match self.transport.send(&self.contract, call.encode()).await {
            Ok(()) => {
                info!(%website, %version, root_path = ?config.root_path, "configuration committed");
                Ok(())
            }
            Err(e) => {
                let err = self.classifier.classify(e);
                warn!(%website, %version, kind = %err.kind(), error = %err, "configuration write failed");
                Err(err)
            }
        }
    }
}

#[async_trait]
impl<T: ContractTransport> CapabilityProbe for StarterKitClient<T> {
    async fn supports_interface(&self, interface_id: InterfaceId) -> Result<bool, StarterKitError> {
        self.read(StarterKitCall::SupportsInterface(interface_id), decode_bool_output)
            .await
    }
}
