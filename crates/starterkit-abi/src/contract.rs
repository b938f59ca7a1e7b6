// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The StarterKit plugin contract interface.
//!
//! Typed encoders for every call the contract exposes and decoders for its
//! return values, plus the inverse direction (decode calldata, encode return
//! data) used by in-process contract doubles.

use starterkit_core::{
    AdminPanel, AdminPanelType, InterfaceId, PluginConfig, PluginInfo, PluginRef, VersionIndex,
    WebsiteHandle,
};

use crate::decode::{decode, decode_single};
use crate::encode::{encode, encode_call};
use crate::error::AbiError;
use crate::selector::{selector, signature};
use crate::token::{ParamType, Token};

/// The functions of the StarterKit plugin contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarterKitFunction {
    Frontend,
    Infos,
    OcWebAdminPlugin,
    StaticFrontendPlugin,
    GetConfig,
    SetConfig,
    SupportsInterface,
}

impl StarterKitFunction {
    pub const ALL: [StarterKitFunction; 7] = [
        StarterKitFunction::Frontend,
        StarterKitFunction::Infos,
        StarterKitFunction::OcWebAdminPlugin,
        StarterKitFunction::StaticFrontendPlugin,
        StarterKitFunction::GetConfig,
        StarterKitFunction::SetConfig,
        StarterKitFunction::SupportsInterface,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StarterKitFunction::Frontend => "frontend",
            StarterKitFunction::Infos => "infos",
            StarterKitFunction::OcWebAdminPlugin => "ocWebAdminPlugin",
            StarterKitFunction::StaticFrontendPlugin => "staticFrontendPlugin",
            StarterKitFunction::GetConfig => "getConfig",
            StarterKitFunction::SetConfig => "setConfig",
            StarterKitFunction::SupportsInterface => "supportsInterface",
        }
    }

    pub fn inputs(self) -> Vec<ParamType> {
        match self {
            StarterKitFunction::Frontend
            | StarterKitFunction::Infos
            | StarterKitFunction::OcWebAdminPlugin
            | StarterKitFunction::StaticFrontendPlugin => vec![],
            StarterKitFunction::GetConfig => vec![ParamType::Address, ParamType::Uint(256)],
            StarterKitFunction::SetConfig => {
                vec![ParamType::Address, ParamType::Uint(256), config_type()]
            }
            StarterKitFunction::SupportsInterface => vec![ParamType::FixedBytes(4)],
        }
    }

    pub fn outputs(self) -> Vec<ParamType> {
        match self {
            StarterKitFunction::Frontend
            | StarterKitFunction::OcWebAdminPlugin
            | StarterKitFunction::StaticFrontendPlugin => vec![ParamType::Address],
            StarterKitFunction::Infos => vec![infos_type()],
            StarterKitFunction::GetConfig => vec![config_type()],
            StarterKitFunction::SetConfig => vec![],
            StarterKitFunction::SupportsInterface => vec![ParamType::Bool],
        }
    }

    /// Whether the function only reads state.
    pub fn is_view(self) -> bool {
        !matches!(self, StarterKitFunction::SetConfig)
    }

    pub fn signature(self) -> String {
        signature(self.name(), &self.inputs())
    }

    pub fn selector(self) -> [u8; 4] {
        selector(&self.signature())
    }

    pub fn from_selector(sel: [u8; 4]) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.selector() == sel)
    }
}

/// `struct Config { string[] rootPath; }`
pub fn config_type() -> ParamType {
    ParamType::Tuple(vec![ParamType::Array(Box::new(ParamType::String))])
}

/// `struct AdminPanel { string title; string url; address moduleForGlobalAdminPanel; AdminPanelType panelType; }`
pub fn admin_panel_type() -> ParamType {
    ParamType::Tuple(vec![
        ParamType::String,
        ParamType::String,
        ParamType::Address,
        ParamType::Uint(8),
    ])
}

/// `struct Infos { ... }` as returned by `infos()`.
pub fn infos_type() -> ParamType {
    ParamType::Tuple(vec![
        ParamType::String,
        ParamType::String,
        ParamType::String,
        ParamType::String,
        ParamType::String,
        ParamType::String,
        ParamType::Array(Box::new(ParamType::Address)),
        ParamType::Array(Box::new(admin_panel_type())),
    ])
}

/// A fully-typed call to the StarterKit contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarterKitCall {
    Frontend,
    Infos,
    OcWebAdminPlugin,
    StaticFrontendPlugin,
    GetConfig {
        website: WebsiteHandle,
        version: VersionIndex,
    },
    SetConfig {
        website: WebsiteHandle,
        version: VersionIndex,
        config: PluginConfig,
    },
    SupportsInterface(InterfaceId),
}

impl StarterKitCall {
    pub fn function(&self) -> StarterKitFunction {
        match self {
            StarterKitCall::Frontend => StarterKitFunction::Frontend,
            StarterKitCall::Infos => StarterKitFunction::Infos,
            StarterKitCall::OcWebAdminPlugin => StarterKitFunction::OcWebAdminPlugin,
            StarterKitCall::StaticFrontendPlugin => StarterKitFunction::StaticFrontendPlugin,
            StarterKitCall::GetConfig { .. } => StarterKitFunction::GetConfig,
            StarterKitCall::SetConfig { .. } => StarterKitFunction::SetConfig,
            StarterKitCall::SupportsInterface(_) => StarterKitFunction::SupportsInterface,
        }
    }

    /// Encodes the call as transaction calldata.
    pub fn encode(&self) -> Vec<u8> {
        let args = match self {
            StarterKitCall::Frontend
            | StarterKitCall::Infos
            | StarterKitCall::OcWebAdminPlugin
            | StarterKitCall::StaticFrontendPlugin => vec![],
            StarterKitCall::GetConfig { website, version } => {
                vec![Token::Address(website.0), Token::uint(version.as_u64())]
            }
            StarterKitCall::SetConfig {
                website,
                version,
                config,
            } => vec![
                Token::Address(website.0),
                Token::uint(version.as_u64()),
                config_to_token(config),
            ],
            StarterKitCall::SupportsInterface(id) => vec![Token::FixedBytes(id.0.to_vec())],
        };
        encode_call(self.function().selector(), &args)
    }

    /// Parses calldata back into a typed call.
    pub fn decode(calldata: &[u8]) -> Result<Self, AbiError> {
        if calldata.len() < 4 {
            return Err(AbiError::OutOfBounds {
                offset: 0,
                needed: 4,
                len: calldata.len(),
            });
        }
        let mut sel = [0u8; 4];
        sel.copy_from_slice(&calldata[..4]);
        let function =
            StarterKitFunction::from_selector(sel).ok_or(AbiError::UnknownSelector(sel))?;
        let mut args = decode(&function.inputs(), &calldata[4..])?.into_iter();
        let mut next = || args.next().ok_or(AbiError::TypeMismatch { expected: "argument" });

        let call = match function {
            StarterKitFunction::Frontend => StarterKitCall::Frontend,
            StarterKitFunction::Infos => StarterKitCall::Infos,
            StarterKitFunction::OcWebAdminPlugin => StarterKitCall::OcWebAdminPlugin,
            StarterKitFunction::StaticFrontendPlugin => StarterKitCall::StaticFrontendPlugin,
            StarterKitFunction::GetConfig => StarterKitCall::GetConfig {
                website: WebsiteHandle(next()?.into_address()?),
                version: VersionIndex(next()?.into_u64()?),
            },
            StarterKitFunction::SetConfig => StarterKitCall::SetConfig {
                website: WebsiteHandle(next()?.into_address()?),
                version: VersionIndex(next()?.into_u64()?),
                config: token_to_config(next()?)?,
            },
            StarterKitFunction::SupportsInterface => {
                let bytes = next()?.into_fixed_bytes()?;
                let mut id = [0u8; 4];
                id.copy_from_slice(&bytes);
                StarterKitCall::SupportsInterface(InterfaceId(id))
            }
        };
        Ok(call)
    }
}

// --- Return values ---

pub fn decode_address_output(data: &[u8]) -> Result<starterkit_core::Address, AbiError> {
    decode_single(&ParamType::Address, data)?.into_address()
}

pub fn encode_address_output(address: &starterkit_core::Address) -> Vec<u8> {
    encode(&[Token::Address(*address)])
}

pub fn decode_bool_output(data: &[u8]) -> Result<bool, AbiError> {
    decode_single(&ParamType::Bool, data)?.into_bool()
}

pub fn encode_bool_output(value: bool) -> Vec<u8> {
    encode(&[Token::Bool(value)])
}

pub fn decode_config_output(data: &[u8]) -> Result<PluginConfig, AbiError> {
    token_to_config(decode_single(&config_type(), data)?)
}

pub fn encode_config_output(config: &PluginConfig) -> Vec<u8> {
    encode(&[config_to_token(config)])
}

pub fn decode_infos_output(data: &[u8]) -> Result<PluginInfo, AbiError> {
    token_to_infos(decode_single(&infos_type(), data)?)
}

pub fn encode_infos_output(info: &PluginInfo) -> Vec<u8> {
    encode(&[infos_to_token(info)])
}

// --- Struct <-> token mapping ---

fn config_to_token(config: &PluginConfig) -> Token {
    Token::Tuple(vec![Token::Array(
        config
            .root_path
            .iter()
            .cloned()
            .map(Token::String)
            .collect(),
    )])
}

fn token_to_config(token: Token) -> Result<PluginConfig, AbiError> {
    let mut fields = token.into_tuple()?.into_iter();
    let root_path = fields
        .next()
        .ok_or(AbiError::TypeMismatch { expected: "Config.rootPath" })?
        .into_array()?
        .into_iter()
        .map(Token::into_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PluginConfig { root_path })
}

fn infos_to_token(info: &PluginInfo) -> Token {
    Token::Tuple(vec![
        Token::String(info.name.clone()),
        Token::String(info.version.clone()),
        Token::String(info.title.clone()),
        Token::String(info.sub_title.clone()),
        Token::String(info.author.clone()),
        Token::String(info.homepage.clone()),
        Token::Array(
            info.dependencies
                .iter()
                .map(|dep| Token::Address(dep.0))
                .collect(),
        ),
        Token::Array(
            info.admin_panels
                .iter()
                .map(|panel| {
                    Token::Tuple(vec![
                        Token::String(panel.title.clone()),
                        Token::String(panel.url.clone()),
                        Token::Address(panel.module_for_global_admin_panel.0),
                        Token::uint(u64::from(u8::from(panel.panel_type))),
                    ])
                })
                .collect(),
        ),
    ])
}

fn token_to_infos(token: Token) -> Result<PluginInfo, AbiError> {
    let mut fields = token.into_tuple()?.into_iter();
    let mut next = || fields.next().ok_or(AbiError::TypeMismatch { expected: "Infos field" });

    let name = next()?.into_string()?;
    let version = next()?.into_string()?;
    let title = next()?.into_string()?;
    let sub_title = next()?.into_string()?;
    let author = next()?.into_string()?;
    let homepage = next()?.into_string()?;
    let dependencies = next()?
        .into_array()?
        .into_iter()
        .map(|t| t.into_address().map(PluginRef))
        .collect::<Result<Vec<_>, _>>()?;
    let admin_panels = next()?
        .into_array()?
        .into_iter()
        .map(token_to_admin_panel)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PluginInfo {
        name,
        version,
        title,
        sub_title,
        author,
        homepage,
        dependencies,
        admin_panels,
    })
}

fn token_to_admin_panel(token: Token) -> Result<AdminPanel, AbiError> {
    let mut fields = token.into_tuple()?.into_iter();
    let mut next = || {
        fields
            .next()
            .ok_or(AbiError::TypeMismatch { expected: "AdminPanel field" })
    };

    let title = next()?.into_string()?;
    let url = next()?.into_string()?;
    let module = next()?.into_address()?;
    let raw_type = next()?.into_u64()?;
    let panel_type = u8::try_from(raw_type)
        .map(AdminPanelType::from)
        .map_err(|_| AbiError::Overflow { target: "uint8" })?;

    Ok(AdminPanel {
        title,
        url,
        module_for_global_admin_panel: PluginRef(module),
        panel_type,
    })
}
