// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog of well-known interface ids.
//!
//! A static lookup table for operators probing a contract with
//! `supportsInterface`. No network calls are made.

use serde::Serialize;
use starterkit_abi::StarterKitFunction;
use starterkit_core::InterfaceId;

/// A named interface id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnownInterface {
    pub name: &'static str,
    pub id: InterfaceId,
    pub description: &'static str,
}

/// Interface id of the StarterKit plugin functions, excluding ERC-165.
pub fn starterkit_interface_id() -> InterfaceId {
    InterfaceId::from_selectors(
        StarterKitFunction::ALL
            .into_iter()
            .filter(|f| *f != StarterKitFunction::SupportsInterface)
            .map(StarterKitFunction::selector),
    )
}

/// Returns every known interface.
pub fn known_interfaces() -> Vec<KnownInterface> {
    vec![
        KnownInterface {
            name: "IERC165",
            id: InterfaceId::IERC165,
            description: "Standard interface detection (supportsInterface)",
        },
        KnownInterface {
            name: "StarterKitPlugin",
            id: starterkit_interface_id(),
            description: "StarterKit plugin metadata and per-version configuration",
        },
        KnownInterface {
            name: "IERC721",
            id: InterfaceId([0x80, 0xac, 0x58, 0xcd]),
            description: "Non-fungible token standard",
        },
        KnownInterface {
            name: "IERC721Metadata",
            id: InterfaceId([0x5b, 0x5e, 0x13, 0x9f]),
            description: "ERC-721 name, symbol and tokenURI",
        },
        KnownInterface {
            name: "IERC721Enumerable",
            id: InterfaceId([0x78, 0x0e, 0x9d, 0x63]),
            description: "ERC-721 token enumeration",
        },
        KnownInterface {
            name: "IERC1155",
            id: InterfaceId([0xd9, 0xb6, 0x7a, 0x26]),
            description: "Multi-token standard",
        },
        KnownInterface {
            name: "IERC2981",
            id: InterfaceId([0x2a, 0x55, 0x20, 0x5a]),
            description: "NFT royalty information",
        },
        KnownInterface {
            name: "IAccessControl",
            id: InterfaceId([0x79, 0x65, 0xdb, 0x0b]),
            description: "Role-based access control",
        },
        KnownInterface {
            name: "invalid",
            id: InterfaceId([0xff, 0xff, 0xff, 0xff]),
            description: "Reserved id that ERC-165 contracts must report as unsupported",
        },
    ]
}

/// Search the catalog by query string.
///
/// Filters entries whose name or description contains the query
/// (case-insensitive), or whose id equals the query as hex. An empty query
/// returns all entries.
pub fn search_interfaces(query: &str) -> Vec<KnownInterface> {
    let query = query.trim();
    if query.is_empty() {
        return known_interfaces();
    }
    let as_id = query.parse::<InterfaceId>().ok();
    let query_lower = query.to_lowercase();
    known_interfaces()
        .into_iter()
        .filter(|i| {
            Some(i.id) == as_id
                || i.name.to_lowercase().contains(&query_lower)
                || i.description.to_lowercase().contains(&query_lower)
        })
        .collect()
}

/// Resolves an exact catalog name (case-insensitive) to its id.
pub fn lookup(name: &str) -> Option<InterfaceId> {
    known_interfaces()
        .into_iter()
        .find(|i| i.name.eq_ignore_ascii_case(name.trim()))
        .map(|i| i.id)
}
