// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.
//!
//! Each command returns the text to print so output can be tested without
//! a terminal. `--json` yields pretty JSON for scripting; otherwise a
//! human-readable report, colored unless `--plain` or stdout is not a TTY.

use serde::Serialize;
use starterkit_config::WebsiteConfig;
use starterkit_core::{
    Address, CapabilityProbe, ConfigGateway, InterfaceId, MetadataProvider, PluginConfig,
    PluginInfo, StarterKitError, VersionIndex, WebsiteHandle,
};
use starterkit_plugin::{lookup, search_interfaces, KnownInterface};

/// How results are rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputMode {
    pub json: bool,
    pub color: bool,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, StarterKitError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| StarterKitError::Internal(format!("failed to render JSON: {e}")))
}

fn heading(title: &str, mode: OutputMode) -> String {
    let title = if mode.color {
        use colored::Colorize;
        title.bold().to_string()
    } else {
        title.to_string()
    };
    format!("\n  {title}\n  {}\n", "-".repeat(35))
}

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("    {:<18}{value}\n", format!("{label}:"))
}

/// Resolves the `(website, version)` target from flags, falling back to
/// the `[website]` config section. Text is parsed before any remote call.
pub fn resolve_target(
    website: Option<&str>,
    version: Option<&str>,
    defaults: &WebsiteConfig,
) -> Result<(WebsiteHandle, VersionIndex), StarterKitError> {
    let website = match website {
        Some(text) => text.parse::<WebsiteHandle>()?,
        None => defaults.address.ok_or_else(|| {
            StarterKitError::MalformedInput(
                "no website given (use --website or set website.address)".to_string(),
            )
        })?,
    };
    let version = match version {
        Some(text) => text.parse::<VersionIndex>()?,
        None => defaults.version.ok_or_else(|| {
            StarterKitError::MalformedInput(
                "no version index given (use --version or set website.version)".to_string(),
            )
        })?,
    };
    Ok((website, version))
}

/// Resolves an interface argument: a catalog name or 8 hex digits.
pub fn resolve_interface(text: &str) -> Result<InterfaceId, StarterKitError> {
    match lookup(text) {
        Some(id) => Ok(id),
        None => text.parse::<InterfaceId>(),
    }
}

// --- info ---

pub async fn run_info<M: MetadataProvider>(
    provider: &M,
    mode: OutputMode,
) -> Result<String, StarterKitError> {
    let info = provider.infos().await?;
    if mode.json {
        return to_json(&info);
    }
    Ok(render_info(&info, mode))
}

fn render_info(info: &PluginInfo, mode: OutputMode) -> String {
    let mut out = heading(&format!("{} {}", info.name, info.version), mode);
    out.push_str(&field("Title", &info.title));
    out.push_str(&field("Subtitle", &info.sub_title));
    out.push_str(&field("Author", &info.author));
    out.push_str(&field("Homepage", &info.homepage));

    if info.dependencies.is_empty() {
        out.push_str(&field("Dependencies", "none"));
    } else {
        for (i, dep) in info.dependencies.iter().enumerate() {
            let label = if i == 0 { "Dependencies" } else { "" };
            out.push_str(&field(label, dep));
        }
    }

    if info.admin_panels.is_empty() {
        out.push_str(&field("Admin panels", "none"));
    }
    for panel in &info.admin_panels {
        out.push_str(&format!("\n    [{}] {}\n", panel.panel_type, panel.title));
        out.push_str(&field("  URL", &panel.url));
        out.push_str(&field("  Module", panel.module_for_global_admin_panel));
    }
    out
}

// --- modules ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Modules {
    frontend: Address,
    oc_web_admin_plugin: Address,
    static_frontend_plugin: Address,
}

pub async fn run_modules<M: MetadataProvider>(
    provider: &M,
    mode: OutputMode,
) -> Result<String, StarterKitError> {
    let modules = Modules {
        frontend: provider.frontend().await?,
        oc_web_admin_plugin: provider.oc_web_admin_plugin().await?,
        static_frontend_plugin: provider.static_frontend_plugin().await?,
    };
    if mode.json {
        return to_json(&modules);
    }
    let mut out = heading("modules", mode);
    out.push_str(&field("Frontend", modules.frontend));
    out.push_str(&field("Admin plugin", modules.oc_web_admin_plugin));
    out.push_str(&field("Static frontend", modules.static_frontend_plugin));
    Ok(out)
}

// --- config ---

#[derive(Debug, Serialize)]
struct ConfigReport<'a> {
    website: WebsiteHandle,
    version: VersionIndex,
    #[serde(flatten)]
    config: &'a PluginConfig,
}

fn render_config(
    website: WebsiteHandle,
    version: VersionIndex,
    config: &PluginConfig,
    mode: OutputMode,
) -> Result<String, StarterKitError> {
    if mode.json {
        return to_json(&ConfigReport {
            website,
            version,
            config,
        });
    }
    let mut out = heading("config", mode);
    out.push_str(&field("Website", website));
    out.push_str(&field("Version", version));
    let root = if config.is_site_root() {
        "/ (site root)".to_string()
    } else {
        format!("/{}", config.root_path.join("/"))
    };
    out.push_str(&field("Root path", root));
    Ok(out)
}

pub async fn run_config_get<G: ConfigGateway>(
    gateway: &G,
    website: WebsiteHandle,
    version: VersionIndex,
    mode: OutputMode,
) -> Result<String, StarterKitError> {
    let config = gateway.slot(website, version).read().await?;
    render_config(website, version, &config, mode)
}

pub async fn run_config_set<G: ConfigGateway>(
    gateway: &G,
    website: WebsiteHandle,
    version: VersionIndex,
    segments: Vec<String>,
    mode: OutputMode,
) -> Result<String, StarterKitError> {
    let config = PluginConfig::new(segments);
    gateway.slot(website, version).write(&config).await?;
    if mode.json {
        return render_config(website, version, &config, mode);
    }
    let mut out = render_config(website, version, &config, mode)?;
    let done = if mode.color {
        use colored::Colorize;
        "written".green().to_string()
    } else {
        "[OK] written".to_string()
    };
    out.push_str(&field("Status", done));
    Ok(out)
}

// --- supports ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SupportsReport {
    interface_id: InterfaceId,
    supported: bool,
}

pub async fn run_supports<P: CapabilityProbe>(
    probe: &P,
    interface_id: InterfaceId,
    mode: OutputMode,
) -> Result<String, StarterKitError> {
    let supported = probe.supports_interface(interface_id).await?;
    if mode.json {
        return to_json(&SupportsReport {
            interface_id,
            supported,
        });
    }
    let verdict = match (supported, mode.color) {
        (true, true) => {
            use colored::Colorize;
            "supported".green().to_string()
        }
        (false, true) => {
            use colored::Colorize;
            "not supported".red().to_string()
        }
        (true, false) => "[OK] supported".to_string(),
        (false, false) => "[--] not supported".to_string(),
    };
    Ok(format!("{interface_id}: {verdict}\n"))
}

// --- interfaces ---

pub fn run_interfaces(query: &str, mode: OutputMode) -> Result<String, StarterKitError> {
    let found: Vec<KnownInterface> = search_interfaces(query);
    if mode.json {
        return to_json(&found);
    }
    if found.is_empty() {
        return Ok(format!("no known interface matches `{query}`\n"));
    }
    let mut out = heading("known interfaces", mode);
    for entry in &found {
        out.push_str(&format!(
            "    {}  {:<20}{}\n",
            entry.id, entry.name, entry.description
        ));
    }
    Ok(out)
}
