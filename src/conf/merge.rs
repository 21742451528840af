//! Settings merge
//!
//! One policy for both files: an explicit prior choice is kept, anything else
//! falls back to what the document says.
//! - Tunables: a recorded `true`/`false` wins, otherwise `dftval`
//! - Modules: a recorded `off` disables, otherwise `on`

use super::parse::Overrides;
use crate::policy::{Module, PolicyDocument, Tunable};
use crate::render::to_text;
use tracing::warn;

pub const MOD_ENABLED: &str = "on";
pub const MOD_DISABLED: &str = "off";
pub const TUN_ENABLED: &str = "true";
pub const TUN_DISABLED: &str = "false";

const MODULE_CONF_HEADER: &str = "#\n\
# This file contains a listing of available modules.\n\
# To prevent a module from  being used in policy\n\
# creation, set the module name to off.\n\
#\n";

/// Where an effective value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    /// Preserved from the prior configuration file
    Override,
    /// Taken from the policy document
    Default,
}

/// The value written for one tunable or module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveSetting {
    pub name: String,
    pub value: String,
    pub source: SettingSource,
}

/// Text of a regenerated configuration file and the settings it records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedConf {
    pub text: String,
    pub settings: Vec<EffectiveSetting>,
}

/// Resolve a tunable's value.
///
/// Returns `None` when the document declares no default and no usable
/// override exists.
pub fn resolve_tunable(tunable: &Tunable, overrides: &Overrides) -> Option<EffectiveSetting> {
    let recorded = overrides
        .get(&tunable.name)
        .filter(|v| *v == TUN_ENABLED || *v == TUN_DISABLED);
    let (value, source) = match (recorded, tunable.default.as_deref()) {
        (Some(v), _) => (v, SettingSource::Override),
        (None, Some(dft)) => (dft, SettingSource::Default),
        (None, None) => return None,
    };
    Some(EffectiveSetting {
        name: tunable.name.clone(),
        value: value.to_string(),
        source,
    })
}

pub fn resolve_module(module: &Module, overrides: &Overrides) -> EffectiveSetting {
    let (value, source) = match overrides.get(&module.name) {
        Some(MOD_DISABLED) => (MOD_DISABLED, SettingSource::Override),
        _ => (MOD_ENABLED, SettingSource::Default),
    };
    EffectiveSetting {
        name: module.name.clone(),
        value: value.to_string(),
        source,
    }
}

/// Build the tunable configuration file.
///
/// Each tunable gets its plain-text description as a comment block followed
/// by `name = value` and a blank line.
pub fn render_tunable_conf(doc: &PolicyDocument, overrides: &Overrides) -> GeneratedConf {
    let mut out = GeneratedConf::default();
    for tunable in &doc.tunables {
        let Some(setting) = resolve_tunable(tunable, overrides) else {
            warn!(tunable = %tunable.name, "tunable has no default value, skipping");
            continue;
        };
        push_comment_block(&mut out.text, &to_text(&tunable.desc));
        push_assignment(&mut out.text, &setting);
        out.settings.push(setting);
    }
    out
}

/// Build the module configuration file.
pub fn render_module_conf(doc: &PolicyDocument, overrides: &Overrides) -> GeneratedConf {
    let mut out = GeneratedConf {
        text: MODULE_CONF_HEADER.to_string(),
        settings: Vec::new(),
    };
    for module in doc.modules() {
        out.text.push_str(&format!(
            "# Layer: {}\n# Module: {}\n#\n",
            module.layer, module.name
        ));
        if let Some(summary) = &module.summary {
            push_comment_block(&mut out.text, &to_text(summary));
        }
        let setting = resolve_module(module, overrides);
        push_assignment(&mut out.text, &setting);
        out.settings.push(setting);
    }
    out
}

/// One `#` line per line of `text`; empty lines become a bare `#`.
fn push_comment_block(buf: &mut String, text: &str) {
    for line in text.split('\n') {
        if line.is_empty() {
            buf.push_str("#\n");
        } else {
            buf.push_str("# ");
            buf.push_str(line);
            buf.push('\n');
        }
    }
}

fn push_assignment(buf: &mut String, setting: &EffectiveSetting) {
    buf.push_str(&setting.name);
    buf.push_str(" = ");
    buf.push_str(&setting.value);
    buf.push_str("\n\n");
}
