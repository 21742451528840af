#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for documentation assembly and generation

use super::*;
use crate::policy::{
    parse_policy, Component, ComponentKind, Description, Layer, Module, PolicyDocument,
};
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = include_str!("../../tests/fixtures/policy.xml");

fn component(kind: ComponentKind, name: &str) -> Component {
    Component {
        kind,
        name: name.into(),
        summary: None,
        desc: None,
        secdesc: None,
        params: vec![],
    }
}

fn module_with(layer: &str, name: &str, interfaces: &[&str]) -> Module {
    Module {
        name: name.into(),
        layer: layer.into(),
        summary: Some(Description::text(format!("{name} summary"))),
        interfaces: interfaces
            .iter()
            .map(|n| component(ComponentKind::Interface, n))
            .collect(),
        ..Module::default()
    }
}

/// Minimal templates that expose the context keys without markup noise
fn plain_templates() -> DocTemplates {
    DocTemplates::from_sources([
        ("header.html", "[{{ menu }}]{{ content }}".to_string()),
        (
            "menu.html",
            "{% for l in menulist %}{{ l.layer }}({% for m in l.modules %}{{ m.name }};{% endfor %}){% endfor %}".to_string(),
        ),
        (
            "module_list.html",
            "<{{ mod_layer }}>".to_string(),
        ),
        (
            "module.html",
            "{{ mod_layer }}/{{ mod_name }}|{{ mod_summary }}|{{ interfaces }}|{{ templates }}".to_string(),
        ),
        (
            "interface.html",
            "{% for i in interfaces %}{{ i.interface_name }}{% for p in i.interface_parameters %}[{{ p.name }}:{{ p.optional }}]{% endfor %},{% endfor %}".to_string(),
        ),
        (
            "template.html",
            "{% for t in templates %}{{ t.template_name }},{% endfor %}".to_string(),
        ),
        (
            "int_list.html",
            "{% for i in interfaces %}{{ i.mod_name }}.{{ i.interface_name }},{% endfor %}".to_string(),
        ),
        (
            "temp_list.html",
            "{% for t in templates %}{{ t.mod_name }}.{{ t.template_name }},{% endfor %}".to_string(),
        ),
    ])
    .unwrap()
}

#[test]
fn test_interfaces_sorted_by_name() {
    let module = module_with("kernel", "m", &["zeta", "alpha", "mid"]);
    for _ in 0..3 {
        let page = assemble_module(&module);
        let names: Vec<_> = page.interfaces.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}

#[test]
fn test_global_listings_sorted_across_modules() {
    let doc = PolicyDocument {
        layers: vec![Layer {
            name: "kernel".into(),
            modules: vec![
                module_with("kernel", "b", &["kb_two", "b_one"]),
                module_with("kernel", "a", &["a_one"]),
            ],
        }],
        tunables: vec![],
    };
    let assembly = assemble(&doc);
    let names: Vec<_> = assembly
        .all_interfaces
        .iter()
        .map(|i| (i.mod_name.as_str(), i.name.as_str()))
        .collect();
    assert_eq!(names, vec![("a", "a_one"), ("b", "b_one"), ("b", "kb_two")]);
    // Pages keep document order
    assert_eq!(assembly.pages[0].name, "b");
}

#[test]
fn test_parameter_optional_casing() {
    let doc = parse_policy(FIXTURE).unwrap();
    let page = assemble_module(doc.find_module("corenetwork").unwrap());
    let iface = page
        .interfaces
        .iter()
        .find(|i| i.name == "corenet_non_ipsec_sendrecv")
        .unwrap();
    let flags: Vec<_> = iface.parameters.iter().map(|p| p.optional).collect();
    assert_eq!(flags, vec!["No", "yes"]);
}

#[test]
fn test_component_serializes_with_kind_prefix() {
    let doc = parse_policy(FIXTURE).unwrap();
    let page = assemble_module(doc.find_module("corenetwork").unwrap());

    let iface = serde_json::to_value(&page.interfaces[0]).unwrap();
    assert_eq!(iface["interface_name"], "corenet_non_ipsec_sendrecv");
    assert_eq!(iface["interface_secdesc"], "<p>Allows unencrypted traffic.</p>");
    assert_eq!(iface["mod_layer"], "kernel");

    let tmpl = serde_json::to_value(&page.templates[0]).unwrap();
    assert_eq!(tmpl["template_name"], "corenet_port_template");
    assert!(tmpl["template_desc"].is_null());
    assert_eq!(tmpl["template_parameters"][0]["optional"], "No");
}

#[test]
fn test_menu_scopes() {
    let doc = parse_policy(FIXTURE).unwrap();
    let index = ModuleIndex::build(&doc);

    let global = index.menu(MenuScope::Global);
    let layers: Vec<_> = global.iter().map(|l| l.layer.as_str()).collect();
    assert_eq!(layers, vec!["admin", "kernel"]);
    assert!(global.iter().all(|l| !l.modules.is_empty()));

    let scoped = index.menu(MenuScope::Layer("kernel"));
    assert_eq!(scoped.len(), 2);
    assert!(scoped[0].modules.is_empty());
    let kernel_mods: Vec<_> = scoped[1].modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(kernel_mods, vec!["corenetwork", "kernel"]);
    assert_eq!(
        index.summary("kernel", "corenetwork"),
        Some("<p>Policy controlling access to network objects</p>")
    );
}

#[test]
fn test_empty_layer_name_is_not_global() {
    let doc = PolicyDocument {
        layers: vec![
            Layer {
                name: "".into(),
                modules: vec![module_with("", "anon", &[])],
            },
            Layer {
                name: "named".into(),
                modules: vec![module_with("named", "m", &[])],
            },
        ],
        tunables: vec![],
    };
    let index = ModuleIndex::build(&doc);
    let scoped = index.menu(MenuScope::Layer(""));
    assert_eq!(scoped[0].layer, "");
    assert_eq!(scoped[0].modules.len(), 1);
    assert!(scoped[1].modules.is_empty());
    assert_eq!(MenuScope::Layer("").layer(), Some(""));
    assert_eq!(MenuScope::Global.layer(), None);
}

#[test]
fn test_generate_docs_writes_tree() {
    let out = TempDir::new().unwrap();
    let doc = parse_policy(FIXTURE).unwrap();
    let report = generate_docs_with(&doc, out.path(), &plain_templates()).unwrap();

    for file in [
        "admin.html",
        "kernel.html",
        "index.html",
        "kernel_corenetwork.html",
        "kernel_kernel.html",
        "admin_bootloader.html",
        "interfaces.html",
        "templates.html",
    ] {
        assert!(out.path().join(file).is_file(), "missing {file}");
    }
    assert_eq!(report.files.len(), 8);

    let index = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert_eq!(
        index,
        "[admin(bootloader;)kernel(corenetwork;kernel;)]<admin><kernel>"
    );

    let module = fs::read_to_string(out.path().join("kernel_corenetwork.html")).unwrap();
    assert_eq!(
        module,
        "[admin()kernel(corenetwork;kernel;)]kernel/corenetwork|<p>Policy controlling access to network objects</p>|corenet_non_ipsec_sendrecv[domain:No][role:yes],corenet_tcp_sendrecv_all_if[domain:No],|corenet_port_template,"
    );

    let interfaces = fs::read_to_string(out.path().join("interfaces.html")).unwrap();
    assert!(interfaces.ends_with(
        "corenetwork.corenet_non_ipsec_sendrecv,corenetwork.corenet_tcp_sendrecv_all_if,kernel.kernel_read_system_state,"
    ));
}

#[test]
fn test_missing_output_dir_is_an_error() {
    let out = TempDir::new().unwrap();
    let doc = parse_policy(FIXTURE).unwrap();
    let err = generate_docs_with(&doc, &out.path().join("nope"), &plain_templates()).unwrap_err();
    assert!(err.to_string().contains("Could not access target directory"));
}

#[test]
fn test_missing_template_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("header.html"), "{{ content }}").unwrap();
    let err = DocTemplates::load(dir.path()).err().unwrap();
    assert!(err.to_string().contains("Could not open template"));
}

#[test]
fn test_incomplete_template_set_is_rejected() {
    let result = DocTemplates::from_sources([("header.html", "{{ content }}".to_string())]);
    assert!(result.is_err());
}
