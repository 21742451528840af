use super::error::PolicyError;
use super::types::{
    Component, ComponentKind, DescNode, Description, Layer, Module, Parameter, PolicyDocument,
    Tunable,
};
use anyhow::Context;
use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;
use tracing::{debug, warn};

/// Read and parse the policy XML at `path`.
///
/// # Errors
///
/// Fails if the file cannot be read, is not well-formed XML, or names an
/// element without its identifying attribute.
pub fn load_policy(path: &Path) -> anyhow::Result<PolicyDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("error opening {}", path.display()))?;
    let doc = parse_policy(&content)
        .with_context(|| format!("error while parsing xml in {}", path.display()))?;
    debug!(
        path = %path.display(),
        layers = doc.layers.len(),
        tunables = doc.tunables.len(),
        "loaded policy document"
    );
    Ok(doc)
}

/// Parse policy XML held in memory.
pub fn parse_policy(xml: &str) -> anyhow::Result<PolicyDocument> {
    // policy.xml is usually generated with a DOCTYPE line
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let xml_doc = Document::parse_with_options(xml, options)?;

    let mut layers = Vec::new();
    for layer_node in xml_doc
        .descendants()
        .filter(|n| n.has_tag_name("layer"))
    {
        let layer_name = required_name(&xml_doc, layer_node)?;
        let mut modules = Vec::new();
        for module_node in element_children(layer_node, "module") {
            modules.push(build_module(&xml_doc, module_node, &layer_name)?);
        }
        layers.push(Layer {
            name: layer_name,
            modules,
        });
    }

    let mut tunables = Vec::new();
    for node in xml_doc
        .descendants()
        .filter(|n| n.has_tag_name("tunable"))
        .filter(|n| !n.ancestors().any(|a| a.has_tag_name("module")))
    {
        let Some(name) = node.attribute("name") else {
            let pos = xml_doc.text_pos_at(node.range().start);
            warn!(row = pos.row, col = pos.col, "skipping tunable without a name");
            continue;
        };
        let desc = match first_child(node, "desc") {
            Some(desc_node) => description(desc_node),
            None => description(node),
        };
        tunables.push(Tunable {
            name: name.to_string(),
            default: node.attribute("dftval").map(str::to_string),
            desc,
        });
    }

    Ok(PolicyDocument { layers, tunables })
}

fn build_module(xml_doc: &Document, node: Node, layer: &str) -> anyhow::Result<Module> {
    let name = required_name(xml_doc, node)?;
    let mut interfaces = Vec::new();
    let mut templates = Vec::new();
    for child in node.children().filter(Node::is_element) {
        let kind = match child.tag_name().name() {
            "interface" => ComponentKind::Interface,
            "template" => ComponentKind::Template,
            _ => continue,
        };
        let component = build_component(xml_doc, child, kind)?;
        match kind {
            ComponentKind::Interface => interfaces.push(component),
            ComponentKind::Template => templates.push(component),
        }
    }

    Ok(Module {
        summary: first_child(node, "summary").map(description),
        desc: first_child(node, "desc").map(description),
        name,
        layer: layer.to_string(),
        interfaces,
        templates,
    })
}

fn build_component(
    xml_doc: &Document,
    node: Node,
    kind: ComponentKind,
) -> anyhow::Result<Component> {
    let params = element_children(node, "param")
        .map(|param| Parameter {
            name: param.attribute("name").unwrap_or_default().to_string(),
            desc: param.text().unwrap_or_default().trim().to_string(),
            optional: param.attribute("optional") == Some("true"),
        })
        .collect();

    Ok(Component {
        kind,
        name: required_name(xml_doc, node)?,
        summary: first_child(node, "summary").map(description),
        desc: first_child(node, "desc").map(description),
        secdesc: first_child(node, "secdesc").map(description),
        params,
    })
}

/// Convert the children of a descriptive element into a [`Description`].
///
/// Whitespace-only text between elements is formatting, not content, and is
/// dropped; every kept text run is trimmed.
fn description(node: Node) -> Description {
    let mut nodes = Vec::new();
    for child in node.children() {
        if child.is_text() {
            let text = child.text().unwrap_or_default().trim();
            if !text.is_empty() {
                nodes.push(DescNode::Text(text.to_string()));
            }
        } else if child.has_tag_name("p") {
            nodes.push(paragraph(child));
        }
    }
    Description::new(nodes)
}

fn paragraph(node: Node) -> DescNode {
    let text = node
        .first_child()
        .filter(Node::is_text)
        .and_then(|t| t.text())
        .unwrap_or_default()
        .trim()
        .to_string();
    let lists = element_children(node, "ul")
        .map(|ul| {
            ul.descendants()
                .filter(|n| n.has_tag_name("li"))
                .map(|li| li.text().unwrap_or_default().trim().to_string())
                .collect()
        })
        .collect();
    DescNode::Paragraph { text, lists }
}

fn required_name(xml_doc: &Document, node: Node) -> anyhow::Result<String> {
    match node.attribute("name") {
        Some(name) => Ok(name.to_string()),
        None => {
            let pos = xml_doc.text_pos_at(node.range().start);
            Err(PolicyError::MissingName {
                element: node.tag_name().name().to_string(),
                row: pos.row,
                col: pos.col,
            }
            .into())
        }
    }
}

/// Direct element children with the given tag. Never descends.
fn element_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |c| c.has_tag_name(tag))
}

fn first_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| c.has_tag_name(tag))
}
