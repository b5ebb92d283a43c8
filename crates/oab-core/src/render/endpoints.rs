//! The `ENDPOINTS:` section: one block per operation.

use std::fmt::Write;

use indexmap::IndexMap;

use crate::normalize::{DocumentView, SpecVersion};
use crate::parse::media_type::MediaType;
use crate::parse::operation::Operation;
use crate::parse::parameter::{Parameter, ParameterOrRef};
use crate::parse::request_body::RequestBody;
use crate::parse::response::Response;
use crate::parse::schema::TypeSet;

use super::context::RenderContext;
use super::refs::resolve_parameter;
use super::type_renderer::{join_values, type_label};

pub fn endpoints_section(view: &DocumentView<'_>) -> String {
    let mut out = String::from("ENDPOINTS:\n\n");
    for (path, item) in &view.document().paths {
        for (method, op) in item.operations() {
            operation_block(&mut out, view, method, path, &item.parameters, op);
        }
    }
    out
}

fn operation_block(
    out: &mut String,
    view: &DocumentView<'_>,
    method: &str,
    path: &str,
    shared_params: &[ParameterOrRef],
    op: &Operation,
) {
    let _ = writeln!(out, "{method} {path}");
    if let Some(summary) = op.summary.as_deref() {
        let _ = writeln!(out, "  Summary: {summary}");
    }

    // Path-item parameters come first; unresolvable references are dropped,
    // and if nothing survives the heading is omitted with them.
    let lines: Vec<String> = shared_params
        .iter()
        .chain(&op.parameters)
        .filter_map(|p| resolved(view, p))
        .map(|p| parameter_line(view.version(), p))
        .collect();
    if !lines.is_empty() {
        out.push_str("  Parameters:\n");
        for line in &lines {
            let _ = writeln!(out, "    {line}");
        }
    }

    if let Some(body) = op.request_body.as_ref() {
        request_body_block(out, body);
    }

    if !op.responses.is_empty() {
        out.push_str("  Responses:\n");
        for (status, resp) in &op.responses {
            response_block(out, view.version(), status, resp);
        }
    }
    out.push('\n');
}

fn resolved<'v>(view: &'v DocumentView<'_>, param: &'v ParameterOrRef) -> Option<&'v Parameter> {
    match param {
        ParameterOrRef::Parameter(p) => Some(p),
        ParameterOrRef::Ref { ref_path } => resolve_parameter(view, ref_path),
    }
}

/// One `- <name> (<in>, <type> (<required|optional>)): <description>` line.
fn parameter_line(version: SpecVersion, param: &Parameter) -> String {
    let type_text = match version {
        SpecVersion::OpenApiV3 => type_label(param.schema.as_ref(), RenderContext::Parameter),
        SpecVersion::SwaggerV2 => swagger_parameter_type(param),
    };
    let requirement = if param.required { "required" } else { "optional" };
    let description = param.description.as_deref().unwrap_or("No description");
    format!(
        "- {} ({}, {} ({})): {}",
        param.name, param.location, type_text, requirement, description
    )
}

/// Swagger 2.0 parameters carry their type directly: the declared string
/// renders as-is (including `file`, which has no 3.x equivalent), with the
/// parameter's own enum appended. Body parameters still nest a schema and
/// render like their 3.x counterparts.
fn swagger_parameter_type(param: &Parameter) -> String {
    let Some(declared) = param.param_type.as_ref().and_then(TypeSet::primary) else {
        return type_label(param.schema.as_ref(), RenderContext::Parameter);
    };
    if param.enum_values.is_empty() {
        declared.to_string()
    } else {
        format!("{declared} [{}]", join_values(&param.enum_values))
    }
}

fn request_body_block(out: &mut String, body: &RequestBody) {
    out.push_str("  Request Body:\n");
    if let Some((media_type, mt)) = preferred_content(&body.content) {
        let _ = writeln!(out, "    Content: {media_type}");
        let _ = writeln!(
            out,
            "    Schema: {}",
            type_label(mt.schema.as_ref(), RenderContext::RequestBody)
        );
    }
}

fn response_block(out: &mut String, version: SpecVersion, status: &str, resp: &Response) {
    let description = resp.description.as_deref().unwrap_or("No description");
    let _ = writeln!(out, "    {status}: {description}");
    match version {
        SpecVersion::OpenApiV3 => {
            if let Some((media_type, mt)) = preferred_content(&resp.content) {
                let _ = writeln!(out, "      Content: {media_type}");
                let _ = writeln!(
                    out,
                    "      Schema: {}",
                    type_label(mt.schema.as_ref(), RenderContext::Response)
                );
            }
        }
        // 2.0 has no content map; the schema sits on the response itself.
        SpecVersion::SwaggerV2 => {
            if resp.schema.is_some() {
                let _ = writeln!(
                    out,
                    "      Schema: {}",
                    type_label(resp.schema.as_ref(), RenderContext::Response)
                );
            }
        }
    }
}

/// Prefer `application/json`, else the first declared media type.
fn preferred_content(content: &IndexMap<String, MediaType>) -> Option<(&str, &MediaType)> {
    content
        .get_key_value("application/json")
        .or_else(|| content.first())
        .map(|(k, v)| (k.as_str(), v))
}
