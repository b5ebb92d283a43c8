use crate::normalize::DocumentView;
use crate::parse::parameter::Parameter;

/// Display name for a local `$ref`: the segment after the last `/`. The
/// target's shape is never inspected.
pub fn ref_display_name(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}

/// Resolve a parameter reference through the version-appropriate collection.
/// Single-hop and local only; a miss means the caller drops the parameter.
pub fn resolve_parameter<'v>(
    view: &'v DocumentView<'_>,
    ref_path: &str,
) -> Option<&'v Parameter> {
    let param = view.parameter(ref_display_name(ref_path));
    if param.is_none() {
        log::debug!("dropping unresolvable parameter ref {ref_path}");
    }
    param
}
