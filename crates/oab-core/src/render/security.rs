//! The `SECURITY:` section: a flat dispatch over scheme types, one line each.

use std::fmt::Write;

use indexmap::IndexMap;

use crate::parse::security::SecurityScheme;

/// Render the section, or `None` when no schemes are declared.
pub fn security_section(schemes: &IndexMap<String, SecurityScheme>) -> Option<String> {
    if schemes.is_empty() {
        return None;
    }
    let mut out = String::from("SECURITY:\n");
    for (name, scheme) in schemes {
        let _ = writeln!(out, "- {name}: {}", scheme_line(scheme));
    }
    Some(out)
}

/// Unknown scheme types render their type string verbatim rather than
/// dropping the line.
fn scheme_line(scheme: &SecurityScheme) -> String {
    match scheme.scheme_type.as_str() {
        "apiKey" => format!(
            "API key in {} '{}'",
            scheme.location.as_deref().unwrap_or("header"),
            scheme.name.as_deref().unwrap_or("unknown"),
        ),
        "http" => {
            let kind = scheme.scheme.as_deref().unwrap_or("unknown");
            match scheme.bearer_format.as_deref() {
                Some(format) => format!("HTTP {kind} ({format})"),
                None => format!("HTTP {kind}"),
            }
        }
        // Swagger 2.0 spelling of HTTP basic auth.
        "basic" => "HTTP basic".to_string(),
        "oauth2" => {
            let flows = oauth_flow_names(scheme);
            if flows.is_empty() {
                "OAuth2".to_string()
            } else {
                format!("OAuth2 ({})", flows.join(", "))
            }
        }
        "openIdConnect" => "OpenID Connect".to_string(),
        other => other.to_string(),
    }
}

fn oauth_flow_names(scheme: &SecurityScheme) -> Vec<&str> {
    // Swagger 2.0 names its single flow directly.
    if let Some(flow) = scheme.flow.as_deref() {
        return vec![flow];
    }
    let Some(flows) = scheme.flows.as_ref() else {
        return Vec::new();
    };
    let mut names = Vec::new();
    if flows.implicit.is_some() {
        names.push("implicit");
    }
    if flows.password.is_some() {
        names.push("password");
    }
    if flows.client_credentials.is_some() {
        names.push("clientCredentials");
    }
    if flows.authorization_code.is_some() {
        names.push("authorizationCode");
    }
    names
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn schemes(value: serde_json::Value) -> IndexMap<String, SecurityScheme> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_section_renders_nothing() {
        assert!(security_section(&IndexMap::new()).is_none());
    }

    #[test]
    fn scheme_lines_per_kind() {
        let out = security_section(&schemes(json!({
            "apiKeyAuth": { "type": "apiKey", "in": "header", "name": "X-API-Key" },
            "bearerAuth": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" },
            "basicAuth": { "type": "basic" },
            "oidc": { "type": "openIdConnect", "openIdConnectUrl": "https://x/.well-known" },
            "legacyOauth": { "type": "oauth2", "flow": "implicit" },
            "oauth": { "type": "oauth2", "flows": { "password": {}, "authorizationCode": {} } },
        })))
        .unwrap();
        assert!(out.contains("- apiKeyAuth: API key in header 'X-API-Key'\n"));
        assert!(out.contains("- bearerAuth: HTTP bearer (JWT)\n"));
        assert!(out.contains("- basicAuth: HTTP basic\n"));
        assert!(out.contains("- oidc: OpenID Connect\n"));
        assert!(out.contains("- legacyOauth: OAuth2 (implicit)\n"));
        assert!(out.contains("- oauth: OAuth2 (password, authorizationCode)\n"));
    }

    #[test]
    fn unknown_scheme_type_passes_through() {
        let out = security_section(&schemes(json!({
            "odd": { "type": "mutualTLS" },
        })))
        .unwrap();
        assert!(out.contains("- odd: mutualTLS\n"));
    }
}
