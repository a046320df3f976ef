// Output naming conventions for the Bedrock resource pack.
//
// Everything here is a pure function of namespace/id/kind so that the geometry,
// attachable, icon and texture paths of one object always agree with each other.

use crate::kind::ObjectKind;

/// Lowercases and replaces anything outside `[a-z0-9_]` with `_`.
/// Blank input becomes `unknown`.
pub fn sanitize(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return "unknown".to_string();
    }
    trimmed
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

pub fn bedrock_identifier(namespace: &str, id: &str) -> String {
    format!("{namespace}:{id}")
}

pub fn geometry_identifier(kind: ObjectKind, namespace: &str, id: &str) -> String {
    format!("geometry.{}.{namespace}.{id}", kind.tag())
}

pub fn geometry_rel(namespace: &str, id: &str) -> String {
    format!(
        "models/entity/{}/{}.geo.json",
        sanitize(namespace),
        sanitize(id)
    )
}

pub fn attachable_rel(namespace: &str, id: &str) -> String {
    format!("attachables/{}/{}.json", sanitize(namespace), sanitize(id))
}

pub fn icon_rel(namespace: &str, id: &str) -> String {
    format!("textures/items/{}/{}.png", sanitize(namespace), sanitize(id))
}

/// Destination of a model texture inside the pack. The file name is kept as-is
/// (minus any directory part) so several slots pointing at one file share it.
pub fn model_texture_rel(namespace: &str, file_name: &str) -> String {
    let file_name = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    format!("textures/models/{}/{file_name}", sanitize(namespace))
}
